//! Run-once lifecycle shared by graph algorithms.
//!
//! An algorithm is constructed over its input, `run` once, and then queried.
//! Result accessors on implementors report misuse (query before `run`) through
//! their own error types rather than through the result value.

pub trait Algorithm {
    /// Execute the algorithm. Implementations reset their per-run state, so a
    /// second call recomputes the same result.
    fn run(&mut self);

    /// True once `run` has completed.
    fn has_finished(&self) -> bool;
}
