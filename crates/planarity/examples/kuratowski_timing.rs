//! Timing probe: planarity verdicts on large subdivided Kuratowski graphs.
//!
//! Purpose
//! - Show that the non-planar verdict on a heavily subdivided K5 / K3,3 costs
//!   about as much as one planar pass over a triangulation of similar size.
//! - Print one line per input: name, nodes, edges, verdict, milliseconds.

use std::time::Instant;

use planarity::api::*;

fn main() {
    let rounds = 200_000;
    let inputs = [
        ("k5_subdivided", subdivide(&complete(5), rounds, 1)),
        ("k33_subdivided", subdivide(&complete_bipartite(3, 3), rounds, 2)),
        (
            "triangulation",
            stacked_triangulation(rounds, 3).expect("n >= 3"),
        ),
    ];
    for (name, g) in &inputs {
        let start = Instant::now();
        let planar = is_planar(g);
        let ms = start.elapsed().as_secs_f64() * 1e3;
        println!(
            "{name}: nodes={} edges={} planar={planar} time_ms={ms:.2}",
            g.number_of_nodes(),
            g.number_of_edges()
        );
    }
}
