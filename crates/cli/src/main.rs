use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planarity::api::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod edges;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "planarity")]
#[command(about = "Planarity checks on edge-list files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test an edge-list CSV and print the verdict as JSON
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "source")]
        source_col: String,
        #[arg(long, default_value = "target")]
        target_col: String,
        /// Node count; defaults to the largest id in the file plus one
        #[arg(long)]
        nodes: Option<usize>,
        /// Also write the verdict (and a provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the edge list of a named graph family
    Generate {
        #[arg(long, value_enum)]
        family: Family,
        #[arg(long, default_value_t = 5)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    Path,
    Cycle,
    Complete,
    CompleteBipartite,
    Wheel,
    Grid,
    Hypercube,
    Petersen,
    RandomTree,
    Triangulation,
}

impl Family {
    fn build(self, size: usize, seed: u64) -> Result<Graph> {
        let g = match self {
            Family::Path => path(size),
            Family::Cycle => cycle(size)?,
            Family::Complete => complete(size),
            Family::CompleteBipartite => complete_bipartite(size, size),
            Family::Wheel => wheel(size)?,
            Family::Grid => grid(size, size),
            Family::Hypercube => hypercube(u32::try_from(size).context("dimension too large")?)?,
            Family::Petersen => petersen(),
            Family::RandomTree => random_tree(size, seed),
            Family::Triangulation => stacked_triangulation(size, seed)?,
        };
        Ok(g)
    }
}

#[derive(Debug, Serialize)]
struct Verdict {
    planar: bool,
    nodes: usize,
    edges: usize,
    components: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check {
            input,
            source_col,
            target_col,
            nodes,
            out,
        } => {
            let verdict = check(&input, &source_col, &target_col, nodes)?;
            println!("{}", serde_json::to_string_pretty(&verdict)?);
            if let Some(out) = out {
                write_verdict(&out, &verdict, &input)?;
            }
            Ok(())
        }
        Action::Generate {
            family,
            size,
            seed,
            out,
        } => generate(family, size, seed, &out),
        Action::Report => report(),
    }
}

fn check(
    input: &Path,
    source_col: &str,
    target_col: &str,
    nodes: Option<usize>,
) -> Result<Verdict> {
    let edge_list = edges::read_edge_list(input, source_col, target_col)?;
    let n = match nodes {
        Some(n) => n,
        None => implied_node_count(&edge_list)?,
    };
    let g = Graph::from_edges(n, edge_list)
        .with_context(|| format!("building graph from {}", input.display()))?;
    tracing::info!(
        input = %input.display(),
        nodes = g.number_of_nodes(),
        edges = g.number_of_edges(),
        "check"
    );
    let mut test = LeftRightPlanarityTest::new(&g);
    test.run();
    let verdict = Verdict {
        planar: test.is_planar()?,
        nodes: g.number_of_nodes(),
        edges: g.number_of_edges(),
        components: test.roots()?.len(),
    };
    tracing::info!(planar = verdict.planar, components = verdict.components, "verdict");
    Ok(verdict)
}

/// Implied node counts above this, and above `IMPLIED_NODES_PER_EDGE` times
/// the edge count, need an explicit `--nodes`.
const IMPLIED_NODES_FLOOR: usize = 1 << 20;
const IMPLIED_NODES_PER_EDGE: usize = 16;

fn implied_node_count(edge_list: &[(NodeId, NodeId)]) -> Result<usize> {
    let max = edge_list.iter().map(|&(a, b)| a.max(b)).max().unwrap_or(0);
    let Some(n) = edges::implied_nodes(edge_list) else {
        bail!("node id {max} is too large; pass --nodes");
    };
    let limit = edge_list
        .len()
        .saturating_mul(IMPLIED_NODES_PER_EDGE)
        .max(IMPLIED_NODES_FLOOR);
    if n > limit {
        bail!("node id {max} implies {n} nodes; pass --nodes");
    }
    Ok(n)
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_verdict(out: &Path, verdict: &Verdict, input: &Path) -> Result<()> {
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(verdict)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(serde_json::json!({
        "command": "check",
        "input": input.to_string_lossy(),
    }));
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote verdict");
    Ok(())
}

fn generate(family: Family, size: usize, seed: u64, out: &Path) -> Result<()> {
    let g = family.build(size, seed)?;
    tracing::info!(
        family = ?family,
        size,
        seed,
        nodes = g.number_of_nodes(),
        edges = g.number_of_edges(),
        "generate"
    );
    edges::write_edge_list(out, &g)?;
    let payload = Payload::new(serde_json::json!({
        "command": "generate",
        "family": format!("{family:?}"),
        "size": size,
        "seed": seed,
    }));
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "planarity_version": planarity::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
