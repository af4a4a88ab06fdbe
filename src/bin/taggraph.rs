// src/bin/taggraph.rs
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taggraph_core::graph::TagGraph;
use taggraph_core::render;
use taggraph_core::scan;
use taggraph_core::source::SourceRegistry;

#[derive(Parser)]
#[command(name = "taggraph", version, about = "Builds a document/tag association graph")]
struct Cli {
    /// Documents to scan, relative to the working directory
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Where to write the DOT graph description
    #[arg(long, short, value_name = "FILE", default_value = "./mygraph.gv")]
    output: PathBuf,

    /// Print each source and its tags while building the graph
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let names: Vec<String> = cli.inputs.iter().map(|p| p.display().to_string()).collect();
    println!("Processing {} files: {}", cli.inputs.len(), names.join(", ").cyan());

    let mut registry = SourceRegistry::new();
    scan::scan_sources(&cli.inputs, &mut registry)?;

    let sources = registry.sources();
    if cli.verbose {
        for source in &sources {
            let tags: Vec<&str> = source.tags.iter().map(|t| t.name.as_str()).collect();
            println!("  {} -> [{}]", source.name.blue(), tags.join(", ").green());
        }
    }

    let graph = TagGraph::build(sources);
    render::write_dot(&graph, &cli.output)?;

    println!(
        "{}",
        format!(
            "✅ Wrote {} ({} vertices, {} edges)",
            cli.output.display(),
            graph.vertex_count(),
            graph.edge_count()
        )
        .green()
        .bold()
    );
    Ok(())
}
