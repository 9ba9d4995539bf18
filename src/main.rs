use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod formatters;
mod parsers;

use crate::core::{GraphAssembler, SourceAnalyzer};
use crate::formatters::{DotFormatter, JsonFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "jdepgraph",
    version = "0.1.0",
    author = "jdepgraph developers",
    about = "Class-level dependency graph extraction for Java source trees"
)]
struct Cli {
    /// Root directory of the Java sources to analyze
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "graph.json")]
    output: PathBuf,

    /// Output format: json, dot
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Process files in sorted path order, so that duplicate primary-type
    /// names resolve deterministically
    #[arg(long)]
    stable_order: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Json,
    Dot,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        format,
        pretty,
        stable_order,
    } = cli;

    let start_time = Instant::now();

    let analyzer = SourceAnalyzer::new().with_stable_order(stable_order);
    let dependencies = analyzer.analyze(&input)?;
    println!(
        "Analyzed {} type declarations under {}",
        dependencies.len(),
        input.display()
    );

    let graph = GraphAssembler::assemble(&dependencies);
    println!(
        "Graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    match format {
        OutputFormat::Json => {
            JsonFormatter::new()
                .with_pretty(pretty)
                .format_to_file(&graph, &output)?;
        }
        OutputFormat::Dot => {
            DotFormatter::new().format_to_file(&graph, &output)?;
        }
    }

    println!(
        "Wrote {} in {:.2}s",
        output.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
