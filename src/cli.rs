use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ridematch",
    version,
    about = "Electric scooter recommender: ranks a catalog against quiz answers"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding ridematch.toml (defaults to the working directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog and print the top recommendations
    Recommend(RecommendCommand),
    /// Show the full scoring detail for one catalog item
    Explain(ExplainCommand),
    /// List the items in a catalog
    Catalog(CatalogCommand),
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Answer file (JSON or TOML)
    #[arg(long)]
    pub answers: PathBuf,
    /// Catalog file or directory (defaults to catalog.path from config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Number of recommendations to print (at least 1)
    #[arg(long, conflicts_with = "all", value_parser = parse_top_count)]
    pub top: Option<usize>,
    /// Print the full ranking
    #[arg(long)]
    pub all: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ExplainCommand {
    /// Answer file (JSON or TOML)
    #[arg(long)]
    pub answers: PathBuf,
    /// Item id to explain
    #[arg(long)]
    pub item: String,
    /// Catalog file or directory (defaults to catalog.path from config)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CatalogCommand {
    /// Catalog file or directory (defaults to catalog.path from config)
    pub path: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

fn parse_top_count(raw: &str) -> Result<usize, String> {
    let count: usize = raw
        .parse()
        .map_err(|_| format!("invalid count '{raw}', expected a positive integer"))?;
    if count == 0 {
        return Err("count must be at least 1".to_string());
    }
    Ok(count)
}
