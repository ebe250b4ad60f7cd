use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cookbook", about = "Recipe cookbook service", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP service
    Serve(ServeArgs),
    /// Normalize a handwritten recipe name
    Parse(ParseArgs),
    /// Summarize a recipe from a JSON file of entries
    Summary(SummaryArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Deepest nesting a summary may walk (overrides the config file)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

#[derive(Args)]
pub struct ParseArgs {
    pub input: String,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// JSON array of entries, in the same shape `POST /entry` accepts
    #[arg(short, long)]
    pub entries: PathBuf,
    /// Recipe to summarize
    pub name: String,
    #[arg(long)]
    pub max_depth: Option<usize>,
}
