use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coral")]
#[command(version = "0.1.0")]
#[command(about = "Ask natural-language questions over curated content collections", long_about = None)]
pub struct Cli {
    /// Initial site selection (e.g. all, seriouseats, nytimes)
    #[arg(short, long)]
    pub site: Option<String>,

    /// Initial generate mode (list, summarize, generate)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
}
