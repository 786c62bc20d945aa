use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "relinker")]
#[command(about = "Find where a missing file went", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Last known path of the missing file
    pub missing: PathBuf,
    /// Directories searched for candidates
    #[arg(required = true)]
    pub roots: Vec<PathBuf>,
    /// Minimum similarity index for a guessed match (overrides configuration)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Args)]
pub struct RelinkArgs {
    #[command(flatten)]
    pub search: SearchArgs,
    /// Content hash recorded before the file went missing
    #[arg(long, conflicts_with = "hash_missing")]
    pub hash: Option<String>,
    /// Hash whatever is still at the missing path and search by that
    #[arg(long)]
    pub hash_missing: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find the new location of a missing file
    Relink(RelinkArgs),
    /// List every candidate at or above the similarity threshold
    Rank(SearchArgs),
    /// Show each similarity signal between two files
    Compare { a: PathBuf, b: PathBuf },
    /// Print the content hash of a file
    Hash { file: PathBuf },
    /// Print configuration values
    PrintConfig,
}
