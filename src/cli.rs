use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sea-username",
    about = "Random sea-themed display names",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Generate options used when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate names (the default when no subcommand is given)
    Generate(GenerateArgs),

    /// Write the built-in word lists to a TOML file for editing
    Init {
        /// Destination file
        #[arg(default_value = "words.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Maximum name length in characters (integer greater than zero)
    #[arg(long, allow_hyphen_values = true)]
    pub max_size: Option<String>,
    /// How many names to print
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,
    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
    /// TOML file overriding some or all word lists
    #[arg(long)]
    pub words: Option<PathBuf>,
    /// Print a JSON array instead of one name per line
    #[arg(long)]
    pub json: bool,
}
