//! CLI argument definitions for the dotstore binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and edit a dotstore JSON file
#[derive(Parser, Debug)]
#[command(name = "dotstore")]
#[command(about = "dotstore: read and write nested values by dotted path")]
#[command(version)]
pub struct Cli {
    /// Store file to operate on
    #[arg(short, long, default_value = "dotstore.json", env = "DOTSTORE_FILE")]
    pub file: PathBuf,

    /// Pretty-print JSON output and the written store file
    #[arg(long)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(PathArgs),
    /// Store a value at a path, creating missing parents
    Set(SetArgs),
    /// Remove the value at a path
    Del(PathArgs),
    /// List top-level entries in insertion order
    All(AllArgs),
    /// Print the type tag of the value at a path
    Type(PathArgs),
}

/// Arguments for commands that take a single path
#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Dotted path, e.g. `user.profile.name`
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dotted path, e.g. `user.profile.name`
    pub path: String,

    /// Value as JSON; anything that does not parse is stored as a plain string
    pub value: String,
}

/// Arguments for the all command
#[derive(clap::Args, Debug)]
pub struct AllArgs {
    /// Maximum number of entries to list (0 lists everything)
    #[arg(short, long, default_value_t = 0)]
    pub limit: usize,
}
