//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Composite tree toolkit: uniform leaf/branch nodes with recursive aggregation
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the composite demonstration
    Demo,

    /// Render the demonstration tree
    Tree,

    /// Show size metrics of the demonstration tree
    Stats,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init,

    /// Show config paths
    Path,
}
