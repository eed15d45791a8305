//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Navigation menu builder: merges module menu fragments and orders them
#[derive(Parser, Debug)]
#[command(name = "webmenu")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "WEBMENU_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the assembled menu
    Tree {
        /// Dotted path of the entry to show (default: whole menu)
        #[arg(short, long)]
        path: Option<String>,
        /// One indented line per entry instead of a tree
        #[arg(long)]
        flat: bool,
        /// Build from flat config sections instead of static entries and modules
        #[arg(long)]
        sections: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a template config file
    Template,
    /// Show config file locations
    Path,
}
