//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::config::OutputFormat;

/// Re-root labeled trees at any node and find the path between two nodes
#[derive(Parser, Debug)]
#[command(name = "pov")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Tree output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a tree
    Show {
        /// Tree in parenthesized notation, e.g. "(a b (c d))"
        tree: String,
    },

    /// Print the tree from the point of view of a node
    Reroot {
        /// Tree in parenthesized notation
        tree: String,
        /// Label of the new root
        label: String,
    },

    /// Print the path between two nodes
    Path {
        /// Tree in parenthesized notation
        tree: String,
        /// Start label
        from: String,
        /// End label
        to: String,
    },

    /// List leaf labels
    Leaves {
        /// Tree in parenthesized notation
        tree: String,
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
    /// Show merged config
    Show,

    /// Show config path
    Path,

    /// Print config template
    Template,
}
