use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Map breakpoints from 1C:Enterprise base modules into extension modules.
#[derive(Debug, Parser)]
#[command(name = "bsl-extmap", version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: ./bsl-extmap.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the procedures and functions of a module
    Outline {
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Map base-module breakpoint lines into an extension module
    Map {
        /// Base module
        #[arg(short, long)]
        base: PathBuf,

        /// Extension module
        #[arg(short, long)]
        extension: PathBuf,

        /// 1-based line in the base module (repeatable)
        #[arg(short, long = "line", required = true, num_args = 1..)]
        lines: Vec<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Debug server helpers
    Server {
        #[command(subcommand)]
        action: ServerAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ServerAction {
    /// Print the resolved debug server executable
    Locate,

    /// Print the first free port of the configured range
    Port,

    /// Start the debug server and remember the launch
    Launch {
        /// Use this port instead of scanning the configured range
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the most recent launch
    Last {
        #[arg(long)]
        json: bool,
    },
}
