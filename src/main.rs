use anyhow::Result;
use clap::Parser;

use bsl_extmap::cli::{self, Args, Command};
use bsl_extmap::config::Config;

fn main() {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    if let Err(e) = run(args) {
        cli::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match &args.command {
        Command::Outline { file, json } => cli::run_outline(file, *json),
        Command::Map {
            base,
            extension,
            lines,
            json,
        } => cli::run_map(base, extension, lines, *json),
        Command::Server { action } => {
            let config = Config::load(args.config.as_deref())?;
            cli::run_server(action, &config)
        }
    }
}
