mod args;
mod map;
mod outline;
mod server;
mod theme;

pub use args::{Args, Command, ServerAction};
pub use map::run_map;
pub use outline::run_outline;
pub use server::run_server;
pub use theme::print_error;

use log::LevelFilter;

/// `RUST_LOG` wins over `-v`
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
