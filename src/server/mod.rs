//! Debug-server collaborators: install lookup, port scan, process launch and
//! the last-launch record. None of this feeds the breakpoint mapper.

mod install;
mod last;
mod launch;
mod ports;

pub use install::{default_install_roots, executable_name, find_debug_server, find_in_roots};
pub use last::{LastLaunchInfo, LastLaunchStore};
pub use launch::{debug_server_args, launch, start_debug_server, LaunchRequest};
pub use ports::{find_free_port, is_port_free, pick_port};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("debug server executable not found (searched: {searched})")]
    NotFound { searched: String },
    #[error("no free port in {start}..={end} on {address}")]
    NoFreePort { address: String, start: u16, end: u16 },
    #[error("failed to start {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to access launch state {path}: {source}")]
    State {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode launch state {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("corrupt launch state {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
