use chrono::Utc;
use log::info;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{find_debug_server, pick_port, LastLaunchInfo, LastLaunchStore, ServerError};
use crate::config::DebugServerConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub executable: PathBuf,
    pub address: String,
    pub port: u16,
}

pub fn debug_server_args(address: &str, port: u16) -> Vec<String> {
    vec![format!("--addr={}", address), format!("--port={}", port)]
}

/// Spawn the debug server detached from our stdio. The child keeps running
/// after this process exits.
pub fn launch(request: &LaunchRequest) -> Result<LastLaunchInfo, ServerError> {
    let child = Command::new(&request.executable)
        .args(debug_server_args(&request.address, request.port))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ServerError::Spawn {
            path: request.executable.clone(),
            source,
        })?;

    info!(
        "started {} on {}:{} (pid {})",
        request.executable.display(),
        request.address,
        request.port,
        child.id()
    );

    Ok(LastLaunchInfo {
        executable: request.executable.clone(),
        address: request.address.clone(),
        port: request.port,
        pid: child.id(),
        started_at: Utc::now(),
    })
}

/// Locate, pick a port (unless given), launch, and record the launch
pub fn start_debug_server(
    config: &DebugServerConfig,
    store: &LastLaunchStore,
    port: Option<u16>,
) -> Result<LastLaunchInfo, ServerError> {
    let executable = find_debug_server(config)?;

    let port = match port {
        Some(port) => port,
        None => pick_port(config)?,
    };

    let info = launch(&LaunchRequest {
        executable,
        address: config.address.clone(),
        port,
    })?;
    store.record(&info)?;

    Ok(info)
}
