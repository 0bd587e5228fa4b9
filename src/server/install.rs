use log::{debug, trace};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ServerError;
use crate::config::DebugServerConfig;

/// Platform directories that hold `<version>/bin/<debug server>`
pub fn default_install_roots() -> Vec<PathBuf> {
    if cfg!(windows) {
        vec![
            PathBuf::from(r"C:\Program Files\1cv8"),
            PathBuf::from(r"C:\Program Files (x86)\1cv8"),
        ]
    } else {
        vec![PathBuf::from("/opt/1cv8"), PathBuf::from("/opt/1C/v8.3")]
    }
}

pub fn executable_name() -> &'static str {
    if cfg!(windows) {
        "dbgs.exe"
    } else {
        "dbgs"
    }
}

/// Resolve the debug-server executable: explicit config path first, then the
/// newest platform version under the configured or default install roots.
pub fn find_debug_server(config: &DebugServerConfig) -> Result<PathBuf, ServerError> {
    if let Some(executable) = &config.executable {
        if executable.is_file() {
            return Ok(executable.clone());
        }
        return Err(ServerError::NotFound {
            searched: executable.display().to_string(),
        });
    }

    let roots = match &config.install_root {
        Some(root) => vec![root.clone()],
        None => default_install_roots(),
    };

    find_in_roots(&roots, executable_name()).ok_or_else(|| ServerError::NotFound {
        searched: roots
            .iter()
            .map(|r| r.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Highest-versioned `<root>/<version>/bin/<exe_name>` across all roots
pub fn find_in_roots(roots: &[PathBuf], exe_name: &str) -> Option<PathBuf> {
    let mut best: Option<(Vec<u32>, PathBuf)> = None;

    for root in roots {
        if !root.is_dir() {
            trace!("install root {} does not exist", root.display());
            continue;
        }

        for entry in WalkDir::new(root)
            .min_depth(3)
            .max_depth(3)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() || entry.file_name() != exe_name {
                continue;
            }
            let Some(version) = version_of(root, entry.path()) else {
                continue;
            };
            debug!("found {} ({})", entry.path().display(), format_version(&version));

            if best.as_ref().map_or(true, |(v, _)| version > *v) {
                best = Some((version, entry.into_path()));
            }
        }
    }

    best.map(|(_, path)| path)
}

/// Version of `<root>/<version>/bin/<exe>`, `None` for any other layout
fn version_of(root: &Path, exe: &Path) -> Option<Vec<u32>> {
    let relative = exe.strip_prefix(root).ok()?;
    let mut parts = relative.iter();
    let version = parts.next()?.to_str()?;
    if parts.next()? != "bin" {
        return None;
    }
    parse_version(version)
}

fn parse_version(s: &str) -> Option<Vec<u32>> {
    s.split('.').map(|part| part.parse().ok()).collect()
}

fn format_version(version: &[u32]) -> String {
    version
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
