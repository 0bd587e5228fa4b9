//! Reading module sources for the mapper.
//!
//! Resolution is fallible; the translator never hands partial content to the
//! parser and reports "no mapping" instead.

use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analyze::parse_module;
use crate::mapping::{map_all, map_breakpoint, BreakpointMapping};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("module not found: {0}")]
    NotFound(PathBuf),
    #[error("module is not valid UTF-8: {0}")]
    Encoding(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Source of module text
pub trait SourceResolver {
    fn read(&self, path: &Path) -> Result<String, ResolveError>;
}

/// Reads modules from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsResolver;

impl SourceResolver for FsResolver {
    fn read(&self, path: &Path) -> Result<String, ResolveError> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ResolveError::NotFound(path.to_path_buf()),
            io::ErrorKind::InvalidData => ResolveError::Encoding(path.to_path_buf()),
            _ => ResolveError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })
    }
}

/// Resolves a base/extension pair and maps breakpoints between them
pub struct BreakpointTranslator<R: SourceResolver> {
    resolver: R,
}

impl Default for BreakpointTranslator<FsResolver> {
    fn default() -> Self {
        Self::new(FsResolver)
    }
}

impl<R: SourceResolver> BreakpointTranslator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn translate(&self, base_path: &Path, base_line: usize, ext_path: &Path) -> Vec<usize> {
        match self.read_pair(base_path, ext_path) {
            Some((base, ext)) => {
                map_breakpoint(&parse_module(&base), base_line, &parse_module(&ext))
            }
            None => Vec::new(),
        }
    }

    /// Every line maps to nothing when either module cannot be read
    pub fn translate_all(
        &self,
        base_path: &Path,
        base_lines: &[usize],
        ext_path: &Path,
    ) -> Vec<BreakpointMapping> {
        match self.read_pair(base_path, ext_path) {
            Some((base, ext)) => map_all(&parse_module(&base), base_lines, &parse_module(&ext)),
            None => base_lines
                .iter()
                .map(|&base_line| BreakpointMapping {
                    base_line,
                    extension_lines: Vec::new(),
                })
                .collect(),
        }
    }

    fn read_pair(&self, base_path: &Path, ext_path: &Path) -> Option<(String, String)> {
        let read = |path: &Path| match self.resolver.read(path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("{}; breakpoints left unmapped", e);
                None
            }
        };
        Some((read(base_path)?, read(ext_path)?))
    }
}
