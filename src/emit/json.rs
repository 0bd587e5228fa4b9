use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::mapping::BreakpointMapping;
use crate::types::ProcedureRecord;

#[derive(Serialize)]
pub struct OutlineOutput {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub module: String,
    pub procedures: Vec<ProcedureRecord>,
}

impl OutlineOutput {
    pub fn new(module: String, procedures: Vec<ProcedureRecord>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            module,
            procedures,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
pub struct MappingOutput {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub base: String,
    pub extension: String,
    pub mappings: Vec<BreakpointMapping>,
}

impl MappingOutput {
    pub fn new(base: String, extension: String, mappings: Vec<BreakpointMapping>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            base,
            extension,
            mappings,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
