pub mod lang;

use lang::{BslParser, LanguageParser};
use log::debug;

use crate::types::ProcedureRecord;

/// Parse module text into its terminated procedures, in source order
pub fn parse_module(content: &str) -> Vec<ProcedureRecord> {
    let records = BslParser.parse_procedures(content);
    debug!("parsed {} procedure(s)", records.len());
    records
}
