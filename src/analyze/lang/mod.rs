mod bsl;

pub use bsl::BslParser;

use crate::types::ProcedureRecord;

pub trait LanguageParser {
    /// Extract terminated procedure records in declaration order
    fn parse_procedures(&self, content: &str) -> Vec<ProcedureRecord>;
}
