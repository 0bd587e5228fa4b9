//! Breakpoint translation from a base module into an extension module.
//!
//! A replacing procedure (`&Вместо`, `&ИзменениеИКонтроль`) gets the line at
//! the same relative position inside its body. A procedure running after or
//! before the base one has no positional correspondence, so every breakpoint
//! lands on its first body line.

use log::{debug, trace};
use serde::Serialize;

use crate::types::{Directive, ProcedureRecord};

const REPLACING: &[Directive] = &[Directive::Replacement];
const SUPPLEMENTING: &[Directive] = &[Directive::After, Directive::Before];

/// Result for one requested base line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakpointMapping {
    pub base_line: usize,
    /// Empty when no extension line corresponds
    pub extension_lines: Vec<usize>,
}

impl BreakpointMapping {
    pub fn is_mapped(&self) -> bool {
        !self.extension_lines.is_empty()
    }
}

/// Map a 1-based base line to the corresponding extension line(s).
///
/// Returns at most one line today; the sequence leaves room for procedures
/// bound more than once.
pub fn map_breakpoint(
    base: &[ProcedureRecord],
    base_line: usize,
    extension: &[ProcedureRecord],
) -> Vec<usize> {
    let Some(base_proc) = base.iter().find(|p| p.contains_line(base_line)) else {
        trace!("line {} is outside every base procedure", base_line);
        return Vec::new();
    };

    if let Some(ext_proc) = extension
        .iter()
        .find(|p| p.targets(&base_proc.name, REPLACING))
    {
        let line = proportional_line(base_proc, base_line, ext_proc);
        debug!(
            "{}:{} replaced by {} -> {}",
            base_proc.name, base_line, ext_proc.name, line
        );
        return vec![line];
    }

    if let Some(ext_proc) = extension
        .iter()
        .find(|p| p.targets(&base_proc.name, SUPPLEMENTING))
    {
        let line = ext_proc.start_line + 1;
        debug!(
            "{}:{} supplemented by {} -> {}",
            base_proc.name, base_line, ext_proc.name, line
        );
        return vec![line];
    }

    trace!("{} is not bound in the extension", base_proc.name);
    Vec::new()
}

/// Map a batch of base lines, preserving request order
pub fn map_all(
    base: &[ProcedureRecord],
    base_lines: &[usize],
    extension: &[ProcedureRecord],
) -> Vec<BreakpointMapping> {
    base_lines
        .iter()
        .map(|&base_line| BreakpointMapping {
            base_line,
            extension_lines: map_breakpoint(base, base_line, extension),
        })
        .collect()
}

fn proportional_line(base: &ProcedureRecord, base_line: usize, ext: &ProcedureRecord) -> usize {
    let base_height = base.height();
    let ext_height = ext.height();
    let first_body_line = ext.start_line + 1;

    if base_height <= 0 || ext_height <= 0 {
        return first_body_line;
    }

    let ratio = (base_line - base.start_line) as f64 / base_height as f64;
    let projected = (ext.start_line as f64 + ratio * ext_height as f64).round() as usize;

    // Upper bound first: a one-line-high body still yields its first line.
    projected
        .min(ext.end_line.saturating_sub(1))
        .max(first_body_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::parse_module;
    use crate::types::{DirectiveBinding, ProcedureKind};

    fn record(name: &str, start: usize, end: usize) -> ProcedureRecord {
        ProcedureRecord::new(ProcedureKind::Procedure, name.to_string(), start, end)
    }

    fn bound(
        name: &str,
        start: usize,
        end: usize,
        directive: Directive,
        target: &str,
    ) -> ProcedureRecord {
        record(name, start, end).with_binding(DirectiveBinding::new(directive, target))
    }

    #[test]
    fn test_reference_scenario() {
        let base = parse_module("Процедура Тест()\n  А = 1;\nКонецПроцедуры\n");
        let ext = parse_module(
            "&Вместо(\"Тест\")\nПроцедура Тест()\n  Б = 2;\n  В = 3;\nКонецПроцедуры\n",
        );
        assert_eq!(map_breakpoint(&base, 2, &ext), vec![4]);
    }

    #[test]
    fn test_equal_height_is_one_to_one() {
        let base = vec![record("Тест", 10, 20)];
        let ext = vec![bound("Расш", 3, 13, Directive::Replacement, "Тест")];
        for k in 1..10 {
            assert_eq!(map_breakpoint(&base, 10 + k, &ext), vec![3 + k]);
        }
    }

    #[test]
    fn test_replacement_clamped_inside_body() {
        let base = vec![record("Тест", 1, 5)];
        let ext = vec![bound("Расш", 1, 9, Directive::Replacement, "Тест")];
        assert_eq!(map_breakpoint(&base, 1, &ext), vec![2]);
        assert_eq!(map_breakpoint(&base, 5, &ext), vec![8]);
    }

    #[test]
    fn test_degenerate_heights() {
        let base = vec![record("Тест", 4, 4)];
        let ext = vec![bound("Расш", 7, 12, Directive::Replacement, "Тест")];
        assert_eq!(map_breakpoint(&base, 4, &ext), vec![8]);

        let base = vec![record("Тест", 1, 5)];
        let ext = vec![bound("Расш", 7, 7, Directive::Replacement, "Тест")];
        assert_eq!(map_breakpoint(&base, 3, &ext), vec![8]);
    }

    #[test]
    fn test_one_line_high_extension_body() {
        let base = vec![record("Тест", 1, 10)];
        let ext = vec![bound("Расш", 20, 21, Directive::Replacement, "Тест")];
        assert_eq!(map_breakpoint(&base, 9, &ext), vec![21]);
    }

    #[test]
    fn test_after_and_before_are_fixed() {
        for directive in [Directive::After, Directive::Before] {
            let base = vec![record("Тест", 1, 30)];
            let ext = vec![bound("Расш", 5, 8, directive, "Тест")];
            for line in 1..=30 {
                assert_eq!(map_breakpoint(&base, line, &ext), vec![6]);
            }
        }
    }

    #[test]
    fn test_replacement_preferred_over_after() {
        let base = vec![record("Тест", 1, 3)];
        let ext = vec![
            bound("После", 1, 4, Directive::After, "Тест"),
            bound("Вместо", 6, 9, Directive::Replacement, "Тест"),
        ];
        assert_eq!(map_breakpoint(&base, 2, &ext), vec![8]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let base = vec![record("ПриЗаписи", 1, 3)];
        let ext = vec![bound("Расш", 1, 3, Directive::Before, "призаписи")];
        assert_eq!(map_breakpoint(&base, 2, &ext), vec![2]);
    }

    #[test]
    fn test_unmapped_cases() {
        let base = vec![record("Тест", 5, 8)];
        let ext = vec![bound("Расш", 1, 4, Directive::Replacement, "Тест")];
        assert!(map_breakpoint(&base, 4, &ext).is_empty());
        assert!(map_breakpoint(&base, 9, &ext).is_empty());

        let unrelated = vec![
            bound("Расш", 1, 4, Directive::Replacement, "Другая"),
            record("Тест", 6, 9),
        ];
        assert!(map_breakpoint(&base, 6, &unrelated).is_empty());
        assert!(map_breakpoint(&[], 1, &ext).is_empty());
    }

    #[test]
    fn test_first_containing_record_wins() {
        let base = vec![record("Первая", 1, 3), record("Вторая", 5, 7)];
        let ext = vec![bound("Расш", 10, 12, Directive::After, "Вторая")];
        assert!(map_breakpoint(&base, 2, &ext).is_empty());
        assert_eq!(map_breakpoint(&base, 6, &ext), vec![11]);
    }

    #[test]
    fn test_map_all_keeps_order_and_is_deterministic() {
        let base = vec![record("Тест", 1, 3)];
        let ext = vec![bound("Расш", 2, 5, Directive::Replacement, "Тест")];
        let first = map_all(&base, &[3, 9, 2], &ext);
        let second = map_all(&base, &[3, 9, 2], &ext);
        assert_eq!(first, second);
        assert_eq!(first[0].base_line, 3);
        assert_eq!(first[0].extension_lines, vec![4]);
        assert!(!first[1].is_mapped());
        assert_eq!(first[2].extension_lines, vec![4]);
    }
}
