use crate::analyze::lang::LanguageParser;
use crate::types::{Directive, DirectiveBinding, ProcedureKind, ProcedureRecord};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Line scanner for 1C:Enterprise modules (procedures, functions and
/// extension annotations)
pub struct BslParser;

// &Вместо("ИмяПроцедуры")
static DIRECTIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)&(ИзменениеИКонтроль|ChangeAndValidate|Вместо|Around|После|After|Перед|Before)\s*\(\s*"([^"]*)"\s*\)"#)
        .unwrap()
});

// [Асинх] Процедура Имя(
static DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:Асинх|Async)\s+)?(Процедура|Функция|Procedure|Function)\s+([\p{L}_][\p{L}\p{Nd}_]*)\s*\(")
        .unwrap()
});

const PROCEDURE_TERMINATORS: &[&str] = &["конецпроцедуры", "endprocedure"];
const FUNCTION_TERMINATORS: &[&str] = &["конецфункции", "endfunction"];

impl LanguageParser for BslParser {
    fn parse_procedures(&self, content: &str) -> Vec<ProcedureRecord> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let lines: Vec<&str> = content.lines().collect();

        let mut records = Vec::new();
        let mut pending: Option<DirectiveBinding> = None;

        for (idx, raw) in lines.iter().enumerate() {
            let line = raw.trim();

            if let Some(binding) = match_directive(line) {
                if let Some(dropped) = pending.replace(binding) {
                    trace!(
                        "line {}: directive for {:?} overwritten",
                        idx + 1,
                        dropped.base_proc_name
                    );
                }
                continue;
            }

            let Some((kind, name)) = match_declaration(line) else {
                continue;
            };
            let binding = pending.take();

            // Body lines stay visible to the outer loop; only the
            // terminator search looks past the declaration here.
            match find_terminator(&lines[idx + 1..], kind) {
                Some(offset) => {
                    let start_line = idx + 1;
                    let end_line = idx + 2 + offset;
                    let mut record = ProcedureRecord::new(kind, name, start_line, end_line);
                    if let Some(binding) = binding {
                        record = record.with_binding(binding);
                    }
                    records.push(record);
                }
                None => {
                    trace!("line {}: {} {} has no terminator, skipped", idx + 1, kind, name);
                }
            }
        }

        if let Some(dangling) = pending {
            trace!(
                "directive for {:?} not followed by a declaration",
                dangling.base_proc_name
            );
        }

        records
    }
}

fn match_directive(line: &str) -> Option<DirectiveBinding> {
    let cap = DIRECTIVE_PATTERN.captures(line)?;
    let directive = directive_for(cap.get(1)?.as_str())?;
    let argument = cap.get(2)?.as_str().trim();

    if argument.is_empty() {
        return None;
    }

    Some(DirectiveBinding::new(directive, argument))
}

fn directive_for(keyword: &str) -> Option<Directive> {
    match keyword.to_lowercase().as_str() {
        "вместо" | "изменениеиконтроль" | "around" | "changeandvalidate" => {
            Some(Directive::Replacement)
        }
        "после" | "after" => Some(Directive::After),
        "перед" | "before" => Some(Directive::Before),
        _ => None,
    }
}

fn match_declaration(line: &str) -> Option<(ProcedureKind, String)> {
    let cap = DECLARATION_PATTERN.captures(line)?;
    let kind = match cap.get(1)?.as_str().to_lowercase().as_str() {
        "процедура" | "procedure" => ProcedureKind::Procedure,
        _ => ProcedureKind::Function,
    };
    let name = cap.get(2)?.as_str().to_string();
    Some((kind, name))
}

fn terminators(kind: ProcedureKind) -> &'static [&'static str] {
    match kind {
        ProcedureKind::Procedure => PROCEDURE_TERMINATORS,
        ProcedureKind::Function => FUNCTION_TERMINATORS,
    }
}

/// Offset of the first line that is exactly the paired terminator.
/// Literal text is not excluded: a string or comment line holding only the
/// keyword closes the body too.
fn find_terminator(body: &[&str], kind: ProcedureKind) -> Option<usize> {
    let expected = terminators(kind);
    body.iter().position(|line| {
        let folded = line.trim().to_lowercase();
        expected.contains(&folded.as_str())
    })
}
