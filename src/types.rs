use serde::Serialize;
use std::fmt;

/// Declaration kind. Selects the terminator keyword that closes the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureKind {
    Procedure,
    Function,
}

impl ProcedureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcedureKind::Procedure => "procedure",
            ProcedureKind::Function => "function",
        }
    }
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an extension procedure relates to the base procedure it names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Directive {
    /// &Вместо / &ИзменениеИКонтроль: the base body never runs
    Replacement,
    /// &После: runs after the base body
    After,
    /// &Перед: runs before the base body
    Before,
}

impl Directive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::Replacement => "replacement",
            Directive::After => "after",
            Directive::Before => "before",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directive together with the base procedure it targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveBinding {
    pub directive: Directive,
    pub base_proc_name: String,
}

impl DirectiveBinding {
    pub fn new(directive: Directive, base_proc_name: impl Into<String>) -> Self {
        Self {
            directive,
            base_proc_name: base_proc_name.into(),
        }
    }
}

/// One declared procedure or function with resolved line boundaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureRecord {
    /// Identifier with original casing
    pub name: String,
    pub kind: ProcedureKind,
    /// 1-based line of the declaration keyword
    pub start_line: usize,
    /// 1-based line of the terminator keyword
    pub end_line: usize,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub binding: Option<DirectiveBinding>,
}

impl ProcedureRecord {
    pub fn new(kind: ProcedureKind, name: String, start_line: usize, end_line: usize) -> Self {
        Self {
            name,
            kind,
            start_line,
            end_line,
            binding: None,
        }
    }

    pub fn with_binding(mut self, binding: DirectiveBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn directive(&self) -> Option<Directive> {
        self.binding.as_ref().map(|b| b.directive)
    }

    pub fn base_proc_name(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.base_proc_name.as_str())
    }

    /// Inclusive containment of a 1-based line
    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Lines between declaration and terminator. Zero for degenerate bodies.
    pub fn height(&self) -> i64 {
        self.end_line as i64 - self.start_line as i64
    }

    /// True when this record binds `base_name` through one of `directives`
    pub fn targets(&self, base_name: &str, directives: &[Directive]) -> bool {
        match &self.binding {
            Some(b) => {
                directives.contains(&b.directive) && names_match(&b.base_proc_name, base_name)
            }
            None => false,
        }
    }
}

/// Case-insensitive identifier comparison. Plain Unicode lowercase folding,
/// so Latin and Cyrillic look-alikes stay distinct.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
