use crate::source_map::Range;

pub const W_LITERAL_CARET: &str = "W_LITERAL_CARET";
pub const W_LITERAL_CLOSE: &str = "W_LITERAL_CLOSE";
pub const W_CLOSE_UNOPENED: &str = "W_CLOSE_UNOPENED";
pub const W_UNCLOSED_SPAN: &str = "W_UNCLOSED_SPAN";
pub const W_TRUNCATED_MARKER: &str = "W_TRUNCATED_MARKER";

/// Advisory note about the input. Translation itself never fails; every
/// diagnostic the translator produces today is a warning.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: DiagnosticSeverity,
    pub code: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        range: Range,
        severity: DiagnosticSeverity,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity,
            code,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}
