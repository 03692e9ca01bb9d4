mod diagnostic;
mod sanitize;
mod source_map;
mod span;
mod stack;
mod tag;
mod translator;

pub use diagnostic::{
    Diagnostic, DiagnosticSeverity, W_CLOSE_UNOPENED, W_LITERAL_CARET, W_LITERAL_CLOSE,
    W_TRUNCATED_MARKER, W_UNCLOSED_SPAN,
};
pub use sanitize::translate_sanitized;
pub use source_map::{Position, Range, SourceMap};
pub use span::Span;
pub use stack::{TagStack, new_tag_stack, tags_to_close, tags_to_open};
pub use tag::{HtmlTag, html_tag_for_symbol};
pub use translator::{TranslateResult, translate, translate_full};
