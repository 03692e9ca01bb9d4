use crate::diagnostic::{
    Diagnostic, DiagnosticSeverity, W_CLOSE_UNOPENED, W_LITERAL_CARET, W_LITERAL_CLOSE,
    W_TRUNCATED_MARKER, W_UNCLOSED_SPAN,
};
use crate::source_map::SourceMap;
use crate::span::Span;
use crate::stack::{TagStack, new_tag_stack, tags_to_close, tags_to_open};
use crate::tag::html_tag_for_symbol;

/// What the translator is looking to do with the next character.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    Normal,
    AwaitingTagName,
    AwaitingClosingTagName,
}

pub struct TranslateResult {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Translates a string of AML into a string of HTML. Total: malformed
/// marker sequences degrade to literal text, never to an error.
pub fn translate(source: &str) -> String {
    translate_full(source).html
}

/// Like [`translate`], but also reports advisory diagnostics: literal
/// fallbacks, close requests for tags that were never opened, and spans
/// still open when the input runs out.
pub fn translate_full(source: &str) -> TranslateResult {
    let mut translator = Translator::new(source);
    for (offset, ch) in source.char_indices() {
        translator.accept(offset, ch);
    }
    translator.finish(source.len())
}

struct Translator {
    mode: Mode,
    // Offset of the `^` that started the pending marker.
    marker_start: usize,
    tag_stack: TagStack,
    html: String,
    diagnostics: Vec<Diagnostic>,
    source_map: SourceMap,
}

impl Translator {
    fn new(source: &str) -> Self {
        Self {
            mode: Mode::Normal,
            marker_start: 0,
            tag_stack: Vec::new(),
            html: String::with_capacity(source.len()),
            diagnostics: Vec::new(),
            source_map: SourceMap::new(source),
        }
    }

    fn accept(&mut self, offset: usize, ch: char) {
        match self.mode {
            Mode::Normal => self.accept_normal(offset, ch),
            Mode::AwaitingTagName => self.accept_awaiting_tag(offset, ch),
            Mode::AwaitingClosingTagName => self.accept_awaiting_closing_tag(offset, ch),
        }
    }

    fn accept_normal(&mut self, offset: usize, ch: char) {
        if ch == '^' {
            self.mode = Mode::AwaitingTagName;
            self.marker_start = offset;
        } else {
            self.html.push(ch);
        }
    }

    fn accept_awaiting_tag(&mut self, offset: usize, ch: char) {
        if ch == '!' {
            self.mode = Mode::AwaitingClosingTagName;
            return;
        }
        self.mode = Mode::Normal;
        match html_tag_for_symbol(ch) {
            Some(tag) => {
                self.tag_stack.push(tag);
                self.html.push_str(&tag.opening());
            }
            None => {
                // Literal fallback: the caret did not introduce a tag.
                self.html.push('^');
                self.html.push(ch);
                self.warn(
                    Span::new(self.marker_start, offset + ch.len_utf8()),
                    W_LITERAL_CARET,
                    format!("`^{}` is not a tag marker; emitted literally", ch),
                );
            }
        }
    }

    fn accept_awaiting_closing_tag(&mut self, offset: usize, ch: char) {
        self.mode = Mode::Normal;
        match html_tag_for_symbol(ch) {
            Some(tag) => {
                let marker_span = Span::new(self.marker_start, offset + ch.len_utf8());
                if !self.tag_stack.contains(&tag) {
                    self.warn(
                        marker_span,
                        W_CLOSE_UNOPENED,
                        format!("closing `^!{}` but <{}> is not open", ch, tag.as_str()),
                    );
                }
                for closed in tags_to_close(&self.tag_stack, tag) {
                    self.html.push_str(&closed.closing());
                }
                for reopened in tags_to_open(&self.tag_stack, tag) {
                    self.html.push_str(&reopened.opening());
                }
                self.tag_stack = new_tag_stack(&self.tag_stack, tag);
            }
            None => {
                // Literal fallback: `^!` did not introduce a closing tag.
                self.html.push_str("^!");
                self.html.push(ch);
                self.warn(
                    Span::new(self.marker_start, offset + ch.len_utf8()),
                    W_LITERAL_CLOSE,
                    format!("`^!{}` is not a closing marker; emitted literally", ch),
                );
            }
        }
    }

    fn finish(mut self, end: usize) -> TranslateResult {
        if self.mode != Mode::Normal {
            // Pending marker characters are dropped, not flushed as text.
            self.warn(
                Span::new(self.marker_start, end),
                W_TRUNCATED_MARKER,
                "input ended inside a marker; the pending characters were dropped",
            );
        }
        if !self.tag_stack.is_empty() {
            let names = self
                .tag_stack
                .iter()
                .map(|tag| tag.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            self.warn(
                Span::new(end, end),
                W_UNCLOSED_SPAN,
                format!("spans still open at end of input: {}", names),
            );
        }
        TranslateResult {
            html: self.html,
            diagnostics: self.diagnostics,
        }
    }

    fn warn(&mut self, span: Span, code: &'static str, message: impl Into<String>) {
        let range = self.source_map.range(span);
        self.diagnostics
            .push(Diagnostic::new(range, DiagnosticSeverity::Warning, code, message));
    }
}
