use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The fixed HTML vocabulary AML can produce.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HtmlTag {
    Strong,
    U,
    Em,
}

impl HtmlTag {
    /// Tag name as emitted, eg "STRONG".
    pub fn as_str(&self) -> &'static str {
        match self {
            HtmlTag::Strong => "STRONG",
            HtmlTag::U => "U",
            HtmlTag::Em => "EM",
        }
    }

    /// Opening form, eg `<STRONG>`.
    pub fn opening(&self) -> String {
        format!("<{}>", self.as_str())
    }

    /// Closing form, eg `</STRONG>`.
    pub fn closing(&self) -> String {
        format!("</{}>", self.as_str())
    }
}

// Marker symbols recognized after a caret. Loaded once, never mutated.
static SYMBOL_TABLE: Lazy<HashMap<char, HtmlTag>> = Lazy::new(|| {
    HashMap::from([
        ('%', HtmlTag::Strong),
        ('*', HtmlTag::U),
        ('~', HtmlTag::Em),
    ])
});

/// Looks up the HTML tag denoted by one marker symbol. Returns `None` for
/// characters outside the tag vocabulary.
pub fn html_tag_for_symbol(symbol: char) -> Option<HtmlTag> {
    SYMBOL_TABLE.get(&symbol).copied()
}
