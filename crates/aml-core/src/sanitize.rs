use crate::translator::translate;
use ammonia::Builder;
use std::collections::HashSet;

/// Translates AML and passes the result through an HTML sanitizer with an
/// allow-list of the three tags the translator can emit. Tag names come
/// out lowercased, text content entity-escaped, raw HTML in the input
/// stripped, and spans still open at end of input balanced.
pub fn translate_sanitized(source: &str) -> String {
    let raw_html = translate(source);

    let tags: HashSet<&'static str> = ["strong", "u", "em"].iter().copied().collect();

    Builder::new().tags(tags).clean(&raw_html).to_string()
}
