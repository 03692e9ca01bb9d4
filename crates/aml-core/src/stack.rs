use crate::tag::HtmlTag;

/// Currently-open spans, outermost first. Duplicate tags may coexist;
/// identity is by stack position, and every scan matches the innermost
/// occurrence of its target first.
pub type TagStack = Vec<HtmlTag>;

/// Tags that must be closed to honor a close request for `target`,
/// innermost first. Scans tail-to-head up to and including the first
/// occurrence of `target`; when `target` is not open at all, the whole
/// stack is collected, so everything gets closed.
pub fn tags_to_close(stack: &[HtmlTag], target: HtmlTag) -> Vec<HtmlTag> {
    let mut out = Vec::new();
    for &tag in stack.iter().rev() {
        out.push(tag);
        if tag == target {
            break;
        }
    }
    out
}

/// Tags that must be re-opened after closing `target`, outermost first so
/// the original nesting order is preserved. These are the tags above the
/// innermost occurrence of `target`; when `target` is not open, the whole
/// stack is re-opened.
pub fn tags_to_open(stack: &[HtmlTag], target: HtmlTag) -> Vec<HtmlTag> {
    let above = stack.iter().rev().take_while(|&&tag| tag != target).count();
    stack[stack.len() - above..].to_vec()
}

/// The stack as it reads once the close and re-open sequences have been
/// emitted: the innermost occurrence of `target` is removed and the
/// re-opened tags above it stay live, in their original order. When
/// `target` is not open, everything was closed and re-opened, so the
/// stack is unchanged.
pub fn new_tag_stack(stack: &[HtmlTag], target: HtmlTag) -> TagStack {
    let mut out = stack.to_vec();
    if let Some(index) = stack.iter().rposition(|&tag| tag == target) {
        out.remove(index);
    }
    out
}
