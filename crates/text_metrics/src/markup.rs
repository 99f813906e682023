use std::borrow::Cow;

use metrics_logging::metrics_trace;

/// Replace every `<...>` tag with a single space.
///
/// A tag is a `<`, any run of characters other than `>`, then `>`. This is a
/// single left-to-right pass, not a parser: nesting, comments and attribute
/// values containing `>` are not understood. A `<` with no later `>` is kept
/// as text along with the rest of the input.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    let Some(first) = find_tag(text, 0) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut tags = 0usize;
    let mut next = Some(first);
    while let Some((open, close)) = next {
        out.push_str(&text[cursor..open]);
        out.push(' ');
        tags += 1;
        cursor = close + 1;
        next = find_tag(text, cursor);
    }
    out.push_str(&text[cursor..]);
    metrics_trace!("strip_markup: removed {tags} tag(s) from {} bytes", text.len());
    Cow::Owned(out)
}

/// Byte offsets of the next `<` and its closing `>` at or after `from`.
fn find_tag(text: &str, from: usize) -> Option<(usize, usize)> {
    let rest = &text[from..];
    let open = rest.find('<')?;
    // `[^>]*` admits any `<` in between, so the first `>` closes the tag.
    let close = rest[open..].find('>')?;
    Some((from + open, from + open + close))
}
