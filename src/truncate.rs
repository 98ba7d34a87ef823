//! Middle truncation for leaf strings.

use std::borrow::Cow;

/// Character budget for a rendered string leaf, ellipsis included.
pub(crate) const STRING_LIMIT: usize = 50;

/// Marker substituted for the removed middle of an over-long string.
const ELLIPSIS: char = '\u{2026}';

/// Truncates `text` to at most `limit` characters by removing a run from the
/// middle.
///
/// Characters are counted as Unicode scalar values. Text within the limit is
/// returned borrowed and unchanged. Over-long text is replaced by a prefix,
/// the ellipsis marker, and a suffix, totalling exactly `limit` characters;
/// the ellipsis counts toward the limit and the prefix keeps the extra
/// character when the remaining budget splits unevenly. The output never
/// exceeds the limit again, so the transform is idempotent.
///
/// A limit of zero cannot fit even the marker and degenerates to the marker
/// alone.
pub(crate) fn truncate_middle(text: &str, limit: usize) -> Cow<'_, str> {
    let count = text.chars().count();
    if count <= limit {
        return Cow::Borrowed(text);
    }

    let keep = limit.saturating_sub(1);
    let head = keep - keep / 2;
    let tail = keep / 2;

    let mut truncated = String::with_capacity(text.len().min(4 * limit.max(1)));
    truncated.extend(text.chars().take(head));
    truncated.push(ELLIPSIS);
    truncated.extend(text.chars().skip(count - tail));

    Cow::Owned(truncated)
}

/// Truncates `text` to `limit` characters, then debug-quotes the result.
///
/// This is the rendering applied to raw string leaves: surrounding quotation
/// marks with embedded quotes and control characters escaped. Quoting happens
/// after truncation, so the quotes and escapes do not count toward the limit.
pub(crate) fn quote_truncated(text: &str, limit: usize) -> String {
    format!("{:?}", truncate_middle(text, limit))
}
