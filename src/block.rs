use crate::locate::{Comparison, is_searchable, locate_substring, rlocate_substring};

/// Position of one delimited block: where the opening needle matched and
/// how many bytes sit strictly between the two needles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BlockSpan {
    pub(crate) open_at:   usize,
    pub(crate) inner_len: usize,
}

/// Which occurrence of the closing needle bounds the block.
#[derive(Clone, Copy, Debug)]
pub(crate) enum EndMatch {
    /// The next occurrence after the opening needle.
    Next,
    /// The last occurrence in the remainder, for widest-span extraction.
    Last,
}

/// Locates the `count`-th disjoint `open .. close` block at or after
/// `from`.
///
/// Each pairing finds `open` forward, then `close` starting immediately
/// past the opening match; the cursor then resumes immediately after the
/// matched closing needle. A miss anywhere along the way abandons the
/// whole search, and only the final pairing's positions are reported.
pub(crate) fn locate_block(
    haystack: &[u8],
    open: &[u8],
    close: &[u8],
    from: usize,
    comparison: Comparison,
    end: EndMatch,
    count: usize,
) -> Option<BlockSpan> {
    if close.is_empty() || count == 0 || !is_searchable(haystack, open, from) {
        return None;
    }

    let mut cursor = from;
    let mut open_at = 0;
    let mut close_at = 0;
    for _ in 0..count {
        open_at = locate_substring(haystack, open, cursor, comparison)?;
        cursor = open_at + open.len();
        close_at = match end {
            EndMatch::Next => locate_substring(haystack, close, cursor, comparison)?,
            EndMatch::Last => rlocate_substring(haystack, close, cursor, comparison)?,
        };
        cursor = close_at + close.len();
    }

    Some(BlockSpan {
        open_at,
        inner_len: close_at - open_at - open.len(),
    })
}
