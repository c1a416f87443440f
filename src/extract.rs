use crate::{
    block::{EndMatch, locate_block},
    locate::{Comparison, count_substrings, locate_nth_substring, locate_substring, rlocate_substring},
    pair::SplitPair,
};

/// Canonical result for "invalid input" and "no match" alike.
const EMPTY: &[u8] = b"";

/// A configured search over one haystack.
///
/// Construct it with [`SubstringExtract::excerpt`] (or [`Excerpt::new`]),
/// adjust the starting offset and comparison as needed, then run any of
/// the extraction operations. Every operation borrows from the original
/// haystack and allocates nothing.
///
/// ```
/// use excerpt::SubstringExtract;
///
/// let markup = "<b>one</b><b>two</b>";
///
/// assert_eq!(markup.excerpt().starting_at(10).between("<b>", "</b>"), b"two");
/// assert_eq!(markup.excerpt().ignore_ascii_case().count("<B>"), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Excerpt<'a> {
    haystack:   &'a [u8],
    start:      usize,
    comparison: Comparison,
}

impl<'a> Excerpt<'a> {
    /// Wraps `haystack` with the default settings: scanning starts at
    /// offset `0` and needles are compared with [`Comparison::Exact`].
    #[inline]
    #[must_use]
    pub fn new<Q: AsRef<[u8]> + ?Sized>(haystack: &'a Q) -> Self {
        Self {
            haystack:   haystack.as_ref(),
            start:      0,
            comparison: Comparison::default(),
        }
    }

    /// Sets the inclusive offset where scanning begins. An offset at or
    /// past the end of the haystack invalidates the search rather than
    /// clamping.
    #[inline]
    #[must_use]
    pub fn starting_at(mut self, offset: usize) -> Self {
        self.start = offset;
        self
    }

    /// Sets the byte-equality rule used for all needle matching.
    #[inline]
    #[must_use]
    pub fn comparing(mut self, comparison: Comparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Shorthand for [`comparing`](Self::comparing) with
    /// [`Comparison::IgnoreAsciiCase`].
    #[inline]
    #[must_use]
    pub fn ignore_ascii_case(self) -> Self {
        self.comparing(Comparison::IgnoreAsciiCase)
    }

    /// Everything before the first needle match.
    #[must_use]
    pub fn before(&self, needle: impl AsRef<[u8]>) -> &'a [u8] {
        self.clip_to(self.locate(needle.as_ref()), 0)
    }

    /// Everything before the first needle match, plus the needle itself.
    #[must_use]
    pub fn before_including(&self, needle: impl AsRef<[u8]>) -> &'a [u8] {
        let needle = needle.as_ref();
        self.clip_to(self.locate(needle), needle.len())
    }

    /// Everything before the last needle match.
    #[must_use]
    pub fn before_last(&self, needle: impl AsRef<[u8]>) -> &'a [u8] {
        self.clip_to(self.rlocate(needle.as_ref()), 0)
    }

    /// Everything before the last needle match, plus the needle itself.
    #[must_use]
    pub fn before_last_including(&self, needle: impl AsRef<[u8]>) -> &'a [u8] {
        let needle = needle.as_ref();
        self.clip_to(self.rlocate(needle), needle.len())
    }

    /// Everything before the `n`-th needle match (1-based).
    #[must_use]
    pub fn before_nth(&self, needle: impl AsRef<[u8]>, n: usize) -> &'a [u8] {
        self.clip_to(self.locate_nth(needle.as_ref(), n), 0)
    }

    /// Everything before the `n`-th needle match (1-based), plus the
    /// needle itself.
    #[must_use]
    pub fn before_nth_including(&self, needle: impl AsRef<[u8]>, n: usize) -> &'a [u8] {
        let needle = needle.as_ref();
        self.clip_to(self.locate_nth(needle, n), needle.len())
    }

    /// Everything after the first needle match.
    #[must_use]
    pub fn after(&self, needle: impl AsRef<[u8]>) -> &'a [u8] {
        let needle = needle.as_ref();
        self.clip_from(self.locate(needle), needle.len())
    }

    /// Everything after the first needle match, starting at the needle
    /// itself.
    #[must_use]
    pub fn after_including(&self, needle: impl AsRef<[u8]>) -> &'a [u8] {
        self.clip_from(self.locate(needle.as_ref()), 0)
    }

    /// Everything after the last needle match.
    #[must_use]
    pub fn after_last(&self, needle: impl AsRef<[u8]>) -> &'a [u8] {
        let needle = needle.as_ref();
        self.clip_from(self.rlocate(needle), needle.len())
    }

    /// Everything after the last needle match, starting at the needle
    /// itself.
    #[must_use]
    pub fn after_last_including(&self, needle: impl AsRef<[u8]>) -> &'a [u8] {
        self.clip_from(self.rlocate(needle.as_ref()), 0)
    }

    /// Everything after the `n`-th needle match (1-based).
    #[must_use]
    pub fn after_nth(&self, needle: impl AsRef<[u8]>, n: usize) -> &'a [u8] {
        let needle = needle.as_ref();
        self.clip_from(self.locate_nth(needle, n), needle.len())
    }

    /// Everything after the `n`-th needle match (1-based), starting at the
    /// needle itself.
    #[must_use]
    pub fn after_nth_including(&self, needle: impl AsRef<[u8]>, n: usize) -> &'a [u8] {
        self.clip_from(self.locate_nth(needle.as_ref(), n), 0)
    }

    /// The text strictly between the first `open` match and the next
    /// `close` match after it.
    ///
    /// ```
    /// use excerpt::SubstringExtract;
    ///
    /// assert_eq!("<td>Dummy</td>".between("<td>", "</td>"), b"Dummy");
    /// ```
    #[must_use]
    pub fn between(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> &'a [u8] {
        self.clip_block(open.as_ref(), close.as_ref(), EndMatch::Next, 1, false)
    }

    /// The text between the first `open` match and the next `close` match,
    /// including both needles.
    #[must_use]
    pub fn between_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> &'a [u8] {
        self.clip_block(open.as_ref(), close.as_ref(), EndMatch::Next, 1, true)
    }

    /// The text between the first `open` match and the *last* `close`
    /// match in the remainder, capturing the widest span.
    #[must_use]
    pub fn between_outer(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> &'a [u8] {
        self.clip_block(open.as_ref(), close.as_ref(), EndMatch::Last, 1, false)
    }

    /// The widest `open .. close` span, including both needles.
    #[must_use]
    pub fn between_outer_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> &'a [u8] {
        self.clip_block(open.as_ref(), close.as_ref(), EndMatch::Last, 1, true)
    }

    /// The text inside the `n`-th disjoint `open .. close` block
    /// (1-based). Earlier blocks are skipped whole, not rescanned.
    #[must_use]
    pub fn between_nth(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>, n: usize) -> &'a [u8] {
        self.clip_block(open.as_ref(), close.as_ref(), EndMatch::Next, n, false)
    }

    /// The `n`-th disjoint `open .. close` block (1-based), including both
    /// needles.
    #[must_use]
    pub fn between_nth_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>, n: usize) -> &'a [u8] {
        self.clip_block(open.as_ref(), close.as_ref(), EndMatch::Next, n, true)
    }

    /// The number of non-overlapping needle matches. Scanning resumes
    /// immediately after each match, so a needle never matches inside
    /// itself.
    #[must_use]
    pub fn count(&self, needle: impl AsRef<[u8]>) -> usize {
        count_substrings(self.haystack, needle.as_ref(), self.start, self.comparison)
    }

    /// Splits the haystack around the first needle match: everything
    /// before it and everything after it. No match yields two empty
    /// views.
    ///
    /// ```
    /// use excerpt::SubstringExtract;
    ///
    /// let pair = "Test1|Test2".excerpt().split_around("|");
    ///
    /// assert_eq!(pair.first, b"Test1");
    /// assert_eq!(pair.second, b"Test2");
    /// ```
    #[must_use]
    pub fn split_around(&self, needle: impl AsRef<[u8]>) -> SplitPair<'a> {
        let needle = needle.as_ref();
        match self.locate(needle) {
            Some(at) => SplitPair::new(&self.haystack[..at], &self.haystack[at + needle.len()..]),
            None => SplitPair::empty(),
        }
    }

    /// Splits the haystack around the first `open .. close` block: the
    /// delimiters and the text inside them are dropped.
    #[must_use]
    pub fn split_around_block(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> SplitPair<'a> {
        self.split_block(open.as_ref(), close.as_ref(), EndMatch::Next, false)
    }

    /// Splits the haystack around the first `open .. close` block, keeping
    /// the opening needle at the end of `first` and the closing needle at
    /// the start of `second`.
    #[must_use]
    pub fn split_around_block_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> SplitPair<'a> {
        self.split_block(open.as_ref(), close.as_ref(), EndMatch::Next, true)
    }

    /// Splits the haystack around the widest `open .. close` span (first
    /// opening needle, last closing needle).
    #[must_use]
    pub fn split_around_block_outer(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> SplitPair<'a> {
        self.split_block(open.as_ref(), close.as_ref(), EndMatch::Last, false)
    }

    /// Splits the haystack around the widest `open .. close` span, keeping
    /// the delimiting needles on their respective sides.
    #[must_use]
    pub fn split_around_block_outer_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> SplitPair<'a> {
        self.split_block(open.as_ref(), close.as_ref(), EndMatch::Last, true)
    }

    #[inline]
    fn locate(&self, needle: &[u8]) -> Option<usize> {
        locate_substring(self.haystack, needle, self.start, self.comparison)
    }

    #[inline]
    fn rlocate(&self, needle: &[u8]) -> Option<usize> {
        rlocate_substring(self.haystack, needle, self.start, self.comparison)
    }

    #[inline]
    fn locate_nth(&self, needle: &[u8], n: usize) -> Option<usize> {
        locate_nth_substring(self.haystack, needle, n, self.start, self.comparison)
    }

    fn clip_to(&self, found: Option<usize>, extend: usize) -> &'a [u8] {
        match found {
            Some(at) => &self.haystack[..at + extend],
            None => EMPTY,
        }
    }

    fn clip_from(&self, found: Option<usize>, skip: usize) -> &'a [u8] {
        match found {
            Some(at) => &self.haystack[at + skip..],
            None => EMPTY,
        }
    }

    fn clip_block(&self, open: &[u8], close: &[u8], end: EndMatch, n: usize, including: bool) -> &'a [u8] {
        match locate_block(self.haystack, open, close, self.start, self.comparison, end, n) {
            Some(block) => {
                let inner = block.open_at + open.len();
                if including {
                    &self.haystack[block.open_at..inner + block.inner_len + close.len()]
                } else {
                    &self.haystack[inner..inner + block.inner_len]
                }
            }
            None => EMPTY,
        }
    }

    fn split_block(&self, open: &[u8], close: &[u8], end: EndMatch, including: bool) -> SplitPair<'a> {
        match locate_block(self.haystack, open, close, self.start, self.comparison, end, 1) {
            Some(block) => {
                let inner_end = block.open_at + open.len() + block.inner_len;
                if including {
                    SplitPair::new(&self.haystack[..block.open_at + open.len()], &self.haystack[inner_end..])
                } else {
                    SplitPair::new(&self.haystack[..block.open_at], &self.haystack[inner_end + close.len()..])
                }
            }
            None => SplitPair::empty(),
        }
    }
}

/// Substring extraction over anything byte-viewable.
///
/// A blanket implementation covers every `AsRef<[u8]>` type, so `str`,
/// `String`, `[u8]`, and `Vec<u8>` all gain these operations. Each method
/// runs with the default settings (scan from offset `0`, exact
/// comparison); go through [`excerpt`](Self::excerpt) to change either.
///
/// Every operation shares one failure convention: an invalid input (empty
/// needle, out-of-range offset, zero occurrence index) and a failed
/// search both produce an empty view, an empty pair, or a zero count.
/// Nothing panics and nothing allocates.
pub trait SubstringExtract: AsRef<[u8]> {
    /// Begins a configured search over this sequence.
    #[inline]
    #[must_use]
    fn excerpt(&self) -> Excerpt<'_> {
        Excerpt::new(self)
    }

    /// Everything before the first needle match.
    #[inline]
    #[must_use]
    fn before(&self, needle: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().before(needle)
    }

    /// Everything before the first needle match, plus the needle itself.
    #[inline]
    #[must_use]
    fn before_including(&self, needle: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().before_including(needle)
    }

    /// Everything before the last needle match.
    #[inline]
    #[must_use]
    fn before_last(&self, needle: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().before_last(needle)
    }

    /// Everything before the last needle match, plus the needle itself.
    #[inline]
    #[must_use]
    fn before_last_including(&self, needle: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().before_last_including(needle)
    }

    /// Everything before the `n`-th needle match (1-based).
    #[inline]
    #[must_use]
    fn before_nth(&self, needle: impl AsRef<[u8]>, n: usize) -> &[u8] {
        self.excerpt().before_nth(needle, n)
    }

    /// Everything before the `n`-th needle match (1-based), plus the
    /// needle itself.
    #[inline]
    #[must_use]
    fn before_nth_including(&self, needle: impl AsRef<[u8]>, n: usize) -> &[u8] {
        self.excerpt().before_nth_including(needle, n)
    }

    /// Everything after the first needle match.
    #[inline]
    #[must_use]
    fn after(&self, needle: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().after(needle)
    }

    /// Everything after the first needle match, starting at the needle
    /// itself.
    #[inline]
    #[must_use]
    fn after_including(&self, needle: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().after_including(needle)
    }

    /// Everything after the last needle match.
    #[inline]
    #[must_use]
    fn after_last(&self, needle: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().after_last(needle)
    }

    /// Everything after the last needle match, starting at the needle
    /// itself.
    #[inline]
    #[must_use]
    fn after_last_including(&self, needle: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().after_last_including(needle)
    }

    /// Everything after the `n`-th needle match (1-based).
    #[inline]
    #[must_use]
    fn after_nth(&self, needle: impl AsRef<[u8]>, n: usize) -> &[u8] {
        self.excerpt().after_nth(needle, n)
    }

    /// Everything after the `n`-th needle match (1-based), starting at the
    /// needle itself.
    #[inline]
    #[must_use]
    fn after_nth_including(&self, needle: impl AsRef<[u8]>, n: usize) -> &[u8] {
        self.excerpt().after_nth_including(needle, n)
    }

    /// The text strictly between the first `open` match and the next
    /// `close` match after it.
    #[inline]
    #[must_use]
    fn between(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().between(open, close)
    }

    /// The text between the first `open` match and the next `close` match,
    /// including both needles.
    #[inline]
    #[must_use]
    fn between_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().between_including(open, close)
    }

    /// The text between the first `open` match and the last `close` match
    /// in the remainder.
    #[inline]
    #[must_use]
    fn between_outer(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().between_outer(open, close)
    }

    /// The widest `open .. close` span, including both needles.
    #[inline]
    #[must_use]
    fn between_outer_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> &[u8] {
        self.excerpt().between_outer_including(open, close)
    }

    /// The text inside the `n`-th disjoint `open .. close` block
    /// (1-based).
    #[inline]
    #[must_use]
    fn between_nth(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>, n: usize) -> &[u8] {
        self.excerpt().between_nth(open, close, n)
    }

    /// The `n`-th disjoint `open .. close` block (1-based), including both
    /// needles.
    #[inline]
    #[must_use]
    fn between_nth_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>, n: usize) -> &[u8] {
        self.excerpt().between_nth_including(open, close, n)
    }

    /// The number of non-overlapping needle matches.
    #[inline]
    #[must_use]
    fn count(&self, needle: impl AsRef<[u8]>) -> usize {
        self.excerpt().count(needle)
    }

    /// Splits the sequence around the first needle match.
    #[inline]
    #[must_use]
    fn split_around(&self, needle: impl AsRef<[u8]>) -> SplitPair<'_> {
        self.excerpt().split_around(needle)
    }

    /// Splits the sequence around the first `open .. close` block,
    /// dropping the delimiters and the text inside them.
    #[inline]
    #[must_use]
    fn split_around_block(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> SplitPair<'_> {
        self.excerpt().split_around_block(open, close)
    }

    /// Splits the sequence around the first `open .. close` block, keeping
    /// the delimiters on their respective sides.
    #[inline]
    #[must_use]
    fn split_around_block_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> SplitPair<'_> {
        self.excerpt().split_around_block_including(open, close)
    }

    /// Splits the sequence around the widest `open .. close` span.
    #[inline]
    #[must_use]
    fn split_around_block_outer(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> SplitPair<'_> {
        self.excerpt().split_around_block_outer(open, close)
    }

    /// Splits the sequence around the widest `open .. close` span, keeping
    /// the delimiters on their respective sides.
    #[inline]
    #[must_use]
    fn split_around_block_outer_including(&self, open: impl AsRef<[u8]>, close: impl AsRef<[u8]>) -> SplitPair<'_> {
        self.excerpt().split_around_block_outer_including(open, close)
    }
}

impl<T: AsRef<[u8]> + ?Sized> SubstringExtract for T {}
