/// The views on either side of a matched needle or delimited block.
///
/// A plain carrier: both views borrow from the same backing storage as
/// the searched sequence, and nothing beyond construction relates them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitPair<'a> {
    /// Everything up to the match.
    pub first:  &'a [u8],
    /// Everything past the match.
    pub second: &'a [u8],
}

impl<'a> SplitPair<'a> {
    /// Wraps two views drawn from the same haystack.
    #[inline]
    #[must_use]
    pub const fn new(first: &'a [u8], second: &'a [u8]) -> Self {
        Self { first, second }
    }

    /// The canonical "no match" pair: two empty views.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { first: &[], second: &[] }
    }
}
