#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Delimited block location.
pub(crate) mod block;
/// Extraction operations and the [`Excerpt`] builder.
pub mod extract;
/// Offset-finding primitives.
pub mod locate;
/// The before/after view pair.
pub mod pair;

pub use crate::{
    extract::{Excerpt, SubstringExtract},
    locate::Comparison,
    pair::SplitPair,
};

/// Common structures and traits re-exported.
pub mod prelude {
    pub use crate::extract::{Excerpt, SubstringExtract};
    pub use crate::locate::Comparison;
    pub use crate::pair::SplitPair;
}
