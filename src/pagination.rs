//! Lazy pagination over 1-based numbered pages.
//!
//! A [`PageSource`] fetches one page by number. [`PageSequence`] walks a source forward one
//! round-trip per [`next`](PageSequence::next) call and never prefetches. [`ItemSequence`]
//! flattens the pages into their items and keeps pulling past empty intermediate pages until the
//! source reports the last page.

pub mod fetcher;
pub mod items;
pub mod page;
pub mod pages;

pub use fetcher::*;
pub use items::*;
pub use page::*;
pub use pages::*;
