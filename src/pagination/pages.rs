//! Page-by-page iteration driven by a small state machine.

// crates.io
use futures::{Stream, stream};
// self
use crate::{
	_prelude::*,
	pagination::{Page, PageSource},
};

/// Position of a [`PageSequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceState {
	/// No page fetched yet.
	NotStarted,
	/// Page `number` was the last one returned.
	HasCurrentPage {
		/// 1-based number of the current page.
		number: u32,
		/// Whether the server reported further pages.
		has_more: bool,
	},
	/// Terminal: the last page was returned or a fetch failed.
	Exhausted,
}

/// Forward-only, single-pass sequence of pages fetched on demand.
#[derive(Debug)]
pub struct PageSequence<S> {
	source: S,
	start_page: u32,
	state: SequenceState,
}
impl<S> PageSequence<S>
where
	S: PageSource,
{
	/// Sequence starting at page 1.
	pub fn new(source: S) -> Self {
		Self::starting_at(source, 1)
	}

	/// Sequence starting at `start_page` (values below 1 are treated as 1).
	pub fn starting_at(source: S, start_page: u32) -> Self {
		Self { source, start_page: start_page.max(1), state: SequenceState::NotStarted }
	}

	/// Current position.
	pub fn state(&self) -> SequenceState {
		self.state
	}

	/// Underlying page source.
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Fetches the next page, or returns `None` once the sequence is exhausted.
	///
	/// Each call performs at most one fetch. A failed fetch is returned once and leaves the
	/// sequence exhausted.
	pub async fn next(&mut self) -> Result<Option<Page<S::Content>>> {
		let number = match self.state {
			SequenceState::NotStarted => self.start_page,
			SequenceState::HasCurrentPage { number, has_more: true } => number + 1,
			SequenceState::HasCurrentPage { has_more: false, .. } => {
				self.state = SequenceState::Exhausted;

				return Ok(None);
			},
			SequenceState::Exhausted => return Ok(None),
		};

		match self.source.fetch(number).await {
			Ok(page) => {
				self.state = SequenceState::HasCurrentPage { number, has_more: page.has_more() };

				Ok(Some(page))
			},
			Err(e) => {
				self.state = SequenceState::Exhausted;

				Err(e)
			},
		}
	}

	/// Converts the sequence into a [`Stream`] of pages.
	pub fn into_stream(self) -> impl Stream<Item = Result<Page<S::Content>>> + Send {
		stream::unfold(self, |mut pages| async move {
			pages.next().await.transpose().map(|page| (page, pages))
		})
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use futures::StreamExt;
	// self
	use super::*;
	use crate::pagination::PageFuture;

	/// Serves `pages[n - 1]` for page `n`; `None` entries fail.
	struct VecSource {
		pages: Vec<Option<Vec<u32>>>,
		fetched: Mutex<Vec<u32>>,
	}
	impl VecSource {
		fn new(pages: Vec<Option<Vec<u32>>>) -> Self {
			Self { pages, fetched: Mutex::new(Vec::new()) }
		}
	}
	impl PageSource for VecSource {
		type Content = Vec<u32>;

		fn fetch(&self, number: u32) -> PageFuture<'_, Vec<u32>> {
			self.fetched.lock().push(number);

			let total_pages = self.pages.len() as u32;
			let content = self.pages.get(number as usize - 1).cloned().flatten();

			Box::pin(async move {
				content
					.map(|content| Page { number, total_pages, content })
					.ok_or_else(|| Error::NotFound { endpoint: format!("page/{number}") })
			})
		}
	}

	#[tokio::test]
	async fn walks_pages_in_order_without_prefetching() {
		let mut pages = PageSequence::new(VecSource::new(vec![Some(vec![1]), Some(vec![2])]));

		assert_eq!(pages.state(), SequenceState::NotStarted);
		assert!(pages.source().fetched.lock().is_empty());

		let first = pages.next().await.expect("First page should load.").expect("Page 1 exists.");

		assert_eq!(first.content, vec![1]);
		assert_eq!(pages.state(), SequenceState::HasCurrentPage { number: 1, has_more: true });
		assert_eq!(*pages.source().fetched.lock(), vec![1]);

		let second = pages.next().await.expect("Second page should load.").expect("Page 2 exists.");

		assert_eq!(second.content, vec![2]);
		assert!(pages.next().await.expect("Exhaustion is not an error.").is_none());
		assert!(pages.next().await.expect("Exhaustion is not an error.").is_none());
		assert_eq!(pages.state(), SequenceState::Exhausted);
		assert_eq!(*pages.source().fetched.lock(), vec![1, 2]);
	}

	#[tokio::test]
	async fn starting_page_is_honored() {
		let mut pages =
			PageSequence::starting_at(VecSource::new(vec![Some(vec![1]), Some(vec![2])]), 2);
		let page = pages.next().await.expect("Page should load.").expect("Page 2 exists.");

		assert_eq!(page.number, 2);
		assert!(!page.has_more());
		assert!(pages.next().await.expect("Exhaustion is not an error.").is_none());
	}

	#[tokio::test]
	async fn failed_fetch_is_returned_once_then_exhausted() {
		let mut pages = PageSequence::new(VecSource::new(vec![Some(vec![1]), None, Some(vec![3])]));

		pages.next().await.expect("First page should load.");

		assert!(matches!(pages.next().await, Err(Error::NotFound { .. })));
		assert_eq!(pages.state(), SequenceState::Exhausted);
		assert!(pages.next().await.expect("Exhaustion is not an error.").is_none());
		assert_eq!(*pages.source().fetched.lock(), vec![1, 2]);
	}

	#[tokio::test]
	async fn empty_listing_yields_one_empty_page() {
		let mut pages = PageSequence::new(VecSource::new(vec![Some(Vec::new())]));
		let page = pages.next().await.expect("Empty page should load.").expect("Page 1 exists.");

		assert!(page.content.is_empty());
		assert!(!page.has_more());
	}

	#[tokio::test]
	async fn stream_yields_pages_then_ends() {
		let source = VecSource::new(vec![Some(vec![1]), Some(vec![]), Some(vec![3])]);
		let numbers = PageSequence::new(source)
			.into_stream()
			.map(|page| page.expect("Every page should load.").number)
			.collect::<Vec<_>>()
			.await;

		assert_eq!(numbers, vec![1, 2, 3]);
	}
}
