//! Element-by-element iteration that flattens pages on demand.

// crates.io
use futures::{Stream, stream};
// self
use crate::{
	_prelude::*,
	pagination::{PageSequence, PageSource},
};

/// Forward-only, single-pass sequence of the items of a [`PageSequence`].
///
/// The next page is fetched only after every item of the current page has been returned.
/// Empty pages are skipped as long as the server reports more pages.
pub struct ItemSequence<S, F, T>
where
	S: PageSource,
{
	pages: PageSequence<S>,
	project: F,
	buffered: VecDeque<T>,
}
impl<S, F, T> ItemSequence<S, F, T>
where
	S: PageSource,
	F: FnMut(S::Content) -> Vec<T>,
{
	/// Flattens `pages`, turning each page's content into items with `project`.
	pub fn new(pages: PageSequence<S>, project: F) -> Self {
		Self { pages, project, buffered: VecDeque::new() }
	}

	/// Underlying page sequence.
	pub fn pages(&self) -> &PageSequence<S> {
		&self.pages
	}

	/// Returns the next item, fetching pages as needed, or `None` once exhausted.
	pub async fn next(&mut self) -> Result<Option<T>> {
		loop {
			if let Some(item) = self.buffered.pop_front() {
				return Ok(Some(item));
			}

			match self.pages.next().await? {
				Some(page) => self.buffered = (self.project)(page.content).into(),
				None => return Ok(None),
			}
		}
	}

	/// Drains the remaining items into a vector.
	pub async fn collect(mut self) -> Result<Vec<T>> {
		let mut items = Vec::new();

		while let Some(item) = self.next().await? {
			items.push(item);
		}

		Ok(items)
	}

	/// Converts the sequence into a [`Stream`] of items.
	pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send
	where
		F: Send,
		T: Send,
	{
		stream::unfold(self, |mut items| async move {
			items.next().await.transpose().map(|item| (item, items))
		})
	}
}
impl<S, F, T> Debug for ItemSequence<S, F, T>
where
	S: PageSource,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ItemSequence")
			.field("state", &self.pages.state())
			.field("buffered", &self.buffered.len())
			.finish()
	}
}
