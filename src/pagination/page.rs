//! A single fetched page, the listing envelope trait, and list options.

// self
use crate::{_prelude::*, models::*};

/// List envelope that reports how many pages exist.
pub trait Paged
where
	Self: 'static + Send + DeserializeOwned,
{
	/// Element type carried by the envelope.
	type Item: 'static + Send;

	/// Total pages available at the requested `limit`.
	fn num_pages(&self) -> u32;

	/// Consumes the envelope, returning its items in server order.
	fn into_items(self) -> Vec<Self::Item>;
}

macro_rules! impl_paged {
	($($page:ty => $item:ty),+ $(,)?) => {
		$(
			impl Paged for $page {
				type Item = $item;

				fn num_pages(&self) -> u32 {
					self.counters.num_pages
				}

				fn into_items(self) -> Vec<$item> {
					<$page>::into_items(self)
				}
			}
		)+
	};
}
impl_paged! {
	AccountsPage => Account,
	TransactionsPage => Transaction,
	TransfersPage => Transfer,
	AddressesPage => Address,
	ApplicationsPage => Application,
	ContactsPage => Contact,
}

/// One fetched page plus its continuation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<P> {
	/// 1-based number of this page.
	pub number: u32,
	/// Total pages reported by the server.
	pub total_pages: u32,
	/// Decoded envelope.
	pub content: P,
}
impl<P> Page<P> {
	/// Returns `true` while pages after this one exist.
	pub fn has_more(&self) -> bool {
		self.number < self.total_pages
	}

	/// Number of the following page, if any.
	pub fn next_number(&self) -> Option<u32> {
		self.has_more().then(|| self.number + 1)
	}
}
impl<P> Page<P>
where
	P: Paged,
{
	/// Wraps `content` fetched as page `number`.
	pub fn new(number: u32, content: P) -> Self {
		Self { number, total_pages: content.num_pages(), content }
	}
}

/// Where a listing starts and how large its pages are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListOptions {
	/// `limit` query parameter; falls back to the client's default when unset.
	pub limit: Option<u32>,
	/// First page to fetch (1-based).
	pub start_page: u32,
}
impl ListOptions {
	/// Starts at page 1 with the server's page size.
	pub fn new() -> Self {
		Self { limit: None, start_page: 1 }
	}

	/// Sets the page size.
	pub fn limit(mut self, limit: u32) -> Self {
		self.limit = Some(limit);

		self
	}

	/// Starts the listing at `page` (values below 1 are treated as 1).
	pub fn start_page(mut self, page: u32) -> Self {
		self.start_page = page.max(1);

		self
	}
}
impl Default for ListOptions {
	fn default() -> Self {
		Self::new()
	}
}
