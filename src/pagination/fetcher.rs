//! Client-backed page fetching and the sources that feed lazy sequences.

// std
use std::marker::PhantomData;
// self
use crate::{
	_prelude::*,
	client::{Client, RequestOptions},
	http::{Method, QueryParams},
	obs::CallKind,
	pagination::{ItemSequence, ListOptions, Page, PageSequence, Paged},
};

/// Boxed future returned by [`PageSource::fetch`].
pub type PageFuture<'a, P> = Pin<Box<dyn Future<Output = Result<Page<P>>> + 'a + Send>>;

/// Element sequence over a client-backed listing, projected through [`Paged::into_items`].
pub type Items<P> = ItemSequence<EndpointPages<P>, fn(P) -> Vec<<P as Paged>::Item>, <P as Paged>::Item>;

/// Fetches one page of a listing by its 1-based number.
pub trait PageSource
where
	Self: Send,
{
	/// Envelope type of each page.
	type Content: Send;

	/// Fetches page `number`.
	fn fetch(&self, number: u32) -> PageFuture<'_, Self::Content>;
}

/// [`PageSource`] that lists `endpoint` through a [`Client`].
pub struct EndpointPages<P> {
	client: Client,
	endpoint: String,
	limit: Option<u32>,
	options: RequestOptions,
	_content: PhantomData<fn() -> P>,
}
impl<P> EndpointPages<P>
where
	P: Paged,
{
	/// Lists `endpoint` with page size `limit` and the extra query/decoders in `options`.
	pub fn new(
		client: Client,
		endpoint: impl Into<String>,
		limit: Option<u32>,
		options: RequestOptions,
	) -> Self {
		Self { client, endpoint: endpoint.into(), limit, options, _content: PhantomData }
	}
}
impl<P> PageSource for EndpointPages<P>
where
	P: Paged,
{
	type Content = P;

	fn fetch(&self, number: u32) -> PageFuture<'_, P> {
		Box::pin(self.client.fetch_page(&self.endpoint, number, self.limit, self.options.clone()))
	}
}
impl<P> Debug for EndpointPages<P> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("EndpointPages")
			.field("endpoint", &self.endpoint)
			.field("limit", &self.limit)
			.field("query", &self.options.query)
			.finish()
	}
}

impl Client {
	/// Fetches page `number` of `endpoint`.
	///
	/// `page` and `limit` (or the configured default limit) are merged over `options.query`.
	pub async fn fetch_page<P>(
		&self,
		endpoint: &str,
		number: u32,
		limit: Option<u32>,
		options: RequestOptions,
	) -> Result<Page<P>>
	where
		P: Paged,
	{
		self.ensure_open()?;

		let paging = QueryParams::new()
			.with("page", number)
			.with_opt("limit", limit.or(self.config().default_limit));
		let query = options.query.merged(&paging);
		let options = RequestOptions { query, decoders: options.decoders };
		let content: P = self.call(CallKind::Page, Method::Get, endpoint, None, options).await?;

		Ok(Page::new(number, content))
	}

	/// Lazy page sequence over `endpoint`; nothing is fetched until the first `next`.
	pub fn pages<P>(
		&self,
		endpoint: impl Into<String>,
		list: ListOptions,
		options: RequestOptions,
	) -> Result<PageSequence<EndpointPages<P>>>
	where
		P: Paged,
	{
		self.ensure_open()?;

		let source = EndpointPages::new(self.clone(), endpoint, list.limit, options);

		Ok(PageSequence::starting_at(source, list.start_page))
	}

	/// Lazy element sequence over `endpoint`; nothing is fetched until the first `next`.
	pub fn items<P>(
		&self,
		endpoint: impl Into<String>,
		list: ListOptions,
		options: RequestOptions,
	) -> Result<Items<P>>
	where
		P: Paged,
	{
		let project: fn(P) -> Vec<P::Item> = P::into_items;

		Ok(ItemSequence::new(self.pages(endpoint, list, options)?, project))
	}
}
