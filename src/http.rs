//! HTTP primitives shared by the resource client and the OAuth layer.
//!
//! [`HttpSend`] is the crate's only dependency on an HTTP stack for API calls: the
//! authenticating transport decorates one, and [`Client`](crate::client::Client) drives one.
//! [`TokenHttpClient`] plays the same role for token-endpoint exchanges performed through the
//! `oauth2` crate. [`ReqwestHttpClient`] implements both.

pub mod query;
pub mod request;
pub mod token;

pub use query::*;
pub use request::*;
pub use token::*;

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{ACCEPT, CONTENT_TYPE};
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::TransportError;

/// Boxed future returned by [`HttpSend::send`].
pub type SendFuture<'a> = Pin<Box<dyn Future<Output = Result<ApiResponse>> + 'a + Send>>;

/// Sends one [`ApiRequest`] and yields the raw [`ApiResponse`].
///
/// Implementations report network failures as
/// [`TransportError`](crate::error::TransportError) and return every HTTP status verbatim;
/// status interpretation belongs to the caller.
pub trait HttpSend
where
	Self: 'static + Send + Sync,
{
	/// Dispatches the request.
	fn send(&self, request: ApiRequest) -> SendFuture<'_>;
}
impl<T> HttpSend for Arc<T>
where
	T: ?Sized + HttpSend,
{
	fn send(&self, request: ApiRequest) -> SendFuture<'_> {
		(**self).send(request)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that identifies itself with `user_agent`.
	pub fn with_user_agent(user_agent: &str) -> Result<Self> {
		let client = ReqwestClient::builder()
			.user_agent(user_agent)
			.build()
			.map_err(crate::error::ConfigError::from)?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpSend for ReqwestHttpClient {
	fn send(&self, request: ApiRequest) -> SendFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
				Method::Put => reqwest::Method::PUT,
				Method::Delete => reqwest::Method::DELETE,
			};
			let mut builder =
				client.request(method, request.full_url()).header(ACCEPT, "application/json");

			if let Some(body) = request.body {
				builder = builder.header(CONTENT_TYPE, "application/json").body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(ApiResponse { status, body })
		})
	}
}
