//! Transport-agnostic request and response records.

// self
use crate::{_prelude::*, http::QueryParams};

/// HTTP verbs used by the resource client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl Method {
	/// Returns the canonical upper-case verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outgoing request built fresh for every call.
///
/// `url` is the endpoint resolved against the configured base URL without a query string;
/// senders append [`query`](Self::query) when dispatching.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// HTTP verb.
	pub method: Method,
	/// Endpoint path relative to the base URL (e.g. `accounts/123`).
	pub endpoint: String,
	/// Absolute endpoint URL.
	pub url: Url,
	/// Query parameters, including the access token once stamped.
	pub query: QueryParams,
	/// JSON body, if any.
	pub body: Option<Vec<u8>>,
}
impl ApiRequest {
	/// Creates a body-less request.
	pub fn new(method: Method, endpoint: impl Into<String>, url: Url) -> Self {
		Self { method, endpoint: endpoint.into(), url, query: QueryParams::new(), body: None }
	}

	/// Replaces the query parameters.
	pub fn with_query(mut self, query: QueryParams) -> Self {
		self.query = query;

		self
	}

	/// Attaches a serialized JSON body.
	pub fn with_body(mut self, body: Vec<u8>) -> Self {
		self.body = Some(body);

		self
	}

	/// Returns the absolute URL including the query string.
	pub fn full_url(&self) -> Url {
		let mut url = self.url.clone();

		self.query.apply_to(&mut url);

		url
	}
}

/// Raw response returned by an [`HttpSend`](crate::http::HttpSend) implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Creates a response from a status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// `2xx`
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// `401 Unauthorized`
	pub fn is_unauthorized(&self) -> bool {
		self.status == 401
	}

	/// `404 Not Found`
	pub fn is_not_found(&self) -> bool {
		self.status == 404
	}
}
