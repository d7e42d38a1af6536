//! Typed resource client: one JSON call per verb through the authenticating transport.
//!
//! Every call validates and encodes the request body before any network I/O, maps `404` to
//! [`Error::NotFound`] without looking at the body, and decodes every other status into the
//! requested type. Once [`Client::close`] runs, every entry point fails with [`Error::Closed`].

pub mod decode;

pub use decode::{CentsAmountDecoder, ResponseDecoder};

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	auth::TokenProvider,
	config::ClientConfig,
	http::{ApiRequest, HttpSend, Method, QueryParams},
	models::Validate,
	obs::{self, CallKind, CallOutcome, CallSpan},
	transport::{AuthTransport, TransportMetrics},
};

/// Lifecycle of a [`Client`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientState {
	/// Accepting calls.
	Open,
	/// Closed; every call fails with [`Error::Closed`].
	Closed,
}

/// Per-call options.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
	/// Extra query parameters.
	pub query: QueryParams,
	/// JSON rewrites applied, in order, before typed decoding.
	pub decoders: Vec<Arc<dyn ResponseDecoder>>,
}
impl RequestOptions {
	/// Options with no query parameters and no decoders.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the query parameters.
	pub fn with_query(mut self, query: QueryParams) -> Self {
		self.query = query;

		self
	}

	/// Appends a decoder.
	pub fn with_decoder(mut self, decoder: impl ResponseDecoder) -> Self {
		self.decoders.push(Arc::new(decoder));

		self
	}
}

/// Cheaply cloneable handle to the wallet API.
#[derive(Clone)]
pub struct Client {
	inner: Arc<ClientInner>,
}
struct ClientInner {
	config: ClientConfig,
	transport: AuthTransport,
	state: RwLock<ClientState>,
}
impl Client {
	/// Creates a client that sends through `http`, authenticated by `tokens`.
	pub fn with_http_client(
		config: ClientConfig,
		http: Arc<dyn HttpSend>,
		tokens: Arc<dyn TokenProvider>,
	) -> Self {
		let transport = AuthTransport::new(http, tokens, config.refresh_margin);

		Self {
			inner: Arc::new(ClientInner {
				config,
				transport,
				state: RwLock::new(ClientState::Open),
			}),
		}
	}

	/// Creates a client backed by a reqwest sender configured from `config.user_agent`.
	#[cfg(feature = "reqwest")]
	pub fn new(config: ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
		let http = match config.user_agent.as_deref() {
			Some(user_agent) => ReqwestHttpClient::with_user_agent(user_agent)?,
			None => ReqwestHttpClient::default(),
		};

		Ok(Self::with_http_client(config, Arc::new(http), tokens))
	}

	/// Configuration this client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	/// Counters of the authenticating transport.
	pub fn transport_metrics(&self) -> Arc<TransportMetrics> {
		self.inner.transport.metrics()
	}

	/// Current lifecycle state.
	pub fn state(&self) -> ClientState {
		*self.inner.state.read()
	}

	/// Returns `true` once [`close`](Self::close) has run on any clone.
	pub fn is_closed(&self) -> bool {
		matches!(self.state(), ClientState::Closed)
	}

	/// Closes the client for every clone; idempotent.
	pub fn close(&self) {
		*self.inner.state.write() = ClientState::Closed;
	}

	pub(crate) fn ensure_open(&self) -> Result<()> {
		if self.is_closed() { Err(Error::Closed) } else { Ok(()) }
	}

	/// `GET endpoint`.
	pub async fn get<T>(&self, endpoint: &str, options: RequestOptions) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.ensure_open()?;
		self.call(CallKind::Request, Method::Get, endpoint, None, options).await
	}

	/// `POST endpoint` with a validated JSON body.
	pub async fn post<B, T>(&self, endpoint: &str, body: &B, options: RequestOptions) -> Result<T>
	where
		B: Serialize + Validate,
		T: DeserializeOwned,
	{
		self.ensure_open()?;

		let body = encode_body(endpoint, body)?;

		self.call(CallKind::Request, Method::Post, endpoint, Some(body), options).await
	}

	/// `POST endpoint` without a body.
	pub async fn post_empty<T>(&self, endpoint: &str, options: RequestOptions) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.ensure_open()?;
		self.call(CallKind::Request, Method::Post, endpoint, None, options).await
	}

	/// `PUT endpoint` with a validated JSON body.
	pub async fn put<B, T>(&self, endpoint: &str, body: &B, options: RequestOptions) -> Result<T>
	where
		B: Serialize + Validate,
		T: DeserializeOwned,
	{
		self.ensure_open()?;

		let body = encode_body(endpoint, body)?;

		self.call(CallKind::Request, Method::Put, endpoint, Some(body), options).await
	}

	/// `DELETE endpoint`.
	pub async fn delete<T>(&self, endpoint: &str, options: RequestOptions) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.ensure_open()?;
		self.call(CallKind::Request, Method::Delete, endpoint, None, options).await
	}

	pub(crate) async fn call<T>(
		&self,
		kind: CallKind,
		method: Method,
		endpoint: &str,
		body: Option<Vec<u8>>,
		options: RequestOptions,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let span = CallSpan::new(kind, method.as_str());

		obs::record_call_outcome(kind, CallOutcome::Attempt);

		let result = span.instrument(self.execute(method, endpoint, body, options)).await;

		obs::record_call_outcome(kind, CallOutcome::of(&result));

		result
	}

	async fn execute<T>(
		&self,
		method: Method,
		endpoint: &str,
		body: Option<Vec<u8>>,
		options: RequestOptions,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let url = self.inner.config.endpoint_url(endpoint)?;
		let mut request = ApiRequest::new(method, endpoint, url).with_query(options.query);

		if let Some(body) = body {
			request = request.with_body(body);
		}

		let response = self.inner.transport.send(request).await?;

		if response.is_not_found() {
			return Err(Error::NotFound { endpoint: endpoint.to_owned() });
		}

		decode::decode_body(endpoint, &response, &options.decoders)
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("config", &self.inner.config)
			.field("transport", &self.inner.transport)
			.field("state", &self.state())
			.finish()
	}
}

fn encode_body<B>(endpoint: &str, body: &B) -> Result<Vec<u8>>
where
	B: Serialize + Validate,
{
	body.validate()?;

	serde_json::to_vec(body).map_err(|source| Error::Encode { endpoint: endpoint.to_owned(), source })
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;
	use crate::{
		_preludet::StaticTokens,
		http::{ApiResponse, SendFuture},
		models::{AccountResponse, AddAccountRequest, UpdateAccountRequest},
	};

	/// Answers every request with a fixed response and remembers what it saw.
	struct CannedSender {
		response: ApiResponse,
		calls: AtomicUsize,
		last: Mutex<Option<ApiRequest>>,
	}
	impl CannedSender {
		fn new(status: u16, body: &str) -> Arc<Self> {
			Arc::new(Self {
				response: ApiResponse::new(status, body),
				calls: AtomicUsize::new(0),
				last: Mutex::new(None),
			})
		}
	}
	impl HttpSend for CannedSender {
		fn send(&self, request: ApiRequest) -> SendFuture<'_> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			*self.last.lock() = Some(request);

			let response = self.response.clone();

			Box::pin(async move { Ok(response) })
		}
	}

	fn client(sender: &Arc<CannedSender>) -> Client {
		let config = ClientConfig::builder(
			Url::parse("https://api.example.com/v1/").expect("Base URL fixture should parse."),
		)
		.build()
		.expect("Client configuration fixture should be valid.");

		Client::with_http_client(config, sender.clone(), StaticTokens::new("token"))
	}

	#[tokio::test]
	async fn not_found_short_circuits_decoding() {
		let sender = CannedSender::new(404, "<html>not json</html>");
		let err = client(&sender)
			.get::<AccountResponse>("accounts/doesnotexist", RequestOptions::new())
			.await
			.expect_err("404 should surface as NotFound.");

		assert!(matches!(err, Error::NotFound { endpoint } if endpoint == "accounts/doesnotexist"));
	}

	#[tokio::test]
	async fn invalid_body_fails_before_any_network_call() {
		let sender = CannedSender::new(200, "{}");
		let err = client(&sender)
			.post::<_, AccountResponse>("accounts", &AddAccountRequest::new(""), RequestOptions::new())
			.await
			.expect_err("Blank account name should fail validation.");

		assert!(matches!(err, Error::Validation(_)));
		assert_eq!(sender.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn closed_client_rejects_calls_on_every_clone() {
		let sender = CannedSender::new(200, "{}");
		let client = client(&sender);
		let clone = client.clone();

		client.close();

		assert!(clone.is_closed());
		assert!(matches!(
			clone.get::<AccountResponse>("accounts/1", RequestOptions::new()).await,
			Err(Error::Closed)
		));
		assert_eq!(sender.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn request_carries_body_query_and_token() {
		let sender = CannedSender::new(200, "{\"success\":true,\"account\":{\"name\":\"wallet\"}}");
		let response: AccountResponse = client(&sender)
			.put(
				"accounts/a-1",
				&UpdateAccountRequest::new("wallet"),
				RequestOptions::new().with_query(QueryParams::new().with("page", 1)),
			)
			.await
			.expect("Update should succeed.");
		let request = sender.last.lock().take().expect("Sender should have seen the request.");

		assert!(response.success);
		assert_eq!(request.method, Method::Put);
		assert_eq!(request.url.as_str(), "https://api.example.com/v1/accounts/a-1");
		assert_eq!(request.query.get("page"), Some("1"));
		assert_eq!(request.query.get("access_token"), Some("token"));
		assert_eq!(request.body.as_deref(), Some(&b"{\"account\":{\"name\":\"wallet\"}}"[..]));
	}
}
