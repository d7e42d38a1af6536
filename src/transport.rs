//! Authenticating transport: stamps the access token, refreshes near expiry, retries once on 401.
//!
//! [`AuthTransport`] decorates any [`HttpSend`]. Per call it refreshes at most once, either
//! pre-emptively (the token is within the refresh margin of `expires_at`) or reactively (the
//! service answered `401` to a token the pre-check considered valid). A reactive refresh is
//! followed by exactly one resend whose response is returned as-is, so a service that keeps
//! answering `401` costs two network attempts and one refresh, never more.

mod metrics;

pub use metrics::TransportMetrics;

// self
use crate::{
	_prelude::*,
	auth::{TokenProvider, needs_refresh},
	http::{ApiRequest, ApiResponse, HttpSend, SendFuture},
	obs::{self, RefreshReason},
};

/// Query parameter carrying the bearer token.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// [`HttpSend`] decorator that authenticates every request.
#[derive(Clone)]
pub struct AuthTransport {
	inner: Arc<dyn HttpSend>,
	tokens: Arc<dyn TokenProvider>,
	refresh_margin: Duration,
	metrics: Arc<TransportMetrics>,
}
impl AuthTransport {
	/// Wraps `inner`, reading credentials from `tokens`.
	pub fn new(
		inner: Arc<dyn HttpSend>,
		tokens: Arc<dyn TokenProvider>,
		refresh_margin: Duration,
	) -> Self {
		Self { inner, tokens, refresh_margin, metrics: Default::default() }
	}

	/// Shared call counters.
	pub fn metrics(&self) -> Arc<TransportMetrics> {
		self.metrics.clone()
	}

	async fn authenticated(&self, request: ApiRequest) -> Result<ApiResponse> {
		let mut refreshed = false;

		if needs_refresh(self.tokens.expires_at(), OffsetDateTime::now_utc(), self.refresh_margin) {
			obs::trace_refresh(&request.endpoint, RefreshReason::Preemptive);
			obs::record_token_refresh(RefreshReason::Preemptive);
			self.metrics.record_preemptive_refresh();
			self.tokens.refresh().await?;

			refreshed = true;
		}

		let response = self.dispatch(&request).await?;

		if !response.is_unauthorized() || refreshed {
			return Ok(response);
		}

		obs::trace_refresh(&request.endpoint, RefreshReason::Unauthorized);
		obs::record_token_refresh(RefreshReason::Unauthorized);
		self.metrics.record_reactive_refresh();
		self.tokens.refresh().await?;
		obs::trace_retry(&request.endpoint);
		self.metrics.record_retry();

		self.dispatch(&request).await
	}

	/// Stamps the current access token (read fresh on every attempt) and sends one attempt.
	async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse> {
		let token = self.tokens.access_token();
		let query = request.query.clone().with(ACCESS_TOKEN_PARAM, token.expose());
		let stamped = request.clone().with_query(query);

		self.metrics.record_attempt();

		self.inner.send(stamped).await
	}
}
impl HttpSend for AuthTransport {
	fn send(&self, request: ApiRequest) -> SendFuture<'_> {
		Box::pin(self.authenticated(request))
	}
}
impl Debug for AuthTransport {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthTransport")
			.field("refresh_margin", &self.refresh_margin)
			.field("metrics", &self.metrics)
			.finish()
	}
}
