//! Token-provider capability and its OAuth refresh-token implementation.
//!
//! The authenticating transport only reads the current access token and expiry and asks for a
//! refresh; serializing concurrent refreshes is the provider's job. [`OAuthTokenProvider`] does it
//! with an async singleflight guard: callers that queued behind a refresh that already rotated
//! the access token return without contacting the token endpoint again.

mod metrics;

pub use metrics::RefreshMetrics;

// self
use crate::{
	_prelude::*,
	auth::{Credential, TokenSecret},
	error::ConfigError,
	http::TokenHttpClient,
	oauth::OAuthClient,
};

/// Boxed future returned by [`TokenProvider::refresh`].
pub type RefreshFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + 'a + Send>>;

/// Callback invoked with every newly installed credential, typically to persist it.
pub type RefreshListener = Arc<dyn Fn(&Credential) + Send + Sync>;

/// Supplies the credential the authenticating transport stamps onto requests.
pub trait TokenProvider
where
	Self: 'static + Send + Sync,
{
	/// Current access token.
	fn access_token(&self) -> TokenSecret;

	/// Current expiry estimate of [`access_token`](Self::access_token).
	fn expires_at(&self) -> OffsetDateTime;

	/// Obtains a new access token; must be safe under concurrent invocation.
	///
	/// A failed or cancelled refresh must leave the previous credential in place.
	fn refresh(&self) -> RefreshFuture<'_>;
}
impl<T> TokenProvider for Arc<T>
where
	T: ?Sized + TokenProvider,
{
	fn access_token(&self) -> TokenSecret {
		(**self).access_token()
	}

	fn expires_at(&self) -> OffsetDateTime {
		(**self).expires_at()
	}

	fn refresh(&self) -> RefreshFuture<'_> {
		(**self).refresh()
	}
}

/// [`TokenProvider`] that rotates its [`Credential`] through the `refresh_token` grant.
pub struct OAuthTokenProvider<C>
where
	C: ?Sized + TokenHttpClient,
{
	oauth: OAuthClient<C>,
	credential: RwLock<Credential>,
	singleflight: AsyncMutex<()>,
	metrics: Arc<RefreshMetrics>,
	listener: Option<RefreshListener>,
}
impl<C> OAuthTokenProvider<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a provider seeded with `credential`.
	pub fn new(oauth: OAuthClient<C>, credential: Credential) -> Self {
		Self {
			oauth,
			credential: RwLock::new(credential),
			singleflight: AsyncMutex::new(()),
			metrics: Default::default(),
			listener: None,
		}
	}

	/// Registers a listener notified after every successful refresh.
	pub fn on_refresh(mut self, listener: impl Fn(&Credential) + Send + Sync + 'static) -> Self {
		self.listener = Some(Arc::new(listener));

		self
	}

	/// Returns a snapshot of the current credential.
	pub fn credential(&self) -> Credential {
		self.credential.read().clone()
	}

	/// Shared refresh counters.
	pub fn metrics(&self) -> Arc<RefreshMetrics> {
		self.metrics.clone()
	}

	async fn refresh_once(&self, observed: TokenSecret) -> Result<()> {
		let _singleflight = self.singleflight.lock().await;

		if self.credential.read().access_token != observed {
			self.metrics.record_coalesced();

			return Ok(());
		}

		self.metrics.record_attempt();

		let refresh_token = self.credential.read().refresh_token.clone().ok_or_else(|| {
			self.metrics.record_failure();

			Error::from(ConfigError::MissingRefreshToken)
		})?;
		let mut next = self.oauth.refresh(&refresh_token).await.inspect_err(|_| {
			self.metrics.record_failure();
		})?;

		if next.refresh_token.is_none() {
			next.refresh_token = Some(refresh_token);
		}

		*self.credential.write() = next.clone();

		if let Some(listener) = self.listener.as_ref() {
			listener(&next);
		}

		self.metrics.record_success();

		Ok(())
	}
}
impl<C> TokenProvider for OAuthTokenProvider<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn access_token(&self) -> TokenSecret {
		self.credential.read().access_token.clone()
	}

	fn expires_at(&self) -> OffsetDateTime {
		self.credential.read().expires_at
	}

	fn refresh(&self) -> RefreshFuture<'_> {
		let observed = self.access_token();

		Box::pin(self.refresh_once(observed))
	}
}
impl<C> Debug for OAuthTokenProvider<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthTokenProvider")
			.field("oauth", &self.oauth)
			.field("credential", &*self.credential.read())
			.field("metrics", &self.metrics)
			.field("listener_set", &self.listener.is_some())
			.finish()
	}
}
