//! OAuth 2.0 authorization-code helpers and token-endpoint calls built on the `oauth2` crate.
//!
//! [`OAuthClient`] covers the one-shot parts of the grant (authorize URL, state check, code
//! exchange) plus the `refresh_token` grant that
//! [`OAuthTokenProvider`](crate::auth::OAuthTokenProvider) drives on behalf of the transport.

pub use oauth2;

// std
use std::borrow::Cow;
// crates.io
use oauth2::{
	AuthType, AuthorizationCode, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
	HttpClientError, RedirectUrl, RefreshToken, RequestTokenError, TokenResponse, TokenUrl,
	basic::{BasicClient, BasicErrorResponse, BasicRequestTokenError, BasicTokenResponse},
};
use rand::{Rng, distr::Alphanumeric};
// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	auth::{Credential, CredentialBuilderError, TokenSecret},
	config,
	error::{AuthenticationError, ConfigError, TransportError},
	http::{ResponseMetadata, ResponseMetadataSlot, TokenHttpClient},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

type TokenClient =
	BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Boxed future resolving to a freshly issued [`Credential`].
pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<Credential>> + 'a + Send>>;

const STATE_LEN: usize = 32;

/// How the client authenticates itself to the token endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
	/// HTTP Basic authentication with the client id and secret.
	#[default]
	ClientSecretBasic,
	/// Client id and secret sent in the form body.
	ClientSecretPost,
}

/// OAuth client registration and endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthConfig {
	/// OAuth client identifier.
	pub client_id: String,
	/// Client secret for confidential clients.
	pub client_secret: Option<TokenSecret>,
	/// Authorization endpoint users are redirected to.
	pub authorization_endpoint: Option<Url>,
	/// Token endpoint used for code exchanges and refreshes.
	pub token_endpoint: Url,
	/// Redirect URI registered with the application.
	pub redirect_uri: Option<Url>,
	/// Scopes requested during authorization.
	pub scopes: Vec<String>,
	/// Client authentication method for the token endpoint.
	pub client_auth_method: ClientAuthMethod,
}
impl OAuthConfig {
	/// Returns a builder for `client_id`.
	pub fn builder(client_id: impl Into<String>) -> OAuthConfigBuilder {
		OAuthConfigBuilder::new(client_id)
	}
}

/// Builder for [`OAuthConfig`] values.
#[derive(Clone, Debug)]
pub struct OAuthConfigBuilder {
	client_id: String,
	client_secret: Option<TokenSecret>,
	authorization_endpoint: Option<Url>,
	token_endpoint: Option<Url>,
	redirect_uri: Option<Url>,
	scopes: Vec<String>,
	client_auth_method: ClientAuthMethod,
}
impl OAuthConfigBuilder {
	/// Creates a new builder for `client_id`.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: None,
			authorization_endpoint: None,
			token_endpoint: None,
			redirect_uri: None,
			scopes: Vec::new(),
			client_auth_method: ClientAuthMethod::default(),
		}
	}

	/// Sets the client secret.
	pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(TokenSecret::new(secret));

		self
	}

	/// Sets the authorization endpoint.
	pub fn authorization_endpoint(mut self, url: Url) -> Self {
		self.authorization_endpoint = Some(url);

		self
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Sets the redirect URI.
	pub fn redirect_uri(mut self, url: Url) -> Self {
		self.redirect_uri = Some(url);

		self
	}

	/// Adds requested scopes.
	pub fn scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes.extend(scopes.into_iter().map(Into::into));

		self
	}

	/// Overrides the client authentication method.
	pub fn client_auth_method(mut self, method: ClientAuthMethod) -> Self {
		self.client_auth_method = method;

		self
	}

	/// Consumes the builder and validates the endpoints.
	pub fn build(self) -> Result<OAuthConfig, ConfigError> {
		let token_endpoint =
			self.token_endpoint.ok_or(ConfigError::MissingEndpoint { endpoint: "token" })?;

		config::validate_endpoint("token", &token_endpoint)?;

		if let Some(authorization) = self.authorization_endpoint.as_ref() {
			config::validate_endpoint("authorization", authorization)?;
		}

		Ok(OAuthConfig {
			client_id: self.client_id,
			client_secret: self.client_secret,
			authorization_endpoint: self.authorization_endpoint,
			token_endpoint,
			redirect_uri: self.redirect_uri,
			scopes: self.scopes,
			client_auth_method: self.client_auth_method,
		})
	}
}

/// Authorization-code handshake returned by [`OAuthClient::start_authorization`].
#[derive(Clone, Debug)]
pub struct AuthorizationSession {
	/// Opaque state value that must round-trip via the redirect handler.
	pub state: String,
	/// Authorize URL the user should be sent to.
	pub authorize_url: Url,
	/// Redirect URI embedded in the authorize URL, echoed during the exchange.
	pub redirect_uri: Option<Url>,
}
impl AuthorizationSession {
	/// Validates the returned `state` parameter after the authorization redirect.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if returned_state == self.state {
			Ok(())
		} else {
			Err(AuthenticationError {
				grant: "authorization_code",
				status: None,
				reason: "Authorization state mismatch".into(),
				params: BTreeMap::new(),
			}
			.into())
		}
	}
}

/// Token-endpoint client for one OAuth application.
pub struct OAuthClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	config: OAuthConfig,
	oauth_client: TokenClient,
	http_client: Arc<C>,
}
impl<C> OAuthClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a client that reuses the caller-provided token transport.
	pub fn with_http_client(config: OAuthConfig, http_client: impl Into<Arc<C>>) -> Self {
		let mut oauth_client = BasicClient::new(ClientId::new(config.client_id.clone()))
			.set_token_uri(TokenUrl::from_url(config.token_endpoint.clone()));

		if let Some(secret) = config.client_secret.as_ref() {
			oauth_client =
				oauth_client.set_client_secret(ClientSecret::new(secret.expose().to_owned()));
		}
		if let Some(redirect) = config.redirect_uri.as_ref() {
			oauth_client = oauth_client.set_redirect_uri(RedirectUrl::from_url(redirect.clone()));
		}
		if matches!(config.client_auth_method, ClientAuthMethod::ClientSecretPost) {
			oauth_client = oauth_client.set_auth_type(AuthType::RequestBody);
		}

		Self { config, oauth_client, http_client: http_client.into() }
	}

	/// Returns the configuration this client was built from.
	pub fn config(&self) -> &OAuthConfig {
		&self.config
	}

	/// Builds the authorize URL and a fresh random `state`.
	pub fn start_authorization(&self) -> Result<AuthorizationSession> {
		let mut authorize_url = self
			.config
			.authorization_endpoint
			.clone()
			.ok_or(ConfigError::MissingEndpoint { endpoint: "authorization" })?;
		let state = random_string(STATE_LEN);
		let mut pairs = authorize_url.query_pairs_mut();

		pairs.append_pair("response_type", "code");
		pairs.append_pair("client_id", &self.config.client_id);

		if let Some(redirect) = self.config.redirect_uri.as_ref() {
			pairs.append_pair("redirect_uri", redirect.as_str());
		}
		if !self.config.scopes.is_empty() {
			pairs.append_pair("scope", &self.config.scopes.join(" "));
		}

		pairs.append_pair("state", &state);

		drop(pairs);

		Ok(AuthorizationSession {
			state,
			authorize_url,
			redirect_uri: self.config.redirect_uri.clone(),
		})
	}

	/// Exchanges an authorization code for a credential.
	pub fn exchange_code<'a>(
		&'a self,
		session: &'a AuthorizationSession,
		code: &'a str,
	) -> TokenFuture<'a> {
		const KIND: CallKind = CallKind::AuthorizationCode;

		let meta = ResponseMetadataSlot::default();
		let span = CallSpan::new(KIND, "exchange_code");

		Box::pin(span.instrument(async move {
			obs::record_call_outcome(KIND, CallOutcome::Attempt);

			let instrumented = self.http_client.with_metadata(meta.clone());
			let mut request =
				self.oauth_client.exchange_code(AuthorizationCode::new(code.to_owned()));

			if let Some(redirect) = session.redirect_uri.as_ref() {
				let redirect_url = RedirectUrl::from_url(redirect.clone());

				request = request.set_redirect_uri(Cow::Owned(redirect_url));
			}

			let result = match request.request_async(&instrumented).await {
				Ok(response) => credential_from_response(&response),
				Err(err) => Err(self.map_request_error(
					"authorization_code",
					session.redirect_uri.as_ref(),
					meta.take(),
					err,
				)),
			};

			obs::record_call_outcome(KIND, CallOutcome::of(&result));

			result
		}))
	}

	/// Performs the `refresh_token` grant.
	///
	/// The returned credential carries a refresh token only when the server rotated it.
	pub fn refresh<'a>(&'a self, refresh_token: &'a TokenSecret) -> TokenFuture<'a> {
		const KIND: CallKind = CallKind::Refresh;

		let meta = ResponseMetadataSlot::default();
		let span = CallSpan::new(KIND, "refresh_token");

		Box::pin(span.instrument(async move {
			obs::record_call_outcome(KIND, CallOutcome::Attempt);

			let instrumented = self.http_client.with_metadata(meta.clone());
			let secret = RefreshToken::new(refresh_token.expose().to_owned());
			let request = self.oauth_client.exchange_refresh_token(&secret);
			let result = match request.request_async(&instrumented).await {
				Ok(response) => credential_from_response(&response),
				Err(err) => Err(self.map_request_error("refresh_token", None, meta.take(), err)),
			};

			obs::record_call_outcome(KIND, CallOutcome::of(&result));

			result
		}))
	}

	fn map_request_error(
		&self,
		grant: &'static str,
		redirect_uri: Option<&Url>,
		meta: Option<ResponseMetadata>,
		err: BasicRequestTokenError<HttpClientError<C::TransportError>>,
	) -> Error {
		let status = meta.and_then(|value| value.status);
		let reason = match err {
			RequestTokenError::ServerResponse(response) => describe_error_response(&response),
			RequestTokenError::Request(error) => return map_transport_error(error),
			RequestTokenError::Parse(error, _body) =>
				format!("Token response could not be parsed at `{}`", error.path()),
			RequestTokenError::Other(message) => message,
		};

		let params = self.attempted_params(grant, redirect_uri);

		AuthenticationError { grant, status, reason, params }.into()
	}

	/// Non-secret parameters of a token request; secrets, codes, and refresh tokens are omitted.
	fn attempted_params(
		&self,
		grant: &'static str,
		redirect_uri: Option<&Url>,
	) -> BTreeMap<String, String> {
		let mut params = BTreeMap::from([
			("grant_type".to_owned(), grant.to_owned()),
			("client_id".to_owned(), self.config.client_id.clone()),
		]);

		if let Some(redirect) = redirect_uri {
			params.insert("redirect_uri".into(), redirect.to_string());
		}

		params
	}
}
#[cfg(feature = "reqwest")]
impl OAuthClient<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: OAuthConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> Clone for OAuthClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			oauth_client: self.oauth_client.clone(),
			http_client: self.http_client.clone(),
		}
	}
}
impl<C> Debug for OAuthClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthClient").field("config", &self.config).finish()
	}
}

fn credential_from_response(response: &BasicTokenResponse) -> Result<Credential> {
	let expires_in = response.expires_in().ok_or(ConfigError::MissingExpiresIn)?.as_secs();
	let expires_in = i64::try_from(expires_in).map_err(|_| ConfigError::ExpiresInOutOfRange)?;

	if expires_in <= 0 {
		return Err(ConfigError::NonPositiveExpiresIn.into());
	}

	let mut builder = Credential::builder()
		.access_token(response.access_token().secret().to_owned())
		.expires_in(Duration::seconds(expires_in));

	if let Some(refresh) = response.refresh_token() {
		builder = builder.refresh_token(refresh.secret().to_owned());
	}

	builder.build().map_err(|err| match err {
		CredentialBuilderError::ExpiryOutOfRange => ConfigError::ExpiresInOutOfRange.into(),
		other => ConfigError::from(other).into(),
	})
}

fn describe_error_response(response: &BasicErrorResponse) -> String {
	match response.error_description() {
		Some(description) => format!("{} ({description})", response.error().as_ref()),
		None => response.error().as_ref().to_owned(),
	}
}

fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other { message: "unknown token transport failure".into() }.into(),
	}
}

fn random_string(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}
