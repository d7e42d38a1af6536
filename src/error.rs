//! Client-level error types shared across the transport, resource, and pagination layers.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Token endpoint rejected an exchange or refresh.
	#[error(transparent)]
	Authentication(#[from] AuthenticationError),
	/// Request object failed required-field validation; nothing was sent.
	#[error(transparent)]
	Validation(#[from] crate::models::ValidationError),

	/// Remote service reported that the resource does not exist.
	#[error("Resource not found at `{endpoint}`.")]
	NotFound {
		/// Endpoint path that returned not-found.
		endpoint: String,
	},
	/// Response body could not be decoded into the requested type.
	#[error("Response from `{endpoint}` (HTTP {status}) could not be decoded.")]
	Decode {
		/// Endpoint path that produced the body.
		endpoint: String,
		/// HTTP status code of the response.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Request body could not be serialized.
	#[error("Request body for `{endpoint}` could not be encoded.")]
	Encode {
		/// Endpoint path the body was meant for.
		endpoint: String,
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// The client was closed and no longer accepts calls.
	#[error("Client has been closed.")]
	Closed,
}

/// Configuration and validation failures raised before any request is issued.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// A configured URL or endpoint path could not be parsed.
	#[error("URL `{value}` is invalid.")]
	InvalidUrl {
		/// Raw value that failed to parse.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// A required endpoint was not configured.
	#[error("Missing {endpoint} endpoint.")]
	MissingEndpoint {
		/// Which endpoint is missing.
		endpoint: &'static str,
	},
	/// Credential builder validation failed.
	#[error("Unable to build credential.")]
	CredentialBuild(#[from] crate::auth::CredentialBuilderError),
	/// A refresh was requested but the credential carries no refresh token.
	#[error("Credential has no refresh token.")]
	MissingRefreshToken,
	/// Token endpoint response omitted `expires_in`.
	#[error("Token endpoint response is missing expires_in.")]
	MissingExpiresIn,
	/// Token endpoint returned an excessively large `expires_in`.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
	/// Token endpoint returned a non-positive duration.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	pub(crate) fn invalid_url(value: impl Into<String>, source: url::ParseError) -> Self {
		Self::InvalidUrl { value: value.into(), source }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Token endpoint rejected a grant.
///
/// `params` only carries the non-secret request parameters (`grant_type`, `client_id`,
/// `redirect_uri`); client secrets, authorization codes, and refresh tokens are never recorded.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Token endpoint rejected the {grant} grant: {reason}.")]
pub struct AuthenticationError {
	/// Grant label (`authorization_code`, `refresh_token`).
	pub grant: &'static str,
	/// HTTP status code, when available.
	pub status: Option<u16>,
	/// Provider-supplied error code or description.
	pub reason: String,
	/// Attempted non-secret request parameters.
	pub params: BTreeMap<String, String>,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
	/// Transport failed without a typed cause.
	#[error("HTTP client error occurred while calling the API: {message}.")]
	Other {
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
