//! Resource-client configuration and shared endpoint validation.

// std
use std::net::{Ipv4Addr, Ipv6Addr};
// crates.io
use url::Host;
// self
use crate::{_prelude::*, error::ConfigError};

/// Runtime configuration for [`Client`](crate::client::Client).
///
/// Endpoint strings passed to the client are joined onto `base_url`, which always ends with `/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClientConfigBuilder", into = "ClientConfigBuilder")]
pub struct ClientConfig {
	/// API root every endpoint is resolved against.
	pub base_url: Url,
	/// How long before `expires_at` the transport refreshes pre-emptively.
	pub refresh_margin: Duration,
	/// `limit` applied to list calls that do not set one explicitly.
	pub default_limit: Option<u32>,
	/// User agent for the default reqwest sender.
	pub user_agent: Option<String>,
}
impl ClientConfig {
	/// Default pre-emptive refresh margin.
	pub const DEFAULT_REFRESH_MARGIN: Duration = Duration::minutes(1);

	/// Returns a builder rooted at `base_url`.
	pub fn builder(base_url: Url) -> ClientConfigBuilder {
		ClientConfigBuilder::new(base_url)
	}

	/// Resolves an endpoint path (`accounts/123`) against the base URL.
	pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, ConfigError> {
		let relative = endpoint.trim_start_matches('/');

		self.base_url.join(relative).map_err(|source| ConfigError::invalid_url(endpoint, source))
	}
}

/// Builder for [`ClientConfig`]; also its serialized form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfigBuilder {
	/// API root every endpoint is resolved against.
	pub base_url: Url,
	/// Pre-emptive refresh margin, in whole seconds.
	#[serde(default = "default_refresh_margin_secs")]
	pub refresh_margin_secs: i64,
	/// `limit` applied to list calls that do not set one explicitly.
	#[serde(default)]
	pub default_limit: Option<u32>,
	/// User agent for the default reqwest sender.
	#[serde(default)]
	pub user_agent: Option<String>,
}
impl ClientConfigBuilder {
	/// Creates a builder with default settings.
	pub fn new(base_url: Url) -> Self {
		Self {
			base_url,
			refresh_margin_secs: default_refresh_margin_secs(),
			default_limit: None,
			user_agent: None,
		}
	}

	/// Overrides the pre-emptive refresh margin; negative values clamp to zero.
	pub fn refresh_margin(mut self, margin: Duration) -> Self {
		self.refresh_margin_secs = margin.whole_seconds().max(0);

		self
	}

	/// Sets the default `limit` for list calls.
	pub fn default_limit(mut self, limit: u32) -> Self {
		self.default_limit = Some(limit);

		self
	}

	/// Sets the user agent for the default reqwest sender.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());

		self
	}

	/// Validates and produces the configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let mut base_url = self.base_url;

		validate_endpoint("api", &base_url)?;

		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());

			base_url.set_path(&path);
		}

		Ok(ClientConfig {
			base_url,
			refresh_margin: Duration::seconds(self.refresh_margin_secs.max(0)),
			default_limit: self.default_limit,
			user_agent: self.user_agent,
		})
	}
}
impl TryFrom<ClientConfigBuilder> for ClientConfig {
	type Error = ConfigError;

	fn try_from(value: ClientConfigBuilder) -> Result<Self, Self::Error> {
		value.build()
	}
}
impl From<ClientConfig> for ClientConfigBuilder {
	fn from(value: ClientConfig) -> Self {
		Self {
			base_url: value.base_url,
			refresh_margin_secs: value.refresh_margin.whole_seconds(),
			default_limit: value.default_limit,
			user_agent: value.user_agent,
		}
	}
}

fn default_refresh_margin_secs() -> i64 {
	ClientConfig::DEFAULT_REFRESH_MARGIN.whole_seconds()
}

/// Requires HTTPS unless the host is loopback (`localhost`, `127.0.0.1`, `::1`).
pub(crate) fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() == "https" || (url.scheme() == "http" && is_loopback(url)) {
		Ok(())
	} else {
		Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => ip == Ipv4Addr::LOCALHOST,
		Some(Host::Ipv6(ip)) => ip == Ipv6Addr::LOCALHOST,
		None => false,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("URL fixture should parse.")
	}

	#[test]
	fn build_enforces_trailing_slash_and_joins_endpoints() {
		let config = ClientConfig::builder(url("https://api.example.com/v1"))
			.build()
			.expect("HTTPS configuration should be valid.");

		assert_eq!(config.base_url.as_str(), "https://api.example.com/v1/");
		assert_eq!(config.refresh_margin, Duration::minutes(1));
		assert_eq!(
			config
				.endpoint_url("/accounts/doesnotexist")
				.expect("Endpoint should join onto the base URL.")
				.as_str(),
			"https://api.example.com/v1/accounts/doesnotexist"
		);
	}

	#[test]
	fn plain_http_is_only_allowed_for_loopback() {
		assert!(ClientConfig::builder(url("http://127.0.0.1:8080/")).build().is_ok());
		assert!(ClientConfig::builder(url("http://localhost/api")).build().is_ok());
		assert!(matches!(
			ClientConfig::builder(url("http://api.example.com/")).build(),
			Err(ConfigError::InsecureEndpoint { endpoint: "api", .. })
		));
	}

	#[test]
	fn negative_refresh_margin_clamps_to_zero() {
		let config = ClientConfig::builder(url("https://api.example.com/"))
			.refresh_margin(Duration::seconds(-5))
			.build()
			.expect("Configuration should be valid.");

		assert_eq!(config.refresh_margin, Duration::ZERO);
	}

	#[test]
	fn deserialization_runs_validation() {
		let config: ClientConfig = serde_json::from_str(
			"{\"base_url\":\"https://api.example.com/v1\",\"default_limit\":25}",
		)
		.expect("Configuration should deserialize.");

		assert_eq!(config.base_url.as_str(), "https://api.example.com/v1/");
		assert_eq!(config.default_limit, Some(25));
		assert!(
			serde_json::from_str::<ClientConfig>("{\"base_url\":\"http://api.example.com/\"}")
				.is_err()
		);
	}
}
