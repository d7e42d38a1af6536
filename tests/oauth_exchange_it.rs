#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use time::{Duration, OffsetDateTime};
use url::Url;
// self
use wallet_api::{
	Error,
	error::AuthenticationError,
	oauth::{OAuthClient, OAuthConfig},
};

const CLIENT_ID: &str = "exchange-client";
const CLIENT_SECRET: &str = "exchange-secret";
const REDIRECT_URI: &str = "http://127.0.0.1/callback";

fn build_oauth(server: &MockServer) -> OAuthClient<wallet_api::http::ReqwestHttpClient> {
	let config = OAuthConfig::builder(CLIENT_ID)
		.client_secret(CLIENT_SECRET)
		.authorization_endpoint(
			Url::parse(&server.url("/oauth/authorize"))
				.expect("Mock authorize endpoint should parse successfully."),
		)
		.token_endpoint(
			Url::parse(&server.url("/oauth/token"))
				.expect("Mock token endpoint should parse successfully."),
		)
		.redirect_uri(Url::parse(REDIRECT_URI).expect("Redirect URI should parse successfully."))
		.scopes(["balance", "transactions"])
		.build()
		.expect("OAuth configuration should be valid.");

	OAuthClient::new(config)
}

#[tokio::test]
async fn authorization_code_exchange_issues_credential() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.body_includes("grant_type=authorization_code")
				.body_includes("code=auth-code")
				.body_includes("redirect_uri=http%3A%2F%2F127.0.0.1%2Fcallback");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"access-new\",\"refresh_token\":\"refresh-new\",\"token_type\":\"bearer\",\"expires_in\":7200}",
			);
		})
		.await;
	let oauth = build_oauth(&server);
	let session = oauth.start_authorization().expect("Authorization should start.");

	assert!(session.authorize_url.as_str().starts_with(&server.url("/oauth/authorize")));
	assert!(session.authorize_url.as_str().contains("scope=balance+transactions"));

	session.validate_state(&session.state).expect("Echoed state should validate.");

	let credential =
		oauth.exchange_code(&session, "auth-code").await.expect("Code exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(credential.access_token.expose(), "access-new");
	assert_eq!(credential.refresh_token.as_ref().map(|secret| secret.expose()), Some("refresh-new"));
	assert!(credential.expires_at > OffsetDateTime::now_utc() + Duration::minutes(110));
	assert!(!format!("{credential:?}").contains("access-new"));
}

#[tokio::test]
async fn rejected_code_reports_status_and_redacted_params() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_grant\"}");
		})
		.await;

	let oauth = build_oauth(&server);
	let session = oauth.start_authorization().expect("Authorization should start.");
	let err = oauth.exchange_code(&session, "bad-code").await.expect_err("Exchange should fail.");

	match err {
		Error::Authentication(AuthenticationError { grant, status, reason, params }) => {
			assert_eq!(grant, "authorization_code");
			assert_eq!(status, Some(400));
			assert_eq!(reason, "invalid_grant");
			assert_eq!(params.get("redirect_uri").map(String::as_str), Some(REDIRECT_URI));
			assert!(params.values().all(|value| value != "bad-code" && value != CLIENT_SECRET));
		},
		other => panic!("Expected an authentication error, got {other:?}."),
	}
}

#[tokio::test]
async fn missing_expires_in_is_a_configuration_error() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"access-new\",\"token_type\":\"bearer\"}");
		})
		.await;

	let oauth = build_oauth(&server);
	let session = oauth.start_authorization().expect("Authorization should start.");
	let err = oauth.exchange_code(&session, "code").await.expect_err("Exchange should fail.");

	assert!(matches!(err, Error::Config(wallet_api::error::ConfigError::MissingExpiresIn)));
}
