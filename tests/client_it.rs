#![cfg(feature = "reqwest")]

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use time::{Duration, OffsetDateTime};
use url::Url;
// self
use wallet_api::{
	Client, Error,
	auth::{RefreshFuture, TokenProvider, TokenSecret},
	config::ClientConfig,
	models::{AccountId, AddAccountRequest, Money, SendMoneyRequest},
	pagination::ListOptions,
};

struct FixedTokens;
impl TokenProvider for FixedTokens {
	fn access_token(&self) -> TokenSecret {
		TokenSecret::new("fixed-token")
	}

	fn expires_at(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc() + Duration::hours(1)
	}

	fn refresh(&self) -> RefreshFuture<'_> {
		Box::pin(async { Ok(()) })
	}
}

fn build_client(server: &MockServer) -> Client {
	let base_url = Url::parse(&server.url("/api/v1/")).expect("Mock base URL should parse.");
	let config = ClientConfig::builder(base_url)
		.user_agent("wallet-api-tests")
		.build()
		.expect("Loopback HTTP configuration should be accepted.");

	Client::new(config, Arc::new(FixedTokens)).expect("Reqwest-backed client should build.")
}

#[tokio::test]
async fn missing_account_surfaces_not_found_without_parsing() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/accounts/doesnotexist");
			then.status(404).header("content-type", "text/html").body("<h1>Not Found</h1>");
		})
		.await;
	let client = build_client(&server);
	let id = AccountId::new("doesnotexist").expect("Account id fixture should be valid.");
	let err = client.accounts().get(&id).await.expect_err("Missing account should fail.");

	mock.assert_async().await;

	match err {
		Error::NotFound { endpoint } => assert_eq!(endpoint, "accounts/doesnotexist"),
		other => panic!("Expected NotFound, got {other:?}."),
	}
}

#[tokio::test]
async fn balance_decodes_fixed_point_amount_and_stamps_token() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/v1/accounts/a-1/balance")
				.query_param("access_token", "fixed-token")
				.header("user-agent", "wallet-api-tests");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"amount\":\"36.62800000\",\"currency\":\"BTC\"}");
		})
		.await;
	let client = build_client(&server);
	let balance = client.accounts().balance(&AccountId::new("a-1")?).await?;

	mock.assert_async().await;

	assert_eq!(balance, Money::new("36.628".parse()?, "BTC"));
	assert_eq!(balance.to_string(), "36.62800000 BTC");

	Ok(())
}

#[tokio::test]
async fn invalid_requests_never_reach_the_server() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(500);
		})
		.await;
	let client = build_client(&server);
	let err = client
		.accounts()
		.create(&AddAccountRequest::new("   "))
		.await
		.expect_err("Blank account name should be rejected.");

	assert!(matches!(err, Error::Validation(_)));

	let err = client
		.transactions()
		.send_money(&SendMoneyRequest::new("", "1.5".parse().expect("Decimal should parse.")))
		.await
		.expect_err("Missing recipient should be rejected.");

	assert!(matches!(err, Error::Validation(_)));
	assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn closed_client_rejects_single_calls_and_listings() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200).body("{}");
		})
		.await;
	let client = build_client(&server);
	let id = AccountId::new("a-1").expect("Account id fixture should be valid.");

	client.clone().close();

	assert!(client.is_closed());
	assert!(matches!(client.accounts().get(&id).await, Err(Error::Closed)));
	assert!(matches!(client.accounts().delete(&id).await, Err(Error::Closed)));
	assert!(matches!(client.contacts().list(None, ListOptions::new()), Err(Error::Closed)));
	assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn create_account_posts_json_body() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/accounts")
				.header("content-type", "application/json")
				.json_body(serde_json::json!({ "account": { "name": "wallet" } }));
			then.status(200).header("content-type", "application/json").body(
				"{\"success\":true,\"account\":{\"id\":\"a-9\",\"name\":\"wallet\",\"balance\":{\"amount\":\"0.0\",\"currency\":\"BTC\"},\"primary\":false,\"active\":true}}",
			);
		})
		.await;
	let client = build_client(&server);
	let response = client.accounts().create(&AddAccountRequest::new("wallet")).await?;

	mock.assert_async().await;

	let account = response.account.ok_or_else(|| color_eyre::eyre::eyre!("account missing"))?;

	assert!(response.success);
	assert_eq!(account.name, "wallet");
	assert_eq!(account.id.as_deref(), Some("a-9"));

	Ok(())
}

#[tokio::test]
async fn set_primary_and_delete_decode_acknowledgements() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let primary = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/accounts/a-2/primary");
			then.status(200).body("{\"success\":true}");
		})
		.await;
	let delete = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v1/accounts/a-2");
			then.status(200).body("{\"success\":false,\"errors\":[\"Cannot delete primary\"]}");
		})
		.await;
	let client = build_client(&server);
	let id = AccountId::new("a-2")?;

	assert!(client.accounts().set_primary(&id).await?.success);

	let ack = client.accounts().delete(&id).await?;

	primary.assert_async().await;
	delete.assert_async().await;

	assert!(!ack.success);
	assert_eq!(ack.errors, vec!["Cannot delete primary".to_owned()]);

	Ok(())
}

#[tokio::test]
async fn server_errors_surface_as_decode_failures_with_status() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/accounts/a-3/balance");
			then.status(500).body("upstream exploded");
		})
		.await;

	let client = build_client(&server);
	let id = AccountId::new("a-3").expect("Account id fixture should be valid.");
	let err = client.accounts().balance(&id).await.expect_err("Garbage body should fail.");

	match err {
		Error::Decode { endpoint, status, .. } => {
			assert_eq!(endpoint, "accounts/a-3/balance");
			assert_eq!(status, 500);
		},
		other => panic!("Expected Decode, got {other:?}."),
	}
}
