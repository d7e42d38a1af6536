#![cfg(feature = "reqwest")]

// std
use std::sync::Arc;
// crates.io
use futures::TryStreamExt;
use httpmock::prelude::*;
use time::{Duration, OffsetDateTime};
use url::Url;
// self
use wallet_api::{
	Client,
	auth::{RefreshFuture, TokenProvider, TokenSecret},
	config::ClientConfig,
	http::ReqwestHttpClient,
	models::{AccountId, Money},
	pagination::{ListOptions, SequenceState},
};

struct FixedTokens;
impl TokenProvider for FixedTokens {
	fn access_token(&self) -> TokenSecret {
		TokenSecret::new("list-token")
	}

	fn expires_at(&self) -> OffsetDateTime {
		OffsetDateTime::now_utc() + Duration::hours(1)
	}

	fn refresh(&self) -> RefreshFuture<'_> {
		Box::pin(async { Ok(()) })
	}
}

fn build_client(server: &MockServer, default_limit: Option<u32>) -> Client {
	let base_url = Url::parse(&server.url("/v1/")).expect("Mock base URL should parse.");
	let mut builder = ClientConfig::builder(base_url);

	if let Some(limit) = default_limit {
		builder = builder.default_limit(limit);
	}

	let config = builder.build().expect("Loopback HTTP configuration should be accepted.");

	Client::with_http_client(config, Arc::new(ReqwestHttpClient::default()), Arc::new(FixedTokens))
}

fn accounts_page(page: u32, names: &[&str]) -> String {
	let accounts = names
		.iter()
		.map(|name| {
			format!("{{\"id\":\"{name}-id\",\"name\":\"{name}\",\"primary\":false,\"active\":true}}")
		})
		.collect::<Vec<_>>()
		.join(",");

	format!(
		"{{\"accounts\":[{accounts}],\"total_count\":3,\"num_pages\":3,\"current_page\":{page}}}"
	)
}

#[tokio::test]
async fn account_listing_walks_every_page_and_skips_empty_ones() {
	let server = MockServer::start_async().await;
	let mut mocks = Vec::new();

	for (page, names) in [(1, vec!["alpha", "beta"]), (2, vec![]), (3, vec!["gamma"])] {
		let body = accounts_page(page, &names);
		let mock = server
			.mock_async(move |when, then| {
				when.method(GET)
					.path("/v1/accounts")
					.query_param("page", page.to_string())
					.query_param("limit", "2")
					.query_param("access_token", "list-token");
				then.status(200).header("content-type", "application/json").body(body);
			})
			.await;

		mocks.push(mock);
	}

	let client = build_client(&server, Some(2));
	let mut accounts =
		client.accounts().list(ListOptions::new()).expect("Open client should list accounts.");

	assert_eq!(mocks[0].hits_async().await, 0);

	let first = accounts.next().await.expect("First page should load.");

	assert_eq!(first.map(|account| account.name), Some("alpha".into()));
	assert_eq!(mocks[0].hits_async().await, 1);
	assert_eq!(mocks[1].hits_async().await, 0);

	let rest = accounts.collect().await.expect("Remaining pages should load.");
	let names = rest.into_iter().map(|account| account.name).collect::<Vec<_>>();

	assert_eq!(names, ["beta", "gamma"]);

	for mock in &mocks {
		mock.assert_async().await;
	}
}

#[tokio::test]
async fn explicit_limit_and_start_page_are_sent() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/accounts")
				.query_param("page", "3")
				.query_param("limit", "10");
			then.status(200).body(accounts_page(3, &["gamma"]));
		})
		.await;
	let client = build_client(&server, Some(2));
	let mut pages = client
		.accounts()
		.pages(ListOptions::new().limit(10).start_page(3))
		.expect("Open client should list pages.");
	let page = pages.next().await.expect("Page should load.").expect("Page 3 should exist.");

	mock.assert_async().await;

	assert_eq!(page.number, 3);
	assert!(!page.has_more());
	assert!(pages.next().await.expect("Exhaustion is not an error.").is_none());
	assert_eq!(pages.state(), SequenceState::Exhausted);
}

#[tokio::test]
async fn empty_listing_ends_after_first_page() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/contacts").query_param("query", "nobody");
			then.status(200)
				.body("{\"contacts\":[],\"total_count\":0,\"num_pages\":0,\"current_page\":1}");
		})
		.await;
	let client = build_client(&server, None);
	let contacts = client
		.contacts()
		.list(Some("nobody"), ListOptions::new())
		.expect("Open client should list contacts.")
		.collect()
		.await
		.expect("Empty listing should load.");

	assert!(contacts.is_empty());
	assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn transactions_stream_is_scoped_to_an_account() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/transactions")
				.query_param("account_id", "acct-7")
				.query_param("page", "1");
			then.status(200).body(
				"{\"balance\":{\"amount\":\"1.5\",\"currency\":\"BTC\"},\"transactions\":[{\"transaction\":{\"id\":\"t-1\",\"request\":false}},{\"transaction\":{\"id\":\"t-2\",\"request\":true}}],\"total_count\":2,\"num_pages\":1,\"current_page\":1}",
			);
		})
		.await;
	let client = build_client(&server, None);
	let account = AccountId::new("acct-7")?;
	let ids = client
		.transactions()
		.list(Some(&account), ListOptions::new())?
		.into_stream()
		.map_ok(|transaction| transaction.id.to_string())
		.try_collect::<Vec<_>>()
		.await?;

	mock.assert_async().await;

	assert_eq!(ids, ["t-1", "t-2"]);

	Ok(())
}

#[tokio::test]
async fn transfer_fees_in_cents_are_decoded() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/transfers");
			then.status(200).body(
				"{\"transfers\":[{\"transfer\":{\"type\":\"Buy\",\"code\":\"QPCUCZHR\",\"fees\":{\"coinbase\":{\"cents\":14,\"currency_iso\":\"USD\"},\"bank\":{\"cents\":15,\"currency_iso\":\"USD\"}},\"status\":\"Pending\",\"total\":{\"amount\":\"13.84\",\"currency\":\"USD\"}}}],\"total_count\":1,\"num_pages\":1,\"current_page\":1}",
			);
		})
		.await;

	let client = build_client(&server, None);
	let transfers = client.transfers().list(None, ListOptions::new())?.collect().await?;
	let fees = transfers[0].fees.clone().ok_or_else(|| color_eyre::eyre::eyre!("fees missing"))?;

	assert_eq!(transfers[0].kind, "Buy");
	assert_eq!(fees.platform, Some(Money::from_cents(14, "USD")));
	assert_eq!(fees.bank, Some(Money::from_cents(15, "USD")));

	Ok(())
}
