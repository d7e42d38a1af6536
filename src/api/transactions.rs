//! `transactions` endpoints.

// self
use crate::{
	_prelude::*,
	api,
	client::{Client, RequestOptions},
	models::{
		AccountId, RequestMoneyRequest, SendMoneyRequest, TransactionId, TransactionResponse,
		TransactionsPage,
	},
	pagination::{EndpointPages, Items, ListOptions, PageSequence},
};

/// Borrowed handle for transaction operations.
#[derive(Clone, Copy, Debug)]
pub struct Transactions<'a> {
	client: &'a Client,
}
impl<'a> Transactions<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Lazily lists transactions, optionally scoped to one account.
	pub fn list(
		&self,
		account_id: Option<&AccountId>,
		list: ListOptions,
	) -> Result<Items<TransactionsPage>> {
		self.client.items("transactions", list, scoped(account_id))
	}

	/// Lazily lists transaction pages; each page also carries the account balance.
	pub fn pages(
		&self,
		account_id: Option<&AccountId>,
		list: ListOptions,
	) -> Result<PageSequence<EndpointPages<TransactionsPage>>> {
		self.client.pages("transactions", list, scoped(account_id))
	}

	/// Fetches one transaction.
	pub async fn get(&self, id: &TransactionId) -> Result<TransactionResponse> {
		self.client.get(&format!("transactions/{id}"), RequestOptions::new()).await
	}

	/// Sends money to an email or address.
	pub async fn send_money(&self, request: &SendMoneyRequest) -> Result<TransactionResponse> {
		self.client.post("transactions/send_money", request, RequestOptions::new()).await
	}

	/// Requests money from an email.
	pub async fn request_money(
		&self,
		request: &RequestMoneyRequest,
	) -> Result<TransactionResponse> {
		self.client.post("transactions/request_money", request, RequestOptions::new()).await
	}
}

fn scoped(account_id: Option<&AccountId>) -> RequestOptions {
	RequestOptions::new().with_query(api::account_scope(account_id))
}
