//! `accounts` endpoints.

// self
use crate::{
	_prelude::*,
	client::{Client, RequestOptions},
	models::{
		Acknowledgement, AccountId, AccountResponse, AccountsPage, AddAccountRequest,
		AddAccountResponse, Money, UpdateAccountRequest,
	},
	pagination::{EndpointPages, Items, ListOptions, PageSequence},
};

/// Borrowed handle for account operations.
#[derive(Clone, Copy, Debug)]
pub struct Accounts<'a> {
	client: &'a Client,
}
impl<'a> Accounts<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Lazily lists every account.
	pub fn list(&self, list: ListOptions) -> Result<Items<AccountsPage>> {
		self.client.items("accounts", list, RequestOptions::new())
	}

	/// Lazily lists account pages.
	pub fn pages(&self, list: ListOptions) -> Result<PageSequence<EndpointPages<AccountsPage>>> {
		self.client.pages("accounts", list, RequestOptions::new())
	}

	/// Fetches one account.
	pub async fn get(&self, id: &AccountId) -> Result<AccountResponse> {
		self.client.get(&format!("accounts/{id}"), RequestOptions::new()).await
	}

	/// Creates an account.
	pub async fn create(&self, request: &AddAccountRequest) -> Result<AddAccountResponse> {
		self.client.post("accounts", request, RequestOptions::new()).await
	}

	/// Renames an account.
	pub async fn rename(
		&self,
		id: &AccountId,
		request: &UpdateAccountRequest,
	) -> Result<AccountResponse> {
		self.client.put(&format!("accounts/{id}"), request, RequestOptions::new()).await
	}

	/// Deletes an account.
	pub async fn delete(&self, id: &AccountId) -> Result<Acknowledgement> {
		self.client.delete(&format!("accounts/{id}"), RequestOptions::new()).await
	}

	/// Current balance of an account.
	pub async fn balance(&self, id: &AccountId) -> Result<Money> {
		self.client.get(&format!("accounts/{id}/balance"), RequestOptions::new()).await
	}

	/// Makes an account the user's primary account.
	pub async fn set_primary(&self, id: &AccountId) -> Result<Acknowledgement> {
		self.client.post_empty(&format!("accounts/{id}/primary"), RequestOptions::new()).await
	}
}
