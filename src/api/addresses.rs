//! Receive-address endpoints.

// self
use crate::{
	_prelude::*,
	api,
	client::{Client, RequestOptions},
	models::{AccountId, AddressesPage, CreateAddressRequest, CreateAddressResponse},
	pagination::{Items, ListOptions},
};

/// Borrowed handle for receive-address operations.
#[derive(Clone, Copy, Debug)]
pub struct Addresses<'a> {
	client: &'a Client,
}
impl<'a> Addresses<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Lazily lists addresses, optionally scoped to one account and filtered by `query`.
	pub fn list(
		&self,
		account_id: Option<&AccountId>,
		query: Option<&str>,
		list: ListOptions,
	) -> Result<Items<AddressesPage>> {
		let query = api::account_scope(account_id).with_opt("query", query);

		self.client.items("addresses", list, RequestOptions::new().with_query(query))
	}

	/// Generates a new receive address for an account.
	pub async fn create(
		&self,
		account_id: &AccountId,
		request: &CreateAddressRequest,
	) -> Result<CreateAddressResponse> {
		self.client
			.post(&format!("accounts/{account_id}/address"), request, RequestOptions::new())
			.await
	}
}
