//! `transfers` endpoint.

// self
use crate::{
	_prelude::*,
	api,
	client::{CentsAmountDecoder, Client, RequestOptions},
	models::{AccountId, TransfersPage},
	pagination::{Items, ListOptions},
};

/// Borrowed handle for the transfer history.
#[derive(Clone, Copy, Debug)]
pub struct Transfers<'a> {
	client: &'a Client,
}
impl<'a> Transfers<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Lazily lists buys and sells, optionally scoped to one account.
	///
	/// Fees reported in the legacy `cents` form are decoded into [`Money`](crate::models::Money).
	pub fn list(
		&self,
		account_id: Option<&AccountId>,
		list: ListOptions,
	) -> Result<Items<TransfersPage>> {
		let options = RequestOptions::new()
			.with_query(api::account_scope(account_id))
			.with_decoder(CentsAmountDecoder);

		self.client.items("transfers", list, options)
	}
}
