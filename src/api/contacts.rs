//! `contacts` endpoint.

// self
use crate::{
	_prelude::*,
	client::{Client, RequestOptions},
	http::QueryParams,
	models::ContactsPage,
	pagination::{Items, ListOptions},
};

/// Borrowed handle for address-book lookups.
#[derive(Clone, Copy, Debug)]
pub struct Contacts<'a> {
	client: &'a Client,
}
impl<'a> Contacts<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Lazily lists contacts, optionally filtered by an email prefix.
	pub fn list(&self, query: Option<&str>, list: ListOptions) -> Result<Items<ContactsPage>> {
		let options = RequestOptions::new().with_query(QueryParams::new().with_opt("query", query));

		self.client.items("contacts", list, options)
	}
}
