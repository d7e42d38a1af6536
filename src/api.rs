//! Typed resource services layered on [`Client`].
//!
//! Each service is a borrowed handle (`client.accounts()`, `client.transactions()`, ...) whose
//! listing operations return lazy sequences and whose single-shot operations return the decoded
//! response envelope.

pub mod accounts;
pub mod addresses;
pub mod applications;
pub mod contacts;
pub mod transactions;
pub mod transfers;

pub use accounts::Accounts;
pub use addresses::Addresses;
pub use applications::Applications;
pub use contacts::Contacts;
pub use transactions::Transactions;
pub use transfers::Transfers;

// self
use crate::{client::Client, http::QueryParams, models::AccountId};

impl Client {
	/// Account operations.
	pub fn accounts(&self) -> Accounts<'_> {
		Accounts::new(self)
	}

	/// Transaction operations.
	pub fn transactions(&self) -> Transactions<'_> {
		Transactions::new(self)
	}

	/// Transfer (buy/sell) history.
	pub fn transfers(&self) -> Transfers<'_> {
		Transfers::new(self)
	}

	/// Receive-address operations.
	pub fn addresses(&self) -> Addresses<'_> {
		Addresses::new(self)
	}

	/// OAuth application operations.
	pub fn applications(&self) -> Applications<'_> {
		Applications::new(self)
	}

	/// Address-book lookups.
	pub fn contacts(&self) -> Contacts<'_> {
		Contacts::new(self)
	}
}

/// Query scoping a listing to one account, when given.
fn account_scope(account_id: Option<&AccountId>) -> QueryParams {
	QueryParams::new().with_opt("account_id", account_id)
}
