//! Account records, list envelope, and mutation bodies.

// self
use crate::{
	_prelude::*,
	models::{AccountId, Money, PageCounters, Validate, ValidationError, require},
};

/// Wallet account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
	/// Server-assigned identifier; absent on request echoes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<AccountId>,
	/// Display name.
	pub name: String,
	/// Balance in the account currency.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub balance: Option<Money>,
	/// Balance converted to the user's native currency.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub native_balance: Option<Money>,
	/// RFC 3339 creation time as reported by the server.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<String>,
	/// Whether this is the user's primary account.
	#[serde(default)]
	pub primary: bool,
	/// Whether the account is active.
	#[serde(default)]
	pub active: bool,
}

/// `GET accounts` page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AccountsPage {
	/// Page counters.
	#[serde(flatten)]
	pub counters: PageCounters,
	/// Accounts on this page.
	#[serde(default)]
	pub accounts: Vec<Account>,
}
impl AccountsPage {
	/// Projects the page onto its accounts.
	pub fn into_items(self) -> Vec<Account> {
		self.accounts
	}
}

/// `{"name": ...}` fragment shared by create and rename bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountName {
	/// Requested display name.
	pub name: String,
}

/// `POST accounts` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountRequest {
	/// Account fields.
	pub account: AccountName,
}
impl AddAccountRequest {
	/// Creates a request for an account named `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self { account: AccountName { name: name.into() } }
	}
}
impl Validate for AddAccountRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		require("AddAccountRequest", "account.name", &self.account.name)
	}
}

/// `PUT accounts/{id}` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
	/// Account fields.
	pub account: AccountName,
}
impl UpdateAccountRequest {
	/// Creates a rename request.
	pub fn new(name: impl Into<String>) -> Self {
		Self { account: AccountName { name: name.into() } }
	}
}
impl Validate for UpdateAccountRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		require("UpdateAccountRequest", "account.name", &self.account.name)
	}
}

/// Response carrying a single account (`GET`, `POST`, `PUT`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
	/// Whether the server applied the change; `GET` omits it.
	#[serde(default)]
	pub success: bool,
	/// Server-side rejection messages.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub errors: Vec<String>,
	/// The account, when returned.
	#[serde(default)]
	pub account: Option<Account>,
}

/// Response type paired with [`AddAccountRequest`].
pub type AddAccountResponse = AccountResponse;

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn add_account_request_round_trips_through_response() {
		let bytes = serde_json::to_vec(&AddAccountRequest::new("wallet"))
			.expect("Add account request should serialize.");
		let response: AddAccountResponse =
			serde_json::from_slice(&bytes).expect("Request bytes should decode as a response.");

		assert_eq!(response.account.map(|account| account.name), Some("wallet".into()));
	}

	#[test]
	fn blank_names_fail_validation() {
		assert!(AddAccountRequest::new("wallet").validate().is_ok());
		assert_eq!(
			UpdateAccountRequest::new("").validate(),
			Err(ValidationError::MissingField {
				request: "UpdateAccountRequest",
				field: "account.name"
			})
		);
	}

	#[test]
	fn accounts_page_flattens_counters() {
		let page: AccountsPage = serde_json::from_str(
			"{\"accounts\":[{\"id\":\"a-1\",\"name\":\"Main\",\"balance\":{\"amount\":\"1.5\",\"currency\":\"BTC\"},\"primary\":true,\"active\":true}],\"total_count\":1,\"num_pages\":1,\"current_page\":1}",
		)
		.expect("Accounts page should deserialize.");

		assert_eq!(page.counters.num_pages, 1);
		assert_eq!(page.accounts[0].name, "Main");
		assert!(page.accounts[0].primary);
	}
}
