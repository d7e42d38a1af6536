//! Transaction records, list envelope, and send/request bodies.

// crates.io
use rust_decimal::Decimal;
// self
use crate::{
	_prelude::*,
	models::{AccountId, Money, PageCounters, TransactionId, Validate, ValidationError, require},
};

/// Counterparty of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
	/// User identifier, when the party is a registered user.
	#[serde(default)]
	pub id: Option<String>,
	/// Display name.
	#[serde(default)]
	pub name: Option<String>,
	/// Email address.
	#[serde(default)]
	pub email: Option<String>,
}

/// Money movement between two parties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
	/// Transaction identifier.
	pub id: TransactionId,
	/// RFC 3339 creation time.
	#[serde(default)]
	pub created_at: Option<String>,
	/// Network hash, once broadcast.
	#[serde(default)]
	pub hsh: Option<String>,
	/// Free-form notes.
	#[serde(default)]
	pub notes: Option<String>,
	/// Signed amount from the account's point of view.
	#[serde(default)]
	pub amount: Option<Money>,
	/// Whether this is a money request rather than a transfer.
	#[serde(default)]
	pub request: bool,
	/// `pending`, `complete`, ...
	#[serde(default)]
	pub status: Option<String>,
	/// Sending party.
	#[serde(default)]
	pub sender: Option<Party>,
	/// Receiving party.
	#[serde(default)]
	pub recipient: Option<Party>,
	/// Receiving address when sent to an address rather than a user.
	#[serde(default)]
	pub recipient_address: Option<String>,
}

/// `{"transaction": {...}}` wrapper used in list pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEnvelope {
	/// Wrapped transaction.
	pub transaction: Transaction,
}

/// `GET transactions` page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TransactionsPage {
	/// Page counters.
	#[serde(flatten)]
	pub counters: PageCounters,
	/// Account balance at the time of the call.
	#[serde(default)]
	pub balance: Option<Money>,
	/// Balance in the native currency.
	#[serde(default)]
	pub native_balance: Option<Money>,
	/// Transactions on this page.
	#[serde(default)]
	pub transactions: Vec<TransactionEnvelope>,
}
impl TransactionsPage {
	/// Projects the page onto its unwrapped transactions.
	pub fn into_items(self) -> Vec<Transaction> {
		self.transactions.into_iter().map(|envelope| envelope.transaction).collect()
	}
}

/// Body fragment of [`SendMoneyRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMoney {
	/// Recipient email or address.
	pub to: String,
	/// Amount to send.
	pub amount: Option<Decimal>,
	/// Currency of `amount` when it is not the account currency.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount_currency_iso: Option<String>,
	/// Free-form notes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

/// `POST transactions/send_money` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMoneyRequest {
	/// Account to debit; defaults to the primary account.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub account_id: Option<AccountId>,
	/// Transfer fields.
	pub transaction: SendMoney,
}
impl SendMoneyRequest {
	/// Sends `amount` to `to`.
	pub fn new(to: impl Into<String>, amount: Decimal) -> Self {
		Self {
			account_id: None,
			transaction: SendMoney { to: to.into(), amount: Some(amount), ..Default::default() },
		}
	}

	/// Debits a specific account.
	pub fn from_account(mut self, account_id: AccountId) -> Self {
		self.account_id = Some(account_id);

		self
	}

	/// Attaches notes.
	pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
		self.transaction.notes = Some(notes.into());

		self
	}
}
impl Validate for SendMoneyRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		require("SendMoneyRequest", "transaction.to", &self.transaction.to)?;

		if self.transaction.amount.is_none() {
			return Err(ValidationError::MissingField {
				request: "SendMoneyRequest",
				field: "transaction.amount",
			});
		}

		Ok(())
	}
}

/// Body fragment of [`RequestMoneyRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMoney {
	/// Email address of the party being asked to pay.
	pub from: String,
	/// Requested amount.
	pub amount: Option<Decimal>,
	/// Free-form notes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

/// `POST transactions/request_money` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMoneyRequest {
	/// Request fields.
	pub transaction: RequestMoney,
}
impl RequestMoneyRequest {
	/// Requests `amount` from `from`.
	pub fn new(from: impl Into<String>, amount: Decimal) -> Self {
		Self { transaction: RequestMoney { from: from.into(), amount: Some(amount), notes: None } }
	}
}
impl Validate for RequestMoneyRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		require("RequestMoneyRequest", "transaction.from", &self.transaction.from)?;

		if self.transaction.amount.is_none() {
			return Err(ValidationError::MissingField {
				request: "RequestMoneyRequest",
				field: "transaction.amount",
			});
		}

		Ok(())
	}
}

/// Response carrying a single transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
	/// Whether the server applied the change; `GET` omits it.
	#[serde(default)]
	pub success: bool,
	/// Server-side rejection messages.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub errors: Vec<String>,
	/// The transaction, when returned.
	#[serde(default)]
	pub transaction: Option<Transaction>,
}
