//! Buy/sell transfer records.

// self
use crate::{
	_prelude::*,
	models::{Money, PageCounters, TransactionId},
};

/// Fees charged on a transfer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFees {
	/// Platform fee.
	#[serde(default, rename = "coinbase")]
	pub platform: Option<Money>,
	/// Bank fee.
	#[serde(default)]
	pub bank: Option<Money>,
}

/// Buy or sell between a bank account and the wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
	/// `Buy` or `Sell`.
	#[serde(rename = "type")]
	pub kind: String,
	/// Short reference code.
	#[serde(default)]
	pub code: Option<String>,
	/// RFC 3339 creation time.
	#[serde(default)]
	pub created_at: Option<String>,
	/// Fees; the server reports these in the legacy `cents` encoding.
	#[serde(default)]
	pub fees: Option<TransferFees>,
	/// Expected payout time.
	#[serde(default)]
	pub payout_date: Option<String>,
	/// Linked wallet transaction.
	#[serde(default)]
	pub transaction_id: Option<TransactionId>,
	/// `Pending`, `Complete`, ...
	#[serde(default)]
	pub status: Option<String>,
	/// Crypto amount moved.
	#[serde(default)]
	pub btc: Option<Money>,
	/// Fiat amount before fees.
	#[serde(default)]
	pub subtotal: Option<Money>,
	/// Fiat amount after fees.
	#[serde(default)]
	pub total: Option<Money>,
	/// Human-readable summary.
	#[serde(default)]
	pub description: Option<String>,
}

/// `{"transfer": {...}}` wrapper used in list pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEnvelope {
	/// Wrapped transfer.
	pub transfer: Transfer,
}

/// `GET transfers` page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TransfersPage {
	/// Page counters.
	#[serde(flatten)]
	pub counters: PageCounters,
	/// Transfers on this page.
	#[serde(default)]
	pub transfers: Vec<TransferEnvelope>,
}
impl TransfersPage {
	/// Projects the page onto its unwrapped transfers.
	pub fn into_items(self) -> Vec<Transfer> {
		self.transfers.into_iter().map(|envelope| envelope.transfer).collect()
	}
}
