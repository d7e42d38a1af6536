//! Fixed-point currency amounts.

// crates.io
use rust_decimal::Decimal;
// self
use crate::_prelude::*;

/// Amount in a given currency, e.g. `{"amount": "36.62800000", "currency": "BTC"}`.
///
/// The amount is a [`Decimal`] so balances never pass through binary floating point; it
/// serializes back to a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
	/// Fixed-point amount.
	pub amount: Decimal,
	/// ISO code (`BTC`, `USD`, ...).
	#[serde(alias = "currency_iso")]
	pub currency: String,
}
impl Money {
	/// Creates an amount.
	pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
		Self { amount, currency: currency.into() }
	}

	/// Builds an amount from an integer count of hundredths (the legacy `cents` encoding).
	pub fn from_cents(cents: i64, currency: impl Into<String>) -> Self {
		Self::new(Decimal::new(cents, 2), currency)
	}
}
impl Display for Money {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} {}", self.amount, self.currency)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn amounts_keep_full_precision() {
		let money: Money = serde_json::from_str("{\"amount\":\"36.62800000\",\"currency\":\"BTC\"}")
			.expect("Money should deserialize from a string amount.");

		assert_eq!(money.amount, Decimal::from_str("36.628").expect("Literal should parse."));
		assert_eq!(money.currency, "BTC");
		assert_eq!(money.to_string(), "36.62800000 BTC");
	}

	#[test]
	fn cents_convert_to_two_decimal_places() {
		let money = Money::from_cents(1_234, "USD");

		assert_eq!(money.amount.to_string(), "12.34");
		assert_eq!(
			serde_json::to_value(&money).expect("Money should serialize."),
			serde_json::json!({ "amount": "12.34", "currency": "USD" })
		);
	}
}
