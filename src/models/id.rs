//! Strongly typed resource identifiers that are safe to splice into endpoint paths.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				validate_view($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				validate_view($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (account, transaction, application).
		kind: &'static str,
	},
	/// The identifier contains a character that would break the endpoint path.
	#[error("{kind} identifier contains an invalid character: {found:?}.")]
	InvalidCharacter {
		/// Kind of identifier (account, transaction, application).
		kind: &'static str,
		/// Offending character.
		found: char,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (account, transaction, application).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! { AccountId, "Identifier of a wallet account.", "Account" }
def_id! { TransactionId, "Identifier of a transaction.", "Transaction" }
def_id! { ApplicationId, "Identifier of a registered OAuth application.", "Application" }

fn validate_view(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if let Some(found) =
		view.chars().find(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%'))
	{
		return Err(IdentifierError::InvalidCharacter { kind, found });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_reject_path_breaking_characters() {
		assert!(AccountId::new("536a541fa9393bb3c7000023").is_ok());
		assert_eq!(AccountId::new(""), Err(IdentifierError::Empty { kind: "Account" }));
		assert_eq!(
			AccountId::new("a/../b"),
			Err(IdentifierError::InvalidCharacter { kind: "Account", found: '/' })
		);
		assert!(TransactionId::new("with space").is_err());
		assert!(ApplicationId::new("x?y").is_err());
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let id: AccountId =
			serde_json::from_str("\"acct-42\"").expect("Account id should deserialize.");

		assert_eq!(id.as_ref(), "acct-42");
		assert_eq!(format!("{id:?}"), "Account(acct-42)");
		assert!(serde_json::from_str::<AccountId>("\"bad id\"").is_err());
	}

	#[test]
	fn length_limit_applies() {
		assert!(AccountId::new("a".repeat(IDENTIFIER_MAX_LEN)).is_ok());
		assert!(AccountId::new("a".repeat(IDENTIFIER_MAX_LEN + 1)).is_err());
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<AccountId, u8> =
			HashMap::from_iter([(AccountId::new("acct").expect("Fixture id should be valid."), 7)]);

		assert_eq!(map.get("acct"), Some(&7));
	}
}
