//! Wire records for the wallet API: resources, list envelopes, and request bodies.

pub mod account;
pub mod address;
pub mod application;
pub mod contact;
pub mod id;
pub mod money;
pub mod transaction;
pub mod transfer;

pub use account::*;
pub use address::*;
pub use application::*;
pub use contact::*;
pub use id::*;
pub use money::*;
pub use transaction::*;
pub use transfer::*;

// self
use crate::_prelude::*;

/// Request bodies with required fields implement this before they are serialized.
pub trait Validate {
	/// Returns an error naming the first unset required field.
	fn validate(&self) -> Result<(), ValidationError>;
}
impl<T> Validate for &T
where
	T: ?Sized + Validate,
{
	fn validate(&self) -> Result<(), ValidationError> {
		(**self).validate()
	}
}

/// Raised when a request object is missing a required field.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// A required field is unset or blank.
	#[error("Required field `{field}` is missing on {request}.")]
	MissingField {
		/// Request type name.
		request: &'static str,
		/// Dotted path of the missing field.
		field: &'static str,
	},
}

/// Fails with [`ValidationError::MissingField`] when `value` is blank.
pub(crate) fn require(
	request: &'static str,
	field: &'static str,
	value: &str,
) -> Result<(), ValidationError> {
	if value.trim().is_empty() {
		Err(ValidationError::MissingField { request, field })
	} else {
		Ok(())
	}
}

/// Pagination counters shared by every list envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCounters {
	/// Total records across all pages.
	#[serde(default)]
	pub total_count: u64,
	/// Total pages available at the requested `limit`.
	#[serde(default)]
	pub num_pages: u32,
	/// 1-based page this envelope holds.
	#[serde(default)]
	pub current_page: u32,
}

/// Bare `{"success": bool}` acknowledgement returned by mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
	/// Whether the server applied the change.
	#[serde(default)]
	pub success: bool,
	/// Server-side rejection messages when `success` is false.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub errors: Vec<String>,
}
