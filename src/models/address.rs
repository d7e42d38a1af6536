//! Receive-address records and the create body.

// self
use crate::{
	_prelude::*,
	models::{PageCounters, Validate, ValidationError},
};

/// Receive address attached to an account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
	/// Encoded address.
	pub address: String,
	/// Callback invoked when funds arrive.
	#[serde(default)]
	pub callback_url: Option<String>,
	/// User label.
	#[serde(default)]
	pub label: Option<String>,
	/// RFC 3339 creation time.
	#[serde(default)]
	pub created_at: Option<String>,
}

/// `{"address": {...}}` wrapper used in list pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEnvelope {
	/// Wrapped address.
	pub address: Address,
}

/// `GET addresses` page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AddressesPage {
	/// Page counters.
	#[serde(flatten)]
	pub counters: PageCounters,
	/// Addresses on this page.
	#[serde(default)]
	pub addresses: Vec<AddressEnvelope>,
}
impl AddressesPage {
	/// Projects the page onto its unwrapped addresses.
	pub fn into_items(self) -> Vec<Address> {
		self.addresses.into_iter().map(|envelope| envelope.address).collect()
	}
}

/// Body fragment of [`CreateAddressRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAddress {
	/// Callback invoked when funds arrive.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub callback_url: Option<Url>,
	/// User label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
}

/// `POST accounts/{id}/address` body. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddressRequest {
	/// Address fields.
	pub address: NewAddress,
}
impl CreateAddressRequest {
	/// Labels the new address.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.address.label = Some(label.into());

		self
	}

	/// Registers a payment callback.
	pub fn with_callback_url(mut self, url: Url) -> Self {
		self.address.callback_url = Some(url);

		self
	}
}
impl Validate for CreateAddressRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		Ok(())
	}
}

/// Response to [`CreateAddressRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAddressResponse {
	/// Whether the address was created.
	#[serde(default)]
	pub success: bool,
	/// Server-side rejection messages.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub errors: Vec<String>,
	/// Encoded address.
	#[serde(default)]
	pub address: Option<String>,
	/// Echoed callback.
	#[serde(default)]
	pub callback_url: Option<String>,
	/// Echoed label.
	#[serde(default)]
	pub label: Option<String>,
}
