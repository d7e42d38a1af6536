//! Address-book contacts.

// self
use crate::{_prelude::*, models::PageCounters};

/// Previously used counterparty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
	/// Contact email.
	pub email: String,
}

/// `{"contact": {...}}` wrapper used in list pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEnvelope {
	/// Wrapped contact.
	pub contact: Contact,
}

/// `GET contacts` page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContactsPage {
	/// Page counters.
	#[serde(flatten)]
	pub counters: PageCounters,
	/// Contacts on this page.
	#[serde(default)]
	pub contacts: Vec<ContactEnvelope>,
}
impl ContactsPage {
	/// Projects the page onto its unwrapped contacts.
	pub fn into_items(self) -> Vec<Contact> {
		self.contacts.into_iter().map(|envelope| envelope.contact).collect()
	}
}
