//! OAuth application records and the registration body.

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	models::{ApplicationId, PageCounters, Validate, ValidationError, require},
};

/// OAuth application registered by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
	/// Application identifier.
	pub id: ApplicationId,
	/// Display name.
	pub name: String,
	/// Registered redirect URI.
	#[serde(default)]
	pub redirect_uri: Option<String>,
	/// RFC 3339 creation time.
	#[serde(default)]
	pub created_at: Option<String>,
	/// Number of users that authorized the application.
	#[serde(default)]
	pub num_users: u64,
	/// OAuth client identifier; only returned to the owner.
	#[serde(default)]
	pub client_id: Option<String>,
	/// OAuth client secret; only returned to the owner.
	#[serde(default)]
	pub client_secret: Option<TokenSecret>,
}

/// `GET oauth/applications` page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApplicationsPage {
	/// Page counters.
	#[serde(flatten)]
	pub counters: PageCounters,
	/// Applications on this page.
	#[serde(default)]
	pub applications: Vec<Application>,
}
impl ApplicationsPage {
	/// Projects the page onto its applications.
	pub fn into_items(self) -> Vec<Application> {
		self.applications
	}
}

/// Body fragment of [`CreateApplicationRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
	/// Display name.
	pub name: String,
	/// Redirect URI for the authorization-code flow.
	pub redirect_uri: String,
}

/// `POST oauth/applications` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
	/// Application fields.
	pub application: NewApplication,
}
impl CreateApplicationRequest {
	/// Registers `name` with `redirect_uri`.
	pub fn new(name: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
		Self {
			application: NewApplication { name: name.into(), redirect_uri: redirect_uri.into() },
		}
	}
}
impl Validate for CreateApplicationRequest {
	fn validate(&self) -> Result<(), ValidationError> {
		require("CreateApplicationRequest", "application.name", &self.application.name)?;
		require(
			"CreateApplicationRequest",
			"application.redirect_uri",
			&self.application.redirect_uri,
		)
	}
}

/// Response carrying a single application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationResponse {
	/// Whether the server applied the change; `GET` omits it.
	#[serde(default)]
	pub success: bool,
	/// Server-side rejection messages.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub errors: Vec<String>,
	/// The application, when returned.
	#[serde(default)]
	pub application: Option<Application>,
}
