//! `oauth/applications` endpoints.

// self
use crate::{
	_prelude::*,
	client::{Client, RequestOptions},
	models::{ApplicationId, ApplicationResponse, ApplicationsPage, CreateApplicationRequest},
	pagination::{Items, ListOptions},
};

const ENDPOINT: &str = "oauth/applications";

/// Borrowed handle for OAuth application operations.
#[derive(Clone, Copy, Debug)]
pub struct Applications<'a> {
	client: &'a Client,
}
impl<'a> Applications<'a> {
	pub(crate) fn new(client: &'a Client) -> Self {
		Self { client }
	}

	/// Lazily lists the user's applications.
	pub fn list(&self, list: ListOptions) -> Result<Items<ApplicationsPage>> {
		self.client.items(ENDPOINT, list, RequestOptions::new())
	}

	/// Fetches one application.
	pub async fn get(&self, id: &ApplicationId) -> Result<ApplicationResponse> {
		self.client.get(&format!("{ENDPOINT}/{id}"), RequestOptions::new()).await
	}

	/// Registers an application.
	pub async fn create(&self, request: &CreateApplicationRequest) -> Result<ApplicationResponse> {
		self.client.post(ENDPOINT, request, RequestOptions::new()).await
	}
}
