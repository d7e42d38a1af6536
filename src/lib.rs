//! Async client for an OAuth 2.0 protected wallet REST API: a self-refreshing authenticating
//! transport, lazy page/element sequences, and typed resource services in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod oauth;
pub mod obs;
pub mod pagination;
pub mod transport;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for tests; enabled via `cfg(test)` or the `test` crate
	//! feature.

	pub use crate::_prelude::*;

	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use crate::auth::{RefreshFuture, TokenProvider, TokenSecret};

	/// [`TokenProvider`] with a fixed token that never expires; counts refresh requests.
	#[derive(Debug)]
	pub struct StaticTokens {
		token: TokenSecret,
		refreshes: AtomicUsize,
	}
	impl StaticTokens {
		/// Creates a shared provider handing out `token`.
		pub fn new(token: &str) -> Arc<Self> {
			Arc::new(Self { token: TokenSecret::new(token), refreshes: AtomicUsize::new(0) })
		}

		/// Number of times [`TokenProvider::refresh`] ran.
		pub fn refreshes(&self) -> usize {
			self.refreshes.load(Ordering::SeqCst)
		}
	}
	impl TokenProvider for StaticTokens {
		fn access_token(&self) -> TokenSecret {
			self.token.clone()
		}

		fn expires_at(&self) -> OffsetDateTime {
			OffsetDateTime::now_utc() + Duration::days(365)
		}

		fn refresh(&self) -> RefreshFuture<'_> {
			self.refreshes.fetch_add(1, Ordering::SeqCst);

			Box::pin(async { Ok(()) })
		}
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap, VecDeque},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};

pub use client::Client;
pub use error::{Error, Result};
