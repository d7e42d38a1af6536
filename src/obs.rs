//! Optional observability helpers for API calls and token refreshes.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `wallet_api.call` with the `call` (kind) and
//!   `stage` (call site) fields, plus `debug` events for refreshes and the single retry.
//! - Enable `metrics` to increment the `wallet_api_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Network-bound call kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Single resource call (`GET`/`POST`/`PUT`/`DELETE`).
	Request,
	/// Token refresh against the token endpoint.
	Refresh,
	/// Authorization-code exchange.
	AuthorizationCode,
	/// One page fetch of a paginated resource.
	Page,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Request => "request",
			CallKind::Refresh => "refresh",
			CallKind::AuthorizationCode => "authorization_code",
			CallKind::Page => "page",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}

	/// Maps a result onto [`CallOutcome::Success`] or [`CallOutcome::Failure`].
	pub fn of<T, E>(result: &std::result::Result<T, E>) -> Self {
		if result.is_ok() { CallOutcome::Success } else { CallOutcome::Failure }
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Why the authenticating transport refreshed the credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefreshReason {
	/// The token was within the refresh margin before the request was sent.
	Preemptive,
	/// The service answered `401 Unauthorized`.
	Unauthorized,
}
impl RefreshReason {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RefreshReason::Preemptive => "preemptive",
			RefreshReason::Unauthorized => "unauthorized",
		}
	}
}
