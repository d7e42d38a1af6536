// self
use crate::obs::{CallKind, CallOutcome, RefreshReason};

/// Counts a finished call, labelled by kind and outcome (no-op without `metrics`).
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"wallet_api_call_total",
			"call" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Counts a transport-driven token refresh, labelled by why it ran.
pub fn record_token_refresh(reason: RefreshReason) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("wallet_api_token_refresh_total", "reason" => reason.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = reason;
	}
}
