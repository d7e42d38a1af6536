// self
use crate::{
	_prelude::*,
	obs::{CallKind, RefreshReason},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used around network-bound calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + stage.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("wallet_api.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a `debug` event when the transport refreshes the credential.
pub fn trace_refresh(endpoint: &str, reason: RefreshReason) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(endpoint, reason = reason.as_str(), "Refreshing access token.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, reason);
	}
}

/// Emits a `debug` event when the transport resends a request after a reactive refresh.
pub fn trace_retry(endpoint: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(endpoint, "Retrying request once with the refreshed access token.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = endpoint;
	}
}
