// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for the authenticating transport.
#[derive(Debug, Default)]
pub struct TransportMetrics {
	attempts: AtomicU64,
	preemptive_refreshes: AtomicU64,
	reactive_refreshes: AtomicU64,
	retries: AtomicU64,
}
impl TransportMetrics {
	/// Returns the number of requests handed to the wrapped sender.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of refreshes triggered by the expiry margin.
	pub fn preemptive_refreshes(&self) -> u64 {
		self.preemptive_refreshes.load(Ordering::Relaxed)
	}

	/// Returns the number of refreshes triggered by a `401` response.
	pub fn reactive_refreshes(&self) -> u64 {
		self.reactive_refreshes.load(Ordering::Relaxed)
	}

	/// Returns the number of resends after a reactive refresh.
	pub fn retries(&self) -> u64 {
		self.retries.load(Ordering::Relaxed)
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_preemptive_refresh(&self) {
		self.preemptive_refreshes.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_reactive_refresh(&self) {
		self.reactive_refreshes.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_retry(&self) {
		self.retries.fetch_add(1, Ordering::Relaxed);
	}
}
