// std
use std::time::Duration;
// self
use crate::obs::HandshakeOutcome;

/// Counter incremented once per attempt and once per settled outcome.
pub const HANDSHAKE_TOTAL: &str = "sso_token_client_handshake_total";
/// Histogram of wall-clock handshake durations, in seconds.
pub const HANDSHAKE_DURATION_SECONDS: &str = "sso_token_client_handshake_duration_seconds";

/// Increments [`HANDSHAKE_TOTAL`] for `outcome` (no-op without the `metrics` feature).
pub fn record_handshake_outcome(outcome: HandshakeOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(HANDSHAKE_TOTAL, "outcome" => outcome.as_str()).increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

/// Records how long a settled handshake took.
pub fn record_handshake_duration(outcome: HandshakeOutcome, elapsed: Duration) {
	#[cfg(feature = "metrics")]
	{
		metrics::histogram!(HANDSHAKE_DURATION_SECONDS, "outcome" => outcome.as_str())
			.record(elapsed.as_secs_f64());
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (outcome, elapsed);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recording_without_an_installed_recorder_is_harmless() {
		record_handshake_outcome(HandshakeOutcome::Attempt);
		record_handshake_duration(HandshakeOutcome::Failure, Duration::from_millis(12));
	}
}
