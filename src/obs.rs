//! Observability hooks for the handshake.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap each handshake in a `sso_token_client.handshake` span carrying the
//!   endpoint `host`, the `signature_method`, and the settled `outcome`, and to let
//!   [`TracingObserver`] forward handshake events as `tracing` events.
//! - Enable `metrics` to increment `sso_token_client_handshake_total` and to record
//!   `sso_token_client_handshake_duration_seconds`, both labeled by `outcome`.

mod metrics;
mod observer;
mod tracing;

pub use metrics::*;
pub use observer::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandshakeOutcome {
	/// Entry to [`TokenExchangeClient::perform_handshake`](crate::client::TokenExchangeClient::perform_handshake).
	Attempt,
	/// A redirect URL was produced.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl HandshakeOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			HandshakeOutcome::Attempt => "attempt",
			HandshakeOutcome::Success => "success",
			HandshakeOutcome::Failure => "failure",
		}
	}
}
impl Display for HandshakeOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
