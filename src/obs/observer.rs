// self
use crate::_prelude::*;

/// Receives leveled handshake events.
///
/// Injected once through
/// [`TokenExchangeClient::with_observer`](crate::client::TokenExchangeClient::with_observer);
/// every method defaults to a no-op so implementors only override the levels they care about.
pub trait HandshakeObserver
where
	Self: Send + Sync,
{
	/// Debug-level event with structured `(name, value)` fields.
	fn debug(&self, message: &str, fields: &[(&str, &str)]) {
		let _ = (message, fields);
	}

	/// Info-level event.
	fn info(&self, message: &str) {
		let _ = message;
	}
}

/// Observer that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;
impl HandshakeObserver for NoopObserver {}

/// Observer forwarding events to `tracing` under the `sso_token_client` target.
///
/// Without the `tracing` feature it behaves like [`NoopObserver`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;
impl HandshakeObserver for TracingObserver {
	fn debug(&self, message: &str, fields: &[(&str, &str)]) {
		#[cfg(feature = "tracing")]
		{
			tracing::debug!(target: "sso_token_client", ?fields, "{message}");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (message, fields);
		}
	}

	fn info(&self, message: &str) {
		#[cfg(feature = "tracing")]
		{
			tracing::info!(target: "sso_token_client", "{message}");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = message;
		}
	}
}
