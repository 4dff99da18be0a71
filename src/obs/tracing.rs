// self
use crate::{_prelude::*, obs::HandshakeOutcome};

/// Future returned by [`HandshakeSpan::instrument`]; the bare future when tracing is disabled.
#[cfg(feature = "tracing")]
pub type InstrumentedHandshake<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`HandshakeSpan::instrument`]; the bare future when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedHandshake<F> = F;

/// Span covering one handshake, from parameter generation to redirect derivation.
///
/// Opened with the requested signature method. The `host` and `outcome` fields stay empty until
/// [`HandshakeSpan::record_host`] and [`HandshakeSpan::record_outcome`] fill them.
#[derive(Clone, Debug)]
pub struct HandshakeSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl HandshakeSpan {
	/// Opens the span for a handshake signed with `signature_method`.
	pub fn new(signature_method: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"sso_token_client.handshake",
				signature_method,
				host = tracing::field::Empty,
				outcome = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = signature_method;

			Self {}
		}
	}

	/// Runs `fut` inside the span.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedHandshake<Fut>
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

	/// Fills the `host` field once the endpoint URL parsed.
	pub fn record_host(&self, host: &str) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("host", host);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = host;
		}
	}

	/// Fills the `outcome` field once the handshake settled.
	pub fn record_outcome(&self, outcome: HandshakeOutcome) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = outcome;
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn span_passes_the_future_output_through() {
		let span = HandshakeSpan::new("HMAC-SHA1");
		let value = span.instrument(async { "tok123" }).await;

		span.record_host("sso.example");
		span.record_outcome(HandshakeOutcome::Success);

		assert_eq!(value, "tok123");
	}
}
