//! Handshake error types shared across signing, transport, and response parsing.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical handshake error exposed by public APIs.
///
/// Every variant aborts the handshake in progress; nothing is retried by the client.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (unknown signing method, environment, bad input).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout, or an unexpected HTTP status).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The SSO server answered with a body the client cannot use.
	#[error(transparent)]
	ResponseFormat(#[from] ResponseFormatError),
}
impl From<crate::auth::IdentifierError> for Error {
	fn from(e: crate::auth::IdentifierError) -> Self {
		ConfigError::from(e).into()
	}
}

/// Configuration and validation failures raised before any network activity.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// No signature method is registered under the requested identifier.
	#[error("No signer registered for method `{method}`.")]
	UnsupportedSignatureMethod {
		/// Identifier that failed the lookup.
		method: String,
	},
	/// Environment name does not map to a known SSO endpoint.
	#[error("Environment not found: `{name}`.")]
	UnknownEnvironment {
		/// Name supplied by the caller.
		name: String,
	},
	/// URL cannot be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Raw URL value.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request URL carries no host to derive the redirect from.
	#[error("URL `{url}` has no host.")]
	MissingHost {
		/// Offending URL.
		url: String,
	},
	/// An OAuth parameter value was empty.
	#[error("OAuth parameter `{name}` cannot be empty.")]
	EmptyParameter {
		/// Parameter name.
		name: &'static str,
	},
	/// HTTP method is not a valid token.
	#[error("HTTP method `{method}` is invalid.")]
	InvalidHttpMethod {
		/// Raw method value.
		method: String,
	},
	/// Header value cannot be sent over HTTP.
	#[error("Header `{name}` contains characters that cannot be sent.")]
	InvalidHeader {
		/// Header name.
		name: String,
	},
	/// Keyed-hash implementation rejected the secret.
	#[error("Signing key was rejected by the signature method.")]
	InvalidSigningKey,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Caller-supplied identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures surfaced by an [`SsoHttpClient`](crate::http::SsoHttpClient).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the SSO endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The request did not complete within the configured timeout.
	#[error("Timed out while calling the SSO endpoint.")]
	Timeout,
	/// The SSO endpoint answered with a non-success status.
	#[error("SSO endpoint returned HTTP {status}: {body_preview}.")]
	UnexpectedStatus {
		/// HTTP status code.
		status: u16,
		/// Truncated response body.
		body_preview: String,
	},
}
impl TransportError {
	const BODY_PREVIEW_LIMIT: usize = 256;

	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Builds an [`TransportError::UnexpectedStatus`] with a bounded body preview.
	pub fn unexpected_status(status: u16, body: &str) -> Self {
		Self::UnexpectedStatus { status, body_preview: truncate_preview(body) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::Timeout } else { Self::network(e) }
	}
}

/// Failures decoding the token endpoint response body.
#[derive(Debug, ThisError)]
pub enum ResponseFormatError {
	/// Body is not a JSON document.
	#[error("SSO endpoint returned a body that is not JSON.")]
	InvalidJson {
		/// Underlying JSON syntax failure.
		#[source]
		source: serde_json::Error,
	},
	/// Body is JSON but does not have the expected shape.
	#[error("SSO endpoint returned malformed JSON.")]
	Malformed {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// A required field is absent, null, or empty.
	#[error("SSO endpoint response is missing `{field}`.")]
	MissingField {
		/// Name of the missing field.
		field: &'static str,
	},
}

fn truncate_preview(body: &str) -> String {
	if body.chars().count() <= TransportError::BODY_PREVIEW_LIMIT {
		return body.to_owned();
	}

	let mut buf = body.chars().take(TransportError::BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn unexpected_status_truncates_long_bodies() {
		let body = "x".repeat(1_000);
		let TransportError::UnexpectedStatus { status, body_preview } =
			TransportError::unexpected_status(502, &body)
		else {
			panic!("Expected an unexpected status error.");
		};

		assert_eq!(status, 502);
		assert_eq!(body_preview.chars().count(), TransportError::BODY_PREVIEW_LIMIT + 1);
		assert!(body_preview.ends_with('…'));
	}

	#[test]
	fn config_errors_render_the_offending_value() {
		let err: Error = ConfigError::UnsupportedSignatureMethod { method: "FOO".into() }.into();

		assert_eq!(err.to_string(), "No signer registered for method `FOO`.");
		assert!(matches!(err, Error::Config(ConfigError::UnsupportedSignatureMethod { .. })));
	}
}
