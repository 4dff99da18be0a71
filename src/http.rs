//! Transport primitives for the SSO token request.
//!
//! The client depends on HTTP only through [`SsoHttpClient`]: one request goes out with the
//! headers the handshake computed and a status + body comes back. [`ReqwestHttpClient`] is the
//! default implementation; tests and embedders can plug in their own.

// std
#[cfg(feature = "reqwest")] use std::{ops::Deref, time::Duration};
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
};

/// Boxed future returned by [`SsoHttpClient::send`].
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<HttpResponse>> + 'a + Send>>;

/// Uppercased HTTP method token (`GET`, `POST`, ...).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HttpMethod(String);
impl HttpMethod {
	/// Validates `value` and stores it uppercased.
	pub fn new(value: impl AsRef<str>) -> Result<Self, ConfigError> {
		let view = value.as_ref();

		if view.is_empty() || !view.bytes().all(|b| b.is_ascii_alphabetic()) {
			return Err(ConfigError::InvalidHttpMethod { method: view.to_owned() });
		}

		Ok(Self(view.to_ascii_uppercase()))
	}

	/// `GET`, the method the SSO request-token endpoint expects by default.
	pub fn get() -> Self {
		Self("GET".into())
	}

	/// Borrows the uppercased method.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Debug for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "HttpMethod({})", self.0)
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for HttpMethod {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

/// Outbound request handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// HTTP method.
	pub method: HttpMethod,
	/// Target URL.
	pub url: Url,
	/// Header name/value pairs in emission order.
	pub headers: Vec<(&'static str, String)>,
}
impl HttpRequest {
	/// Returns the first header value named `name` (ASCII case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Status + body returned by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as text.
	pub body: String,
}

/// Abstraction over HTTP transports able to execute the SSO token request.
///
/// Implementations decide which statuses count as failures and surface them as
/// [`TransportError`]; the handshake itself only reads the body of a successful response.
/// The returned future must be `Send` so handshakes can run on multi-threaded executors.
pub trait SsoHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and resolves to the response status and body.
	fn send(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] with a bounded request timeout.
///
/// Any non-2xx status is reported as [`TransportError::UnexpectedStatus`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Timeout applied by [`ReqwestHttpClient::new`].
	pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

	/// Builds a client with [`ReqwestHttpClient::DEFAULT_TIMEOUT`].
	pub fn new() -> Result<Self> {
		Self::with_timeout(Self::DEFAULT_TIMEOUT)
	}

	/// Builds a client whose requests fail with [`TransportError::Timeout`] after `timeout`.
	pub fn with_timeout(timeout: Duration) -> Result<Self> {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.build()
			.map_err(ConfigError::http_client_build)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl SsoHttpClient for ReqwestHttpClient {
	fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes()).map_err(
				|_| ConfigError::InvalidHttpMethod { method: request.method.to_string() },
			)?;
			let mut headers = HeaderMap::with_capacity(request.headers.len());

			for (name, value) in request.headers {
				let invalid = || ConfigError::InvalidHeader { name: name.to_owned() };
				let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
				let header_value = HeaderValue::from_str(&value).map_err(|_| invalid())?;

				headers.append(header_name, header_value);
			}

			let response = self
				.0
				.request(method, request.url)
				.headers(headers)
				.send()
				.await
				.map_err(TransportError::from)?;
			let status = response.status();
			let body = response.text().await.map_err(TransportError::from)?;

			if !status.is_success() {
				return Err(TransportError::unexpected_status(status.as_u16(), &body).into());
			}

			Ok(HttpResponse { status: status.as_u16(), body })
		})
	}
}
