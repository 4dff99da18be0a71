//! Token exchange orchestration.
//!
//! [`TokenExchangeClient::perform_handshake`] drives one pre-authentication round trip:
//! generate the OAuth parameters, sign them through the [`SignerRegistry`], assemble the
//! `Authorization` header, call the SSO endpoint through the [`SsoHttpClient`], and turn the
//! returned `oauth_token` into a redirect URL. Every value is created per call; the client keeps
//! no state between handshakes and can be shared across tasks.

pub mod redirect;

pub use redirect::*;

// std
use std::time::Instant;
// self
use crate::{
	_prelude::*,
	auth::{ApplicationId, ConsumerKey, ConsumerSecret, Login},
	error::ConfigError,
	http::{HttpMethod, HttpRequest, SsoHttpClient},
	oauth::{AuthorizationHeader, OAuthParameterSet},
	obs::{self, HandshakeObserver, HandshakeOutcome, HandshakeSpan, TracingObserver},
	sign::{HmacSha1, Signature, SignatureInput, SignerRegistry},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// `User-Agent` sent with every token request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "manyhub-sso-client/1.0";
/// `oauth_callback` used when the caller does not supply one.
pub const DEFAULT_CALLBACK: &str = "https://www.manymore.fr";
/// `oauth_version` used when the caller does not supply one.
pub const DEFAULT_VERSION: &str = "1.0";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestTokenExchangeClient = TokenExchangeClient<ReqwestHttpClient>;

/// Inputs of one handshake.
///
/// [`HandshakeRequest::new`] fills in the defaults (`GET`, `HMAC-SHA1`, version `1.0`, the
/// default callback and application); the `with_*` methods override them.
#[derive(Clone, Debug)]
pub struct HandshakeRequest {
	/// HTTP method of the token request.
	pub method: HttpMethod,
	/// SSO request-token endpoint, exactly as signed.
	///
	/// The string goes into the signature base string untouched; it is parsed only to address
	/// the request and to derive the redirect host.
	pub url: String,
	/// Consumer key identifying the calling application.
	pub consumer_key: ConsumerKey,
	/// Shared secret keying the signature.
	pub secret: ConsumerSecret,
	/// Identifier of the signature method (`oauth_signature_method`).
	pub signature_method: String,
	/// Protocol version (`oauth_version`).
	pub version: String,
	/// Callback URL (`oauth_callback`).
	pub callback: String,
	/// Login of the end user being pre-authenticated.
	pub login: Login,
	/// Application the end user lands on.
	pub application: ApplicationId,
}
impl HandshakeRequest {
	/// Creates a request with default method, signature method, version, callback, and
	/// application.
	pub fn new(
		url: impl Into<String>,
		consumer_key: ConsumerKey,
		secret: ConsumerSecret,
		login: Login,
	) -> Self {
		Self {
			method: HttpMethod::get(),
			url: url.into(),
			consumer_key,
			secret,
			signature_method: HmacSha1::ID.into(),
			version: DEFAULT_VERSION.into(),
			callback: DEFAULT_CALLBACK.into(),
			login,
			application: ApplicationId::default(),
		}
	}

	/// Overrides the HTTP method.
	pub fn with_method(mut self, method: HttpMethod) -> Self {
		self.method = method;

		self
	}

	/// Overrides the signature method identifier.
	pub fn with_signature_method(mut self, signature_method: impl Into<String>) -> Self {
		self.signature_method = signature_method.into();

		self
	}

	/// Overrides the protocol version.
	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();

		self
	}

	/// Overrides the callback URL.
	pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
		self.callback = callback.into();

		self
	}

	/// Overrides the landing application.
	pub fn with_application(mut self, application: ApplicationId) -> Self {
		self.application = application;

		self
	}
}

/// Drives the SSO pre-authentication handshake.
///
/// The client owns the transport, the signature registry, and the observer; credentials travel
/// with each [`HandshakeRequest`] so one client can serve many consumers concurrently.
#[derive(Clone)]
pub struct TokenExchangeClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	/// HTTP client used for the token request.
	pub http_client: Arc<C>,
	/// Signature methods available to handshakes.
	pub signers: Arc<SignerRegistry>,
	/// Receiver of handshake events.
	pub observer: Arc<dyn HandshakeObserver>,
	/// `User-Agent` header value.
	pub user_agent: String,
}
impl<C> TokenExchangeClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	/// Creates a client around the caller-provided transport, with the default registry and a
	/// [`TracingObserver`].
	pub fn with_http_client(http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			signers: Arc::new(SignerRegistry::default()),
			observer: Arc::new(TracingObserver),
			user_agent: DEFAULT_USER_AGENT.into(),
		}
	}

	/// Replaces the signature registry.
	pub fn with_signers(mut self, signers: impl Into<Arc<SignerRegistry>>) -> Self {
		self.signers = signers.into();

		self
	}

	/// Replaces the observer receiving handshake events.
	pub fn with_observer(mut self, observer: Arc<dyn HandshakeObserver>) -> Self {
		self.observer = observer;

		self
	}

	/// Replaces the `User-Agent` header value.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Performs the full handshake and returns the redirect URL for the end user.
	///
	/// Configuration problems (unknown signature method, empty parameters, unparsable or
	/// host-less URL) fail before any request is sent. Transport failures and unusable responses
	/// abort the handshake; nothing is retried.
	pub async fn perform_handshake(&self, request: HandshakeRequest) -> Result<HandshakeResult> {
		let span = HandshakeSpan::new(&request.signature_method);
		let span_handle = &span;
		let started = Instant::now();

		obs::record_handshake_outcome(HandshakeOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = Url::parse(&request.url).map_err(|source| ConfigError::InvalidUrl {
					url: request.url.clone(),
					source,
				})?;
				let Some(host) = url.host_str() else {
					return Err(Error::from(ConfigError::MissingHost {
						url: request.url.clone(),
					}));
				};

				span_handle.record_host(host);

				let params = OAuthParameterSet::generate(
					&request.consumer_key,
					&request.signature_method,
					&request.version,
					&request.callback,
				)?;
				let input = self.signature_input(params, &request);
				let signature = self.sign(&request.signature_method, &input, &request.secret)?;
				let header = AuthorizationHeader::build(input.params(), &signature);
				let body = self.call_sso(&request.method, &url, &header).await?;
				let oauth_token = redirect::parse_oauth_token(&body)?;
				let redirect_url = redirect::build_redirect_url(
					&url,
					&oauth_token,
					&request.login,
					&request.application,
				)?;

				Ok(HandshakeResult { redirect_url })
			})
			.await;

		let outcome =
			if result.is_ok() { HandshakeOutcome::Success } else { HandshakeOutcome::Failure };

		span.record_outcome(outcome);
		obs::record_handshake_outcome(outcome);
		obs::record_handshake_duration(outcome, started.elapsed());

		result
	}

	fn signature_input(
		&self,
		params: OAuthParameterSet,
		request: &HandshakeRequest,
	) -> SignatureInput {
		let mut fields = params.iter().collect::<Vec<_>>();

		fields.push(("method", request.method.as_str()));
		fields.push(("url", request.url.as_str()));
		self.observer.debug("OAuth parameters generated", &fields);

		SignatureInput::new(params, request.method.clone(), request.url.clone())
	}

	fn sign(
		&self,
		method: &str,
		input: &SignatureInput,
		secret: &ConsumerSecret,
	) -> Result<Signature> {
		let signature = self.signers.sign(method, input, secret)?;

		self.observer.debug("Signature generated", &[("oauth_signature", signature.as_str())]);

		Ok(signature)
	}

	async fn call_sso(
		&self,
		method: &HttpMethod,
		url: &Url,
		header: &AuthorizationHeader,
	) -> Result<String> {
		let request = HttpRequest {
			method: method.clone(),
			url: url.clone(),
			headers: vec![
				("User-Agent", self.user_agent.clone()),
				("Accept", "application/json".into()),
				("Authorization", header.as_str().to_owned()),
			],
		};
		let response = self.http_client.send(request).await?;

		self.observer.info(&format!("Received from server: {}", response.body));

		Ok(response.body)
	}
}
#[cfg(feature = "reqwest")]
impl TokenExchangeClient<ReqwestHttpClient> {
	/// Creates a client backed by [`ReqwestHttpClient`] with its default timeout.
	pub fn new() -> Result<Self> {
		Ok(Self::with_http_client(ReqwestHttpClient::new()?))
	}
}
impl<C> Debug for TokenExchangeClient<C>
where
	C: ?Sized + SsoHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenExchangeClient")
			.field("signers", &self.signers)
			.field("user_agent", &self.user_agent)
			.finish()
	}
}
