//! OAuth protocol parameter generation.

// crates.io
use rand::RngCore;
use time::OffsetDateTime;
// self
use crate::{_prelude::*, auth::ConsumerKey, error::ConfigError};

/// `oauth_nonce` parameter name.
pub const OAUTH_NONCE: &str = "oauth_nonce";
/// `oauth_timestamp` parameter name.
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
/// `oauth_callback` parameter name.
pub const OAUTH_CALLBACK: &str = "oauth_callback";
/// `oauth_signature_method` parameter name.
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
/// `oauth_consumer_key` parameter name.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// `oauth_version` parameter name.
pub const OAUTH_VERSION: &str = "oauth_version";

/// Random bytes behind each nonce (hex-encoded to twice as many characters).
pub const NONCE_LEN: usize = 16;

/// The six OAuth parameters of one handshake, in generation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OAuthParameterSet {
	entries: Vec<(&'static str, String)>,
}
impl OAuthParameterSet {
	/// Generates a fresh parameter set with a random nonce and the current Unix timestamp.
	pub fn generate(
		consumer_key: &ConsumerKey,
		signature_method: &str,
		version: &str,
		callback: &str,
	) -> Result<Self, ConfigError> {
		Self::from_parts(
			&generate_nonce(),
			&current_timestamp(),
			callback,
			signature_method,
			consumer_key,
			version,
		)
	}

	/// Builds a parameter set from explicit values, rejecting any empty value.
	pub fn from_parts(
		nonce: &str,
		timestamp: &str,
		callback: &str,
		signature_method: &str,
		consumer_key: &str,
		version: &str,
	) -> Result<Self, ConfigError> {
		let entries = [
			(OAUTH_NONCE, nonce),
			(OAUTH_TIMESTAMP, timestamp),
			(OAUTH_CALLBACK, callback),
			(OAUTH_SIGNATURE_METHOD, signature_method),
			(OAUTH_CONSUMER_KEY, consumer_key),
			(OAUTH_VERSION, version),
		]
		.into_iter()
		.map(|(name, value)| {
			if value.is_empty() {
				Err(ConfigError::EmptyParameter { name })
			} else {
				Ok((name, value.to_owned()))
			}
		})
		.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { entries })
	}

	/// Looks up a parameter value by name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
	}

	/// The one-time nonce.
	pub fn nonce(&self) -> &str {
		self.get(OAUTH_NONCE).unwrap_or_default()
	}

	/// Iterates `(name, value)` pairs in generation order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.entries.iter().map(|(key, value)| (*key, value.as_str()))
	}

	/// Sorted view (ascending byte order of keys) used only by the signature base string.
	pub fn sorted(&self) -> BTreeMap<&'static str, &str> {
		self.iter().collect()
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when no parameter is present.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// 16 bytes from the thread-local CSPRNG, hex-encoded.
fn generate_nonce() -> String {
	let mut bytes = [0_u8; NONCE_LEN];

	rand::rng().fill_bytes(&mut bytes);

	hex::encode(bytes)
}

fn current_timestamp() -> String {
	OffsetDateTime::now_utc().unix_timestamp().to_string()
}
