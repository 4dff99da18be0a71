//! Keyed-hash signature methods.

// crates.io
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{_prelude::*, error::ConfigError, sign::Signature};

type HmacSha1Mac = Hmac<Sha1>;

/// A named keyed-hash algorithm applied to a signature base string.
///
/// Implementations must be deterministic: the same base string and secret always produce the
/// same [`Signature`]. Register new methods on a
/// [`SignerRegistry`](crate::sign::SignerRegistry) instead of extending the client.
pub trait SignatureMethod
where
	Self: Send + Sync,
{
	/// Identifier sent as `oauth_signature_method` (e.g. `HMAC-SHA1`).
	fn id(&self) -> &str;

	/// Signs `base_string` with `secret` as the key.
	fn sign(&self, base_string: &str, secret: &str) -> Result<Signature>;
}

/// HMAC with SHA-1, hex-encoded (lowercase).
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha1;
impl HmacSha1 {
	/// Identifier registered for this method.
	pub const ID: &'static str = "HMAC-SHA1";
}
impl SignatureMethod for HmacSha1 {
	fn id(&self) -> &str {
		Self::ID
	}

	fn sign(&self, base_string: &str, secret: &str) -> Result<Signature> {
		let mut mac = <HmacSha1Mac as Mac>::new_from_slice(secret.as_bytes())
			.map_err(|_| ConfigError::InvalidSigningKey)?;

		mac.update(base_string.as_bytes());

		Ok(Signature::new(hex::encode(mac.finalize().into_bytes())))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn hmac_sha1_matches_reference_vector() {
		let signature = HmacSha1
			.sign("The quick brown fox jumps over the lazy dog", "key")
			.expect("HMAC-SHA1 should accept any key.");

		assert_eq!(signature.as_str(), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
	}

	#[test]
	fn hmac_sha1_accepts_empty_secret() {
		let signature = HmacSha1.sign("data", "").expect("HMAC-SHA1 should accept an empty key.");

		assert_eq!(signature.as_str().len(), 40);
	}
}
