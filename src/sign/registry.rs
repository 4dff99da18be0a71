//! Open dispatch table mapping method identifiers to [`SignatureMethod`] implementations.

// self
use crate::{
	_prelude::*,
	auth::ConsumerSecret,
	error::ConfigError,
	sign::{self, HmacSha1, Signature, SignatureInput, SignatureMethod},
};

/// Registry of signature methods keyed by their identifier.
///
/// [`SignerRegistry::default`] carries `HMAC-SHA1`; additional algorithms are added with
/// [`SignerRegistry::register`] without touching the client. Lookups are exact and
/// case-sensitive.
#[derive(Clone)]
pub struct SignerRegistry {
	methods: HashMap<String, Arc<dyn SignatureMethod>>,
}
impl SignerRegistry {
	/// Creates a registry without any method.
	pub fn empty() -> Self {
		Self { methods: HashMap::new() }
	}

	/// Registers `method` under its identifier, returning the method it replaced.
	pub fn register(
		&mut self,
		method: impl 'static + SignatureMethod,
	) -> Option<Arc<dyn SignatureMethod>> {
		let method: Arc<dyn SignatureMethod> = Arc::new(method);

		self.methods.insert(method.id().to_owned(), method)
	}

	/// Builder-style variant of [`SignerRegistry::register`].
	pub fn with_method(mut self, method: impl 'static + SignatureMethod) -> Self {
		self.register(method);

		self
	}

	/// Returns true when a method is registered under `id`.
	pub fn contains(&self, id: &str) -> bool {
		self.methods.contains_key(id)
	}

	/// Registered identifiers in ascending order.
	pub fn methods(&self) -> Vec<&str> {
		let mut ids = self.methods.keys().map(String::as_str).collect::<Vec<_>>();

		ids.sort_unstable();

		ids
	}

	/// Canonicalizes `input` and signs it with the method registered under `method`.
	pub fn sign(
		&self,
		method: &str,
		input: &SignatureInput,
		secret: &ConsumerSecret,
	) -> Result<Signature> {
		let signer = self.methods.get(method).ok_or_else(|| {
			ConfigError::UnsupportedSignatureMethod { method: method.to_owned() }
		})?;
		let base_string = sign::signature_base_string(input);

		signer.sign(&base_string, secret.expose())
	}
}
impl Default for SignerRegistry {
	fn default() -> Self {
		Self::empty().with_method(HmacSha1)
	}
}
impl Debug for SignerRegistry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SignerRegistry").field("methods", &self.methods()).finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use hmac::{Hmac, Mac};
	use sha2::Sha256;
	// self
	use super::*;
	use crate::sign::tests::{FIXTURE_BASE_STRING, fixture_input};

	struct HmacSha256;
	impl SignatureMethod for HmacSha256 {
		fn id(&self) -> &str {
			"HMAC-SHA256"
		}

		fn sign(&self, base_string: &str, secret: &str) -> Result<Signature> {
			let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(secret.as_bytes())
				.map_err(|_| ConfigError::InvalidSigningKey)?;

			mac.update(base_string.as_bytes());

			Ok(Signature::new(hex::encode(mac.finalize().into_bytes())))
		}
	}

	struct Echo;
	impl SignatureMethod for Echo {
		fn id(&self) -> &str {
			"ECHO"
		}

		fn sign(&self, base_string: &str, _secret: &str) -> Result<Signature> {
			Ok(Signature::new(base_string))
		}
	}

	#[test]
	fn default_registry_signs_fixture_with_hmac_sha1() {
		let registry = SignerRegistry::default();
		let signature = registry
			.sign("HMAC-SHA1", &fixture_input(), &ConsumerSecret::new("s3cret"))
			.expect("HMAC-SHA1 should be registered by default.");

		assert_eq!(signature.as_str(), "1aa24cbde209cbb1542b28b2247e626d6a6303e2");
		assert_eq!(registry.methods(), ["HMAC-SHA1"]);
	}

	#[test]
	fn signing_is_deterministic() {
		let registry = SignerRegistry::default();
		let secret = ConsumerSecret::new("s3cret");
		let first = registry.sign("HMAC-SHA1", &fixture_input(), &secret).expect("Signing works.");
		let second = registry.sign("HMAC-SHA1", &fixture_input(), &secret).expect("Signing works.");

		assert_eq!(first, second);
	}

	#[test]
	fn unknown_method_is_a_configuration_error() {
		let err = SignerRegistry::default()
			.sign("FOO", &fixture_input(), &ConsumerSecret::new("s3cret"))
			.expect_err("Unregistered methods must be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::UnsupportedSignatureMethod { ref method }) if method == "FOO"
		));
		assert!(SignerRegistry::empty().sign("HMAC-SHA1", &fixture_input(), &"k".into()).is_err());
		assert!(!SignerRegistry::default().contains("hmac-sha1"), "Lookup is case-sensitive.");
	}

	#[test]
	fn custom_methods_receive_the_canonical_base_string() {
		let registry = SignerRegistry::default().with_method(Echo).with_method(HmacSha256);
		let echoed = registry
			.sign("ECHO", &fixture_input(), &ConsumerSecret::new("ignored"))
			.expect("Custom methods should be dispatched.");
		let sha256 = registry
			.sign("HMAC-SHA256", &fixture_input(), &ConsumerSecret::new("s3cret"))
			.expect("Custom methods should be dispatched.");

		assert_eq!(echoed.as_str(), FIXTURE_BASE_STRING);
		assert_eq!(
			sha256.as_str(),
			"96e661841bbddc4d419aa5c3db82c401e7acb7e766d3820485300c456cb8dfce"
		);
		assert_eq!(registry.methods(), ["ECHO", "HMAC-SHA1", "HMAC-SHA256"]);
	}

	#[test]
	fn register_replaces_existing_method() {
		let mut registry = SignerRegistry::default();

		assert!(registry.register(Echo).is_none());
		assert!(registry.register(Echo).is_some());
	}
}
