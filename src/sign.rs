//! OAuth 1.0a-style request signing.
//!
//! Signing is a pure computation: the [`SignatureInput`] is canonicalized into a signature base
//! string (`METHOD&encoded_url&encoded_sorted_params`) and handed to the [`SignatureMethod`]
//! registered under the requested identifier in a [`SignerRegistry`]. The sorted parameter view
//! exists only inside the base string; header emission keeps generation order.

pub mod encode;
pub mod method;
pub mod registry;

pub use encode::*;
pub use method::*;
pub use registry::*;

// self
use crate::{_prelude::*, http::HttpMethod, oauth::OAuthParameterSet};

/// Everything covered by a signature: the OAuth parameters plus the request line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureInput {
	params: OAuthParameterSet,
	method: HttpMethod,
	url: String,
}
impl SignatureInput {
	/// Freezes the parameters together with the HTTP method and target URL.
	///
	/// `url` is kept as given: no parsing, case folding, or path normalization happens before it
	/// is encoded into the base string.
	pub fn new(params: OAuthParameterSet, method: HttpMethod, url: impl Into<String>) -> Self {
		Self { params, method, url: url.into() }
	}

	/// OAuth parameters in generation order.
	pub fn params(&self) -> &OAuthParameterSet {
		&self.params
	}

	/// HTTP method of the signed request.
	pub fn method(&self) -> &HttpMethod {
		&self.method
	}

	/// Target URL of the signed request.
	pub fn url(&self) -> &str {
		&self.url
	}

	/// Returns the parameter set, dropping the request line.
	pub fn into_params(self) -> OAuthParameterSet {
		self.params
	}
}

/// Hex-encoded keyed-hash output.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);
impl Signature {
	/// Wraps a signature produced by a [`SignatureMethod`].
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Borrows the signature string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Signature {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Debug for Signature {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Signature({})", self.0)
	}
}
impl Display for Signature {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Builds the canonical signature base string for `input`.
///
/// Parameters are sorted by key in ascending byte order, each key and value is percent-encoded
/// with [`percent_encode`], pairs are joined with `&`, and the result is appended to the
/// uppercased method and the encoded URL.
pub fn signature_base_string(input: &SignatureInput) -> String {
	let joined = input
		.params
		.sorted()
		.into_iter()
		.map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
		.collect::<Vec<_>>()
		.join("&");

	format!(
		"{}&{}&{}",
		input.method.as_str(),
		percent_encode(&input.url),
		percent_encode(&joined)
	)
}
