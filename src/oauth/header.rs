//! `Authorization: OAuth ...` header construction.

// self
use crate::{_prelude::*, error::ConfigError, oauth::OAuthParameterSet, sign::Signature};

/// Value of the `Authorization` header sent to the SSO endpoint.
///
/// Rendered as `OAuth oauth_signature="<sig>",<k1>="<v1>",...`: the signature first, then every
/// parameter in generation order. Values are quoted but inserted verbatim, without
/// percent-encoding, matching what the SSO server has always received.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationHeader(String);
impl AuthorizationHeader {
	/// Header scheme prefix.
	pub const SCHEME: &'static str = "OAuth";

	/// Assembles the header from the generated parameters and their signature.
	pub fn build(params: &OAuthParameterSet, signature: &Signature) -> Self {
		let mut pairs = Vec::with_capacity(params.len() + 1);

		pairs.push(format!("oauth_signature=\"{signature}\""));
		pairs.extend(params.iter().map(|(key, value)| format!("{key}=\"{value}\"")));

		Self(format!("{} {}", Self::SCHEME, pairs.join(",")))
	}

	/// Borrows the rendered header value.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Splits the header back into `(key, value)` pairs in emission order.
	///
	/// Returns `None` when the value does not use the `OAuth` scheme, does not end with a
	/// closing quote, or a pair is not of the form `key="value"`. Values are emitted verbatim, so
	/// a value containing `",` cannot be split back unambiguously and yields wrong pairs.
	pub fn pairs(&self) -> Option<Vec<(&str, &str)>> {
		let body = self.0.strip_prefix(Self::SCHEME)?.strip_prefix(' ')?.strip_suffix('"')?;

		body.split("\",").map(|pair| pair.split_once("=\"")).collect()
	}
}
impl AsRef<str> for AuthorizationHeader {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<AuthorizationHeader> for String {
	fn from(value: AuthorizationHeader) -> Self {
		value.0
	}
}
impl FromStr for AuthorizationHeader {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let header = Self(s.to_owned());

		match header.pairs() {
			Some(_) => Ok(header),
			None => Err(ConfigError::InvalidHeader { name: "Authorization".into() }),
		}
	}
}
impl Debug for AuthorizationHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "AuthorizationHeader({})", self.0)
	}
}
impl Display for AuthorizationHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn fixture_params() -> OAuthParameterSet {
		OAuthParameterSet::from_parts(
			"0123456789abcdef0123456789abcdef",
			"1700000000",
			"https://app.example",
			"HMAC-SHA1",
			"abc",
			"1.0",
		)
		.expect("Fixture parameters should be valid.")
	}

	#[test]
	fn header_puts_signature_first_then_generation_order() {
		let header = AuthorizationHeader::build(&fixture_params(), &Signature::new("sig"));

		assert_eq!(
			header.as_str(),
			"OAuth oauth_signature=\"sig\",oauth_nonce=\"0123456789abcdef0123456789abcdef\",\
			 oauth_timestamp=\"1700000000\",oauth_callback=\"https://app.example\",\
			 oauth_signature_method=\"HMAC-SHA1\",oauth_consumer_key=\"abc\",oauth_version=\"1.0\""
		);
	}

	#[test]
	fn header_values_are_not_percent_encoded() {
		let params = OAuthParameterSet::from_parts(
			"n",
			"1",
			"https://app.example/cb?a=b c",
			"HMAC-SHA1",
			"k",
			"1.0",
		)
		.expect("Parameters should be valid.");
		let header = AuthorizationHeader::build(&params, &Signature::new("sig"));

		assert!(header.as_str().contains("oauth_callback=\"https://app.example/cb?a=b c\""));
	}

	#[test]
	fn pairs_recover_emission_order() {
		let header = AuthorizationHeader::build(&fixture_params(), &Signature::new("sig"));
		let keys = header
			.pairs()
			.expect("Header should split into pairs.")
			.into_iter()
			.map(|(key, _)| key)
			.collect::<Vec<_>>();

		assert_eq!(keys, [
			"oauth_signature",
			"oauth_nonce",
			"oauth_timestamp",
			"oauth_callback",
			"oauth_signature_method",
			"oauth_consumer_key",
			"oauth_version",
		]);
		assert!(AuthorizationHeader(String::from("Bearer abc")).pairs().is_none());
		assert!("Bearer abc".parse::<AuthorizationHeader>().is_err());
		assert!("OAuth a=\"1\",b=\"2".parse::<AuthorizationHeader>().is_err());
		assert!("OAuth a=\"1\",b\"".parse::<AuthorizationHeader>().is_err());
		assert_eq!(header.as_str().parse::<AuthorizationHeader>().ok(), Some(header));
	}
}
