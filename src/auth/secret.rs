//! Consumer secret wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Redacted consumer secret keeping the shared signing key out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerSecret(String);
impl ConsumerSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ConsumerSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<&str> for ConsumerSecret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for ConsumerSecret {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}
impl Debug for ConsumerSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ConsumerSecret").field(&"<redacted>").finish()
	}
}
impl Display for ConsumerSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = ConsumerSecret::new("s3cret");

		assert_eq!(format!("{secret:?}"), "ConsumerSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "s3cret");
	}
}
