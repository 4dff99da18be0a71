//! RFC 3986 percent-encoding used by the signature base string and the redirect URL.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Unreserved characters `A-Z a-z 0-9 - . _ ~` stay literal; every other byte is encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `input` byte by byte (UTF-8), writing spaces as `%20`.
pub fn percent_encode(input: &str) -> String {
	percent_encoding::utf8_percent_encode(input, UNRESERVED).to_string()
}

#[cfg(test)]
mod tests {
	// crates.io
	use percent_encoding::percent_decode_str;
	// self
	use super::*;

	#[test]
	fn unreserved_characters_stay_literal() {
		assert_eq!(percent_encode("abcXYZ019"), "abcXYZ019");
		assert_eq!(percent_encode("-._~"), "-._~");
	}

	#[test]
	fn reserved_characters_are_encoded_uppercase() {
		assert_eq!(percent_encode(" "), "%20");
		assert_eq!(percent_encode("+"), "%2B");
		assert_eq!(percent_encode("&=/:?#"), "%26%3D%2F%3A%3F%23");
		assert_eq!(percent_encode("é"), "%C3%A9");
		assert_eq!(percent_encode("*"), "%2A");
	}

	#[test]
	fn decoding_recovers_the_original_value() {
		for value in ["https://app.example/cb?x=1&y=2", "a b+c", "snowman ☃", "%41", "", "~tilde"] {
			let encoded = percent_encode(value);
			let decoded = percent_decode_str(&encoded)
				.decode_utf8()
				.expect("Encoded values should decode as UTF-8.");

			assert_eq!(decoded, value, "Round trip failed for {value:?}.");
		}
	}
}
