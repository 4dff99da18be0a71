//! Response parsing and redirect URL derivation.

// self
use crate::{
	_prelude::*,
	error::{ConfigError, ResponseFormatError},
	sign,
};

/// Path segment every redirect URL starts with.
pub const PREAUTH_PATH: &str = "preauth";

/// Outcome of a successful handshake.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeResult {
	/// URL the end user's browser must be sent to.
	pub redirect_url: String,
}

#[derive(Deserialize)]
struct RequestTokenResponse {
	#[serde(default)]
	oauth_token: Option<String>,
}

/// Extracts the non-empty `oauth_token` string from a JSON response body.
pub fn parse_oauth_token(body: &str) -> Result<String, ResponseFormatError> {
	let document = serde_json::from_str::<serde_json::Value>(body)
		.map_err(|source| ResponseFormatError::InvalidJson { source })?;
	let response: RequestTokenResponse = serde_path_to_error::deserialize(document)
		.map_err(|source| ResponseFormatError::Malformed { source })?;

	response
		.oauth_token
		.filter(|token| !token.is_empty())
		.ok_or(ResponseFormatError::MissingField { field: "oauth_token" })
}

/// Builds `scheme://host/preauth/<encoded token>/<login>/<application>`.
///
/// Only the token is percent-encoded; `login` and `application` are inserted verbatim and the
/// port of `request_url` is not carried over, as the SSO front end expects.
pub fn build_redirect_url(
	request_url: &Url,
	oauth_token: &str,
	login: &str,
	application: &str,
) -> Result<String, ConfigError> {
	let host = request_url
		.host_str()
		.ok_or_else(|| ConfigError::MissingHost { url: request_url.to_string() })?;

	Ok(format!(
		"{}://{host}/{PREAUTH_PATH}/{}/{login}/{application}",
		request_url.scheme(),
		sign::percent_encode(oauth_token),
	))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("URL fixture should parse successfully.")
	}

	#[test]
	fn redirect_url_uses_scheme_and_host_only() {
		let redirect = build_redirect_url(
			&url("https://sso.example:8443/oauth/v1/requestToken?x=1"),
			"tok123",
			"jdoe",
			"prisme",
		)
		.expect("Redirect should build.");

		assert_eq!(redirect, "https://sso.example/preauth/tok123/jdoe/prisme");
	}

	#[test]
	fn redirect_url_encodes_token_but_not_login_or_application() {
		let redirect = build_redirect_url(
			&url("https://sso.example/oauth/v1/requestToken"),
			"a/b c+d",
			"j.doe@corp",
			"app&x",
		)
		.expect("Redirect should build.");

		assert_eq!(redirect, "https://sso.example/preauth/a%2Fb%20c%2Bd/j.doe@corp/app&x");
	}

	#[test]
	fn redirect_requires_a_host() {
		let err = build_redirect_url(&url("data:text/plain,hello"), "t", "l", "a")
			.expect_err("Host-less URLs must be rejected.");

		assert!(matches!(err, ConfigError::MissingHost { .. }));
	}

	#[test]
	fn token_parsing_accepts_extra_fields() {
		let token = parse_oauth_token("{\"oauth_token\":\"tok123\",\"oauth_callback_confirmed\":true}")
			.expect("Valid responses should parse.");

		assert_eq!(token, "tok123");
	}

	#[test]
	fn token_parsing_rejects_malformed_or_incomplete_bodies() {
		for body in ["{}\"", "not json", ""] {
			assert!(
				matches!(parse_oauth_token(body), Err(ResponseFormatError::InvalidJson { .. })),
				"Body {body:?} should be rejected as invalid JSON."
			);
		}
		for body in ["\"tok123\"", "{\"oauth_token\":42}", "{\"oauth_token\":[\"a\"]}"] {
			assert!(
				matches!(parse_oauth_token(body), Err(ResponseFormatError::Malformed { .. })),
				"Body {body:?} should be malformed."
			);
		}
		for body in ["{}", "{\"oauth_token\":null}", "{\"oauth_token\":\"\"}"] {
			assert!(
				matches!(
					parse_oauth_token(body),
					Err(ResponseFormatError::MissingField { field: "oauth_token" })
				),
				"Body {body:?} should miss the token."
			);
		}
	}

	#[test]
	fn malformed_errors_report_the_json_path() {
		let Err(ResponseFormatError::Malformed { source }) =
			parse_oauth_token("{\"oauth_token\":42}")
		else {
			panic!("Expected a malformed response error.");
		};

		assert_eq!(source.path().to_string(), "oauth_token");
	}
}
