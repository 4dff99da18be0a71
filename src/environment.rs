//! Named SSO deployments and their fixed request-token endpoints.

// self
use crate::{_prelude::*, error::ConfigError};

/// SSO deployment selected by name (`prod` or `staging`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Environment {
	/// Production SSO.
	#[default]
	Production,
	/// Staging (acceptance) SSO.
	Staging,
}
impl Environment {
	const PRODUCTION_URL: &'static str = "https://connect.manymore.fr/oauth/v1/requestToken";
	const STAGING_URL: &'static str = "https://connect-recette.manymore.fr/oauth/v1/requestToken";

	/// Returns the name accepted by [`Environment::from_str`].
	pub const fn as_str(self) -> &'static str {
		match self {
			Environment::Production => "prod",
			Environment::Staging => "staging",
		}
	}

	/// Request-token endpoint of the deployment, as a string.
	pub const fn request_token_url_str(self) -> &'static str {
		match self {
			Environment::Production => Self::PRODUCTION_URL,
			Environment::Staging => Self::STAGING_URL,
		}
	}

	/// Request-token endpoint of the deployment.
	pub fn request_token_url(self) -> Result<Url, ConfigError> {
		let raw = self.request_token_url_str();

		Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { url: raw.to_owned(), source })
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"prod" => Ok(Environment::Production),
			"staging" => Ok(Environment::Staging),
			other => Err(ConfigError::UnknownEnvironment { name: other.to_owned() }),
		}
	}
}
impl TryFrom<String> for Environment {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
impl From<Environment> for String {
	fn from(value: Environment) -> Self {
		value.as_str().to_owned()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn known_environments_map_to_distinct_fixed_urls() {
		let prod = "prod".parse::<Environment>().expect("prod should be known.");
		let staging = "staging".parse::<Environment>().expect("staging should be known.");
		let prod_url = prod.request_token_url().expect("Production URL should parse.");
		let staging_url = staging.request_token_url().expect("Staging URL should parse.");

		assert_eq!(prod, Environment::Production);
		assert_eq!(staging, Environment::Staging);
		assert_ne!(prod_url, staging_url);
		assert_eq!(prod_url.scheme(), "https");
		assert_eq!(staging_url.path(), "/oauth/v1/requestToken");
		assert_eq!(Environment::default(), Environment::Production);
	}

	#[test]
	fn unknown_environment_is_a_configuration_error() {
		for name in ["dev", "PROD", "", "production"] {
			let err = name.parse::<Environment>().expect_err("Unknown names must be rejected.");

			assert!(
				matches!(err, ConfigError::UnknownEnvironment { name: ref got } if got == name),
				"Unexpected error for {name:?}: {err:?}"
			);
		}
	}

	#[test]
	fn serde_uses_short_names() {
		let json = serde_json::to_string(&Environment::Staging).expect("Serialization works.");

		assert_eq!(json, "\"staging\"");
		assert!(serde_json::from_str::<Environment>("\"qa\"").is_err());
	}
}
