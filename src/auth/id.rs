//! Strongly typed identifiers for the consumer, the end user, and the landing application.
//!
//! Each identifier ends up somewhere its characters matter: the consumer key is quoted verbatim
//! inside the `Authorization` header, while the login and the application become raw path
//! segments of the redirect URL. Validation rejects exactly the characters that would break
//! those positions.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

macro_rules! def_id {
	($(#[$meta:meta])* $name:ident, kind = $kind:literal, forbids = $forbids:path) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Validates `value` and wraps it.
			pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
				Self::try_from(value.into())
			}

			/// Borrows the identifier.
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				check($kind, &value, $forbids)?;

				Ok(Self(value))
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, "{}({})", $kind, self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier.
		kind: &'static str,
	},
	/// The identifier contains a character its position cannot carry.
	#[error("{kind} identifier cannot contain {character:?}.")]
	ForbiddenCharacter {
		/// Kind of identifier.
		kind: &'static str,
		/// First offending character.
		character: char,
	},
}

def_id! {
	/// OAuth consumer key identifying the calling application.
	ConsumerKey, kind = "ConsumerKey", forbids = breaks_header_value
}
def_id! {
	/// Login of the end user being pre-authenticated.
	Login, kind = "Login", forbids = breaks_path_segment
}
def_id! {
	/// Application the end user lands on after the redirect.
	ApplicationId, kind = "Application", forbids = breaks_path_segment
}

impl ApplicationId {
	/// Application used when the caller does not pick one.
	pub const DEFAULT: &'static str = "prisme";
}
impl Default for ApplicationId {
	fn default() -> Self {
		Self(Self::DEFAULT.into())
	}
}

fn breaks_header_value(c: char) -> bool {
	c.is_whitespace() || c.is_control() || c == '"'
}

fn breaks_path_segment(c: char) -> bool {
	c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#')
}

fn check(
	kind: &'static str,
	view: &str,
	forbids: fn(char) -> bool,
) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}

	match view.chars().find(|c| forbids(*c)) {
		Some(character) => Err(IdentifierError::ForbiddenCharacter { kind, character }),
		None => Ok(()),
	}
}
