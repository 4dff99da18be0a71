//! Client-side SSO pre-authentication handshake modeled on OAuth 1.0a request-token signing:
//! canonical signature base strings, pluggable keyed-hash methods, `Authorization` header
//! assembly, the token-endpoint call, and redirect URL derivation.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod environment;
pub mod error;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod sign;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(feature = "cli")] use {clap as _, color_eyre as _, tokio as _, tracing_subscriber as _};
#[cfg(test)] use {httpmock as _, tokio as _};
