//! OAuth 1.0a-style parameter generation and `Authorization` header assembly.
//!
//! [`OAuthParameterSet`] keeps the six protocol parameters in generation order
//! (nonce, timestamp, callback, signature method, consumer key, version). That order is what
//! [`AuthorizationHeader`] emits; only the signature base string sorts them.

pub mod header;
pub mod params;

pub use header::*;
pub use params::*;
