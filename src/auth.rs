//! Caller identities and credentials carried through a handshake.

pub mod id;
pub mod secret;

pub use id::*;
pub use secret::*;
