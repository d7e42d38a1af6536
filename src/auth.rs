//! Credentials, redacted secrets, and the token-provider capability consumed by the transport.

pub mod credential;
pub mod provider;
pub mod secret;

pub use credential::*;
pub use provider::*;
pub use secret::*;
