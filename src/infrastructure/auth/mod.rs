//! Authentication infrastructure module
//!
//! This module owns the process key pair and exposes token issuance and
//! authorization to the HTTP layer.

mod authority;

pub use authority::TokenAuthority;
