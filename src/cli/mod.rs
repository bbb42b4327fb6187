//! CLI module for the ES256K gateway
//!
//! Provides subcommands:
//! - `serve`: run the HTTP service
//! - `keygen`: print a fresh signing key for `APP__AUTH__PRIVATE_KEY_HEX`
//! - `issue`: sign claims with the configured key

pub mod issue;
pub mod keygen;
pub mod serve;

use clap::{Parser, Subcommand};

/// ES256K gateway - secp256k1 token issuance and verification
#[derive(Parser)]
#[command(name = "es256k-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Generate a signing key and print it as hex
    Keygen,

    /// Issue a token with the configured signing key
    Issue(issue::IssueArgs),
}
