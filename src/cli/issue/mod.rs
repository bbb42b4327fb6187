//! Issue command - signs claims with the configured key

use anyhow::{bail, Context};
use clap::Args;
use serde_json::Value;

use crate::config::AppConfig;
use crate::domain::JsonObject;
use crate::infrastructure::auth::TokenAuthority;

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Claims as a JSON object
    #[arg(long, default_value = r#"{"user":"validator","role":"validator"}"#)]
    pub claims: String,
}

/// Print a token for the given claims
///
/// Requires `auth.private_key_hex`; a token signed by a throwaway key
/// could never be verified by the server.
pub fn run(args: IssueArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    let token = issue_with_config(&config, &args.claims)?;

    println!("{}", token);

    Ok(())
}

fn issue_with_config(config: &AppConfig, claims: &str) -> anyhow::Result<String> {
    let has_key = config
        .auth
        .private_key_hex
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());
    if !has_key {
        bail!("no signing key configured; set APP__AUTH__PRIVATE_KEY_HEX (see `keygen`)");
    }

    let claims = serde_json::from_str::<Value>(claims).context("claims are not valid JSON")?;
    let claims: JsonObject = match claims {
        Value::Object(claims) => claims,
        _ => bail!("claims must be a JSON object"),
    };

    let authority = TokenAuthority::from_config(&config.auth)?;

    Ok(authority.issue(&claims)?)
}
