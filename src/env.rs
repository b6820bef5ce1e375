//! Defines the environment variables to use.
//!
//! GitHub Actions exports most of these on every runner, so the defaults only matter when running
//! outside of a workflow.

#![cfg(feature = "env")]

use crate::static_lazy_lock;

use std::env;

/// Parses an environment variable from [`String`] to something else, wrapping any error in [`anyhow::Error`].
#[macro_export]
macro_rules! parse_env {
    ($key:expr => |$var:ident| $expr:expr) => {
        std::env::var($key)
            .map_err(|e| anyhow::anyhow!(e))
            .and_then(|$var| $expr)
    };
    ($key:expr => |$var:ident| $expr:expr; anyhow) => {
        $crate::parse_env!($key => |$var| $expr.map_err(|e| anyhow::anyhow!(e)))
    };
}

pub use parse_env;

/// Reads the first of `keys` that is set to a non-empty value.
pub fn first_var(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
}

static_lazy_lock! {
    /// The base URL of the GitHub REST API.
    pub GITHUB_API_URL: String =
        first_var(&["GITHUB_API_URL"]).unwrap_or_else(|| String::from("https://api.github.com"));
}

static_lazy_lock! {
    /// The base URL of the GitHub web interface, used to build comparison links.
    pub GITHUB_SERVER_URL: String =
        first_var(&["GITHUB_SERVER_URL"]).unwrap_or_else(|| String::from("https://github.com"));
}

#[cfg(feature = "env_github_token")]
static_lazy_lock! {
    /// The GitHub token, if any. Public repositories can be queried without one.
    pub GITHUB_TOKEN: Option<String> = first_var(&["TOKEN", "INPUT_GITHUB_TOKEN", "GITHUB_TOKEN"]);
}

#[cfg(feature = "env_max_retries")]
static_lazy_lock! {
    /// The maximum retry limit for transactions.
    pub MAX_RETRIES: u8 = parse_env!("MAX_RETRIES" => |s| s.parse::<u8>(); anyhow).unwrap_or(5);
}

#[cfg(feature = "env_max_retries")]
static_lazy_lock! {
    /// The base delay between two attempts of a transaction, in milliseconds.
    pub RETRY_DELAY_MS: u64 = parse_env!("RETRY_DELAY_MS" => |s| s.parse::<u64>(); anyhow).unwrap_or(500);
}
