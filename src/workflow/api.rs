//! Access to GitHub REST API.

use reqwest::{RequestBuilder, header};

use crate::env::{GITHUB_API_URL, GITHUB_TOKEN};

/// A handle to GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubApi {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl GithubApi {
    /// Creates a handle to the API at `base_url`, authenticating with `token` if given.
    pub fn new<S>(base_url: S, token: Option<String>) -> Self
    where
        S: Into<String>,
    {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a handle from the [`GITHUB_API_URL`] and [`GITHUB_TOKEN`] environment variables.
    pub fn from_env() -> Self {
        Self::new(GITHUB_API_URL.as_str(), GITHUB_TOKEN.clone())
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a `GET` request for `path`, which starts with a `/`.
    pub fn get(&self, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .get(format!("{}{path}", self.base_url))
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(header::USER_AGENT, concat!("previous-run/", env!("CARGO_PKG_VERSION")));

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
