use std::error::Error as _;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::{
    framework::{StateError, StateResult},
    workflow::api::GithubApi,
};

/// Requests `path` with the `query` pairs from GitHub and parses the JSON body, describing the data
/// as `what` in logs.
///
/// # Errors
///
/// Returns [`StateError::Retry`] on connection failures, timeouts, rate limits, server errors and
/// unparsable bodies, and [`StateError::Cancelled`] on any other failure.
pub async fn get_json<T>(
    api: &GithubApi,
    path: &str,
    query: &[(&str, &str)],
    what: &str,
) -> StateResult<T>
where
    T: DeserializeOwned,
{
    let url = format!("{}{path}", api.base_url());
    debug!("fetching {what} from {url} with {query:?}…");

    let response = match api.get(path).query(query).send().await {
        Ok(response) => response,
        Err(err) => {
            error!("failed to fetch {what} from {url}: {err}");
            return match err {
                _ if err.is_connect() || err.is_timeout() => Err(StateError::Retry),
                _ => Err(StateError::Cancelled),
            };
        }
    };

    match response.status() {
        status if status.is_success() => {}
        status => {
            match status.canonical_reason() {
                Some(reason) => error!(
                    "failed to fetch {what} from {url}: {} {reason}",
                    status.as_u16()
                ),
                None => error!("failed to fetch {what} from {url}: {}", status.as_u16()),
            }
            return if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                Err(StateError::Retry)
            } else {
                Err(StateError::Cancelled)
            };
        }
    }

    match response.json::<T>().await {
        Ok(json) => Ok(json),
        Err(err) => {
            error!("failed to parse {what} from {url}: {err}");

            if let Some(source) = err.source() {
                error!("{source}");
            }

            Err(StateError::Retry)
        }
    }
}
