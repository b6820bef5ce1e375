use std::{fmt::Display, time::Duration};

use tracing::{error, info, warn};

use crate::env::{MAX_RETRIES, RETRY_DELAY_MS};

/// An error that controls the flow of a transaction.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The control flow should retry if possible.
    ///
    /// See: [`retrying`]
    Retry,
    /// The control flow should exit immediately.
    Cancelled,
}

/// The result of a transaction.
pub type StateResult<T> = Result<T, StateError>;

/// Decides whether retrying is allowed after `retry` attempts, counting this one.
fn retry_within(retry: &mut u8, max_retries: u8) -> Result<(), ()> {
    *retry = retry.saturating_add(1);
    if *retry > max_retries {
        error!("retried for too many times ({max_retries}), stopping!");
        Err(())
    } else {
        warn!("retrying… ({retry} / {max_retries})");
        Ok(())
    }
}

/// Loops a transaction until it returns a value, is cancelled, or the max retry times is reached.
///
/// Attempts are spaced by [`RETRY_DELAY_MS`] multiplied by the number of retries so far.
///
/// # Errors
///
/// Returns [`StateError::Cancelled`] if the transaction is cancelled or runs out of retries.
pub async fn retrying<N, F, Fut, T>(name: N, f: F) -> StateResult<T>
where
    N: Display,
    F: Fn() -> Fut,
    Fut: Future<Output = StateResult<T>>,
{
    retrying_with(name, *MAX_RETRIES, Duration::from_millis(*RETRY_DELAY_MS), f).await
}

async fn retrying_with<N, F, Fut, T>(
    name: N,
    max_retries: u8,
    delay: Duration,
    f: F,
) -> StateResult<T>
where
    N: Display,
    F: Fn() -> Fut,
    Fut: Future<Output = StateResult<T>>,
{
    info!("starting transaction {name}…");
    let mut retry: u8 = 0;

    loop {
        match f().await {
            Ok(value) => {
                info!("transaction {name} succeed!");
                return Ok(value);
            }
            Err(StateError::Retry) => match retry_within(&mut retry, max_retries) {
                Ok(()) => tokio::time::sleep(backoff(delay, retry)).await,
                Err(()) => {
                    error!("transaction {name} failed!");
                    return Err(StateError::Cancelled);
                }
            },
            Err(StateError::Cancelled) => {
                error!("transaction {name} failed!");
                return Err(StateError::Cancelled);
            }
        }
    }
}

/// The wait before the `retry`-th retry, growing linearly and saturating at [`Duration::MAX`].
fn backoff(delay: Duration, retry: u8) -> Duration {
    delay.saturating_mul(u32::from(retry))
}
