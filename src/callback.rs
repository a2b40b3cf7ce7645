//! Completion-callback adapter
//!
//! The client API is async. Callers that prefer a completion callback can
//! hand any client future to [`spawn_with_callback`] or [`settle`]. The
//! callback is `FnOnce`, so it runs exactly once, on success or on failure.

use crate::error::Result;
use std::future::Future;
use tokio::task::JoinHandle;

/// Await a future and pass its result to a callback
pub async fn settle<T, Fut, F>(future: Fut, callback: F)
where
    Fut: Future<Output = Result<T>>,
    F: FnOnce(Result<T>),
{
    callback(future.await);
}

/// Run a future on the current tokio runtime and report its result to a callback.
///
/// The returned handle completes once the callback has returned.
pub fn spawn_with_callback<T, Fut, F>(future: Fut, callback: F) -> JoinHandle<()>
where
    T: Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
    F: FnOnce(Result<T>) + Send + 'static,
{
    tokio::spawn(settle(future, callback))
}
