//! Three-state view data
//!
//! Every page shows its content through [`Loadable`]: still loading,
//! loaded, or failed with a fixed message. [`load_within`] runs a fetch in
//! its own task and waits for it up to a render deadline.

use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// View state of a piece of remote content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Loadable<T> {
    Loading,
    Success(T),
    Failure(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Loading => Loadable::Loading,
            Self::Success(data) => Loadable::Success(f(data)),
            Self::Failure(message) => Loadable::Failure(message),
        }
    }

    /// Turn a successful value into a failure, e.g. a detail page whose
    /// document does not exist
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, String>) -> Loadable<U> {
        match self {
            Self::Loading => Loadable::Loading,
            Self::Success(data) => match f(data) {
                Ok(value) => Loadable::Success(value),
                Err(message) => Loadable::Failure(message),
            },
            Self::Failure(message) => Loadable::Failure(message),
        }
    }
}

/// Aborts the task when dropped, unless detached first
pub struct AbortOnDrop<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T> AbortOnDrop<T> {
    pub fn new(handle: JoinHandle<T>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Let the task run to completion on its own
    pub fn detach(mut self) {
        self.handle.take();
    }

    fn handle_mut(&mut self) -> Option<&mut JoinHandle<T>> {
        self.handle.as_mut()
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Run `fetch` and wait for it at most `deadline`
///
/// - settles in time with `Ok` → `Success`, with `Err` → `Failure(failure_message)`
/// - still running at the deadline → `Loading`; the fetch keeps running so
///   its result lands in the content cache for the next request
/// - the caller is dropped while waiting → the fetch is aborted
pub async fn load_within<T, E, F>(deadline: Duration, failure_message: &str, fetch: F) -> Loadable<T>
where
    T: Send + 'static,
    E: std::fmt::Display + Send + 'static,
    F: Future<Output = Result<T, E>> + Send + 'static,
{
    let mut guard = AbortOnDrop::new(tokio::spawn(fetch));

    let Some(handle) = guard.handle_mut() else {
        return Loadable::Failure(failure_message.to_string());
    };

    match tokio::time::timeout(deadline, handle).await {
        Ok(Ok(Ok(data))) => Loadable::Success(data),
        Ok(Ok(Err(e))) => {
            tracing::warn!(error = %e, "{failure_message}");
            Loadable::Failure(failure_message.to_string())
        }
        Ok(Err(join_error)) => {
            tracing::error!(error = %join_error, "content task did not complete");
            Loadable::Failure(failure_message.to_string())
        }
        Err(_elapsed) => {
            tracing::debug!(?deadline, "render deadline passed, serving loading state");
            guard.detach();
            Loadable::Loading
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    const FAIL: &str = "Falha ao carregar.";

    #[tokio::test]
    async fn test_success_within_deadline() {
        let state = load_within(Duration::from_secs(1), FAIL, async { Ok::<_, String>(vec![1, 2]) }).await;
        assert_eq!(state, Loadable::Success(vec![1, 2]));
    }

    #[tokio::test]
    async fn test_failure_uses_static_message() {
        let state: Loadable<u8> =
            load_within(Duration::from_secs(1), FAIL, async { Err("connection reset".to_string()) }).await;
        assert_eq!(state, Loadable::Failure(FAIL.to_string()));
    }

    #[tokio::test]
    async fn test_deadline_yields_loading_and_fetch_completes() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let state: Loadable<()> = load_within(Duration::from_millis(10), FAIL, async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
            Ok::<_, String>(())
        })
        .await;

        assert!(state.is_loading());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_dropping_the_waiter_aborts_the_fetch() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let waiter = tokio::spawn(load_within(Duration::from_secs(5), FAIL, async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
            Ok::<_, String>(())
        }));

        tokio::time::sleep(Duration::from_millis(10)).await;
        waiter.abort();
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(!finished.load(Ordering::SeqCst));
    }

    #[test]
    fn test_and_then_turns_missing_into_failure() {
        let missing: Loadable<Option<u8>> = Loadable::Success(None);
        let state = missing.and_then(|v| v.ok_or_else(|| "Artigo não encontrado".to_string()));
        assert_eq!(state, Loadable::Failure("Artigo não encontrado".to_string()));
    }

    #[test]
    fn test_serializes_for_templates() {
        let value = serde_json::to_value(Loadable::Success(3)).unwrap();
        assert_eq!(value, serde_json::json!({"state": "success", "data": 3}));
        let value = serde_json::to_value(Loadable::<u8>::Loading).unwrap();
        assert_eq!(value, serde_json::json!({"state": "loading"}));
    }
}
