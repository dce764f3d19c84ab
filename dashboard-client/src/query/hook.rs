//! Query hook: one fetch lifecycle per mounted widget
//!
//! Every request is tagged with a sequence number. State writes go through
//! the watch channel under a compare-on-sequence check, so a response whose
//! request has been superseded never reaches the state, even if it resolves
//! after the newer request started.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::{QueryError, QueryKey, QueryState};
use crate::ClientResult;

/// Async function producing the data for a key
pub type Fetcher<T> = Arc<dyn Fn(QueryKey) -> BoxFuture<'static, ClientResult<T>> + Send + Sync>;

#[derive(Debug)]
struct Slot<T> {
    seq: u64,
    key: QueryKey,
    state: QueryState<T>,
}

/// Query state owned by one widget instance
///
/// Dropping the hook (unmounting the widget) cancels the in-flight request.
/// Requests run as tasks on the ambient Tokio runtime; only [`QueryHook::new`]
/// and the read side may be used outside one.
pub struct QueryHook<T> {
    key: QueryKey,
    fetcher: Fetcher<T>,
    tx: Arc<watch::Sender<Slot<T>>>,
    inflight: Option<CancellationToken>,
}

impl<T> QueryHook<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an idle hook; nothing is fetched until [`QueryHook::refetch`]
    pub fn new(key: QueryKey, fetcher: Fetcher<T>) -> Self {
        let (tx, _rx) = watch::channel(Slot {
            seq: 0,
            key: key.clone(),
            state: QueryState::Idle,
        });
        Self {
            key,
            fetcher,
            tx: Arc::new(tx),
            inflight: None,
        }
    }

    /// Create the hook and start fetching immediately (Idle -> Loading)
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn mount(key: QueryKey, fetcher: Fetcher<T>) -> Self {
        let mut hook = Self::new(key, fetcher);
        hook.start();
        hook
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Switch to a new key
    ///
    /// Returns `false` without fetching when the key is unchanged and a
    /// request has already been issued for it.
    ///
    /// # Panics
    ///
    /// Panics if a request is issued outside a Tokio runtime.
    pub fn set_key(&mut self, key: QueryKey) -> bool {
        if key == self.key && !self.tx.borrow().state.is_idle() {
            return false;
        }
        self.key = key;
        self.start();
        true
    }

    /// Re-issue the current key, superseding any in-flight request
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn refetch(&mut self) {
        self.start();
    }

    /// Snapshot of the current state
    pub fn state(&self) -> QueryState<T> {
        self.tx.borrow().state.clone()
    }

    /// Sequence number of the latest issued request (0 before the first)
    pub fn sequence(&self) -> u64 {
        self.tx.borrow().seq
    }

    pub fn subscribe(&self) -> QueryReceiver<T> {
        QueryReceiver {
            rx: self.tx.subscribe(),
        }
    }

    /// Wait until the state is no longer Loading
    pub async fn settled(&self) -> QueryState<T> {
        self.subscribe().settled().await
    }

    fn start(&mut self) {
        if let Some(previous) = self.inflight.take() {
            previous.cancel();
        }

        let key = self.key.clone();
        let mut seq = 0;
        self.tx.send_modify(|slot| {
            slot.seq += 1;
            slot.key = key.clone();
            slot.state = QueryState::Loading;
            seq = slot.seq;
        });

        let token = CancellationToken::new();
        self.inflight = Some(token.clone());

        let request = (self.fetcher)(key.clone());
        let tx = Arc::clone(&self.tx);
        tracing::debug!(key = %key, seq, "Query started");

        tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(key = %key, seq, "Query cancelled");
                    return;
                }
                result = request => result,
            };

            let applied = tx.send_if_modified(|slot| {
                if slot.seq != seq {
                    return false;
                }
                slot.state = match result {
                    Ok(data) => QueryState::Success(data),
                    Err(e) => {
                        tracing::warn!(key = %key, error = %e, "Query failed");
                        QueryState::Error(QueryError::from(&e))
                    }
                };
                true
            });

            if !applied {
                tracing::debug!(key = %key, seq, "Discarding stale response");
            }
        });
    }
}

impl<T> Drop for QueryHook<T> {
    fn drop(&mut self) {
        if let Some(token) = self.inflight.take() {
            token.cancel();
        }
    }
}

/// Read side of a hook's state
pub struct QueryReceiver<T> {
    rx: watch::Receiver<Slot<T>>,
}

impl<T: Clone> QueryReceiver<T> {
    pub fn state(&self) -> QueryState<T> {
        self.rx.borrow().state.clone()
    }

    pub fn key(&self) -> QueryKey {
        self.rx.borrow().key.clone()
    }

    /// Wait for the next state change; `false` once the hook is gone
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Wait until the state is no longer Loading
    pub async fn settled(&mut self) -> QueryState<T> {
        let result = self
            .rx
            .wait_for(|slot| !slot.state.is_loading())
            .await
            .map(|slot| slot.state.clone());
        match result {
            Ok(state) => state,
            Err(_) => self.rx.borrow().state.clone(),
        }
    }
}
