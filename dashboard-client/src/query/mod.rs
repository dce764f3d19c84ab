//! Per-widget query state
//!
//! A [`QueryKey`] identifies one fetch lifecycle; a [`QueryHook`] owns the
//! [`QueryState`] of one mounted widget and re-fetches when its key changes.

mod hook;
mod key;
mod state;

pub use hook::{Fetcher, QueryHook, QueryReceiver};
pub use key::QueryKey;
pub use state::{QueryError, QueryState};
