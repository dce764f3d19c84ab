//! Dashboard Client - data access for the POS admin dashboard
//!
//! Provides the remote data client for the analytics service, the CRUD
//! persistence client, and the per-widget query state machinery.

pub mod api;
pub mod config;
pub mod crud;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod query;

pub use api::{AnalyticsApi, AnalyticsSource, fetcher};
pub use config::ClientConfig;
pub use crud::{CrudClient, Persist, Persistable, Resource};
pub use endpoint::Endpoint;
pub use error::{ClientError, ClientResult};
pub use crate::http::{DataClient, HttpClient, NetworkHttpClient, Params};
pub use query::{Fetcher, QueryError, QueryHook, QueryKey, QueryReceiver, QueryState};

// Re-export shared types for convenience
pub use shared::{Period, SplitBy};
