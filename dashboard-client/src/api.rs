//! Typed analytics API

use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{
    BasketSizeBucket, HeatmapCell, NamedValue, OrderStats, Record, TicketSize,
};
use shared::{Period, SplitBy};

use crate::config::DEFAULT_ANALYTICS_PREFIX;
use crate::{ClientConfig, ClientError, ClientResult, DataClient, Endpoint, Fetcher, QueryKey};

/// Anything that can answer an analytics query with JSON
///
/// Widgets depend on this trait rather than on the network client.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn fetch_json(&self, key: &QueryKey) -> ClientResult<Value>;
}

/// Build a hook fetcher decoding `source` answers into `T`
pub fn fetcher<T>(source: Arc<dyn AnalyticsSource>) -> Fetcher<T>
where
    T: DeserializeOwned + Send + 'static,
{
    Arc::new(move |key: QueryKey| {
        let source = Arc::clone(&source);
        async move {
            let value = source.fetch_json(&key).await?;
            serde_json::from_value(value).map_err(|e| {
                tracing::warn!(key = %key, error = %e, "Response does not match endpoint contract");
                ClientError::Decode(e)
            })
        }
        .boxed()
    })
}

/// Analytics endpoints over the network
#[derive(Debug, Clone)]
pub struct AnalyticsApi {
    client: DataClient,
    prefix: String,
}

impl AnalyticsApi {
    pub fn new(client: DataClient) -> Self {
        Self::with_prefix(client, DEFAULT_ANALYTICS_PREFIX)
    }

    pub fn with_prefix(client: DataClient, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_prefix(
            config.build_data_client()?,
            config.analytics_prefix.clone(),
        ))
    }

    /// Full request path of an endpoint
    pub fn path(&self, endpoint: Endpoint) -> String {
        if self.prefix.is_empty() {
            endpoint.path().to_string()
        } else {
            format!("{}/{}", self.prefix, endpoint.path())
        }
    }

    /// Fetch and decode any key
    pub async fn fetch<T: DeserializeOwned>(&self, key: &QueryKey) -> ClientResult<T> {
        self.client.get(&self.path(key.endpoint()), key.params()).await
    }

    // ========== Orders ==========

    pub async fn order_stats(&self) -> ClientResult<OrderStats> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::OrderStats)).await
    }

    pub async fn order_trend(&self, period: Period, split: SplitBy) -> ClientResult<Vec<Record>> {
        let key = QueryKey::for_endpoint(Endpoint::OrderTrend)
            .period(period)
            .split_by(split);
        self.fetch(&key).await
    }

    pub async fn basket_size(&self, period: Period) -> ClientResult<Vec<BasketSizeBucket>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::BasketSize).period(period))
            .await
    }

    pub async fn ticket_size(&self, period: Period) -> ClientResult<TicketSize> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::TicketSize).period(period))
            .await
    }

    pub async fn top_branches_volume(&self, period: Period) -> ClientResult<Vec<NamedValue>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::TopBranchesVolume).period(period))
            .await
    }

    // ========== Payments ==========

    pub async fn payment_method_share(&self, period: Period) -> ClientResult<Vec<NamedValue>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::PaymentMethodShare).period(period))
            .await
    }

    pub async fn atv_by_method(&self, period: Period) -> ClientResult<Vec<NamedValue>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::AtvByMethod).period(period))
            .await
    }

    pub async fn wallet_share_by_tier(&self, period: Period) -> ClientResult<Vec<Record>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::WalletShareByTier).period(period))
            .await
    }

    pub async fn cash_inflow_heatmap(&self, period: Period) -> ClientResult<Vec<HeatmapCell>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::CashInflowHeatmap).period(period))
            .await
    }

    // ========== Employees ==========

    pub async fn employees_by_role(&self) -> ClientResult<Vec<NamedValue>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::EmployeesByRole))
            .await
    }

    pub async fn employees_by_branch(&self) -> ClientResult<Vec<NamedValue>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::EmployeesByBranch))
            .await
    }

    // ========== Inventory ==========

    pub async fn inventory_activity(&self) -> ClientResult<Vec<Record>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::InventoryActivity))
            .await
    }

    pub async fn inventory_flow(&self) -> ClientResult<Vec<Record>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::InventoryFlow))
            .await
    }

    pub async fn inventory_levels(&self) -> ClientResult<Vec<Record>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::InventoryLevels))
            .await
    }

    pub async fn waste_trend(&self) -> ClientResult<Vec<Record>> {
        self.fetch(&QueryKey::for_endpoint(Endpoint::WasteTrend))
            .await
    }
}

#[async_trait]
impl AnalyticsSource for AnalyticsApi {
    async fn fetch_json(&self, key: &QueryKey) -> ClientResult<Value> {
        self.fetch(key).await
    }
}
