//! Analytics widgets
//!
//! A widget binds one [`QueryHook`] to one pure render function and owns
//! its own filters. Fetch failures are logged and degrade to the neutral
//! empty state.

use std::sync::Arc;

use dashboard_client::{AnalyticsSource, Endpoint, QueryHook, QueryKey, QueryState, fetcher};
use futures::FutureExt;
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use shared::{Period, SplitBy};

use crate::chart::Visual;

/// User-selected filters of one widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    pub period: Period,
    pub split_by: SplitBy,
}

impl Filters {
    pub fn with_period(period: Period) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Query Key for `endpoint`, carrying only the filters it accepts
    pub fn key_for(&self, endpoint: Endpoint) -> QueryKey {
        let mut key = QueryKey::for_endpoint(endpoint);
        if endpoint.takes_period() {
            key = key.period(self.period);
        }
        if endpoint.takes_split() {
            key = key.split_by(self.split_by);
        }
        key
    }
}

/// Render function of a widget
pub type RenderFn<T> = fn(&T, &Filters) -> Visual;

/// Type-erased widget as composed by pages
pub trait Widget: Send + Sync {
    fn endpoint(&self) -> Endpoint;

    fn filters(&self) -> Filters;

    /// Returns `true` if a new request was issued
    fn set_period(&mut self, period: Period) -> bool;

    /// Returns `true` if a new request was issued
    fn set_split_by(&mut self, split: SplitBy) -> bool;

    fn refresh(&mut self);

    fn visual(&self) -> Visual;

    /// Visual once the current request has settled
    fn settled(&self) -> BoxFuture<'_, Visual>;
}

pub struct ChartWidget<T> {
    endpoint: Endpoint,
    filters: Filters,
    hook: QueryHook<T>,
    render: RenderFn<T>,
}

impl<T> ChartWidget<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Mount the widget and start its first fetch
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn mount(
        endpoint: Endpoint,
        source: Arc<dyn AnalyticsSource>,
        filters: Filters,
        render: RenderFn<T>,
    ) -> Self {
        let hook = QueryHook::mount(filters.key_for(endpoint), fetcher::<T>(source));
        Self {
            endpoint,
            filters,
            hook,
            render,
        }
    }

    pub fn state(&self) -> QueryState<T> {
        self.hook.state()
    }

    pub fn key(&self) -> &QueryKey {
        self.hook.key()
    }

    pub fn set_filters(&mut self, filters: Filters) -> bool {
        self.filters = filters;
        self.hook.set_key(filters.key_for(self.endpoint))
    }

    fn present(&self, state: QueryState<T>) -> Visual {
        match state {
            QueryState::Idle | QueryState::Loading => Visual::Loading,
            QueryState::Success(data) => (self.render)(&data, &self.filters),
            QueryState::Error(e) => {
                // Logged once per failed fetch in the hook; this runs on every redraw
                tracing::debug!(
                    endpoint = %self.endpoint,
                    code = %e.code,
                    error = %e.message,
                    "Widget fetch failed, showing empty state"
                );
                Visual::empty()
            }
        }
    }
}

impl<T> Widget for ChartWidget<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    fn filters(&self) -> Filters {
        self.filters
    }

    fn set_period(&mut self, period: Period) -> bool {
        self.set_filters(Filters {
            period,
            ..self.filters
        })
    }

    fn set_split_by(&mut self, split_by: SplitBy) -> bool {
        self.set_filters(Filters {
            split_by,
            ..self.filters
        })
    }

    fn refresh(&mut self) {
        self.hook.refetch();
    }

    fn visual(&self) -> Visual {
        self.present(self.hook.state())
    }

    fn settled(&self) -> BoxFuture<'_, Visual> {
        async move {
            let state = self.hook.settled().await;
            self.present(state)
        }
        .boxed()
    }
}
