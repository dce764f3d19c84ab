//! Dashboard pages
//!
//! A page owns its widgets and one page-level period, pushed down to every
//! widget whose endpoint is period-filtered.

use std::sync::Arc;

use dashboard_client::{AnalyticsSource, Endpoint};
use futures::future::join_all;
use shared::models::{
    BasketSizeBucket, HeatmapCell, NamedValue, OrderStats, Record, TicketSize,
};
use shared::{Period, SplitBy};

use crate::chart::{Visual, render};
use crate::widget::{ChartWidget, Filters, Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Orders,
    Payments,
    Employees,
    Inventory,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Orders,
        PageKind::Payments,
        PageKind::Employees,
        PageKind::Inventory,
    ];

    pub const fn title(&self) -> &'static str {
        match self {
            PageKind::Orders => "Orders",
            PageKind::Payments => "Payments",
            PageKind::Employees => "Employees",
            PageKind::Inventory => "Inventory",
        }
    }

    /// Widgets of the page, in layout order
    pub const fn endpoints(&self) -> &'static [Endpoint] {
        match self {
            PageKind::Orders => &[
                Endpoint::OrderStats,
                Endpoint::OrderTrend,
                Endpoint::BasketSize,
                Endpoint::TicketSize,
                Endpoint::TopBranchesVolume,
            ],
            PageKind::Payments => &[
                Endpoint::PaymentMethodShare,
                Endpoint::AtvByMethod,
                Endpoint::WalletShareByTier,
                Endpoint::CashInflowHeatmap,
            ],
            PageKind::Employees => &[Endpoint::EmployeesByRole, Endpoint::EmployeesByBranch],
            PageKind::Inventory => &[
                Endpoint::InventoryActivity,
                Endpoint::InventoryFlow,
                Endpoint::InventoryLevels,
                Endpoint::WasteTrend,
            ],
        }
    }
}

/// Mount the widget bound to `endpoint`
///
/// # Panics
///
/// Panics if called outside a Tokio runtime.
pub fn mount_widget(
    endpoint: Endpoint,
    source: Arc<dyn AnalyticsSource>,
    filters: Filters,
) -> Box<dyn Widget> {
    match endpoint {
        Endpoint::OrderStats => Box::new(ChartWidget::<OrderStats>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::order_stats(d),
        )),
        Endpoint::OrderTrend => Box::new(ChartWidget::<Vec<Record>>::mount(
            endpoint,
            source,
            filters,
            |d, f| render::order_trend(d, f.split_by),
        )),
        Endpoint::BasketSize => Box::new(ChartWidget::<Vec<BasketSizeBucket>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::basket_size(d),
        )),
        Endpoint::TicketSize => Box::new(ChartWidget::<TicketSize>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::ticket_size(d),
        )),
        Endpoint::TopBranchesVolume => Box::new(ChartWidget::<Vec<NamedValue>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::top_branches_volume(d),
        )),
        Endpoint::PaymentMethodShare => Box::new(ChartWidget::<Vec<NamedValue>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::payment_method_share(d),
        )),
        Endpoint::AtvByMethod => Box::new(ChartWidget::<Vec<NamedValue>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::atv_by_method(d),
        )),
        Endpoint::WalletShareByTier => Box::new(ChartWidget::<Vec<Record>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::wallet_share_by_tier(d),
        )),
        Endpoint::CashInflowHeatmap => Box::new(ChartWidget::<Vec<HeatmapCell>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::cash_inflow_heatmap(d),
        )),
        Endpoint::EmployeesByRole => Box::new(ChartWidget::<Vec<NamedValue>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::employees_by_role(d),
        )),
        Endpoint::EmployeesByBranch => Box::new(ChartWidget::<Vec<NamedValue>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::employees_by_branch(d),
        )),
        Endpoint::InventoryActivity => Box::new(ChartWidget::<Vec<Record>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::inventory_activity(d),
        )),
        Endpoint::InventoryFlow => Box::new(ChartWidget::<Vec<Record>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::inventory_flow(d),
        )),
        Endpoint::InventoryLevels => Box::new(ChartWidget::<Vec<Record>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::inventory_levels(d),
        )),
        Endpoint::WasteTrend => Box::new(ChartWidget::<Vec<Record>>::mount(
            endpoint,
            source,
            filters,
            |d, _| render::waste_trend(d),
        )),
    }
}

pub struct Page {
    kind: PageKind,
    period: Period,
    widgets: Vec<Box<dyn Widget>>,
}

impl Page {
    /// Mount every widget of the page with the page period
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn mount(kind: PageKind, source: Arc<dyn AnalyticsSource>, period: Period) -> Self {
        let filters = Filters::with_period(period);
        let widgets = kind
            .endpoints()
            .iter()
            .map(|&e| mount_widget(e, Arc::clone(&source), filters))
            .collect();
        tracing::debug!(page = kind.title(), %period, "Page mounted");
        Self {
            kind,
            period,
            widgets,
        }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Push a new period to every widget; returns how many refetched
    pub fn set_period(&mut self, period: Period) -> usize {
        self.period = period;
        let refetched = self
            .widgets
            .iter_mut()
            .map(|w| w.set_period(period))
            .filter(|issued| *issued)
            .count();
        tracing::debug!(page = self.kind.title(), %period, refetched, "Page period changed");
        refetched
    }

    /// Override the period of a single widget
    pub fn set_widget_period(&mut self, endpoint: Endpoint, period: Period) -> bool {
        self.widgets
            .iter_mut()
            .find(|w| w.endpoint() == endpoint)
            .is_some_and(|w| w.set_period(period))
    }

    pub fn set_widget_split(&mut self, endpoint: Endpoint, split: SplitBy) -> bool {
        self.widgets
            .iter_mut()
            .find(|w| w.endpoint() == endpoint)
            .is_some_and(|w| w.set_split_by(split))
    }

    pub fn widget(&self, endpoint: Endpoint) -> Option<&dyn Widget> {
        self.widgets
            .iter()
            .find(|w| w.endpoint() == endpoint)
            .map(|w| w.as_ref())
    }

    pub fn refresh(&mut self) {
        for widget in &mut self.widgets {
            widget.refresh();
        }
    }

    /// Current visual of every widget, in layout order
    pub fn visuals(&self) -> Vec<(Endpoint, Visual)> {
        self.widgets
            .iter()
            .map(|w| (w.endpoint(), w.visual()))
            .collect()
    }

    /// Visuals once every widget has settled
    pub async fn settled(&self) -> Vec<(Endpoint, Visual)> {
        let visuals = join_all(self.widgets.iter().map(|w| w.settled())).await;
        self.widgets
            .iter()
            .map(|w| w.endpoint())
            .zip(visuals)
            .collect()
    }
}
