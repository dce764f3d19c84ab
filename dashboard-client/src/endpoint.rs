//! Analytics endpoint catalogue

use std::fmt;

/// Query parameter carrying the [`shared::Period`] filter
pub const PARAM_PERIOD: &str = "period";

/// Query parameter carrying the [`shared::SplitBy`] filter
pub const PARAM_SPLIT_BY: &str = "split_by";

/// Every analytics endpoint the dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    // Orders
    OrderStats,
    OrderTrend,
    BasketSize,
    TicketSize,
    TopBranchesVolume,
    // Payments
    PaymentMethodShare,
    AtvByMethod,
    WalletShareByTier,
    CashInflowHeatmap,
    // Employees
    EmployeesByRole,
    EmployeesByBranch,
    // Inventory
    InventoryActivity,
    InventoryFlow,
    InventoryLevels,
    WasteTrend,
}

impl Endpoint {
    pub const ALL: [Endpoint; 15] = [
        Endpoint::OrderStats,
        Endpoint::OrderTrend,
        Endpoint::BasketSize,
        Endpoint::TicketSize,
        Endpoint::TopBranchesVolume,
        Endpoint::PaymentMethodShare,
        Endpoint::AtvByMethod,
        Endpoint::WalletShareByTier,
        Endpoint::CashInflowHeatmap,
        Endpoint::EmployeesByRole,
        Endpoint::EmployeesByBranch,
        Endpoint::InventoryActivity,
        Endpoint::InventoryFlow,
        Endpoint::InventoryLevels,
        Endpoint::WasteTrend,
    ];

    /// Path segment below the analytics prefix
    pub const fn path(&self) -> &'static str {
        match self {
            Endpoint::OrderStats => "order-stats",
            Endpoint::OrderTrend => "order-trend",
            Endpoint::BasketSize => "basket-size",
            Endpoint::TicketSize => "ticket-size",
            Endpoint::TopBranchesVolume => "top-branches-volume",
            Endpoint::PaymentMethodShare => "payment-method-share",
            Endpoint::AtvByMethod => "atv-by-method",
            Endpoint::WalletShareByTier => "wallet-share-by-tier",
            Endpoint::CashInflowHeatmap => "cash-inflow-heatmap",
            Endpoint::EmployeesByRole => "employees-by-role",
            Endpoint::EmployeesByBranch => "employees-by-branch",
            Endpoint::InventoryActivity => "inventory-activity",
            Endpoint::InventoryFlow => "inventory-flow",
            Endpoint::InventoryLevels => "inventory-levels",
            Endpoint::WasteTrend => "waste-trend",
        }
    }

    /// Whether the endpoint is filtered by period
    pub const fn takes_period(&self) -> bool {
        matches!(
            self,
            Endpoint::OrderTrend
                | Endpoint::BasketSize
                | Endpoint::TicketSize
                | Endpoint::TopBranchesVolume
                | Endpoint::PaymentMethodShare
                | Endpoint::AtvByMethod
                | Endpoint::WalletShareByTier
                | Endpoint::CashInflowHeatmap
        )
    }

    /// Whether the endpoint accepts a split dimension
    pub const fn takes_split(&self) -> bool {
        matches!(self, Endpoint::OrderTrend)
    }

    /// Whether `param` is part of this endpoint's contract
    pub fn accepts(&self, param: &str) -> bool {
        match param {
            PARAM_PERIOD => self.takes_period(),
            PARAM_SPLIT_BY => self.takes_split(),
            _ => false,
        }
    }

    pub fn from_path(path: &str) -> Option<Endpoint> {
        Endpoint::ALL.into_iter().find(|e| e.path() == path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        for e in Endpoint::ALL {
            assert_eq!(Endpoint::from_path(e.path()), Some(e));
        }
    }

    #[test]
    fn test_param_contract() {
        assert!(Endpoint::OrderTrend.accepts(PARAM_PERIOD));
        assert!(Endpoint::OrderTrend.accepts(PARAM_SPLIT_BY));
        assert!(Endpoint::WalletShareByTier.accepts(PARAM_PERIOD));
        assert!(!Endpoint::WalletShareByTier.accepts(PARAM_SPLIT_BY));
        assert!(!Endpoint::OrderStats.accepts(PARAM_PERIOD));
        assert!(!Endpoint::EmployeesByRole.accepts(PARAM_PERIOD));
        assert!(!Endpoint::OrderTrend.accepts("branch"));
    }
}
