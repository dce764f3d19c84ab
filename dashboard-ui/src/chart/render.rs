//! Per-endpoint renderers

use chrono::Weekday;
use shared::models::{
    BasketSizeBucket, HeatmapCell, NamedValue, OrderStats, Record, RecordExt, TicketSize,
};
use shared::{SplitBy, Tier};

use super::format;
use super::{
    CartesianChart, ChartKind, HeatmapGrid, PieChart, ReferenceLine, Series, SeriesSchema, Slice,
    StatCard, Visual,
};

// ============================================================================
// Schemas
// ============================================================================

pub const ORDER_TREND_TOTAL: SeriesSchema = SeriesSchema::fixed(&["value"]);
pub const ORDER_TREND_SPLIT: SeriesSchema = SeriesSchema::dynamic(&[]);
pub const WALLET_SHARE_BY_TIER: SeriesSchema =
    SeriesSchema::fixed(&["CASH", "QR", "CARD", "POINTS"]);
pub const INVENTORY_ACTIVITY: SeriesSchema = SeriesSchema::dynamic(&[]);
pub const INVENTORY_FLOW: SeriesSchema = SeriesSchema::fixed(&["inflow", "outflow"]);
pub const INVENTORY_LEVELS: SeriesSchema = SeriesSchema::fixed(&["on_hand", "reorder_level"]);
pub const WASTE_TREND: SeriesSchema = SeriesSchema::fixed(&["value"]);

pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: usize = 24;

// ============================================================================
// Building blocks
// ============================================================================

/// Cartesian chart from schema-shaped records
pub fn records(
    title: &str,
    kind: ChartKind,
    schema: &SeriesSchema,
    rows: &[Record],
) -> Visual {
    if rows.is_empty() {
        return Visual::empty();
    }
    let (categories, series) = schema.extract(rows);
    if series.is_empty() {
        return Visual::empty();
    }
    Visual::Cartesian(CartesianChart {
        kind,
        title: title.to_string(),
        categories,
        series,
        reference: None,
    })
}

/// Single-series chart from `{name, value}` rows
pub fn named_values(title: &str, kind: ChartKind, series: &str, rows: &[NamedValue]) -> Visual {
    if rows.is_empty() {
        return Visual::empty();
    }
    Visual::Cartesian(CartesianChart {
        kind,
        title: title.to_string(),
        categories: rows.iter().map(|r| r.name.clone()).collect(),
        series: vec![Series {
            name: series.to_string(),
            values: rows.iter().map(|r| r.value).collect(),
        }],
        reference: None,
    })
}

/// Pie chart from `{name, value}` rows
///
/// Negative values are clamped to zero. A zero total has nothing to
/// apportion and renders empty.
pub fn share(title: &str, rows: &[NamedValue]) -> Visual {
    let total: f64 = rows.iter().map(|r| r.value.max(0.0)).sum();
    if total <= 0.0 {
        return Visual::empty();
    }
    let slices = rows
        .iter()
        .map(|r| {
            let value = r.value.max(0.0);
            let share = value / total * 100.0;
            Slice {
                label: r.name.clone(),
                value,
                share,
                share_label: format::percent(share),
            }
        })
        .collect();
    Visual::Pie(PieChart {
        title: title.to_string(),
        slices,
    })
}

// ============================================================================
// Orders
// ============================================================================

pub fn order_stats(stats: &OrderStats) -> Visual {
    let card = |label: &str, n: u64| StatCard {
        label: label.to_string(),
        value: format::count(n),
    };
    Visual::StatCards(vec![
        card("Total Orders", stats.total_orders),
        card("Paid Orders", stats.paid_orders),
        card("Pending Orders", stats.pending_orders),
        card("Cancelled Orders", stats.cancelled_orders),
    ])
}

pub fn order_trend(rows: &[Record], split: SplitBy) -> Visual {
    let schema = if split.is_split() {
        ORDER_TREND_SPLIT
    } else {
        ORDER_TREND_TOTAL
    };
    records("Order Trend", ChartKind::Line, &schema, rows)
}

pub fn basket_size(buckets: &[BasketSizeBucket]) -> Visual {
    if buckets.is_empty() {
        return Visual::empty();
    }
    Visual::Cartesian(CartesianChart {
        kind: ChartKind::Bar,
        title: "Basket Size".to_string(),
        categories: buckets.iter().map(|b| b.items.clone()).collect(),
        series: vec![Series {
            name: "Orders".to_string(),
            values: buckets.iter().map(|b| b.count as f64).collect(),
        }],
        reference: None,
    })
}

/// Ticket distribution with the average as a reference line
pub fn ticket_size(ticket: &TicketSize) -> Visual {
    if ticket.distribution.is_empty() {
        return Visual::empty();
    }
    Visual::Cartesian(CartesianChart {
        kind: ChartKind::Bar,
        title: "Ticket Size".to_string(),
        categories: ticket.distribution.iter().map(|r| r.range.clone()).collect(),
        series: vec![Series {
            name: "Orders".to_string(),
            values: ticket.distribution.iter().map(|r| r.count as f64).collect(),
        }],
        reference: Some(ReferenceLine {
            label: format!("Average {}", format::money(ticket.average)),
            value: ticket.average,
        }),
    })
}

pub fn top_branches_volume(rows: &[NamedValue]) -> Visual {
    named_values("Top Branches", ChartKind::HorizontalBar, "Orders", rows)
}

// ============================================================================
// Payments
// ============================================================================

pub fn payment_method_share(rows: &[NamedValue]) -> Visual {
    share("Payment Methods", rows)
}

pub fn atv_by_method(rows: &[NamedValue]) -> Visual {
    named_values("Average Ticket by Method", ChartKind::Bar, "ATV", rows)
}

/// Stacked payment mix per loyalty tier, in canonical tier order
pub fn wallet_share_by_tier(rows: &[Record]) -> Visual {
    let mut sorted = rows.to_vec();
    // stable: unknown tiers keep their relative order
    sorted.sort_by_key(|r| {
        let tier = r.label(WALLET_SHARE_BY_TIER.label_keys).unwrap_or_default();
        Tier::rank_of(&tier)
    });
    records(
        "Wallet Share by Tier",
        ChartKind::StackedBar,
        &WALLET_SHARE_BY_TIER,
        &sorted,
    )
}

/// Weekday x hour grid, Monday first
pub fn cash_inflow_heatmap(cells: &[HeatmapCell]) -> Visual {
    if cells.is_empty() {
        return Visual::empty();
    }

    let mut grid = vec![vec![0.0; HOURS_PER_DAY]; DAYS_PER_WEEK];
    let mut max = 0.0_f64;
    for cell in cells {
        let (Ok(day), Ok(hour)) = (
            usize::try_from(cell.day_index),
            usize::try_from(cell.hour_index),
        ) else {
            tracing::warn!(day = cell.day_index, hour = cell.hour_index, "Heatmap cell out of range");
            continue;
        };
        if day >= DAYS_PER_WEEK || hour >= HOURS_PER_DAY {
            tracing::warn!(day, hour, "Heatmap cell out of range");
            continue;
        }
        grid[day][hour] += cell.value;
        max = max.max(grid[day][hour]);
    }

    let mut row_labels = Vec::with_capacity(DAYS_PER_WEEK);
    let mut day = Weekday::Mon;
    for _ in 0..DAYS_PER_WEEK {
        row_labels.push(day.to_string());
        day = day.succ();
    }

    Visual::Heatmap(HeatmapGrid {
        title: "Cash Inflow".to_string(),
        row_labels,
        column_labels: (0..HOURS_PER_DAY).map(|h| format!("{h:02}")).collect(),
        cells: grid,
        max,
    })
}

// ============================================================================
// Employees
// ============================================================================

pub fn employees_by_role(rows: &[NamedValue]) -> Visual {
    share("Employees by Role", rows)
}

pub fn employees_by_branch(rows: &[NamedValue]) -> Visual {
    named_values("Employees by Branch", ChartKind::Bar, "Employees", rows)
}

// ============================================================================
// Inventory
// ============================================================================

pub fn inventory_activity(rows: &[Record]) -> Visual {
    records("Inventory Activity", ChartKind::StackedBar, &INVENTORY_ACTIVITY, rows)
}

pub fn inventory_flow(rows: &[Record]) -> Visual {
    records("Inventory Flow", ChartKind::Bar, &INVENTORY_FLOW, rows)
}

pub fn inventory_levels(rows: &[Record]) -> Visual {
    records("Stock Levels", ChartKind::HorizontalBar, &INVENTORY_LEVELS, rows)
}

pub fn waste_trend(rows: &[Record]) -> Visual {
    records("Waste Trend", ChartKind::Line, &WASTE_TREND, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::TicketRange;

    fn rows(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn cartesian(visual: Visual) -> CartesianChart {
        match visual {
            Visual::Cartesian(chart) => chart,
            other => panic!("expected cartesian chart, got {other:?}"),
        }
    }

    #[test]
    fn test_order_stats_cards() {
        let stats = OrderStats {
            total_orders: 120,
            paid_orders: 100,
            pending_orders: 15,
            cancelled_orders: 5,
        };
        let Visual::StatCards(cards) = order_stats(&stats) else {
            panic!("expected stat cards");
        };
        let values: Vec<_> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["120", "100", "15", "5"]);
        assert_eq!(cards[0].label, "Total Orders");
    }

    #[test]
    fn test_order_stats_use_thousands_separators() {
        let stats = OrderStats {
            total_orders: 1_234_567,
            ..OrderStats::default()
        };
        let Visual::StatCards(cards) = order_stats(&stats) else {
            panic!("expected stat cards");
        };
        assert_eq!(cards[0].value, "1,234,567");
        assert_eq!(cards[3].value, "0");
    }

    #[test]
    fn test_every_renderer_handles_empty_input() {
        assert!(order_trend(&[], SplitBy::None).is_empty());
        assert!(order_trend(&[], SplitBy::Branch).is_empty());
        assert!(basket_size(&[]).is_empty());
        assert!(ticket_size(&TicketSize::default()).is_empty());
        assert!(top_branches_volume(&[]).is_empty());
        assert!(payment_method_share(&[]).is_empty());
        assert!(atv_by_method(&[]).is_empty());
        assert!(wallet_share_by_tier(&[]).is_empty());
        assert!(cash_inflow_heatmap(&[]).is_empty());
        assert!(employees_by_role(&[]).is_empty());
        assert!(employees_by_branch(&[]).is_empty());
        assert!(inventory_activity(&[]).is_empty());
        assert!(inventory_flow(&[]).is_empty());
        assert!(inventory_levels(&[]).is_empty());
        assert!(waste_trend(&[]).is_empty());
    }

    #[test]
    fn test_split_trend_renders_union_of_keys() {
        let data = rows(json!([
            {"name": "Mon", "CASH": 3},
            {"name": "Tue", "QR": 4, "CARD": 1}
        ]));
        let visual = order_trend(&data, SplitBy::PaymentMethod);
        let mut names = visual.series_names();
        names.sort();
        assert_eq!(names, vec!["CARD", "CASH", "QR"]);

        let chart = cartesian(visual);
        assert_eq!(chart.categories, vec!["Mon", "Tue"]);
        let cash = chart.series.iter().find(|s| s.name == "CASH").unwrap();
        assert_eq!(cash.values, vec![3.0, 0.0]);
    }

    #[test]
    fn test_unsplit_trend_draws_only_value() {
        let data = rows(json!([{"name": "Mon", "value": 9, "stray": 1}]));
        assert_eq!(order_trend(&data, SplitBy::None).series_names(), vec!["value"]);
    }

    #[test]
    fn test_wallet_share_sorted_by_tier() {
        let data = rows(json!([
            {"name": "Gold", "CASH": 1},
            {"name": "Mystery", "CASH": 2},
            {"name": "non-member", "CASH": 3},
            {"name": "Diamond", "CASH": 4},
            {"name": "Bronze", "CASH": 5},
            {"name": "Legacy", "CASH": 6}
        ]));
        let chart = cartesian(wallet_share_by_tier(&data));
        assert_eq!(
            chart.categories,
            vec!["non-member", "Bronze", "Gold", "Diamond", "Mystery", "Legacy"]
        );
        assert_eq!(chart.kind, ChartKind::StackedBar);
        assert_eq!(chart.series.len(), 4);
        assert_eq!(chart.series[0].values, vec![3.0, 5.0, 1.0, 4.0, 2.0, 6.0]);
        assert_eq!(chart.series[1].values, vec![0.0; 6]);
    }

    #[test]
    fn test_ticket_size_reference_line() {
        let ticket = TicketSize {
            distribution: vec![
                TicketRange {
                    range: "0-10".into(),
                    count: 12,
                },
                TicketRange {
                    range: "10-20".into(),
                    count: 30,
                },
            ],
            average: 1234.5,
        };
        let chart = cartesian(ticket_size(&ticket));
        let reference = chart.reference.unwrap();
        assert_eq!(reference.value, 1234.5);
        assert_eq!(reference.label, "Average 1,234.50");
    }

    #[test]
    fn test_share_percentages() {
        let visual = payment_method_share(&[
            NamedValue::new("CASH", 30.0),
            NamedValue::new("CARD", 10.0),
            NamedValue::new("QR", -5.0),
        ]);
        let Visual::Pie(pie) = visual else {
            panic!("expected pie");
        };
        assert_eq!(pie.slices[0].share, 75.0);
        assert_eq!(pie.slices[1].share, 25.0);
        assert_eq!(pie.slices[2].value, 0.0);
        assert_eq!(pie.slices[0].share_label, "75.0%");
        assert_eq!(pie.slices[2].share_label, "0.0%");

        let zero = payment_method_share(&[NamedValue::new("CASH", 0.0)]);
        assert!(zero.is_empty());
    }

    #[test]
    fn test_heatmap_grid() {
        let cells = [
            HeatmapCell {
                day_index: 0,
                hour_index: 9,
                value: 50.0,
            },
            HeatmapCell {
                day_index: 6,
                hour_index: 23,
                value: 80.0,
            },
            HeatmapCell {
                day_index: 7,
                hour_index: 0,
                value: 999.0,
            },
            HeatmapCell {
                day_index: -1,
                hour_index: 3,
                value: 999.0,
            },
        ];
        let Visual::Heatmap(grid) = cash_inflow_heatmap(&cells) else {
            panic!("expected heatmap");
        };
        assert_eq!(grid.row_labels.first().map(String::as_str), Some("Mon"));
        assert_eq!(grid.row_labels.last().map(String::as_str), Some("Sun"));
        assert_eq!(grid.column_labels.len(), HOURS_PER_DAY);
        assert_eq!(grid.value(0, 9), Some(50.0));
        assert_eq!(grid.value(6, 23), Some(80.0));
        assert_eq!(grid.max, 80.0);
    }

    #[test]
    fn test_inventory_schemas() {
        let flow = rows(json!([{"name": "Milk", "inflow": 10}]));
        assert_eq!(inventory_flow(&flow).series_names(), vec!["inflow", "outflow"]);

        let activity = rows(json!([
            {"date": "2026-05-01", "Dairy": 2, "Produce": 1},
            {"date": "2026-05-02", "Bakery": 4}
        ]));
        let chart = cartesian(inventory_activity(&activity));
        assert_eq!(chart.categories, vec!["2026-05-01", "2026-05-02"]);
        assert_eq!(chart.series.len(), 3);
    }
}
