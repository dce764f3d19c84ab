//! View model produced by the renderers

/// Message shown instead of a blank chart
pub const EMPTY_MESSAGE: &str = "No data available";

/// What a widget shows
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    /// A request is in flight
    Loading,
    /// Nothing to chart
    Empty { message: String },
    StatCards(Vec<StatCard>),
    Cartesian(CartesianChart),
    Pie(PieChart),
    Heatmap(HeatmapGrid),
}

impl Visual {
    /// The neutral "no data" state
    pub fn empty() -> Self {
        Visual::Empty {
            message: EMPTY_MESSAGE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Visual::Empty { .. })
    }

    /// Names of the rendered series (cartesian charts only)
    pub fn series_names(&self) -> Vec<&str> {
        match self {
            Visual::Cartesian(chart) => chart.series.iter().map(|s| s.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

/// Headline figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: String,
    /// Pre-formatted value
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
    StackedBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    /// One value per category
    pub values: Vec<f64>,
}

/// Horizontal marker such as an average
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartesianChart {
    pub kind: ChartKind,
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub reference: Option<ReferenceLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Percentage of the total, 0..=100
    pub share: f64,
    /// `share` as shown in the legend, e.g. `12.5%`
    pub share_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

/// Weekday x hour grid
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub title: String,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<f64>>,
    pub max: f64,
}

impl HeatmapGrid {
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.cells.get(row)?.get(column).copied()
    }
}
