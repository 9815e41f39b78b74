use derive_more::Display;
use strum::{AsRefStr, EnumCount, EnumIter};

/// Value Object - stable logical id of one chart widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, AsRefStr)]
pub enum ChartKey {
    #[display(fmt = "byProduct")]
    SalesByProduct,
    #[display(fmt = "ticketDist")]
    TicketDistribution,
    #[display(fmt = "trend")]
    SalesTrend,
    #[display(fmt = "byWeekday")]
    SalesByWeekday,
    #[display(fmt = "purchases")]
    Purchases,
    #[display(fmt = "expenses")]
    Expenses,
}

impl ChartKey {
    /// Canvas ids to try, in order. Ticket distribution still answers to the
    /// legacy `chart-by-payment` canvas of older page layouts.
    pub fn canvas_ids(&self) -> &'static [&'static str] {
        match self {
            ChartKey::SalesByProduct => &["chart-by-product"],
            ChartKey::TicketDistribution => &["chart-ticket-distribution", "chart-by-payment"],
            ChartKey::SalesTrend => &["chart-trend"],
            ChartKey::SalesByWeekday => &["chart-by-weekday"],
            ChartKey::Purchases => &["chart-purchases"],
            ChartKey::Expenses => &["chart-expenses"],
        }
    }

    /// Fixed style/behavior for this chart.
    pub fn config(&self) -> ChartConfig {
        match self {
            ChartKey::SalesByProduct => ChartConfig {
                kind: ChartKind::Bar,
                dataset_label: Some("Ventas"),
                palette: vec![
                    palette::PRIMARY,
                    palette::SECONDARY,
                    palette::WARNING,
                    palette::PURPLE,
                    palette::DANGER,
                    palette::INFO,
                ],
                axis: AxisLayout::Horizontal,
                legend: LegendPolicy::Hidden,
                ..ChartConfig::bar()
            },
            ChartKey::TicketDistribution => ChartConfig {
                kind: ChartKind::Bar,
                dataset_label: Some("Cantidad de Ventas"),
                palette: vec![palette::PRIMARY, palette::SECONDARY, palette::WARNING, palette::PURPLE],
                bar_percentage: Some(0.6),
                begin_at_zero: true,
                ..ChartConfig::bar()
            },
            ChartKey::SalesTrend => ChartConfig {
                kind: ChartKind::Line,
                dataset_label: Some("Ventas del día"),
                palette: vec![palette::PRIMARY],
                fill: Some(palette::PRIMARY_BG),
                begin_at_zero: true,
                currency_ticks: true,
                rotate_labels: true,
                ..ChartConfig::bar()
            },
            ChartKey::SalesByWeekday => ChartConfig {
                kind: ChartKind::Bar,
                dataset_label: Some("Ventas Totales Acumuladas"),
                // Monday through Sunday
                palette: vec![
                    palette::SECONDARY,
                    palette::INFO,
                    palette::PRIMARY,
                    palette::WARNING,
                    palette::PURPLE,
                    palette::ORANGE,
                    palette::DANGER,
                ],
                ..ChartConfig::bar()
            },
            ChartKey::Purchases => ChartConfig {
                palette: vec![palette::LIME, palette::WARNING],
                legend: LegendPolicy::Bottom { font_size: None, padding: 20 },
                ..ChartConfig::doughnut()
            },
            ChartKey::Expenses => ChartConfig {
                palette: vec![
                    palette::ORANGE,
                    palette::DANGER,
                    palette::WARNING,
                    palette::PURPLE,
                    palette::SECONDARY,
                    palette::INFO,
                ],
                legend: LegendPolicy::Bottom { font_size: Some(10), padding: 10 },
                ..ChartConfig::doughnut()
            },
        }
    }
}

/// Value Object - chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum ChartKind {
    #[display(fmt = "Bar")]
    #[strum(serialize = "bar")]
    Bar,
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Doughnut")]
    #[strum(serialize = "doughnut")]
    Doughnut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLayout {
    Vertical,
    /// Categories on the y axis.
    Horizontal,
    /// Doughnuts have no axes.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPolicy {
    Hidden,
    Bottom { font_size: Option<u32>, padding: u32 },
}

/// Declarative style and behavior of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub dataset_label: Option<&'static str>,
    pub palette: Vec<&'static str>,
    pub axis: AxisLayout,
    pub legend: LegendPolicy,
    pub begin_at_zero: bool,
    /// y-axis tick labels formatted as currency
    pub currency_ticks: bool,
    pub rotate_labels: bool,
    pub bar_percentage: Option<f64>,
    /// Area fill under a line chart.
    pub fill: Option<&'static str>,
    pub cutout: Option<&'static str>,
}

impl ChartConfig {
    fn bar() -> Self {
        Self {
            kind: ChartKind::Bar,
            dataset_label: None,
            palette: Vec::new(),
            axis: AxisLayout::Vertical,
            legend: LegendPolicy::Hidden,
            begin_at_zero: false,
            currency_ticks: false,
            rotate_labels: false,
            bar_percentage: None,
            fill: None,
            cutout: None,
        }
    }

    fn doughnut() -> Self {
        Self {
            kind: ChartKind::Doughnut,
            axis: AxisLayout::None,
            cutout: Some("65%"),
            ..Self::bar()
        }
    }

    /// One color per data point: the palette is cut to the number of points
    /// and repeats when there are more points than colors.
    pub fn colors_for(&self, points: usize) -> Vec<&'static str> {
        if self.palette.is_empty() {
            return Vec::new();
        }
        self.palette.iter().copied().cycle().take(points).collect()
    }
}

pub mod palette {
    pub const PRIMARY: &str = "rgba(16, 185, 129, 0.8)";
    pub const SECONDARY: &str = "rgba(59, 130, 246, 0.8)";
    pub const WARNING: &str = "rgba(245, 158, 11, 0.8)";
    pub const DANGER: &str = "rgba(239, 68, 68, 0.8)";
    pub const PURPLE: &str = "rgba(139, 92, 246, 0.8)";
    pub const INFO: &str = "rgba(6, 182, 212, 0.8)";
    pub const ORANGE: &str = "rgba(249, 115, 22, 0.8)";
    pub const LIME: &str = "rgba(132, 204, 22, 0.8)";

    pub const PRIMARY_BG: &str = "rgba(16, 185, 129, 0.2)";

    pub const LEGEND_TEXT: &str = "#94a3b8";
    pub const TICK_TEXT: &str = "#64748b";
    pub const GRID: &str = "rgba(148, 163, 184, 0.1)";
}
