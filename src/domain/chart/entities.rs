use super::value_objects::{ChartConfig, ChartKey};

/// Everything needed to construct one chart instance: the fixed per-key
/// configuration plus the freshly fetched dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub key: ChartKey,
    pub config: ChartConfig,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Tooltip text per data point, derived from that point's own row.
    pub tooltips: Vec<String>,
}

impl ChartSpec {
    pub fn new(key: ChartKey) -> Self {
        Self {
            key,
            config: key.config(),
            labels: Vec::new(),
            values: Vec::new(),
            tooltips: Vec::new(),
        }
    }

    pub fn push_point(&mut self, label: impl Into<String>, value: f64, tooltip: impl Into<String>) {
        self.labels.push(label.into());
        self.values.push(value);
        self.tooltips.push(tooltip.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn colors(&self) -> Vec<&'static str> {
        self.config.colors_for(self.len())
    }
}

/// A constructed chart widget registered under its key.
#[derive(Debug)]
pub struct ChartHandle<I> {
    pub key: ChartKey,
    pub canvas_id: &'static str,
    pub instance: I,
}

/// Lifecycle state of one chart key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    Absent,
    Live,
}
