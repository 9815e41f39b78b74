pub mod chartjs;

pub use chartjs::{ChartJsInstance, ChartJsRenderer, chart_config_json};
