pub mod chart;
pub mod dashboard;
pub mod errors;
pub mod filter;
pub mod formatting;
pub mod logging;
