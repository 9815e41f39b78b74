pub mod binder;
pub mod cash_status;
pub mod charts;
pub mod config;
pub mod coordinator;
pub mod orchestrator;

pub use binder::*;
pub use cash_status::*;
pub use charts::*;
pub use config::*;
pub use coordinator::*;
pub use orchestrator::*;
