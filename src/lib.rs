use wasm_bindgen::prelude::*;

use crate::application::DashboardConfig;
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;

/// Install logging and the panic hook, then mount the dashboard.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::default();
    let console_logger = infrastructure::ConsoleLogger::new(config.min_log_level);
    domain::logging::init_logger(Box::new(app::LeptosLogger::new(
        console_logger,
        config.debug_log_capacity,
    )));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Dashboard initialized, mounting view",
    );

    leptos::mount_to_body(app::App);
}
