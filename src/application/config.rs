use crate::domain::logging::LogLevel;

/// Runtime settings of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for every endpoint path; empty means same origin.
    pub api_base: String,
    pub top_products_limit: u32,
    pub top_clients_limit: u32,
    pub min_log_level: LogLevel,
    /// Lines kept in the in-page debug console.
    pub debug_log_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            top_products_limit: 5,
            top_clients_limit: 10,
            min_log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
            debug_log_capacity: 100,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_top_products_limit(mut self, limit: u32) -> Self {
        self.top_products_limit = limit;
        self
    }

    pub fn with_top_clients_limit(mut self, limit: u32) -> Self {
        self.top_clients_limit = limit;
        self
    }

    pub fn with_min_log_level(mut self, level: LogLevel) -> Self {
        self.min_log_level = level;
        self
    }

    pub fn with_debug_log_capacity(mut self, capacity: usize) -> Self {
        self.debug_log_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_drops_trailing_slash() {
        let config = DashboardConfig::new().with_api_base("http://localhost:8000/");
        assert_eq!(config.api_base, "http://localhost:8000");
    }

    #[test]
    fn defaults_match_dashboard_tables() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.top_products_limit, 5);
        assert_eq!(config.top_clients_limit, 10);
    }
}
