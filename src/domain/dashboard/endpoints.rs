use derive_more::Display;
use strum::{AsRefStr, EnumCount, EnumIter};

/// Whether an endpoint's request carries the active date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FilterPolicy {
    #[display(fmt = "filtered")]
    Filtered,
    /// Always fetches the global view (stock levels, month-over-month growth, ...).
    #[display(fmt = "unfiltered")]
    Unfiltered,
}

/// The fixed set of sections fetched on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, AsRefStr)]
pub enum Endpoint {
    #[display(fmt = "summary")]
    Summary,
    #[display(fmt = "stock")]
    Stock,
    #[display(fmt = "cash-status")]
    CashStatus,
    #[display(fmt = "ticket-promedio")]
    AverageTicket,
    #[display(fmt = "tasa-cobranza")]
    CollectionRate,
    #[display(fmt = "monthly-comparison")]
    MonthlyComparison,
    #[display(fmt = "receivables")]
    Receivables,
    #[display(fmt = "top-products")]
    TopProducts,
    #[display(fmt = "sales-by-product")]
    SalesByProduct,
    #[display(fmt = "ticket-distribution")]
    TicketDistribution,
    #[display(fmt = "sales-trend")]
    SalesTrend,
    #[display(fmt = "sales-by-weekday")]
    SalesByWeekday,
    #[display(fmt = "purchases")]
    Purchases,
    #[display(fmt = "expenses")]
    Expenses,
    #[display(fmt = "top-clients")]
    TopClients,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Summary => "/api/summary",
            Endpoint::Stock => "/api/stock",
            Endpoint::CashStatus => "/api/cash-status",
            Endpoint::AverageTicket => "/api/metrics/ticket-promedio",
            Endpoint::CollectionRate => "/api/metrics/tasa-cobranza",
            Endpoint::MonthlyComparison => "/api/metrics/monthly-comparison",
            Endpoint::Receivables => "/api/receivables",
            Endpoint::TopProducts => "/api/sales/top-products",
            Endpoint::SalesByProduct => "/api/sales/by-product",
            Endpoint::TicketDistribution => "/api/sales/ticket-distribution",
            Endpoint::SalesTrend => "/api/sales/trend",
            Endpoint::SalesByWeekday => "/api/sales/by-weekday",
            Endpoint::Purchases => "/api/purchases",
            Endpoint::Expenses => "/api/expenses",
            Endpoint::TopClients => "/api/sales/top-clients",
        }
    }

    /// Fixed per-endpoint policy table; not configurable at runtime.
    pub fn filter_policy(&self) -> FilterPolicy {
        match self {
            Endpoint::Stock
            | Endpoint::CollectionRate
            | Endpoint::MonthlyComparison
            | Endpoint::Receivables => FilterPolicy::Unfiltered,
            _ => FilterPolicy::Filtered,
        }
    }

    pub fn honors_filter(&self) -> bool {
        self.filter_policy() == FilterPolicy::Filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn global_views_ignore_the_filter() {
        let unfiltered: Vec<Endpoint> = Endpoint::iter().filter(|e| !e.honors_filter()).collect();
        assert_eq!(
            unfiltered,
            vec![
                Endpoint::Stock,
                Endpoint::CollectionRate,
                Endpoint::MonthlyComparison,
                Endpoint::Receivables
            ]
        );
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<&str> = Endpoint::iter().map(|e| e.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::COUNT);
    }
}
