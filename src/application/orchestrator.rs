use futures::future::join_all;
use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;

use crate::application::{binder::RenderBinder, config::DashboardConfig};
use crate::domain::{
    chart::ChartRenderer,
    dashboard::{
        AverageTicketPayload, CashStatusPayload, CollectionRatePayload, DashboardApi,
        DisplaySurface, Endpoint, ExpensesPayload, MonthlyComparisonPayload,
        ProductTotalsPayload, ReceivablesPayload, SeriesPayload, StockPayload, SummaryPayload,
        TicketDistributionPayload, TopClientsPayload, TopProductsPayload,
    },
    errors::FetchResult,
    filter::FilterSnapshot,
    logging::{LogComponent, LogLevel, get_logger},
};
use crate::{log_debug, log_info, log_warn};

/// How one loader of a refresh cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Payload fetched, decoded and handed to its binder.
    Bound,
    /// Transport, status or parse failure; the section was left untouched.
    Absent,
}

/// Per-endpoint outcome of one `refresh_all`, in launch order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RefreshReport {
    pub outcomes: Vec<(Endpoint, Settlement)>,
}

impl RefreshReport {
    pub fn settlement(&self, endpoint: Endpoint) -> Option<Settlement> {
        self.outcomes
            .iter()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, s)| *s)
    }

    pub fn bound(&self) -> Vec<Endpoint> {
        self.with(Settlement::Bound)
    }

    pub fn absent(&self) -> Vec<Endpoint> {
        self.with(Settlement::Absent)
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|(_, s)| *s == Settlement::Bound)
    }

    /// `13/15 sections bound; missing: stock, expenses`
    pub fn summary(&self) -> String {
        let absent = self.absent();
        let head = format!("{}/{} sections bound", self.outcomes.len() - absent.len(), self.outcomes.len());
        if absent.is_empty() {
            head
        } else {
            let names: Vec<String> = absent.iter().map(|e| e.to_string()).collect();
            format!("{}; missing: {}", head, names.join(", "))
        }
    }

    fn with(&self, settlement: Settlement) -> Vec<Endpoint> {
        self.outcomes
            .iter()
            .filter(|(_, s)| *s == settlement)
            .map(|(e, _)| *e)
            .collect()
    }
}

/// Fans one refresh cycle out over every endpoint and waits for all of them.
pub struct RequestOrchestrator<A: DashboardApi> {
    api: A,
    config: DashboardConfig,
}

impl<A: DashboardApi> RequestOrchestrator<A> {
    pub fn new(api: A, config: DashboardConfig) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Full request URL. Ranked feeds carry their `limit`; filtered endpoints
    /// append the snapshot's date bounds after it.
    pub fn url_for(&self, endpoint: Endpoint, snapshot: &FilterSnapshot) -> String {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();
        match endpoint {
            Endpoint::TopProducts => pairs.push(("limit", self.config.top_products_limit.to_string())),
            Endpoint::TopClients => pairs.push(("limit", self.config.top_clients_limit.to_string())),
            _ => {}
        }
        if endpoint.honors_filter() {
            pairs.extend(snapshot.query_pairs());
        }

        let mut url = format!("{}{}", self.config.api_base, endpoint.path());
        if !pairs.is_empty() {
            let query = serde_urlencoded::to_string(&pairs).unwrap_or_default();
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }
        url
    }

    async fn try_fetch<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let body = self.api.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET and decode one endpoint. Every failure is logged and collapses to `None`.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint, snapshot: &FilterSnapshot) -> Option<T> {
        let url = self.url_for(endpoint, snapshot);
        log_debug!(LogComponent::Application("Orchestrator"), "GET {}", url);
        match self.try_fetch(&url).await {
            Ok(payload) => Some(payload),
            Err(e) => {
                get_logger().log_with_metadata(
                    LogLevel::Warn,
                    LogComponent::Application("Orchestrator"),
                    &format!("Error loading {}: {}", endpoint, e),
                    &url,
                );
                None
            }
        }
    }

    async fn load<S, R>(
        &self,
        endpoint: Endpoint,
        snapshot: &FilterSnapshot,
        binder: &RenderBinder<S, R>,
    ) -> (Endpoint, Settlement)
    where
        S: DisplaySurface,
        R: ChartRenderer,
    {
        let bound = match endpoint {
            Endpoint::Summary => self
                .fetch::<SummaryPayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_summary(&p)),
            Endpoint::Stock => self
                .fetch::<StockPayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_stock(&p)),
            Endpoint::CashStatus => self
                .fetch::<CashStatusPayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_cash_status(&p)),
            Endpoint::AverageTicket => self
                .fetch::<AverageTicketPayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_average_ticket(&p)),
            Endpoint::CollectionRate => self
                .fetch::<CollectionRatePayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_collection_rate(&p)),
            Endpoint::MonthlyComparison => self
                .fetch::<MonthlyComparisonPayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_monthly_comparison(&p)),
            Endpoint::Receivables => self
                .fetch::<ReceivablesPayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_receivables(&p)),
            Endpoint::TopProducts => self
                .fetch::<TopProductsPayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_top_products(&p)),
            Endpoint::TopClients => self
                .fetch::<TopClientsPayload>(endpoint, snapshot)
                .await
                .map(|p| binder.bind_top_clients(&p)),
            Endpoint::SalesByProduct => self
                .fetch::<ProductTotalsPayload>(endpoint, snapshot)
                .await
                .map(|p| {
                    binder.bind_sales_by_product(&p);
                }),
            Endpoint::TicketDistribution => self
                .fetch::<TicketDistributionPayload>(endpoint, snapshot)
                .await
                .map(|p| {
                    binder.bind_ticket_distribution(&p);
                }),
            Endpoint::SalesTrend => self
                .fetch::<SeriesPayload>(endpoint, snapshot)
                .await
                .map(|p| {
                    binder.bind_sales_trend(&p);
                }),
            Endpoint::SalesByWeekday => self
                .fetch::<SeriesPayload>(endpoint, snapshot)
                .await
                .map(|p| {
                    binder.bind_sales_by_weekday(&p);
                }),
            Endpoint::Purchases => self
                .fetch::<ProductTotalsPayload>(endpoint, snapshot)
                .await
                .map(|p| {
                    binder.bind_purchases(&p);
                }),
            Endpoint::Expenses => self
                .fetch::<ExpensesPayload>(endpoint, snapshot)
                .await
                .map(|p| {
                    binder.bind_expenses(&p);
                }),
        };

        let settlement = if bound.is_some() { Settlement::Bound } else { Settlement::Absent };
        (endpoint, settlement)
    }

    /// Launch every loader at once and resolve after the last one settles.
    ///
    /// A failing loader only leaves its own section stale. Overlapping calls
    /// are allowed; whichever binds a target last wins.
    pub async fn refresh_all<S, R>(&self, snapshot: &FilterSnapshot, binder: &RenderBinder<S, R>) -> RefreshReport
    where
        S: DisplaySurface,
        R: ChartRenderer,
    {
        let loaders = Endpoint::iter().map(|endpoint| self.load(endpoint, snapshot, binder));
        let report = RefreshReport { outcomes: join_all(loaders).await };

        if report.is_complete() {
            log_info!(
                LogComponent::Application("Orchestrator"),
                "✅ Refresh complete: {}",
                report.summary()
            );
        } else {
            log_warn!(
                LogComponent::Application("Orchestrator"),
                "⚠️ Refresh settled: {}",
                report.summary()
            );
        }
        report
    }
}
