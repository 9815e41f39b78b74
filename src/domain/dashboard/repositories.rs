use crate::domain::errors::FetchResult;

/// Transport to the dashboard API.
///
/// Implementations return the raw body of a successful (2xx) response and map
/// everything else onto [`FetchError`](crate::domain::errors::FetchError).
/// Parsing stays with the caller so every endpoint shares one parse path.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn get_text(&self, url: &str) -> FetchResult<String>;
}
