use std::cell::{Cell, RefCell};

use chrono::NaiveDate;

use crate::application::{
    binder::RenderBinder,
    orchestrator::{RefreshReport, RequestOrchestrator},
};
use crate::domain::{
    chart::ChartRenderer,
    dashboard::{DashboardApi, DisplaySurface, targets},
    filter::{FilterSnapshot, FilterState},
    logging::{LogComponent, get_logger},
};

/// Tracks in-flight refresh cycles so overlapping cycles share one indicator.
/// The indicator is hidden only when the last cycle settles.
#[derive(Debug, Default)]
pub struct LoadingCoordinator {
    in_flight: Cell<usize>,
}

impl LoadingCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Show the indicator; it stays up until the returned guard drops.
    pub fn begin<'a, S: DisplaySurface>(&'a self, surface: &'a S) -> LoadingGuard<'a, S> {
        let count = self.in_flight.get() + 1;
        self.in_flight.set(count);
        if count == 1 {
            surface.set_class(targets::LOADING, targets::CLASS_HIDDEN, false);
        }
        LoadingGuard { coordinator: self, surface }
    }

    fn finish<S: DisplaySurface>(&self, surface: &S) {
        let count = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(count);
        if count == 0 {
            surface.set_class(targets::LOADING, targets::CLASS_HIDDEN, true);
        }
    }
}

pub struct LoadingGuard<'a, S: DisplaySurface> {
    coordinator: &'a LoadingCoordinator,
    surface: &'a S,
}

impl<S: DisplaySurface> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.coordinator.finish(self.surface);
    }
}

/// Owns the session filter and drives refresh cycles.
pub struct DashboardController<A, S, R>
where
    A: DashboardApi,
    S: DisplaySurface,
    R: ChartRenderer,
{
    orchestrator: RequestOrchestrator<A>,
    binder: RenderBinder<S, R>,
    filter: RefCell<FilterState>,
    loading: LoadingCoordinator,
}

impl<A, S, R> DashboardController<A, S, R>
where
    A: DashboardApi,
    S: DisplaySurface,
    R: ChartRenderer,
{
    pub fn new(orchestrator: RequestOrchestrator<A>, binder: RenderBinder<S, R>, filter: FilterState) -> Self {
        get_logger().info(
            LogComponent::Application("DashboardController"),
            "Creating dashboard controller",
        );
        Self {
            orchestrator,
            binder,
            filter: RefCell::new(filter),
            loading: LoadingCoordinator::new(),
        }
    }

    /// Controller whose filter starts on the current month up to `today`.
    pub fn for_current_month(orchestrator: RequestOrchestrator<A>, binder: RenderBinder<S, R>, today: NaiveDate) -> Self {
        Self::new(orchestrator, binder, FilterState::current_month(today))
    }

    pub fn orchestrator(&self) -> &RequestOrchestrator<A> {
        &self.orchestrator
    }

    pub fn binder(&self) -> &RenderBinder<S, R> {
        &self.binder
    }

    pub fn loading(&self) -> &LoadingCoordinator {
        &self.loading
    }

    pub fn filter(&self) -> FilterState {
        *self.filter.borrow()
    }

    /// One full cycle against the filter as it is right now.
    pub async fn refresh(&self) -> RefreshReport {
        // Snapshot taken before any await; later filter edits do not leak in.
        let snapshot: FilterSnapshot = self.filter.borrow().snapshot();
        let _guard = self.loading.begin(self.binder.surface());
        get_logger().info(
            LogComponent::Application("DashboardController"),
            &format!(
                "🔄 Refreshing dashboard (start: {:?}, end: {:?})",
                snapshot.start_date, snapshot.end_date
            ),
        );
        self.orchestrator.refresh_all(&snapshot, &self.binder).await
    }

    /// Take the raw date control values, then refresh.
    pub async fn apply_filters(&self, start_input: &str, end_input: &str) -> RefreshReport {
        self.filter.borrow_mut().apply(start_input, end_input);
        self.refresh().await
    }

    /// Clear both bounds, then refresh.
    pub async fn reset_filters(&self) -> RefreshReport {
        self.filter.borrow_mut().reset();
        self.refresh().await
    }
}
