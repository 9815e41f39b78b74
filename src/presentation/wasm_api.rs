use std::rc::Rc;

use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use once_cell::unsync::OnceCell;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::{
    DashboardConfig, DashboardController, RefreshReport, RenderBinder, RequestOrchestrator,
};
use crate::domain::{
    errors::UiResult,
    logging::{LogComponent, get_logger},
};
use crate::global_state::{last_refresh, refreshes_in_flight};
use crate::infrastructure::{ChartJsRenderer, DomSurface, GlooApiClient};
use crate::time_utils::today;
use leptos::SignalUpdate;

/// The dashboard wired to the browser: gloo transport, live DOM, Chart.js.
pub type BrowserDashboard = DashboardController<GlooApiClient, DomSurface, ChartJsRenderer>;

pub fn build_browser_dashboard(config: DashboardConfig) -> UiResult<Rc<BrowserDashboard>> {
    let orchestrator = RequestOrchestrator::new(GlooApiClient::new(), config);
    let binder = RenderBinder::new(DomSurface::new()?, ChartJsRenderer::new());
    Ok(Rc::new(DashboardController::for_current_month(orchestrator, binder, today())))
}

thread_local! {
    static PAGE_DASHBOARD: OnceCell<Rc<BrowserDashboard>> = OnceCell::new();
}

/// The page's one dashboard, built on first use. The Leptos view and every
/// [`DashboardHandle`] share it, so a canvas only ever has one chart registry
/// and one filter behind it.
pub fn page_dashboard() -> UiResult<Rc<BrowserDashboard>> {
    PAGE_DASHBOARD.with(|cell| {
        cell.get_or_try_init(|| build_browser_dashboard(DashboardConfig::default()))
            .map(Rc::clone)
    })
}

/// Mirror a cycle's start into the page signals.
pub fn mark_refresh_started() {
    refreshes_in_flight().update(|n| *n += 1);
}

/// Mirror a settled cycle into the page signals.
pub fn mark_refresh_settled(report: &RefreshReport) {
    refreshes_in_flight().update(|n| *n = n.saturating_sub(1));
    last_refresh().update(|line| *line = Some(report.summary()));
}

fn report_to_js(report: &RefreshReport) -> Result<JsValue, JsValue> {
    let names = |endpoints: Vec<crate::domain::dashboard::Endpoint>| -> Vec<String> {
        endpoints.iter().map(|e| e.to_string()).collect()
    };
    JsValue::from_serde(&json!({
        "bound": names(report.bound()),
        "absent": names(report.absent()),
        "complete": report.is_complete(),
    }))
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Drive the page dashboard from plain JavaScript; every call resolves to
/// `{ bound, absent, complete }` once the cycle settles.
#[wasm_bindgen]
pub struct DashboardHandle {
    controller: Rc<BrowserDashboard>,
}

#[wasm_bindgen]
impl DashboardHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DashboardHandle, JsValue> {
        let controller = page_dashboard().map_err(|e| JsValue::from_str(&e.to_string()))?;
        get_logger().info(
            LogComponent::Presentation("DashboardHandle"),
            "Dashboard handle attached to the page dashboard",
        );
        Ok(Self { controller })
    }

    pub fn refresh(&self) -> Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move {
            mark_refresh_started();
            let report = controller.refresh().await;
            mark_refresh_settled(&report);
            report_to_js(&report)
        })
    }

    #[wasm_bindgen(js_name = applyFilters)]
    pub fn apply_filters(&self, start_date: String, end_date: String) -> Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move {
            mark_refresh_started();
            let report = controller.apply_filters(&start_date, &end_date).await;
            mark_refresh_settled(&report);
            report_to_js(&report)
        })
    }

    #[wasm_bindgen(js_name = resetFilters)]
    pub fn reset_filters(&self) -> Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move {
            mark_refresh_started();
            let report = controller.reset_filters().await;
            mark_refresh_settled(&report);
            report_to_js(&report)
        })
    }

    /// Tear down every live chart.
    #[wasm_bindgen(js_name = disposeCharts)]
    pub fn dispose_charts(&self) {
        self.controller.binder().charts().dispose_all();
    }
}

impl DashboardHandle {
    pub fn controller(&self) -> &Rc<BrowserDashboard> {
        &self.controller
    }
}
