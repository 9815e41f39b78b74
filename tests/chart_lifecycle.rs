mod common;

use common::{MemorySurface, StubRenderer};
use ova_dashboard_wasm::application::{ChartLifecycleManager, RenderBinder, RenderOutcome};
use ova_dashboard_wasm::domain::{
    chart::{ChartKey, ChartSpec, ChartState},
    dashboard::{ExpensesPayload, SeriesPayload, TicketDistributionPayload},
};

fn trend(values: &[f64]) -> SeriesPayload {
    let labels: Vec<String> = (1..=values.len()).map(|d| format!("2024-01-{:02}", d)).collect();
    serde_json::from_value(serde_json::json!({ "labels": labels, "values": values })).unwrap()
}

#[test]
fn repeated_renders_keep_a_single_instance() {
    let binder = RenderBinder::new(MemorySurface::new(), StubRenderer::new());

    binder.bind_sales_trend(&trend(&[100.0, 200.0]));
    binder.bind_sales_trend(&trend(&[300.0, 400.0, 500.0]));

    let renderer = binder.charts().renderer();
    assert_eq!(renderer.constructed.get(), 2);
    assert_eq!(renderer.alive.get(), 1);
    assert_eq!(binder.charts().state(ChartKey::SalesTrend), ChartState::Live);

    let spec = renderer.last_spec.borrow().clone().unwrap();
    assert_eq!(spec.labels, vec!["01 ene", "02 ene", "03 ene"]);
    assert_eq!(spec.values, vec![300.0, 400.0, 500.0]);
}

#[test]
fn mixed_type_labels_keep_their_points() {
    let binder = RenderBinder::new(MemorySurface::new(), StubRenderer::new());
    let payload: SeriesPayload = serde_json::from_str(
        r#"{"labels": ["Lunes", 2, null, "Jueves"], "values": [10, 20, 30, 40]}"#,
    )
    .unwrap();

    binder.bind_sales_by_weekday(&payload);

    let spec = binder.charts().renderer().last_spec.borrow().clone().unwrap();
    assert_eq!(spec.labels, vec!["Lunes", "2", "", "Jueves"]);
    assert_eq!(spec.values, vec![10.0, 20.0, 30.0, 40.0]);
}

#[test]
fn ticket_distribution_falls_back_to_legacy_canvas() {
    let binder = RenderBinder::new(
        MemorySurface::new(),
        StubRenderer::without_canvases(&["chart-ticket-distribution"]),
    );
    let payload: TicketDistributionPayload = serde_json::from_str(
        r#"{"data": [{"rango": "$0-500", "cantidad": 1200, "total": 40000.5}]}"#,
    )
    .unwrap();

    let outcome = binder.bind_ticket_distribution(&payload);

    assert_eq!(outcome, Some(RenderOutcome::Rendered { canvas_id: "chart-by-payment" }));
    let spec = binder.charts().renderer().last_spec.borrow().clone().unwrap();
    assert_eq!(spec.tooltips, vec!["Ventas: 1,200 ($40,000.50)"]);
}

#[test]
fn no_canvas_means_no_render() {
    let binder = RenderBinder::new(
        MemorySurface::new(),
        StubRenderer::without_canvases(&["chart-ticket-distribution", "chart-by-payment"]),
    );
    let payload: TicketDistributionPayload =
        serde_json::from_str(r#"{"data": [{"rango": "a", "cantidad": 1, "total": 1}]}"#).unwrap();

    assert_eq!(binder.bind_ticket_distribution(&payload), Some(RenderOutcome::NoCanvas));
    assert_eq!(binder.charts().renderer().constructed.get(), 0);
    assert_eq!(binder.charts().state(ChartKey::TicketDistribution), ChartState::Absent);
}

#[test]
fn doughnut_tooltips_name_their_slice() {
    let binder = RenderBinder::new(MemorySurface::new(), StubRenderer::new());
    let payload: ExpensesPayload = serde_json::from_str(
        r#"{"por_tipo": [{"tipo": "COMBUSTIBLE", "total": 8000}, {"total": 4000}]}"#,
    )
    .unwrap();

    binder.bind_expenses(&payload);

    let spec = binder.charts().renderer().last_spec.borrow().clone().unwrap();
    assert_eq!(spec.labels, vec!["COMBUSTIBLE", "Otros"]);
    assert_eq!(spec.tooltips, vec!["COMBUSTIBLE: $8,000.00", "Otros: $4,000.00"]);
    assert_eq!(spec.colors().len(), 2);
}

#[test]
fn refused_construction_leaves_the_key_absent() {
    let manager = ChartLifecycleManager::new(StubRenderer::new());
    let mut spec = ChartSpec::new(ChartKey::Expenses);
    spec.push_point("COMBUSTIBLE", 1.0, "COMBUSTIBLE: $1.00");

    assert!(matches!(manager.render(&spec), RenderOutcome::Rendered { .. }));
    manager.renderer().refuse.set(true);
    assert_eq!(manager.render(&spec), RenderOutcome::Failed);

    assert_eq!(manager.state(ChartKey::Expenses), ChartState::Absent);
    assert_eq!(manager.renderer().alive.get(), 0);
}

#[test]
fn keys_are_independent() {
    let manager = ChartLifecycleManager::new(StubRenderer::new());
    manager.render(&ChartSpec::new(ChartKey::Purchases));
    manager.render(&ChartSpec::new(ChartKey::Expenses));
    manager.render(&ChartSpec::new(ChartKey::Purchases));

    assert_eq!(manager.live_count(), 2);
    assert_eq!(manager.renderer().alive.get(), 2);
    assert_eq!(manager.live_canvas(ChartKey::Purchases), Some("chart-purchases"));
}
