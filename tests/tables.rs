mod common;

use common::{MemorySurface, StubRenderer};
use ova_dashboard_wasm::application::RenderBinder;
use ova_dashboard_wasm::domain::dashboard::{
    MonthlyComparisonPayload, ReceivablesPayload, TableCell, Tone, TopClientsPayload,
    TopProductsPayload, targets,
};

fn binder() -> RenderBinder<MemorySurface, StubRenderer> {
    RenderBinder::new(MemorySurface::new(), StubRenderer::new())
}

#[test]
fn receivable_severity_tiers() {
    let binder = binder();
    let payload: ReceivablesPayload = serde_json::from_str(
        r#"{"total_pendiente": 900, "num_cuentas": 3, "detalle": [
            {"cliente": "A", "saldo": 300, "fecha": "2024-01-01", "dias_vencidos": 31},
            {"cliente": "B", "saldo": 300, "fecha": "2024-01-15", "dias_vencidos": 16},
            {"cliente": "C", "saldo": 300, "fecha": "2024-01-21", "dias_vencidos": 10}]}"#,
    )
    .unwrap();
    binder.bind_receivables(&payload);

    let rows = binder.surface().rows(targets::RECEIVABLES_TABLE);
    let tones: Vec<Option<Tone>> = rows.iter().map(|row| row.cells[3].tone).collect();
    assert_eq!(tones, vec![Some(Tone::Error), Some(Tone::Warning), None]);
    assert_eq!(binder.surface().text(targets::RECEIVABLES_COUNT).as_deref(), Some("3 cuentas"));
    assert_eq!(binder.surface().text(targets::RECEIVABLES_TOTAL).as_deref(), Some("$900.00"));
}

#[test]
fn empty_receivables_replace_stale_rows_with_placeholder() {
    let binder = binder();
    let full: ReceivablesPayload = serde_json::from_str(
        r#"{"detalle": [{"cliente": "A", "saldo": 1, "dias_vencidos": 40}]}"#,
    )
    .unwrap();
    binder.bind_receivables(&full);
    binder.bind_receivables(&serde_json::from_str(r#"{"detalle": []}"#).unwrap());

    let rows = binder.surface().rows(targets::RECEIVABLES_TABLE);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells, vec![TableCell::placeholder("Sin cuentas pendientes", 4)]);
}

#[test]
fn numeric_client_names_still_bind_the_section() {
    let binder = binder();
    let payload: ReceivablesPayload = serde_json::from_str(
        r#"{"total_pendiente": 900, "num_cuentas": 1, "detalle": [
            {"cliente": 12345, "saldo": 900, "fecha": ["bad"], "dias_vencidos": 2}]}"#,
    )
    .unwrap();
    binder.bind_receivables(&payload);

    assert_eq!(binder.surface().text(targets::RECEIVABLES_TOTAL).as_deref(), Some("$900.00"));
    assert_eq!(
        binder.surface().row_summaries(targets::RECEIVABLES_TABLE),
        vec!["12345 | $900.00 | - | 2"]
    );
}

#[test]
fn top_products_rows() {
    let binder = binder();
    let payload: TopProductsPayload = serde_json::from_str(
        r#"{"data": [
            {"producto": "CEBOLLA BLANCA", "total": 98000, "kg_netos": 12000.4, "cajas": 3},
            {"producto": "HUEVO ROJO", "total": 54340.5, "kg_netos": 0, "cajas": 310},
            {"producto": null, "total": "125.5", "kg_netos": null, "cajas": null}]}"#,
    )
    .unwrap();
    binder.bind_top_products(&payload);

    let text = binder
        .surface()
        .row_summaries(targets::TOP_PRODUCTS_TABLE)
        .join("\n");
    insta::assert_snapshot!(text, @r"
    1 | CEBOLLA BLANCA | $98,000.00 | 12,000 kg
    2 | HUEVO ROJO | $54,340.50 | 310 cajas
    3 | - | $125.50 | 0 cajas
    ");
}

#[test]
fn top_products_without_data_keep_previous_rows() {
    let binder = binder();
    binder.bind_top_products(
        &serde_json::from_str(r#"{"data": [{"producto": "X", "total": 1, "cajas": 1}]}"#).unwrap(),
    );
    binder.bind_top_products(&TopProductsPayload::default());

    assert_eq!(binder.surface().rows(targets::TOP_PRODUCTS_TABLE).len(), 1);
}

#[test]
fn top_clients_rank_and_purchase_count() {
    let binder = binder();
    let payload: TopClientsPayload = serde_json::from_str(
        r#"{"data": [{"cliente": "ABARROTES LUPITA", "total": 30000, "compras": 1400},
                     {"cliente": "", "total": 10, "compras": 1}]}"#,
    )
    .unwrap();
    binder.bind_top_clients(&payload);

    assert_eq!(
        binder.surface().row_summaries(targets::TOP_CLIENTS_TABLE),
        vec!["1 | ABARROTES LUPITA | $30,000.00 | 1,400", "2 | - | $10.00 | 1"]
    );
}

#[test]
fn growth_classes_follow_the_sign() {
    let binder = binder();
    let bind = |growth: &str| {
        let json = format!(r#"{{"crecimiento_porcentaje": {}}}"#, growth);
        let payload: MonthlyComparisonPayload = serde_json::from_str(&json).unwrap();
        binder.bind_monthly_comparison(&payload);
        let surface = binder.surface();
        (
            surface.text(targets::GROWTH).unwrap(),
            surface.has_class(targets::GROWTH_CARD, targets::CLASS_POSITIVE),
            surface.has_class(targets::GROWTH_CARD, targets::CLASS_NEGATIVE),
        )
    };

    assert_eq!(bind("5.56"), ("+5.6%".to_string(), true, false));
    assert_eq!(bind("-3"), ("-3.0%".to_string(), false, true));
    assert_eq!(bind("0"), ("+0.0%".to_string(), false, false));
    assert_eq!(bind("-0.04"), ("-0.0%".to_string(), false, true));
    assert_eq!(bind("null"), ("0%".to_string(), false, false));
    assert_eq!(
        binder.surface().text(targets::PREVIOUS_MONTH).as_deref(),
        Some("Anterior: $0.00")
    );
}
