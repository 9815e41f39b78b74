//! Response shapes of the dashboard API.
//!
//! Fields are deliberately lenient: a payload that parses but lacks a field
//! still binds, with the missing figure rendered as its zero-equivalent.

use super::value_objects::{Amount, Text};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryPayload {
    pub ventas_total: Amount,
    pub ventas_contado: Amount,
    pub ventas_credito: Amount,
    pub compras_total: Amount,
    pub gastos_total: Amount,
    pub num_ventas: Amount,
    pub num_compras: Amount,
    pub num_gastos: Amount,
    pub utilidad_estimada: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StockLevel {
    pub kg: Amount,
    pub cajas: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StockPayload {
    pub cebolla: Option<StockLevel>,
    pub huevo: Option<StockLevel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OperatorBalance {
    pub nombre: Text,
    pub saldo: Amount,
}

/// "Movement of the day" figures, keyed by the ledger concept name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DailyMovements {
    #[serde(rename = "COBRANZA VENTAS AL CONTADO")]
    pub cash_collections: Amount,
    #[serde(rename = "COBRANZA VENTAS A CRÉDITO")]
    pub credit_collections: Amount,
    #[serde(rename = "GASTOS EFECTUADOS")]
    pub expenses_paid: Amount,
    #[serde(rename = "MOVIMIENTO ENTRE CAJAS")]
    pub register_transfers: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CashStatusPayload {
    pub operadores: Option<Vec<OperatorBalance>>,
    pub movimientos_dia: Option<DailyMovements>,
    pub saldo_total: Amount,
    pub fecha: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AverageTicketPayload {
    pub ticket_promedio: Amount,
    pub num_transacciones: Amount,
    pub contado: Amount,
    pub credito: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionRatePayload {
    pub tasa: Amount,
    pub cobrado: Amount,
    pub pendiente: Amount,
    pub total_creditos: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonthTotals {
    pub total: Amount,
    pub transacciones: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonthlyComparisonPayload {
    pub crecimiento_porcentaje: Amount,
    pub mes_actual: Option<MonthTotals>,
    pub mes_anterior: Option<MonthTotals>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReceivableEntry {
    pub cliente: Text,
    pub saldo: Amount,
    pub fecha: Text,
    pub dias_vencidos: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReceivablesPayload {
    pub total_pendiente: Amount,
    pub num_cuentas: Amount,
    pub detalle: Option<Vec<ReceivableEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopProductRow {
    pub producto: Text,
    pub total: Amount,
    pub kg_netos: Amount,
    pub cajas: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopProductsPayload {
    pub data: Option<Vec<TopProductRow>>,
}

/// One product and its total; shared by the sales-by-product and purchases feeds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductTotal {
    pub producto: Text,
    pub total: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductTotalsPayload {
    pub data: Option<Vec<ProductTotal>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TicketBucket {
    pub rango: Text,
    pub cantidad: Amount,
    pub total: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TicketDistributionPayload {
    pub data: Option<Vec<TicketBucket>>,
}

/// Parallel `labels`/`values` arrays (trend by date, totals by weekday).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeriesPayload {
    pub labels: Option<Vec<Text>>,
    pub values: Option<Vec<Amount>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpenseType {
    pub tipo: Text,
    pub total: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpensesPayload {
    pub por_tipo: Option<Vec<ExpenseType>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopClientRow {
    pub cliente: Text,
    pub total: Amount,
    pub compras: Amount,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopClientsPayload {
    pub data: Option<Vec<TopClientRow>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_status_reads_movement_concepts_by_ledger_name() {
        let payload: CashStatusPayload = serde_json::from_str(
            r#"{
                "operadores": [{"nombre": "PIPO", "saldo": -50}],
                "movimientos_dia": {"COBRANZA VENTAS A CRÉDITO": 1200.5, "GASTOS EFECTUADOS": null},
                "saldo_total": 100,
                "fecha": "2024-01-15"
            }"#,
        )
        .unwrap();
        let movements = payload.movimientos_dia.unwrap();
        assert_eq!(movements.credit_collections.value(), Some(1200.5));
        assert_eq!(movements.expenses_paid.value(), None);
        assert_eq!(movements.cash_collections.value(), None);
        assert_eq!(payload.operadores.unwrap()[0].saldo.value(), Some(-50.0));
    }

    #[test]
    fn text_fields_of_the_wrong_type_do_not_sink_the_payload() {
        let payload: ReceivablesPayload = serde_json::from_str(
            r#"{"total_pendiente": 900, "detalle": [{"cliente": 12345, "saldo": 900, "fecha": false}]}"#,
        )
        .unwrap();
        assert_eq!(payload.total_pendiente.value(), Some(900.0));
        let entry = &payload.detalle.unwrap()[0];
        assert_eq!(entry.cliente.as_str(), Some("12345"));
        assert_eq!(entry.fecha.as_str(), None);

        let series: SeriesPayload =
            serde_json::from_str(r#"{"labels": ["2024-01-15", 3, null], "values": [1, 2, 3]}"#).unwrap();
        let labels: Vec<Option<&str>> = series.labels.iter().flatten().map(Text::as_str).collect();
        assert_eq!(labels, vec![Some("2024-01-15"), Some("3"), None]);
    }

    #[test]
    fn missing_fields_parse_as_absent() {
        let payload: SummaryPayload = serde_json::from_str(r#"{"ventas_total": 10}"#).unwrap();
        assert_eq!(payload.ventas_total.value(), Some(10.0));
        assert_eq!(payload.gastos_total.value(), None);

        let payload: TopProductsPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.data.is_none());
    }
}
