use crate::application::{
    cash_status::CashStatusAggregator,
    charts::{ChartLifecycleManager, RenderOutcome},
};
use crate::domain::{
    chart::{ChartKey, ChartRenderer, ChartSpec},
    dashboard::{
        AverageTicketPayload, CashStatusPayload, CollectionRatePayload, DisplaySurface,
        ExpensesPayload, MonthlyComparisonPayload, ProductTotalsPayload, ReceivableEntry,
        ReceivablesPayload, SeriesPayload, StockPayload, SummaryPayload, TableCell, TableRow,
        TicketDistributionPayload, Tone, TopClientsPayload, TopProductsPayload, Text,
        targets,
    },
    filter::parse_iso_date,
    formatting::{
        format_boxes, format_count, format_currency, format_day_month, format_percent,
        format_signed_percent, format_weight,
    },
    logging::{LogComponent, get_logger},
};

pub const NO_RECEIVABLES: &str = "Sin cuentas pendientes";
const RECEIVABLES_COLUMNS: u32 = 4;
const MISSING_TEXT: &str = "-";

/// Overdue-days severity: more than 30 days is an error, more than 15 a warning.
pub fn overdue_tone(days: f64) -> Option<Tone> {
    if days > 30.0 {
        Some(Tone::Error)
    } else if days > 15.0 {
        Some(Tone::Warning)
    } else {
        None
    }
}

fn text_or_dash(text: &Text) -> String {
    text.non_blank().unwrap_or(MISSING_TEXT).to_string()
}

pub fn receivable_row(entry: &ReceivableEntry) -> TableRow {
    let days = entry.dias_vencidos.or_zero();
    TableRow::new(vec![
        TableCell::text(text_or_dash(&entry.cliente)),
        TableCell::text(format_currency(entry.saldo.value())),
        TableCell::text(text_or_dash(&entry.fecha)),
        TableCell::toned(format_count(Some(days)), overdue_tone(days)),
    ])
}

/// Rows for the receivables table; a single placeholder when nothing is pending.
pub fn receivable_rows(payload: &ReceivablesPayload) -> Vec<TableRow> {
    match payload.detalle.as_deref() {
        Some(detail) if !detail.is_empty() => detail.iter().map(receivable_row).collect(),
        _ => vec![TableRow::new(vec![TableCell::placeholder(NO_RECEIVABLES, RECEIVABLES_COLUMNS)])],
    }
}

/// Ranked rows, or `None` when the feed carried no `data` list.
pub fn top_product_rows(payload: &TopProductsPayload) -> Option<Vec<TableRow>> {
    let rows = payload.data.as_ref()?;
    Some(
        rows.iter()
            .enumerate()
            .map(|(index, item)| {
                let kg = item.kg_netos.or_zero();
                let quantity = if kg != 0.0 {
                    format_weight(Some(kg))
                } else {
                    format_boxes(Some(item.cajas.or_zero()))
                };
                TableRow::new(vec![
                    TableCell::text((index + 1).to_string()),
                    TableCell::text(text_or_dash(&item.producto)),
                    TableCell::text(format_currency(item.total.value())),
                    TableCell::text(quantity),
                ])
            })
            .collect(),
    )
}

pub fn top_client_rows(payload: &TopClientsPayload) -> Option<Vec<TableRow>> {
    let rows = payload.data.as_ref()?;
    Some(
        rows.iter()
            .enumerate()
            .map(|(index, item)| {
                TableRow::new(vec![
                    TableCell::text((index + 1).to_string()),
                    TableCell::text(text_or_dash(&item.cliente)),
                    TableCell::text(format_currency(item.total.value())),
                    TableCell::text(format_count(item.compras.value())),
                ])
            })
            .collect(),
    )
}

fn label_or(text: &Text, fallback: &str) -> String {
    text.non_blank().unwrap_or(fallback).to_string()
}

pub fn sales_by_product_spec(payload: &ProductTotalsPayload) -> Option<ChartSpec> {
    let rows = payload.data.as_ref()?;
    let mut spec = ChartSpec::new(ChartKey::SalesByProduct);
    for row in rows {
        let total = row.total.or_zero();
        spec.push_point(label_or(&row.producto, "Otro"), total, format_currency(Some(total)));
    }
    Some(spec)
}

/// Bars are sale counts per ticket-size bucket; the tooltip adds the bucket's money total.
pub fn ticket_distribution_spec(payload: &TicketDistributionPayload) -> Option<ChartSpec> {
    let rows = payload.data.as_ref()?;
    let mut spec = ChartSpec::new(ChartKey::TicketDistribution);
    for row in rows {
        let count = row.cantidad.or_zero();
        let tooltip = format!(
            "Ventas: {} ({})",
            format_count(Some(count)),
            format_currency(row.total.value())
        );
        spec.push_point(label_or(&row.rango, ""), count, tooltip);
    }
    Some(spec)
}

/// Pair `labels` with `values`; a missing value counts as zero.
fn series_spec(key: ChartKey, payload: &SeriesPayload, relabel: impl Fn(&str) -> String) -> Option<ChartSpec> {
    let labels = payload.labels.as_ref()?;
    let values = payload.values.as_deref().unwrap_or_default();
    let mut spec = ChartSpec::new(key);
    for (index, label) in labels.iter().enumerate() {
        let value = values.get(index).map(|v| v.or_zero()).unwrap_or(0.0);
        spec.push_point(relabel(label.as_str().unwrap_or_default()), value, format_currency(Some(value)));
    }
    Some(spec)
}

/// Daily sales; ISO date labels become `15 ene`, anything unparseable is shown raw.
pub fn sales_trend_spec(payload: &SeriesPayload) -> Option<ChartSpec> {
    series_spec(ChartKey::SalesTrend, payload, |label| {
        parse_iso_date(label)
            .map(format_day_month)
            .unwrap_or_else(|| label.to_string())
    })
}

pub fn sales_by_weekday_spec(payload: &SeriesPayload) -> Option<ChartSpec> {
    series_spec(ChartKey::SalesByWeekday, payload, str::to_string)
}

fn doughnut_point(spec: &mut ChartSpec, label: String, total: f64) {
    let tooltip = format!("{}: {}", label, format_currency(Some(total)));
    spec.push_point(label, total, tooltip);
}

pub fn purchases_spec(payload: &ProductTotalsPayload) -> Option<ChartSpec> {
    let rows = payload.data.as_ref()?;
    let mut spec = ChartSpec::new(ChartKey::Purchases);
    for row in rows {
        doughnut_point(&mut spec, label_or(&row.producto, ""), row.total.or_zero());
    }
    Some(spec)
}

pub fn expenses_spec(payload: &ExpensesPayload) -> Option<ChartSpec> {
    let rows = payload.por_tipo.as_ref()?;
    let mut spec = ChartSpec::new(ChartKey::Expenses);
    for row in rows {
        doughnut_point(&mut spec, label_or(&row.tipo, "Otros"), row.total.or_zero());
    }
    Some(spec)
}

/// Writes decoded payloads onto the display surface and the chart registry.
///
/// One `bind_*` per endpoint. Each only touches its own targets, so binders
/// of one refresh cycle can run in any order.
pub struct RenderBinder<S: DisplaySurface, R: ChartRenderer> {
    surface: S,
    charts: ChartLifecycleManager<R>,
}

impl<S: DisplaySurface, R: ChartRenderer> RenderBinder<S, R> {
    pub fn new(surface: S, renderer: R) -> Self {
        Self { surface, charts: ChartLifecycleManager::new(renderer) }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn charts(&self) -> &ChartLifecycleManager<R> {
        &self.charts
    }

    fn currency(&self, target: &str, value: Option<f64>) {
        self.surface.set_text(target, &format_currency(value));
    }

    fn counted(&self, target: &str, value: Option<f64>, noun: &str) {
        self.surface.set_text(target, &format!("{} {}", format_count(value), noun));
    }

    pub fn bind_summary(&self, data: &SummaryPayload) {
        self.currency(targets::SALES_TOTAL, data.ventas_total.value());
        self.currency(targets::SALES_CASH, data.ventas_contado.value());
        self.currency(targets::SALES_CREDIT, data.ventas_credito.value());
        self.currency(targets::PURCHASES_TOTAL, data.compras_total.value());
        self.currency(targets::EXPENSES_TOTAL, data.gastos_total.value());
        self.counted(targets::SALES_COUNT, data.num_ventas.value(), "transacciones");
        self.counted(targets::PURCHASES_COUNT, data.num_compras.value(), "compras");
        self.counted(targets::EXPENSES_COUNT, data.num_gastos.value(), "gastos");

        let profit = data.utilidad_estimada;
        self.currency(targets::ESTIMATED_PROFIT, profit.value());
        self.surface
            .set_class(targets::ESTIMATED_PROFIT, targets::CLASS_NEGATIVE, profit.is_negative());
    }

    pub fn bind_stock(&self, data: &StockPayload) {
        let onion_kg = data.cebolla.as_ref().map(|level| level.kg.or_zero());
        let egg_boxes = data.huevo.as_ref().map(|level| level.cajas.or_zero());
        self.surface.set_text(targets::STOCK_ONION, &format_weight(onion_kg));
        self.surface.set_text(targets::STOCK_EGG, &format_boxes(egg_boxes));
    }

    pub fn bind_cash_status(&self, data: &CashStatusPayload) {
        CashStatusAggregator::new(&self.surface).bind(data);
    }

    pub fn bind_average_ticket(&self, data: &AverageTicketPayload) {
        self.currency(targets::AVERAGE_TICKET, data.ticket_promedio.value());
        self.counted(targets::TICKET_COUNT, data.num_transacciones.value(), "transacciones");
        self.surface.set_text(
            targets::AVERAGE_TICKET_SPLIT,
            &format!(
                "Contado: {} | Crédito: {}",
                format_currency(data.contado.value()),
                format_currency(data.credito.value())
            ),
        );
    }

    pub fn bind_collection_rate(&self, data: &CollectionRatePayload) {
        self.surface.set_text(targets::COLLECTION_RATE, &format_percent(data.tasa.value()));
        self.surface.set_text(
            targets::COLLECTION_DETAIL,
            &format!(
                "Cobrado: {} | Pendiente: {}",
                format_currency(data.cobrado.value()),
                format_currency(data.pendiente.value())
            ),
        );
    }

    pub fn bind_monthly_comparison(&self, data: &MonthlyComparisonPayload) {
        let growth = data.crecimiento_porcentaje;
        self.surface.set_text(targets::GROWTH, &format_signed_percent(growth.value()));
        // Exactly zero growth carries neither class.
        self.surface
            .set_class(targets::GROWTH_CARD, targets::CLASS_POSITIVE, growth.is_positive());
        self.surface
            .set_class(targets::GROWTH_CARD, targets::CLASS_NEGATIVE, growth.is_negative());

        let previous = data.mes_anterior.as_ref().map(|m| m.total.or_zero());
        let current = data.mes_actual.as_ref().map(|m| m.total.or_zero());
        self.surface
            .set_text(targets::PREVIOUS_MONTH, &format!("Anterior: {}", format_currency(previous)));
        self.surface
            .set_text(targets::CURRENT_MONTH, &format!("Actual: {}", format_currency(current)));
    }

    pub fn bind_receivables(&self, data: &ReceivablesPayload) {
        self.currency(targets::RECEIVABLES_TOTAL, data.total_pendiente.value());
        self.counted(targets::RECEIVABLES_COUNT, data.num_cuentas.value(), "cuentas");
        self.surface
            .replace_rows(targets::RECEIVABLES_TABLE, &receivable_rows(data));
    }

    pub fn bind_top_products(&self, data: &TopProductsPayload) {
        if let Some(rows) = top_product_rows(data) {
            self.surface.replace_rows(targets::TOP_PRODUCTS_TABLE, &rows);
        }
    }

    pub fn bind_top_clients(&self, data: &TopClientsPayload) {
        if let Some(rows) = top_client_rows(data) {
            self.surface.replace_rows(targets::TOP_CLIENTS_TABLE, &rows);
        }
    }

    fn render_chart(&self, spec: Option<ChartSpec>, source: &str) -> Option<RenderOutcome> {
        match spec {
            Some(spec) => Some(self.charts.render(&spec)),
            None => {
                get_logger().debug(
                    LogComponent::Application("RenderBinder"),
                    &format!("{} carried no dataset, chart left as is", source),
                );
                None
            }
        }
    }

    pub fn bind_sales_by_product(&self, data: &ProductTotalsPayload) -> Option<RenderOutcome> {
        self.render_chart(sales_by_product_spec(data), "sales-by-product")
    }

    pub fn bind_ticket_distribution(&self, data: &TicketDistributionPayload) -> Option<RenderOutcome> {
        self.render_chart(ticket_distribution_spec(data), "ticket-distribution")
    }

    pub fn bind_sales_trend(&self, data: &SeriesPayload) -> Option<RenderOutcome> {
        self.render_chart(sales_trend_spec(data), "sales-trend")
    }

    pub fn bind_sales_by_weekday(&self, data: &SeriesPayload) -> Option<RenderOutcome> {
        self.render_chart(sales_by_weekday_spec(data), "sales-by-weekday")
    }

    pub fn bind_purchases(&self, data: &ProductTotalsPayload) -> Option<RenderOutcome> {
        self.render_chart(purchases_spec(data), "purchases")
    }

    pub fn bind_expenses(&self, data: &ExpensesPayload) -> Option<RenderOutcome> {
        self.render_chart(expenses_spec(data), "expenses")
    }
}
