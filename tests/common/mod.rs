#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap, HashSet};

use ova_dashboard_wasm::domain::{
    chart::{ChartRenderer, ChartSpec},
    dashboard::{DashboardApi, DisplaySurface, Endpoint, TableRow},
    errors::{FetchError, FetchResult, UiError, UiResult},
};
use strum::IntoEnumIterator;

/// Canned transport keyed by endpoint path; records every requested URL.
#[derive(Default)]
pub struct StubApi {
    responses: RefCell<HashMap<String, FetchResult<String>>>,
    pub requests: RefCell<Vec<String>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every endpoint answers with its sample body.
    pub fn healthy() -> Self {
        let mut api = Self::new();
        for endpoint in Endpoint::iter() {
            api = api.respond(endpoint, sample_body(endpoint));
        }
        api
    }

    pub fn respond(mut self, endpoint: Endpoint, body: &str) -> Self {
        self.responses.get_mut().insert(endpoint.path().to_string(), Ok(body.to_string()));
        self
    }

    pub fn fail(mut self, endpoint: Endpoint, error: FetchError) -> Self {
        self.responses.get_mut().insert(endpoint.path().to_string(), Err(error));
        self
    }

    /// Make `endpoint` fail from the next request on, after the stub was handed out.
    pub fn start_failing(&self, endpoint: Endpoint, error: FetchError) {
        self.responses.borrow_mut().insert(endpoint.path().to_string(), Err(error));
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// The recorded URL for `endpoint`, if it was requested.
    pub fn url_of(&self, endpoint: Endpoint) -> Option<String> {
        self.requests
            .borrow()
            .iter()
            .find(|url| url.split('?').next() == Some(endpoint.path()))
            .cloned()
    }
}

impl DashboardApi for StubApi {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        self.requests.borrow_mut().push(url.to_string());
        let path = url.split('?').next().unwrap_or_default();
        self.responses.borrow().get(path).cloned().unwrap_or(Err(FetchError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        }))
    }
}

/// In-memory display surface. Every target exists unless `only` restricts it.
#[derive(Default)]
pub struct MemorySurface {
    texts: RefCell<HashMap<String, String>>,
    classes: RefCell<HashMap<String, BTreeSet<String>>>,
    tables: RefCell<HashMap<String, Vec<TableRow>>>,
    pub writes: Cell<usize>,
    only: Option<HashSet<String>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, target: &str) -> Option<String> {
        self.texts.borrow().get(target).cloned()
    }

    pub fn has_class(&self, target: &str, class: &str) -> bool {
        self.classes
            .borrow()
            .get(target)
            .is_some_and(|set| set.contains(class))
    }

    pub fn rows(&self, table: &str) -> Vec<TableRow> {
        self.tables.borrow().get(table).cloned().unwrap_or_default()
    }

    pub fn row_summaries(&self, table: &str) -> Vec<String> {
        self.rows(table).iter().map(TableRow::summary).collect()
    }

    fn exists(&self, target: &str) -> bool {
        self.only.as_ref().is_none_or(|set| set.contains(target))
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&self, target: &str, text: &str) {
        if self.exists(target) {
            self.writes.set(self.writes.get() + 1);
            self.texts.borrow_mut().insert(target.to_string(), text.to_string());
        }
    }

    fn set_class(&self, target: &str, class: &str, enabled: bool) {
        if !self.exists(target) {
            return;
        }
        let mut classes = self.classes.borrow_mut();
        let set = classes.entry(target.to_string()).or_default();
        if enabled {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }

    fn replace_rows(&self, table: &str, rows: &[TableRow]) {
        if self.exists(table) {
            self.tables.borrow_mut().insert(table.to_string(), rows.to_vec());
        }
    }

    fn has_target(&self, target: &str) -> bool {
        self.exists(target)
    }
}

/// Renderer that counts live instances. Canvases exist unless listed as missing.
#[derive(Default)]
pub struct StubRenderer {
    pub alive: Cell<usize>,
    pub constructed: Cell<usize>,
    pub missing_canvases: RefCell<HashSet<String>>,
    pub last_canvas: RefCell<Option<String>>,
    pub last_spec: RefCell<Option<ChartSpec>>,
    pub refuse: Cell<bool>,
}

impl StubRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_canvases(ids: &[&str]) -> Self {
        let renderer = Self::default();
        renderer
            .missing_canvases
            .borrow_mut()
            .extend(ids.iter().map(|id| id.to_string()));
        renderer
    }
}

impl ChartRenderer for StubRenderer {
    type Instance = usize;

    fn canvas_exists(&self, canvas_id: &str) -> bool {
        !self.missing_canvases.borrow().contains(canvas_id)
    }

    fn construct(&self, canvas_id: &str, spec: &ChartSpec) -> UiResult<usize> {
        if self.refuse.get() {
            return Err(UiError::ChartConstruction("refused".to_string()));
        }
        self.alive.set(self.alive.get() + 1);
        self.constructed.set(self.constructed.get() + 1);
        *self.last_canvas.borrow_mut() = Some(canvas_id.to_string());
        *self.last_spec.borrow_mut() = Some(spec.clone());
        Ok(self.constructed.get())
    }

    fn dispose(&self, _instance: usize) {
        self.alive.set(self.alive.get() - 1);
    }
}

pub fn sample_body(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Summary => {
            r#"{"ventas_total": 152340.5, "ventas_contado": 100000, "ventas_credito": 52340.5,
                "compras_total": 80000, "gastos_total": 12000, "num_ventas": 321,
                "num_compras": 45, "num_gastos": 12, "utilidad_estimada": 60340.5}"#
        }
        Endpoint::Stock => r#"{"cebolla": {"kg": 15300}, "huevo": {"cajas": 42}}"#,
        Endpoint::CashStatus => {
            r#"{"operadores": [{"nombre": "PIPO", "saldo": 1500}, {"nombre": "RICHARD", "saldo": 200}],
                "movimientos_dia": {"COBRANZA VENTAS AL CONTADO": 900},
                "saldo_total": 1700, "fecha": "2024-01-15"}"#
        }
        Endpoint::AverageTicket => {
            r#"{"ticket_promedio": 474.58, "num_transacciones": 321, "contado": 500, "credito": 420}"#
        }
        Endpoint::CollectionRate => {
            r#"{"tasa": 87.25, "cobrado": 45000, "pendiente": 6600, "total_creditos": 51600}"#
        }
        Endpoint::MonthlyComparison => {
            r#"{"crecimiento_porcentaje": 12.34, "mes_actual": {"total": 152340.5},
                "mes_anterior": {"total": 135600}}"#
        }
        Endpoint::Receivables => {
            r#"{"total_pendiente": 6600, "num_cuentas": 2, "detalle": [
                {"cliente": "ABARROTES LUPITA", "saldo": 5000, "fecha": "2023-12-01", "dias_vencidos": 45},
                {"cliente": "DON CHUY", "saldo": 1600, "fecha": "2024-01-10", "dias_vencidos": 5}]}"#
        }
        Endpoint::TopProducts => {
            r#"{"data": [{"producto": "CEBOLLA BLANCA", "total": 98000, "kg_netos": 12000, "cajas": 0},
                {"producto": "HUEVO ROJO", "total": 54340.5, "kg_netos": 0, "cajas": 310}]}"#
        }
        Endpoint::SalesByProduct => {
            r#"{"data": [{"producto": "CEBOLLA BLANCA", "total": 98000}, {"producto": null, "total": 54340.5}]}"#
        }
        Endpoint::TicketDistribution => {
            r#"{"data": [{"rango": "$0-500", "cantidad": 200, "total": 40000},
                {"rango": "$500-1000", "cantidad": 121, "total": 112340.5}]}"#
        }
        Endpoint::SalesTrend => {
            r#"{"labels": ["2024-01-01", "2024-01-02"], "values": [5000, 7250.5]}"#
        }
        Endpoint::SalesByWeekday => {
            r#"{"labels": ["Lunes", "Martes"], "values": [20000, 18000]}"#
        }
        Endpoint::Purchases => {
            r#"{"data": [{"producto": "CEBOLLA", "total": 50000}, {"producto": "HUEVO", "total": 30000}]}"#
        }
        Endpoint::Expenses => {
            r#"{"por_tipo": [{"tipo": "COMBUSTIBLE", "total": 8000}, {"tipo": null, "total": 4000}]}"#
        }
        Endpoint::TopClients => {
            r#"{"data": [{"cliente": "ABARROTES LUPITA", "total": 30000, "compras": 14}]}"#
        }
    }
}
