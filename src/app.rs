use leptos::html::Input;
use leptos::*;
use std::rc::Rc;

use crate::{
    domain::logging::{LogComponent, LogEntry, Logger, get_logger},
    global_state::{debug_logs, last_refresh, logs_paused, refreshes_in_flight},
    infrastructure::ConsoleLogger,
    presentation::{BrowserDashboard, mark_refresh_settled, mark_refresh_started, page_dashboard},
    time_utils::date_input_value,
};

/// 🌉 Bridge logger: forwards to the browser console and mirrors each line
/// into the debug console signal.
pub struct LeptosLogger {
    console: ConsoleLogger,
    capacity: usize,
}

impl LeptosLogger {
    pub fn new(console: ConsoleLogger, capacity: usize) -> Self {
        Self { console, capacity }
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.console.min_level() {
            return;
        }
        let line = entry.format_line();
        self.console.log(entry);

        if logs_paused().get_untracked() {
            return;
        }
        let capacity = self.capacity;
        debug_logs().update(|lines| {
            lines.push(line);
            let overflow = lines.len().saturating_sub(capacity);
            if overflow > 0 {
                lines.drain(..overflow);
            }
        });
    }
}

#[derive(Clone, Copy)]
enum FilterAction {
    Refresh,
    Apply,
    Reset,
}

fn run_refresh(dashboard: Rc<BrowserDashboard>, action: FilterAction, start: String, end: String) {
    spawn_local(async move {
        mark_refresh_started();
        let report = match action {
            FilterAction::Refresh => dashboard.refresh().await,
            FilterAction::Apply => dashboard.apply_filters(&start, &end).await,
            FilterAction::Reset => dashboard.reset_filters().await,
        };
        mark_refresh_settled(&report);
    });
}

/// 📊 Root component: renders the dashboard skeleton and drives refreshes.
#[component]
pub fn App() -> impl IntoView {
    let dashboard = match page_dashboard() {
        Ok(dashboard) => dashboard,
        Err(e) => {
            get_logger().error(
                LogComponent::Presentation("App"),
                &format!("❌ Dashboard could not start: {}", e),
            );
            return view! { <div class="fatal">{format!("No se pudo iniciar el tablero: {}", e)}</div> }
                .into_view();
        }
    };

    let initial = dashboard.filter();
    let start_ref = create_node_ref::<Input>();
    let end_ref = create_node_ref::<Input>();

    // First load once the skeleton is in the DOM.
    {
        let dashboard = Rc::clone(&dashboard);
        request_animation_frame(move || {
            get_logger().info(LogComponent::Presentation("App"), "🚀 Initial dashboard load");
            run_refresh(dashboard, FilterAction::Refresh, String::new(), String::new());
        });
    }

    let on_apply = {
        let dashboard = Rc::clone(&dashboard);
        move |_| {
            let start = start_ref.get().map(|input| input.value()).unwrap_or_default();
            let end = end_ref.get().map(|input| input.value()).unwrap_or_default();
            run_refresh(Rc::clone(&dashboard), FilterAction::Apply, start, end);
        }
    };

    let on_reset = {
        let dashboard = Rc::clone(&dashboard);
        move |_| {
            for input in [start_ref.get(), end_ref.get()].into_iter().flatten() {
                input.set_value("");
            }
            run_refresh(Rc::clone(&dashboard), FilterAction::Reset, String::new(), String::new());
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"OVA Dashboard"</h1>
                <div class="filters">
                    <label>"Desde"
                        <input type="date" id="start-date" node_ref=start_ref
                            value=date_input_value(initial.start_date())/>
                    </label>
                    <label>"Hasta"
                        <input type="date" id="end-date" node_ref=end_ref
                            value=date_input_value(initial.end_date())/>
                    </label>
                    <button id="apply-filters" on:click=on_apply>"Aplicar"</button>
                    <button id="reset-filters" on:click=on_reset>"Limpiar"</button>
                </div>
                <RefreshStatus/>
            </header>

            <KpiTiles/>
            <CashRegisters/>
            <Tables/>
            <Charts/>

            <div id="loading" class="loading-overlay hidden">
                <div class="spinner"></div>
                <span>"Cargando..."</span>
            </div>
            <DebugConsole/>
        </div>
    }
    .into_view()
}

#[component]
fn RefreshStatus() -> impl IntoView {
    view! {
        <div class="refresh-status">
            {move || if refreshes_in_flight().get() > 0 {
                "🔄 Actualizando...".to_string()
            } else {
                last_refresh().get().unwrap_or_default()
            }}
        </div>
    }
}

#[component]
fn Tile(
    title: &'static str,
    value_id: &'static str,
    #[prop(optional)] detail_id: Option<&'static str>,
    #[prop(optional)] card_id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="kpi-card" id=card_id>
            <span class="kpi-title">{title}</span>
            <span class="kpi-value" id=value_id>"-"</span>
            {detail_id.map(|id| view! { <span class="kpi-detail" id=id></span> })}
        </div>
    }
}

#[component]
fn KpiTiles() -> impl IntoView {
    view! {
        <section class="kpi-grid">
            <Tile title="Ventas" value_id="ventas-total" detail_id="num-ventas"/>
            <Tile title="Contado" value_id="ventas-contado"/>
            <Tile title="Crédito" value_id="ventas-credito"/>
            <Tile title="Compras" value_id="compras-total" detail_id="num-compras"/>
            <Tile title="Gastos" value_id="gastos-total" detail_id="num-gastos"/>
            <Tile title="Utilidad estimada" value_id="utilidad-estimada"/>
            <Tile title="Cebolla" value_id="stock-cebolla"/>
            <Tile title="Huevo" value_id="stock-huevo"/>
            <Tile title="Ticket promedio" value_id="ticket-promedio" detail_id="num-tickets"/>
            <div class="kpi-detail" id="ticket-detalle"></div>
            <Tile title="Tasa de cobranza" value_id="tasa-cobranza" detail_id="cobranza-detalle"/>
            <Tile title="Crecimiento" value_id="crecimiento" detail_id="mes-anterior-detail" card_id="growth-card"/>
            <div class="kpi-detail" id="mes-actual-detail"></div>
            <Tile title="Por cobrar" value_id="por-cobrar" detail_id="num-cuentas"/>
        </section>
    }
}

#[component]
fn OperatorCard(id: &'static str, name: &'static str) -> impl IntoView {
    view! {
        <div class="operator-card" id=id>
            <span class="operator-name">{name}</span>
            <span class="operator-balance">"$0.00"</span>
        </div>
    }
}

#[component]
fn CashRegisters() -> impl IntoView {
    view! {
        <section class="cash-status">
            <h2>"Cajas" <small id="cash-date-indicator"></small></h2>
            <div class="operators">
                <OperatorCard id="cash-pipo" name="Pipo"/>
                <OperatorCard id="cash-richard" name="Richard"/>
                <OperatorCard id="cash-bodega" name="Bodega 55"/>
                <OperatorCard id="cash-diego" name="Diego y Emilio"/>
            </div>
            <div class="movements">
                <div>"Cobranza contado" <span id="mov-cobranza-contado">"$0.00"</span></div>
                <div>"Cobranza crédito" <span id="mov-cobranza-credito">"$0.00"</span></div>
                <div>"Gastos" <span id="mov-gastos">"$0.00"</span></div>
                <div>"Entre cajas" <span id="mov-entre-cajas">"$0.00"</span></div>
            </div>
            <div class="cash-total" id="cash-total-container">
                "Total" <span id="cash-total">"$0.00"</span>
            </div>
        </section>
    }
}

#[component]
fn DataTable(id: &'static str, headers: Vec<&'static str>) -> impl IntoView {
    view! {
        <table class="data-table" id=id>
            <thead>
                <tr>{headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
            </thead>
            <tbody></tbody>
        </table>
    }
}

#[component]
fn Tables() -> impl IntoView {
    view! {
        <section class="tables">
            <DataTable id="table-top-products" headers=vec!["#", "Producto", "Total", "Cantidad"]/>
            <DataTable id="table-clients" headers=vec!["#", "Cliente", "Total", "Compras"]/>
            <DataTable id="table-receivables" headers=vec!["Cliente", "Saldo", "Fecha", "Días"]/>
        </section>
    }
}

#[component]
fn Charts() -> impl IntoView {
    let canvases = [
        ("chart-by-product", "Ventas por producto"),
        ("chart-ticket-distribution", "Distribución de tickets"),
        ("chart-trend", "Tendencia de ventas"),
        ("chart-by-weekday", "Ventas por día"),
        ("chart-purchases", "Compras"),
        ("chart-expenses", "Gastos por tipo"),
    ];
    view! {
        <section class="charts">
            {canvases
                .into_iter()
                .map(|(id, title)| view! {
                    <div class="chart-card">
                        <h3>{title}</h3>
                        <div class="chart-body"><canvas id=id></canvas></div>
                    </div>
                })
                .collect_view()}
        </section>
    }
}

/// 🐛 Collapsible console fed by [`LeptosLogger`].
#[component]
fn DebugConsole() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let logs = debug_logs();
    let paused = logs_paused();

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <button class="debug-btn" on:click=move |_| set_open.update(|o| *o = !*o)>
                    {move || if open.get() { "▾ Consola" } else { "▸ Consola" }}
                </button>
                <button class="debug-btn" on:click=move |_| {
                    paused.update(|p| *p = !*p);
                    let message = if paused.get_untracked() { "🛑 Logging paused" } else { "▶️ Logging resumed" };
                    get_logger().info(LogComponent::Presentation("DebugConsole"), message);
                }>
                    {move || if paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                </button>
                <button class="debug-btn" on:click=move |_| logs.set(Vec::new())>"🗑️ Clear"</button>
            </div>
            <Show when=move || open.get()>
                <div class="debug-log">
                    <For
                        each=move || logs.get().into_iter().enumerate()
                        key=|(index, line)| (*index, line.clone())
                        children=move |(_, line)| view! { <div class="log-line">{line}</div> }
                    />
                </div>
            </Show>
        </div>
    }
}
