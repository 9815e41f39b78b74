//! Selectors of every display target the binders write to.

// Summary tiles
pub const SALES_TOTAL: &str = "#ventas-total";
pub const SALES_CASH: &str = "#ventas-contado";
pub const SALES_CREDIT: &str = "#ventas-credito";
pub const PURCHASES_TOTAL: &str = "#compras-total";
pub const EXPENSES_TOTAL: &str = "#gastos-total";
pub const SALES_COUNT: &str = "#num-ventas";
pub const PURCHASES_COUNT: &str = "#num-compras";
pub const EXPENSES_COUNT: &str = "#num-gastos";
pub const ESTIMATED_PROFIT: &str = "#utilidad-estimada";

// Stock
pub const STOCK_ONION: &str = "#stock-cebolla";
pub const STOCK_EGG: &str = "#stock-huevo";

// Average ticket
pub const AVERAGE_TICKET: &str = "#ticket-promedio";
pub const TICKET_COUNT: &str = "#num-tickets";
pub const AVERAGE_TICKET_SPLIT: &str = "#ticket-detalle";

// Collection rate
pub const COLLECTION_RATE: &str = "#tasa-cobranza";
pub const COLLECTION_DETAIL: &str = "#cobranza-detalle";

// Month-over-month growth
pub const GROWTH: &str = "#crecimiento";
pub const GROWTH_CARD: &str = "#growth-card";
pub const PREVIOUS_MONTH: &str = "#mes-anterior-detail";
pub const CURRENT_MONTH: &str = "#mes-actual-detail";

// Receivables
pub const RECEIVABLES_TOTAL: &str = "#por-cobrar";
pub const RECEIVABLES_COUNT: &str = "#num-cuentas";
pub const RECEIVABLES_TABLE: &str = "#table-receivables tbody";

// Ranked tables
pub const TOP_PRODUCTS_TABLE: &str = "#table-top-products tbody";
pub const TOP_CLIENTS_TABLE: &str = "#table-clients tbody";

// Cash registers
pub const CASH_TOTAL: &str = "#cash-total";
pub const CASH_TOTAL_CONTAINER: &str = "#cash-total-container";
pub const CASH_DATE: &str = "#cash-date-indicator";
pub const MOVEMENT_CASH_COLLECTIONS: &str = "#mov-cobranza-contado";
pub const MOVEMENT_CREDIT_COLLECTIONS: &str = "#mov-cobranza-credito";
pub const MOVEMENT_EXPENSES: &str = "#mov-gastos";
pub const MOVEMENT_TRANSFERS: &str = "#mov-entre-cajas";

// Loading overlay
pub const LOADING: &str = "#loading";

// Style classes
pub const CLASS_NEGATIVE: &str = "negative";
pub const CLASS_POSITIVE: &str = "positive";
pub const CLASS_DEFICIT: &str = "deficit";
pub const CLASS_HIDDEN: &str = "hidden";
