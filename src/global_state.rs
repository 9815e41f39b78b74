use leptos::*;
use once_cell::sync::OnceCell;

/// Page-wide reactive state shared by the logger bridge and the view.
pub struct Globals {
    /// Lines mirrored into the in-page debug console, oldest first.
    pub debug_logs: RwSignal<Vec<String>>,
    pub logs_paused: RwSignal<bool>,
    /// Cycles currently in flight; drives the refresh button state.
    pub refreshes_in_flight: RwSignal<usize>,
    /// One-line outcome of the last settled cycle.
    pub last_refresh: RwSignal<Option<String>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        debug_logs: create_rw_signal(Vec::new()),
        logs_paused: create_rw_signal(false),
        refreshes_in_flight: create_rw_signal(0),
        last_refresh: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub debug_logs => debug_logs: Vec<String>,
    pub logs_paused => logs_paused: bool,
    pub refreshes_in_flight => refreshes_in_flight: usize,
    pub last_refresh => last_refresh: Option<String>,
}
