use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::domain::{
    dashboard::{Amount, CashStatusPayload, DisplaySurface, OperatorSlot, targets},
    filter::parse_iso_date,
    formatting::{format_currency, format_day_month_year},
    logging::{LogComponent, get_logger},
};

/// Binds the multi-operator cash position feed.
pub struct CashStatusAggregator<'a, S: DisplaySurface> {
    surface: &'a S,
}

impl<'a, S: DisplaySurface> CashStatusAggregator<'a, S> {
    pub fn new(surface: &'a S) -> Self {
        Self { surface }
    }

    /// Map feed entries onto the four known slots. Unknown names are dropped;
    /// a repeated name keeps its last balance.
    pub fn resolve_slots(payload: &CashStatusPayload) -> HashMap<OperatorSlot, Amount> {
        let mut slots = HashMap::new();
        for operator in payload.operadores.iter().flatten() {
            let name = operator.nombre.as_str().unwrap_or_default();
            match OperatorSlot::from_source_name(name) {
                Some(slot) => {
                    slots.insert(slot, operator.saldo);
                }
                None => get_logger().debug(
                    LogComponent::Application("CashStatus"),
                    &format!("Ignoring operator without a display slot: '{}'", name),
                ),
            }
        }
        slots
    }

    pub fn bind(&self, payload: &CashStatusPayload) {
        // Without an operator list the feed carries nothing to show.
        if payload.operadores.is_none() {
            return;
        }

        let balances = Self::resolve_slots(payload);
        for slot in OperatorSlot::iter() {
            // Slots missing from this feed are reset rather than left stale.
            let balance = balances.get(&slot).copied().unwrap_or(Amount::ZERO);
            self.bind_operator(slot, balance);
        }

        if let Some(movements) = &payload.movimientos_dia {
            let figures = [
                (targets::MOVEMENT_CASH_COLLECTIONS, movements.cash_collections),
                (targets::MOVEMENT_CREDIT_COLLECTIONS, movements.credit_collections),
                (targets::MOVEMENT_EXPENSES, movements.expenses_paid),
                (targets::MOVEMENT_TRANSFERS, movements.register_transfers),
            ];
            for (target, amount) in figures {
                self.surface.set_text(target, &format_currency(Some(amount.or_zero())));
            }
        }

        self.bind_total(payload.saldo_total);

        if let Some(raw) = payload.fecha.as_str() {
            match parse_iso_date(raw) {
                Some(date) => self
                    .surface
                    .set_text(targets::CASH_DATE, &format!("Datos del {}", format_day_month_year(date))),
                None => get_logger().warn(
                    LogComponent::Application("CashStatus"),
                    &format!("Unreadable as-of date in cash status: '{}'", raw),
                ),
            }
        }
    }

    fn bind_operator(&self, slot: OperatorSlot, balance: Amount) {
        self.surface.set_text(slot.balance_target(), &format_currency(balance.value()));
        self.surface
            .set_class(slot.card_target(), targets::CLASS_NEGATIVE, balance.is_negative());
    }

    /// The total comes from the feed as-is; it is not re-summed from the slots.
    fn bind_total(&self, total: Amount) {
        let deficit = total.is_negative();
        self.surface.set_text(targets::CASH_TOTAL, &format_currency(total.value()));
        self.surface.set_class(targets::CASH_TOTAL, targets::CLASS_NEGATIVE, deficit);
        self.surface
            .set_class(targets::CASH_TOTAL_CONTAINER, targets::CLASS_DEFICIT, deficit);
    }
}
