//! The shared date-range filter and its per-refresh snapshot.

use chrono::{Datelike, NaiveDate};

pub const START_DATE_PARAM: &str = "start_date";
pub const END_DATE_PARAM: &str = "end_date";

/// Parse an `<input type="date">` value. Empty or malformed input means "no bound".
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Session-long filter record. Only `apply` and `reset` mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl FilterState {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self { start_date, end_date }
    }

    /// Startup default: first day of `today`'s month through `today`.
    pub fn current_month(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        Self::new(Some(first), Some(today))
    }

    /// Copy the raw control values; empty strings clear the bound.
    pub fn apply(&mut self, start_input: &str, end_input: &str) {
        self.start_date = parse_iso_date(start_input);
        self.end_date = parse_iso_date(end_input);
    }

    pub fn reset(&mut self) {
        self.start_date = None;
        self.end_date = None;
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Immutable copy handed to one refresh cycle.
    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot { start_date: self.start_date, end_date: self.end_date }
    }
}

/// What the loaders of a single refresh cycle see. Later filter changes do not
/// reach a cycle that is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSnapshot {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterSnapshot {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// `start_date` then `end_date`, each only when set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(start) = self.start_date {
            pairs.push((START_DATE_PARAM, start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push((END_DATE_PARAM, end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }

    /// Encoded query string without the leading `?`; empty when unbounded.
    pub fn query_string(&self) -> String {
        serde_urlencoded::to_string(self.query_pairs()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn current_month_starts_on_the_first() {
        let state = FilterState::current_month(date(2024, 3, 17));
        assert_eq!(state.start_date(), Some(date(2024, 3, 1)));
        assert_eq!(state.end_date(), Some(date(2024, 3, 17)));
    }

    #[test]
    fn apply_treats_empty_inputs_as_unset() {
        let mut state = FilterState::current_month(date(2024, 3, 17));
        state.apply("2024-01-05", "");
        assert_eq!(state.start_date(), Some(date(2024, 1, 5)));
        assert_eq!(state.end_date(), None);
    }

    #[test]
    fn reset_clears_both_bounds() {
        let mut state = FilterState::current_month(date(2024, 3, 17));
        state.reset();
        assert!(state.snapshot().is_unbounded());
    }

    #[test]
    fn query_omits_unset_fields() {
        let snapshot = FilterSnapshot { start_date: None, end_date: Some(date(2024, 1, 31)) };
        assert_eq!(snapshot.query_pairs(), vec![("end_date", "2024-01-31".to_string())]);
        assert_eq!(snapshot.query_string(), "end_date=2024-01-31");
        assert!(FilterSnapshot::unbounded().query_pairs().is_empty());
        assert_eq!(FilterSnapshot::unbounded().query_string(), "");
    }

    #[test]
    fn snapshot_is_detached_from_later_changes() {
        let mut state = FilterState::current_month(date(2024, 3, 17));
        let snapshot = state.snapshot();
        state.reset();
        assert_eq!(snapshot.start_date, Some(date(2024, 3, 1)));
    }
}
