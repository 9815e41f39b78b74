use chrono::{Local, NaiveDate};

/// Today's date on the browser's local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Value for an `<input type="date">`; empty when unset.
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}
