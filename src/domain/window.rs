// src/domain/window.rs

use chrono::{Duration, NaiveDate};

use crate::domain::record::SaleRecord;

/// Length of the "recent" window, in days.
pub const RECENT_DAYS: i64 = 90;

/// How much of a customer's history to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    LastThreeMonths,
}

impl DateWindow {
    /// Parses the `range` query value. Anything unrecognised means `All`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("3months") => DateWindow::LastThreeMonths,
            _ => DateWindow::All,
        }
    }

    pub fn as_query(self) -> &'static str {
        match self {
            DateWindow::All => "all",
            DateWindow::LastThreeMonths => "3months",
        }
    }

    pub fn contains(self, record: &SaleRecord, today: NaiveDate) -> bool {
        match self {
            DateWindow::All => true,
            DateWindow::LastThreeMonths => within_recent(record, today),
        }
    }
}

/// First calendar day still inside the recent window.
pub fn recent_threshold(today: NaiveDate) -> NaiveDate {
    today - Duration::days(RECENT_DAYS)
}

fn within_recent(record: &SaleRecord, today: NaiveDate) -> bool {
    record.sale_day() >= recent_threshold(today)
}

/// Whether a row should be highlighted as recent. Only meaningful when the
/// full history is shown; in the three-month view every row is recent.
pub fn is_recent(window: DateWindow, record: &SaleRecord, today: NaiveDate) -> bool {
    window == DateWindow::All && within_recent(record, today)
}

/// The records of one customer, newest first, restricted to `window`.
pub fn customer_history<'a>(
    records: &'a [SaleRecord],
    phone: &str,
    window: DateWindow,
    today: NaiveDate,
) -> Vec<&'a SaleRecord> {
    let phone = phone.trim();
    let mut history: Vec<&SaleRecord> = records
        .iter()
        .filter(|r| r.phone() == Some(phone))
        .filter(|r| window.contains(r, today))
        .collect();
    history.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
    history
}
