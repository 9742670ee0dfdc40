//! Calendar range from the epoch through the future horizon.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

/// Date format used for record file names, URLs and rollup keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).with_context(|| format!("invalid date: {s}"))
}

/// Inclusive range of days `[epoch, today + future_days]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(epoch: NaiveDate, today: NaiveDate, future_days: u32) -> Self {
        let end = today
            .checked_add_days(Days::new(u64::from(future_days)))
            .unwrap_or(NaiveDate::MAX);
        Self { start: epoch, end }
    }

    /// Number of days in the range; 0 when the horizon precedes the epoch.
    pub fn len(&self) -> usize {
        let span = (self.end - self.start).num_days();
        if span < 0 {
            0
        } else {
            span as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<NaiveDate> {
        (!self.is_empty()).then_some(self.start)
    }

    pub fn last(&self) -> Option<NaiveDate> {
        (!self.is_empty()).then_some(self.end)
    }

    /// Days in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
