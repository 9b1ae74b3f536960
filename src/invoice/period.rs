use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::error::{InvoiceError, Result};
use crate::invoice::format::format_date;

/// Month arithmetic on calendar dates.
pub trait MonthBoundaries {
    fn start_of_previous_month(&self) -> Option<Self>
    where
        Self: Sized;

    fn start_of_next_month(&self) -> Option<Self>
    where
        Self: Sized;

    fn end_of_month(&self) -> Option<Self>
    where
        Self: Sized;
}

impl MonthBoundaries for NaiveDate {
    fn start_of_previous_month(&self) -> Option<Self> {
        if self.month() == 1 {
            NaiveDate::from_ymd_opt(self.year() - 1, 12, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year(), self.month() - 1, 1)
        }
    }

    fn start_of_next_month(&self) -> Option<Self> {
        if self.month() == 12 {
            NaiveDate::from_ymd_opt(self.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year(), self.month() + 1, 1)
        }
    }

    fn end_of_month(&self) -> Option<Self> {
        let last_day = self
            .start_of_next_month()
            .and_then(|d| d.checked_sub_days(Days::new(1)))?
            .day();
        self.with_day(last_day)
    }
}

/// Parse a due date given as `YYYYMMDD`.
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    let invalid = || InvoiceError::InvalidDateFormat(input.to_string());

    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = input[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = input[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = input[6..8].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// The calendar month billed by an invoice: the month before the due date's month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BillingPeriod {
    pub fn for_due_date(due_date: NaiveDate) -> Result<Self> {
        let out_of_range = || InvoiceError::InvalidDateFormat(due_date.format("%Y%m%d").to_string());

        let start = due_date.start_of_previous_month().ok_or_else(out_of_range)?;
        let end = start.end_of_month().ok_or_else(out_of_range)?;

        Ok(Self { start, end })
    }

    pub fn from_due_date_str(due_date: &str) -> Result<Self> {
        Self::for_due_date(parse_due_date(due_date)?)
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", format_date(self.start), format_date(self.end))
    }
}
