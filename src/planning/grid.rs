//! Month grid for the planning page.
//!
//! Weeks start on Monday. The grid opens with enough blank cells to put
//! the 1st under its weekday column, followed by one cell per day of
//! the month holding that day's appointments in stored order.
use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use super::appointment::Appointment;

/// A normalized year and zero-based month (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Carry month overflow into the year, so `(2025, 12)` is January
    /// 2026 and `(2025, -1)` is December 2024. Returns `None` when the
    /// resulting year can't be represented as a calendar date.
    pub fn normalize(year: i32, month: i32) -> Option<Self> {
        let year = year.checked_add(month.div_euclid(12))?;
        let month = month.rem_euclid(12) as u32;
        NaiveDate::from_ymd_opt(year, month + 1, 1)?;
        Some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // Validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Blank cells before the 1st, between 0 (Monday) and 6 (Sunday)
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().number_from_monday() - 1
    }

    /// The `YYYY-MM-DD` string appointments are stored under
    pub fn date_key(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month + 1, day)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::normalize(self.year, self.month as i32 - 1)
    }

    pub fn next(&self) -> Option<Self> {
        Self::normalize(self.year, self.month as i32 + 1)
    }
}

/// Number of days in a zero-based month of the Gregorian calendar
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// `None` for the blank cells before the 1st
    pub day: Option<u32>,
    pub appointments: Vec<Appointment>,
    pub is_today: bool,
}

impl DayCell {
    fn blank() -> Self {
        Self {
            day: None,
            appointments: vec![],
            is_today: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.day == Some(day))
    }

    /// Build the grid relative to the local clock
    pub fn for_today(month: YearMonth, appointments: &[Appointment]) -> Self {
        build_month_grid(month, appointments, Local::now().date_naive())
    }
}

/// Lay out `month` and bucket `appointments` by exact date string.
/// Records whose date doesn't match any day of the month, including
/// empty or malformed dates, are left out.
pub fn build_month_grid(
    month: YearMonth,
    appointments: &[Appointment],
    today: NaiveDate,
) -> MonthGrid {
    let leading_blanks = month.leading_blanks();
    let days = month.days_in_month();

    let mut cells: Vec<DayCell> = (0..leading_blanks).map(|_| DayCell::blank()).collect();
    cells.extend((1..=days).map(|day| DayCell {
        day: Some(day),
        appointments: vec![],
        is_today: today.year() == month.year
            && today.month0() == month.month
            && today.day() == day,
    }));

    let index_by_key: HashMap<String, usize> = (1..=days)
        .map(|day| (month.date_key(day), (leading_blanks + day - 1) as usize))
        .collect();

    for appt in appointments {
        if let Some(&idx) = index_by_key.get(appt.date.as_str()) {
            cells[idx].appointments.push(appt.clone());
        }
    }

    MonthGrid {
        year: month.year,
        month: month.month,
        leading_blanks,
        days_in_month: days,
        cells,
    }
}
