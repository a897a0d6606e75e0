//! Date normalization and the business-day calendar.
//!
//! Statement and ledger extracts carry dates as ISO text, `DD/MM/YYYY` text
//! or blanks. Parsing never fails hard: an unparseable value becomes
//! `DateValue::Invalid` and the record still flows through matching with the
//! sentinel attached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// Report label for an unparseable date.
pub const INVALID_DATE_LABEL: &str = "Fecha Inválida";
/// Report label for a date past the end of the calendar.
pub const UNAVAILABLE_LABEL: &str = "No Disponible";

/// A parsed date or its invalid sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateValue {
    Valid(NaiveDate),
    Invalid,
}

impl DateValue {
    pub fn is_valid(&self) -> bool {
        matches!(self, DateValue::Valid(_))
    }

    /// Segment used when this date participates in a match key. Invalid
    /// dates contribute an empty segment; both sides build keys the same
    /// way, so two invalid-dated records can still key equal.
    pub fn key_segment(&self) -> String {
        match self {
            DateValue::Valid(d) => d.format("%d/%m/%Y").to_string(),
            DateValue::Invalid => String::new(),
        }
    }

    /// Human-facing rendering for report rows.
    pub fn label(&self) -> String {
        match self {
            DateValue::Valid(d) => d.format("%d/%m/%Y").to_string(),
            DateValue::Invalid => INVALID_DATE_LABEL.to_string(),
        }
    }
}

/// Result of a next-business-day lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessDay {
    Date(NaiveDate),
    /// The source date itself was invalid.
    Invalid,
    /// No calendar entry lies after the source date.
    Unavailable,
}

impl BusinessDay {
    pub fn label(&self) -> String {
        match self {
            BusinessDay::Date(d) => d.format("%d/%m/%Y").to_string(),
            BusinessDay::Invalid => INVALID_DATE_LABEL.to_string(),
            BusinessDay::Unavailable => UNAVAILABLE_LABEL.to_string(),
        }
    }
}

/// Parse a raw cell into a date: ISO first (with or without a time part),
/// then a `DD/MM/YYYY` split. Returns `Invalid` rather than erroring.
pub fn parse_date(cell: &Cell) -> DateValue {
    let Cell::Text(raw) = cell else {
        return DateValue::Invalid;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return DateValue::Invalid;
    }

    // ISO date, possibly followed by a time ("2024-03-01T00:00:00")
    let head = raw.split(['T', ' ']).next().unwrap_or(raw);
    if let Ok(d) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        return DateValue::Valid(d);
    }

    // DD/MM/YYYY fallback
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() == 3
        && let (Ok(day), Ok(month), Ok(year)) = (
            parts[0].trim().parse::<u32>(),
            parts[1].trim().parse::<u32>(),
            parts[2].trim().parse::<i32>(),
        )
        && let Some(d) = NaiveDate::from_ymd_opt(year, month, day)
    {
        return DateValue::Valid(d);
    }

    DateValue::Invalid
}

/// Ordered set of settlement dates for the reconciliation period. Built once
/// per run; invalid source entries are dropped at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessDayCalendar {
    days: Vec<NaiveDate>,
}

impl BusinessDayCalendar {
    /// Build from an unordered list of date-like cells, filtering out
    /// anything that does not parse.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut days: Vec<NaiveDate> = cells
            .iter()
            .filter_map(|c| match parse_date(c) {
                DateValue::Valid(d) => Some(d),
                DateValue::Invalid => None,
            })
            .collect();
        days.sort();
        days.dedup();
        Self { days }
    }

    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut days: Vec<NaiveDate> = dates.into_iter().collect();
        days.sort();
        days.dedup();
        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// First calendar entry strictly after `date`. An invalid input date
    /// yields `Invalid`; a date at or past the calendar end yields
    /// `Unavailable`.
    pub fn next_business_day(&self, date: DateValue) -> BusinessDay {
        let DateValue::Valid(date) = date else {
            return BusinessDay::Invalid;
        };
        match self.days.iter().find(|d| **d > date) {
            Some(d) => BusinessDay::Date(*d),
            None => BusinessDay::Unavailable,
        }
    }
}
