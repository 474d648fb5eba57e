#![forbid(unsafe_code)]

//! Date formatting seam.
//!
//! Widgets never look inside a date: they hand it to a [`DateAdapter`] and
//! get display strings back. [`ChronoAdapter`] is the stock implementation
//! over [`chrono::NaiveDate`].

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};

/// Display formats a widget may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// Fully qualified, human readable (`October 18, 2026`).
    FullDate,
    /// Day-of-month number without padding (`18`).
    DayOfMonth,
}

pub trait DateAdapter {
    type Date: Clone;

    fn format(&self, date: &Self::Date, format: DateFormat) -> String;
}

/// `chrono`-backed adapter for [`NaiveDate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoAdapter {
    full_date: String,
}

impl ChronoAdapter {
    pub const DEFAULT_FULL_DATE: &'static str = "%B %-d, %Y";
    const FALLBACK_FULL_DATE: &'static str = "%Y-%m-%d";

    #[must_use]
    pub fn new() -> Self {
        Self {
            full_date: Self::DEFAULT_FULL_DATE.to_string(),
        }
    }

    /// Use a custom `strftime` pattern for [`DateFormat::FullDate`].
    ///
    /// A pattern chrono cannot render falls back to ISO `%Y-%m-%d`.
    #[must_use]
    pub fn with_full_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.full_date = pattern.into();
        self
    }

    fn full_date(&self, date: &NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.full_date)).is_ok() {
            return out;
        }
        date.format(Self::FALLBACK_FULL_DATE).to_string()
    }
}

impl Default for ChronoAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DateAdapter for ChronoAdapter {
    type Date = NaiveDate;

    fn format(&self, date: &NaiveDate, format: DateFormat) -> String {
        match format {
            DateFormat::FullDate => self.full_date(date),
            DateFormat::DayOfMonth => date.day().to_string(),
        }
    }
}
