//! Bornes des sélecteurs année/mois et libellés polonais.

use crate::schedule::CalendarError;
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

pub const YEARS_BEFORE: i32 = 5;
pub const YEARS_AFTER: i32 = 10;

pub const MONTH_LABELS: [&str; 12] = [
    "Styczeń",
    "Luty",
    "Marzec",
    "Kwiecień",
    "Maj",
    "Czerwiec",
    "Lipiec",
    "Sierpień",
    "Wrzesień",
    "Październik",
    "Listopad",
    "Grudzień",
];

/// En-têtes de colonnes, lundi d'abord.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Pn", "Wt", "Sr", "Cz", "Pt", "Sb", "Nd"];

/// 16 années : `current - 5 ..= current + 10`.
pub fn year_range(current_year: i32) -> RangeInclusive<i32> {
    (current_year - YEARS_BEFORE)..=(current_year + YEARS_AFTER)
}

pub fn month_label(month: u32) -> Result<&'static str, CalendarError> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_LABELS.get(idx as usize))
        .copied()
        .ok_or(CalendarError::InvalidMonth(month))
}

/// Mois affiché, validé contre les bornes des sélecteurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub year: i32,
    pub month: u32,
}

impl Selection {
    /// Sélection initiale : le mois courant.
    pub fn current(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Complète les valeurs absentes avec `today` puis valide.
    pub fn resolve(
        year: Option<i32>,
        month: Option<u32>,
        today: NaiveDate,
    ) -> Result<Self, CalendarError> {
        let base = Self::current(today);
        let selection = Self {
            year: year.unwrap_or(base.year),
            month: month.unwrap_or(base.month),
        };
        selection.validate(today.year())?;
        Ok(selection)
    }

    pub fn validate(&self, current_year: i32) -> Result<(), CalendarError> {
        let range = year_range(current_year);
        if !range.contains(&self.year) {
            return Err(CalendarError::YearOutOfRange {
                year: self.year,
                min: *range.start(),
                max: *range.end(),
            });
        }
        month_label(self.month).map(|_| ())
    }

    pub fn title(&self) -> String {
        let label = month_label(self.month).unwrap_or("?");
        format!("{label} {}", self.year)
    }
}
