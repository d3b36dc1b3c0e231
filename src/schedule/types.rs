use thiserror::Error;

/// Options de construction de la grille mensuelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Nombre de semaines affichées, fixe pour garder une mise en page stable.
    pub rows: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { rows: 6 }
    }
}

/// Les six catégories d'affichage d'un jour, mutuellement exclusives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCategory {
    Holiday,
    SaturdayFirstShift,
    SaturdaySecondShift,
    Sunday,
    FirstShift,
    SecondShift,
}

impl DayCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCategory::Holiday => "holiday",
            DayCategory::SaturdayFirstShift => "saturday_first",
            DayCategory::SaturdaySecondShift => "saturday_second",
            DayCategory::Sunday => "sunday",
            DayCategory::FirstShift => "first",
            DayCategory::SecondShift => "second",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("invalid month: {0} (must be 1..=12)")]
    InvalidMonth(u32),
    #[error("year {year} outside picker range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("grid of {rows} rows cannot hold the month ({needed} needed)")]
    GridTooSmall { rows: usize, needed: usize },
    #[error("cannot parse date (expected YYYY-MM-DD): {0}")]
    ParseDate(String),
}
