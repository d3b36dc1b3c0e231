use super::{util, CalendarError, GridOptions};
use crate::model::CalendarDate;

/// Grille d'un mois : `rows × 7` cellules, lundi en première colonne.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    rows: usize,
    cells: Vec<Option<CalendarDate>>,
}

pub const COLUMNS: usize = 7;

impl MonthGrid {
    pub fn build(year: i32, month: u32) -> Result<Self, CalendarError> {
        Self::build_with(year, month, GridOptions::default())
    }

    pub fn build_with(year: i32, month: u32, opts: GridOptions) -> Result<Self, CalendarError> {
        let needed = rows_needed(year, month)?;
        if opts.rows < needed {
            return Err(CalendarError::GridTooSmall {
                rows: opts.rows,
                needed,
            });
        }

        let first_weekday = util::first_weekday(year, month)? as i64;
        let days = i64::from(util::days_in_month(year, month)?);

        let mut cells = Vec::with_capacity(opts.rows * COLUMNS);
        for row in 0..opts.rows {
            for col in 0..COLUMNS {
                let n = (row * COLUMNS + col) as i64 + 1 - first_weekday;
                let cell = if (1..=days).contains(&n) {
                    Some(CalendarDate::new(year, month, n as u32)?)
                } else {
                    None
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            year,
            month,
            rows: opts.rows,
            cells,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> &[Option<CalendarDate>] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[Option<CalendarDate>]> {
        self.cells.chunks(COLUMNS)
    }

    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.cells.iter().flatten().copied()
    }
}

/// Raccourci : grille standard de 42 cellules.
pub fn build_month_grid(year: i32, month: u32) -> Result<MonthGrid, CalendarError> {
    MonthGrid::build(year, month)
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    util::days_in_month(year, month)
}

/// Nombre minimal de semaines pour afficher le mois.
pub fn rows_needed(year: i32, month: u32) -> Result<usize, CalendarError> {
    let lead = util::first_weekday(year, month)? as usize;
    let days = util::days_in_month(year, month)? as usize;
    Ok((lead + days).div_ceil(COLUMNS))
}
