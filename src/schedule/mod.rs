mod category;
mod grid;
mod holidays;
mod rotation;
mod types;
mod util;

pub use grid::{build_month_grid, days_in_month, rows_needed, MonthGrid, COLUMNS};
pub use holidays::{is_holiday, Holiday, HolidaySet};
pub use rotation::{is_first_shift, shift_epoch, SHIFT_EPOCH};
pub use types::{CalendarError, DayCategory, GridOptions};

use crate::model::CalendarDate;

/// ShiftCalendar : regroupe la table des fériés et les options de grille.
///
/// Toutes les méthodes sont pures ; l'inversion est toujours passée en
/// paramètre, jamais lue dans un état global.
#[derive(Debug, Clone, Default)]
pub struct ShiftCalendar {
    holidays: HolidaySet,
    grid: GridOptions,
}

impl ShiftCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid_options(mut self, opts: GridOptions) -> Self {
        self.grid = opts;
        self
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }
    pub fn grid_options(&self) -> GridOptions {
        self.grid
    }

    pub fn is_first_shift(&self, date: CalendarDate, is_inverted: bool) -> bool {
        rotation::is_first_shift(date, is_inverted)
    }

    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        self.holidays.contains(date)
    }

    pub fn categorize(&self, date: CalendarDate, is_inverted: bool) -> DayCategory {
        category::categorize(date, &self.holidays, is_inverted)
    }

    pub fn month_grid(&self, year: i32, month: u32) -> Result<MonthGrid, CalendarError> {
        MonthGrid::build_with(year, month, self.grid)
    }
}
