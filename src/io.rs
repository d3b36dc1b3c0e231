use crate::model::CalendarDate;
use crate::picker::WEEKDAY_HEADERS;
use crate::schedule::{DayCategory, ShiftCalendar};
use anyhow::Context;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Ligne exportée pour un jour du mois.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub date: CalendarDate,
    pub weekday: &'static str,
    pub category: &'static str,
    pub first_shift: bool,
    pub holiday: Option<&'static str>,
}

impl DayRecord {
    fn new(calendar: &ShiftCalendar, date: CalendarDate, is_inverted: bool) -> Self {
        let category: DayCategory = calendar.categorize(date, is_inverted);
        Self {
            date,
            weekday: WEEKDAY_HEADERS[date.weekday_index() as usize],
            category: category.as_str(),
            first_shift: calendar.is_first_shift(date, is_inverted),
            holiday: calendar.holidays().name_of(date),
        }
    }
}

/// Un enregistrement par jour réel du mois (cellules vides ignorées).
pub fn month_records(
    calendar: &ShiftCalendar,
    year: i32,
    month: u32,
    is_inverted: bool,
) -> anyhow::Result<Vec<DayRecord>> {
    let grid = calendar
        .month_grid(year, month)
        .with_context(|| format!("building grid for {year}-{month:02}"))?;
    Ok(grid
        .days()
        .map(|date| DayRecord::new(calendar, date, is_inverted))
        .collect())
}

/// Export CSV : header `date,weekday,category,first_shift,holiday`
pub fn export_month_csv<P: AsRef<Path>>(path: P, records: &[DayRecord]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut w = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for rec in records {
        w.serialize(rec)?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON (jolie mise en forme)
pub fn export_month_json<P: AsRef<Path>>(path: P, records: &[DayRecord]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(records)?;
    fs::write(path.as_ref(), s).with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}
