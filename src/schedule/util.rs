use super::CalendarError;
use chrono::{Datelike, NaiveDate};

pub(super) fn check_month(month: u32) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth(month))
    }
}

pub(super) fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    check_month(month)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidDate {
        year,
        month,
        day: 1,
    })
}

/// Dernier jour du mois : la veille du 1er du mois suivant.
pub(super) fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = first_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .ok_or(CalendarError::InvalidDate { year, month, day: 31 })?;
    debug_assert_eq!(last.month(), first.month());
    Ok(last.day())
}

/// Jour de la semaine du 1er du mois, lundi = 0.
pub(super) fn first_weekday(year: i32, month: u32) -> Result<u32, CalendarError> {
    Ok(first_of_month(year, month)?.weekday().num_days_from_monday())
}
