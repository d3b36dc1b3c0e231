use crate::model::CalendarDate;
use chrono::NaiveDate;

/// Lundi 13 janvier 2020 : semaine de référence de la rotation.
pub const SHIFT_EPOCH: (i32, u32, u32) = (2020, 1, 13);

pub fn shift_epoch() -> CalendarDate {
    let (y, m, d) = SHIFT_EPOCH;
    // constante valide
    CalendarDate::from_naive(NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

/// Vrai si `date` tombe sur la « première » zmiana.
///
/// La rotation alterne chaque semaine (lundi → dimanche) à partir de
/// [`SHIFT_EPOCH`]. `is_inverted` échange les deux zmiany.
pub fn is_first_shift(date: CalendarDate, is_inverted: bool) -> bool {
    let epoch = shift_epoch();
    let epoch_weekday = i64::from(epoch.weekday_index());
    let target_weekday = i64::from(date.weekday_index());

    let diff_days = date.day_number() - epoch.day_number();
    let diff_weeks = (diff_days + epoch_weekday).div_euclid(7);
    let weekday_adjust = if target_weekday >= epoch_weekday { 0 } else { 1 };

    let even = (diff_weeks + weekday_adjust).rem_euclid(2) == 0;
    is_inverted != even
}
