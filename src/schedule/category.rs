use super::{rotation, DayCategory, HolidaySet};
use crate::model::CalendarDate;

/// Résout la catégorie d'un jour.
///
/// Priorité : férié > samedi > dimanche > première zmiana > seconde zmiana.
/// Le samedi dépend lui-même de la zmiana (samedi travaillé ou non).
pub(super) fn categorize(
    date: CalendarDate,
    holidays: &HolidaySet,
    is_inverted: bool,
) -> DayCategory {
    let first = rotation::is_first_shift(date, is_inverted);

    if holidays.contains(date) {
        DayCategory::Holiday
    } else if date.is_saturday() {
        if first {
            DayCategory::SaturdayFirstShift
        } else {
            DayCategory::SaturdaySecondShift
        }
    } else if date.is_sunday() {
        DayCategory::Sunday
    } else if first {
        DayCategory::FirstShift
    } else {
        DayCategory::SecondShift
    }
}
