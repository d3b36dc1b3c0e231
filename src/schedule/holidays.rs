use crate::model::CalendarDate;

/// Jour férié à date fixe, indépendant de l'année.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
}

const fn holiday(month: u32, day: u32, name: &'static str) -> Holiday {
    Holiday { month, day, name }
}

const FIXED_HOLIDAYS: [Holiday; 9] = [
    holiday(1, 1, "Nowy Rok"),
    holiday(1, 6, "Trzech Króli"),
    holiday(5, 1, "Święto Pracy"),
    holiday(5, 3, "Święto Konstytucji 3 Maja"),
    holiday(8, 15, "Wniebowzięcie NMP"),
    holiday(11, 1, "Wszystkich Świętych"),
    holiday(11, 11, "Narodowe Święto Niepodległości"),
    holiday(12, 25, "Boże Narodzenie (pierwszy dzień)"),
    holiday(12, 26, "Boże Narodzenie (drugi dzień)"),
];

/// Table constante des jours fériés ; la comparaison se fait sur (mois, jour).
#[derive(Debug, Clone, Copy)]
pub struct HolidaySet {
    entries: &'static [Holiday],
}

impl Default for HolidaySet {
    fn default() -> Self {
        Self::fixed()
    }
}

impl HolidaySet {
    pub const fn fixed() -> Self {
        Self {
            entries: &FIXED_HOLIDAYS,
        }
    }

    pub fn entries(&self) -> &'static [Holiday] {
        self.entries
    }

    pub fn find(&self, date: CalendarDate) -> Option<&'static Holiday> {
        self.entries
            .iter()
            .find(|h| h.month == date.month() && h.day == date.day())
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.find(date).is_some()
    }

    pub fn name_of(&self, date: CalendarDate) -> Option<&'static str> {
        self.find(date).map(|h| h.name)
    }
}

pub fn is_holiday(date: CalendarDate) -> bool {
    HolidaySet::fixed().contains(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn christmas_but_not_christmas_eve() {
        assert!(is_holiday(CalendarDate::new(2025, 12, 25).unwrap()));
        assert!(!is_holiday(CalendarDate::new(2025, 12, 24).unwrap()));
    }

    #[test]
    fn year_is_ignored() {
        for year in [1999, 2020, 2024, 2031, 2100] {
            assert!(is_holiday(CalendarDate::new(year, 11, 11).unwrap()));
            assert!(!is_holiday(CalendarDate::new(year, 11, 12).unwrap()));
        }
    }

    #[test]
    fn nine_fixed_entries_with_names() {
        let set = HolidaySet::fixed();
        assert_eq!(set.entries().len(), 9);
        let may3 = CalendarDate::new(2026, 5, 3).unwrap();
        assert_eq!(set.name_of(may3), Some("Święto Konstytucji 3 Maja"));
    }
}
