#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate};
use grafik::{is_first_shift, CalendarDate};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

/// Même formule, jours numérotés dimanche = 0.
fn sunday_based(target: NaiveDate, is_inverted: bool) -> bool {
    let epoch = NaiveDate::from_ymd_opt(2020, 1, 13).unwrap();
    let epoch_day = i64::from(epoch.weekday().num_days_from_sunday());
    let target_day = i64::from(target.weekday().num_days_from_sunday());
    let diff_days = target.signed_duration_since(epoch).num_days();
    let diff_weeks = (diff_days + epoch_day).div_euclid(7);
    let adjust = if target_day >= epoch_day { 0 } else { 1 };
    is_inverted != ((diff_weeks + adjust) % 2 == 0)
}

fn days_between(start: CalendarDate, end: CalendarDate) -> impl Iterator<Item = CalendarDate> {
    let span = end.day_number() - start.day_number();
    (0..=span).map(move |n| start.add_days(n).unwrap())
}

#[test]
fn epoch_golden_value() {
    assert!(is_first_shift(date(2020, 1, 13), false));
    assert!(!is_first_shift(date(2020, 1, 13), true));
}

#[test]
fn inversion_always_flips() {
    for d in days_between(date(2015, 1, 1), date(2030, 12, 31)) {
        assert_ne!(is_first_shift(d, false), is_first_shift(d, true), "{d}");
    }
}

#[test]
fn fourteen_day_period() {
    for d in days_between(date(1990, 1, 1), date(2040, 1, 1)).step_by(3) {
        let later = d.add_days(14).unwrap();
        for inv in [false, true] {
            assert_eq!(is_first_shift(d, inv), is_first_shift(later, inv), "{d}");
        }
    }
}

#[test]
fn matches_sunday_based_reference() {
    for d in days_between(date(1999, 6, 1), date(2035, 6, 1)) {
        for inv in [false, true] {
            assert_eq!(is_first_shift(d, inv), sunday_based(d.as_naive(), inv), "{d}");
        }
    }
}

#[test]
fn whole_week_shares_a_shift() {
    // lundi 2 mars 2026 → dimanche 8 mars 2026
    let monday = date(2026, 3, 2);
    assert_eq!(monday.weekday_index(), 0);
    let first = is_first_shift(monday, false);
    for n in 1..7 {
        assert_eq!(is_first_shift(monday.add_days(n).unwrap(), false), first);
    }
    assert_ne!(is_first_shift(monday.add_days(7).unwrap(), false), first);
}

#[test]
fn leap_day_and_far_dates() {
    // 29 février 2024 : jeudi de la semaine du 26 février
    assert_eq!(
        is_first_shift(date(2024, 2, 29), false),
        is_first_shift(date(2024, 2, 26), false)
    );
    let far_past = date(1900, 1, 1);
    let far_future = date(2200, 12, 31);
    assert_eq!(is_first_shift(far_past, false), sunday_based(far_past.as_naive(), false));
    assert_eq!(is_first_shift(far_future, true), sunday_based(far_future.as_naive(), true));
}

#[test]
fn referentially_consistent() {
    let d = date(2031, 7, 19);
    assert_eq!(is_first_shift(d, false), is_first_shift(d, false));
}
