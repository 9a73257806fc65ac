use super::*;
use time::Month;

fn date(y: i32, m: Month, d: u8) -> Date {
    Date::from_calendar_date(y, m, d).unwrap()
}

#[test]
fn week_start_of_monday_is_itself() {
    assert_eq!(week_start(date(2024, Month::June, 3)), date(2024, Month::June, 3));
}

#[test]
fn week_start_of_sunday_is_previous_monday() {
    assert_eq!(week_start(date(2024, Month::June, 9)), date(2024, Month::June, 3));
}

#[test]
fn week_start_crosses_month_and_year_boundaries() {
    assert_eq!(week_start(date(2024, Month::March, 1)), date(2024, Month::February, 26));
    assert_eq!(week_start(date(2025, Month::January, 1)), date(2024, Month::December, 30));
}

#[test]
fn iso_date_zero_pads() {
    assert_eq!(iso_date(date(2024, Month::January, 5)), "2024-01-05");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_week_start_is_a_monday() {
    let raw = current_week_start().unwrap();
    assert_eq!(raw.len(), 10);
    let today = today().unwrap();
    assert_eq!(week_start(today).weekday(), time::Weekday::Monday);
}
