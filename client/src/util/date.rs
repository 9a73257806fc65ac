//! Calendar-date helpers for default plan weeks.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::{Date, Duration};

/// Monday of the ISO week containing `date`.
pub fn week_start(date: Date) -> Date {
    let back = i64::from(date.weekday().number_days_from_monday());
    date.checked_sub(Duration::days(back)).unwrap_or(date)
}

/// `YYYY-MM-DD`.
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Today's date in the browser's local time zone (UTC on the server).
pub fn today() -> Option<Date> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok()?;
        let month = time::Month::try_from(u8::try_from(now.get_month() + 1).ok()?).ok()?;
        let day = u8::try_from(now.get_date()).ok()?;
        Date::from_calendar_date(year, month, day).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Some(time::OffsetDateTime::now_utc().date())
    }
}

/// Week start used when a plan has to be created without user input.
pub fn current_week_start() -> Option<String> {
    today().map(|d| iso_date(week_start(d)))
}
