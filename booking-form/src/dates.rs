//! Booking date rules
//!
//! Dates are entered as free text in the `DD.MM.YYYY` form. Day and month may
//! be written with one or two digits, the year always has four.

use chrono::NaiveDate;

/// Separator used when the selected dates are joined for the payload
pub const DATE_SEPARATOR: &str = ", ";

/// Lowest year the host's date construction maps back onto itself
const MIN_YEAR: i32 = 100;

/// Splits `D.M.YYYY` into its numeric parts without checking the calendar
fn split_parts(input: &str) -> Option<(u32, u32, i32)> {
    let mut parts = input.split('.');
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(day, 1, 2) || !digits(month, 1, 2) || !digits(year, 4, 4) {
        return None;
    }

    Some((day.parse().ok()?, month.parse().ok()?, year.parse().ok()?))
}

/// Parses a booking date, returning `None` for bad format or impossible days
pub fn parse_booking_date(input: &str) -> Option<NaiveDate> {
    let (day, month, year) = split_parts(input)?;
    if year < MIN_YEAR {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns true if `input` is a `DD.MM.YYYY` string naming a real calendar day
pub fn is_valid_date(input: &str) -> bool {
    parse_booking_date(input).is_some()
}

/// Joins the selected dates the way the bot backend expects them
pub fn join_dates(dates: &[String]) -> String {
    dates.join(DATE_SEPARATOR)
}
