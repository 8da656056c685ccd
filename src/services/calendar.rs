//! Calendar utilities
//!
//! Date formatting, relative-time labels, financial years and date
//! arithmetic. Financial-year and range checks work on whole days; time of
//! day only matters for relative time and date-time formatting.
//!
//! Every function taking a date accepts anything implementing
//! [`CalendarInput`], including `Option`s and strings. A missing date never
//! fails: formatting gives an empty string, `age` gives `0`, range checks
//! give `false` and arithmetic gives `None`.

use chrono::{
    DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Timelike,
};

use crate::models::date_format::month_abbreviation;
use crate::models::{DateFormat, FinancialYear};

/// A value that may be read as a local calendar date and time
pub trait CalendarInput {
    /// The local date-time this value denotes, or `None` when there is none
    fn to_date_time(&self) -> Option<NaiveDateTime>;

    /// The calendar date this value denotes
    fn to_date(&self) -> Option<NaiveDate> {
        self.to_date_time().map(|dt| dt.date())
    }
}

impl CalendarInput for NaiveDate {
    fn to_date_time(&self) -> Option<NaiveDateTime> {
        self.and_hms_opt(0, 0, 0)
    }
}

impl CalendarInput for NaiveDateTime {
    fn to_date_time(&self) -> Option<NaiveDateTime> {
        Some(*self)
    }
}

impl<Tz: TimeZone> CalendarInput for DateTime<Tz> {
    fn to_date_time(&self) -> Option<NaiveDateTime> {
        Some(self.with_timezone(&Local).naive_local())
    }
}

impl CalendarInput for str {
    fn to_date_time(&self) -> Option<NaiveDateTime> {
        parse_date_time(self)
    }
}

impl CalendarInput for String {
    fn to_date_time(&self) -> Option<NaiveDateTime> {
        parse_date_time(self)
    }
}

impl<T: CalendarInput> CalendarInput for Option<T> {
    fn to_date_time(&self) -> Option<NaiveDateTime> {
        self.as_ref().and_then(|value| value.to_date_time())
    }
}

impl<T: CalendarInput + ?Sized> CalendarInput for &T {
    fn to_date_time(&self) -> Option<NaiveDateTime> {
        (**self).to_date_time()
    }
}

/// Read a date or date-time from text
///
/// Accepts RFC 3339, `yyyy-mm-ddTHH:MM:SS`, `yyyy-mm-dd HH:MM[:SS]`,
/// `yyyy-mm-dd` and `dd/mm/yyyy`.
pub fn parse_date_time(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    const DATE_TIME_LAYOUTS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for layout in DATE_TIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(dt);
        }
    }

    ["%Y-%m-%d", "%d/%m/%Y"]
        .into_iter()
        .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format a date using one of the supported layout patterns
///
/// Unknown patterns fall back to `dd/mm/yyyy`; a missing date gives `""`.
///
/// ```
/// use chrono::NaiveDate;
/// use fincalc::services::calendar::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(format_date(date, "dd/mm/yyyy"), "05/01/2024");
/// assert_eq!(format_date(date, "dd MMM yyyy"), "05 Jan 2024");
/// assert_eq!(format_date(None::<NaiveDate>, "dd/mm/yyyy"), "");
/// ```
pub fn format_date(date: impl CalendarInput, format: &str) -> String {
    format_date_as(date, DateFormat::from_pattern(format))
}

/// Format a date using a typed layout
pub fn format_date_as(date: impl CalendarInput, format: DateFormat) -> String {
    match date.to_date() {
        Some(d) => render_date(d, format),
        None => String::new(),
    }
}

/// Format as `dd/mm/yyyy HH:MM` on a 24-hour clock
pub fn format_date_time(date: impl CalendarInput) -> String {
    match date.to_date_time() {
        Some(dt) => format!(
            "{} {:02}:{:02}",
            render_date(dt.date(), DateFormat::DayMonthYear),
            dt.hour(),
            dt.minute()
        ),
        None => String::new(),
    }
}

/// Format as `yyyy-mm-dd` for a date-entry control
pub fn format_date_for_input(date: impl CalendarInput) -> String {
    format_date_as(date, DateFormat::Iso)
}

/// Describe how long ago `date` was, relative to the local clock
pub fn relative_time(date: impl CalendarInput) -> String {
    relative_time_at(date, Local::now().naive_local())
}

/// Describe how long before `now` the date was
///
/// Buckets into "Just now", minutes, hours and days; a week or more renders
/// the date as `dd MMM yyyy`. Dates after `now` count as "Just now".
pub fn relative_time_at(date: impl CalendarInput, now: NaiveDateTime) -> String {
    let Some(then) = date.to_date_time() else {
        return String::new();
    };

    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return ago(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }

    let days = hours / 24;
    if days < 7 {
        return ago(days, "day");
    }

    render_date(then.date(), DateFormat::DayMonthNameYear)
}

/// Whole years since `birth_date` as of today
///
/// A missing or unreadable birth date gives `0`.
pub fn age(birth_date: impl CalendarInput) -> i32 {
    match birth_date.to_date() {
        Some(birth) => age_on(birth, Local::now().date_naive()),
        None => 0,
    }
}

/// Whole years between `birth_date` and `today`, never negative
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0)
}

/// Whether `date` lies between `start` and `end`, both inclusive
///
/// Compares calendar days. Any missing value makes the answer `false`.
pub fn is_date_in_range(
    date: impl CalendarInput,
    start: impl CalendarInput,
    end: impl CalendarInput,
) -> bool {
    match (date.to_date(), start.to_date(), end.to_date()) {
        (Some(d), Some(start), Some(end)) => d >= start && d <= end,
        _ => false,
    }
}

/// A new date `n` days after (or before, when negative) `date`
///
/// Saturates at the limits of the calendar. `None` when there is no date.
pub fn add_days(date: impl CalendarInput, n: i64) -> Option<NaiveDate> {
    let date = date.to_date()?;
    let (shifted, limit) = if n >= 0 {
        (date.checked_add_days(Days::new(n.unsigned_abs())), NaiveDate::MAX)
    } else {
        (date.checked_sub_days(Days::new(n.unsigned_abs())), NaiveDate::MIN)
    };
    Some(shifted.unwrap_or(limit))
}

/// A new date `n` calendar months after (or before) `date`
///
/// The day is clamped to the end of the target month: 31 Jan + 1 month is
/// 28 or 29 Feb. `None` when there is no date.
pub fn add_months(date: impl CalendarInput, n: i32) -> Option<NaiveDate> {
    let date = date.to_date()?;
    let (shifted, limit) = if n >= 0 {
        (date.checked_add_months(Months::new(n.unsigned_abs())), NaiveDate::MAX)
    } else {
        (date.checked_sub_months(Months::new(n.unsigned_abs())), NaiveDate::MIN)
    };
    Some(shifted.unwrap_or(limit))
}

/// The financial year containing `date`, as `"YYYY-YYYY"`
///
/// A missing date gives `""`.
pub fn financial_year(date: impl CalendarInput) -> String {
    match date.to_date() {
        Some(d) => FinancialYear::for_date(d).to_string(),
        None => String::new(),
    }
}

/// The financial year containing today's local date
pub fn current_financial_year() -> String {
    FinancialYear::current().to_string()
}

fn render_date(date: NaiveDate, format: DateFormat) -> String {
    let (y, m, d) = (date.year(), date.month(), date.day());
    match format {
        DateFormat::DayMonthYear => format!("{:02}/{:02}/{:04}", d, m, y),
        DateFormat::MonthDayYear => format!("{:02}/{:02}/{:04}", m, d, y),
        DateFormat::Iso => format!("{:04}-{:02}-{:02}", y, m, d),
        DateFormat::DayMonthNameYear => {
            format!("{:02} {} {:04}", d, month_abbreviation(m), y)
        }
    }
}

fn ago(count: i64, unit: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}
