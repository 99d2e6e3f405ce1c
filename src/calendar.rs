use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::LocalTime;

/// Local hour at which U.S. clocks change on both transition Sundays.
pub const DST_TRANSITION_HOUR: u32 = 2;

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// 1-based ordinal day within the year.
///
/// Month and day are not range-checked. A month of 0 counts no preceding
/// months and a month past December counts all twelve, so nonsense input
/// gives a nonsense ordinal rather than a panic. Ordinals past `i32::MAX`
/// saturate.
pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let preceding = month.saturating_sub(1) as usize;
    let sum: u32 = days_in_months(year).iter().take(preceding).sum();
    (i64::from(sum) + i64::from(day)).min(i64::from(i32::MAX)) as i32
}

/// Day of month of the `n`-th `weekday` (1-based), e.g. the second Sunday of March.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<u32> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n).map(|d| d.day())
}

/// Whether U.S. daylight saving time is in effect at a local wall-clock time.
///
/// Post-2007 rule: DST runs from 02:00 on the second Sunday of March to
/// 02:00 on the first Sunday of November. On the March change day any hour
/// from 02 on is DST (02:xx does not exist on the wall clock); on the
/// November change day any hour from 02 on is standard time.
pub fn is_dst(year: i32, month: u32, day: u32, hour: u32) -> bool {
    match month {
        4..=10 => true,
        3 => nth_weekday_of_month(year, 3, Weekday::Sun, 2)
            .is_some_and(|start| day > start || (day == start && hour >= DST_TRANSITION_HOUR)),
        11 => nth_weekday_of_month(year, 11, Weekday::Sun, 1)
            .is_some_and(|end| day < end || (day == end && hour < DST_TRANSITION_HOUR)),
        _ => false,
    }
}

/// UTC offset to feed the angle functions for a zone whose standard offset is
/// `standard_offset` hours.
pub fn effective_tz_offset(standard_offset: i32, time: &LocalTime, observe_dst: bool) -> i32 {
    if observe_dst && is_dst(time.year, time.month, time.day, time.hour) {
        standard_offset + 1
    } else {
        standard_offset
    }
}
