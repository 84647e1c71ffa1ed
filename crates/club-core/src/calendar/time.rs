//! Time normalizer - 12-hour display strings to sortable 24-hour keys

use crate::error::DomainError;

/// Convert a display time like `"7:00 PM"` into a sortable `"19:00"` key
///
/// The input must be `H:MM AM` or `H:MM PM`: an hour from 1 to 12 (leading zero
/// optional), two-digit minutes, a single space, and an uppercase meridiem.
/// `12 AM` becomes `00`, any other `PM` hour gains 12, minutes pass through.
pub fn to_24_hour(display: &str) -> Result<String, DomainError> {
    let invalid = || DomainError::InvalidTime(display.to_string());

    let (clock, meridiem) = display.split_once(' ').ok_or_else(invalid)?;
    let is_pm = match meridiem {
        "AM" => false,
        "PM" => true,
        _ => return Err(invalid()),
    };

    let (hour, minutes) = clock.split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minutes.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(invalid());
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    Ok(format!("{hour:02}:{minutes}"))
}

/// Sort key for an optional display time
///
/// `None` sorts before every `Some`, which keeps untimed entries first.
pub fn time_sort_key(display: Option<&str>) -> Result<Option<String>, DomainError> {
    display.map(to_24_hour).transpose()
}
