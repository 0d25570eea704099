use chrono::{NaiveDate, SecondsFormat};

/// Get today's date in YYYY-MM-DD format, for the date input's default.
pub fn current_date_input() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// Normalize a date input's YYYY-MM-DD value to an absolute UTC-midnight
/// timestamp (`2024-01-05` -> `2024-01-05T00:00:00.000Z`), so the wire
/// format never depends on the browser's timezone. Returns `None` for
/// anything that is not a real calendar date.
pub fn normalize_date_input(date_str: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(
        midnight
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Format an RFC 3339 timestamp for display (e.g. "January 5, 2024").
/// Falls back to the raw string when it does not parse.
pub fn format_display_date(rfc3339_date: &str) -> String {
    if let Some(date_part) = rfc3339_date.split('T').next() {
        if let Ok(parts) = date_part.split('-').collect::<Vec<_>>().try_into() {
            let [year, month, day]: [&str; 3] = parts;
            if let (Ok(y), Ok(m), Ok(d)) = (year.parse::<u32>(), month.parse::<u32>(), day.parse::<u32>()) {
                let month_name = match m {
                    1 => "January", 2 => "February", 3 => "March", 4 => "April",
                    5 => "May", 6 => "June", 7 => "July", 8 => "August",
                    9 => "September", 10 => "October", 11 => "November", 12 => "December",
                    _ => return rfc3339_date.to_string(),
                };
                return format!("{} {}, {}", month_name, d, y);
            }
        }
    }
    rfc3339_date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date_input_is_utc_midnight() {
        assert_eq!(
            normalize_date_input("2024-01-05").as_deref(),
            Some("2024-01-05T00:00:00.000Z")
        );
        assert_eq!(
            normalize_date_input("2024-12-31").as_deref(),
            Some("2024-12-31T00:00:00.000Z")
        );
    }

    #[test]
    fn test_normalize_date_input_rejects_garbage() {
        assert_eq!(normalize_date_input(""), None);
        assert_eq!(normalize_date_input("tomorrow"), None);
        assert_eq!(normalize_date_input("2024-13-01"), None);
        assert_eq!(normalize_date_input("2024-02-30"), None);
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(
            format_display_date("2024-01-05T00:00:00.000Z"),
            "January 5, 2024"
        );
        assert_eq!(format_display_date("not a date"), "not a date");
    }
}
