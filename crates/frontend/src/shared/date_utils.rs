use chrono::{DateTime, Utc};

/// Render a backend timestamp for table cells: `dd.mm.yyyy hh:mm`.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Optional variant; missing timestamps render as a dash.
pub fn format_datetime_opt(dt: Option<DateTime<Utc>>) -> String {
    dt.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(dt), "15.03.2024 14:02");
    }

    #[test]
    fn test_missing_timestamp() {
        assert_eq!(format_datetime_opt(None), "-");
    }
}
