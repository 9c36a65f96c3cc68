// Database row types shared across modules.

pub mod answer;
pub mod interview;

use chrono::NaiveDate;

/// Record dates are stored as DD-MM-YYYY strings, the format the dashboard
/// renders verbatim.
pub fn format_record_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Today's date (UTC) in record format.
pub fn record_date_now() -> String {
    format_record_date(chrono::Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_date_is_day_first() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(format_record_date(date), "31-01-2025");
    }

    #[test]
    fn test_format_record_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_record_date(date), "07-03-2024");
    }
}
