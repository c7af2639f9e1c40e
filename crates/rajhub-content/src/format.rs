//! Number and date formatting for display.

use chrono::NaiveDate;

/// `38500000 -> "38.5M"`, `746000 -> "746K"`, `735 -> "735"`
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.0}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// `Dec 8, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_read_time(minutes: u32) -> String {
    format!("{minutes} min read")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(735), "735");
        assert_eq!(format_compact(24), "24");
        assert_eq!(format_compact(746_000), "746K");
        assert_eq!(format_compact(38_500_000), "38.5M");
        assert_eq!(format_compact(1_000_000), "1.0M");
    }

    #[test]
    fn test_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 8).unwrap();
        assert_eq!(format_date(date), "Dec 8, 2024");
    }
}
