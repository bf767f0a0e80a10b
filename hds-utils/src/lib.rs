//! Shared utility functions for HDS crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Portuguese three-letter month abbreviations, January first.
    const MONTHS_BR: [&str; 12] = [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_iso(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a NaiveDate as "DD/MM/YYYY"
    pub fn format_br(date: &NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    /// Format the month of a date as "mmm/yyyy" (e.g. "mar/2024").
    pub fn month_label_br(date: &NaiveDate) -> String {
        format!("{}/{}", MONTHS_BR[date.month0() as usize], date.year())
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_iso_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Parse a date as delivered in history payloads.
    ///
    /// A string containing `/` is read as `dd/mm/yyyy`; anything else as ISO
    /// `yyyy-mm-dd`, optionally followed by a time part (`T...` or ` ...`).
    /// Both forms use a fixed field order, so "05/03/2024" is the 5th of
    /// March and never the 3rd of May.
    pub fn parse_history_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.contains('/') {
            NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
        } else {
            let date_part = s.split(['T', ' ']).next()?;
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
        }
    }

    /// Parse the year and month of a "YYYY-MM" or "YYYY-MM-DD" string,
    /// pinned to the first day of that month.
    pub fn parse_year_month(s: &str) -> Option<NaiveDate> {
        let year_month = s.trim().get(..7)?;
        NaiveDate::parse_from_str(&format!("{}-01", year_month), "%Y-%m-%d").ok()
    }

    /// Number of days in the month containing `date`.
    pub fn days_in_month(date: &NaiveDate) -> u32 {
        let (year, month) = (date.year(), date.month());
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let first = NaiveDate::from_ymd_opt(year, month, 1);
        match (first, next) {
            (Some(first), Some(next)) => (next - first).num_days() as u32,
            _ => 30,
        }
    }

    /// Whole calendar days between two dates, regardless of their order.
    pub fn calendar_days_between(a: &NaiveDate, b: &NaiveDate) -> u32 {
        (*b - *a).num_days().unsigned_abs() as u32
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_parse_history_date_day_first() {
            let date = parse_history_date("05/03/2024").unwrap();
            assert_eq!(date.day(), 5);
            assert_eq!(date.month(), 3);
            assert_eq!(date.year(), 2024);
        }

        #[test]
        fn test_parse_history_date_iso() {
            let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
            assert_eq!(parse_history_date("2024-03-05"), Some(expected));
            assert_eq!(parse_history_date("2024-03-05T13:45:00Z"), Some(expected));
            assert_eq!(parse_history_date("2024-03-05 00:00"), Some(expected));
        }

        #[test]
        fn test_parse_history_date_rejects_garbage() {
            assert_eq!(parse_history_date(""), None);
            assert_eq!(parse_history_date("31/02/2024"), None);
            assert_eq!(parse_history_date("05/03"), None);
            assert_eq!(parse_history_date("ontem"), None);
            assert_eq!(parse_history_date("2024-13-01"), None);
            assert_eq!(parse_history_date("05/03/2024/01"), None);
            assert_eq!(parse_history_date("2024/03/05"), None);
        }

        #[test]
        fn test_parse_history_date_trims_padding() {
            let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
            assert_eq!(parse_history_date("  05/03/2024 "), Some(expected));
            assert_eq!(parse_history_date(" 2024-03-05"), Some(expected));
        }

        #[test]
        fn test_calendar_days_between_is_symmetric() {
            let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let b = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
            assert_eq!(calendar_days_between(&a, &b), 60);
            assert_eq!(calendar_days_between(&b, &a), 60);
            assert_eq!(calendar_days_between(&a, &a), 0);
        }

        #[test]
        fn test_days_in_month() {
            let feb_leap = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
            assert_eq!(days_in_month(&feb_leap), 29);
            let dec = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
            assert_eq!(days_in_month(&dec), 31);
        }

        #[test]
        fn test_parse_year_month() {
            let expected = NaiveDate::from_ymd_opt(2015, 7, 1).unwrap();
            assert_eq!(parse_year_month("2015-07"), Some(expected));
            assert_eq!(parse_year_month("2015-07-31"), Some(expected));
            assert_eq!(parse_year_month("07/2015"), None);
            assert_eq!(parse_year_month("2015-7"), None);
            assert_eq!(parse_year_month("2015-13"), None);
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            assert_eq!(format_br(&date), "15/06/2023");
            assert_eq!(month_label_br(&date), "jun/2023");
            let formatted = format_iso(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_iso_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }
    }
}
