//! Footer date formatting: full month name, zero-padded day, year.

use chrono::NaiveDate;

/// `chrono` format string for the "Issued on" footer, e.g. "March 07, 2024".
pub const FORMAT: &str = "%B %d, %Y";

/// Render `date` the way it appears on a certificate footer.
pub fn format(date: NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

/// Full footer line for `date`.
pub fn footer_line(date: NaiveDate) -> String {
    format!("Issued on: {}", format(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2024, 3, 7, "March 07, 2024")]
    #[case(2023, 12, 31, "December 31, 2023")]
    #[case(2026, 1, 1, "January 01, 2026")]
    fn formats_month_name_padded_day_and_year(
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
        #[case] expected: &str,
    ) {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
        assert_eq!(format(date), expected);
    }

    #[test]
    fn footer_line_has_prefix() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        assert_eq!(footer_line(date), "Issued on: March 07, 2024");
    }
}
