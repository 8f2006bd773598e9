//! Date extraction for receipts.
//!
//! Dates are returned exactly as matched. Shapes are tried in a fixed order
//! over the whole text and the first shape that matches anywhere wins, even if
//! a later shape matches earlier in the text. No plausibility check is made,
//! so "35/13/2024" is a date as far as extraction is concerned.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::{
    DATE_DAY_MONTH_YEAR, DATE_DMY, DATE_MONTH_DAY_YEAR, DATE_MONTH_DAY_YEAR_TIME, DATE_YMD,
};
use super::{ExtractionMatch, FieldExtractor, MatchTier};

/// Returned by [`super::extract_date`] when no date shape matches.
pub const DATE_NOT_FOUND: &str = "Not Found";

/// Shape of a matched date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// DD/MM/YYYY or DD-MM-YYYY
    NumericDayFirst,
    /// YYYY/MM/DD or YYYY-MM-DD
    NumericYearFirst,
    /// Month DD YYYY
    MonthDayYear,
    /// DD Month YYYY
    DayMonthYear,
    /// Month DD YYYY HH:MM with optional AM/PM
    MonthDayYearTime,
}

impl DateFormat {
    /// All shapes, in matching priority order.
    pub const ORDER: [DateFormat; 5] = [
        DateFormat::NumericDayFirst,
        DateFormat::NumericYearFirst,
        DateFormat::MonthDayYear,
        DateFormat::DayMonthYear,
        DateFormat::MonthDayYearTime,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            DateFormat::NumericDayFirst => &*DATE_DMY,
            DateFormat::NumericYearFirst => &*DATE_YMD,
            DateFormat::MonthDayYear => &*DATE_MONTH_DAY_YEAR,
            DateFormat::DayMonthYear => &*DATE_DAY_MONTH_YEAR,
            DateFormat::MonthDayYearTime => &*DATE_MONTH_DAY_YEAR_TIME,
        }
    }
}

/// A date as it appeared in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMatch {
    /// Matched text, verbatim.
    pub text: String,
    /// Shape that matched.
    pub format: DateFormat,
}

impl DateMatch {
    /// Best-effort calendar date for the matched text.
    ///
    /// Returns `None` for impossible dates and unrecognized month names. The
    /// matched text stays the authoritative value.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let parts: Vec<&str> = self
            .text
            .split(|c: char| c == '/' || c == '-' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let (year, month, day) = match (self.format, parts.as_slice()) {
            (DateFormat::NumericDayFirst, [day, month, year]) => {
                (*year, month.parse().ok()?, *day)
            }
            (DateFormat::NumericYearFirst, [year, month, day]) => {
                (*year, month.parse().ok()?, *day)
            }
            (DateFormat::MonthDayYear | DateFormat::MonthDayYearTime, [month, day, year, ..]) => {
                (*year, month_to_number(month)?, *day)
            }
            (DateFormat::DayMonthYear, [day, month, year]) => {
                (*year, month_to_number(month)?, *day)
            }
            _ => return None,
        };

        NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
    }
}

/// Date field extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = DateMatch;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<DateMatch>> {
        DateFormat::ORDER.iter().find_map(|format| {
            format.pattern().find(text).map(|m| {
                let value = DateMatch {
                    text: m.as_str().to_string(),
                    format: *format,
                };
                ExtractionMatch::new(value, MatchTier::Pattern, m.as_str())
                    .with_position(m.start(), m.end())
            })
        })
    }
}

fn month_to_number(month: &str) -> Option<u32> {
    let prefix: String = month.chars().take(3).collect::<String>().to_lowercase();
    let number = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Option<DateMatch> {
        DateExtractor::new().extract(text).map(|m| m.value)
    }

    #[test]
    fn test_extract_date_dmy() {
        let result = extract("Invoice date 15-08-2024 paid").unwrap();
        assert_eq!(result.text, "15-08-2024");
        assert_eq!(result.format, DateFormat::NumericDayFirst);

        assert_eq!(extract("Date: 01/02/2023").unwrap().text, "01/02/2023");
    }

    #[test]
    fn test_extract_date_ymd() {
        let result = extract("Printed 2024/08/15 at store").unwrap();
        assert_eq!(result.text, "2024/08/15");
        assert_eq!(result.format, DateFormat::NumericYearFirst);
    }

    #[test]
    fn test_extract_month_names() {
        let result = extract("Order placed on AUGUST 15 2024").unwrap();
        assert_eq!(result.text, "AUGUST 15 2024");
        assert_eq!(result.format, DateFormat::MonthDayYear);

        let result = extract("Billed 05 sep 2023").unwrap();
        assert_eq!(result.text, "05 sep 2023");
        assert_eq!(result.format, DateFormat::DayMonthYear);
    }

    #[test]
    fn test_pattern_order_beats_text_order() {
        // The year-first date appears first, but day-first shapes are tried first.
        let text = "Printed 2024-01-02\nBill date 15/08/2024";
        assert_eq!(extract(text).unwrap().text, "15/08/2024");

        let text = "Aug 20 2024\nRef 2024-08-21";
        assert_eq!(extract(text).unwrap().text, "2024-08-21");
    }

    #[test]
    fn test_time_suffix_not_included() {
        // The plain month-day-year shape is tried before the timed one.
        let result = extract("Jan 05 2024 09:30 PM").unwrap();
        assert_eq!(result.text, "Jan 05 2024");
        assert_eq!(result.format, DateFormat::MonthDayYear);
    }

    #[test]
    fn test_timed_pattern_shape() {
        let m = DATE_MONTH_DAY_YEAR_TIME.find("Jan 05 2024 09:30 PM").unwrap();
        assert_eq!(m.as_str(), "Jan 05 2024 09:30 PM");

        let m = DATE_MONTH_DAY_YEAR_TIME.find("Jan 05 2024 21:30").unwrap();
        assert_eq!(m.as_str(), "Jan 05 2024 21:30");
    }

    #[test]
    fn test_no_plausibility_check() {
        let result = extract("Date 35/13/2024").unwrap();
        assert_eq!(result.text, "35/13/2024");
        assert_eq!(result.to_naive_date(), None);
    }

    #[test]
    fn test_not_found() {
        assert!(extract("Thank you for shopping 5/8/24").is_none());
        assert_eq!(super::super::extract_date("Total 450.00"), DATE_NOT_FOUND);
    }

    #[test]
    fn test_position_recorded() {
        let result = DateExtractor::new().extract("Date: 15-08-2024").unwrap();
        assert_eq!(result.position, Some((6, 16)));
        assert_eq!(result.source, "15-08-2024");
    }

    #[test]
    fn test_to_naive_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 8, 15);

        for text in [
            "15-08-2024",
            "2024/08/15",
            "Aug 15 2024",
            "15 August 2024",
        ] {
            assert_eq!(extract(text).unwrap().to_naive_date(), expected, "{}", text);
        }

        let timed = DateMatch {
            text: "Aug 15 2024 09:30PM".to_string(),
            format: DateFormat::MonthDayYearTime,
        };
        assert_eq!(timed.to_naive_date(), expected);
    }
}
