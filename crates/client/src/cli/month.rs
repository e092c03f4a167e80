//! `YYYY-MM` month argument.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// A calendar month given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// First day of the month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid month {s:?} (expected YYYY-MM)");
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        let parsed = Self { year, month };
        parsed.first_day().map(|_| parsed).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_month() {
        let parsed: YearMonth = "2025-06".parse().unwrap();
        assert_eq!(parsed, YearMonth { year: 2025, month: 6 });
        assert_eq!(
            parsed.first_day(),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(parsed.to_string(), "2025-06");
    }

    #[test]
    fn test_parse_year_month_rejects_garbage() {
        assert!("2025".parse::<YearMonth>().is_err());
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-00".parse::<YearMonth>().is_err());
        assert!("June-2025".parse::<YearMonth>().is_err());
    }
}
