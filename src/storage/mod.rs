//! Output sinks for rendered digest pages.

pub mod local;

use chrono::NaiveDate;

// Re-export for convenience
pub use local::LocalOutput;

/// `YYYYMMDD` prefix used in output file names.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_stamp() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(date_stamp(date), "20260307");
    }
}
