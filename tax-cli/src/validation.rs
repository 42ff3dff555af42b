//! Request validation performed before the calculator is invoked.
//!
//! The core assumes a supported year and a non-negative income; this is the
//! only place those assumptions are checked.

use std::ops::RangeInclusive;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Tax years the upstream rate source publishes.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 2019..=2022;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing parameter: {0}")]
    Missing(&'static str),

    #[error("invalid year: {0}")]
    InvalidYear(String),

    #[error(
        "year {year} is out of supported range ({} to {})",
        SUPPORTED_YEARS.start(),
        SUPPORTED_YEARS.end()
    )]
    YearOutOfRange { year: i32 },

    #[error("invalid salary: {0}")]
    InvalidSalary(String),
}

/// Validate raw `year` and `salary` inputs, returning them parsed.
pub fn validate_request(
    year: &str,
    salary: &str,
) -> Result<(i32, Decimal), ValidationError> {
    let year = year.trim();
    let salary = salary.trim();

    if year.is_empty() {
        return Err(ValidationError::Missing("year"));
    }
    if salary.is_empty() {
        return Err(ValidationError::Missing("salary"));
    }

    Ok((parse_year(year)?, parse_salary(salary)?))
}

fn parse_year(value: &str) -> Result<i32, ValidationError> {
    let year: i32 = value
        .parse()
        .map_err(|_| ValidationError::InvalidYear(value.to_string()))?;

    if !SUPPORTED_YEARS.contains(&year) {
        return Err(ValidationError::YearOutOfRange { year });
    }

    Ok(year)
}

/// Accepts plain (`75000.50`) and scientific (`7.5e4`) notation. Anything
/// that is not a finite, non-negative number is rejected.
fn parse_salary(value: &str) -> Result<Decimal, ValidationError> {
    let salary = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| ValidationError::InvalidSalary(value.to_string()))?;

    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(ValidationError::InvalidSalary(value.to_string()));
    }

    Ok(salary)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn valid_request() {
        assert_eq!(validate_request("2020", "12345.67"), Ok((2020, dec!(12345.67))));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(validate_request(" 2021 ", " 1000 "), Ok((2021, dec!(1000))));
    }

    #[test]
    fn zero_salary_is_valid() {
        assert_eq!(validate_request("2022", "0"), Ok((2022, Decimal::ZERO)));
        assert_eq!(validate_request("2022", "-0"), Ok((2022, Decimal::ZERO)));
    }

    #[test]
    fn scientific_salary_is_valid() {
        assert_eq!(validate_request("2022", "7.5e4"), Ok((2022, dec!(75000))));
    }

    #[test]
    fn missing_year() {
        assert_eq!(validate_request("", "1000"), Err(ValidationError::Missing("year")));
    }

    #[test]
    fn missing_salary() {
        assert_eq!(validate_request("2021", ""), Err(ValidationError::Missing("salary")));
    }

    #[test]
    fn invalid_year_format() {
        assert_eq!(
            validate_request("abcd", "1000"),
            Err(ValidationError::InvalidYear("abcd".to_string()))
        );
    }

    #[test]
    fn invalid_salary_format() {
        for salary in ["abc", "NaN", "inf", "12,000"] {
            assert_eq!(
                validate_request("2021", salary),
                Err(ValidationError::InvalidSalary(salary.to_string())),
                "salary {salary}"
            );
        }
    }

    #[test]
    fn negative_salary() {
        assert_eq!(
            validate_request("2021", "-1"),
            Err(ValidationError::InvalidSalary("-1".to_string()))
        );
    }

    #[test]
    fn year_range_bounds() {
        for year in ["2019", "2020", "2022"] {
            assert!(validate_request(year, "1").is_ok(), "year {year}");
        }
        assert_eq!(
            validate_request("2018", "1"),
            Err(ValidationError::YearOutOfRange { year: 2018 })
        );
        assert_eq!(
            validate_request("2023", "1"),
            Err(ValidationError::YearOutOfRange { year: 2023 })
        );
    }

    #[test]
    fn out_of_range_message_names_supported_years() {
        let err = ValidationError::YearOutOfRange { year: 2018 };

        assert_eq!(
            err.to_string(),
            "year 2018 is out of supported range (2019 to 2022)"
        );
    }
}
