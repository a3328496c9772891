use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap());

const NAME_LEN: (usize, usize) = (2, 80);
const CITY_LEN: (usize, usize) = (2, 50);
const EMPLOYMENT_LEN: (usize, usize) = (2, 30);

pub const DEFAULT_EMPLOYMENT: &str = "Salaried";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInterestLead {
    pub name: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInquiry {
    pub full_name: String,
    pub monthly_income: String,
    pub city: String,
    pub employment_type: String,
}

impl Default for LoanInquiry {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            monthly_income: String::new(),
            city: String::new(),
            employment_type: DEFAULT_EMPLOYMENT.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InquiryField {
    FullName,
    MonthlyIncome,
    City,
    EmploymentType,
}

impl InquiryField {
    pub const ALL: [InquiryField; 4] = [
        InquiryField::FullName,
        InquiryField::MonthlyIncome,
        InquiryField::City,
        InquiryField::EmploymentType,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InquiryField::FullName => "fullName",
            InquiryField::MonthlyIncome => "monthlyIncome",
            InquiryField::City => "city",
            InquiryField::EmploymentType => "employmentType",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Enter your full name")]
    NameTooShort,
    #[error("Name is too long")]
    NameTooLong,
    #[error("Enter your monthly income")]
    IncomeMissing,
    #[error("Use numbers only")]
    IncomeNotNumeric,
    #[error("Income must be > 0")]
    IncomeNotPositive,
    #[error("Enter your city")]
    CityTooShort,
    #[error("City is too long")]
    CityTooLong,
    #[error("Enter employment type")]
    EmploymentTooShort,
    #[error("Too long")]
    EmploymentTooLong,
}

/// First failing rule per field. An empty report means the inquiry is valid.
pub type ValidationReport = BTreeMap<InquiryField, InquiryError>;

impl LoanInquiry {
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::FullName => &self.full_name,
            InquiryField::MonthlyIncome => &self.monthly_income,
            InquiryField::City => &self.city,
            InquiryField::EmploymentType => &self.employment_type,
        }
    }

    pub fn set(&mut self, field: InquiryField, value: String) {
        match field {
            InquiryField::FullName => self.full_name = value,
            InquiryField::MonthlyIncome => self.monthly_income = value,
            InquiryField::City => self.city = value,
            InquiryField::EmploymentType => self.employment_type = value,
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            monthly_income: self.monthly_income.trim().to_string(),
            city: self.city.trim().to_string(),
            employment_type: self.employment_type.trim().to_string(),
        }
    }
}

pub fn validate_field(field: InquiryField, raw: &str) -> Result<(), InquiryError> {
    let value = raw.trim();
    match field {
        InquiryField::FullName => check_length(
            value,
            NAME_LEN,
            InquiryError::NameTooShort,
            InquiryError::NameTooLong,
        ),
        InquiryField::MonthlyIncome => check_income(value),
        InquiryField::City => check_length(
            value,
            CITY_LEN,
            InquiryError::CityTooShort,
            InquiryError::CityTooLong,
        ),
        InquiryField::EmploymentType => check_length(
            value,
            EMPLOYMENT_LEN,
            InquiryError::EmploymentTooShort,
            InquiryError::EmploymentTooLong,
        ),
    }
}

pub fn validate(inquiry: &LoanInquiry) -> ValidationReport {
    InquiryField::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, inquiry.get(field))
                .err()
                .map(|error| (field, error))
        })
        .collect()
}

fn check_length(
    value: &str,
    (min, max): (usize, usize),
    too_short: InquiryError,
    too_long: InquiryError,
) -> Result<(), InquiryError> {
    let len = value.chars().count();
    if len < min {
        Err(too_short)
    } else if len > max {
        Err(too_long)
    } else {
        Ok(())
    }
}

fn check_income(value: &str) -> Result<(), InquiryError> {
    if value.is_empty() {
        return Err(InquiryError::IncomeMissing);
    }
    if !DECIMAL.is_match(value) {
        return Err(InquiryError::IncomeNotNumeric);
    }
    match value.parse::<f64>() {
        Ok(amount) if amount > 0.0 => Ok(()),
        _ => Err(InquiryError::IncomeNotPositive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LoanInquiry {
        LoanInquiry {
            full_name: "Asha Rao".to_string(),
            monthly_income: "75000".to_string(),
            city: "Mumbai".to_string(),
            employment_type: "Salaried".to_string(),
        }
    }

    #[test]
    fn defaults_prefill_employment_only() {
        let inquiry = LoanInquiry::default();
        assert_eq!(inquiry.employment_type, "Salaried");
        assert!(inquiry.full_name.is_empty());
        assert!(inquiry.monthly_income.is_empty());
        assert!(inquiry.city.is_empty());
    }

    #[test]
    fn complete_inquiry_has_empty_report() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn default_inquiry_reports_every_empty_field() {
        let report = validate(&LoanInquiry::default());
        assert_eq!(report.get(&InquiryField::FullName), Some(&InquiryError::NameTooShort));
        assert_eq!(report.get(&InquiryField::MonthlyIncome), Some(&InquiryError::IncomeMissing));
        assert_eq!(report.get(&InquiryField::City), Some(&InquiryError::CityTooShort));
        assert!(!report.contains_key(&InquiryField::EmploymentType));
    }

    #[test]
    fn full_name_length_bounds_apply_after_trim() {
        for len in 0..=90 {
            let name = format!("  {}  ", "a".repeat(len));
            let result = validate_field(InquiryField::FullName, &name);
            match len {
                0 | 1 => assert_eq!(result, Err(InquiryError::NameTooShort), "len {}", len),
                2..=80 => assert_eq!(result, Ok(()), "len {}", len),
                _ => assert_eq!(result, Err(InquiryError::NameTooLong), "len {}", len),
            }
        }
    }

    #[test]
    fn income_samples() {
        let cases = [
            ("", Err(InquiryError::IncomeMissing)),
            ("   ", Err(InquiryError::IncomeMissing)),
            ("0", Err(InquiryError::IncomeNotPositive)),
            ("0.00", Err(InquiryError::IncomeNotPositive)),
            ("-5", Err(InquiryError::IncomeNotNumeric)),
            ("abc", Err(InquiryError::IncomeNotNumeric)),
            ("12.", Err(InquiryError::IncomeNotNumeric)),
            ("1e5", Err(InquiryError::IncomeNotNumeric)),
            ("75000", Ok(())),
            ("75000.50", Ok(())),
            (" 75000 ", Ok(())),
        ];
        for (input, expected) in cases {
            assert_eq!(validate_field(InquiryField::MonthlyIncome, input), expected, "{:?}", input);
        }
    }

    #[test]
    fn city_and_employment_bounds() {
        assert_eq!(validate_field(InquiryField::City, "X"), Err(InquiryError::CityTooShort));
        assert_eq!(validate_field(InquiryField::City, &"c".repeat(51)), Err(InquiryError::CityTooLong));
        assert_eq!(validate_field(InquiryField::City, &"c".repeat(50)), Ok(()));
        assert_eq!(
            validate_field(InquiryField::EmploymentType, " "),
            Err(InquiryError::EmploymentTooShort)
        );
        assert_eq!(
            validate_field(InquiryField::EmploymentType, &"e".repeat(31)),
            Err(InquiryError::EmploymentTooLong)
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert_eq!(validate_field(InquiryField::City, "पुणे"), Ok(()));
        assert_eq!(validate_field(InquiryField::FullName, &"é".repeat(80)), Ok(()));
    }

    #[test]
    fn errors_display_user_messages() {
        assert_eq!(InquiryError::NameTooShort.to_string(), "Enter your full name");
        assert_eq!(InquiryError::IncomeNotPositive.to_string(), "Income must be > 0");
        assert_eq!(InquiryError::EmploymentTooLong.to_string(), "Too long");
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["fullName"], "Asha Rao");
        assert_eq!(json["monthlyIncome"], "75000");
        assert_eq!(json["employmentType"], "Salaried");
    }
}
