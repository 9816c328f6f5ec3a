//! Field validation shared by every form.
//!
//! Forms keep raw input strings; `validate()` on each form turns them into a
//! typed payload or a [`FieldErrors`] map keyed by field name.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

pub static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern"));

/// Indian GSTIN: state code, PAN, entity number, `Z`, checksum.
pub static GST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z[0-9A-Z]{1}$").expect("gst pattern")
});

pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Field name -> first error for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error reported for a field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no errors were collected.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Declarative rules for one field.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static Lazy<Regex>>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn pattern(self, re: &'static Lazy<Regex>, error: &'static str) -> Self {
        Self {
            pattern: Some(re),
            custom_error: Some(error),
            ..self
        }
    }

    /// Empty optional values pass; the pattern only applies to non-empty input.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(format!("{field_label} is required"))
            } else {
                Ok(())
            };
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!("{field_label} must not exceed {max} characters"));
            }
        }

        if let Some(re) = self.pattern {
            if !re.is_match(value) {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Invalid {field_label}")));
            }
        }
        Ok(())
    }

    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        match self.min {
            Some(min) if value < min => Err(format!("{field_label} must be at least {min}")),
            _ => Ok(()),
        }
    }

    /// Parses `raw` and checks it against the numeric rules.
    pub fn parse_number(&self, raw: &str, field_label: &str) -> Result<Option<f64>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required {
                Err(format!("{field_label} is required"))
            } else {
                Ok(None)
            };
        }
        let value = parse_number(raw).ok_or_else(|| format!("{field_label} must be a number"))?;
        self.validate_number(value, field_label)?;
        Ok(Some(value))
    }
}

pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole, non-negative count (quantities).
pub fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Required number with a lower bound; `None` is recorded as an error.
pub fn required_number(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    label: &str,
    min: f64,
) -> Option<f64> {
    match ValidationRules::required().min(min).parse_number(raw, label) {
        Ok(v) => v,
        Err(e) => {
            errors.add(field, e);
            None
        }
    }
}

/// Optional number with a lower bound; empty input is `0`.
pub fn optional_number(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    label: &str,
    min: f64,
) -> f64 {
    match ValidationRules::none().min(min).parse_number(raw, label) {
        Ok(v) => v.unwrap_or(0.0),
        Err(e) => {
            errors.add(field, e);
            0.0
        }
    }
}

/// Whole count with bounds.
pub fn required_count(
    errors: &mut FieldErrors,
    field: &'static str,
    raw: &str,
    label: &str,
    min: u32,
    max: Option<u32>,
) -> Option<u32> {
    if raw.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
        return None;
    }
    let Some(v) = parse_count(raw) else {
        errors.add(field, format!("{label} must be a whole number"));
        return None;
    };
    if v < min {
        errors.add(field, format!("{label} must be at least {min}"));
        return None;
    }
    if let Some(max) = max {
        if v > max {
            errors.add(field, format!("{label} must not exceed {max}"));
            return None;
        }
    }
    Some(v)
}

/// Selected id from a `<select>`; `None` when nothing is chosen.
pub fn required_id(
    errors: &mut FieldErrors,
    field: &'static str,
    id: Option<i64>,
    label: &str,
) -> Option<i64> {
    if id.is_none() {
        errors.add(field, format!("{label} is required"));
    }
    id
}

pub fn required_text(errors: &mut FieldErrors, field: &'static str, raw: &str, label: &str) -> String {
    errors.check(field, ValidationRules::required().validate_string(raw, label));
    raw.trim().to_string()
}

pub fn optional_text(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    static MOBILE: ValidationRules =
        ValidationRules::required().pattern(&MOBILE_RE, "Invalid mobile number format");
    static GST: ValidationRules =
        ValidationRules::none().pattern(&GST_RE, "Invalid GST number format");

    #[test]
    fn mobile_pattern() {
        assert!(MOBILE.validate_string("9876543210", "Mobile").is_ok());
        assert_eq!(
            MOBILE.validate_string("98765", "Mobile"),
            Err("Invalid mobile number format".to_string())
        );
        assert_eq!(
            MOBILE.validate_string("", "Mobile"),
            Err("Mobile is required".to_string())
        );
    }

    #[test]
    fn optional_gst_only_checked_when_present() {
        assert!(GST.validate_string("", "GST").is_ok());
        assert!(GST.validate_string("27AAPFU0939F1ZV", "GST").is_ok());
        assert!(GST.validate_string("27aapfu0939f1zv", "GST").is_err());
    }

    #[test]
    fn email_pattern() {
        assert!(EMAIL_RE.is_match("a@b.co"));
        assert!(!EMAIL_RE.is_match("a@b"));
        assert!(!EMAIL_RE.is_match("a b@c.d"));
    }

    #[test]
    fn max_length_counts_characters_after_trim() {
        let name = ValidationRules::required().max_length(5);
        assert!(name.validate_string("  Zoë   ", "Name").is_ok());
        assert!(name.validate_string("ÅÅÅÅÅ", "Name").is_ok());
        assert_eq!(
            name.validate_string("Abcdef", "Name"),
            Err("Name must not exceed 5 characters".to_string())
        );
    }

    #[test]
    fn numeric_bounds() {
        let rules = ValidationRules::required().min(0.01);
        assert_eq!(rules.parse_number("12.5", "Unit price"), Ok(Some(12.5)));
        assert_eq!(
            rules.parse_number("0", "Unit price"),
            Err("Unit price must be at least 0.01".to_string())
        );
        assert_eq!(
            rules.parse_number("abc", "Unit price"),
            Err("Unit price must be a number".to_string())
        );
    }

    #[test]
    fn count_bounds_and_first_error_kept() {
        let mut errors = FieldErrors::new();
        assert_eq!(required_count(&mut errors, "quantity", "3", "Quantity", 1, Some(5)), Some(3));
        assert_eq!(required_count(&mut errors, "quantity", "9", "Quantity", 1, Some(5)), None);
        assert_eq!(required_count(&mut errors, "quantity", "", "Quantity", 1, None), None);
        assert_eq!(errors.get("quantity"), Some("Quantity must not exceed 5"));
        assert_eq!(errors.len(), 1);
    }
}
