//! Field state and numeric input

use std::fmt::Display;
use std::str::FromStr;

/// Validation state of one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Not yet blurred or submitted
    #[default]
    Untouched,
    Valid,
    /// Message rendered inline next to the field
    Invalid(String),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Numeric input that tolerates half-typed text
///
/// The raw text is kept as typed (`""`, `"-"`, `"1."`). Text that parses
/// and lies within the optional bounds becomes the fallback value
/// immediately; on blur, text that does not parse is replaced by that
/// fallback. Parsed but out-of-range text is kept so validation can
/// report it.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField<T> {
    text: String,
    last_good: T,
    min: Option<T>,
    max: Option<T>,
}

impl<T> NumericField<T>
where
    T: FromStr + Display + Copy + PartialOrd,
{
    pub fn new(value: T) -> Self {
        Self {
            text: value.to_string(),
            last_good: value,
            min: None,
            max: None,
        }
    }

    /// Only values `>= min` become the fallback
    pub fn with_min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Only values within `min..=max` become the fallback
    pub fn with_range(mut self, min: T, max: T) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Raw text as shown in the input
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Value that would be saved now: the typed value if it parses,
    /// otherwise the fallback
    pub fn value(&self) -> T {
        self.parsed().unwrap_or(self.last_good)
    }

    /// Value a blur would fall back to
    pub fn last_good(&self) -> T {
        self.last_good
    }

    pub fn in_bounds(&self, value: &T) -> bool {
        self.min.is_none_or(|min| *value >= min) && self.max.is_none_or(|max| *value <= max)
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.remember_parsed();
    }

    /// Coerce the text; returns `true` if it had to be reset
    pub fn blur(&mut self) -> bool {
        match self.parsed() {
            Some(v) => {
                self.remember_parsed();
                self.text = v.to_string();
                false
            }
            None => {
                self.text = self.last_good.to_string();
                true
            }
        }
    }

    pub fn set(&mut self, value: T) {
        self.text = value.to_string();
        self.last_good = value;
    }

    fn parsed(&self) -> Option<T> {
        self.text.trim().parse::<T>().ok()
    }

    fn remember_parsed(&mut self) {
        if let Some(v) = self.parsed().filter(|v| self.in_bounds(v)) {
            self.last_good = v;
        }
    }
}

impl<T> Default for NumericField<T>
where
    T: FromStr + Display + Copy + PartialOrd + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_transient_text_keeps_last_good_value() {
        let mut field = NumericField::new(3_i32);
        field.input("");
        assert_eq!(field.text(), "");
        assert_eq!(field.value(), 3);

        field.input("-");
        assert_eq!(field.value(), 3);
        assert!(field.blur());
        assert_eq!(field.text(), "3");
    }

    #[test]
    fn test_parsed_text_updates_value() {
        let mut field = NumericField::new(1_i64);
        field.input("-");
        field.input("-4");
        assert_eq!(field.value(), -4);
        assert!(!field.blur());
        assert_eq!(field.text(), "-4");
    }

    #[test]
    fn test_out_of_range_text_is_not_a_fallback() {
        let mut field = NumericField::new(1_i32).with_range(1, 10);
        field.input("0");
        assert_eq!(field.value(), 0);
        assert_eq!(field.last_good(), 1);

        field.input("-");
        assert!(field.blur());
        assert_eq!(field.text(), "1");
        assert_eq!(field.value(), 1);
    }

    #[test]
    fn test_out_of_range_text_survives_blur() {
        let mut field = NumericField::new(5_i64).with_min(0);
        field.input("-2");
        assert!(!field.blur());
        assert_eq!(field.text(), "-2");
        assert_eq!(field.value(), -2);
        assert_eq!(field.last_good(), 5);
        assert!(!field.in_bounds(&-2));
    }

    #[test]
    fn test_decimal_field() {
        let mut field: NumericField<Decimal> = NumericField::default();
        field.input("2");
        assert_eq!(field.value(), Decimal::new(2, 0));
        field.input("2.75");
        assert!(!field.blur());
        assert_eq!(field.value(), Decimal::new(275, 2));
        assert_eq!(field.text(), "2.75");
    }

    #[test]
    fn test_field_state_message() {
        assert_eq!(FieldState::Invalid("x".into()).message(), Some("x"));
        assert!(FieldState::Untouched.message().is_none());
        assert!(!FieldState::Valid.is_invalid());
    }
}
