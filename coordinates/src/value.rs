use crate::errors::CoordinateErrors;
use serde::{Deserialize, Serialize};

/// A loosely typed coordinate component. Construction accepts numbers as
/// well as text that parses as a float, so callers handing over values read
/// from a file or user input don't have to pre-parse them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerces the value to an `f64`. Text is parsed as a float; `NaN` and
    /// unparseable text fail with [`CoordinateErrors::NotNumeric`] naming
    /// the offending value.
    pub fn as_f64(&self) -> Result<f64, CoordinateErrors> {
        match self {
            Value::Number(number) if number.is_nan() => {
                Err(CoordinateErrors::NotNumeric("NaN".to_string()))
            }
            Value::Number(number) => Ok(*number),
            Value::Text(text) => match text.trim().parse::<f64>() {
                Ok(number) if !number.is_nan() => Ok(number),
                _ => Err(CoordinateErrors::NotNumeric(text.clone())),
            },
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(number as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

/// Coerces a slice of loosely typed values to floats, failing on the first
/// element that is not numeric.
pub fn coerce_values(values: &[Value]) -> Result<Vec<f64>, CoordinateErrors> {
    values.iter().map(Value::as_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_passes_through() {
        assert_eq!(Value::from(2.5).as_f64(), Ok(2.5));
        assert_eq!(Value::from(-7).as_f64(), Ok(-7.0));
    }

    #[test]
    fn test_text_parses_as_float() {
        assert_eq!(Value::from("2.4").as_f64(), Ok(2.4));
        assert_eq!(Value::from(" -0.5 ").as_f64(), Ok(-0.5));
    }

    #[test]
    fn test_unparseable_text_fails() {
        assert_eq!(
            Value::from("b").as_f64(),
            Err(CoordinateErrors::NotNumeric("b".to_string()))
        );
    }

    #[test]
    fn test_nan_fails() {
        assert_eq!(
            Value::from(f64::NAN).as_f64(),
            Err(CoordinateErrors::NotNumeric("NaN".to_string()))
        );
        assert!(Value::from("NaN").as_f64().is_err());
    }

    #[test]
    fn test_coerce_values_reports_offender() {
        let values = [Value::from(1.0), Value::from("b"), Value::from(3.0)];
        assert_eq!(
            coerce_values(&values),
            Err(CoordinateErrors::NotNumeric("b".to_string()))
        );
    }
}
