use serde_json::Value;

use super::DetailError;

/// One field assignment of a partial update.
///
/// Requests arrive as a JSON object keyed by field name; [`DetailUpdate::parse`]
/// is the only place those keys are inspected. Everything downstream matches on
/// the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailUpdate {
    Temperament(String),
    Length(f64),
    Weight(f64),
    /// Re-link the record to the pet type with this id.
    PetType(i32),
}

impl DetailUpdate {
    pub fn parse(field: &str, value: &Value) -> Result<Self, DetailError> {
        match field {
            "temperament" => match value {
                Value::String(s) => Ok(Self::Temperament(s.clone())),
                _ => Err(invalid_value(field)),
            },
            "length" => coerce_f64(value)
                .map(Self::Length)
                .ok_or_else(|| invalid_value(field)),
            "weight" => coerce_f64(value)
                .map(Self::Weight)
                .ok_or_else(|| invalid_value(field)),
            "petTypeId" => coerce_i32(value)
                .map(Self::PetType)
                .ok_or_else(|| invalid_value(field)),
            other => Err(DetailError::InvalidArgument(format!(
                "Unsupported field: {other}"
            ))),
        }
    }
}

fn invalid_value(field: &str) -> DetailError {
    DetailError::InvalidArgument(format!("Invalid value for {field}"))
}

/// Numbers are taken as-is, strings are parsed after trimming. `NaN` and
/// infinities are not measurements.
fn coerce_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|v: &f64| v.is_finite())
}

/// Accepts integral JSON numbers in `i32` range or their exact decimal text.
fn coerce_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
