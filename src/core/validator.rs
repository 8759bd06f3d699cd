use crate::domain::model::{ErrorKind, FieldError, NumericList};
use crate::utils::error::{CalcError, Result};
use serde_json::Value;

const VALUES_FIELD: &str = "values";

/// Validate a decoded `/calc/summarize` body.
///
/// Numbers are taken as-is; strings, booleans and nulls are never coerced.
/// Every offending element is reported, not only the first.
pub fn validate_summarize_request(payload: &Value) -> Result<NumericList> {
    let object = payload.as_object().ok_or_else(|| {
        CalcError::ValidationError(vec![FieldError::new(
            FieldError::body_path([]),
            ErrorKind::DictType,
            format!(
                "Input should be a valid object, got {}",
                json_type_name(payload)
            ),
        )])
    })?;

    let values = match object.get(VALUES_FIELD) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(CalcError::ValidationError(vec![FieldError::new(
                FieldError::body_path([VALUES_FIELD]),
                ErrorKind::ListType,
                "value is not a valid list",
            )]))
        }
        None => {
            return Err(CalcError::ValidationError(vec![FieldError::new(
                FieldError::body_path([VALUES_FIELD]),
                ErrorKind::Missing,
                "field required",
            )]))
        }
    };

    if values.is_empty() {
        return Err(CalcError::ValidationError(vec![FieldError::too_short(
            FieldError::body_path([VALUES_FIELD]),
            0,
        )]));
    }

    let mut numbers = Vec::with_capacity(values.len());
    let mut errors = Vec::new();
    for (index, item) in values.iter().enumerate() {
        match strict_number(item) {
            Some(number) => numbers.push(number),
            None => errors.push(FieldError::new(
                FieldError::element_path(index),
                ErrorKind::FloatType,
                format!(
                    "Item at index {} must be a number, got {}",
                    index,
                    json_type_name(item)
                ),
            )),
        }
    }

    if !errors.is_empty() {
        tracing::debug!("Rejected summarize payload with {} bad element(s)", errors.len());
        return Err(CalcError::ValidationError(errors));
    }

    NumericList::new(numbers)
}

fn strict_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
