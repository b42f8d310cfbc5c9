//! Asset-block validation
//!
//! Pure comparison of one observed asset-chain block (untrusted JSON)
//! against hand-verified ground truth. Never panics and never returns a
//! fault: every unreachable verdict becomes a [`ValidationError`] entry.
//!
//! The observed block is kept as raw [`serde_json::Value`] on purpose; the
//! type checks on each field are part of what is being diagnosed, so
//! deserializing into a typed struct up front would hide exactly the class
//! of upstream bugs this exists to catch.

use crate::types::{ExpectedAssetState, ValidationError};
use serde_json::Value;

/// Compare an observed asset block against its expected state.
///
/// If the response carries an `error` property the upstream failure is
/// reported as a single `rpc error` and no field checks run. Otherwise the
/// four semantic fields are checked independently; a single call can return
/// up to four errors.
pub fn validate_asset_block(
    observed: &Value,
    expected: &ExpectedAssetState,
) -> Vec<ValidationError> {
    if let Some(upstream) = observed.get("error") {
        let message = match upstream {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        return vec![ValidationError::rpc_error(expected.mint_block_hash, message)];
    }

    let mut errors = Vec::new();

    for (field, expected_value) in [
        ("block_hash", expected.block_hash),
        ("account", expected.account),
        ("owner", expected.owner),
    ] {
        if let Some(error) = check_string_field(observed, field, expected_value, expected) {
            errors.push(error);
        }
    }

    if let Some(error) = check_locked_field(observed, expected) {
        errors.push(error);
    }

    errors
}

/// Tolerant equality for the `locked` flag.
///
/// Upstream implementations have historically serialized the flag as the
/// strings `"true"`/`"false"`; those are accepted as matching the
/// corresponding boolean. Anything else does not match.
pub fn locked_matches(observed: &Value, expected: bool) -> bool {
    match observed {
        Value::Bool(actual) => *actual == expected,
        Value::String(text) => match text.as_str() {
            "true" => expected,
            "false" => !expected,
            _ => false,
        },
        _ => false,
    }
}

/// Semantic type name of a JSON value, in the `typeof` vocabulary the
/// indexing API's own tooling prints (`null` and containers are `object`,
/// a missing field is `undefined`).
pub fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "object",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) | Some(Value::Object(_)) => "object",
    }
}

/// Type check then value check for one string-typed field. Returns at most
/// one error; the two verdicts are mutually exclusive.
fn check_string_field(
    observed: &Value,
    field: &str,
    expected_value: &str,
    expected: &ExpectedAssetState,
) -> Option<ValidationError> {
    let actual = observed.get(field);
    let message = match actual.and_then(Value::as_str) {
        None => format!(
            "expected typeof {} to be 'string', got: '{}'",
            field,
            json_type_name(actual)
        ),
        Some(text) if text != expected_value => {
            format!("expected {} '{}', got: '{}'", field, expected_value, text)
        }
        Some(_) => return None,
    };
    Some(ValidationError::incorrect_data(
        expected.mint_block_hash,
        field,
        message,
    ))
}

fn check_locked_field(
    observed: &Value,
    expected: &ExpectedAssetState,
) -> Option<ValidationError> {
    let actual = observed.get("locked");
    let message = match actual {
        Some(value @ Value::Bool(_)) => {
            if locked_matches(value, expected.locked) {
                return None;
            }
            format!(
                "expected locked to be {}, got: {}",
                expected.locked,
                format_locked_actual(value)
            )
        }
        other => format!(
            "expected typeof locked to be 'boolean', got: '{}'",
            json_type_name(other)
        ),
    };
    Some(ValidationError::incorrect_data(
        expected.mint_block_hash,
        "locked",
        message,
    ))
}

/// Booleans print bare; any other actual value is quoted in the message.
fn format_locked_actual(value: &Value) -> String {
    match value {
        Value::Bool(actual) => actual.to_string(),
        Value::String(text) => format!("'{}'", text),
        other => format!("'{}'", other),
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
