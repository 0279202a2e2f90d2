use crate::contract::types::{Contract, FieldType};
use serde_json::Value;

fn type_matches(value: &Value, expected: FieldType) -> bool {
    match expected {
        FieldType::Number => value.is_number(),
        FieldType::Integer => value.as_i64().is_some() || value.as_u64().is_some(),
        FieldType::Boolean => value.is_boolean(),
        FieldType::Text => value.is_string(),
        FieldType::List => value.is_array(),
        FieldType::Map => value.is_object(),
    }
}

fn type_name(expected: FieldType) -> &'static str {
    match expected {
        FieldType::Number => "number",
        FieldType::Integer => "integer",
        FieldType::Boolean => "boolean",
        FieldType::Text => "string",
        FieldType::List => "list",
        FieldType::Map => "map",
    }
}

/// Checks a serialized response against its contract: required fields
/// first, then types of the fields that are present, then numeric bounds.
/// Returns violation messages; an empty list means the response conforms.
/// Violations are data for the caller to report, so this never errors.
pub fn check_contract(response: &Value, contract: &Contract) -> Vec<String> {
    let mut violations = Vec::new();

    let fields = match response.as_object() {
        Some(fields) => fields,
        None => {
            violations.push(format!("{}: response is not an object", contract.name));
            return violations;
        }
    };

    for &key in contract.required {
        if !fields.contains_key(key) {
            violations.push(format!("missing field: {key}"));
        }
    }

    for &(key, expected) in contract.types {
        if let Some(value) = fields.get(key) {
            if !value.is_null() && !type_matches(value, expected) {
                violations.push(format!("{key}: expected {}, got {value}", type_name(expected)));
            }
        }
    }

    for &(key, bound) in contract.bounds {
        let value = match fields.get(key).and_then(|v| v.as_f64()) {
            Some(value) => value,
            None => continue,
        };
        if let Some(lo) = bound.lo {
            if bound.strict_lower && value <= lo {
                violations.push(format!("{key}={value} <= {lo}"));
            } else if !bound.strict_lower && value < lo {
                violations.push(format!("{key}={value} < {lo}"));
            }
        }
        if let Some(hi) = bound.hi {
            if value > hi {
                violations.push(format!("{key}={value} > {hi}"));
            }
        }
    }

    violations
}
