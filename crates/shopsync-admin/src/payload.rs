//! Helpers for the opaque JSON bodies exchanged with the Admin API.
//!
//! Product, variant, image and metafield payloads are passed through without
//! validation. The only interpretation applied here is deciding whether a
//! successful response actually carried content.

use serde_json::{Map, Value};

use crate::error::AdminError;

/// `true` when the value carries no content: `null`, `false`, `""`, `[]`, `{}`
/// or a zero number.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Parses a response body, mapping a blank body or an empty JSON value to
/// `None`.
///
/// # Errors
///
/// Returns [`AdminError::Deserialize`] if a non-blank body is not valid JSON.
pub fn parse_body(context: &str, body: &str) -> Result<Option<Value>, AdminError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body).map_err(|source| AdminError::Deserialize {
        context: context.to_owned(),
        source,
    })?;
    Ok((!is_empty_value(&value)).then_some(value))
}

/// Concatenates the array under `field` from every page body, in page order.
/// Pages where the field is absent or `null` contribute nothing.
///
/// # Errors
///
/// Returns [`AdminError::Deserialize`] if any non-blank page is not valid JSON,
/// or [`AdminError::MissingField`] if the field is present but not an array.
pub fn concat_array_field<'a, I>(context: &str, field: &str, bodies: I) -> Result<Vec<Value>, AdminError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut items = Vec::new();
    for body in bodies {
        let Some(mut value) = parse_body(context, body)? else {
            continue;
        };
        match value.get_mut(field).map(Value::take) {
            Some(Value::Array(page_items)) => items.extend(page_items),
            None | Some(Value::Null) => {}
            Some(_) => {
                return Err(AdminError::MissingField {
                    context: context.to_owned(),
                    field: format!("{field}[]"),
                });
            }
        }
    }
    Ok(items)
}

/// Shallow merge of two JSON objects; keys from `overlay` win. A non-object
/// side is treated as an empty object.
#[must_use]
pub fn merge_payloads(base: &Value, overlay: &Value) -> Value {
    let mut merged: Map<String, Value> = base.as_object().cloned().unwrap_or_default();
    if let Some(extra) = overlay.as_object() {
        for (key, value) in extra {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}
