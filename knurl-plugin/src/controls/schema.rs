//! Shape checks over raw, still-untyped declarations.

use serde_json::Value;

pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub fn is_number_pair(value: &Value) -> bool {
    value.as_array()
        .is_some_and(|entries| entries.len() == 2 && entries.iter().all(is_number))
}

pub fn is_bounds_object(settings: &Value) -> bool {
    settings.is_object() && has_number_field(settings, "min") && has_number_field(settings, "max")
}

pub fn has_number_field(object: &Value, field: &str) -> bool {
    object.get(field).is_some_and(is_number)
}
