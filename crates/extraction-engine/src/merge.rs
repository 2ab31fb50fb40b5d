//! Coercion of arbitrary extraction output into the strict schema.

use serde_json::{Map, Value};
use shared_types::FieldRecord;

/// Merge parsed extraction output into the schema template.
///
/// The template is the sole source of truth for the output shape: keys the
/// model invented are dropped, keys it omitted come back as empty strings,
/// and every leaf is coerced to its string form.
pub fn merge_extracted(extracted: &Value) -> FieldRecord {
    let merged = merge_with_template(extracted, &FieldRecord::template());
    serde_json::from_value(merged).unwrap_or_default()
}

/// Template-guided recursive merge. Pure and total.
pub fn merge_with_template(extracted: &Value, template: &Value) -> Value {
    let Some(template_map) = template.as_object() else {
        // template leaves are strings; scalars never reach here
        return template.clone();
    };

    let empty = Map::new();
    let extracted_map = extracted.as_object().unwrap_or(&empty);

    let mut result = Map::new();
    for (key, template_value) in template_map {
        let merged = if template_value.is_object() {
            merge_with_template(
                extracted_map.get(key).unwrap_or(&Value::Null),
                template_value,
            )
        } else {
            leaf_string(extracted_map.get(key))
        };
        result.insert(key.clone(), merged);
    }
    Value::Object(result)
}

/// String coercion for one leaf. Absent values, JSON `null`, and the literal
/// text `"null"` all become the empty string.
fn leaf_string(value: Option<&Value>) -> Value {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) if s == "null" => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    Value::String(text)
}
