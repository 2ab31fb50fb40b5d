//! Mechanical walk of the schema template.
//!
//! The validator's field-path list is derived from the template at call
//! time rather than maintained by hand, so schema and validator cannot
//! drift apart.

use serde_json::Value;

/// Dotted paths of every leaf, in template key order.
pub fn leaf_paths(template: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect(template, "", &mut paths);
    paths
}

fn collect(value: &Value, prefix: &str, paths: &mut Vec<String>) {
    match value.as_object() {
        Some(map) => {
            for (key, sub) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect(sub, &path, paths);
            }
        }
        None => paths.push(prefix.to_string()),
    }
}

/// Resolve a dotted path against a JSON value.
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, part| current.get(part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared_types::FieldRecord;

    #[test]
    fn test_walk_covers_nested_leaves_in_order() {
        let template = json!({"a": "", "b": {"c": "", "d": ""}, "e": ""});
        assert_eq!(leaf_paths(&template), vec!["a", "b.c", "b.d", "e"]);
    }

    #[test]
    fn test_schema_template_leaf_count() {
        let paths = leaf_paths(&FieldRecord::template());
        assert_eq!(paths.len(), 35);
        assert_eq!(paths[0], "lastName");
        assert_eq!(paths[4], "dateOfBirth.day");
        assert!(paths.contains(&"address.poBox".to_string()));
        assert_eq!(
            *paths.last().unwrap(),
            "medicalInstitutionFields.medicalDiagnoses"
        );
    }

    #[test]
    fn test_resolve_nested_path() {
        let value = json!({"address": {"city": "חיפה"}});
        assert_eq!(resolve(&value, "address.city"), Some(&json!("חיפה")));
        assert_eq!(resolve(&value, "address.street"), None);
        assert_eq!(resolve(&value, "missing.path"), None);
    }
}
