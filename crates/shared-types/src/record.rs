//! The extraction target schema.
//!
//! [`FieldRecord`] is the strict output shape of the pipeline: fixed keys,
//! string-typed leaves, never null. [`FieldRecord::template`] exposes the
//! same shape as JSON and is the single source of truth for both the schema
//! merger and the validator's field-path list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A date split into its form components, all kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateParts {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// The claimant's address block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: String,
    pub house_number: String,
    pub entrance: String,
    pub apartment: String,
    pub city: String,
    pub postal_code: String,
    pub po_box: String,
}

/// Bottom-of-form section filled by the medical institution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalInstitutionFields {
    pub health_fund_member: String,
    pub nature_of_accident: String,
    pub medical_diagnoses: String,
}

/// The full form-283 record.
///
/// `FieldRecord::default()` is the canonical empty record: every leaf is an
/// empty string. Field declaration order matches the form's reading order
/// and is preserved through serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldRecord {
    pub last_name: String,
    pub first_name: String,
    pub id_number: String,
    pub gender: String,
    pub date_of_birth: DateParts,
    pub address: Address,
    pub landline_phone: String,
    pub mobile_phone: String,
    pub job_type: String,
    pub date_of_injury: DateParts,
    pub time_of_injury: String,
    pub accident_location: String,
    pub accident_address: String,
    pub accident_description: String,
    pub injured_body_part: String,
    pub signature: String,
    pub form_filling_date: DateParts,
    pub form_receipt_date_at_clinic: DateParts,
    pub medical_institution_fields: MedicalInstitutionFields,
}

impl FieldRecord {
    /// The schema as a JSON value, all leaves empty strings.
    ///
    /// Key order equals declaration order; leaf-path iteration anywhere in
    /// the pipeline derives from this value rather than a second list.
    pub fn template() -> Value {
        serde_json::to_value(FieldRecord::default())
            .expect("empty record serializes to plain JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_record_has_empty_leaves() {
        let record = FieldRecord::default();
        assert_eq!(record.last_name, "");
        assert_eq!(record.date_of_birth.day, "");
        assert_eq!(record.address.po_box, "");
        assert_eq!(record.medical_institution_fields.medical_diagnoses, "");
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(FieldRecord::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("lastName"));
        assert!(obj.contains_key("dateOfBirth"));
        assert!(obj["address"].as_object().unwrap().contains_key("houseNumber"));
        assert!(obj["address"].as_object().unwrap().contains_key("poBox"));
        assert!(obj.contains_key("medicalInstitutionFields"));
    }

    #[test]
    fn test_template_preserves_declaration_order() {
        let template = FieldRecord::template();
        let keys: Vec<&str> = template
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys[0], "lastName");
        assert_eq!(keys[1], "firstName");
        assert_eq!(*keys.last().unwrap(), "medicalInstitutionFields");
    }

    #[test]
    fn test_template_round_trips_to_record() {
        let record: FieldRecord = serde_json::from_value(FieldRecord::template()).unwrap();
        assert_eq!(record, FieldRecord::default());
    }

    #[test]
    fn test_deserializes_with_missing_keys() {
        let record: FieldRecord =
            serde_json::from_str(r#"{"lastName": "כהן"}"#).unwrap();
        assert_eq!(record.last_name, "כהן");
        assert_eq!(record.first_name, "");
    }
}
