//! Field-format checks. Violations become warnings, never errors.

use shared_types::FieldRecord;

/// Run all format checks over a record, returning human-readable warnings.
/// Empty fields are not checked — completeness scoring covers those.
pub fn check_formats(record: &FieldRecord) -> Vec<String> {
    let mut warnings = Vec::new();

    if !record.id_number.is_empty() {
        let digits = digit_count(&record.id_number);
        if digits != 9 && digits != 10 {
            warnings.push(format!("Invalid ID number length: {digits} digits"));
        }
    }

    if !record.mobile_phone.is_empty() {
        let digits: String = record
            .mobile_phone
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if !digits.starts_with("05") || digits.len() != 10 {
            warnings.push("Invalid mobile phone format".to_string());
        }
    }

    warnings
}

fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}
