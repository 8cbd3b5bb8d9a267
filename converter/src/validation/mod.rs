//! JSON Schema validation for output records.
//!
//! The record schema is embedded at compile time from
//! `schemas/kaxabu-word.json` (Draft 7): all six keys are required strings,
//! `id`, `kaxabu`, `chinese` and `level` must be non-empty, extra keys are
//! rejected.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use kaxabu::validation::RecordValidator;
//!
//! let validator = RecordValidator::new().unwrap();
//! let record = json!({
//!     "id": "gen-0", "kaxabu": "aba", "chinese": "水",
//!     "level": "初級", "category": "", "note": ""
//! });
//! assert!(validator.validate(&record).is_ok());
//! ```

use serde_json::Value;

const RECORD_SCHEMA: &str = include_str!("../../schemas/kaxabu-word.json");

/// Validator for output records, compiled once from the embedded schema.
pub struct RecordValidator {
    validator: jsonschema::Validator,
}

impl RecordValidator {
    pub fn new() -> Result<Self, String> {
        let schema: Value = serde_json::from_str(RECORD_SCHEMA)
            .map_err(|e| format!("Invalid embedded schema: {}", e))?;
        let validator = jsonschema::draft7::new(&schema)
            .map_err(|e| format!("Invalid embedded schema: {}", e))?;
        Ok(Self { validator })
    }

    /// Validate one serialized record, returning every error message.
    pub fn validate(&self, record: &Value) -> Result<(), Vec<String>> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(record)
            .map(|e| e.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> RecordValidator {
        RecordValidator::new().unwrap()
    }

    #[test]
    fn test_valid_record() {
        let record = json!({
            "id": "gen-0",
            "kaxabu": "aba",
            "chinese": "水",
            "level": "初級",
            "category": "",
            "note": ""
        });
        assert!(validator().validate(&record).is_ok());
    }

    #[test]
    fn test_empty_term_invalid() {
        let record = json!({
            "id": "1",
            "kaxabu": "",
            "chinese": "水",
            "level": "初級",
            "category": "",
            "note": ""
        });
        assert!(validator().validate(&record).is_err());
    }

    #[test]
    fn test_missing_field_reports_errors() {
        let record = json!({ "id": "1", "kaxabu": "aba" });
        let errors = validator().validate(&record).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_extra_field_invalid() {
        let record = json!({
            "id": "1",
            "kaxabu": "aba",
            "chinese": "水",
            "level": "初級",
            "category": "",
            "note": "",
            "audio": "aba.mp3"
        });
        assert!(validator().validate(&record).is_err());
    }

    #[test]
    fn test_invisible_term_passes() {
        let record = json!({
            "id": "1",
            "kaxabu": "\u{feff}",
            "chinese": "水",
            "level": "初級",
            "category": "",
            "note": ""
        });
        assert!(validator().validate(&record).is_ok());
    }
}
