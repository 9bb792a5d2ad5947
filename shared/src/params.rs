//! Coercion of JSON-valued parameters.
//!
//! Complex parameters (message groups, conditional branches, sub-slot
//! specifications) arrive as inline JSON or as an `@path` reference to a
//! JSON file. Scalar maps (session attributes, intent slot overrides) use
//! the same mechanism.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use validator::Validate;

use crate::{Error, Result};

/// Parse a parameter value as JSON, reading from a file when the value
/// starts with `@`.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let text = if let Some(path) = raw.strip_prefix('@') {
        debug!("Reading parameter value from {}", path);
        fs::read_to_string(path)?
    } else {
        raw.to_string()
    };
    serde_json::from_str(&text)
        .map_err(|e| Error::Parameter(format!("invalid JSON parameter value: {}", e)))
}

/// Parse a single spec object and check its constraints.
pub fn parse_spec<T>(raw: &str) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T = parse_json(raw)?;
    value
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))?;
    Ok(value)
}

/// Parse a list of spec objects and check each one's constraints.
pub fn parse_spec_list<T>(raw: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned + Validate,
{
    let values: Vec<T> = parse_json(raw)?;
    for value in &values {
        value
            .validate()
            .map_err(|e| Error::Validation(e.to_string()))?;
    }
    Ok(values)
}

/// Parse a name-keyed map of spec objects and check each one's constraints.
pub fn parse_spec_map<T>(raw: &str) -> Result<HashMap<String, T>>
where
    T: DeserializeOwned + Validate,
{
    let values: HashMap<String, T> = parse_json(raw)?;
    for value in values.values() {
        value
            .validate()
            .map_err(|e| Error::Validation(e.to_string()))?;
    }
    Ok(values)
}

/// Coerce a JSON object of string pairs into a map.
pub fn parse_string_map(raw: &str) -> Result<HashMap<String, String>> {
    parse_json(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_inline_map() {
        let map = parse_string_map(r#"{"checkedValue": "yes", "region": "us-east-1"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["checkedValue"], "yes");
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"source": "file"}}"#).unwrap();
        let arg = format!("@{}", file.path().display());
        let map = parse_string_map(&arg).unwrap();
        assert_eq!(map["source"], "file");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = parse_string_map("@/no/such/file.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_parameter_error() {
        let result = parse_string_map("{not json");
        match result {
            Err(Error::Parameter(message)) => {
                assert!(message.contains("invalid JSON parameter value"))
            }
            other => panic!("expected parameter error, got {:?}", other),
        }
    }
}
