//! Response shaping for command output.

use aws_sdk_lexmodelsv2::operation::update_slot::UpdateSlotOutput;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// Projection of the UpdateSlot response for JSON output.
#[derive(Debug, Serialize)]
pub struct SlotUpdateSummary {
    /// Bot the slot belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    /// Bot version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_version: Option<String>,
    /// Locale of the slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_id: Option<String>,
    /// Intent the slot belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<String>,
    /// Slot identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
    /// Slot name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_name: Option<String>,
    /// Slot description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Slot type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_type_id: Option<String>,
    /// Required or Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_constraint: Option<String>,
    /// Obfuscation applied to logged values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscation_setting: Option<String>,
    /// Whether the slot accepts multiple values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_values_allowed: Option<bool>,
    /// When the slot was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<DateTime<Utc>>,
    /// When the slot was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<DateTime<Utc>>,
}

impl From<&UpdateSlotOutput> for SlotUpdateSummary {
    fn from(output: &UpdateSlotOutput) -> Self {
        Self {
            bot_id: output.bot_id().map(str::to_string),
            bot_version: output.bot_version().map(str::to_string),
            locale_id: output.locale_id().map(str::to_string),
            intent_id: output.intent_id().map(str::to_string),
            slot_id: output.slot_id().map(str::to_string),
            slot_name: output.slot_name().map(str::to_string),
            description: output.description().map(str::to_string),
            slot_type_id: output.slot_type_id().map(str::to_string),
            slot_constraint: output
                .value_elicitation_setting()
                .map(|s| s.slot_constraint().as_str().to_string()),
            obfuscation_setting: output
                .obfuscation_setting()
                .map(|o| o.obfuscation_setting_type().as_str().to_string()),
            multiple_values_allowed: output
                .multiple_values_setting()
                .map(|m| m.allow_multiple_values()),
            creation_date_time: output.creation_date_time().and_then(to_chrono),
            last_updated_date_time: output.last_updated_date_time().and_then(to_chrono),
        }
    }
}

fn to_chrono(dt: &aws_sdk_lexmodelsv2::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(dt.secs(), dt.subsec_nanos())
}

/// Extract one field from rendered output by dotted path.
pub fn select_path(value: &Value, path: &str) -> Result<Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment).ok_or_else(|| {
            Error::Parameter(format!(
                "select path '{}' does not match any response field",
                path
            ))
        })?;
    }
    Ok(current.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_top_level_field() {
        let value = json!({"slot_id": "SLOT123", "slot_name": "City"});
        assert_eq!(select_path(&value, "slot_id").unwrap(), json!("SLOT123"));
    }

    #[test]
    fn test_select_nested_field() {
        let value = json!({"outer": {"inner": 42}});
        assert_eq!(select_path(&value, "outer.inner").unwrap(), json!(42));
    }

    #[test]
    fn test_select_missing_field_is_error() {
        let value = json!({"slot_id": "SLOT123"});
        let result = select_path(&value, "slot_arn");
        assert!(matches!(result, Err(Error::Parameter(_))));
    }

    #[test]
    fn test_summary_from_output() {
        let output = UpdateSlotOutput::builder()
            .bot_id("BOT1")
            .slot_id("SLOT1")
            .slot_name("City")
            .build();
        let summary = SlotUpdateSummary::from(&output);
        assert_eq!(summary.bot_id.as_deref(), Some("BOT1"));
        assert_eq!(summary.slot_id.as_deref(), Some("SLOT1"));
        assert!(summary.slot_constraint.is_none());
    }

    #[test]
    fn test_summary_serialization_skips_unset_fields() {
        let output = UpdateSlotOutput::builder().slot_id("SLOT1").build();
        let summary = SlotUpdateSummary::from(&output);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value, json!({"slot_id": "SLOT1"}));
    }
}
