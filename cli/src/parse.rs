//! Wrapper types and value parsers for JSON-valued flags.
//!
//! clap treats a `Vec` field as a repeatable flag, so list- and map-shaped
//! parameters are wrapped in newtypes that parse from one flag value
//! (inline JSON or an `@file` reference).

use std::collections::HashMap;

use shared::dialog::{ConditionalBranchSpec, SlotValueOverrideSpec};
use shared::elicitation::{PromptAttemptSpec, SubSlotSpec};
use shared::messages::MessageGroupSpec;
use shared::params;

/// Message groups parsed from one flag value.
#[derive(Debug, Clone)]
pub struct MessageGroupList(pub Vec<MessageGroupSpec>);

/// Conditional branches parsed from one flag value.
#[derive(Debug, Clone)]
pub struct BranchList(pub Vec<ConditionalBranchSpec>);

/// String-to-string map parsed from one flag value.
#[derive(Debug, Clone)]
pub struct StringMap(pub HashMap<String, String>);

/// Slot value overrides keyed by slot name.
#[derive(Debug, Clone)]
pub struct SlotOverrideMap(pub HashMap<String, SlotValueOverrideSpec>);

/// Prompt attempt overrides keyed by attempt name.
#[derive(Debug, Clone)]
pub struct PromptAttemptMap(pub HashMap<String, PromptAttemptSpec>);

/// Sub-slot specifications keyed by sub-slot name.
#[derive(Debug, Clone)]
pub struct SubSlotMap(pub HashMap<String, SubSlotSpec>);

/// Parse a message group list flag.
pub fn message_groups(raw: &str) -> Result<MessageGroupList, String> {
    params::parse_spec_list(raw)
        .map(MessageGroupList)
        .map_err(|e| e.to_string())
}

/// Parse a conditional branch list flag.
pub fn branches(raw: &str) -> Result<BranchList, String> {
    params::parse_spec_list(raw)
        .map(BranchList)
        .map_err(|e| e.to_string())
}

/// Parse a string map flag.
pub fn string_map(raw: &str) -> Result<StringMap, String> {
    params::parse_string_map(raw)
        .map(StringMap)
        .map_err(|e| e.to_string())
}

/// Parse a slot override map flag.
pub fn slot_override_map(raw: &str) -> Result<SlotOverrideMap, String> {
    params::parse_spec_map(raw)
        .map(SlotOverrideMap)
        .map_err(|e| e.to_string())
}

/// Parse a prompt attempt map flag.
pub fn prompt_attempt_map(raw: &str) -> Result<PromptAttemptMap, String> {
    params::parse_spec_map(raw)
        .map(PromptAttemptMap)
        .map_err(|e| e.to_string())
}

/// Parse a sub-slot specification map flag.
pub fn sub_slot_map(raw: &str) -> Result<SubSlotMap, String> {
    params::parse_spec_map(raw)
        .map(SubSlotMap)
        .map_err(|e| e.to_string())
}
