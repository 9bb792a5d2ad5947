//! Value elicitation assembly.
//!
//! Covers the prompt specification, default values, sample utterances,
//! wait-and-continue behavior, prompt attempt overrides and sub-slot
//! specifications of a slot's value elicitation setting.

use std::collections::HashMap;

use aws_sdk_lexmodelsv2::types::{
    AllowedInputTypes, AudioAndDtmfInputSpecification, AudioSpecification, DtmfSpecification,
    MessageSelectionStrategy, PromptAttempt, PromptAttemptSpecification, PromptSpecification,
    SampleUtterance,
    SlotCaptureSetting, SlotConstraint, SlotDefaultValue, SlotDefaultValueSpecification,
    SlotValueElicitationSetting, Specifications, StillWaitingResponseSpecification,
    SubSlotSetting, SubSlotValueElicitationSetting, TextInputSpecification,
    WaitAndContinueSpecification,
};
use serde::Deserialize;
use validator::Validate;

use crate::messages::{self, MessageGroupSpec, ResponseSpec};
use crate::Result;

/// Input types allowed during one prompt attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AllowedInputTypesSpec {
    /// Whether audio input is accepted
    pub allow_audio_input: bool,
    /// Whether DTMF input is accepted
    pub allow_dtmf_input: bool,
}

/// Audio timing for one prompt attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AudioSpec {
    /// Maximum audio length in milliseconds
    #[validate(range(min = 1))]
    pub max_length_ms: i32,
    /// Silence that ends the utterance, in milliseconds
    #[validate(range(min = 1))]
    pub end_timeout_ms: i32,
}

/// DTMF keypad settings for one prompt attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DtmfSpec {
    /// Maximum number of digits
    #[validate(range(min = 1, max = 1024))]
    pub max_length: i32,
    /// Silence that ends DTMF entry, in milliseconds
    #[validate(range(min = 1))]
    pub end_timeout_ms: i32,
    /// Digit that clears accumulated input
    #[validate(length(equal = 1))]
    pub deletion_character: String,
    /// Digit that ends input
    #[validate(length(equal = 1))]
    pub end_character: String,
}

/// Combined audio and DTMF settings for one prompt attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AudioAndDtmfInputSpec {
    /// Silence before the user is reprompted, in milliseconds
    #[validate(range(min = 1))]
    pub start_timeout_ms: i32,
    /// Audio settings
    #[serde(default)]
    #[validate(nested)]
    pub audio: Option<AudioSpec>,
    /// DTMF settings
    #[serde(default)]
    #[validate(nested)]
    pub dtmf: Option<DtmfSpec>,
}

/// Text input settings for one prompt attempt.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TextInputSpec {
    /// Time before the user is reprompted, in milliseconds
    #[validate(range(min = 1))]
    pub start_timeout_ms: i32,
}

/// Per-attempt prompt override, keyed by attempt name (Initial, Retry1, ...).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PromptAttemptSpec {
    /// Whether the user can interrupt the prompt
    #[serde(default)]
    pub allow_interrupt: Option<bool>,
    /// Input types accepted during the attempt
    #[validate(nested)]
    pub allowed_input_types: AllowedInputTypesSpec,
    /// Audio and DTMF settings
    #[serde(default)]
    #[validate(nested)]
    pub audio_and_dtmf_input: Option<AudioAndDtmfInputSpec>,
    /// Text settings
    #[serde(default)]
    #[validate(nested)]
    pub text_input: Option<TextInputSpec>,
}

/// A full prompt specification supplied as one JSON object (sub-slot form).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PromptSpec {
    /// Prompt message groups
    #[validate(length(min = 1, max = 5), nested)]
    pub message_groups: Vec<MessageGroupSpec>,
    /// Retries after the first failed attempt
    #[validate(range(min = 0, max = 5))]
    pub max_retries: i32,
    /// Whether the user can interrupt the prompt
    #[serde(default)]
    pub allow_interrupt: Option<bool>,
    /// Random or Ordered selection of message groups
    #[serde(default)]
    pub message_selection_strategy: Option<String>,
    /// Per-attempt overrides
    #[serde(default)]
    #[validate(nested)]
    pub prompt_attempts: Option<HashMap<String, PromptAttemptSpec>>,
}

/// Still-waiting response supplied as one JSON object (sub-slot form).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct StillWaitingResponseSpec {
    /// Message groups played while waiting
    #[validate(length(min = 1, max = 5), nested)]
    pub message_groups: Vec<MessageGroupSpec>,
    /// Seconds between repetitions
    #[validate(range(min = 1, max = 300))]
    pub frequency_in_seconds: i32,
    /// Seconds before Lex stops waiting
    #[validate(range(min = 1, max = 900))]
    pub timeout_in_seconds: i32,
    /// Whether the user can interrupt the response
    #[serde(default)]
    pub allow_interrupt: Option<bool>,
}

/// Wait-and-continue behavior supplied as one JSON object (sub-slot form).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct WaitAndContinueSpec {
    /// Whether the behavior is active
    #[serde(default)]
    pub active: Option<bool>,
    /// Response when the user asks Lex to wait
    #[validate(nested)]
    pub waiting_response: ResponseSpec,
    /// Response when the conversation resumes
    #[validate(nested)]
    pub continue_response: ResponseSpec,
    /// Response repeated while the user keeps Lex waiting
    #[serde(default)]
    #[validate(nested)]
    pub still_waiting_response: Option<StillWaitingResponseSpec>,
}

/// One sub-slot specification, keyed by sub-slot name.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SubSlotSpec {
    /// Slot type of the sub-slot
    #[validate(length(min = 1, max = 25))]
    pub slot_type_id: String,
    /// How the sub-slot's value is elicited
    #[validate(nested)]
    pub value_elicitation: SubSlotElicitationSpec,
}

/// Value elicitation for one sub-slot.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SubSlotElicitationSpec {
    /// Default values tried in order
    #[serde(default)]
    pub default_values: Option<Vec<String>>,
    /// Prompt for the sub-slot
    #[validate(nested)]
    pub prompt: PromptSpec,
    /// Sample utterances for the sub-slot
    #[serde(default)]
    pub sample_utterances: Option<Vec<String>>,
    /// Wait-and-continue behavior for the sub-slot
    #[serde(default)]
    #[validate(nested)]
    pub wait_and_continue: Option<WaitAndContinueSpec>,
}

/// Flat wait-and-continue leaves from the command line.
#[derive(Debug, Clone, Default)]
pub struct WaitAndContinueFlags {
    /// Whether the behavior is active
    pub active: Option<bool>,
    /// Waiting response message groups
    pub waiting_message_groups: Option<Vec<MessageGroupSpec>>,
    /// Whether the waiting response can be interrupted
    pub waiting_allow_interrupt: Option<bool>,
    /// Continue response message groups
    pub continue_message_groups: Option<Vec<MessageGroupSpec>>,
    /// Whether the continue response can be interrupted
    pub continue_allow_interrupt: Option<bool>,
    /// Still-waiting message groups
    pub still_waiting_message_groups: Option<Vec<MessageGroupSpec>>,
    /// Whether the still-waiting response can be interrupted
    pub still_waiting_allow_interrupt: Option<bool>,
    /// Seconds between still-waiting repetitions
    pub still_waiting_frequency_seconds: Option<i32>,
    /// Seconds before Lex stops waiting
    pub still_waiting_timeout_seconds: Option<i32>,
}

impl WaitAndContinueFlags {
    /// True when no leaf was bound.
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
            && self.waiting_message_groups.is_none()
            && self.waiting_allow_interrupt.is_none()
            && self.continue_message_groups.is_none()
            && self.continue_allow_interrupt.is_none()
            && !self.still_waiting_bound()
    }

    fn still_waiting_bound(&self) -> bool {
        self.still_waiting_message_groups.is_some()
            || self.still_waiting_allow_interrupt.is_some()
            || self.still_waiting_frequency_seconds.is_some()
            || self.still_waiting_timeout_seconds.is_some()
    }
}

/// Flat value-elicitation leaves from the command line.
#[derive(Debug, Clone, Default)]
pub struct ElicitationFlags {
    /// Required or Optional
    pub slot_constraint: String,
    /// Default values tried in order
    pub default_values: Option<Vec<String>>,
    /// Prompt message groups
    pub prompt_message_groups: Option<Vec<MessageGroupSpec>>,
    /// Retries after the first failed attempt
    pub prompt_max_retries: Option<i32>,
    /// Whether the user can interrupt the prompt
    pub prompt_allow_interrupt: Option<bool>,
    /// Random or Ordered selection of message groups
    pub prompt_message_selection_strategy: Option<String>,
    /// Per-attempt overrides
    pub prompt_attempts: Option<HashMap<String, PromptAttemptSpec>>,
    /// Sample utterances for the slot
    pub sample_utterances: Option<Vec<String>>,
    /// Wait-and-continue leaves
    pub wait_and_continue: WaitAndContinueFlags,
}

impl PromptAttemptSpec {
    fn into_attempt(self) -> Result<PromptAttemptSpecification> {
        let allowed = AllowedInputTypes::builder()
            .allow_audio_input(self.allowed_input_types.allow_audio_input)
            .allow_dtmf_input(self.allowed_input_types.allow_dtmf_input)
            .build()?;
        let audio_and_dtmf = self
            .audio_and_dtmf_input
            .map(|spec| {
                let audio = spec
                    .audio
                    .map(|a| {
                        AudioSpecification::builder()
                            .max_length_ms(a.max_length_ms)
                            .end_timeout_ms(a.end_timeout_ms)
                            .build()
                    })
                    .transpose()?;
                let dtmf = spec
                    .dtmf
                    .map(|d| {
                        DtmfSpecification::builder()
                            .max_length(d.max_length)
                            .end_timeout_ms(d.end_timeout_ms)
                            .deletion_character(d.deletion_character)
                            .end_character(d.end_character)
                            .build()
                    })
                    .transpose()?;
                AudioAndDtmfInputSpecification::builder()
                    .start_timeout_ms(spec.start_timeout_ms)
                    .set_audio_specification(audio)
                    .set_dtmf_specification(dtmf)
                    .build()
            })
            .transpose()?;
        let text = self
            .text_input
            .map(|t| {
                TextInputSpecification::builder()
                    .start_timeout_ms(t.start_timeout_ms)
                    .build()
            })
            .transpose()?;
        Ok(PromptAttemptSpecification::builder()
            .set_allow_interrupt(self.allow_interrupt)
            .allowed_input_types(allowed)
            .set_audio_and_dtmf_input_specification(audio_and_dtmf)
            .set_text_input_specification(text)
            .build())
    }
}

impl PromptSpec {
    /// Convert into the SDK prompt specification.
    pub fn into_prompt(self) -> Result<PromptSpecification> {
        Ok(PromptSpecification::builder()
            .set_message_groups(Some(messages::message_groups(self.message_groups)?))
            .max_retries(self.max_retries)
            .set_allow_interrupt(self.allow_interrupt)
            .set_message_selection_strategy(
                self.message_selection_strategy
                    .map(|s| MessageSelectionStrategy::from(s.as_str())),
            )
            .set_prompt_attempts_specification(
                self.prompt_attempts
                    .map(prompt_attempts_map)
                    .transpose()?
                    .map(prompt_attempts_by_enum),
            )
            .build()?)
    }
}

impl StillWaitingResponseSpec {
    fn into_still_waiting(self) -> Result<StillWaitingResponseSpecification> {
        Ok(StillWaitingResponseSpecification::builder()
            .set_message_groups(Some(messages::message_groups(self.message_groups)?))
            .frequency_in_seconds(self.frequency_in_seconds)
            .timeout_in_seconds(self.timeout_in_seconds)
            .set_allow_interrupt(self.allow_interrupt)
            .build()?)
    }
}

impl WaitAndContinueSpec {
    /// Convert into the SDK wait-and-continue shape.
    pub fn into_wait_and_continue(self) -> Result<WaitAndContinueSpecification> {
        Ok(WaitAndContinueSpecification::builder()
            .waiting_response(self.waiting_response.into_response()?)
            .continue_response(self.continue_response.into_response()?)
            .set_still_waiting_response(
                self.still_waiting_response
                    .map(StillWaitingResponseSpec::into_still_waiting)
                    .transpose()?,
            )
            .set_active(self.active)
            .build())
    }
}

impl SubSlotSpec {
    fn into_specifications(self) -> Result<Specifications> {
        Ok(Specifications::builder()
            .slot_type_id(self.slot_type_id)
            .value_elicitation_setting(self.value_elicitation.into_setting()?)
            .build()?)
    }
}

impl SubSlotElicitationSpec {
    fn into_setting(self) -> Result<SubSlotValueElicitationSetting> {
        let defaults = default_value_specification(self.default_values)?;
        let utterances = self.sample_utterances.map(sample_utterances).transpose()?;
        let wait = self
            .wait_and_continue
            .map(WaitAndContinueSpec::into_wait_and_continue)
            .transpose()?;
        Ok(SubSlotValueElicitationSetting::builder()
            .set_default_value_specification(defaults)
            .prompt_specification(self.prompt.into_prompt()?)
            .set_sample_utterances(utterances)
            .set_wait_and_continue_specification(wait)
            .build())
    }
}

fn prompt_attempts_map(
    specs: HashMap<String, PromptAttemptSpec>,
) -> Result<HashMap<String, PromptAttemptSpecification>> {
    specs
        .into_iter()
        .map(|(attempt, spec)| Ok((attempt, spec.into_attempt()?)))
        .collect()
}

fn prompt_attempts_by_enum(
    specs: HashMap<String, PromptAttemptSpecification>,
) -> HashMap<PromptAttempt, PromptAttemptSpecification> {
    specs
        .into_iter()
        .map(|(attempt, spec)| (PromptAttempt::from(attempt.as_str()), spec))
        .collect()
}

fn sample_utterances(utterances: Vec<String>) -> Result<Vec<SampleUtterance>> {
    utterances
        .into_iter()
        .map(|u| Ok(SampleUtterance::builder().utterance(u).build()?))
        .collect()
}

/// Build a default value specification when default values were given.
pub fn default_value_specification(
    values: Option<Vec<String>>,
) -> Result<Option<SlotDefaultValueSpecification>> {
    let Some(values) = values else {
        return Ok(None);
    };
    let list = values
        .into_iter()
        .map(|v| SlotDefaultValue::builder().default_value(v).build())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Some(
        SlotDefaultValueSpecification::builder()
            .set_default_value_list(Some(list))
            .build()?,
    ))
}

/// Build a prompt specification when any of its parameters were bound.
pub fn prompt_specification(
    message_groups: Option<Vec<MessageGroupSpec>>,
    max_retries: Option<i32>,
    allow_interrupt: Option<bool>,
    message_selection_strategy: Option<String>,
    prompt_attempts: Option<HashMap<String, PromptAttemptSpec>>,
) -> Result<Option<PromptSpecification>> {
    if message_groups.is_none()
        && max_retries.is_none()
        && allow_interrupt.is_none()
        && message_selection_strategy.is_none()
        && prompt_attempts.is_none()
    {
        return Ok(None);
    }
    let groups = message_groups.map(messages::message_groups).transpose()?;
    Ok(Some(
        PromptSpecification::builder()
            .set_message_groups(groups)
            .set_max_retries(max_retries)
            .set_allow_interrupt(allow_interrupt)
            .set_message_selection_strategy(
                message_selection_strategy.map(|s| MessageSelectionStrategy::from(s.as_str())),
            )
            .set_prompt_attempts_specification(
                prompt_attempts
                    .map(prompt_attempts_map)
                    .transpose()?
                    .map(prompt_attempts_by_enum),
            )
            .build()?,
    ))
}

/// Build a wait-and-continue specification when any of its leaves were bound.
pub fn wait_and_continue_specification(
    flags: WaitAndContinueFlags,
) -> Result<Option<WaitAndContinueSpecification>> {
    if flags.is_empty() {
        return Ok(None);
    }
    let still_waiting = if flags.still_waiting_bound() {
        let groups = flags
            .still_waiting_message_groups
            .map(messages::message_groups)
            .transpose()?;
        Some(
            StillWaitingResponseSpecification::builder()
                .set_message_groups(groups)
                .set_frequency_in_seconds(flags.still_waiting_frequency_seconds)
                .set_timeout_in_seconds(flags.still_waiting_timeout_seconds)
                .set_allow_interrupt(flags.still_waiting_allow_interrupt)
                .build()?,
        )
    } else {
        None
    };
    let waiting = messages::response_specification(
        flags.waiting_message_groups,
        flags.waiting_allow_interrupt,
    )?;
    let continue_response = messages::response_specification(
        flags.continue_message_groups,
        flags.continue_allow_interrupt,
    )?;
    Ok(Some(
        WaitAndContinueSpecification::builder()
            .set_waiting_response(waiting)
            .set_continue_response(continue_response)
            .set_still_waiting_response(still_waiting)
            .set_active(flags.active)
            .build(),
    ))
}

/// Build a sub-slot setting when an expression or specifications were given.
pub fn sub_slot_setting(
    expression: Option<String>,
    specifications: Option<HashMap<String, SubSlotSpec>>,
) -> Result<Option<SubSlotSetting>> {
    if expression.is_none() && specifications.is_none() {
        return Ok(None);
    }
    let specs = specifications
        .map(|map| {
            map.into_iter()
                .map(|(name, spec)| Ok((name, spec.into_specifications()?)))
                .collect::<Result<HashMap<_, _>>>()
        })
        .transpose()?;
    Ok(Some(
        SubSlotSetting::builder()
            .set_expression(expression)
            .set_slot_specifications(specs)
            .build(),
    ))
}

/// Assemble the complete value elicitation setting for the slot.
///
/// The slot constraint is always bound (the flag is required); every other
/// part is attached only when it was given.
pub fn value_elicitation_setting(
    flags: ElicitationFlags,
    capture: Option<SlotCaptureSetting>,
) -> Result<SlotValueElicitationSetting> {
    let prompt = prompt_specification(
        flags.prompt_message_groups,
        flags.prompt_max_retries,
        flags.prompt_allow_interrupt,
        flags.prompt_message_selection_strategy,
        flags.prompt_attempts,
    )?;
    let defaults = default_value_specification(flags.default_values)?;
    let utterances = flags.sample_utterances.map(sample_utterances).transpose()?;
    let wait = wait_and_continue_specification(flags.wait_and_continue)?;
    Ok(SlotValueElicitationSetting::builder()
        .slot_constraint(SlotConstraint::from(flags.slot_constraint.as_str()))
        .set_default_value_specification(defaults)
        .set_prompt_specification(prompt)
        .set_sample_utterances(utterances)
        .set_wait_and_continue_specification(wait)
        .set_slot_capture_setting(capture)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageSpec;
    use crate::params::parse_spec_map;
    use crate::Error;

    fn plain_groups(text: &str) -> Vec<MessageGroupSpec> {
        vec![MessageGroupSpec {
            message: MessageSpec {
                plain_text: Some(text.to_string()),
                custom_payload: None,
                ssml: None,
                image_response_card: None,
            },
            variations: None,
        }]
    }

    #[test]
    fn test_unbound_prompt_is_none() {
        assert!(prompt_specification(None, None, None, None, None)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_prompt_assembly() {
        let prompt = prompt_specification(
            Some(plain_groups("Which size?")),
            Some(2),
            Some(true),
            Some("Ordered".to_string()),
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(prompt.max_retries(), 2);
        assert_eq!(prompt.message_groups().len(), 1);
        assert_eq!(
            prompt.message_selection_strategy(),
            Some(&MessageSelectionStrategy::Ordered)
        );
    }

    #[test]
    fn test_prompt_without_retries_fails_to_build() {
        let result = prompt_specification(Some(plain_groups("Which size?")), None, None, None, None);
        assert!(matches!(result, Err(Error::Build(_))));
    }

    #[test]
    fn test_default_value_list() {
        let spec = default_value_specification(Some(vec![
            "[shippingAddress]".to_string(),
            "unknown".to_string(),
        ]))
        .unwrap()
        .unwrap();
        let list = spec.default_value_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].default_value(), "[shippingAddress]");
    }

    #[test]
    fn test_unbound_wait_and_continue_is_none() {
        assert!(
            wait_and_continue_specification(WaitAndContinueFlags::default())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_wait_and_continue_assembly() {
        let spec = wait_and_continue_specification(WaitAndContinueFlags {
            active: Some(true),
            waiting_message_groups: Some(plain_groups("One moment.")),
            continue_message_groups: Some(plain_groups("Where were we?")),
            still_waiting_message_groups: Some(plain_groups("Still there?")),
            still_waiting_frequency_seconds: Some(30),
            still_waiting_timeout_seconds: Some(300),
            ..Default::default()
        })
        .unwrap()
        .unwrap();
        assert_eq!(spec.active(), Some(true));
        let still = spec.still_waiting_response().unwrap();
        assert_eq!(still.frequency_in_seconds(), 30);
        assert_eq!(still.timeout_in_seconds(), 300);
    }

    #[test]
    fn test_prompt_attempts_from_json() {
        let raw = r##"{
            "Initial": {
                "allowed_input_types": {"allow_audio_input": true, "allow_dtmf_input": true},
                "audio_and_dtmf_input": {
                    "start_timeout_ms": 4000,
                    "audio": {"max_length_ms": 15000, "end_timeout_ms": 640},
                    "dtmf": {"max_length": 8, "end_timeout_ms": 5000,
                             "deletion_character": "*", "end_character": "#"}
                },
                "text_input": {"start_timeout_ms": 30000}
            }
        }"##;
        let specs: HashMap<String, PromptAttemptSpec> = parse_spec_map(raw).unwrap();
        let attempts = prompt_attempts_map(specs).unwrap();
        let initial = &attempts["Initial"];
        assert!(initial.allowed_input_types().allow_audio_input());
        let audio_and_dtmf = initial.audio_and_dtmf_input_specification().unwrap();
        assert_eq!(audio_and_dtmf.start_timeout_ms(), 4000);
        assert_eq!(
            audio_and_dtmf.dtmf_specification().unwrap().end_character(),
            "#"
        );
    }

    #[test]
    fn test_prompt_attempt_range_enforced() {
        let raw = r#"{
            "Initial": {
                "allowed_input_types": {"allow_audio_input": true, "allow_dtmf_input": false},
                "text_input": {"start_timeout_ms": 0}
            }
        }"#;
        let result: crate::Result<HashMap<String, PromptAttemptSpec>> = parse_spec_map(raw);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_unbound_sub_slots_is_none() {
        assert!(sub_slot_setting(None, None).unwrap().is_none());
    }

    #[test]
    fn test_sub_slot_assembly() {
        let raw = r#"{
            "FirstName": {
                "slot_type_id": "AMAZON.FirstName",
                "value_elicitation": {
                    "prompt": {
                        "message_groups": [{"message": {"plain_text": "First name?"}}],
                        "max_retries": 1
                    },
                    "sample_utterances": ["My name is {FirstName}"]
                }
            }
        }"#;
        let specs: HashMap<String, SubSlotSpec> = parse_spec_map(raw).unwrap();
        let setting = sub_slot_setting(Some("FirstName".to_string()), Some(specs))
            .unwrap()
            .unwrap();
        assert_eq!(setting.expression(), Some("FirstName"));
        let slot = &setting.slot_specifications().unwrap()["FirstName"];
        assert_eq!(slot.slot_type_id(), "AMAZON.FirstName");
        assert_eq!(
            slot.value_elicitation_setting().sample_utterances().len(),
            1
        );
    }

    #[test]
    fn test_value_elicitation_constraint_always_present() {
        let setting = value_elicitation_setting(
            ElicitationFlags {
                slot_constraint: "Required".to_string(),
                sample_utterances: Some(vec!["I want {Size}".to_string()]),
                ..Default::default()
            },
            None,
        )
        .unwrap();
        assert_eq!(setting.slot_constraint(), &SlotConstraint::Required);
        assert_eq!(setting.sample_utterances().len(), 1);
        assert!(setting.prompt_specification().is_none());
        assert!(setting.wait_and_continue_specification().is_none());
    }
}
