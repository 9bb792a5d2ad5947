//! Dialog state and conditional branching parameters.
//!
//! Next-step bundles are flattened into scalar flags on the command line;
//! conditional branches and slot overrides arrive as JSON. Assembly only
//! produces a sub-object when something inside it was actually bound.

use std::collections::HashMap;

use aws_sdk_lexmodelsv2::types::{
    Condition, ConditionalBranch, ConditionalSpecification, DefaultConditionalBranch,
    DialogAction, DialogActionType, DialogState, IntentOverride, SlotShape, SlotValue,
    SlotValueOverride,
};
use serde::Deserialize;
use validator::Validate;

use crate::messages::{self, MessageGroupSpec, ResponseSpec};
use crate::Result;

/// Dialog action inside a next-step override.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DialogActionSpec {
    /// Action type (ElicitSlot, EvaluateConditional, InvokeDialogCodeHook, ...)
    #[serde(rename = "type")]
    pub action_type: String,
    /// Slot to elicit next when the type is ElicitSlot
    #[serde(default)]
    pub slot_to_elicit: Option<String>,
    /// Suppress the next message in the conversation
    #[serde(default)]
    pub suppress_next_message: Option<bool>,
}

/// Value override for one slot inside an intent override.
///
/// For the List shape, `values` carries the member overrides.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SlotValueOverrideSpec {
    /// Scalar or List
    #[serde(default)]
    pub shape: Option<String>,
    /// Interpreted value for the Scalar shape
    #[serde(default)]
    pub value: Option<String>,
    /// Member overrides for the List shape
    #[serde(default)]
    #[validate(nested)]
    pub values: Option<Vec<SlotValueOverrideSpec>>,
}

/// Intent override inside a next-step.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct IntentOverrideSpec {
    /// Name of the intent to switch to
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// Slot values to carry into the intent, keyed by slot name
    #[serde(default)]
    #[validate(nested)]
    pub slots: Option<HashMap<String, SlotValueOverrideSpec>>,
}

/// A complete next-step supplied as one JSON object (used inside branches).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DialogStateSpec {
    /// Action Lex takes next
    #[serde(default)]
    #[validate(nested)]
    pub dialog_action: Option<DialogActionSpec>,
    /// Intent override applied when the step runs
    #[serde(default)]
    #[validate(nested)]
    pub intent: Option<IntentOverrideSpec>,
    /// Session attributes set when the step runs
    #[serde(default)]
    pub session_attributes: Option<HashMap<String, String>>,
}

/// One branch of a conditional.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ConditionalBranchSpec {
    /// Branch name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Expression evaluated against session state
    #[validate(length(min = 1, max = 1024))]
    pub condition: String,
    /// Where the conversation goes when the condition holds
    #[validate(nested)]
    pub next_step: DialogStateSpec,
    /// Response played when the branch is taken
    #[serde(default)]
    #[validate(nested)]
    pub response: Option<ResponseSpec>,
}

/// Flat leaf values for one next-step bundle.
#[derive(Debug, Clone, Default)]
pub struct DialogStateFlags {
    /// Dialog action type
    pub action_type: Option<String>,
    /// Slot to elicit next
    pub slot_to_elicit: Option<String>,
    /// Suppress the next message
    pub suppress_next_message: Option<bool>,
    /// Intent to switch to
    pub intent_name: Option<String>,
    /// Slot value overrides keyed by slot name
    pub intent_slots: Option<HashMap<String, SlotValueOverrideSpec>>,
    /// Session attributes to set
    pub session_attributes: Option<HashMap<String, String>>,
}

impl DialogStateFlags {
    /// True when no leaf of this bundle was bound.
    pub fn is_empty(&self) -> bool {
        self.action_type.is_none()
            && self.slot_to_elicit.is_none()
            && self.suppress_next_message.is_none()
            && self.intent_name.is_none()
            && self.intent_slots.is_none()
            && self.session_attributes.is_none()
    }
}

/// Flat leaf values for one conditional bundle.
#[derive(Debug, Clone, Default)]
pub struct ConditionalFlags {
    /// Whether the conditional is evaluated at runtime
    pub active: Option<bool>,
    /// Branches, evaluated in order
    pub branches: Option<Vec<ConditionalBranchSpec>>,
    /// Next-step of the default branch
    pub default_branch_next_step: DialogStateFlags,
    /// Response of the default branch
    pub default_branch_response_message_groups: Option<Vec<MessageGroupSpec>>,
    /// Whether the default branch response can be interrupted
    pub default_branch_response_allow_interrupt: Option<bool>,
}

impl ConditionalFlags {
    /// True when no leaf of this bundle was bound.
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
            && self.branches.is_none()
            && self.default_branch_next_step.is_empty()
            && self.default_branch_response_message_groups.is_none()
            && self.default_branch_response_allow_interrupt.is_none()
    }
}

/// One branch point: response, next step and conditional, all optional.
#[derive(Debug, Clone, Default)]
pub struct BranchFlags {
    /// Response message groups
    pub response_message_groups: Option<Vec<MessageGroupSpec>>,
    /// Whether the response can be interrupted
    pub response_allow_interrupt: Option<bool>,
    /// Next-step leaves
    pub next_step: DialogStateFlags,
    /// Conditional leaves
    pub conditional: ConditionalFlags,
}

impl BranchFlags {
    /// True when nothing at this branch point was bound.
    pub fn is_empty(&self) -> bool {
        self.response_message_groups.is_none()
            && self.response_allow_interrupt.is_none()
            && self.next_step.is_empty()
            && self.conditional.is_empty()
    }

    /// Assemble the (response, next step, conditional) triple, each `None`
    /// when its leaves were unbound.
    pub fn into_parts(
        self,
    ) -> Result<(
        Option<aws_sdk_lexmodelsv2::types::ResponseSpecification>,
        Option<DialogState>,
        Option<ConditionalSpecification>,
    )> {
        Ok((
            messages::response_specification(
                self.response_message_groups,
                self.response_allow_interrupt,
            )?,
            dialog_state(self.next_step)?,
            conditional_specification(self.conditional)?,
        ))
    }
}

impl SlotValueOverrideSpec {
    /// Convert into the SDK override shape.
    pub fn into_override(self) -> SlotValueOverride {
        let value = self
            .value
            .map(|v| SlotValue::builder().interpreted_value(v).build());
        let values = self.values.map(|overrides| {
            overrides
                .into_iter()
                .map(SlotValueOverrideSpec::into_override)
                .collect()
        });
        SlotValueOverride::builder()
            .set_shape(self.shape.map(|s| SlotShape::from(s.as_str())))
            .set_value(value)
            .set_values(values)
            .build()
    }
}

impl DialogStateSpec {
    /// Convert into the SDK dialog state shape.
    pub fn into_dialog_state(self) -> Result<DialogState> {
        let action = self
            .dialog_action
            .map(|a| {
                DialogAction::builder()
                    .r#type(DialogActionType::from(a.action_type.as_str()))
                    .set_slot_to_elicit(a.slot_to_elicit)
                    .set_suppress_next_message(a.suppress_next_message)
                    .build()
            })
            .transpose()?;
        let intent = self.intent.map(|i| {
            IntentOverride::builder()
                .set_name(i.name)
                .set_slots(i.slots.map(override_map))
                .build()
        });
        Ok(DialogState::builder()
            .set_dialog_action(action)
            .set_intent(intent)
            .set_session_attributes(self.session_attributes)
            .build())
    }
}

impl ConditionalBranchSpec {
    /// Convert into the SDK branch shape.
    pub fn into_branch(self) -> Result<ConditionalBranch> {
        let response = self.response.map(ResponseSpec::into_response).transpose()?;
        Ok(ConditionalBranch::builder()
            .name(self.name)
            .condition(
                Condition::builder()
                    .expression_string(self.condition)
                    .build()?,
            )
            .next_step(self.next_step.into_dialog_state()?)
            .set_response(response)
            .build()?)
    }
}

fn override_map(
    slots: HashMap<String, SlotValueOverrideSpec>,
) -> HashMap<String, SlotValueOverride> {
    slots
        .into_iter()
        .map(|(name, spec)| (name, spec.into_override()))
        .collect()
}

/// Assemble a dialog state when any of its leaves were bound.
pub fn dialog_state(flags: DialogStateFlags) -> Result<Option<DialogState>> {
    if flags.is_empty() {
        return Ok(None);
    }
    let action = if flags.action_type.is_some()
        || flags.slot_to_elicit.is_some()
        || flags.suppress_next_message.is_some()
    {
        Some(
            DialogAction::builder()
                .set_type(
                    flags
                        .action_type
                        .map(|t| DialogActionType::from(t.as_str())),
                )
                .set_slot_to_elicit(flags.slot_to_elicit)
                .set_suppress_next_message(flags.suppress_next_message)
                .build()?,
        )
    } else {
        None
    };
    let intent = if flags.intent_name.is_some() || flags.intent_slots.is_some() {
        Some(
            IntentOverride::builder()
                .set_name(flags.intent_name)
                .set_slots(flags.intent_slots.map(override_map))
                .build(),
        )
    } else {
        None
    };
    Ok(Some(
        DialogState::builder()
            .set_dialog_action(action)
            .set_intent(intent)
            .set_session_attributes(flags.session_attributes)
            .build(),
    ))
}

/// Assemble a conditional specification when any of its leaves were bound.
pub fn conditional_specification(
    flags: ConditionalFlags,
) -> Result<Option<ConditionalSpecification>> {
    if flags.is_empty() {
        return Ok(None);
    }
    let branches = flags
        .branches
        .map(|branches| {
            branches
                .into_iter()
                .map(ConditionalBranchSpec::into_branch)
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;
    let default_next_step = dialog_state(flags.default_branch_next_step)?;
    let default_response = messages::response_specification(
        flags.default_branch_response_message_groups,
        flags.default_branch_response_allow_interrupt,
    )?;
    let default_branch = if default_next_step.is_some() || default_response.is_some() {
        Some(
            DefaultConditionalBranch::builder()
                .set_next_step(default_next_step)
                .set_response(default_response)
                .build(),
        )
    } else {
        None
    };
    Ok(Some(
        ConditionalSpecification::builder()
            .set_active(flags.active)
            .set_conditional_branches(branches)
            .set_default_branch(default_branch)
            .build()?,
    ))
}
