//! Slot capture and code hook flag groups.
//!
//! Slot capture exposes five branch points (capture, capture failure, and
//! the code hook's success/failure/timeout), each with the same bundle of
//! response, next-step and conditional leaves. The bundles are flattened
//! into individually named flags and regrouped during assembly.

use clap::Args;
use shared::{BranchFlags, ConditionalFlags, DialogStateFlags, ElicitationHookFlags};

use crate::parse;

/// Branch point after the slot value is successfully captured.
#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// Capture response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub capture_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the capture response can be interrupted
    #[arg(long)]
    pub capture_response_allow_interrupt: Option<bool>,

    /// Dialog action type of the capture next step
    #[arg(long)]
    pub capture_next_step_action_type: Option<String>,

    /// Slot elicited by the capture next step
    #[arg(long)]
    pub capture_next_step_slot_to_elicit: Option<String>,

    /// Suppress the next message when the capture next step runs
    #[arg(long)]
    pub capture_next_step_suppress_next_message: Option<bool>,

    /// Intent switched to by the capture next step
    #[arg(long)]
    pub capture_next_step_intent_name: Option<String>,

    /// Slot overrides of the capture next step, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub capture_next_step_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the capture next step (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub capture_next_step_session_attributes: Option<parse::StringMap>,

    /// Whether the capture conditional is evaluated
    #[arg(long)]
    pub capture_conditional_active: Option<bool>,

    /// Capture conditional branches (JSON or @file)
    #[arg(long, value_parser = parse::branches)]
    pub capture_conditional_branches: Option<parse::BranchList>,

    /// Dialog action type of the capture default branch
    #[arg(long)]
    pub capture_default_branch_action_type: Option<String>,

    /// Slot elicited by the capture default branch
    #[arg(long)]
    pub capture_default_branch_slot_to_elicit: Option<String>,

    /// Suppress the next message when the capture default branch runs
    #[arg(long)]
    pub capture_default_branch_suppress_next_message: Option<bool>,

    /// Intent switched to by the capture default branch
    #[arg(long)]
    pub capture_default_branch_intent_name: Option<String>,

    /// Slot overrides of the capture default branch, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub capture_default_branch_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the capture default branch (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub capture_default_branch_session_attributes: Option<parse::StringMap>,

    /// Capture default branch response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub capture_default_branch_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the capture default branch response can be interrupted
    #[arg(long)]
    pub capture_default_branch_response_allow_interrupt: Option<bool>,
}

impl CaptureArgs {
    /// Collect the bound capture leaves.
    pub fn flags(&self) -> BranchFlags {
        BranchFlags {
            response_message_groups: self.capture_response_message_groups.clone().map(|g| g.0),
            response_allow_interrupt: self.capture_response_allow_interrupt,
            next_step: DialogStateFlags {
                action_type: self.capture_next_step_action_type.clone(),
                slot_to_elicit: self.capture_next_step_slot_to_elicit.clone(),
                suppress_next_message: self.capture_next_step_suppress_next_message,
                intent_name: self.capture_next_step_intent_name.clone(),
                intent_slots: self.capture_next_step_intent_slots.clone().map(|m| m.0),
                session_attributes: self
                    .capture_next_step_session_attributes
                    .clone()
                    .map(|m| m.0),
            },
            conditional: ConditionalFlags {
                active: self.capture_conditional_active,
                branches: self.capture_conditional_branches.clone().map(|b| b.0),
                default_branch_next_step: DialogStateFlags {
                    action_type: self.capture_default_branch_action_type.clone(),
                    slot_to_elicit: self.capture_default_branch_slot_to_elicit.clone(),
                    suppress_next_message: self.capture_default_branch_suppress_next_message,
                    intent_name: self.capture_default_branch_intent_name.clone(),
                    intent_slots: self
                        .capture_default_branch_intent_slots
                        .clone()
                        .map(|m| m.0),
                    session_attributes: self
                        .capture_default_branch_session_attributes
                        .clone()
                        .map(|m| m.0),
                },
                default_branch_response_message_groups: self
                    .capture_default_branch_response_message_groups
                    .clone()
                    .map(|g| g.0),
                default_branch_response_allow_interrupt: self
                    .capture_default_branch_response_allow_interrupt,
            },
        }
    }
}

/// Branch point when the slot value could not be captured.
#[derive(Debug, Args)]
pub struct CaptureFailureArgs {
    /// Failure response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub failure_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the failure response can be interrupted
    #[arg(long)]
    pub failure_response_allow_interrupt: Option<bool>,

    /// Dialog action type of the failure next step
    #[arg(long)]
    pub failure_next_step_action_type: Option<String>,

    /// Slot elicited by the failure next step
    #[arg(long)]
    pub failure_next_step_slot_to_elicit: Option<String>,

    /// Suppress the next message when the failure next step runs
    #[arg(long)]
    pub failure_next_step_suppress_next_message: Option<bool>,

    /// Intent switched to by the failure next step
    #[arg(long)]
    pub failure_next_step_intent_name: Option<String>,

    /// Slot overrides of the failure next step, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub failure_next_step_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the failure next step (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub failure_next_step_session_attributes: Option<parse::StringMap>,

    /// Whether the failure conditional is evaluated
    #[arg(long)]
    pub failure_conditional_active: Option<bool>,

    /// Failure conditional branches (JSON or @file)
    #[arg(long, value_parser = parse::branches)]
    pub failure_conditional_branches: Option<parse::BranchList>,

    /// Dialog action type of the failure default branch
    #[arg(long)]
    pub failure_default_branch_action_type: Option<String>,

    /// Slot elicited by the failure default branch
    #[arg(long)]
    pub failure_default_branch_slot_to_elicit: Option<String>,

    /// Suppress the next message when the failure default branch runs
    #[arg(long)]
    pub failure_default_branch_suppress_next_message: Option<bool>,

    /// Intent switched to by the failure default branch
    #[arg(long)]
    pub failure_default_branch_intent_name: Option<String>,

    /// Slot overrides of the failure default branch, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub failure_default_branch_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the failure default branch (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub failure_default_branch_session_attributes: Option<parse::StringMap>,

    /// Failure default branch response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub failure_default_branch_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the failure default branch response can be interrupted
    #[arg(long)]
    pub failure_default_branch_response_allow_interrupt: Option<bool>,
}

impl CaptureFailureArgs {
    /// Collect the bound capture-failure leaves.
    pub fn flags(&self) -> BranchFlags {
        BranchFlags {
            response_message_groups: self.failure_response_message_groups.clone().map(|g| g.0),
            response_allow_interrupt: self.failure_response_allow_interrupt,
            next_step: DialogStateFlags {
                action_type: self.failure_next_step_action_type.clone(),
                slot_to_elicit: self.failure_next_step_slot_to_elicit.clone(),
                suppress_next_message: self.failure_next_step_suppress_next_message,
                intent_name: self.failure_next_step_intent_name.clone(),
                intent_slots: self.failure_next_step_intent_slots.clone().map(|m| m.0),
                session_attributes: self
                    .failure_next_step_session_attributes
                    .clone()
                    .map(|m| m.0),
            },
            conditional: ConditionalFlags {
                active: self.failure_conditional_active,
                branches: self.failure_conditional_branches.clone().map(|b| b.0),
                default_branch_next_step: DialogStateFlags {
                    action_type: self.failure_default_branch_action_type.clone(),
                    slot_to_elicit: self.failure_default_branch_slot_to_elicit.clone(),
                    suppress_next_message: self.failure_default_branch_suppress_next_message,
                    intent_name: self.failure_default_branch_intent_name.clone(),
                    intent_slots: self
                        .failure_default_branch_intent_slots
                        .clone()
                        .map(|m| m.0),
                    session_attributes: self
                        .failure_default_branch_session_attributes
                        .clone()
                        .map(|m| m.0),
                },
                default_branch_response_message_groups: self
                    .failure_default_branch_response_message_groups
                    .clone()
                    .map(|g| g.0),
                default_branch_response_allow_interrupt: self
                    .failure_default_branch_response_allow_interrupt,
            },
        }
    }
}

/// Dialog code hook toggles for slot capture.
#[derive(Debug, Args)]
pub struct CodeHookArgs {
    /// Whether the code hook runs at runtime
    #[arg(long)]
    pub code_hook_active: Option<bool>,

    /// Whether the code hook is invoked during slot capture
    #[arg(long)]
    pub code_hook_enabled: Option<bool>,

    /// Label passed to the Lambda function
    #[arg(long)]
    pub code_hook_invocation_label: Option<String>,
}

/// Branch point after a successful code hook invocation.
#[derive(Debug, Args)]
pub struct HookSuccessArgs {
    /// Success response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub hook_success_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the success response can be interrupted
    #[arg(long)]
    pub hook_success_response_allow_interrupt: Option<bool>,

    /// Dialog action type of the success next step
    #[arg(long)]
    pub hook_success_next_step_action_type: Option<String>,

    /// Slot elicited by the success next step
    #[arg(long)]
    pub hook_success_next_step_slot_to_elicit: Option<String>,

    /// Suppress the next message when the success next step runs
    #[arg(long)]
    pub hook_success_next_step_suppress_next_message: Option<bool>,

    /// Intent switched to by the success next step
    #[arg(long)]
    pub hook_success_next_step_intent_name: Option<String>,

    /// Slot overrides of the success next step, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub hook_success_next_step_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the success next step (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub hook_success_next_step_session_attributes: Option<parse::StringMap>,

    /// Whether the success conditional is evaluated
    #[arg(long)]
    pub hook_success_conditional_active: Option<bool>,

    /// Success conditional branches (JSON or @file)
    #[arg(long, value_parser = parse::branches)]
    pub hook_success_conditional_branches: Option<parse::BranchList>,

    /// Dialog action type of the success default branch
    #[arg(long)]
    pub hook_success_default_branch_action_type: Option<String>,

    /// Slot elicited by the success default branch
    #[arg(long)]
    pub hook_success_default_branch_slot_to_elicit: Option<String>,

    /// Suppress the next message when the success default branch runs
    #[arg(long)]
    pub hook_success_default_branch_suppress_next_message: Option<bool>,

    /// Intent switched to by the success default branch
    #[arg(long)]
    pub hook_success_default_branch_intent_name: Option<String>,

    /// Slot overrides of the success default branch, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub hook_success_default_branch_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the success default branch (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub hook_success_default_branch_session_attributes: Option<parse::StringMap>,

    /// Success default branch response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub hook_success_default_branch_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the success default branch response can be interrupted
    #[arg(long)]
    pub hook_success_default_branch_response_allow_interrupt: Option<bool>,
}

impl HookSuccessArgs {
    /// Collect the bound success-branch leaves.
    pub fn flags(&self) -> BranchFlags {
        BranchFlags {
            response_message_groups: self
                .hook_success_response_message_groups
                .clone()
                .map(|g| g.0),
            response_allow_interrupt: self.hook_success_response_allow_interrupt,
            next_step: DialogStateFlags {
                action_type: self.hook_success_next_step_action_type.clone(),
                slot_to_elicit: self.hook_success_next_step_slot_to_elicit.clone(),
                suppress_next_message: self.hook_success_next_step_suppress_next_message,
                intent_name: self.hook_success_next_step_intent_name.clone(),
                intent_slots: self
                    .hook_success_next_step_intent_slots
                    .clone()
                    .map(|m| m.0),
                session_attributes: self
                    .hook_success_next_step_session_attributes
                    .clone()
                    .map(|m| m.0),
            },
            conditional: ConditionalFlags {
                active: self.hook_success_conditional_active,
                branches: self.hook_success_conditional_branches.clone().map(|b| b.0),
                default_branch_next_step: DialogStateFlags {
                    action_type: self.hook_success_default_branch_action_type.clone(),
                    slot_to_elicit: self.hook_success_default_branch_slot_to_elicit.clone(),
                    suppress_next_message: self
                        .hook_success_default_branch_suppress_next_message,
                    intent_name: self.hook_success_default_branch_intent_name.clone(),
                    intent_slots: self
                        .hook_success_default_branch_intent_slots
                        .clone()
                        .map(|m| m.0),
                    session_attributes: self
                        .hook_success_default_branch_session_attributes
                        .clone()
                        .map(|m| m.0),
                },
                default_branch_response_message_groups: self
                    .hook_success_default_branch_response_message_groups
                    .clone()
                    .map(|g| g.0),
                default_branch_response_allow_interrupt: self
                    .hook_success_default_branch_response_allow_interrupt,
            },
        }
    }
}

/// Branch point after a failed code hook invocation.
#[derive(Debug, Args)]
pub struct HookFailureArgs {
    /// Hook failure response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub hook_failure_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the hook failure response can be interrupted
    #[arg(long)]
    pub hook_failure_response_allow_interrupt: Option<bool>,

    /// Dialog action type of the hook failure next step
    #[arg(long)]
    pub hook_failure_next_step_action_type: Option<String>,

    /// Slot elicited by the hook failure next step
    #[arg(long)]
    pub hook_failure_next_step_slot_to_elicit: Option<String>,

    /// Suppress the next message when the hook failure next step runs
    #[arg(long)]
    pub hook_failure_next_step_suppress_next_message: Option<bool>,

    /// Intent switched to by the hook failure next step
    #[arg(long)]
    pub hook_failure_next_step_intent_name: Option<String>,

    /// Slot overrides of the hook failure next step, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub hook_failure_next_step_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the hook failure next step (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub hook_failure_next_step_session_attributes: Option<parse::StringMap>,

    /// Whether the hook failure conditional is evaluated
    #[arg(long)]
    pub hook_failure_conditional_active: Option<bool>,

    /// Hook failure conditional branches (JSON or @file)
    #[arg(long, value_parser = parse::branches)]
    pub hook_failure_conditional_branches: Option<parse::BranchList>,

    /// Dialog action type of the hook failure default branch
    #[arg(long)]
    pub hook_failure_default_branch_action_type: Option<String>,

    /// Slot elicited by the hook failure default branch
    #[arg(long)]
    pub hook_failure_default_branch_slot_to_elicit: Option<String>,

    /// Suppress the next message when the hook failure default branch runs
    #[arg(long)]
    pub hook_failure_default_branch_suppress_next_message: Option<bool>,

    /// Intent switched to by the hook failure default branch
    #[arg(long)]
    pub hook_failure_default_branch_intent_name: Option<String>,

    /// Slot overrides of the hook failure default branch, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub hook_failure_default_branch_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the hook failure default branch (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub hook_failure_default_branch_session_attributes: Option<parse::StringMap>,

    /// Hook failure default branch response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub hook_failure_default_branch_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the hook failure default branch response can be interrupted
    #[arg(long)]
    pub hook_failure_default_branch_response_allow_interrupt: Option<bool>,
}

impl HookFailureArgs {
    /// Collect the bound failure-branch leaves.
    pub fn flags(&self) -> BranchFlags {
        BranchFlags {
            response_message_groups: self
                .hook_failure_response_message_groups
                .clone()
                .map(|g| g.0),
            response_allow_interrupt: self.hook_failure_response_allow_interrupt,
            next_step: DialogStateFlags {
                action_type: self.hook_failure_next_step_action_type.clone(),
                slot_to_elicit: self.hook_failure_next_step_slot_to_elicit.clone(),
                suppress_next_message: self.hook_failure_next_step_suppress_next_message,
                intent_name: self.hook_failure_next_step_intent_name.clone(),
                intent_slots: self
                    .hook_failure_next_step_intent_slots
                    .clone()
                    .map(|m| m.0),
                session_attributes: self
                    .hook_failure_next_step_session_attributes
                    .clone()
                    .map(|m| m.0),
            },
            conditional: ConditionalFlags {
                active: self.hook_failure_conditional_active,
                branches: self.hook_failure_conditional_branches.clone().map(|b| b.0),
                default_branch_next_step: DialogStateFlags {
                    action_type: self.hook_failure_default_branch_action_type.clone(),
                    slot_to_elicit: self.hook_failure_default_branch_slot_to_elicit.clone(),
                    suppress_next_message: self
                        .hook_failure_default_branch_suppress_next_message,
                    intent_name: self.hook_failure_default_branch_intent_name.clone(),
                    intent_slots: self
                        .hook_failure_default_branch_intent_slots
                        .clone()
                        .map(|m| m.0),
                    session_attributes: self
                        .hook_failure_default_branch_session_attributes
                        .clone()
                        .map(|m| m.0),
                },
                default_branch_response_message_groups: self
                    .hook_failure_default_branch_response_message_groups
                    .clone()
                    .map(|g| g.0),
                default_branch_response_allow_interrupt: self
                    .hook_failure_default_branch_response_allow_interrupt,
            },
        }
    }
}

/// Branch point after a timed-out code hook invocation.
#[derive(Debug, Args)]
pub struct HookTimeoutArgs {
    /// Timeout response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub hook_timeout_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the timeout response can be interrupted
    #[arg(long)]
    pub hook_timeout_response_allow_interrupt: Option<bool>,

    /// Dialog action type of the timeout next step
    #[arg(long)]
    pub hook_timeout_next_step_action_type: Option<String>,

    /// Slot elicited by the timeout next step
    #[arg(long)]
    pub hook_timeout_next_step_slot_to_elicit: Option<String>,

    /// Suppress the next message when the timeout next step runs
    #[arg(long)]
    pub hook_timeout_next_step_suppress_next_message: Option<bool>,

    /// Intent switched to by the timeout next step
    #[arg(long)]
    pub hook_timeout_next_step_intent_name: Option<String>,

    /// Slot overrides of the timeout next step, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub hook_timeout_next_step_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the timeout next step (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub hook_timeout_next_step_session_attributes: Option<parse::StringMap>,

    /// Whether the timeout conditional is evaluated
    #[arg(long)]
    pub hook_timeout_conditional_active: Option<bool>,

    /// Timeout conditional branches (JSON or @file)
    #[arg(long, value_parser = parse::branches)]
    pub hook_timeout_conditional_branches: Option<parse::BranchList>,

    /// Dialog action type of the timeout default branch
    #[arg(long)]
    pub hook_timeout_default_branch_action_type: Option<String>,

    /// Slot elicited by the timeout default branch
    #[arg(long)]
    pub hook_timeout_default_branch_slot_to_elicit: Option<String>,

    /// Suppress the next message when the timeout default branch runs
    #[arg(long)]
    pub hook_timeout_default_branch_suppress_next_message: Option<bool>,

    /// Intent switched to by the timeout default branch
    #[arg(long)]
    pub hook_timeout_default_branch_intent_name: Option<String>,

    /// Slot overrides of the timeout default branch, keyed by slot name (JSON or @file)
    #[arg(long, value_parser = parse::slot_override_map)]
    pub hook_timeout_default_branch_intent_slots: Option<parse::SlotOverrideMap>,

    /// Session attributes set by the timeout default branch (JSON or @file)
    #[arg(long, value_parser = parse::string_map)]
    pub hook_timeout_default_branch_session_attributes: Option<parse::StringMap>,

    /// Timeout default branch response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub hook_timeout_default_branch_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the timeout default branch response can be interrupted
    #[arg(long)]
    pub hook_timeout_default_branch_response_allow_interrupt: Option<bool>,
}

impl HookTimeoutArgs {
    /// Collect the bound timeout-branch leaves.
    pub fn flags(&self) -> BranchFlags {
        BranchFlags {
            response_message_groups: self
                .hook_timeout_response_message_groups
                .clone()
                .map(|g| g.0),
            response_allow_interrupt: self.hook_timeout_response_allow_interrupt,
            next_step: DialogStateFlags {
                action_type: self.hook_timeout_next_step_action_type.clone(),
                slot_to_elicit: self.hook_timeout_next_step_slot_to_elicit.clone(),
                suppress_next_message: self.hook_timeout_next_step_suppress_next_message,
                intent_name: self.hook_timeout_next_step_intent_name.clone(),
                intent_slots: self
                    .hook_timeout_next_step_intent_slots
                    .clone()
                    .map(|m| m.0),
                session_attributes: self
                    .hook_timeout_next_step_session_attributes
                    .clone()
                    .map(|m| m.0),
            },
            conditional: ConditionalFlags {
                active: self.hook_timeout_conditional_active,
                branches: self.hook_timeout_conditional_branches.clone().map(|b| b.0),
                default_branch_next_step: DialogStateFlags {
                    action_type: self.hook_timeout_default_branch_action_type.clone(),
                    slot_to_elicit: self.hook_timeout_default_branch_slot_to_elicit.clone(),
                    suppress_next_message: self
                        .hook_timeout_default_branch_suppress_next_message,
                    intent_name: self.hook_timeout_default_branch_intent_name.clone(),
                    intent_slots: self
                        .hook_timeout_default_branch_intent_slots
                        .clone()
                        .map(|m| m.0),
                    session_attributes: self
                        .hook_timeout_default_branch_session_attributes
                        .clone()
                        .map(|m| m.0),
                },
                default_branch_response_message_groups: self
                    .hook_timeout_default_branch_response_message_groups
                    .clone()
                    .map(|g| g.0),
                default_branch_response_allow_interrupt: self
                    .hook_timeout_default_branch_response_allow_interrupt,
            },
        }
    }
}

/// Elicitation code hook toggles.
#[derive(Debug, Args)]
pub struct ElicitationHookArgs {
    /// Whether the code hook is invoked during slot elicitation
    #[arg(long)]
    pub elicitation_code_hook_enabled: Option<bool>,

    /// Label passed to the Lambda function during elicitation
    #[arg(long)]
    pub elicitation_code_hook_invocation_label: Option<String>,
}

impl ElicitationHookArgs {
    /// Collect the bound elicitation hook leaves.
    pub fn flags(&self) -> ElicitationHookFlags {
        ElicitationHookFlags {
            enable_code_hook_invocation: self.elicitation_code_hook_enabled,
            invocation_label: self.elicitation_code_hook_invocation_label.clone(),
        }
    }
}
