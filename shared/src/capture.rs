//! Slot capture and dialog code hook assembly.
//!
//! The capture setting carries five branch points (capture, capture
//! failure, and the code hook's success/failure/timeout) plus the code
//! hook toggles. The whole setting is omitted when none of them was bound.

use aws_sdk_lexmodelsv2::types::{
    DialogCodeHookInvocationSetting, ElicitationCodeHookInvocationSetting,
    PostDialogCodeHookInvocationSpecification, SlotCaptureSetting,
};

use crate::dialog::BranchFlags;
use crate::Result;

/// Dialog code hook parameters: invocation toggles plus the three
/// post-invocation branch points.
#[derive(Debug, Clone, Default)]
pub struct CodeHookFlags {
    /// Whether the hook runs at runtime
    pub active: Option<bool>,
    /// Whether the hook is invoked during slot capture
    pub enable_code_hook_invocation: Option<bool>,
    /// Label passed to the Lambda function
    pub invocation_label: Option<String>,
    /// Branch point after a successful invocation
    pub success: BranchFlags,
    /// Branch point after a failed invocation
    pub failure: BranchFlags,
    /// Branch point after a timed-out invocation
    pub timeout: BranchFlags,
}

impl CodeHookFlags {
    /// True when no code hook parameter was bound.
    pub fn is_empty(&self) -> bool {
        self.active.is_none()
            && self.enable_code_hook_invocation.is_none()
            && self.invocation_label.is_none()
            && self.success.is_empty()
            && self.failure.is_empty()
            && self.timeout.is_empty()
    }
}

/// Elicitation code hook parameters.
#[derive(Debug, Clone, Default)]
pub struct ElicitationHookFlags {
    /// Whether the hook is invoked during slot elicitation
    pub enable_code_hook_invocation: Option<bool>,
    /// Label passed to the Lambda function
    pub invocation_label: Option<String>,
}

impl ElicitationHookFlags {
    /// True when no elicitation hook parameter was bound.
    pub fn is_empty(&self) -> bool {
        self.enable_code_hook_invocation.is_none() && self.invocation_label.is_none()
    }
}

/// Build the dialog code hook setting when any of its parameters were bound.
pub fn dialog_code_hook(flags: CodeHookFlags) -> Result<Option<DialogCodeHookInvocationSetting>> {
    if flags.is_empty() {
        return Ok(None);
    }
    let (success_response, success_next_step, success_conditional) = flags.success.into_parts()?;
    let (failure_response, failure_next_step, failure_conditional) = flags.failure.into_parts()?;
    let (timeout_response, timeout_next_step, timeout_conditional) = flags.timeout.into_parts()?;
    let post = PostDialogCodeHookInvocationSpecification::builder()
        .set_success_response(success_response)
        .set_success_next_step(success_next_step)
        .set_success_conditional(success_conditional)
        .set_failure_response(failure_response)
        .set_failure_next_step(failure_next_step)
        .set_failure_conditional(failure_conditional)
        .set_timeout_response(timeout_response)
        .set_timeout_next_step(timeout_next_step)
        .set_timeout_conditional(timeout_conditional)
        .build();
    Ok(Some(
        DialogCodeHookInvocationSetting::builder()
            .set_enable_code_hook_invocation(flags.enable_code_hook_invocation)
            .set_active(flags.active)
            .set_invocation_label(flags.invocation_label)
            .post_code_hook_specification(post)
            .build()?,
    ))
}

/// Build the elicitation code hook setting when any of its parameters were
/// bound.
pub fn elicitation_code_hook(
    flags: ElicitationHookFlags,
) -> Result<Option<ElicitationCodeHookInvocationSetting>> {
    if flags.is_empty() {
        return Ok(None);
    }
    Ok(Some(
        ElicitationCodeHookInvocationSetting::builder()
            .set_enable_code_hook_invocation(flags.enable_code_hook_invocation)
            .set_invocation_label(flags.invocation_label)
            .build()?,
    ))
}

/// Build the slot capture setting when any of its branch points or hooks
/// were bound.
pub fn slot_capture_setting(
    capture: BranchFlags,
    failure: BranchFlags,
    code_hook: CodeHookFlags,
    elicitation_hook: ElicitationHookFlags,
) -> Result<Option<SlotCaptureSetting>> {
    if capture.is_empty()
        && failure.is_empty()
        && code_hook.is_empty()
        && elicitation_hook.is_empty()
    {
        return Ok(None);
    }
    let (capture_response, capture_next_step, capture_conditional) = capture.into_parts()?;
    let (failure_response, failure_next_step, failure_conditional) = failure.into_parts()?;
    let hook = dialog_code_hook(code_hook)?;
    let elicitation = elicitation_code_hook(elicitation_hook)?;
    Ok(Some(
        SlotCaptureSetting::builder()
            .set_capture_response(capture_response)
            .set_capture_next_step(capture_next_step)
            .set_capture_conditional(capture_conditional)
            .set_failure_response(failure_response)
            .set_failure_next_step(failure_next_step)
            .set_failure_conditional(failure_conditional)
            .set_code_hook(hook)
            .set_elicitation_code_hook(elicitation)
            .build(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogStateFlags;
    use crate::messages::{MessageGroupSpec, MessageSpec};
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
    fn test_unbound_capture_setting_is_none() {
        let setting = slot_capture_setting(
            BranchFlags::default(),
            BranchFlags::default(),
            CodeHookFlags::default(),
            ElicitationHookFlags::default(),
        )
        .unwrap();
        assert!(setting.is_none());
    }

    #[test]
    fn test_capture_response_only() {
        let setting = slot_capture_setting(
            BranchFlags {
                response_message_groups: Some(plain_groups("Saved.")),
                ..Default::default()
            },
            BranchFlags::default(),
            CodeHookFlags::default(),
            ElicitationHookFlags::default(),
        )
        .unwrap()
        .unwrap();
        assert!(setting.capture_response().is_some());
        assert!(setting.failure_response().is_none());
        assert!(setting.code_hook().is_none());
    }

    #[test]
    fn test_code_hook_with_success_next_step() {
        let setting = dialog_code_hook(CodeHookFlags {
            active: Some(true),
            enable_code_hook_invocation: Some(true),
            invocation_label: Some("capture".to_string()),
            success: BranchFlags {
                next_step: DialogStateFlags {
                    action_type: Some("ElicitSlot".to_string()),
                    slot_to_elicit: Some("Quantity".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap()
        .unwrap();
        assert_eq!(setting.enable_code_hook_invocation(), true);
        assert_eq!(setting.invocation_label(), Some("capture"));
        let post = setting.post_code_hook_specification();
        assert!(post.success_next_step().is_some());
        assert!(post.failure_next_step().is_none());
    }

    #[test]
    fn test_code_hook_label_alone_fails_to_build() {
        // enableCodeHookInvocation and active are required once the hook exists
        let result = dialog_code_hook(CodeHookFlags {
            invocation_label: Some("capture".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::Build(_))));
    }

    #[test]
    fn test_elicitation_hook() {
        let setting = elicitation_code_hook(ElicitationHookFlags {
            enable_code_hook_invocation: Some(true),
            invocation_label: Some("validate".to_string()),
        })
        .unwrap()
        .unwrap();
        assert_eq!(setting.enable_code_hook_invocation(), true);
        assert_eq!(setting.invocation_label(), Some("validate"));
    }
}
