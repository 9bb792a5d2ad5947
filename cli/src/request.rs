//! Assembly of the UpdateSlot request from the flat flag surface.

use aws_sdk_lexmodelsv2::operation::update_slot::UpdateSlotOutput;
use aws_sdk_lexmodelsv2::types::{
    MultipleValuesSetting, ObfuscationSetting, ObfuscationSettingType, SlotValueElicitationSetting,
    SubSlotSetting,
};
use aws_sdk_lexmodelsv2::Client;
use shared::{capture, classify_sdk_error, elicitation, CodeHookFlags, Result};

use crate::Cli;

/// Every field of one UpdateSlot request, assembled from the bound flags.
///
/// Sub-objects that had no bound parameters are `None` and stay out of the
/// request entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRequest {
    /// Bot that contains the slot
    pub bot_id: String,
    /// Bot version
    pub bot_version: String,
    /// Locale that contains the slot
    pub locale_id: String,
    /// Intent that contains the slot
    pub intent_id: String,
    /// Slot being updated
    pub slot_id: String,
    /// New slot name
    pub slot_name: String,
    /// New slot description
    pub description: Option<String>,
    /// Slot type backing the slot
    pub slot_type_id: Option<String>,
    /// How the slot's value is elicited
    pub value_elicitation_setting: SlotValueElicitationSetting,
    /// Obfuscation applied to logged values
    pub obfuscation_setting: Option<ObfuscationSetting>,
    /// Multiple-value collection setting
    pub multiple_values_setting: Option<MultipleValuesSetting>,
    /// Sub-slot configuration for composite slots
    pub sub_slot_setting: Option<SubSlotSetting>,
}

impl AssembledRequest {
    /// Reconstruct the nested request graph from the bound flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let code_hook = CodeHookFlags {
            active: cli.code_hook.code_hook_active,
            enable_code_hook_invocation: cli.code_hook.code_hook_enabled,
            invocation_label: cli.code_hook.code_hook_invocation_label.clone(),
            success: cli.hook_success.flags(),
            failure: cli.hook_failure.flags(),
            timeout: cli.hook_timeout.flags(),
        };
        let capture_setting = capture::slot_capture_setting(
            cli.capture.flags(),
            cli.capture_failure.flags(),
            code_hook,
            cli.elicitation_hook.flags(),
        )?;
        let value_elicitation_setting = elicitation::value_elicitation_setting(
            cli.elicitation.flags(&cli.wait_and_continue),
            capture_setting,
        )?;
        let obfuscation_setting = cli
            .behavior
            .obfuscation_setting
            .as_ref()
            .map(|setting| {
                ObfuscationSetting::builder()
                    .obfuscation_setting_type(ObfuscationSettingType::from(setting.as_str()))
                    .build()
            })
            .transpose()?;
        let multiple_values_setting = cli.behavior.allow_multiple_values.map(|allow| {
            MultipleValuesSetting::builder()
                .allow_multiple_values(allow)
                .build()
        });
        let sub_slot_setting = elicitation::sub_slot_setting(
            cli.behavior.sub_slot_expression.clone(),
            cli.behavior.sub_slot_specifications.clone().map(|m| m.0),
        )?;

        Ok(Self {
            bot_id: cli.identity.bot_id.clone(),
            bot_version: cli.identity.bot_version.clone(),
            locale_id: cli.identity.locale_id.clone(),
            intent_id: cli.identity.intent_id.clone(),
            slot_id: cli.identity.slot_id.clone(),
            slot_name: cli.identity.slot_name.clone(),
            description: cli.identity.description.clone(),
            slot_type_id: cli.identity.slot_type_id.clone(),
            value_elicitation_setting,
            obfuscation_setting,
            multiple_values_setting,
            sub_slot_setting,
        })
    }

    /// Send the request and return the raw response.
    pub async fn send(self, client: &Client) -> Result<UpdateSlotOutput> {
        client
            .update_slot()
            .bot_id(self.bot_id)
            .bot_version(self.bot_version)
            .locale_id(self.locale_id)
            .intent_id(self.intent_id)
            .slot_id(self.slot_id)
            .slot_name(self.slot_name)
            .set_description(self.description)
            .set_slot_type_id(self.slot_type_id)
            .value_elicitation_setting(self.value_elicitation_setting)
            .set_obfuscation_setting(self.obfuscation_setting)
            .set_multiple_values_setting(self.multiple_values_setting)
            .set_sub_slot_setting(self.sub_slot_setting)
            .send()
            .await
            .map_err(classify_sdk_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_lexmodelsv2::types::{
        DialogActionType, MessageSelectionStrategy, SlotConstraint,
    };
    use clap::Parser;
    use shared::Error;

    const REQUIRED: [&str; 15] = [
        "update_slot",
        "--bot-id",
        "BOT1",
        "--bot-version",
        "DRAFT",
        "--locale-id",
        "en_US",
        "--intent-id",
        "INTENT1",
        "--slot-id",
        "SLOT1",
        "--slot-name",
        "City",
        "--slot-constraint",
        "Required",
    ];

    fn parse(extra: &[&str]) -> Cli {
        let argv: Vec<&str> = REQUIRED.iter().copied().chain(extra.iter().copied()).collect();
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_minimal_parameter_set() {
        let cli = parse(&[]);
        let request = AssembledRequest::from_cli(&cli).unwrap();

        assert_eq!(request.bot_id, "BOT1");
        assert_eq!(request.slot_name, "City");
        assert_eq!(
            request.value_elicitation_setting.slot_constraint(),
            &SlotConstraint::Required
        );
        // nothing else was bound, so no sub-object appears in the request
        assert!(request
            .value_elicitation_setting
            .prompt_specification()
            .is_none());
        assert!(request
            .value_elicitation_setting
            .slot_capture_setting()
            .is_none());
        assert!(request.obfuscation_setting.is_none());
        assert!(request.multiple_values_setting.is_none());
        assert!(request.sub_slot_setting.is_none());
    }

    #[test]
    fn test_missing_required_flag_is_rejected() {
        let argv: Vec<&str> = REQUIRED[..13].to_vec(); // drop --slot-constraint
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_prompt_flags_build_prompt_specification() {
        let cli = parse(&[
            "--prompt-message-groups",
            r#"[{"message": {"plain_text": "Which city?"}}]"#,
            "--prompt-max-retries",
            "2",
            "--prompt-allow-interrupt",
            "true",
            "--prompt-message-selection-strategy",
            "Random",
        ]);
        let request = AssembledRequest::from_cli(&cli).unwrap();
        let prompt = request
            .value_elicitation_setting
            .prompt_specification()
            .unwrap();
        assert_eq!(prompt.max_retries(), 2);
        assert_eq!(prompt.allow_interrupt(), Some(true));
        assert_eq!(
            prompt.message_selection_strategy(),
            Some(&MessageSelectionStrategy::Random)
        );
        assert_eq!(prompt.message_groups().len(), 1);
    }

    #[test]
    fn test_max_retries_range_is_enforced() {
        let argv: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .chain(["--prompt-max-retries", "9"])
            .collect();
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_select_and_pass_thru_conflict() {
        let argv: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .chain(["--select", "slot_id", "--pass-thru"])
            .collect();
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_capture_branch_flags_populate_capture_setting() {
        let cli = parse(&[
            "--capture-response-message-groups",
            r#"[{"message": {"plain_text": "Got it."}}]"#,
            "--capture-next-step-action-type",
            "ElicitSlot",
            "--capture-next-step-slot-to-elicit",
            "Quantity",
            "--failure-response-message-groups",
            r#"[{"message": {"plain_text": "Sorry, try again."}}]"#,
        ]);
        let request = AssembledRequest::from_cli(&cli).unwrap();
        let capture = request
            .value_elicitation_setting
            .slot_capture_setting()
            .unwrap();
        assert!(capture.capture_response().is_some());
        let next_step = capture.capture_next_step().unwrap();
        assert_eq!(
            next_step.dialog_action().unwrap().r#type(),
            &DialogActionType::ElicitSlot
        );
        assert!(capture.failure_response().is_some());
        assert!(capture.code_hook().is_none());
    }

    #[test]
    fn test_code_hook_flags_populate_hook() {
        let cli = parse(&[
            "--code-hook-active",
            "true",
            "--code-hook-enabled",
            "true",
            "--code-hook-invocation-label",
            "capture",
            "--hook-timeout-next-step-action-type",
            "EndConversation",
        ]);
        let request = AssembledRequest::from_cli(&cli).unwrap();
        let hook = request
            .value_elicitation_setting
            .slot_capture_setting()
            .unwrap()
            .code_hook()
            .unwrap();
        assert!(hook.active());
        assert_eq!(hook.invocation_label(), Some("capture"));
        assert!(hook
            .post_code_hook_specification()
            .unwrap()
            .timeout_next_step()
            .is_some());
    }

    #[test]
    fn test_behavior_flags() {
        let cli = parse(&[
            "--obfuscation-setting",
            "DefaultObfuscation",
            "--allow-multiple-values",
            "true",
            "--description",
            "Destination city",
        ]);
        let request = AssembledRequest::from_cli(&cli).unwrap();
        assert_eq!(request.description.as_deref(), Some("Destination city"));
        assert_eq!(
            request.obfuscation_setting.unwrap().obfuscation_setting_type(),
            &ObfuscationSettingType::DefaultObfuscation
        );
        assert_eq!(
            request
                .multiple_values_setting
                .unwrap()
                .allow_multiple_values(),
            true
        );
    }

    #[test]
    fn test_default_values_and_utterances() {
        let cli = parse(&[
            "--default-value",
            "[shippingCity]",
            "--default-value",
            "unknown",
            "--sample-utterance",
            "I live in {City}",
        ]);
        let request = AssembledRequest::from_cli(&cli).unwrap();
        let setting = &request.value_elicitation_setting;
        assert_eq!(
            setting
                .default_value_specification()
                .unwrap()
                .default_value_list()
                .len(),
            2
        );
        assert_eq!(setting.sample_utterances().len(), 1);
        assert_eq!(setting.sample_utterances()[0].utterance(), "I live in {City}");
    }

    #[test]
    fn test_partial_response_bundle_fails_before_sending() {
        // allow-interrupt alone binds the response, whose message groups
        // are required by the API shape
        let cli = parse(&["--capture-response-allow-interrupt", "true"]);
        let result = AssembledRequest::from_cli(&cli);
        assert!(matches!(result, Err(Error::Build(_))));
    }

    #[test]
    fn test_malformed_json_flag_is_rejected_at_parse() {
        let argv: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .chain(["--prompt-message-groups", "{not json"])
            .collect();
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_full_graph_equals_hand_built_value() {
        use aws_sdk_lexmodelsv2::types::{
            Message, MessageGroup, PlainTextMessage, PromptSpecification, ResponseSpecification,
            SlotValueElicitationSetting, WaitAndContinueSpecification,
        };

        let cli = parse(&[
            "--prompt-message-groups",
            r#"[{"message": {"plain_text": "Which city?"}}]"#,
            "--prompt-max-retries",
            "1",
            "--wait-active",
            "true",
            "--waiting-response-message-groups",
            r#"[{"message": {"plain_text": "One moment."}}]"#,
            "--continue-response-message-groups",
            r#"[{"message": {"plain_text": "Where were we?"}}]"#,
        ]);
        let request = AssembledRequest::from_cli(&cli).unwrap();

        let group = |text: &str| {
            MessageGroup::builder()
                .message(
                    Message::builder()
                        .plain_text_message(
                            PlainTextMessage::builder().value(text).build().unwrap(),
                        )
                        .build(),
                )
                .build()
                .unwrap()
        };
        let response = |text: &str| {
            ResponseSpecification::builder()
                .message_groups(group(text))
                .build()
                .unwrap()
        };
        let expected = SlotValueElicitationSetting::builder()
            .slot_constraint(SlotConstraint::Required)
            .prompt_specification(
                PromptSpecification::builder()
                    .message_groups(group("Which city?"))
                    .max_retries(1)
                    .build()
                    .unwrap(),
            )
            .wait_and_continue_specification(
                WaitAndContinueSpecification::builder()
                    .waiting_response(response("One moment."))
                    .continue_response(response("Where were we?"))
                    .active(true)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(request.value_elicitation_setting, expected);
    }
}
