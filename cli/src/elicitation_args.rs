//! Value elicitation and wait-and-continue flag groups.

use clap::Args;
use shared::{ElicitationFlags, WaitAndContinueFlags};

use crate::parse;

/// How the slot's value is elicited.
#[derive(Debug, Args)]
pub struct ElicitationArgs {
    /// Whether the slot is Required or Optional
    #[arg(long)]
    pub slot_constraint: String,

    /// Default value tried when the user provides none; repeat for fallbacks
    #[arg(long = "default-value")]
    pub default_value: Option<Vec<String>>,

    /// Sample utterance containing the slot; repeatable
    #[arg(long = "sample-utterance")]
    pub sample_utterance: Option<Vec<String>>,

    /// Prompt message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub prompt_message_groups: Option<parse::MessageGroupList>,

    /// Prompt retries after the first failed attempt
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=5))]
    pub prompt_max_retries: Option<i32>,

    /// Whether the user can interrupt the prompt
    #[arg(long)]
    pub prompt_allow_interrupt: Option<bool>,

    /// Random or Ordered selection of prompt message groups
    #[arg(long)]
    pub prompt_message_selection_strategy: Option<String>,

    /// Per-attempt prompt overrides keyed by attempt name (JSON or @file)
    #[arg(long, value_parser = parse::prompt_attempt_map)]
    pub prompt_attempts: Option<parse::PromptAttemptMap>,
}

impl ElicitationArgs {
    /// Collect the bound elicitation leaves.
    pub fn flags(&self, wait_and_continue: &WaitAndContinueArgs) -> ElicitationFlags {
        ElicitationFlags {
            slot_constraint: self.slot_constraint.clone(),
            default_values: self.default_value.clone(),
            prompt_message_groups: self.prompt_message_groups.clone().map(|g| g.0),
            prompt_max_retries: self.prompt_max_retries,
            prompt_allow_interrupt: self.prompt_allow_interrupt,
            prompt_message_selection_strategy: self.prompt_message_selection_strategy.clone(),
            prompt_attempts: self.prompt_attempts.clone().map(|m| m.0),
            sample_utterances: self.sample_utterance.clone(),
            wait_and_continue: wait_and_continue.flags(),
        }
    }
}

/// Wait-and-continue behavior while the user gathers a slow answer.
#[derive(Debug, Args)]
pub struct WaitAndContinueArgs {
    /// Whether wait-and-continue is active
    #[arg(long)]
    pub wait_active: Option<bool>,

    /// Waiting response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub waiting_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the waiting response can be interrupted
    #[arg(long)]
    pub waiting_response_allow_interrupt: Option<bool>,

    /// Continue response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub continue_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the continue response can be interrupted
    #[arg(long)]
    pub continue_response_allow_interrupt: Option<bool>,

    /// Still-waiting response message groups (JSON or @file)
    #[arg(long, value_parser = parse::message_groups)]
    pub still_waiting_response_message_groups: Option<parse::MessageGroupList>,

    /// Whether the still-waiting response can be interrupted
    #[arg(long)]
    pub still_waiting_response_allow_interrupt: Option<bool>,

    /// Seconds between still-waiting repetitions
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=300))]
    pub still_waiting_frequency_seconds: Option<i32>,

    /// Seconds before Lex stops waiting for the user
    #[arg(long, value_parser = clap::value_parser!(i32).range(1..=900))]
    pub still_waiting_timeout_seconds: Option<i32>,
}

impl WaitAndContinueArgs {
    /// Collect the bound wait-and-continue leaves.
    pub fn flags(&self) -> WaitAndContinueFlags {
        WaitAndContinueFlags {
            active: self.wait_active,
            waiting_message_groups: self.waiting_response_message_groups.clone().map(|g| g.0),
            waiting_allow_interrupt: self.waiting_response_allow_interrupt,
            continue_message_groups: self.continue_response_message_groups.clone().map(|g| g.0),
            continue_allow_interrupt: self.continue_response_allow_interrupt,
            still_waiting_message_groups: self
                .still_waiting_response_message_groups
                .clone()
                .map(|g| g.0),
            still_waiting_allow_interrupt: self.still_waiting_response_allow_interrupt,
            still_waiting_frequency_seconds: self.still_waiting_frequency_seconds,
            still_waiting_timeout_seconds: self.still_waiting_timeout_seconds,
        }
    }
}
