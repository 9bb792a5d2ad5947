//! Identity, behavior, connection and control flag groups.

use clap::Args;

use crate::parse;

/// Identity of the slot being updated.
#[derive(Debug, Args)]
pub struct IdentityArgs {
    /// Identifier of the bot that contains the slot
    #[arg(long)]
    pub bot_id: String,

    /// Version of the bot that contains the slot; must be DRAFT
    #[arg(long)]
    pub bot_version: String,

    /// Locale that contains the slot (for example en_US)
    #[arg(long)]
    pub locale_id: String,

    /// Intent that contains the slot
    #[arg(long)]
    pub intent_id: String,

    /// Identifier of the slot to update
    #[arg(long)]
    pub slot_id: String,

    /// New name for the slot
    #[arg(long)]
    pub slot_name: String,

    /// New description for the slot
    #[arg(long)]
    pub description: Option<String>,

    /// Slot type backing the slot; omit for composite slots
    #[arg(long)]
    pub slot_type_id: Option<String>,
}

/// Slot-wide behavior settings.
#[derive(Debug, Args)]
pub struct BehaviorArgs {
    /// Obfuscation applied to slot values in logs (DefaultObfuscation or None)
    #[arg(long)]
    pub obfuscation_setting: Option<String>,

    /// Whether the slot collects more than one value from an utterance
    #[arg(long)]
    pub allow_multiple_values: Option<bool>,

    /// Expression combining the sub-slots of a composite slot
    #[arg(long)]
    pub sub_slot_expression: Option<String>,

    /// Sub-slot specifications keyed by sub-slot name (JSON or @file)
    #[arg(long, value_parser = parse::sub_slot_map)]
    pub sub_slot_specifications: Option<parse::SubSlotMap>,
}

/// AWS connection options.
#[derive(Debug, Args)]
pub struct AwsArgs {
    /// AWS region to call
    #[arg(long)]
    pub region: Option<String>,

    /// Named credentials profile to use
    #[arg(long)]
    pub profile: Option<String>,

    /// Endpoint URL override
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

/// Output and confirmation control.
#[derive(Debug, Args)]
pub struct ControlArgs {
    /// Print a single response field chosen by dotted path
    #[arg(long)]
    pub select: Option<String>,

    /// Print the slot identifier that was passed in instead of the response
    #[arg(long, conflicts_with = "select")]
    pub pass_thru: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,

    /// Assemble and print the request without calling the service
    #[arg(long)]
    pub dry_run: bool,
}
