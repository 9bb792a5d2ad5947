//! Updates the configuration of a slot in an Amazon Lex V2 bot.
//!
//! The flat flag surface mirrors the nested UpdateSlot request: scalar
//! leaves become individual flags, list- and map-shaped parameters take
//! JSON (inline or `@file`). One invocation performs one UpdateSlot call
//! and prints the shaped response as JSON.

mod args;
mod capture_args;
mod elicitation_args;
mod parse;
mod request;

use anyhow::Context;
use clap::Parser;
use dialoguer::Confirm;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{AwsArgs, BehaviorArgs, ControlArgs, IdentityArgs};
use capture_args::{
    CaptureArgs, CaptureFailureArgs, CodeHookArgs, ElicitationHookArgs, HookFailureArgs,
    HookSuccessArgs, HookTimeoutArgs,
};
use elicitation_args::{ElicitationArgs, WaitAndContinueArgs};
use request::AssembledRequest;

/// Updates the settings for a slot in an intent of an Amazon Lex V2 bot.
#[derive(Debug, Parser)]
#[command(name = "update_slot", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub identity: IdentityArgs,

    #[command(flatten)]
    pub elicitation: ElicitationArgs,

    #[command(flatten)]
    pub wait_and_continue: WaitAndContinueArgs,

    #[command(flatten)]
    pub capture: CaptureArgs,

    #[command(flatten)]
    pub capture_failure: CaptureFailureArgs,

    #[command(flatten)]
    pub code_hook: CodeHookArgs,

    #[command(flatten)]
    pub hook_success: HookSuccessArgs,

    #[command(flatten)]
    pub hook_failure: HookFailureArgs,

    #[command(flatten)]
    pub hook_timeout: HookTimeoutArgs,

    #[command(flatten)]
    pub elicitation_hook: ElicitationHookArgs,

    #[command(flatten)]
    pub behavior: BehaviorArgs,

    #[command(flatten)]
    pub aws: AwsArgs,

    #[command(flatten)]
    pub control: ControlArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let request = AssembledRequest::from_cli(&cli)?;

    if cli.control.dry_run {
        println!("{:#?}", request);
        return Ok(());
    }

    if !cli.control.force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Update slot '{}' ({}) in bot {} locale {}?",
                cli.identity.slot_name,
                cli.identity.slot_id,
                cli.identity.bot_id,
                cli.identity.locale_id
            ))
            .default(false)
            .interact()
            .context("confirmation prompt failed; pass --force for non-interactive use")?;
        if !confirmed {
            info!("Update cancelled");
            return Ok(());
        }
    }

    let config = shared::Config::resolve(
        cli.aws.region.clone(),
        cli.aws.profile.clone(),
        cli.aws.endpoint_url.clone(),
    );
    let sdk_config = config.load().await;
    let client = aws_sdk_lexmodelsv2::Client::new(&sdk_config);

    info!(
        "Updating slot {} in bot {} ({})",
        cli.identity.slot_id, cli.identity.bot_id, cli.identity.locale_id
    );
    let output = request.send(&client).await?;
    info!("Slot {} updated", cli.identity.slot_id);

    let summary = shared::SlotUpdateSummary::from(&output);
    let rendered = if let Some(path) = &cli.control.select {
        shared::select_path(&serde_json::to_value(&summary)?, path)?
    } else if cli.control.pass_thru {
        serde_json::Value::String(cli.identity.slot_id.clone())
    } else {
        serde_json::to_value(&summary)?
    };
    println!("{}", serde_json::to_string_pretty(&rendered)?);

    Ok(())
}
