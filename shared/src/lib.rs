//! Shared library for the Lex Models V2 slot update tool.
//!
//! This crate provides parameter coercion, nested request assembly, AWS
//! configuration and response shaping used by the `update_slot` binary.

pub mod capture;
pub mod config;
pub mod dialog;
pub mod elicitation;
pub mod error;
pub mod messages;
pub mod output;
pub mod params;

pub use capture::{CodeHookFlags, ElicitationHookFlags};
pub use config::Config;
pub use dialog::{BranchFlags, ConditionalFlags, DialogStateFlags};
pub use elicitation::{ElicitationFlags, WaitAndContinueFlags};
pub use error::{classify_sdk_error, Error, Result};
pub use output::{select_path, SlotUpdateSummary};
