//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod fields;
mod global;

pub use common::OutputFormat;
pub use fields::{AppFieldArgs, CredentialArgs, VisibilityArgs};
pub use global::GlobalOptions;
