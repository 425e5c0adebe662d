#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A command-line tool that computes the difference, intersection or union of two cpusets
//! written in the Linux list or mask format.
//!
//! ```text
//! $ cpuset difference 0-32 8-16
//! 0-7,17-32
//! $ cpuset --format mask union 00000001,00000000 000000f0
//! 00000001,000000f0
//! ```
//!
//! This crate provides the core logic of the tool, exposed via the [`run`] function.
//! The binary entry point is in `main.rs`.

mod types;

use tracing::debug;
pub use types::*;

/// Core logic of the tool, extracted for testability.
///
/// Parses both operands in the selected format, applies the command and returns the result in
/// the same format, without a trailing newline.
#[doc(hidden)]
pub fn run(input: &RunInput) -> Result<String, RunError> {
    let s1 = input
        .format
        .parse(&input.s1)
        .map_err(RunError::InvalidFirstSet)?;

    let s2 = input
        .format
        .parse(&input.s2)
        .map_err(RunError::InvalidSecondSet)?;

    debug!(
        format = %input.format,
        command = %input.command,
        s1_len = s1.len(),
        s2_len = s2.len(),
        "parsed operands"
    );

    let result = input.command.apply(&s1, &s2);

    debug!(result_len = result.len(), "applied command");

    Ok(input.format.emit(&result))
}
