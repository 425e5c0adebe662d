// Public API types for the cpuset tool.
//
// These types are used by main.rs and exposed via the crate's public API.

use std::fmt;
use std::str::FromStr;

use cpuset::CpuSet;

/// The text format used for both the input sets and the result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Format {
    /// Comma-separated IDs and ranges, e.g. `0-4,9`.
    #[default]
    List,
    /// Comma-separated 32-bit hexadecimal words, e.g. `00000001,ffffffff`.
    Mask,
}

impl Format {
    /// Parses a set in this format.
    pub fn parse(self, input: &str) -> Result<CpuSet, cpuset::Error> {
        match self {
            Self::List => cpuset::parse_list(input),
            Self::Mask => cpuset::parse_mask(input),
        }
    }

    /// Emits a set in this format.
    #[must_use]
    pub fn emit(self, set: &CpuSet) -> String {
        match self {
            Self::List => cpuset::emit_list(set),
            Self::Mask => cpuset::emit_mask(set),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "mask" => Ok(Self::Mask),
            _ => Err(format!("Invalid format: '{s}'. Valid options are: list, mask")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Mask => f.write_str("mask"),
        }
    }
}

/// The set operation to apply to the two input sets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Command {
    /// The CPUs of the first set that are not in the second.
    Difference,
    /// The CPUs present in both sets.
    Intersection,
    /// The CPUs present in either set.
    Union,
}

impl Command {
    /// Applies the operation to `a` and `b`, in that order.
    #[must_use]
    pub fn apply(self, a: &CpuSet, b: &CpuSet) -> CpuSet {
        match self {
            Self::Difference => cpuset::difference(a, b),
            Self::Intersection => cpuset::intersection(a, b),
            Self::Union => cpuset::union(a, b),
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "difference" => Ok(Self::Difference),
            "intersection" => Ok(Self::Intersection),
            "union" => Ok(Self::Union),
            _ => Err(format!("command provided but not defined: {s}")),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Difference => f.write_str("difference"),
            Self::Intersection => f.write_str("intersection"),
            Self::Union => f.write_str("union"),
        }
    }
}

/// Input parameters for the `run` function.
///
/// This is the parsed and validated input that the core logic operates on.
#[doc(hidden)]
#[derive(Debug)]
#[allow(
    clippy::exhaustive_structs,
    reason = "This is a hidden struct for internal/test use only"
)]
pub struct RunInput {
    /// Format of the two input sets and of the result.
    pub format: Format,
    /// The operation to apply.
    pub command: Command,
    /// The first operand, in `format`.
    pub s1: String,
    /// The second operand, in `format`.
    pub s2: String,
}

/// Errors that can occur during a run.
#[doc(hidden)]
#[derive(Debug, thiserror::Error)]
#[allow(
    clippy::exhaustive_enums,
    reason = "This is a hidden enum for internal/test use only"
)]
pub enum RunError {
    /// The first operand could not be parsed.
    #[error("s1 provided but invalid: {0}")]
    InvalidFirstSet(#[source] cpuset::Error),
    /// The second operand could not be parsed.
    #[error("s2 provided but invalid: {0}")]
    InvalidSecondSet(#[source] cpuset::Error),
}
