#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Sets of processor IDs, with set algebra and the two text formats that Linux uses to describe
//! CPU sets (see the "FORMATS" section of `man 7 cpuset`).
//!
//! ```
//! use cpuset::{CpuSet, difference};
//!
//! let online = CpuSet::from_list("0-32").unwrap();
//! let isolated = CpuSet::from_list("8-16").unwrap();
//!
//! let housekeeping = difference(&online, &isolated);
//!
//! assert_eq!(housekeeping.to_list_string(), "0-7,17-32");
//! assert_eq!(housekeeping.to_mask_string(), "00000001,fffe00ff");
//! ```
//!
//! This crate does not inspect the hardware. Any ID that fits in [`CpuId`] may be a member of a
//! set, whether or not such a processor exists.
//!
//! # List format
//!
//! A comma-separated list of zero or more elements, where each element is either:
//!
//! * a single ID (e.g. `1`)
//! * an inclusive range of IDs (e.g. `2-4`)
//! * an excluded ID (e.g. `^3`), which removes the ID if an earlier element added it
//!
//! Elements are applied from left to right, so `1-4,^3,6` describes `1,2,4,6`. Whitespace and
//! signs are not allowed anywhere in the string.
//!
//! Emitted lists are canonical: sorted, with consecutive IDs coalesced into ranges and without
//! exclusions.
//!
//! # Mask format
//!
//! A comma-separated list of 32-bit words, each written as exactly eight hexadecimal digits. The
//! last word holds CPUs 0-31, the one before it CPUs 32-63 and so on, with bit 0 of each word
//! being the lowest CPU it covers. For example, `00000001,80000000` describes `31,32`.
//!
//! Emitted masks use lowercase digits and only as many words as the highest ID requires.
//!
//! # Errors
//!
//! Parsing fails with an [`Error`] that names both the rejected part of the input and the
//! complete input. The empty string is valid in both formats and describes the empty set.

mod algebra;
mod error;
mod list;
mod mask;
mod set;

pub use algebra::*;
pub use error::*;
pub use list::*;
pub use mask::*;
pub use set::*;

/// Identifies one logical processor.
pub type CpuId = u64;
