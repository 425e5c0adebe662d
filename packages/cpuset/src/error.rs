use thiserror::Error;

/// Errors that can occur when parsing cpuset strings.
///
/// Every variant carries the complete input that was being parsed, in addition to the
/// specific part of it that was rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A list element was neither a single ID, an excluded single ID nor a two-part range.
    #[error("cpuset: parsing {input:?}: invalid element {element:?}")]
    InvalidElement {
        /// The complete string that was being parsed.
        input: String,

        /// The comma-separated element that was rejected.
        element: String,
    },

    /// The start of a list range was not a valid CPU ID.
    #[error("cpuset: parsing {input:?}: invalid lower bound {bound:?} in range {element:?}")]
    InvalidLowerBound {
        /// The complete string that was being parsed.
        input: String,

        /// The rejected bound.
        bound: String,

        /// The range element containing the bound.
        element: String,
    },

    /// The end of a list range was not a valid CPU ID.
    #[error("cpuset: parsing {input:?}: invalid upper bound {bound:?} in range {element:?}")]
    InvalidUpperBound {
        /// The complete string that was being parsed.
        input: String,

        /// The rejected bound.
        bound: String,

        /// The range element containing the bound.
        element: String,
    },

    /// A list range ended before it started, e.g. `4-2`.
    #[error("cpuset: parsing {input:?}: negative range {element:?}")]
    NegativeRange {
        /// The complete string that was being parsed.
        input: String,

        /// The range element that was rejected.
        element: String,
    },

    /// A mask word was not exactly eight hexadecimal digits.
    #[error("cpuset: parsing {input:?}: invalid 32-bit word {word:?}")]
    InvalidWord {
        /// The complete string that was being parsed.
        input: String,

        /// The word that was rejected.
        word: String,
    },

    /// A mask had so many words that its CPU IDs would not fit in [`CpuId`][crate::CpuId].
    #[error("cpuset: parsing {input:?}: offset value out of range")]
    OffsetOutOfRange {
        /// The complete string that was being parsed.
        input: String,
    },
}

impl Error {
    /// The complete string whose parsing failed.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidElement { input, .. }
            | Self::InvalidLowerBound { input, .. }
            | Self::InvalidUpperBound { input, .. }
            | Self::NegativeRange { input, .. }
            | Self::InvalidWord { input, .. }
            | Self::OffsetOutOfRange { input } => input,
        }
    }
}

/// A specialized `Result` type for cpuset operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
