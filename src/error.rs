//! Error types for packing and unpacking operations.
//!
//! The permissive operations never fail on out-of-range values: integers are
//! masked to their field width and unrecognized symbols collide with a valid
//! code. The strict `try_*` operations report those conditions as
//! [`PackError::FieldOverflow`], [`PackError::InvalidBase`], or
//! [`PackError::InvalidToken`] instead. The remaining variants come from the
//! [`GenotypeRecord`](crate::GenotypeRecord) lifecycle. All errors are local
//! and recoverable.

use thiserror::Error;

//-----------------------------------------------------------------------------

/// Result type alias for packing operations.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors from packing, unpacking, and genotype record operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// The genotype record cannot accept further appends.
    #[error("genotype record is full ({slots} allele slots in use)")]
    CapacityExceeded {
        /// Allele slots in use before the rejected append.
        slots: usize,
    },

    /// The genotype record was already unpacked and can no longer be mutated.
    #[error("genotype record has already been unpacked")]
    AlreadyUnpacked,

    /// Genotype retrieval before the record was unpacked.
    #[error("genotype record has not been unpacked")]
    NotUnpacked,

    /// Genotype retrieval past the number of packed genotypes.
    #[error("sample index {index} out of bounds ({count} genotypes packed)")]
    SampleOutOfBounds {
        /// The requested sample index.
        index: usize,
        /// The number of genotypes in the record.
        count: usize,
    },

    /// An integer field does not fit in its bit width (strict mode only).
    #[error("{field} value {value} does not fit in {width} bits")]
    FieldOverflow {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u64,
        /// Bit width of the field.
        width: usize,
    },

    /// A base symbol outside `{A, C, G, T}` (strict mode only).
    #[error("invalid base symbol {0:?}")]
    InvalidBase(char),

    /// A genotype token outside `{0, 1, ., /, |}` (strict mode only).
    #[error("invalid genotype token {0:?}")]
    InvalidToken(char),
}

//-----------------------------------------------------------------------------
