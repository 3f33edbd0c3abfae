//! # snvpack: bit-packed SNV genotype records
//!
//! This crate packs single-nucleotide-variant (SNV) genotype observations into
//! dense 64-bit words, at roughly one eighth the size of a textual
//! representation. Packing is exactly invertible for the value ranges each
//! field supports; out-of-range values are silently masked to their field
//! width unless the strict `try_*` operations are used.
//!
//! A single variant with a diploid genotype call packs into one word:
//!
//! ```text
//!  sample ID          chrom  position                      ref alt genotype
//! 0_00000000000000000_00000_0000000000000000000000000000_00_00_000000000
//!  17 bits            5 bits 28 bits (0..268M)            2b  2b  3 x 3 bits
//! ```
//!
//! The genotype suffix holds three 3-bit tokens over the alphabet
//! `{'0', '1', '.', '/', '|'}`, so calls like `0/1` or `1|0` round-trip
//! exactly. Reference and alternate alleles use 2-bit base codes over
//! `{A, C, G, T}`.
//!
//! For cohorts, [`PackedLocation`] stores the variant site once and
//! [`GenotypeRecord`] accumulates the per-sample allele calls separately,
//! two bits per allele, in a companion word.
//!
//! # Examples
//!
//! ```
//! use snvpack::{PackedVariant, GenotypeRecord};
//!
//! // One sample, one site.
//! let word = PackedVariant::pack(105045, 22, 12345644, b'A', b'G', *b"0/1");
//! let variant = word.unpack();
//! assert_eq!(variant.sample, 105045);
//! assert_eq!(variant.pos, 12345644);
//! assert_eq!(variant.genotype, *b"0/1");
//!
//! // Many samples, one site.
//! let mut record = GenotypeRecord::new();
//! record.append(b'C', b'G').unwrap();
//! record.append(b'C', b'C').unwrap();
//! record.unpack_all();
//! assert_eq!(record.genotype(0).unwrap(), (b'C', b'G'));
//! assert_eq!(record.genotype(1).unwrap(), (b'C', b'C'));
//! ```
//!
//! # Notes
//!
//! * The crate defines bit positions within a 64-bit unsigned integer, not a
//!   byte stream. Callers that transmit packed words must fix a byte order
//!   consistently on both sides; the layout itself is order-agnostic.
//! * The packed word types implement `Serializable` from
//!   [Simple-SDS](https://github.com/jltsiren/simple-sds), so individual words
//!   and vectors of words can be serialized with the Simple-SDS conventions.

pub mod error;
pub mod record;
pub mod support;
pub mod variant;

//-----------------------------------------------------------------------------

pub use crate::error::{PackError, Result};
pub use crate::record::{GenotypeRecord, RecordState};
pub use crate::variant::{PackedLocation, PackedVariant, Variant};

//-----------------------------------------------------------------------------
