//! Multi-sample genotype accumulator.
//!
//! A [`GenotypeRecord`] collects diploid genotypes for one variant site into a
//! single 64-bit word, two bits per allele, in append order. The variant site
//! itself lives in a companion [`PackedLocation`](crate::PackedLocation) word;
//! the record holds only allele codes and has no embedded header.
//!
//! The record follows a strict three-state lifecycle. It is created empty,
//! appends move it to [`RecordState::Packed`], and a single bulk
//! [`GenotypeRecord::unpack_all`] call moves it to [`RecordState::Unpacked`].
//! Genotypes can be retrieved only after unpacking, and an unpacked record is
//! never mutated again; callers start over with a fresh record instead.
//!
//! # Examples
//!
//! ```
//! use snvpack::{GenotypeRecord, RecordState};
//!
//! let mut record = GenotypeRecord::new();
//! assert_eq!(record.state(), RecordState::Empty);
//!
//! record.append(b'C', b'G').unwrap();
//! record.append(b'C', b'C').unwrap();
//! assert_eq!(record.state(), RecordState::Packed);
//! assert!(record.genotype(0).is_err());
//!
//! record.unpack_all();
//! assert_eq!(record.genotype(0).unwrap(), (b'C', b'G'));
//! assert_eq!(record.genotype(1).unwrap(), (b'C', b'C'));
//! ```

use crate::error::{PackError, Result};
use crate::support;

use simple_sds::bits;

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// Maximum number of allele slots the offset counter may reach.
pub const ALLELE_SLOTS: usize = 64;

// An append is rejected once this many slots are in use. The check runs
// before the two slots of the append are consumed, so the final accepted
// append raises the offset from 62 to 64.
const SLOT_LIMIT: usize = ALLELE_SLOTS - 1;

//-----------------------------------------------------------------------------

/// Lifecycle state of a [`GenotypeRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordState {
    /// No genotypes have been appended.
    Empty,
    /// Genotypes have been appended but not yet decoded.
    Packed,
    /// The packed word has been decoded; genotypes can be retrieved.
    Unpacked,
}

//-----------------------------------------------------------------------------

/// An accumulator that packs diploid genotypes for one variant into a 64-bit
/// word.
///
/// Each [`GenotypeRecord::append`] call shifts two 2-bit allele codes into the
/// low end of the word, so the most recently appended genotype occupies the
/// lowest bits. [`GenotypeRecord::unpack_all`] decodes the whole word in one
/// pass, restoring the original append order, after which
/// [`GenotypeRecord::genotype`] retrieves individual genotypes by sample
/// index.
///
/// The offset counter may reach [`ALLELE_SLOTS`] (64) slots while the word
/// holds only 32. Genotypes appended beyond the 16th shift the earliest
/// allele codes out of the word, and those slots later decode as `A`.
///
/// # Examples
///
/// ```
/// use snvpack::GenotypeRecord;
///
/// let mut record = GenotypeRecord::new();
/// for _ in 0..16 {
///     record.append(b'A', b'T').unwrap();
/// }
/// record.unpack_all();
/// assert_eq!(record.len(), 16);
/// assert_eq!(record.genotype(15).unwrap(), (b'A', b'T'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenotypeRecord {
    word: u64,
    offset: usize,
    decoded: [u8; ALLELE_SLOTS],
    state: RecordState,
}

impl GenotypeRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        GenotypeRecord::default()
    }

    /// Appends a diploid genotype to the record.
    ///
    /// The alleles are encoded with [`support::encode_base`] and shifted into
    /// the word in order `allele_a` then `allele_b`. Symbols outside
    /// `{A, C, G, T}` collide with valid base codes; use
    /// [`GenotypeRecord::try_append`] to reject them.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::CapacityExceeded`] if 63 or more allele slots are
    /// in use, and [`PackError::AlreadyUnpacked`] if the record has been
    /// unpacked. The record is not mutated on failure.
    pub fn append(&mut self, allele_a: u8, allele_b: u8) -> Result<()> {
        self.check_append()?;
        self.word = (self.word << support::BASE_WIDTH) | support::encode_base(allele_a);
        self.word = (self.word << support::BASE_WIDTH) | support::encode_base(allele_b);
        self.offset += 2;
        self.state = RecordState::Packed;
        Ok(())
    }

    /// Appends a diploid genotype to the record, or returns an error if
    /// either symbol is not one of `A`, `C`, `G`, or `T`.
    ///
    /// # Errors
    ///
    /// As [`GenotypeRecord::append`], plus [`PackError::InvalidBase`] for
    /// symbols outside the base alphabet. The record is not mutated on
    /// failure.
    pub fn try_append(&mut self, allele_a: u8, allele_b: u8) -> Result<()> {
        self.check_append()?;
        let code_a = support::try_encode_base(allele_a)?;
        let code_b = support::try_encode_base(allele_b)?;
        self.word = (self.word << support::BASE_WIDTH) | code_a;
        self.word = (self.word << support::BASE_WIDTH) | code_b;
        self.offset += 2;
        self.state = RecordState::Packed;
        Ok(())
    }

    /// Decodes the packed word into the allele buffer and moves the record to
    /// [`RecordState::Unpacked`].
    ///
    /// The word is consumed from the low-order slot upward, writing each
    /// allele at its original index, so append order is restored. Calling
    /// this on an already unpacked record is a no-op; calling it on an empty
    /// record produces an unpacked record with zero genotypes.
    pub fn unpack_all(&mut self) {
        let mut word = self.word;
        for i in (0..self.offset).rev() {
            self.decoded[i] = support::decode_base(word & bits::low_set(support::BASE_WIDTH));
            word >>= support::BASE_WIDTH;
        }
        self.state = RecordState::Unpacked;
    }

    /// Returns the genotype of the given sample.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::NotUnpacked`] unless the record is in state
    /// [`RecordState::Unpacked`], and [`PackError::SampleOutOfBounds`] if
    /// `sample >= self.len()`.
    pub fn genotype(&self, sample: usize) -> Result<(u8, u8)> {
        if self.state != RecordState::Unpacked {
            return Err(PackError::NotUnpacked);
        }
        if sample >= self.len() {
            return Err(PackError::SampleOutOfBounds {
                index: sample,
                count: self.len(),
            });
        }
        Ok((self.decoded[2 * sample], self.decoded[2 * sample + 1]))
    }

    /// Returns the decoded alleles in append order.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::NotUnpacked`] unless the record is in state
    /// [`RecordState::Unpacked`].
    pub fn alleles(&self) -> Result<&[u8]> {
        if self.state != RecordState::Unpacked {
            return Err(PackError::NotUnpacked);
        }
        Ok(&self.decoded[..self.offset])
    }

    /// Returns the number of genotypes in the record.
    #[inline]
    pub fn len(&self) -> usize {
        self.offset / 2
    }

    /// Returns `true` if no genotypes have been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }

    /// Returns the number of allele slots in use.
    #[inline]
    pub fn slots_in_use(&self) -> usize {
        self.offset
    }

    /// Returns the lifecycle state of the record.
    #[inline]
    pub fn state(&self) -> RecordState {
        self.state
    }

    /// Returns the packed genotype word.
    #[inline]
    pub fn word(&self) -> u64 {
        self.word
    }

    // An append is legal if the record has not been unpacked and the slot
    // limit has not been reached.
    fn check_append(&self) -> Result<()> {
        if self.state == RecordState::Unpacked {
            return Err(PackError::AlreadyUnpacked);
        }
        if self.offset >= SLOT_LIMIT {
            return Err(PackError::CapacityExceeded { slots: self.offset });
        }
        Ok(())
    }
}

impl Default for GenotypeRecord {
    fn default() -> Self {
        GenotypeRecord {
            word: 0,
            offset: 0,
            decoded: [0; ALLELE_SLOTS],
            state: RecordState::Empty,
        }
    }
}

//-----------------------------------------------------------------------------
