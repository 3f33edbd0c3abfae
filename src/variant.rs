//! Packed 64-bit variant and location words.
//!
//! [`PackedVariant`] stores one sample's genotype call at one SNV site:
//! sample index, chromosome, position, reference and alternate alleles, and a
//! three-token genotype string, in fixed bit-width slots from the high bits
//! down. [`PackedLocation`] stores the same site fields without the genotype
//! suffix; it serves as the per-variant header when genotypes for many samples
//! are packed separately into a [`GenotypeRecord`](crate::GenotypeRecord).
//!
//! The permissive `pack` operations mask every integer field to its bit width
//! and run symbols through the total codecs in [`support`], so they never
//! fail. The strict `try_pack` operations validate fields and symbols first.
//!
//! # Examples
//!
//! ```
//! use snvpack::PackedVariant;
//!
//! let word = PackedVariant::pack(105045, 22, 12345644, b'A', b'G', *b"0/1");
//! let variant = word.unpack();
//! assert_eq!(variant.sample, 105045);
//! assert_eq!(variant.chrom, 22);
//! assert_eq!(variant.pos, 12345644);
//! assert_eq!(variant.ref_allele, b'A');
//! assert_eq!(variant.alt_allele, b'G');
//! assert_eq!(variant.genotype, *b"0/1");
//!
//! // Out-of-range fields are masked, not rejected.
//! let truncated = PackedVariant::pack(200000, 22, 12345644, b'A', b'G', *b"0/1");
//! assert_eq!(truncated.sample(), 200000 % 131072);
//! assert!(PackedVariant::try_pack(200000, 22, 12345644, b'A', b'G', *b"0/1").is_err());
//! ```

use crate::error::{PackError, Result};
use crate::support;

use simple_sds::serialize::Serializable;
use simple_sds::bits;


//-----------------------------------------------------------------------------

/// Width of the sample index field in a [`PackedVariant`] in bits.
pub const SAMPLE_WIDTH: usize = 17;

/// Width of the chromosome field in bits.
pub const CHROM_WIDTH: usize = 5;

/// Width of the position field in bits.
pub const POS_WIDTH: usize = 28;

/// Number of tokens in a packed genotype string.
pub const GENOTYPE_LEN: usize = 3;

/// Width of the sample/ID field in a [`PackedLocation`] in bits.
///
/// The location word has no genotype suffix, so the freed bits widen the
/// sample/ID field at the high end of the word.
pub const LOCATION_SAMPLE_WIDTH: usize = 27;

// Bit offsets in a variant word, from the low end.
const GENOTYPE_WIDTH: usize = GENOTYPE_LEN * support::TOKEN_WIDTH;
const ALT_OFFSET: usize = GENOTYPE_WIDTH;
const REF_OFFSET: usize = ALT_OFFSET + support::BASE_WIDTH;
const POS_OFFSET: usize = REF_OFFSET + support::BASE_WIDTH;
const CHROM_OFFSET: usize = POS_OFFSET + POS_WIDTH;
const SAMPLE_OFFSET: usize = CHROM_OFFSET + CHROM_WIDTH;

// Bit offsets in a location word, from the low end.
const LOC_REF_OFFSET: usize = support::BASE_WIDTH;
const LOC_POS_OFFSET: usize = LOC_REF_OFFSET + support::BASE_WIDTH;
const LOC_CHROM_OFFSET: usize = LOC_POS_OFFSET + POS_WIDTH;
const LOC_SAMPLE_OFFSET: usize = LOC_CHROM_OFFSET + CHROM_WIDTH;

//-----------------------------------------------------------------------------

// Extracts a `width`-bit field starting at bit `offset`.
#[inline]
fn field(word: u64, offset: usize, width: usize) -> u64 {
    (word >> offset) & bits::low_set(width)
}

// Returns `value` if it fits in `width` bits.
fn check_field(name: &'static str, value: u64, width: usize) -> Result<u64> {
    if value > bits::low_set(width) {
        Err(PackError::FieldOverflow {
            field: name,
            value,
            width,
        })
    } else {
        Ok(value)
    }
}

//-----------------------------------------------------------------------------

/// Decoded fields of a [`PackedVariant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Variant {
    /// Sample index or numeric sample ID.
    pub sample: u32,
    /// Chromosome number.
    pub chrom: u32,
    /// Position on the chromosome.
    pub pos: u32,
    /// Reference allele symbol.
    pub ref_allele: u8,
    /// Alternate allele symbol.
    pub alt_allele: u8,
    /// Genotype string, e.g. `0/1`.
    pub genotype: [u8; GENOTYPE_LEN],
}

//-----------------------------------------------------------------------------

/// A single SNV genotype observation packed into a 64-bit word.
///
/// The fields are composed from the high bits down in a fixed order: sample
/// index (17 bits), chromosome (5 bits), position (28 bits), reference and
/// alternate allele (2 bits each), and three genotype tokens (3 bits each).
/// That totals 63 bits; bit 63 is zero for any word packed from in-range
/// symbols. Packing and unpacking are exact inverses for in-range inputs.
///
/// # Examples
///
/// ```
/// use snvpack::{PackedVariant, Variant};
///
/// let word = PackedVariant::pack(17, 4, 5002, b'C', b'T', *b"1|1");
/// let truth = Variant {
///     sample: 17, chrom: 4, pos: 5002,
///     ref_allele: b'C', alt_allele: b'T', genotype: *b"1|1",
/// };
/// assert_eq!(word.unpack(), truth);
/// assert_eq!(PackedVariant::from(u64::from(word)), word);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedVariant(u64);

impl PackedVariant {
    /// Packs the given fields into a word, masking each integer field to its
    /// bit width.
    ///
    /// Unrecognized allele symbols collide with valid base codes and may spill
    /// one bit into the neighboring field; unrecognized genotype tokens encode
    /// as `'0'`. Use [`PackedVariant::try_pack`] to reject such inputs.
    ///
    /// # Arguments
    ///
    /// * `sample`: Sample index (17 bits).
    /// * `chrom`: Chromosome number (5 bits).
    /// * `pos`: Position (28 bits).
    /// * `ref_allele`, `alt_allele`: Allele symbols from `{A, C, G, T}`.
    /// * `genotype`: Three tokens from `{0, 1, ., /, |}`.
    pub fn pack(
        sample: u32,
        chrom: u32,
        pos: u32,
        ref_allele: u8,
        alt_allele: u8,
        genotype: [u8; GENOTYPE_LEN],
    ) -> Self {
        let mut word = (sample as u64) & bits::low_set(SAMPLE_WIDTH);
        word = (word << CHROM_WIDTH) | ((chrom as u64) & bits::low_set(CHROM_WIDTH));
        word = (word << POS_WIDTH) | ((pos as u64) & bits::low_set(POS_WIDTH));
        word = (word << support::BASE_WIDTH) | support::encode_base(ref_allele);
        word = (word << support::BASE_WIDTH) | support::encode_base(alt_allele);
        for token in genotype.iter() {
            word = (word << support::TOKEN_WIDTH) | support::encode_token(*token);
        }
        PackedVariant(word)
    }

    /// Packs the given fields into a word, or returns an error if an integer
    /// field does not fit in its bit width or a symbol is not in its alphabet.
    pub fn try_pack(
        sample: u32,
        chrom: u32,
        pos: u32,
        ref_allele: u8,
        alt_allele: u8,
        genotype: [u8; GENOTYPE_LEN],
    ) -> Result<Self> {
        let mut word = check_field("sample", sample as u64, SAMPLE_WIDTH)?;
        word = (word << CHROM_WIDTH) | check_field("chrom", chrom as u64, CHROM_WIDTH)?;
        word = (word << POS_WIDTH) | check_field("pos", pos as u64, POS_WIDTH)?;
        word = (word << support::BASE_WIDTH) | support::try_encode_base(ref_allele)?;
        word = (word << support::BASE_WIDTH) | support::try_encode_base(alt_allele)?;
        for token in genotype.iter() {
            word = (word << support::TOKEN_WIDTH) | support::try_encode_token(*token)?;
        }
        Ok(PackedVariant(word))
    }

    /// Unpacks the word back into its fields.
    ///
    /// The fields are extracted in the reverse of the packing order, starting
    /// from the genotype tokens in the low bits. For any word packed from
    /// in-range inputs this returns the original field values exactly.
    pub fn unpack(self) -> Variant {
        let mut word = self.0;
        let mut genotype = [0; GENOTYPE_LEN];
        for i in (0..GENOTYPE_LEN).rev() {
            if let Some(token) = support::decode_token(word & bits::low_set(support::TOKEN_WIDTH)) {
                genotype[i] = token;
            }
            word >>= support::TOKEN_WIDTH;
        }
        let alt_allele = support::decode_base(word & bits::low_set(support::BASE_WIDTH));
        word >>= support::BASE_WIDTH;
        let ref_allele = support::decode_base(word & bits::low_set(support::BASE_WIDTH));
        word >>= support::BASE_WIDTH;
        let pos = (word & bits::low_set(POS_WIDTH)) as u32;
        word >>= POS_WIDTH;
        let chrom = (word & bits::low_set(CHROM_WIDTH)) as u32;
        word >>= CHROM_WIDTH;
        let sample = (word & bits::low_set(SAMPLE_WIDTH)) as u32;
        Variant {
            sample,
            chrom,
            pos,
            ref_allele,
            alt_allele,
            genotype,
        }
    }

    /// Returns the sample index field.
    #[inline]
    pub fn sample(self) -> u32 {
        field(self.0, SAMPLE_OFFSET, SAMPLE_WIDTH) as u32
    }

    /// Returns the chromosome field.
    #[inline]
    pub fn chrom(self) -> u32 {
        field(self.0, CHROM_OFFSET, CHROM_WIDTH) as u32
    }

    /// Returns the position field.
    #[inline]
    pub fn pos(self) -> u32 {
        field(self.0, POS_OFFSET, POS_WIDTH) as u32
    }

    /// Returns the reference allele symbol.
    #[inline]
    pub fn ref_allele(self) -> u8 {
        support::decode_base(field(self.0, REF_OFFSET, support::BASE_WIDTH))
    }

    /// Returns the alternate allele symbol.
    #[inline]
    pub fn alt_allele(self) -> u8 {
        support::decode_base(field(self.0, ALT_OFFSET, support::BASE_WIDTH))
    }

    /// Returns the genotype string.
    pub fn genotype(self) -> [u8; GENOTYPE_LEN] {
        let mut result = [0; GENOTYPE_LEN];
        for i in 0..GENOTYPE_LEN {
            let offset = (GENOTYPE_LEN - 1 - i) * support::TOKEN_WIDTH;
            if let Some(token) = support::decode_token(field(self.0, offset, support::TOKEN_WIDTH)) {
                result[i] = token;
            }
        }
        result
    }
}

impl From<u64> for PackedVariant {
    #[inline]
    fn from(word: u64) -> Self {
        PackedVariant(word)
    }
}

impl From<PackedVariant> for u64 {
    #[inline]
    fn from(packed: PackedVariant) -> Self {
        packed.0
    }
}

impl Serializable for PackedVariant {}

//-----------------------------------------------------------------------------

/// An SNV site without genotype information packed into a 64-bit word.
///
/// The layout matches the leading fields of [`PackedVariant`] without the
/// genotype suffix: chromosome (5 bits), position (28 bits), and the two
/// allele slots (2 bits each) occupy the low 37 bits. The freed high bits
/// widen the sample/ID field to 27 bits; [`PackedLocation::pack`] leaves it
/// zero and [`PackedLocation::pack_with_sample`] fills it.
///
/// A location word is the per-variant header in the multi-sample scheme,
/// where the genotypes themselves live in [`GenotypeRecord`](crate::GenotypeRecord)
/// words. There is no separate unpack operation; the field accessors reuse
/// the same extraction primitives as [`PackedVariant`].
///
/// # Examples
///
/// ```
/// use snvpack::PackedLocation;
///
/// let word = PackedLocation::pack(22, 12345644, b'A', b'G');
/// assert_eq!(word.chrom(), 22);
/// assert_eq!(word.pos(), 12345644);
/// assert_eq!(word.ref_allele(), b'A');
/// assert_eq!(word.alt_allele(), b'G');
/// assert_eq!(word.sample(), 0);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedLocation(u64);

impl PackedLocation {
    /// Packs the given site fields into a word, masking each integer field to
    /// its bit width. The sample/ID field is left zero.
    pub fn pack(chrom: u32, pos: u32, ref_allele: u8, alt_allele: u8) -> Self {
        let mut word = (chrom as u64) & bits::low_set(CHROM_WIDTH);
        word = (word << POS_WIDTH) | ((pos as u64) & bits::low_set(POS_WIDTH));
        word = (word << support::BASE_WIDTH) | support::encode_base(ref_allele);
        word = (word << support::BASE_WIDTH) | support::encode_base(alt_allele);
        PackedLocation(word)
    }

    /// Packs the given site fields into a word with a sample/ID in the
    /// widened 27-bit high field, masking each integer field to its bit width.
    pub fn pack_with_sample(
        sample: u32,
        chrom: u32,
        pos: u32,
        ref_allele: u8,
        alt_allele: u8,
    ) -> Self {
        let sample = ((sample as u64) & bits::low_set(LOCATION_SAMPLE_WIDTH)) << LOC_SAMPLE_OFFSET;
        PackedLocation(sample | Self::pack(chrom, pos, ref_allele, alt_allele).0)
    }

    /// Packs the given site fields into a word, or returns an error if a
    /// field does not fit in its bit width or an allele is not a valid base.
    pub fn try_pack(chrom: u32, pos: u32, ref_allele: u8, alt_allele: u8) -> Result<Self> {
        let mut word = check_field("chrom", chrom as u64, CHROM_WIDTH)?;
        word = (word << POS_WIDTH) | check_field("pos", pos as u64, POS_WIDTH)?;
        word = (word << support::BASE_WIDTH) | support::try_encode_base(ref_allele)?;
        word = (word << support::BASE_WIDTH) | support::try_encode_base(alt_allele)?;
        Ok(PackedLocation(word))
    }

    /// Strict version of [`PackedLocation::pack_with_sample`].
    pub fn try_pack_with_sample(
        sample: u32,
        chrom: u32,
        pos: u32,
        ref_allele: u8,
        alt_allele: u8,
    ) -> Result<Self> {
        let sample = check_field("sample", sample as u64, LOCATION_SAMPLE_WIDTH)?;
        let word = Self::try_pack(chrom, pos, ref_allele, alt_allele)?;
        Ok(PackedLocation((sample << LOC_SAMPLE_OFFSET) | word.0))
    }

    /// Returns the sample/ID field.
    #[inline]
    pub fn sample(self) -> u32 {
        field(self.0, LOC_SAMPLE_OFFSET, LOCATION_SAMPLE_WIDTH) as u32
    }

    /// Returns the chromosome field.
    #[inline]
    pub fn chrom(self) -> u32 {
        field(self.0, LOC_CHROM_OFFSET, CHROM_WIDTH) as u32
    }

    /// Returns the position field.
    #[inline]
    pub fn pos(self) -> u32 {
        field(self.0, LOC_POS_OFFSET, POS_WIDTH) as u32
    }

    /// Returns the reference allele symbol.
    #[inline]
    pub fn ref_allele(self) -> u8 {
        support::decode_base(field(self.0, LOC_REF_OFFSET, support::BASE_WIDTH))
    }

    /// Returns the alternate allele symbol.
    #[inline]
    pub fn alt_allele(self) -> u8 {
        support::decode_base(field(self.0, 0, support::BASE_WIDTH))
    }
}

impl From<u64> for PackedLocation {
    #[inline]
    fn from(word: u64) -> Self {
        PackedLocation(word)
    }
}

impl From<PackedLocation> for u64 {
    #[inline]
    fn from(packed: PackedLocation) -> Self {
        packed.0
    }
}

impl Serializable for PackedLocation {}

//-----------------------------------------------------------------------------
