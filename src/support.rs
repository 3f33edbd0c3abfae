//! Symbol codecs for bases and genotype tokens.
//!
//! Bases `A`, `C`, `G`, and `T` encode to 2-bit codes `0..=3`. The decode-side
//! alphabet additionally contains the sentinel `N` with code `4`, which has no
//! lossless 2-bit encoding. Genotype tokens `0`, `1`, `.`, `/`, and `|` encode
//! to 3-bit codes `0..=4`.
//!
//! The permissive encoders are total functions: an unrecognized byte is mapped
//! through the same tables as a valid one and collides with a valid code. The
//! strict `try_*` encoders report such bytes as errors instead.
//!
//! # Examples
//!
//! ```
//! use snvpack::support;
//!
//! assert_eq!(support::encode_base(b'G'), 2);
//! assert_eq!(support::decode_base(2), b'G');
//!
//! assert_eq!(support::encode_token(b'|'), 4);
//! assert_eq!(support::decode_token(4), Some(b'|'));
//!
//! // Unrecognized tokens collide with '0'.
//! assert_eq!(support::encode_token(b'?'), support::encode_token(b'0'));
//! assert!(support::try_encode_token(b'?').is_err());
//! ```

use crate::error::{PackError, Result};

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// Width of a packed base code in bits.
pub const BASE_WIDTH: usize = 2;

/// Width of a packed genotype token in bits.
pub const TOKEN_WIDTH: usize = 3;

/// Decode-side sentinel code for the base `N`.
pub const SENTINEL_CODE: u64 = 4;

// Base codes indexed by the low 3 bits of the symbol byte. The slots that do
// not correspond to `A`, `C`, `G`, or `T` hold the sentinel code.
const BASE_CODES: [u64; 8] = [4, 0, 4, 1, 3, 4, 4, 2];

// Symbol bytes indexed by base code.
const BASE_SYMBOLS: [u8; 5] = [b'A', b'C', b'G', b'T', b'N'];

//-----------------------------------------------------------------------------

/// Encodes a base symbol as a 2-bit code.
///
/// The mapping uses the low 3 bits of the byte, so it is total and lower case
/// bases encode like their upper case forms. Bytes that do not correspond to
/// `A`, `C`, `G`, or `T` yield [`SENTINEL_CODE`], which occupies 3 bits; when
/// such a code is shifted into a 2-bit slot, the slot reads as the code for
/// `A` and the extra bit lands in the neighboring field.
///
/// # Examples
///
/// ```
/// use snvpack::support;
///
/// assert_eq!(support::encode_base(b'A'), 0);
/// assert_eq!(support::encode_base(b'c'), 1);
/// assert_eq!(support::encode_base(b'N'), support::SENTINEL_CODE);
/// ```
#[inline]
pub fn encode_base(base: u8) -> u64 {
    BASE_CODES[(base & 0x7) as usize]
}

/// Encodes a base symbol as a 2-bit code, or returns an error if the symbol
/// is not one of `A`, `C`, `G`, or `T`.
#[inline]
pub fn try_encode_base(base: u8) -> Result<u64> {
    match base {
        b'A' => Ok(0),
        b'C' => Ok(1),
        b'G' => Ok(2),
        b'T' => Ok(3),
        _ => Err(PackError::InvalidBase(base as char)),
    }
}

/// Decodes a base code back into a symbol byte.
///
/// Code `4` decodes to the sentinel `N`. It is never produced when a packed
/// word is decoded, because the decoder masks each slot to 2 bits first.
///
/// # Panics
///
/// Panics if `code > 4`.
#[inline]
pub fn decode_base(code: u64) -> u8 {
    BASE_SYMBOLS[code as usize]
}

//-----------------------------------------------------------------------------

/// Encodes a genotype token as a 3-bit code.
///
/// Tokens outside the alphabet encode as `0`, which is observably identical
/// to encoding the token `'0'`.
#[inline]
pub fn encode_token(token: u8) -> u64 {
    match token {
        b'0' => 0,
        b'1' => 1,
        b'.' => 2,
        b'/' => 3,
        b'|' => 4,
        _ => 0,
    }
}

/// Encodes a genotype token as a 3-bit code, or returns an error if the token
/// is not one of `0`, `1`, `.`, `/`, or `|`.
#[inline]
pub fn try_encode_token(token: u8) -> Result<u64> {
    match token {
        b'0' | b'1' | b'.' | b'/' | b'|' => Ok(encode_token(token)),
        _ => Err(PackError::InvalidToken(token as char)),
    }
}

/// Decodes a genotype token code back into a token byte.
///
/// Codes `5..=7` are unreachable from [`encode_token`] and decode to [`None`],
/// leaving the caller's output slot unset.
#[inline]
pub fn decode_token(code: u64) -> Option<u8> {
    match code {
        0 => Some(b'0'),
        1 => Some(b'1'),
        2 => Some(b'.'),
        3 => Some(b'/'),
        4 => Some(b'|'),
        _ => None,
    }
}

//-----------------------------------------------------------------------------
