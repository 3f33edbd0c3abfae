use super::*;

//-----------------------------------------------------------------------------

#[test]
fn base_codec() {
    let bases = [b'A', b'C', b'G', b'T'];
    for (code, base) in bases.iter().enumerate() {
        assert_eq!(encode_base(*base), code as u64, "Invalid code for base {}", *base as char);
        assert_eq!(decode_base(code as u64), *base, "Invalid base for code {}", code);
        assert_eq!(try_encode_base(*base), Ok(code as u64), "Strict encoding failed for base {}", *base as char);
    }
}

#[test]
fn lower_case_bases() {
    // The table is indexed by the low 3 bits of the byte, which the case bit
    // does not affect.
    for base in [b'a', b'c', b'g', b't'].iter() {
        let upper = base.to_ascii_uppercase();
        assert_eq!(encode_base(*base), encode_base(upper), "Base {} does not encode like {}", *base as char, upper as char);
    }
}

#[test]
fn base_sentinel() {
    assert_eq!(encode_base(b'N'), SENTINEL_CODE, "N did not encode to the sentinel code");
    assert_eq!(decode_base(SENTINEL_CODE), b'N', "The sentinel code did not decode to N");
    assert_eq!(try_encode_base(b'N'), Err(PackError::InvalidBase('N')), "Strict encoding accepted N");
}

#[test]
fn unmapped_bases_collide() {
    // 'Q' shares its low 3 bits with 'A' and 'S' shares them with 'C'.
    assert_eq!(encode_base(b'Q'), encode_base(b'A'), "Q did not collide with A");
    assert_eq!(encode_base(b'S'), encode_base(b'C'), "S did not collide with C");
    assert_eq!(try_encode_base(b'Q'), Err(PackError::InvalidBase('Q')), "Strict encoding accepted Q");
}

//-----------------------------------------------------------------------------

#[test]
fn token_codec() {
    let tokens = [b'0', b'1', b'.', b'/', b'|'];
    for (code, token) in tokens.iter().enumerate() {
        assert_eq!(encode_token(*token), code as u64, "Invalid code for token {}", *token as char);
        assert_eq!(decode_token(code as u64), Some(*token), "Invalid token for code {}", code);
        assert_eq!(try_encode_token(*token), Ok(code as u64), "Strict encoding failed for token {}", *token as char);
    }
}

#[test]
fn unmapped_tokens_encode_as_zero() {
    for token in [b'2', b'G', b' ', b'?'].iter() {
        assert_eq!(encode_token(*token), encode_token(b'0'), "Token {} did not encode like '0'", *token as char);
        assert_eq!(
            try_encode_token(*token),
            Err(PackError::InvalidToken(*token as char)),
            "Strict encoding accepted token {}", *token as char
        );
    }
}

#[test]
fn undefined_token_codes() {
    for code in 5..8 {
        assert_eq!(decode_token(code), None, "Unreachable code {} decoded to a token", code);
    }
}

//-----------------------------------------------------------------------------
