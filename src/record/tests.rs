use super::*;

use rand::Rng;

//-----------------------------------------------------------------------------

fn check_genotypes(record: &GenotypeRecord, truth: &[(u8, u8)]) {
    assert_eq!(record.len(), truth.len(), "Incorrect genotype count");
    for (i, genotype) in truth.iter().enumerate() {
        assert_eq!(record.genotype(i), Ok(*genotype), "Invalid genotype for sample {}", i);
    }
    assert_eq!(
        record.genotype(truth.len()),
        Err(PackError::SampleOutOfBounds { index: truth.len(), count: truth.len() }),
        "Retrieval past the packed count did not fail"
    );
}

//-----------------------------------------------------------------------------

#[test]
fn empty_record() {
    let mut record = GenotypeRecord::new();
    assert_eq!(record.state(), RecordState::Empty, "Invalid initial state");
    assert_eq!(record.len(), 0, "Invalid initial genotype count");
    assert!(record.is_empty(), "New record is not empty");
    assert_eq!(record.slots_in_use(), 0, "Invalid initial offset");
    assert_eq!(record.word(), 0, "Invalid initial word");
    assert_eq!(record.genotype(0), Err(PackError::NotUnpacked), "Retrieval on an empty record did not fail");

    // Unpacking an empty record yields zero genotypes.
    record.unpack_all();
    assert_eq!(record.state(), RecordState::Unpacked, "Invalid state after unpacking");
    check_genotypes(&record, &[]);
}

#[test]
fn append_and_retrieve() {
    let mut record = GenotypeRecord::new();
    record.append(b'C', b'G').unwrap();
    record.append(b'C', b'C').unwrap();
    assert_eq!(record.state(), RecordState::Packed, "Invalid state after appends");
    assert_eq!(record.slots_in_use(), 4, "Invalid offset after appends");
    assert_eq!(record.word(), 0b01_10_01_01, "Invalid packed word");

    record.unpack_all();
    check_genotypes(&record, &[(b'C', b'G'), (b'C', b'C')]);
    assert_eq!(record.alleles(), Ok(&[b'C', b'G', b'C', b'C'][..]), "Invalid decoded alleles");
}

#[test]
fn retrieval_before_unpacking_fails() {
    let mut record = GenotypeRecord::new();
    record.append(b'A', b'T').unwrap();
    assert_eq!(record.genotype(0), Err(PackError::NotUnpacked), "Retrieval before unpacking did not fail");
    assert_eq!(record.alleles(), Err(PackError::NotUnpacked), "Allele access before unpacking did not fail");
}

#[test]
fn order_is_preserved() {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut rng = rand::rng();
    let mut truth: Vec<(u8, u8)> = Vec::new();
    let mut record = GenotypeRecord::new();
    for _ in 0..16 {
        let genotype = (bases[rng.random_range(0..bases.len())], bases[rng.random_range(0..bases.len())]);
        record.append(genotype.0, genotype.1).unwrap();
        truth.push(genotype);
    }

    record.unpack_all();
    check_genotypes(&record, &truth);
}

#[test]
fn unpacking_is_idempotent() {
    let mut record = GenotypeRecord::new();
    record.append(b'G', b'G').unwrap();
    record.append(b'T', b'A').unwrap();
    record.unpack_all();
    let unpacked = record;
    record.unpack_all();
    assert_eq!(record, unpacked, "Repeated unpacking changed the record");
}

//-----------------------------------------------------------------------------

#[test]
fn capacity_boundary() {
    let mut record = GenotypeRecord::new();

    // The rejection condition is offset >= 63 before the call, so all 32
    // appends succeed and the offset ends at 64.
    for i in 0..32 {
        assert_eq!(record.append(b'C', b'T'), Ok(()), "Append {} was rejected", i);
    }
    assert_eq!(record.slots_in_use(), ALLELE_SLOTS, "Invalid offset at capacity");

    let full = record;
    assert_eq!(
        record.append(b'C', b'T'),
        Err(PackError::CapacityExceeded { slots: ALLELE_SLOTS }),
        "Append succeeded on a full record"
    );
    assert_eq!(record, full, "A failed append mutated the record");
}

#[test]
fn overflow_shifts_out_oldest_alleles() {
    // 17 genotypes need 68 bits. The first two alleles are shifted out of the
    // word and their slots decode as 'A'.
    let mut record = GenotypeRecord::new();
    record.append(b'T', b'G').unwrap();
    for _ in 0..16 {
        record.append(b'C', b'G').unwrap();
    }

    record.unpack_all();
    assert_eq!(record.genotype(0), Ok((b'A', b'A')), "Shifted-out slots did not decode as 'A'");
    for i in 1..17 {
        assert_eq!(record.genotype(i), Ok((b'C', b'G')), "Invalid genotype for sample {}", i);
    }
}

//-----------------------------------------------------------------------------

#[test]
fn no_mutation_after_unpacking() {
    let mut record = GenotypeRecord::new();
    record.append(b'A', b'C').unwrap();
    record.unpack_all();

    let unpacked = record;
    assert_eq!(record.append(b'G', b'T'), Err(PackError::AlreadyUnpacked), "Append succeeded on an unpacked record");
    assert_eq!(record.try_append(b'G', b'T'), Err(PackError::AlreadyUnpacked), "Strict append succeeded on an unpacked record");
    assert_eq!(record, unpacked, "A failed append mutated the record");
}

#[test]
fn strict_append() {
    let mut record = GenotypeRecord::new();
    record.try_append(b'C', b'G').unwrap();

    let before = record;
    assert_eq!(record.try_append(b'N', b'G'), Err(PackError::InvalidBase('N')), "Strict append accepted the sentinel base");
    assert_eq!(record.try_append(b'A', b'x'), Err(PackError::InvalidBase('x')), "Strict append accepted an invalid base");
    assert_eq!(record, before, "A failed strict append mutated the record");

    // For valid bases the strict and permissive appends agree.
    let mut permissive = GenotypeRecord::new();
    permissive.append(b'C', b'G').unwrap();
    assert_eq!(record, permissive, "Strict and permissive appends diverged");
}

#[test]
fn permissive_append_collides() {
    // 'N' carries the 3-bit sentinel code: its slot reads as 'A' and the
    // extra bit flips the low bit of the preceding allele, turning 'A' into
    // 'C'.
    let mut record = GenotypeRecord::new();
    record.append(b'A', b'N').unwrap();
    record.unpack_all();
    assert_eq!(record.genotype(0), Ok((b'C', b'A')), "Unexpected decoding for a sentinel allele");
}

//-----------------------------------------------------------------------------
