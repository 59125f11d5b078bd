use sha2::{Digest, Sha256 as RefSha256};
use sha256rand::hash::{Sha256, sha256};

fn expect_sha256_eq(input: &[u8], expected_hex: &str) {
    let got = sha256(input);
    let expected = hex::decode(expected_hex).unwrap();

    assert_eq!(
        got.as_slice(),
        expected.as_slice(),
        "Digest mismatch for input of {} bytes\nExpected {}\nGot      {}",
        input.len(),
        expected_hex,
        hex::encode(got),
    );
}

fn reference_sha256(input: &[u8]) -> [u8; 32] {
    let mut hasher = RefSha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

// -------------------------------------------------------
// 1. OFFICIAL SHA-256 TEST VECTORS
// -------------------------------------------------------

#[test]
fn sha256_empty_vector() {
    expect_sha256_eq(
        &[],
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn sha256_abc_vector() {
    expect_sha256_eq(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn sha256_two_block_vector() {
    expect_sha256_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn sha256_known_phrase() {
    expect_sha256_eq(
        b"The quick brown fox jumps over the lazy dog",
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    );
}

#[test]
fn sha256_million_a_vector() {
    let buf = vec![b'a'; 1_000_000];

    expect_sha256_eq(
        &buf,
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    );
}

// -------------------------------------------------------
// 2. PADDING BOUNDARIES
// -------------------------------------------------------

// Lengths around 55/56 force the one-vs-two final compression rounds,
// and multiples of 64 require a full extra padding block.
#[test]
fn sha256_padding_boundary_lengths() {
    for len in [54, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129] {
        let buf = vec![0x5Au8; len];

        assert_eq!(
            sha256(&buf),
            reference_sha256(&buf),
            "mismatch at boundary length {len}",
        );
    }
}

#[test]
fn sha256_deterministic() {
    let buf = b"determinism check";

    assert_eq!(sha256(buf), sha256(buf));
}

// -------------------------------------------------------
// 3. STREAMING STATE
// -------------------------------------------------------

#[test]
fn sha256_streaming_matches_one_shot() {
    let buf: Vec<u8> = (0..300).map(|i| (i % 256) as u8).collect();

    let mut hasher = Sha256::new();
    hasher.update(&buf).unwrap();

    assert_eq!(hasher.finalize(), sha256(&buf));
}

#[test]
fn sha256_chunking_invariant_every_split() {
    let buf: Vec<u8> = (0..200).map(|i| (i * 7 % 256) as u8).collect();
    let whole = sha256(&buf);

    for k in 0..=buf.len() {
        let mut hasher = Sha256::new();
        hasher.update(&buf[..k]).unwrap();
        hasher.update(&buf[k..]).unwrap();

        assert_eq!(hasher.finalize(), whole, "mismatch at split point {k}");
    }
}

#[test]
fn sha256_streaming_byte_at_a_time() {
    let buf: Vec<u8> = (0..150).map(|i| (i * 31 % 256) as u8).collect();

    let mut hasher = Sha256::new();
    for &byte in &buf {
        hasher.update(&[byte]).unwrap();
    }

    assert_eq!(hasher.finalize(), sha256(&buf));
}

#[test]
fn sha256_streaming_empty_updates() {
    let mut hasher = Sha256::new();
    hasher.update(&[]).unwrap();
    hasher.update(b"abc").unwrap();
    hasher.update(&[]).unwrap();

    assert_eq!(hasher.finalize(), sha256(b"abc"));
}

#[test]
fn sha256_default_is_fresh_state() {
    let hasher = Sha256::default();

    assert_eq!(hasher.finalize(), sha256(&[]));
}

// -------------------------------------------------------
// 4. CROSS-IMPLEMENTATION EQUIVALENCE
// -------------------------------------------------------

#[test]
fn sha256_matches_reference_incremental_lengths() {
    let mut buf = Vec::with_capacity(1025);

    for i in 0..1025 {
        assert_eq!(
            sha256(&buf),
            reference_sha256(&buf),
            "mismatch at length {}",
            buf.len(),
        );

        buf.push((i % 256) as u8);
    }
}

#[test]
fn sha256_matches_reference_counter_messages() {
    for i in 0..1000 {
        let message = format!("counter,{i}");

        assert_eq!(
            sha256(message.as_bytes()),
            reference_sha256(message.as_bytes()),
            "mismatch for {message:?}",
        );
    }
}

#[test]
fn sha256_matches_reference_patterns() {
    for len in [1, 2, 4, 8, 16, 32, 64, 128, 255, 256, 1000, 5000] {
        for fill in [0x00u8, 0xFF, 0xAA] {
            let buf = vec![fill; len];

            assert_eq!(
                sha256(&buf),
                reference_sha256(&buf),
                "mismatch for {len} bytes of {fill:#04x}",
            );
        }
    }
}

#[test]
fn sha256_matches_reference_multiblock() {
    let buf: Vec<u8> = (0..5000).map(|i| (i % 256) as u8).collect();

    assert_eq!(sha256(&buf), reference_sha256(&buf));
}

#[test]
fn sha256_matches_reference_single_bytes() {
    for b in 0u8..=255 {
        assert_eq!(sha256(&[b]), reference_sha256(&[b]), "mismatch for byte {b:#04x}");
    }
}
