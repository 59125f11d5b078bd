use zeroize::Zeroize;

use crate::error::Error;
use crate::hash::sha256;
use crate::os::sys_random;

/// Seed size drawn from the OS per generation call.
const SEED_LEN: usize = 32;

/// Returns `n` random bytes suitable for nonces and identifiers.
///
/// A fresh 32-byte seed is drawn from the operating system on every call
/// and expanded with [`expand_seed`]; the seed is wiped before returning.
/// Nothing is retained between calls, so successive invocations are fully
/// independent.
///
/// Returns [`Error::EntropyUnavailable`] if the OS cannot supply the
/// seed. The failure is reported as-is; no retry is attempted here.
pub fn random_bytes(n: usize) -> Result<Vec<u8>, Error> {
    let mut seed = [0u8; SEED_LEN];
    sys_random(&mut seed)?;

    let out = expand_seed(&seed, n);
    seed.zeroize();

    Ok(out)
}

/// Expands a 32-byte seed into exactly `n` bytes in counter mode.
///
/// Output block `i` is `sha256(seed || be64(i))`; successive blocks are
/// concatenated and the result truncated to `n` bytes. The expansion is
/// deterministic for a fixed seed, which makes generation reproducible in
/// tests; unpredictability comes entirely from the seed.
pub fn expand_seed(seed: &[u8; SEED_LEN], n: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(n);
    let mut message = [0u8; SEED_LEN + 8];

    message[..SEED_LEN].copy_from_slice(seed);

    let mut counter: u64 = 0;

    while out.len() < n {
        message[SEED_LEN..].copy_from_slice(&counter.to_be_bytes());

        let block = sha256(&message);
        let take = (n - out.len()).min(block.len());

        out.extend_from_slice(&block[..take]);
        counter += 1;
    }

    message.zeroize();

    out
}
