use super::computations::all_rounds;
use super::{H256_INIT, MAX_MESSAGE_LEN};
use crate::error::Error;

#[inline(always)]
pub(crate) fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let mut w = [0u32; 16];

    for i in 0..16 {
        let bytes = &block[i * 4..i * 4 + 4];
        w[i] = u32::from_be_bytes(bytes.try_into().unwrap());
    }

    #[cfg(not(feature = "speed"))]
    all_rounds(state, w);

    #[cfg(feature = "speed")]
    all_rounds(state, &mut w);
}

#[inline(always)]
fn serialize(state: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];

    for (i, word) in state.iter().enumerate() {
        out[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// Digests a complete in-memory message in one call.
///
/// Deterministic and allocation-free; equivalent to feeding the whole
/// slice to [`Sha256`] in a single `update`.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut state = H256_INIT;

    let mut i = 0;
    let len = input.len();

    while i + 64 <= len {
        let block = input[i..i + 64].try_into().unwrap();
        compress(block, &mut state);
        i += 64;
    }

    let mut block = [0u8; 64];
    let rem = len - i;

    block[..rem].copy_from_slice(&input[i..]);
    block[rem] = 0x80;

    if rem > 55 {
        compress(&block, &mut state);
        block = [0; 64];
    }

    let bit_len = (len as u64) << 3;
    block[56..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    serialize(&state)
}

/// Streaming SHA-256 digest computation.
///
/// One value of this type owns the entire state of one in-progress digest:
/// the eight working registers, at most 63 buffered message bytes, and the
/// running byte count used for length encoding. Create a fresh state per
/// message, feed it with any number of `update` calls, and consume it with
/// `finalize`. The digest does not depend on how the message was split
/// across updates.
///
/// No state is shared between instances, so independent threads may each
/// run their own computation without synchronization.
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; 64],
    buffer_len: usize,
    total_len: u64,
}

impl Sha256 {
    /// Creates a fresh state, registers set to the initial hash values.
    pub fn new() -> Self {
        Self {
            state: H256_INIT,
            buffer: [0u8; 64],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Absorbs a chunk of the message.
    ///
    /// Bytes are buffered until a full 64-byte block is available, then
    /// compressed into the registers one block at a time. Fewer than 64
    /// bytes remain buffered after every call.
    ///
    /// Returns [`Error::InvalidInput`] if the total message would exceed
    /// the 2^61 - 1 byte SHA-256 length-encoding ceiling; the state is
    /// left untouched in that case.
    pub fn update(&mut self, input: &[u8]) -> Result<(), Error> {
        if input.len() as u64 > MAX_MESSAGE_LEN - self.total_len {
            return Err(Error::InvalidInput(
                "message exceeds the SHA-256 length ceiling of 2^61 - 1 bytes",
            ));
        }

        self.total_len += input.len() as u64;

        let mut rest = input;

        if self.buffer_len > 0 {
            let take = (64 - self.buffer_len).min(rest.len());

            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&rest[..take]);
            self.buffer_len += take;
            rest = &rest[take..];

            if self.buffer_len == 64 {
                let block = self.buffer;
                compress(&block, &mut self.state);
                self.buffer_len = 0;
            }
        }

        while rest.len() >= 64 {
            let block = rest[..64].try_into().unwrap();
            compress(block, &mut self.state);
            rest = &rest[64..];
        }

        self.buffer[self.buffer_len..self.buffer_len + rest.len()].copy_from_slice(rest);
        self.buffer_len += rest.len();

        Ok(())
    }

    /// Appends the padding and emits the digest, consuming the state.
    ///
    /// A single `0x80` byte, zero padding, and the 8-byte big-endian bit
    /// length bring the padded message to a multiple of 64 bytes; when the
    /// buffered tail leaves fewer than 8 spare bytes this takes a second
    /// compression round.
    pub fn finalize(mut self) -> [u8; 32] {
        let mut block = [0u8; 64];

        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        block[self.buffer_len] = 0x80;

        if self.buffer_len > 55 {
            compress(&block, &mut self.state);
            block = [0; 64];
        }

        let bit_len = self.total_len << 3;
        block[56..].copy_from_slice(&bit_len.to_be_bytes());

        compress(&block, &mut self.state);

        serialize(&self.state)
    }
}

impl Default for Sha256 {
    /// Equivalent to [`Sha256::new`].
    fn default() -> Self {
        Self::new()
    }
}
