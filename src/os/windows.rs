//! Operating system entropy layer (Windows)
//!
//! Uses `BCryptGenRandom` with the system-preferred RNG, the supported
//! CNG interface for cryptographically secure random bytes.

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

use crate::error::Error;

pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    // BCryptGenRandom takes a u32 length; anything larger cannot be
    // filled in one call and is reported rather than truncated.
    let len = u32::try_from(buf.len())
        .map_err(|_| Error::EntropyUnavailable("buffer too large for BCryptGenRandom"))?;

    let status = unsafe {
        BCryptGenRandom(
            std::ptr::null_mut(),
            buf.as_mut_ptr(),
            len,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status != 0 {
        return Err(Error::EntropyUnavailable("BCryptGenRandom failed"));
    }

    Ok(())
}
