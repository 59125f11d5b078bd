//! Operating system entropy layer (Linux)
//!
//! Obtains cryptographically secure random bytes from the kernel using
//! the `getrandom` system call, which reads directly from the kernel
//! entropy pool and is suitable for cryptographic seeding.

use libc::{c_void, getrandom};

use crate::error::Error;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// `getrandom` is called repeatedly until the whole buffer is filled;
/// partial reads can occur depending on kernel behavior or signal
/// interruptions and are handled transparently.
///
/// Returns [`Error::EntropyUnavailable`] if the system call reports an
/// error. On success the buffer is fully initialized. No heap allocation
/// is performed.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            return Err(Error::EntropyUnavailable("getrandom() failed"));
        }

        filled += ret as usize;
    }

    Ok(())
}
