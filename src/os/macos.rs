//! Operating system entropy layer (macOS)
//!
//! `arc4random_buf` draws from the kernel CSPRNG and cannot fail once the
//! process is running, so this implementation always succeeds.

use libc::arc4random_buf;

use crate::error::Error;

pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
