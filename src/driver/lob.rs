//! Large object (BLOB) handles.
//!
//! A large object comes back from a result slot as a handle, not as bytes.
//! The handle must be freed once the caller is done with it:
//! 1. Acquire the handle from the slot
//! 2. Copy its binary stream into memory
//! 3. Free the handle, whether or not the copy succeeded
//!
//! [`read_and_free`] implements that sequence; [`LobValue`] is the in-memory
//! handle used when binding parameters.

use crate::error::{Error, Result};
use bytes::{Buf, Bytes};
use std::io::Read;
use tracing::warn;

/// Upper bound on the buffer reserved up front from a reported length.
const PREALLOCATE_LIMIT: usize = 1 << 20;

/// A driver-side handle to binary data that must be explicitly freed.
pub trait LargeObject {
    /// Length of the object in bytes, used to size the copy buffer.
    fn length(&self) -> Result<u64>;

    /// Open a stream over the object's bytes.
    fn binary_stream(&mut self) -> Result<Box<dyn Read + '_>>;

    /// Release the handle and any resources it holds.
    fn free(&mut self) -> Result<()>;
}

/// In-memory large object holding its bytes directly.
#[derive(Debug, Clone, PartialEq)]
pub struct LobValue {
    data: Bytes,
    freed: bool,
}

impl LobValue {
    /// Wrap a byte sequence in a large object handle.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            freed: false,
        }
    }

    /// Get the bytes (None once freed).
    pub fn as_bytes(&self) -> Option<&[u8]> {
        if self.freed {
            None
        } else {
            Some(&self.data)
        }
    }

    /// Check if the handle has been freed.
    pub fn is_freed(&self) -> bool {
        self.freed
    }

    /// Get the object size in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

impl LargeObject for LobValue {
    fn length(&self) -> Result<u64> {
        if self.freed {
            return Err(Error::LobFreed);
        }
        Ok(self.size())
    }

    fn binary_stream(&mut self) -> Result<Box<dyn Read + '_>> {
        if self.freed {
            return Err(Error::LobFreed);
        }
        Ok(Box::new(self.data.clone().reader()))
    }

    fn free(&mut self) -> Result<()> {
        // Freeing twice is a no-op.
        self.freed = true;
        self.data = Bytes::new();
        Ok(())
    }
}

/// Frees the held large object when dropped, unless released explicitly.
struct FreeGuard<'a> {
    lob: Option<Box<dyn LargeObject + 'a>>,
}

impl<'a> FreeGuard<'a> {
    fn new(lob: Box<dyn LargeObject + 'a>) -> Self {
        Self { lob: Some(lob) }
    }

    fn copy(&mut self) -> Result<Vec<u8>> {
        let lob = self.lob.as_deref_mut().ok_or(Error::LobFreed)?;
        let capacity = usize::try_from(lob.length()?).map_or(PREALLOCATE_LIMIT, |len| {
            len.min(PREALLOCATE_LIMIT)
        });
        let mut stream = lob.binary_stream()?;
        let mut buf = Vec::with_capacity(capacity);
        stream.read_to_end(&mut buf)?;
        Ok(buf)
    }

    fn release(mut self) -> Result<()> {
        match self.lob.take() {
            Some(mut lob) => lob.free(),
            None => Ok(()),
        }
    }
}

impl Drop for FreeGuard<'_> {
    fn drop(&mut self) {
        if let Some(mut lob) = self.lob.take() {
            warn!("freeing large object from drop guard");
            if let Err(err) = lob.free() {
                warn!(error = %err, "failed to free large object");
            }
        }
    }
}

/// Copy the whole binary stream of `lob` into memory, then free it.
///
/// The handle is freed exactly once on every exit path: after a successful
/// copy, after a failed copy, and on unwind. A copy error takes precedence
/// over a free error.
pub fn read_and_free<'a>(lob: Box<dyn LargeObject + 'a>) -> Result<Vec<u8>> {
    let mut guard = FreeGuard::new(lob);
    let copied = guard.copy();
    let freed = guard.release();
    match (copied, freed) {
        (Ok(bytes), Ok(())) => Ok(bytes),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(free_err)) => {
            warn!(error = %free_err, "failed to free large object after copy error");
            Err(err)
        }
    }
}
