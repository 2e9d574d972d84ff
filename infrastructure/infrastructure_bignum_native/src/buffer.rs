//! Limb Buffers
//!
//! [`LimbBuffer`] is the single owner of one `libc`-allocated block of
//! 32-bit limbs (least significant first). The block is released in `Drop`,
//! so it is freed exactly once: when its owner goes out of scope, on every
//! return path including early `?` exits. Moving a buffer transfers
//! ownership; there is no way to share one block between two owners.

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;

use crate::config::NativeConfig;
use crate::status::Status;

thread_local! {
    static LIVE_BUFFERS: Cell<usize> = const { Cell::new(0) };
}

/// Number of buffers allocated on this thread and not yet released
pub fn live_buffers() -> usize {
    LIVE_BUFFERS.with(|live| live.get())
}

/// Exclusively owned block of limbs in unmanaged memory
pub struct LimbBuffer {
    ptr: NonNull<u32>,
    capacity: usize,
    len: usize,
}

// The block is owned exclusively and only mutated through `&mut self`.
unsafe impl Send for LimbBuffer {}
unsafe impl Sync for LimbBuffer {}

impl LimbBuffer {
    /// Allocate `len` zeroed limbs, subject to the active [`NativeConfig`]
    pub fn zeroed(len: usize) -> Result<Self, Status> {
        NativeConfig::charge_allocation(len)?;
        Self::allocate(len).ok_or(Status::Mem)
    }

    /// Allocate a trimmed copy of `limbs`
    pub fn from_limbs(limbs: &[u32]) -> Result<Self, Status> {
        let mut buffer = Self::zeroed(limbs.len())?;
        buffer.as_mut_slice().copy_from_slice(limbs);
        buffer.trim();
        Ok(buffer)
    }

    fn allocate(len: usize) -> Option<Self> {
        // calloc(0) may legitimately return null, so always ask for one limb.
        let capacity = len.max(1);
        let raw = unsafe { libc::calloc(capacity, std::mem::size_of::<u32>()) };
        let ptr = NonNull::new(raw.cast::<u32>())?;
        LIVE_BUFFERS.with(|live| live.set(live.get() + 1));
        log::trace!("allocated {} limbs at {:p}", capacity, ptr);
        Some(Self { ptr, capacity, len })
    }

    /// Copy that ignores the allocation budget; aborts on genuine exhaustion
    pub(crate) fn copy_unbudgeted(&self) -> Self {
        match Self::allocate(self.len) {
            Some(mut copy) => {
                copy.as_mut_slice().copy_from_slice(self.as_slice());
                copy
            }
            None => std::alloc::handle_alloc_error(
                Layout::array::<u32>(self.len.max(1)).unwrap_or_else(|_| Layout::new::<u32>()),
            ),
        }
    }

    /// Limbs in use
    pub fn as_slice(&self) -> &[u32] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Limbs in use, mutably
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Number of limbs in use
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no limbs are in use
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop high zero limbs from the in-use range
    pub fn trim(&mut self) {
        while self.len > 0 && self.as_slice()[self.len - 1] == 0 {
            self.len -= 1;
        }
    }
}

impl Drop for LimbBuffer {
    fn drop(&mut self) {
        log::trace!("released {} limbs at {:p}", self.capacity, self.ptr);
        unsafe { libc::free(self.ptr.as_ptr().cast::<libc::c_void>()) };
        // Thread-local storage may already be gone during thread teardown.
        let _ = LIVE_BUFFERS.try_with(|live| live.set(live.get().saturating_sub(1)));
    }
}

impl std::fmt::Debug for LimbBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice().iter().rev()).finish()
    }
}
