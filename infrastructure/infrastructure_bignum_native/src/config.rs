//! Native Engine Configuration
//!
//! Limits applied to every buffer the native engine allocates on the
//! current thread. The allocation budget doubles as a fault-injection hook:
//! once exhausted, further allocations report [`Status::Mem`].

use std::cell::RefCell;

use crate::status::Status;

/// Native engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeConfig {
    /// Largest number of 32-bit limbs a single buffer may hold
    pub max_limbs: usize,
    /// Remaining allocations permitted on this thread (`None` = unlimited)
    pub allocation_budget: Option<usize>,
}

impl Default for NativeConfig {
    fn default() -> Self {
        Self {
            max_limbs: 1 << 26, // 256 MiB of limbs
            allocation_budget: None,
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<NativeConfig> = RefCell::new(NativeConfig::default());
}

/// Reinstates the previous configuration when a scope ends
struct Restore(Option<NativeConfig>);

impl Drop for Restore {
    fn drop(&mut self) {
        if let Some(previous) = self.0.take() {
            previous.apply();
        }
    }
}

impl NativeConfig {
    /// Configuration currently active on this thread
    pub fn current() -> Self {
        ACTIVE.with(|active| active.borrow().clone())
    }

    /// Install this configuration on the current thread, returning the previous one
    pub fn apply(self) -> NativeConfig {
        ACTIVE.with(|active| std::mem::replace(&mut *active.borrow_mut(), self))
    }

    /// Run `f` with this configuration, restoring the previous one afterwards
    /// (also when `f` panics)
    pub fn scope<R>(self, f: impl FnOnce() -> R) -> R {
        let _restore = Restore(Some(self.apply()));
        f()
    }

    /// Account for one allocation of `limbs` limbs against the active limits
    pub(crate) fn charge_allocation(limbs: usize) -> Result<(), Status> {
        ACTIVE.with(|active| {
            let mut active = active.borrow_mut();
            if limbs > active.max_limbs {
                log::warn!(
                    "rejecting {}-limb buffer: limit is {} limbs",
                    limbs,
                    active.max_limbs
                );
                return Err(Status::Max);
            }
            if let Some(budget) = active.allocation_budget.as_mut() {
                if *budget == 0 {
                    return Err(Status::Mem);
                }
                *budget -= 1;
            }
            Ok(())
        })
    }
}
