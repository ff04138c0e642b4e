//! CPU affinity guard for keeping the benchmark thread on one core.
//!
//! The affinity mask in place before pinning is stored in the guard itself
//! and restored when the guard is dropped. On platforms without an affinity
//! API the guard is a no-op and reports that it is not pinned.

// ============================================================================
// Linux implementation using libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    use std::mem;

    pub type SavedAffinity = libc::cpu_set_t;

    /// Core the calling thread is running on right now
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        if cpu >= 0 {
            Some(cpu as usize)
        } else {
            None
        }
    }

    pub fn save_affinity() -> Option<SavedAffinity> {
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            if libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                Some(set)
            } else {
                None
            }
        }
    }

    pub fn set_affinity(core_id: usize) -> bool {
        if core_id >= libc::CPU_SETSIZE as usize {
            return false;
        }
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity(saved: &SavedAffinity) -> bool {
        unsafe { libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), saved) == 0 }
    }
}

// ============================================================================
// Fallback for platforms without thread affinity (macOS only has hints)
// ============================================================================

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type SavedAffinity = ();

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> Option<SavedAffinity> {
        None
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity(_saved: &SavedAffinity) -> bool {
        true
    }
}

// ============================================================================
// RAII Guard
// ============================================================================

/// RAII guard for CPU pinning - pins on creation, restores on drop.
///
/// # Example
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // Thread pinned
///     // ... timed loops ...
/// } // Original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::SavedAffinity>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently running on, falling back to
    /// core 0 when the current core is unknown.
    pub fn new() -> Self {
        let core = platform::current_cpu().unwrap_or(0);
        Self::with_core(core)
    }

    /// Pin to a specific core.
    pub fn with_core(core_id: usize) -> Self {
        let Some(saved) = platform::save_affinity() else {
            return Self::unpinned();
        };
        if !platform::set_affinity(core_id) {
            return Self::unpinned();
        }
        Self {
            pinned_core: Some(core_id),
            saved: Some(saved),
        }
    }

    fn unpinned() -> Self {
        Self {
            pinned_core: None,
            saved: None,
        }
    }

    /// Core this thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if !platform::restore_affinity(&saved) {
                log::warn!("failed to restore CPU affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
    }

    #[test]
    fn test_pin_to_invalid_core_is_unpinned() {
        let guard = CpuPinGuard::with_core(usize::MAX / 2);
        assert!(!guard.is_pinned());
        assert_eq!(guard.core_id(), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_pin_restores_affinity() {
        let before = platform::save_affinity().expect("affinity readable");
        {
            let _guard = CpuPinGuard::with_core(0);
        }
        let after = platform::save_affinity().expect("affinity readable");
        assert!(unsafe { libc::CPU_EQUAL(&before, &after) });
    }
}
