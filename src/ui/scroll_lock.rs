// SPDX-License-Identifier: MPL-2.0
//! Scoped suppression of background scrolling.
//!
//! While the lightbox is open, the thumbnail grid behind it must not
//! scroll. Instead of balanced set/clear calls, the suppression is a guard:
//! [`ScrollLockState::acquire`] returns a [`ScrollLock`] whose `Drop`
//! releases it, so every path out of the open state (close, escape,
//! teardown) releases exactly once.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Shared scroll-suppression counter. Cloning shares the counter.
#[derive(Debug, Clone, Default)]
pub struct ScrollLockState {
    held: Arc<AtomicU32>,
}

impl ScrollLockState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock; scrolling stays suppressed until the returned
    /// guard is dropped.
    #[must_use]
    pub fn acquire(&self) -> ScrollLock {
        self.held.fetch_add(1, Ordering::SeqCst);
        ScrollLock {
            held: Arc::clone(&self.held),
        }
    }

    /// Whether any guard is currently alive.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.held.load(Ordering::SeqCst) > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn active_locks(&self) -> u32 {
        self.held.load(Ordering::SeqCst)
    }
}

/// Guard for one acquisition of the scroll lock.
#[derive(Debug)]
pub struct ScrollLock {
    held: Arc<AtomicU32>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.held.fetch_sub(1, Ordering::SeqCst);
    }
}
