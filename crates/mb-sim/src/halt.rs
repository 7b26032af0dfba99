//! Cooperative halting of the turn loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked by [`Sim::run`][crate::Sim::run] before every turn.
///
/// Clones share the flag, so a UI thread or an observer can hold one and
/// stop the loop.  A turn already in progress always finishes; the state is
/// never left half-updated.
#[derive(Debug, Clone, Default)]
pub struct HaltHandle(Arc<AtomicBool>);

impl HaltHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop before its next turn.
    pub fn halt(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Clear a previous [`halt`](Self::halt) so `run` can continue.
    pub fn resume(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_halted(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
