use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// External request to stop the overlay loop early.
///
/// Polled once at the start of every iteration.
pub trait QuitSignal {
    /// `true` once a stop has been requested.
    fn quit_requested(&self) -> bool;
}

/// Signal that never fires; the loop always runs to its frame cap.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverQuit;

impl QuitSignal for NeverQuit {
    fn quit_requested(&self) -> bool {
        false
    }
}

/// Shared flag that any thread can raise, e.g. a Ctrl-C handler.
#[derive(Clone, Debug, Default)]
pub struct QuitFlag(Arc<AtomicBool>);

impl QuitFlag {
    /// A lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Idempotent.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl QuitSignal for QuitFlag {
    fn quit_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
