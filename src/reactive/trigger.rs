//! RenderTrigger: the observable re-render cell.
//!
//! A single writer bumps an epoch counter; the rendering host holds a
//! [`watch::Receiver`] and re-renders whenever the epoch changes. Only the
//! latest epoch is kept, so a slow host sees one change however many bumps
//! happened in between.

use tokio::sync::watch;

/// Single-writer notification cell asking the host to re-render.
#[derive(Debug)]
pub struct RenderTrigger {
    tx: watch::Sender<u64>,
}

impl RenderTrigger {
    /// Create a trigger at epoch 0.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Bump the epoch and wake every subscriber.
    pub fn notify(&self) {
        self.tx.send_modify(|epoch| *epoch += 1);
    }

    /// Number of notifications so far.
    pub fn epoch(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Receiver the host awaits (`changed().await`) between renders.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }
}

impl Default for RenderTrigger {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
