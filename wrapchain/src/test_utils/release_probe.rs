//! ReleaseProbe: params that count how many times they were released.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A params payload that bumps a shared counter when dropped.
///
/// Clone the probe's counter handle with [`ReleaseProbe::counter`] before
/// handing probes to a chain, then check [`ReleaseProbe::released`] after
/// teardown.
#[derive(Debug)]
pub struct ReleaseProbe {
    id: usize,
    released: Arc<AtomicUsize>,
}

impl ReleaseProbe {
    /// Create a probe reporting into `released`.
    pub fn new(id: usize, released: Arc<AtomicUsize>) -> Self {
        Self { id, released }
    }

    /// A fresh counter for a batch of probes.
    pub fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    /// How many probes sharing `counter` have been dropped so far.
    pub fn released(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    /// The id this probe was created with.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Drop for ReleaseProbe {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}
