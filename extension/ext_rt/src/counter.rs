//! Live-object counters.
//!
//! A [`LiveCounter`] is a shared count of objects that are currently alive.
//! Every [`CounterGuard`] adds one for as long as it exists, so the count
//! returns to its previous value once all guards are dropped, on any thread.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared handle to a live-object count.
#[derive(Clone, Default)]
pub struct LiveCounter(Arc<AtomicUsize>);

impl LiveCounter {
    /// A fresh counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of live guards.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }

    /// Count one more live object until the guard is dropped.
    pub fn guard(&self) -> CounterGuard {
        self.0.fetch_add(1, Ordering::AcqRel);
        CounterGuard {
            counter: self.clone(),
        }
    }

    /// Whether both handles refer to the same count.
    pub fn ptr_eq(&self, other: &LiveCounter) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LiveCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LiveCounter").field(&self.get()).finish()
    }
}

/// Holds one unit of a [`LiveCounter`].
#[derive(Debug)]
pub struct CounterGuard {
    counter: LiveCounter,
}

impl CounterGuard {
    pub fn counter(&self) -> &LiveCounter {
        &self.counter
    }
}

impl Drop for CounterGuard {
    fn drop(&mut self) {
        self.counter.0.fetch_sub(1, Ordering::AcqRel);
    }
}
