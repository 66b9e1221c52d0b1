//! Lazy - a call-by-need container
//!
//! A [`Lazy`] holds a computation that has not run yet. The first
//! [`force`](Lazy::force) runs it and stores the result; every later access
//! reads the stored value. Handles are cheap to clone and clones share the
//! same cache, so the computation runs at most once no matter how many
//! handles or chains refer to it.
//!
//! The cache is a one-time-initialization cell guarded for concurrent first
//! access, so the at-most-once guarantee also holds across threads.
//!
//! ```
//! use attempt_lazy::Lazy;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&runs);
//! let answer = Lazy::new(move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     42
//! });
//!
//! assert_eq!(runs.load(Ordering::SeqCst), 0);
//! assert_eq!(*answer.force(), 42);
//! assert_eq!(*answer.force(), 42);
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! ```

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Pending computation
type Thunk<A> = Box<dyn FnOnce() -> A + Send>;

/// Shared state behind every handle
struct Slot<A> {
    /// Filled once by the first successful force
    value: OnceCell<A>,
    /// Taken by the first force; empty afterwards
    thunk: Mutex<Option<Thunk<A>>>,
}

/// A deferred, memoized value
pub struct Lazy<A> {
    slot: Arc<Slot<A>>,
}

impl<A> Lazy<A>
where
    A: Send + Sync + 'static,
{
    /// Store `computation` without running it
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self {
            slot: Arc::new(Slot {
                value: OnceCell::new(),
                thunk: Mutex::new(Some(Box::new(computation))),
            }),
        }
    }

    /// A container that is already evaluated
    pub fn evaluated(value: A) -> Self {
        Self {
            slot: Arc::new(Slot {
                value: OnceCell::with_value(value),
                thunk: Mutex::new(None),
            }),
        }
    }

    /// Run the computation on first call and return the cached value
    ///
    /// Concurrent first calls block until one of them has finished.
    /// A panic inside the computation propagates to the caller.
    ///
    /// # Panics
    ///
    /// Panics if the computation panicked on an earlier force. A computation
    /// that forces its own container deadlocks.
    pub fn force(&self) -> &A {
        self.slot.value.get_or_init(|| {
            let thunk = self.slot.thunk.lock().take();
            match thunk {
                Some(computation) => {
                    trace!("forcing deferred value");
                    computation()
                }
                None => panic!("lazy value poisoned: its computation panicked while forcing"),
            }
        })
    }

    /// The cached value, without forcing
    pub fn get(&self) -> Option<&A> {
        self.slot.value.get()
    }

    /// Whether the computation has already run
    pub fn is_evaluated(&self) -> bool {
        self.slot.value.get().is_some()
    }

    /// Hand this container's computation to `f` unforced
    ///
    /// `f` receives a handle sharing this container's cache and decides
    /// whether and when to force it. `f` itself runs immediately.
    pub fn flat_map<B, F>(
        &self,
        f: F,
    ) -> Lazy<B>
    where
        B: Send + Sync + 'static,
        F: FnOnce(Lazy<A>) -> Lazy<B>,
    {
        f(self.clone())
    }

    /// Chain a dependent deferred computation
    ///
    /// Nothing runs until the returned container is forced; then this
    /// container is forced, `f` is applied and its result forced.
    pub fn and_then<B, F>(
        &self,
        f: F,
    ) -> Lazy<B>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(&A) -> Lazy<B> + Send + 'static,
    {
        let source = self.clone();
        Lazy::new(move || f(source.force()).force().clone())
    }

    /// Deferred projection of the value
    pub fn map<B, F>(
        &self,
        f: F,
    ) -> Lazy<B>
    where
        B: Send + Sync + 'static,
        F: FnOnce(&A) -> B + Send + 'static,
    {
        let source = self.clone();
        Lazy::new(move || f(source.force()))
    }
}

impl<A> Clone for Lazy<A> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Lazy<A> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.slot.value.get() {
            Some(value) => f.debug_tuple("Lazy").field(value).finish(),
            None => f.write_str("Lazy(<pending>)"),
        }
    }
}
