//! Attempt - an error-capturing container
//!
//! [`Attempt`] is a closed sum type with exactly two variants. Every
//! operation that runs user code catches whatever that code raises (an
//! `Err` return or a panic) and turns it into [`Attempt::Failure`], so
//! failures travel as plain data and are never re-raised.
//!
//! ```
//! use attempt_lazy::Attempt;
//!
//! let ten = Attempt::pure(5).and_then(|x| Attempt::new(|| Ok(x * 2)));
//! assert_eq!(ten, Attempt::Success(10));
//!
//! let boom: Attempt<i32> = Attempt::new(|| Err(anyhow::anyhow!("boom")));
//! assert_eq!(boom.and_then(|x| Attempt::pure(x + 1)).failure().unwrap().message(), "boom");
//! ```
//!
//! # Panic hook
//!
//! Panics are caught with `catch_unwind`, which runs after the global panic
//! hook. The default hook still prints `thread '…' panicked at …` (and a
//! backtrace when `RUST_BACKTRACE` is set) to stderr before the panic turns
//! into a `Failure`. Callers that capture panics on purpose and want quiet
//! stderr can install their own hook with [`std::panic::set_hook`].

mod fault;

pub use fault::Fault;

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::debug;

/// Outcome of a computation that may fail
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attempt<A> {
    /// The computation returned normally
    Success(A),
    /// The computation raised; the error is captured here
    Failure(Fault),
}

/// Run `body`, turning a panic into `Failure`
fn capture<A>(body: impl FnOnce() -> Attempt<A>) -> Attempt<A> {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(attempt) => attempt,
        Err(payload) => {
            let fault = Fault::from_panic(payload);
            debug!("attempt captured panic: {}", fault);
            Attempt::Failure(fault)
        }
    }
}

impl<A> Attempt<A> {
    /// Evaluate `computation` now and classify the outcome
    ///
    /// `Ok(v)` becomes `Success(v)`. An `Err` or a panic becomes
    /// `Failure`. Never raises; a panic still reaches the panic hook
    /// (see the module docs).
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<A>,
    {
        capture(|| match computation() {
            Ok(value) => Attempt::Success(value),
            Err(err) => {
                let fault = Fault::from(err);
                debug!("attempt captured error: {}", fault);
                Attempt::Failure(fault)
            }
        })
    }

    /// Evaluate a computation that can only fail by panicking
    ///
    /// The panic hook runs before the panic is captured.
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> A,
    {
        capture(|| Attempt::Success(computation()))
    }

    /// Wrap a plain value
    #[inline]
    pub fn pure(value: A) -> Self {
        Attempt::Success(value)
    }

    /// Wrap a fault
    #[inline]
    pub fn failure_of(fault: impl Into<Fault>) -> Self {
        Attempt::Failure(fault.into())
    }

    /// Chain a dependent computation
    ///
    /// On `Success(v)` runs `f(v)`, capturing a panic as `Failure`. On
    /// `Failure` the fault is passed through and `f` is never called.
    /// A panic in `f` goes through the panic hook first.
    pub fn and_then<B, F>(
        self,
        f: F,
    ) -> Attempt<B>
    where
        F: FnOnce(A) -> Attempt<B>,
    {
        match self {
            Attempt::Success(value) => capture(|| f(value)),
            Attempt::Failure(fault) => Attempt::Failure(fault),
        }
    }

    /// Transform the success value
    pub fn map<B, F>(
        self,
        f: F,
    ) -> Attempt<B>
    where
        F: FnOnce(A) -> B,
    {
        self.and_then(|value| Attempt::Success(f(value)))
    }

    /// Replace a failure with a value computed from its fault
    pub fn recover<F>(
        self,
        f: F,
    ) -> Self
    where
        F: FnOnce(&Fault) -> A,
    {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(fault) => capture(|| Attempt::Success(f(&fault))),
        }
    }

    /// Replace a failure with another attempt
    pub fn or_else<F>(
        self,
        f: F,
    ) -> Self
    where
        F: FnOnce(Fault) -> Attempt<A>,
    {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(fault) => capture(|| f(fault)),
        }
    }

    /// Turn a success that does not satisfy `predicate` into `fault`
    pub fn filter<P>(
        self,
        predicate: P,
        fault: impl Into<Fault>,
    ) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        let fault = fault.into();
        self.and_then(|value| {
            if predicate(&value) {
                Attempt::Success(value)
            } else {
                Attempt::Failure(fault)
            }
        })
    }

    /// Check for the success variant
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Attempt::Success(_))
    }

    /// Check for the failure variant
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Attempt::Failure(_))
    }

    /// The success value, if any
    pub fn success(self) -> Option<A> {
        match self {
            Attempt::Success(value) => Some(value),
            Attempt::Failure(_) => None,
        }
    }

    /// The captured fault, if any
    pub fn failure(self) -> Option<Fault> {
        match self {
            Attempt::Success(_) => None,
            Attempt::Failure(fault) => Some(fault),
        }
    }

    /// Borrow the success value
    pub fn as_ref(&self) -> Attempt<&A> {
        match self {
            Attempt::Success(value) => Attempt::Success(value),
            Attempt::Failure(fault) => Attempt::Failure(fault.clone()),
        }
    }

    /// The success value, or `default` on failure
    pub fn get_or_else(
        self,
        default: A,
    ) -> A {
        match self {
            Attempt::Success(value) => value,
            Attempt::Failure(_) => default,
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> Result<A, Fault> {
        self.into()
    }
}

impl<A> Attempt<Attempt<A>> {
    /// Remove one level of nesting
    pub fn flatten(self) -> Attempt<A> {
        self.and_then(|inner| inner)
    }
}

impl<A, E> From<Result<A, E>> for Attempt<A>
where
    E: Into<anyhow::Error>,
{
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Attempt::Success(value),
            Err(err) => Attempt::Failure(Fault::from(err.into())),
        }
    }
}

impl<A> From<Attempt<A>> for Result<A, Fault> {
    fn from(attempt: Attempt<A>) -> Self {
        match attempt {
            Attempt::Success(value) => Ok(value),
            Attempt::Failure(fault) => Err(fault),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Attempt<A> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Attempt::Success(value) => write!(f, "Success({})", value),
            Attempt::Failure(fault) => write!(f, "Failure({})", fault),
        }
    }
}

#[cfg(test)]
mod tests;
