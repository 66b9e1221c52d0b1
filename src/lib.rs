//! Attempt and Lazy
//!
//! Two small monadic containers and the exercises that go with them:
//!
//! - [`Attempt`] captures whatever a computation raises as a value and
//!   short-circuits chains after the first failure.
//! - [`Lazy`] defers a computation until first use and evaluates it at most
//!   once (call-by-need).
//!
//! # Example
//!
//! ```
//! use attempt_lazy::{Attempt, Lazy};
//!
//! let parsed = Attempt::new(|| Ok("12".parse::<i32>()?));
//! assert_eq!(parsed.map(|n| n + 1), Attempt::Success(13));
//!
//! let deferred = Lazy::new(|| 6 * 7);
//! assert!(!deferred.is_evaluated());
//! assert_eq!(*deferred.force(), 42);
//! ```

#![doc(html_root_url = "https://docs.rs/attempt-lazy")]
#![warn(rust_2018_idioms)]

pub mod attempt;
pub mod demos;
pub mod lazy;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use attempt::{Attempt, Fault};
pub use lazy::Lazy;
pub use thiserror::Error;

use std::io::Write;
use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name
pub const NAME: &str = "Attempt & Lazy";

/// Run a single demo, writing to `writer`
///
/// # Example
///
/// ```
/// use attempt_lazy::{run_demo, Result};
///
/// fn main() -> Result<()> {
///     let mut out = Vec::new();
///     run_demo("attempt", &mut out, false)?;
///     assert!(String::from_utf8(out)?.contains("Success(10)"));
///     Ok(())
/// }
/// ```
pub fn run_demo(
    name: &str,
    writer: &mut dyn Write,
    colors: bool,
) -> Result<()> {
    debug!("run_demo called for '{}'", name);
    demos::run_named(&[name][..], writer, colors)
        .with_context(|| format!("Failed to run demo: {}", name))
}

/// Run every registered demo in order
pub fn run_all(
    writer: &mut dyn Write,
    colors: bool,
) -> Result<()> {
    let names: Vec<&str> = demos::DEMOS.iter().map(|demo| demo.name).collect();
    demos::run_named(names.as_slice(), writer, colors).context("Failed to run demos")
}
