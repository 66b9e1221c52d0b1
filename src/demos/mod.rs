//! Runnable exercises
//!
//! Each demo is an independent unit: it builds its own containers, writes
//! human-readable lines to an [`Output`] and keeps no state between runs.

mod attempt;
mod lazy;
mod output;

pub use output::Output;

use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// Demo result
pub type DemoResult<T> = Result<T, DemoError>;

/// Demo errors
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Unknown demo '{0}' (known demos: {known})", known = known_names())]
    UnknownDemo(String),

    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),
}

/// A registered demo
#[derive(Clone, Copy)]
pub struct Demo {
    /// Name used on the command line
    pub name: &'static str,
    /// One-line description
    pub summary: &'static str,
    run: fn(&mut Output<'_>) -> io::Result<()>,
}

impl Demo {
    /// Run the demo against `out`
    pub fn run(
        &self,
        out: &mut Output<'_>,
    ) -> io::Result<()> {
        debug!("running demo '{}'", self.name);
        (self.run)(out)
    }
}

/// All demos, in display order
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "attempt",
        summary: "error-capturing container: failures become values, chains short-circuit",
        run: attempt::run,
    },
    Demo {
        name: "lazy",
        summary: "call-by-need container: computed on first force, cached afterwards",
        run: lazy::run,
    },
];

fn known_names() -> String {
    DEMOS
        .iter()
        .map(|demo| demo.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Look up a demo by name
pub fn find(name: &str) -> DemoResult<&'static Demo> {
    DEMOS
        .iter()
        .find(|demo| demo.name == name)
        .ok_or_else(|| DemoError::UnknownDemo(name.to_string()))
}

/// Run the named demos in order, separated by blank lines
///
/// Every name is resolved before anything is written.
pub fn run_named<S: AsRef<str>>(
    names: &[S],
    writer: &mut dyn Write,
    colors: bool,
) -> DemoResult<()> {
    let demos = names
        .iter()
        .map(|name| find(name.as_ref()))
        .collect::<DemoResult<Vec<_>>>()?;

    let mut out = Output::new(writer, colors);
    for (i, demo) in demos.iter().enumerate() {
        if i > 0 {
            out.blank()?;
        }
        demo.run(&mut out)?;
    }
    debug!("ran {} demo(s)", demos.len());
    Ok(())
}
