//! Text sink shared by the demos

use owo_colors::OwoColorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Where a demo writes its lines
pub struct Output<'w> {
    writer: &'w mut dyn Write,
    colors: bool,
}

impl<'w> Output<'w> {
    /// Wrap a writer
    pub fn new(
        writer: &'w mut dyn Write,
        colors: bool,
    ) -> Self {
        Self { writer, colors }
    }

    /// Section heading
    pub fn heading(
        &mut self,
        title: &str,
    ) -> io::Result<()> {
        if self.colors {
            writeln!(self.writer, "=== {} ===", title.bold().cyan())
        } else {
            writeln!(self.writer, "=== {} ===", title)
        }
    }

    /// `label: value`, with the label dimmed when colors are on
    pub fn show(
        &mut self,
        label: &str,
        value: impl Display,
    ) -> io::Result<()> {
        if self.colors {
            writeln!(self.writer, "{}: {}", label.dimmed(), value)
        } else {
            writeln!(self.writer, "{}: {}", label, value)
        }
    }

    /// Plain line
    pub fn line(
        &mut self,
        text: impl Display,
    ) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Empty line
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }
}
