//! Console reporter for the demonstration.
//!
//! Presentation only: banners, rules and plain lines written to any
//! [`Write`] sink. The employee model never depends on this module.

use std::fmt::Display;
use std::io::Write;

use crossterm::style::{Color, Stylize};

use crate::config::ReportConfig;
use crate::error::ModelResult;

/// Centres `text` within `width` columns using left padding only.
///
/// Text at least as wide as `width` is returned unchanged.
///
/// # Examples
///
/// ```
/// use employee_model::demo::center_text;
///
/// assert_eq!(center_text("ab", 6), "  ab");
/// assert_eq!(center_text("abcdef", 4), "abcdef");
/// ```
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = (width - len) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// Writes demonstration output with optional coloured banners.
pub struct Reporter<W: Write> {
    out: W,
    width: usize,
    color: bool,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `out` with the given settings.
    pub fn new(out: W, config: &ReportConfig) -> Self {
        Self {
            out,
            width: config.width,
            color: config.color,
        }
    }

    /// Writes one line of demonstration text.
    pub fn line(&mut self, text: impl Display) -> ModelResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Writes the upper-cased, centred title between two `=` rules.
    pub fn header(&mut self, title: &str) -> ModelResult<()> {
        let rule = "=".repeat(self.width);
        let title = center_text(&title.to_uppercase(), self.width);
        self.styled(&rule, Color::Cyan)?;
        self.styled(&title, Color::Cyan)?;
        self.styled(&rule, Color::Cyan)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Writes a blank line, the centred message, and a closing `=` rule.
    pub fn footer(&mut self, message: &str) -> ModelResult<()> {
        writeln!(self.out)?;
        let message = center_text(message, self.width);
        self.styled(&message, Color::Green)?;
        self.styled(&"=".repeat(self.width), Color::Green)?;
        Ok(())
    }

    /// Writes a `-` rule surrounded by blank lines.
    pub fn dashed_line(&mut self) -> ModelResult<()> {
        writeln!(self.out)?;
        self.styled(&"-".repeat(self.width), Color::Yellow)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> ModelResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn styled(&mut self, text: &str, color: Color) -> ModelResult<()> {
        if self.color {
            writeln!(self.out, "{}", text.with(color))?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }
}
