//! Error rendering using miette
//!
//! Errors from `primer_core` carry no source text, so a rendered report is a
//! code, the message, and a hint on how to avoid the error.

use crate::Error;
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use std::fmt;
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }
}

impl RenderConfig {
    fn theme(&self) -> GraphicalTheme {
        match (self.charset, self.color) {
            (CharSet::Unicode, true) => GraphicalTheme::unicode(),
            (CharSet::Unicode, false) => GraphicalTheme::unicode_nocolor(),
            (CharSet::Ascii, true) => GraphicalTheme::ascii(),
            (CharSet::Ascii, false) => GraphicalTheme::none(),
        }
    }
}

/// Adapter giving a core [`Error`] a miette [`Diagnostic`] face.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Report<'a>(pub &'a Error);

impl Diagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.0.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(help(self.0)))
    }
}

fn help(error: &Error) -> &'static str {
    match error {
        Error::DivisionByZero => "check the divisor before dividing",
        Error::IntegerOverflow => "the quotient of i64::MIN and -1 does not fit in an i64",
        Error::NilMapWrite => "make the map with `MapHandle::make()` before inserting",
        Error::IndexOutOfRange { .. } => "valid indices run from 0 up to, not including, the length",
        Error::SliceOutOfRange { .. } => "slice bounds must satisfy start <= end <= capacity",
    }
}

/// Render an error to stderr using default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use primer::{RenderConfig, division, render_error_to};
///
/// let err = division(10, 0).unwrap_err();
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("division by zero"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let handler = GraphicalReportHandler::new_themed(config.theme());
    let mut out = String::new();
    handler
        .render_report(&mut out, &Report(error))
        .map_err(std::io::Error::other)?;
    writer.write_all(out.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(error: Error, charset: CharSet) -> String {
        let mut buf = Vec::new();
        let config = RenderConfig {
            color: false,
            charset,
        };
        render_error_to(&error, &mut buf, &config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn division_by_zero_report() {
        let out = render(Error::DivisionByZero, CharSet::Unicode);
        assert!(out.contains("primer::division_by_zero"), "{out}");
        assert!(out.contains("division by zero"), "{out}");
        assert!(out.contains("check the divisor"), "{out}");
    }

    #[test]
    fn ascii_report_has_no_box_drawing() {
        let out = render(
            Error::IndexOutOfRange { index: 7, len: 5 },
            CharSet::Ascii,
        );
        assert!(out.contains("index out of range [7] with length 5"), "{out}");
        assert!(out.is_ascii(), "{out}");
    }

    #[test]
    fn uncolored_report_has_no_escapes() {
        let out = render(Error::NilMapWrite, CharSet::Unicode);
        assert!(!out.contains('\u{1b}'), "{out}");
    }
}
