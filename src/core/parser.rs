//! Fixed-field catalog parser
//!
//! Each line of a catalog is matched independently against one grammar:
//!
//! ```text
//! <id> <name...> HH MM SS[.s] [+-]DD MM SS[.s] f f f f  X Y Z [anything]
//! ```
//!
//! `name` is taken non-greedily, so it is the shortest run of word tokens
//! after which the right ascension, declination, four scalar columns and
//! the three coordinates all line up. Lines that do not fit are skipped;
//! they are counted in [`ParseReport`] but never reported as errors.
//!
//! # Example
//!
//! ```rust
//! use globular_atlas::core::parser::parse_catalog;
//!
//! let text = "NGC_104 47_Tuc 00 24 05.67 -72 04 53.2 5.03 -1.34 -0.73 -0.23 2.30 -6.98 -2.50";
//! let entries = parse_catalog(text);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].identifier, "NGC_104");
//! assert_eq!(entries[0].position.y, -6.98);
//! ```

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::error::{AtlasError, Result};
use super::models::{CatalogEntry, ParseReport, Position};

lazy_static! {
    static ref ENTRY_PATTERN: Regex = Regex::new(concat!(
        r"^\s*(?P<id>\w+)\s+(?P<name>[\w\s]+?)",
        // right ascension
        r"\s+\d{2}\s+\d{2}\s+\d{2}\.?\d*",
        // declination
        r"\s+[-+]?\d{2}\s+\d{2}\s+\d{2}\.?\d*",
        // four catalog scalars
        r"\s+[-+]?\d+\.\d+\s+[-+]?\d+\.\d+\s+[-+]?\d+\.\d+\s+[-+]?\d+\.\d+",
        r"\s+(?P<x>[-+]?\d+\.\d+)\s+(?P<y>[-+]?\d+\.\d+)\s+(?P<z>[-+]?\d+\.\d+)",
    ))
    .unwrap();
}

/// Parser for fixed-format cluster catalogs
///
/// Stateless; the compiled grammar is shared process-wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogParser;

impl CatalogParser {
    pub fn new() -> Self {
        Self
    }

    /// The grammar as a regex source string
    pub fn pattern(&self) -> &'static str {
        ENTRY_PATTERN.as_str()
    }

    /// Parse a single line, `None` when it does not match the grammar
    pub fn parse_line(&self, line: &str) -> Option<CatalogEntry> {
        let caps = ENTRY_PATTERN.captures(line)?;
        let position = Self::position(&caps)?;
        Some(CatalogEntry {
            identifier: caps["id"].to_string(),
            name: caps["name"].trim().to_string(),
            position,
        })
    }

    /// Parse catalog text into entries, in line order
    pub fn parse(&self, text: &str) -> Vec<CatalogEntry> {
        self.parse_with_report(text).entries
    }

    /// Parse catalog text, keeping count of what was skipped
    pub fn parse_with_report(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for (i, line) in text.lines().enumerate() {
            report.lines_read += 1;

            if line.trim().is_empty() {
                report.blank_lines += 1;
                continue;
            }

            match self.parse_line(line) {
                Some(entry) => report.entries.push(entry),
                None => {
                    report.skipped_lines += 1;
                    tracing::trace!(line = i + 1, "skipping non-matching catalog line");
                }
            }
        }

        tracing::debug!(
            entries = report.entries.len(),
            lines = report.lines_read,
            skipped = report.skipped_lines,
            blank = report.blank_lines,
            "parsed catalog text"
        );

        report
    }

    /// Read a catalog file and parse it
    ///
    /// A missing or unreadable file is the only failure. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected.
    pub fn parse_file(&self, path: &Path) -> Result<ParseReport> {
        let bytes = fs::read(path).map_err(|e| AtlasError::from_io(e, path))?;
        let text = String::from_utf8_lossy(&bytes);
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read catalog file");
        Ok(self.parse_with_report(&text))
    }

    fn position(caps: &Captures<'_>) -> Option<Position> {
        let coord = |name: &str| -> Option<f64> {
            let raw = &caps[name];
            match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => {
                    tracing::warn!(field = name, value = raw, "rejecting catalog coordinate");
                    None
                }
            }
        };
        Some(Position::new(coord("x")?, coord("y")?, coord("z")?))
    }
}

/// Parse catalog text with the default parser
pub fn parse_catalog(text: &str) -> Vec<CatalogEntry> {
    CatalogParser::new().parse(text)
}

/// Read and parse a catalog file with the default parser
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>> {
    CatalogParser::new()
        .parse_file(path.as_ref())
        .map(ParseReport::into_entries)
}
