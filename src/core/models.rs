//! Core data models for globular_atlas
//!
//! These are the plain values the parser produces and every output surface
//! consumes: catalog entries, positions, parse diagnostics and configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{AtlasError, Result, ResultExt};

/// Conventional config file name, looked up next to the catalog
pub const DEFAULT_CONFIG_FILE: &str = ".atlas_config.json";

/// A position in the catalog's heliocentric frame (kpc in practice)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin of the frame (the Sun)
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Euclidean distance from the origin
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// How an entry is labelled for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelStyle {
    /// The cluster name alone, e.g. `47 Tuc`
    #[default]
    Name,
    /// Identifier followed by name, e.g. `NGC104 47 Tuc`
    IdentifierAndName,
}

/// One parsed catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog's short code for the object (non-empty, no whitespace)
    pub identifier: String,
    /// Human-readable name, outer-trimmed; inner spacing kept as written
    pub name: String,
    pub position: Position,
}

impl CatalogEntry {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>, position: Position) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            position,
        }
    }

    /// Display label for this entry
    ///
    /// Catalogs leave the name column blank for many objects; those are
    /// labelled by identifier alone.
    pub fn label(&self, style: LabelStyle) -> String {
        if self.name.is_empty() {
            return self.identifier.clone();
        }
        match style {
            LabelStyle::Name => self.name.clone(),
            LabelStyle::IdentifierAndName => format!("{} {}", self.identifier, self.name),
        }
    }
}

/// Result of one parse pass with line accounting
///
/// `lines_read == entries.len() + blank_lines + skipped_lines` always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    pub entries: Vec<CatalogEntry>,
    /// Total lines seen
    pub lines_read: usize,
    /// Whitespace-only lines
    pub blank_lines: usize,
    /// Non-blank lines that did not yield an entry
    pub skipped_lines: usize,
}

impl ParseReport {
    /// Number of lines that produced an entry
    pub fn matched(&self) -> usize {
        self.entries.len()
    }

    /// One-line summary for diagnostics
    pub fn summary(&self) -> String {
        format!(
            "{} entries from {} lines ({} skipped, {} blank)",
            self.matched(),
            self.lines_read,
            self.skipped_lines,
            self.blank_lines
        )
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }
}

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Aligned text table (default)
    #[default]
    Table,
    /// JSON array of entries
    Json,
    /// Comma-separated values
    Csv,
    /// JSON scene: cluster points, galactic disk and reference markers
    Scene,
}

impl OutputFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Scene => "json",
        }
    }

    /// Whether `path` carries this format's extension (case-insensitive)
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(self.extension()))
            .unwrap_or(false)
    }
}

/// Synthetic galactic disk parameters
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DiskConfig {
    /// Number of background points
    #[serde(default = "default_disk_points")]
    pub points: usize,
    /// Standard deviation of x and y
    #[serde(default = "default_radial_sigma")]
    pub radial_sigma_kpc: f64,
    /// Standard deviation of z
    #[serde(default = "default_vertical_sigma")]
    pub vertical_sigma_kpc: f64,
    /// Fixed RNG seed for reproducible scenes
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_disk_points() -> usize {
    2000
}

fn default_radial_sigma() -> f64 {
    13.4
}

fn default_vertical_sigma() -> f64 {
    1.0
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            points: default_disk_points(),
            radial_sigma_kpc: default_radial_sigma(),
            vertical_sigma_kpc: default_vertical_sigma(),
            seed: None,
        }
    }
}

/// Configuration loaded from .atlas_config.json
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub label_style: LabelStyle,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub disk: DiskConfig,
    /// Sun to Galactic Center distance along +x
    #[serde(default = "default_galactic_center")]
    pub galactic_center_kpc: f64,
}

fn default_galactic_center() -> f64 {
    8.0
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            label_style: LabelStyle::default(),
            format: OutputFormat::default(),
            disk: DiskConfig::default(),
            galactic_center_kpc: default_galactic_center(),
        }
    }
}

impl AtlasConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AtlasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| AtlasError::from_io(e, path))?;
        Self::from_json(&json).context(format!("reading {}", path.display()))
    }

    /// Reject values no scene could be built from
    pub fn validate(&self) -> Result<()> {
        let sigmas = [
            ("disk.radial_sigma_kpc", self.disk.radial_sigma_kpc),
            ("disk.vertical_sigma_kpc", self.disk.vertical_sigma_kpc),
        ];
        for (field, value) in sigmas {
            if !value.is_finite() || value < 0.0 {
                return Err(AtlasError::invalid_config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    field, value
                )));
            }
        }
        if !self.galactic_center_kpc.is_finite() {
            return Err(AtlasError::invalid_config(format!(
                "galactic_center_kpc must be finite (got {})",
                self.galactic_center_kpc
            )));
        }
        Ok(())
    }
}
