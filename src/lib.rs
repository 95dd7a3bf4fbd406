//! globular_atlas - Fixed-format cluster catalog parser
//!
//! This library reads catalogs such as the Harris globular-cluster catalogue
//! and turns every well-formed line into a [`CatalogEntry`] with an
//! identifier, a name and a heliocentric `(x, y, z)` position. It is designed
//! to be consumed by:
//! - The CLI binary (src/bin/atlas.rs)
//! - Any 3D viewer that wants plain point data ([`Scene`])
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **lib.rs** (this file): Pure logic, no CLI concerns
//! - **bin/atlas.rs**: Thin wrapper that calls the library
//!
//! # Example
//!
//! ```
//! use globular_atlas::parse_catalog;
//!
//! let text = "\
//! ID Name RA Dec ... X Y Z
//! NGC_104 47_Tuc 00 24 05.67 -72 04 53.2 5.03 -1.34 -0.73 -0.23 2.30 -6.98 -2.50
//! ";
//! let entries = parse_catalog(text);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].name, "47_Tuc");
//! ```

pub mod core;

pub use crate::core::{
    load_catalog, parse_catalog, AtlasConfig, AtlasError, CatalogEntry, CatalogParser,
    LabelStyle, OutputFormat, ParseReport, Position, Result, Scene,
};

/// Crate version, as reported by the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the globular_atlas library
pub fn version() -> &'static str {
    VERSION
}
