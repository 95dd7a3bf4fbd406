//! Core module for globular_atlas
//!
//! This module provides the catalog data model, the fixed-field parser and
//! the consumers that turn parsed entries into output.
//!
//! # Architecture
//!
//! - `models`: Core data structures (CatalogEntry, Position, ParseReport, AtlasConfig)
//! - `error`: Error types using thiserror
//! - `parser`: The catalog line grammar and file loading
//! - `scene`: Point sets for 3D viewers (clusters, galactic disk, markers)
//! - `serialization`: Output format serializers

pub mod models;
pub mod error;
pub mod parser;
pub mod scene;
pub mod serialization;

// Re-export commonly used types
pub use models::{
    AtlasConfig, CatalogEntry, DiskConfig, LabelStyle, OutputFormat, ParseReport, Position,
    DEFAULT_CONFIG_FILE,
};
pub use error::{AtlasError, Result, ResultExt};
pub use parser::{load_catalog, parse_catalog, CatalogParser};
pub use scene::{galactic_disk, PointSet, Scene};
pub use serialization::{
    serialize_scene, serializer_for, CsvSerializer, JsonSerializer, Serializer, TableSerializer,
};
