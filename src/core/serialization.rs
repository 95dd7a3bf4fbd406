//! Serialization module for globular_atlas
//!
//! This module provides output format serializers for catalog entries:
//! - Table (default, aligned columns for terminals)
//! - JSON
//! - CSV
//!
//! The scene format is plain `serde_json` over [`Scene`](super::scene::Scene)
//! and lives in [`serialize_scene`].

use serde::Serialize;

use super::error::{AtlasError, Result};
use super::models::{CatalogEntry, LabelStyle, OutputFormat};
use super::scene::Scene;

/// Trait for output format serializers
pub trait Serializer: Send + Sync {
    /// Serialize the full entry list
    fn serialize_entries(&self, entries: &[CatalogEntry], style: LabelStyle) -> Result<String>;
}

/// Get the serializer for an entry format
///
/// `Scene` output is not a per-entry format; asking for it here gives the
/// JSON serializer, callers that want a scene use [`serialize_scene`].
pub fn serializer_for(format: OutputFormat) -> Box<dyn Serializer> {
    match format {
        OutputFormat::Table => Box::new(TableSerializer::new()),
        OutputFormat::Json | OutputFormat::Scene => Box::new(JsonSerializer::new()),
        OutputFormat::Csv => Box::new(CsvSerializer::new()),
    }
}

/// Pretty JSON for a scene
pub fn serialize_scene(scene: &Scene) -> Result<String> {
    let mut output = serde_json::to_string_pretty(scene)?;
    output.push('\n');
    Ok(output)
}

#[derive(Serialize)]
struct LabelledEntry<'a> {
    identifier: &'a str,
    name: &'a str,
    label: String,
    x: f64,
    y: f64,
    z: f64,
}

impl<'a> LabelledEntry<'a> {
    fn new(entry: &'a CatalogEntry, style: LabelStyle) -> Self {
        Self {
            identifier: &entry.identifier,
            name: &entry.name,
            label: entry.label(style),
            x: entry.position.x,
            y: entry.position.y,
            z: entry.position.z,
        }
    }
}

/// JSON array serializer
#[derive(Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for JsonSerializer {
    fn serialize_entries(&self, entries: &[CatalogEntry], style: LabelStyle) -> Result<String> {
        let rows: Vec<LabelledEntry<'_>> =
            entries.iter().map(|e| LabelledEntry::new(e, style)).collect();
        let mut output = serde_json::to_string_pretty(&rows)?;
        output.push('\n');
        Ok(output)
    }
}

/// CSV serializer with an `identifier,name,label,x,y,z` header
#[derive(Default)]
pub struct CsvSerializer;

impl CsvSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Quote a field only when it needs it
    fn escape_field(field: &str) -> String {
        if field.contains(&[',', '"', '\n', '\r'][..]) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

impl Serializer for CsvSerializer {
    fn serialize_entries(&self, entries: &[CatalogEntry], style: LabelStyle) -> Result<String> {
        let mut output = String::from("identifier,name,label,x,y,z\n");
        for entry in entries {
            if !entry.position.is_finite() {
                return Err(AtlasError::csv_error(format!(
                    "non-finite position for {}",
                    entry.identifier
                )));
            }
            output.push_str(&format!(
                "{},{},{},{},{},{}\n",
                Self::escape_field(&entry.identifier),
                Self::escape_field(&entry.name),
                Self::escape_field(&entry.label(style)),
                entry.position.x,
                entry.position.y,
                entry.position.z
            ));
        }
        Ok(output)
    }
}

/// Aligned text table for terminals
#[derive(Default)]
pub struct TableSerializer;

impl TableSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for TableSerializer {
    fn serialize_entries(&self, entries: &[CatalogEntry], style: LabelStyle) -> Result<String> {
        let labels: Vec<String> = entries.iter().map(|e| e.label(style)).collect();
        let id_width = entries
            .iter()
            .map(|e| e.identifier.chars().count())
            .chain(std::iter::once("ID".len()))
            .max()
            .unwrap_or(2);
        let label_width = labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once("NAME".len()))
            .max()
            .unwrap_or(4);

        let mut output = format!(
            "{:<iw$}  {:<lw$}  {:>9}  {:>9}  {:>9}\n",
            "ID",
            "NAME",
            "X",
            "Y",
            "Z",
            iw = id_width,
            lw = label_width
        );
        for (entry, label) in entries.iter().zip(&labels) {
            output.push_str(&format!(
                "{:<iw$}  {:<lw$}  {:>9.2}  {:>9.2}  {:>9.2}\n",
                entry.identifier,
                label,
                entry.position.x,
                entry.position.y,
                entry.position.z,
                iw = id_width,
                lw = label_width
            ));
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AtlasConfig, Position};

    fn sample_entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("NGC_104", "47_Tuc", Position::new(2.30, -6.98, -2.50)),
            CatalogEntry::new("NGC_5139", "omega Cen", Position::new(3.10, -3.90, 1.30)),
        ]
    }

    #[test]
    fn test_json_entries() {
        let out = JsonSerializer::new()
            .serialize_entries(&sample_entries(), LabelStyle::IdentifierAndName)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["identifier"], "NGC_104");
        assert_eq!(rows[0]["label"], "NGC_104 47_Tuc");
        assert_eq!(rows[1]["z"], 1.30);
    }

    #[test]
    fn test_json_empty() {
        let out = JsonSerializer::new().serialize_entries(&[], LabelStyle::Name).unwrap();
        assert_eq!(out.trim(), "[]");
    }

    #[test]
    fn test_csv_entries() {
        let out = CsvSerializer::new()
            .serialize_entries(&sample_entries(), LabelStyle::Name)
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "identifier,name,label,x,y,z");
        assert_eq!(lines[1], "NGC_104,47_Tuc,47_Tuc,2.3,-6.98,-2.5");
        assert_eq!(lines[2], "NGC_5139,omega Cen,omega Cen,3.1,-3.9,1.3");
    }

    #[test]
    fn test_csv_quotes_when_needed() {
        assert_eq!(CsvSerializer::escape_field("plain"), "plain");
        assert_eq!(CsvSerializer::escape_field("a,b"), "\"a,b\"");
        assert_eq!(CsvSerializer::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_rejects_non_finite() {
        let entries = vec![CatalogEntry::new("X", "bad", Position::new(f64::NAN, 0.0, 0.0))];
        let err = CsvSerializer::new().serialize_entries(&entries, LabelStyle::Name).unwrap_err();
        assert!(matches!(err, AtlasError::Csv { .. }));
    }

    #[test]
    fn test_table_alignment() {
        let out = TableSerializer::new()
            .serialize_entries(&sample_entries(), LabelStyle::Name)
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID        NAME"));
        assert!(lines[1].starts_with("NGC_104   47_Tuc"));
        assert!(lines[1].ends_with("2.30      -6.98      -2.50"));
        assert!(lines[2].contains("omega Cen"));
    }

    #[test]
    fn test_serializer_for() {
        let entries = sample_entries();
        let table = serializer_for(OutputFormat::Table)
            .serialize_entries(&entries, LabelStyle::Name)
            .unwrap();
        assert!(table.starts_with("ID"));
        let csv = serializer_for(OutputFormat::Csv)
            .serialize_entries(&entries, LabelStyle::Name)
            .unwrap();
        assert!(csv.starts_with("identifier,"));
        let json = serializer_for(OutputFormat::Json)
            .serialize_entries(&entries, LabelStyle::Name)
            .unwrap();
        assert!(json.starts_with('['));
    }

    #[test]
    fn test_serialize_scene() {
        let mut config = AtlasConfig::default();
        config.disk.points = 5;
        config.disk.seed = Some(3);
        let scene = Scene::build(&sample_entries(), &config).unwrap();
        let out = serialize_scene(&scene).unwrap();
        let parsed: Scene = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.traces.len(), 4);
        assert_eq!(parsed.traces[1].len(), 5);
    }
}
