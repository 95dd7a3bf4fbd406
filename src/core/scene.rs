//! Scene data for 3D viewers
//!
//! A [`Scene`] is the plain data a scatter-plot surface needs: named point
//! sets with parallel `x`/`y`/`z`/`labels` vectors. It carries no styling
//! and no camera; whoever draws it decides how it looks.
//!
//! Besides the catalog entries a scene holds a synthetic galactic disk
//! (Gaussian cloud around the origin) and two single-point markers for the
//! Sun and the Galactic Center.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use super::error::{AtlasError, Result};
use super::models::{AtlasConfig, CatalogEntry, DiskConfig, LabelStyle, Position};

pub const CLUSTERS_TRACE: &str = "Globular Clusters";
pub const DISK_TRACE: &str = "Galactic Disk";
pub const SOLAR_SYSTEM_TRACE: &str = "Solar System";
pub const GALACTIC_CENTER_TRACE: &str = "Galactic Center";

/// A named set of points as parallel coordinate vectors
///
/// `labels` is either empty (unlabelled background points) or as long as
/// the coordinate vectors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointSet {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub labels: Vec<String>,
}

impl PointSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Project entries into parallel vectors, one label per entry
    pub fn from_entries(name: impl Into<String>, entries: &[CatalogEntry], style: LabelStyle) -> Self {
        let mut set = Self::new(name);
        for entry in entries {
            set.push(entry.position, Some(entry.label(style)));
        }
        set
    }

    /// A single labelled point, used for reference markers
    pub fn marker(name: &str, position: Position) -> Self {
        let mut set = Self::new(name);
        set.push(position, Some(name.to_string()));
        set
    }

    pub fn push(&mut self, position: Position, label: Option<String>) {
        self.x.push(position.x);
        self.y.push(position.y);
        self.z.push(position.z);
        if let Some(label) = label {
            self.labels.push(label);
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate the points back as positions
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| Position::new(x, y, z))
    }
}

/// Sample a Gaussian disk centred on the origin
///
/// x and y share `radial_sigma_kpc`, z uses `vertical_sigma_kpc`. With a
/// seed the output is reproducible.
pub fn galactic_disk(config: &DiskConfig) -> Result<PointSet> {
    let radial = Normal::new(0.0, config.radial_sigma_kpc)
        .map_err(|e| AtlasError::invalid_config(format!("disk.radial_sigma_kpc: {}", e)))?;
    let vertical = Normal::new(0.0, config.vertical_sigma_kpc)
        .map_err(|e| AtlasError::invalid_config(format!("disk.vertical_sigma_kpc: {}", e)))?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut disk = PointSet::new(DISK_TRACE);
    for _ in 0..config.points {
        let position = Position::new(
            radial.sample(&mut rng),
            radial.sample(&mut rng),
            vertical.sample(&mut rng),
        );
        disk.push(position, None);
    }
    Ok(disk)
}

/// All point sets a viewer draws for one catalog
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub traces: Vec<PointSet>,
}

impl Scene {
    /// Build the full scene: clusters, disk, Sun and Galactic Center
    pub fn build(entries: &[CatalogEntry], config: &AtlasConfig) -> Result<Self> {
        config.validate()?;

        let clusters = PointSet::from_entries(CLUSTERS_TRACE, entries, config.label_style);
        let disk = galactic_disk(&config.disk)?;
        let sun = PointSet::marker(SOLAR_SYSTEM_TRACE, Position::origin());
        let center = PointSet::marker(
            GALACTIC_CENTER_TRACE,
            Position::new(config.galactic_center_kpc, 0.0, 0.0),
        );

        tracing::debug!(
            clusters = clusters.len(),
            disk = disk.len(),
            "built scene"
        );

        Ok(Self {
            traces: vec![clusters, disk, sun, center],
        })
    }

    /// Look up a trace by name
    pub fn trace(&self, name: &str) -> Option<&PointSet> {
        self.traces.iter().find(|t| t.name == name)
    }

    /// Total points over all traces
    pub fn point_count(&self) -> usize {
        self.traces.iter().map(PointSet::len).sum()
    }
}
