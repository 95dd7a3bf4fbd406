//! atlas CLI - Globular cluster catalog viewer feed
//!
//! Reads a fixed-format catalog, parses every well-formed line and prints
//! the entries as a table, JSON or CSV, or writes the full 3D scene
//! (clusters, galactic disk, Sun and Galactic Center) as JSON for a viewer.
//!
//! # Design Philosophy
//!
//! - **Quiet parsing**: malformed lines are skipped, `--stats` shows how many
//! - **Config beside the data**: `.atlas_config.json` next to the catalog is
//!   picked up automatically; flags override it

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use globular_atlas::core::{
    serialize_scene, serializer_for, AtlasConfig, CatalogParser, LabelStyle, OutputFormat, Scene,
    DEFAULT_CONFIG_FILE,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `ATLAS_LOG=debug`
const LOG_ENV: &str = "ATLAS_LOG";

/// 🌌 Globular Atlas: map a cluster catalog into 3D.
#[derive(Parser, Debug)]
#[command(name = "atlas")]
#[command(version = globular_atlas::VERSION)]
#[command(about = "🌌 Globular Atlas: map a cluster catalog into 3D")]
#[command(after_help = "EXAMPLES:
  # List the clusters found in a catalog
  atlas harris_catalogue.txt

  # Export entries for a spreadsheet
  atlas harris_catalogue.txt --format csv -o clusters.csv

  # Write a reproducible scene for a 3D viewer
  atlas harris_catalogue.txt --format scene --seed 42 -o scene.json

  # How many lines were skipped?
  atlas harris_catalogue.txt --stats
")]
struct Cli {
    // ═══════════════════════════════════════════════════════════════════════════
    // 🔭 INPUT / OUTPUT
    // ═══════════════════════════════════════════════════════════════════════════

    /// Catalog text file to parse
    #[arg(value_name = "CATALOG", help_heading = "🔭 INPUT / OUTPUT")]
    catalog: PathBuf,

    /// Output format [table, json, csv, scene]
    #[arg(short = 'f', long = "format", value_enum, help_heading = "🔭 INPUT / OUTPUT")]
    format: Option<OutputFormatArg>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", help_heading = "🔭 INPUT / OUTPUT")]
    output: Option<PathBuf>,

    /// Config file path (default: .atlas_config.json beside the catalog)
    #[arg(short = 'c', long = "config", value_name = "FILE", help_heading = "🔭 INPUT / OUTPUT")]
    config: Option<PathBuf>,

    // ═══════════════════════════════════════════════════════════════════════════
    // 🏷️ LABELS & SCENE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Label entries by [name, identifier-and-name]
    #[arg(long = "label-style", value_enum, help_heading = "🏷️ LABELS & SCENE")]
    label_style: Option<LabelStyleArg>,

    /// Number of synthetic galactic disk points in scene output
    #[arg(long = "disk-points", value_name = "N", help_heading = "🏷️ LABELS & SCENE")]
    disk_points: Option<usize>,

    /// Seed for the galactic disk (reproducible scenes)
    #[arg(long = "seed", value_name = "N", help_heading = "🏷️ LABELS & SCENE")]
    seed: Option<u64>,

    // ═══════════════════════════════════════════════════════════════════════════
    // 📓 DIAGNOSTICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Print parse statistics to stderr
    #[arg(long = "stats", help_heading = "📓 DIAGNOSTICS")]
    stats: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, help_heading = "📓 DIAGNOSTICS")]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", help_heading = "📓 DIAGNOSTICS")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Table,
    Json,
    Csv,
    Scene,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Scene => OutputFormat::Scene,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LabelStyleArg {
    Name,
    IdentifierAndName,
}

impl From<LabelStyleArg> for LabelStyle {
    fn from(arg: LabelStyleArg) -> Self {
        match arg {
            LabelStyleArg::Name => LabelStyle::Name,
            LabelStyleArg::IdentifierAndName => LabelStyle::IdentifierAndName,
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve configuration: explicit file, then dotfile beside the catalog, then defaults
fn load_config(explicit: Option<&Path>, catalog: &Path) -> anyhow::Result<AtlasConfig> {
    if let Some(path) = explicit {
        return AtlasConfig::from_file(path)
            .with_context(|| format!("Could not load config file '{}'", path.display()));
    }

    let dir = catalog.parent().unwrap_or_else(|| Path::new("."));
    let default_config = dir.join(DEFAULT_CONFIG_FILE);
    if !default_config.exists() {
        return Ok(AtlasConfig::default());
    }

    match AtlasConfig::from_file(&default_config) {
        Ok(config) => {
            tracing::info!(path = %default_config.display(), "loaded config");
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(path = %default_config.display(), error = %e, "ignoring config file");
            Ok(AtlasConfig::default())
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref(), &cli.catalog)?;

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if let Some(style) = cli.label_style {
        config.label_style = style.into();
    }
    if let Some(points) = cli.disk_points {
        config.disk.points = points;
    }
    if cli.seed.is_some() {
        config.disk.seed = cli.seed;
    }

    let report = CatalogParser::new()
        .parse_file(&cli.catalog)
        .with_context(|| format!("Could not read catalog '{}'", cli.catalog.display()))?;

    if cli.stats {
        eprintln!("📊 {}", report.summary());
    }

    let output = match config.format {
        OutputFormat::Scene => {
            let scene = Scene::build(&report.entries, &config)?;
            serialize_scene(&scene)?
        }
        format => serializer_for(format).serialize_entries(&report.entries, config.label_style)?,
    };

    match &cli.output {
        Some(path) => {
            if !config.format.matches_path(path) {
                tracing::warn!(
                    path = %path.display(),
                    expected = config.format.extension(),
                    "output extension does not match format"
                );
            }
            fs::write(path, &output)
                .with_context(|| format!("Could not write output '{}'", path.display()))?;
            tracing::info!(path = %path.display(), entries = report.matched(), "wrote output");
        }
        None => print!("{}", output),
    }

    Ok(())
}

pub fn run() {
    // Fix broken pipe panic when piping to head/tail/etc.
    // Reset SIGPIPE to default behavior (terminate quietly)
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn main() {
    run();
}
