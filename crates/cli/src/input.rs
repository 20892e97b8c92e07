//! Polygon input: inline `x,y;x,y;...`, JSON `[[x, y], ...]`, or CSV with `x`/`y` columns.

use anyhow::{bail, Context, Result};
use clap::Args;
use polars::prelude::*;
use scanfill::Vertex;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the polygon comes from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct PolygonArgs {
    /// Inline vertex list, e.g. "0,0;4,0;2,4"
    #[arg(long)]
    pub vertices: Option<String>,
    /// Vertex file: `.json` ([[x, y], ...]) or `.csv` (columns x, y)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

impl PolygonArgs {
    pub fn load(&self) -> Result<Vec<Vertex>> {
        match (&self.vertices, &self.input) {
            (Some(inline), _) => parse_inline(inline),
            (None, Some(path)) => load_file(path),
            (None, None) => bail!("no polygon given: pass --vertices or --input"),
        }
    }

    /// Short description for logs and provenance.
    pub fn describe(&self) -> String {
        match (&self.vertices, &self.input) {
            (Some(inline), _) => format!("inline:{inline}"),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => "none".to_string(),
        }
    }
}

pub fn parse_inline(spec: &str) -> Result<Vec<Vertex>> {
    spec.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, pair)| -> Result<Vertex> {
            let (x, y) = pair
                .split_once(',')
                .with_context(|| format!("vertex {i}: expected \"x,y\", got {pair:?}"))?;
            let x: f64 = x
                .trim()
                .parse()
                .with_context(|| format!("vertex {i}: bad x {x:?}"))?;
            let y: f64 = y
                .trim()
                .parse()
                .with_context(|| format!("vertex {i}: bad y {y:?}"))?;
            Ok(Vertex::new(x, y))
        })
        .collect()
}

pub fn load_file(path: &Path) -> Result<Vec<Vertex>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!(
            "unsupported polygon file {} (expected .json or .csv)",
            path.display()
        ),
    }
}

fn load_json(path: &Path) -> Result<Vec<Vertex>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Vertex::new(x, y)).collect())
}

fn load_csv(path: &Path) -> Result<Vec<Vertex>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), path = %path.display(), "polygon_csv");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(i, pair)| -> Result<Vertex> {
            match pair {
                (Some(x), Some(y)) => Ok(Vertex::new(x, y)),
                _ => bail!("row {i}: missing coordinate"),
            }
        })
        .collect()
}
