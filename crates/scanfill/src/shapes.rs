//! Polygon construction helpers: regular polygons, morphing, random stars.
//!
//! Purpose
//! - Produce vertex lists for the rasterizer without hand-typing coordinates.
//! - Morph one polygon into another: first equalize vertex counts by adding
//!   edge midpoints or dropping vertices, then interpolate per vertex.
//! - Draw reproducible random simple polygons for property tests and benches.
//!
//! Model (random stars)
//! - `n` equally spaced angles with bounded angular jitter (< half the spacing,
//!   so the cyclic order never changes), each paired with a jittered radius.
//!   Connecting them in angle order gives a polygon that is star-shaped about
//!   its centre and therefore simple. It is usually concave.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::raster::Vertex;

/// Errors from the shape helpers.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    InvalidParams { reason: String },
    VertexCountMismatch { start: usize, end: usize },
}

impl ShapeError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid shape params: {reason}"),
            Self::VertexCountMismatch { start, end } => write!(
                f,
                "cannot interpolate polygons with {start} and {end} vertices"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Regular `n`-gon of circumradius `radius` centred at the origin, first
/// vertex on the positive x-axis, counterclockwise.
///
/// Unit-circle coordinates are rounded to 4 decimals before scaling so that
/// axis-aligned vertices land exactly on the axes.
pub fn regular_polygon(n: usize, radius: f64) -> Result<Vec<Vertex>, ShapeError> {
    if n < 3 {
        return Err(ShapeError::invalid("a polygon must have at least 3 vertices"));
    }
    if !(radius.is_finite() && radius > 0.0) {
        return Err(ShapeError::invalid("radius must be positive and finite"));
    }
    let step = std::f64::consts::TAU / n as f64;
    Ok((0..n)
        .map(|i| {
            let th = step * i as f64;
            Vector2::new(radius * round4(th.cos()), radius * round4(th.sin()))
        })
        .collect())
}

#[inline]
fn round4(v: f64) -> f64 {
    (v * 1e4).round() / 1e4
}

/// Insert the midpoint of edge `index → index+1 (mod n)` right after `index`.
pub fn insert_midpoint(vertices: &mut Vec<Vertex>, index: usize) -> Result<(), ShapeError> {
    let n = vertices.len();
    if index >= n {
        return Err(ShapeError::invalid(format!(
            "edge index {index} out of range for {n} vertices"
        )));
    }
    let mid = (vertices[index] + vertices[(index + 1) % n]) * 0.5;
    vertices.insert(index + 1, mid);
    Ok(())
}

/// Remove vertex `index`.
pub fn remove_vertex(vertices: &mut Vec<Vertex>, index: usize) -> Result<Vertex, ShapeError> {
    if index >= vertices.len() {
        return Err(ShapeError::invalid(format!(
            "vertex index {index} out of range for {} vertices",
            vertices.len()
        )));
    }
    Ok(vertices.remove(index))
}

/// Add midpoints / drop vertices at random positions until `vertices.len() == target`.
pub fn match_vertex_count<R: Rng>(
    vertices: &mut Vec<Vertex>,
    target: usize,
    rng: &mut R,
) -> Result<(), ShapeError> {
    if target < 3 {
        return Err(ShapeError::invalid("target vertex count must be at least 3"));
    }
    if vertices.is_empty() {
        return Err(ShapeError::invalid("cannot resize an empty polygon"));
    }
    while vertices.len() < target {
        let i = rng.gen_range(0..vertices.len());
        insert_midpoint(vertices, i)?;
    }
    while vertices.len() > target {
        let i = rng.gen_range(0..vertices.len());
        remove_vertex(vertices, i)?;
    }
    Ok(())
}

/// Per-vertex linear interpolation `p_s + (p_e - p_s) t`.
pub fn interpolate(start: &[Vertex], end: &[Vertex], t: f64) -> Result<Vec<Vertex>, ShapeError> {
    if start.len() != end.len() {
        return Err(ShapeError::VertexCountMismatch {
            start: start.len(),
            end: end.len(),
        });
    }
    Ok(start
        .iter()
        .zip(end)
        .map(|(s, e)| s + (e - s) * t)
        .collect())
}

/// `steps + 1` frames from `start` (t = 0) to `end` (t = 1).
pub fn morph(
    start: &[Vertex],
    end: &[Vertex],
    steps: usize,
) -> Result<Vec<Vec<Vertex>>, ShapeError> {
    if steps == 0 {
        return Err(ShapeError::invalid("morph needs at least 1 step"));
    }
    (0..=steps)
        .map(|k| interpolate(start, end, k as f64 / steps as f64))
        .collect()
}

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Random star polygon configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.95] so every radius stays positive.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Vertex,
    pub random_phase: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.4,
            base_radius: 10.0,
            center: Vector2::zeros(),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random simple (star-shaped) polygon, counterclockwise.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Result<Vec<Vertex>, ShapeError> {
    if !(cfg.base_radius.is_finite() && cfg.base_radius > 0.0) {
        return Err(ShapeError::invalid("base_radius must be positive and finite"));
    }
    if !(cfg.center.x.is_finite() && cfg.center.y.is_finite()) {
        return Err(ShapeError::invalid("center must be finite"));
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta)
        .collect();
    angles.sort_by(f64::total_cmp);
    Ok(angles
        .into_iter()
        .map(|th| {
            let r = cfg.base_radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            cfg.center + Vector2::new(th.cos(), th.sin()) * r
        })
        .collect())
}
