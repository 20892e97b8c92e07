//! Data types shared by the edge builder, the orderer and the scanline filler.
//!
//! - `Edge`: directed segment between two consecutive polygon vertices.
//! - `EdgeKind`: tagged classification (sloped / horizontal / degenerate).
//! - `Span`, `PixelSet`: the filler's output.
//! - `Axis`, `FillCfg`: sweep configuration.
//! - `FillError`: everything the rasterizer can reject.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

/// Polygon vertex in real coordinates.
pub type Vertex = Vector2<f64>;

/// Integer pixel coordinate `(x, y)`.
pub type Pixel = (i64, i64);

/// Directed edge `start → end`, kept exactly as it appears in the vertex cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub start: Vertex,
    pub end: Vertex,
}

/// Classification driving how an active edge contributes to a scanline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeKind {
    /// Crosses scanlines at a single x; contributes an intersection.
    Sloped,
    /// Lies on a single y; contributes its own span `[x_min, x_max]`.
    Horizontal { y: f64, x_min: f64, x_max: f64 },
    /// `start == end`; never contributes.
    Degenerate,
}

impl Edge {
    #[inline]
    pub fn new(start: Vertex, end: Vertex) -> Self {
        Self { start, end }
    }

    /// Lower y-extent.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    /// Upper y-extent.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    /// Lower extent along `axis`.
    #[inline]
    pub fn min_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.start.x.min(self.end.x),
            Axis::Y => self.min_y(),
        }
    }

    pub fn kind(&self) -> EdgeKind {
        if self.start == self.end {
            EdgeKind::Degenerate
        } else if self.start.y == self.end.y {
            EdgeKind::Horizontal {
                y: self.start.y,
                x_min: self.start.x.min(self.end.x),
                x_max: self.start.x.max(self.end.x),
            }
        } else {
            EdgeKind::Sloped
        }
    }

    /// x where the supporting line crosses `y`: `x0 + (y - y0)/(y1 - y0) · (x1 - x0)`.
    ///
    /// Only meaningful for sloped edges (`y1 != y0`).
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        let t = (y - self.start.y) / (self.end.y - self.start.y);
        self.start.x + t * (self.end.x - self.start.x)
    }
}

/// Coordinate axis. Used both as the ordering key and as the sweep direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    #[default]
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

impl FromStr for Axis {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            _ => Err(FillError::InvalidSortKey { key: s.to_string() }),
        }
    }
}

/// Rasterizer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillCfg {
    /// Sweep direction. `Y` sweeps rows (scanlines), `X` sweeps columns.
    pub axis: Axis,
}

/// Filled run of pixels on one sweep line, endpoints inclusive.
///
/// For `Axis::Y` the line is a row `y` and `[start, end]` are x columns; for
/// `Axis::X` the line is a column `x` and `[start, end]` are y rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub axis: Axis,
    pub line: i64,
    pub start: i64,
    pub end: i64,
}

impl Span {
    #[inline]
    pub fn len(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Pixels covered by this span, in `(x, y)` order regardless of the axis.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        (self.start..=self.end).map(move |v| match self.axis {
            Axis::Y => (v, self.line),
            Axis::X => (self.line, v),
        })
    }
}

/// Inclusive integer bounding box of a pixel set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl PixelBounds {
    #[inline]
    pub fn width(&self) -> u64 {
        (self.x_max - self.x_min + 1) as u64
    }
    #[inline]
    pub fn height(&self) -> u64 {
        (self.y_max - self.y_min + 1) as u64
    }
}

/// Filled pixel coordinates produced by one fill.
///
/// The filler merges spans per line, so a single fill never repeats a pixel;
/// consumers must not rely on any particular ordering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelSet {
    pub pixels: Vec<Pixel>,
}

impl PixelSet {
    pub fn from_spans(spans: &[Span]) -> Self {
        let cap = spans.iter().map(Span::len).sum();
        let mut pixels = Vec::with_capacity(cap);
        for s in spans {
            pixels.extend(s.pixels());
        }
        Self { pixels }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    pub fn contains(&self, p: Pixel) -> bool {
        self.pixels.contains(&p)
    }

    pub fn bounds(&self) -> Option<PixelBounds> {
        let (&(x0, y0), rest) = self.pixels.split_first()?;
        let init = PixelBounds {
            x_min: x0,
            x_max: x0,
            y_min: y0,
            y_max: y0,
        };
        Some(rest.iter().fold(init, |b, &(x, y)| PixelBounds {
            x_min: b.x_min.min(x),
            x_max: b.x_max.max(x),
            y_min: b.y_min.min(y),
            y_max: b.y_max.max(y),
        }))
    }

    /// Sorted, deduplicated x columns per row.
    pub fn rows(&self) -> BTreeMap<i64, Vec<i64>> {
        let mut rows: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
        for &(x, y) in &self.pixels {
            rows.entry(y).or_default().push(x);
        }
        for xs in rows.values_mut() {
            xs.sort_unstable();
            xs.dedup();
        }
        rows
    }

    /// Maximal contiguous runs of row `y`, left to right.
    pub fn spans_at(&self, y: i64) -> Vec<Span> {
        let mut xs: Vec<i64> = self
            .pixels
            .iter()
            .filter(|p| p.1 == y)
            .map(|p| p.0)
            .collect();
        xs.sort_unstable();
        xs.dedup();
        let mut out: Vec<Span> = Vec::new();
        for x in xs {
            match out.last_mut() {
                Some(last) if last.end + 1 == x => last.end = x,
                _ => out.push(Span {
                    axis: Axis::Y,
                    line: y,
                    start: x,
                    end: x,
                }),
            }
        }
        out
    }

    pub fn to_hash_set(&self) -> HashSet<Pixel> {
        self.pixels.iter().copied().collect()
    }
}

impl IntoIterator for PixelSet {
    type Item = Pixel;
    type IntoIter = std::vec::IntoIter<Pixel>;
    fn into_iter(self) -> Self::IntoIter {
        self.pixels.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelSet {
    type Item = &'a Pixel;
    type IntoIter = std::slice::Iter<'a, Pixel>;
    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

/// Errors surfaced by the rasterizer.
#[derive(Clone, Debug, PartialEq)]
pub enum FillError {
    /// Fewer than three vertices; no closed polygon exists.
    DegeneratePolygon { vertices: usize },
    /// A vertex coordinate is NaN or infinite.
    NonFiniteVertex { index: usize },
    /// Requested ordering/sweep axis is not `x` or `y`.
    InvalidSortKey { key: String },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::DegeneratePolygon { vertices } => write!(
                f,
                "degenerate polygon: need at least 3 vertices, got {vertices}"
            ),
            FillError::NonFiniteVertex { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
            FillError::InvalidSortKey { key } => {
                write!(f, "unsupported sort axis {key:?} (expected \"x\" or \"y\")")
            }
        }
    }
}

impl std::error::Error for FillError {}
