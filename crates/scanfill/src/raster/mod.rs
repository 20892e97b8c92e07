//! Scanline polygon rasterizer (even-odd rule).
//!
//! Purpose
//! - Turn an ordered vertex list of a simple polygon into the exact set of
//!   integer pixels it covers, with explicit handling of horizontal edges and
//!   vertices lying on scanlines.
//!
//! Pipeline
//! - `build_edges`: close the vertex cycle into directed edges.
//! - `order_edges`: stable sort by lower y-extent, drives activation.
//! - `ScanlineFiller`: active-edge sweep, intersection pairing, span merging.
//! - `fill` / `fill_with` / `fill_spans`: the composed entry points.
//!
//! Every call builds its own edge list and active set, so independent fills
//! can run on separate threads without coordination.

mod edges;
mod fill;
mod scan;
mod types;

pub use edges::{build_edges, order_edges, order_edges_by};
pub use fill::{fill, fill_spans, fill_with};
pub use scan::ScanlineFiller;
pub use types::{
    Axis, Edge, EdgeKind, FillCfg, FillError, Pixel, PixelBounds, PixelSet, Span, Vertex,
};
