//! Scanline polygon rasterization.
//!
//! - `raster`: the even-odd scanline filler (edges → ordered edges → sweep → pixels).
//! - `shapes`: vertex-list builders (regular polygons, morphing, random stars).
//!
//! The crate performs no I/O. Writing pixels into an image buffer belongs to
//! the caller (see the `scanfill` binary).

pub mod raster;
pub mod shapes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use raster::{fill, fill_spans, fill_with, Axis, FillCfg, FillError, Pixel, PixelSet, Vertex};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::raster::{
        build_edges, fill, fill_spans, fill_with, order_edges, order_edges_by, Axis, Edge,
        EdgeKind, FillCfg, FillError, Pixel, PixelBounds, PixelSet, ScanlineFiller, Span, Vertex,
    };
    pub use crate::shapes::{
        draw_star_polygon, interpolate, match_vertex_count, morph, regular_polygon, ReplayToken,
        ShapeError, StarCfg, VertexCount,
    };
    pub use nalgebra::Vector2 as Vec2;
}
