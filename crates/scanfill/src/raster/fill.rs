//! Rasterizer façade: vertices → edges → ordered edges → sweep → pixels.

use super::edges::{build_edges, order_edges};
use super::scan::ScanlineFiller;
use super::types::{Axis, FillCfg, FillError, PixelSet, Span, Vertex};

/// Fill a simple polygon under the even-odd rule, sweeping rows.
///
/// Pure and deterministic: the same vertex list always yields the same pixels.
pub fn fill(vertices: &[Vertex]) -> Result<PixelSet, FillError> {
    fill_with(vertices, FillCfg::default())
}

/// Fill with an explicit configuration.
pub fn fill_with(vertices: &[Vertex], cfg: FillCfg) -> Result<PixelSet, FillError> {
    let spans = fill_spans(vertices, cfg)?;
    let pixels = PixelSet::from_spans(&spans);
    tracing::debug!(
        vertices = vertices.len(),
        axis = %cfg.axis,
        spans = spans.len(),
        pixels = pixels.len(),
        "fill"
    );
    Ok(pixels)
}

/// Merged spans per sweep line, before expansion into pixels.
///
/// For `Axis::X` the polygon is transposed, swept by rows, and the resulting
/// spans are labelled as columns.
pub fn fill_spans(vertices: &[Vertex], cfg: FillCfg) -> Result<Vec<Span>, FillError> {
    match cfg.axis {
        Axis::Y => sweep(vertices, Axis::Y),
        Axis::X => {
            let transposed: Vec<Vertex> =
                vertices.iter().map(|v| Vertex::new(v.y, v.x)).collect();
            sweep(&transposed, Axis::X)
        }
    }
}

fn sweep(vertices: &[Vertex], label: Axis) -> Result<Vec<Span>, FillError> {
    let edges = build_edges(vertices)?;
    let ordered = order_edges(&edges);
    Ok(ScanlineFiller::new(&ordered, label).run(vertices))
}
