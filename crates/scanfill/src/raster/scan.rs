//! Scanline sweep with an active-edge set (even-odd rule).
//!
//! Model
//! - Rows `y` run over `[floor(min y), ceil(max y)]`.
//! - An edge activates at the first row `y >= min_y` (a cursor into the
//!   y-ordered edge list) and a sloped edge retires once `max_y <= y`. This
//!   activate-at-min / retire-at-max asymmetry makes a vertex shared by two
//!   edges count exactly once.
//! - Horizontal edges are live for the single row they lie on: they add their
//!   own span and retire. Degenerate edges never activate.
//! - Sorted sloped intersections are paired left to right; a trailing odd
//!   intersection is dropped. All spans of a row are merged before output.
//! - Endpoints are rounded half away from zero (`f64::round`).

use super::types::{Axis, Edge, EdgeKind, Span, Vertex};

/// Edge live at the current scanline.
#[derive(Clone, Copy, Debug)]
enum ActiveEdge {
    Sloped { edge: Edge, max_y: f64 },
    Horizontal { x_min: f64, x_max: f64 },
}

/// Sweep state for one fill. Created per call and dropped with it.
pub struct ScanlineFiller<'a> {
    ordered: &'a [Edge],
    cursor: usize,
    active: Vec<ActiveEdge>,
    axis: Axis,
}

impl<'a> ScanlineFiller<'a> {
    /// `ordered` must be sorted by ascending `min_y` (see `order_edges`).
    /// `axis` only labels the emitted spans; callers transpose for `Axis::X`.
    pub fn new(ordered: &'a [Edge], axis: Axis) -> Self {
        Self {
            ordered,
            cursor: 0,
            active: Vec::new(),
            axis,
        }
    }

    /// Sweep every row between the vertex y-bounds and return merged spans,
    /// bottom row first.
    pub fn run(mut self, vertices: &[Vertex]) -> Vec<Span> {
        let Some((y_lo, y_hi)) = row_range(vertices) else {
            return Vec::new();
        };
        let mut spans = Vec::new();
        for y in y_lo..=y_hi {
            spans.extend(self.scan_row(y));
        }
        spans
    }

    /// Advance the sweep to row `y` and return that row's merged spans.
    ///
    /// Rows must be visited in increasing order.
    fn scan_row(&mut self, y: i64) -> Vec<Span> {
        let yf = y as f64;
        self.activate(yf);
        // Sloped edges stop contributing once the row reaches their upper extent.
        self.active.retain(|a| match *a {
            ActiveEdge::Sloped { max_y, .. } => max_y > yf,
            ActiveEdge::Horizontal { .. } => true,
        });

        let mut runs: Vec<(f64, f64)> = Vec::new();
        let mut xs: Vec<f64> = Vec::new();
        for a in &self.active {
            match *a {
                ActiveEdge::Horizontal { x_min, x_max } => runs.push((x_min, x_max)),
                ActiveEdge::Sloped { edge, .. } => xs.push(edge.x_at(yf)),
            }
        }
        // Horizontal edges contribute once, on their own row.
        self.active.retain(|a| matches!(a, ActiveEdge::Sloped { .. }));

        xs.sort_by(f64::total_cmp);
        if xs.len() % 2 == 1 {
            tracing::debug!(
                y,
                intersections = xs.len(),
                "odd intersection count; dropping trailing crossing"
            );
        }
        runs.extend(xs.chunks_exact(2).map(|pair| (pair[0], pair[1])));

        merge_runs(self.axis, y, runs)
    }

    fn activate(&mut self, yf: f64) {
        while let Some(edge) = self.ordered.get(self.cursor) {
            if edge.min_y() > yf {
                break;
            }
            self.cursor += 1;
            match edge.kind() {
                EdgeKind::Sloped => self.active.push(ActiveEdge::Sloped {
                    edge: *edge,
                    max_y: edge.max_y(),
                }),
                // A horizontal edge off the integer grid lies strictly between
                // rows; the sloped edges around it already bound that region.
                EdgeKind::Horizontal { y, x_min, x_max } if y == yf => {
                    self.active.push(ActiveEdge::Horizontal { x_min, x_max })
                }
                EdgeKind::Horizontal { .. } | EdgeKind::Degenerate => {}
            }
        }
    }
}

/// Integer rows `[floor(min y), ceil(max y)]`, or `None` for an empty list.
pub(crate) fn row_range(vertices: &[Vertex]) -> Option<(i64, i64)> {
    let first = vertices.first()?;
    let (lo, hi) = vertices
        .iter()
        .fold((first.y, first.y), |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));
    Some((lo.floor() as i64, hi.ceil() as i64))
}

/// Round real runs to pixel columns and merge overlapping or touching ones.
fn merge_runs(axis: Axis, line: i64, runs: Vec<(f64, f64)>) -> Vec<Span> {
    let mut cols: Vec<(i64, i64)> = runs
        .into_iter()
        .map(|(l, r)| (l.round() as i64, r.round() as i64))
        .filter(|(l, r)| l <= r)
        .collect();
    cols.sort_unstable();
    let mut out: Vec<Span> = Vec::with_capacity(cols.len());
    for (start, end) in cols {
        match out.last_mut() {
            Some(last) if start <= last.end + 1 => last.end = last.end.max(end),
            _ => out.push(Span {
                axis,
                line,
                start,
                end,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::edges::{build_edges, order_edges};
    use nalgebra::vector;

    fn sweep(v: &[Vertex]) -> Vec<Span> {
        let e = order_edges(&build_edges(v).unwrap());
        ScanlineFiller::new(&e, Axis::Y).run(v)
    }

    fn row(spans: &[Span], y: i64) -> Vec<(i64, i64)> {
        spans
            .iter()
            .filter(|s| s.line == y)
            .map(|s| (s.start, s.end))
            .collect()
    }

    #[test]
    fn row_range_floors_and_ceils() {
        let v = vec![vector![0.0, -0.5], vector![1.0, 2.2], vector![2.0, 1.0]];
        assert_eq!(row_range(&v), Some((-1, 3)));
        assert_eq!(row_range(&[]), None);
    }

    #[test]
    fn merge_joins_touching_and_overlapping_runs() {
        let runs = vec![(4.0, 6.0), (0.0, 2.0), (2.6, 3.0), (5.0, 9.0)];
        let spans = merge_runs(Axis::Y, 0, runs);
        assert_eq!(
            spans.iter().map(|s| (s.start, s.end)).collect::<Vec<_>>(),
            vec![(0, 9)]
        );
        let apart = merge_runs(Axis::Y, 0, vec![(0.0, 1.0), (3.0, 4.0)]);
        assert_eq!(apart.len(), 2);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let spans = merge_runs(Axis::Y, 0, vec![(0.5, 2.5), (-3.5, -2.5)]);
        let got: Vec<_> = spans.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(got, vec![(-4, -3), (1, 3)]);
    }

    #[test]
    fn shared_vertex_on_scanline_counts_once() {
        // Diamond: side vertices sit exactly on row 2.
        let v = vec![
            vector![2.0, 0.0],
            vector![4.0, 2.0],
            vector![2.0, 4.0],
            vector![0.0, 2.0],
        ];
        let s = sweep(&v);
        assert_eq!(row(&s, 0), vec![(2, 2)]);
        assert_eq!(row(&s, 1), vec![(1, 3)]);
        assert_eq!(row(&s, 2), vec![(0, 4)]);
        assert_eq!(row(&s, 3), vec![(1, 3)]);
        // Apex: both edges retire at max_y.
        assert!(row(&s, 4).is_empty());
    }

    #[test]
    fn notch_floor_joins_both_prongs() {
        // U shape with the notch floor as a horizontal edge on row 2.
        let v = vec![
            vector![0.0, 0.0],
            vector![6.0, 0.0],
            vector![6.0, 4.0],
            vector![4.0, 4.0],
            vector![4.0, 2.0],
            vector![2.0, 2.0],
            vector![2.0, 4.0],
            vector![0.0, 4.0],
        ];
        let s = sweep(&v);
        assert_eq!(row(&s, 1), vec![(0, 6)]);
        assert_eq!(row(&s, 2), vec![(0, 6)]);
        assert_eq!(row(&s, 3), vec![(0, 2), (4, 6)]);
        assert_eq!(row(&s, 4), vec![(0, 2), (4, 6)]);
    }

    #[test]
    fn fractional_extents_activate_at_next_row() {
        let v = vec![vector![0.0, 0.5], vector![4.0, 0.5], vector![2.0, 2.5]];
        let s = sweep(&v);
        assert!(row(&s, 0).is_empty());
        // Row 1: edges (4,0.5)-(2,2.5) and (2,2.5)-(0,0.5) cross at x=3.5 and x=0.5.
        assert_eq!(row(&s, 1), vec![(1, 4)]);
        assert_eq!(row(&s, 2), vec![(2, 3)]);
        assert!(row(&s, 3).is_empty());
    }

    #[test]
    fn degenerate_edges_are_ignored() {
        let v = vec![
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ];
        let s = sweep(&v);
        for y in 0..=4 {
            assert_eq!(row(&s, y), vec![(0, 4)], "row {y}");
        }
    }

    #[test]
    fn odd_intersection_is_dropped() {
        // Hand-built edge list with a dangling sloped edge.
        let edges = vec![
            Edge::new(vector![0.0, 0.0], vector![0.0, 2.0]),
            Edge::new(vector![3.0, 0.0], vector![3.0, 2.0]),
            Edge::new(vector![5.0, 0.0], vector![5.0, 2.0]),
        ];
        let bounds = [vector![0.0, 0.0], vector![0.0, 2.0]];
        let ordered = order_edges(&edges);
        let s = ScanlineFiller::new(&ordered, Axis::Y).run(&bounds);
        assert_eq!(row(&s, 1), vec![(0, 3)]);
    }
}
