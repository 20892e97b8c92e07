//! Edge construction and activation ordering.

use std::cmp::Ordering;

use super::types::{Axis, Edge, FillError, Vertex};

/// Close the vertex cycle into `n` directed edges `(v[i], v[(i+1) mod n])`.
///
/// Rejects polygons with fewer than three vertices and non-finite coordinates.
pub fn build_edges(vertices: &[Vertex]) -> Result<Vec<Edge>, FillError> {
    let n = vertices.len();
    if n < 3 {
        return Err(FillError::DegeneratePolygon { vertices: n });
    }
    if let Some(index) = vertices
        .iter()
        .position(|v| !(v.x.is_finite() && v.y.is_finite()))
    {
        return Err(FillError::NonFiniteVertex { index });
    }
    Ok((0..n)
        .map(|i| Edge::new(vertices[i], vertices[(i + 1) % n]))
        .collect())
}

/// Edges ordered by ascending lower y-extent (stable).
pub fn order_edges(edges: &[Edge]) -> Vec<Edge> {
    order_edges_by(edges, Axis::Y)
}

/// Edges ordered by ascending lower extent along `axis`.
///
/// `slice::sort_by` is stable, so ties keep their cycle order. Keys are finite
/// after `build_edges`; the `Equal` fallback only guards hand-built edges.
pub fn order_edges_by(edges: &[Edge], axis: Axis) -> Vec<Edge> {
    let mut out = edges.to_vec();
    out.sort_by(|a, b| {
        a.min_along(axis)
            .partial_cmp(&b.min_along(axis))
            .unwrap_or(Ordering::Equal)
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn tri() -> Vec<Vertex> {
        vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 4.0]]
    }

    #[test]
    fn edges_close_the_cycle() {
        let v = tri();
        let e = build_edges(&v).unwrap();
        assert_eq!(e.len(), 3);
        assert_eq!(e[0], Edge::new(v[0], v[1]));
        assert_eq!(e[1], Edge::new(v[1], v[2]));
        assert_eq!(e[2], Edge::new(v[2], v[0]));
    }

    #[test]
    fn too_few_vertices_rejected() {
        let v = vec![vector![0.0, 0.0], vector![1.0, 1.0]];
        assert_eq!(
            build_edges(&v),
            Err(FillError::DegeneratePolygon { vertices: 2 })
        );
        assert_eq!(
            build_edges(&[]),
            Err(FillError::DegeneratePolygon { vertices: 0 })
        );
    }

    #[test]
    fn non_finite_vertex_rejected() {
        let v = vec![
            vector![0.0, 0.0],
            vector![1.0, f64::NAN],
            vector![2.0, 0.0],
        ];
        assert_eq!(build_edges(&v), Err(FillError::NonFiniteVertex { index: 1 }));
    }

    #[test]
    fn ordering_is_stable_by_lower_extent() {
        // min_y: e0 = 0, e1 = 0, e2 = 1, e3 = 0
        let v = vec![
            vector![0.0, 0.0],
            vector![5.0, 0.0],
            vector![5.0, 3.0],
            vector![2.0, 1.0],
        ];
        let e = build_edges(&v).unwrap();
        let o = order_edges(&e);
        assert_eq!(o.len(), e.len());
        assert_eq!(o, vec![e[0], e[1], e[3], e[2]]);
    }

    #[test]
    fn ordering_along_x() {
        let e = build_edges(&tri()).unwrap();
        let o = order_edges_by(&e, Axis::X);
        // min_x: e0 = 0, e1 = 2, e2 = 0
        assert_eq!(o, vec![e[0], e[2], e[1]]);
    }

    #[test]
    fn axis_parse() {
        assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
        assert_eq!(" X ".parse::<Axis>(), Ok(Axis::X));
        assert_eq!(
            "z".parse::<Axis>(),
            Err(FillError::InvalidSortKey {
                key: "z".to_string()
            })
        );
    }
}
