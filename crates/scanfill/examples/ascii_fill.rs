//! Print a filled polygon as ASCII art (row 0 at the bottom).
//!
//! Usage:
//!   cargo run -p scanfill --example ascii_fill -- 6
//!
//! The argument is the vertex count of a regular polygon (default 5).

use scanfill::raster::fill;
use scanfill::shapes::regular_polygon;

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(5);
    let poly = match regular_polygon(n, 10.0) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("usage: ascii_fill [vertex count >= 3]: {e}");
            return;
        }
    };
    let pixels = fill(&poly).expect("regular polygons are valid input");
    let Some(b) = pixels.bounds() else {
        println!("(empty)");
        return;
    };
    let rows = pixels.rows();
    for y in (b.y_min..=b.y_max).rev() {
        let xs = rows.get(&y).map(Vec::as_slice).unwrap_or(&[]);
        let line: String = (b.x_min..=b.x_max)
            .map(|x| if xs.binary_search(&x).is_ok() { '#' } else { '.' })
            .collect();
        println!("{line}");
    }
    println!("{} pixels, {n} vertices", pixels.len());
}
