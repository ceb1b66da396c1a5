//! Planar geometry for gamut triangles: polygon area via the shoelace formula
//! and intersection area via `geo`'s boolean overlay. Gamut triangles are
//! always convex, so the intersection of two of them is a single convex
//! polygon (possibly empty), but nothing here relies on that.

use geo::{Area, BooleanOps, LineString, Polygon};

use crate::chromaticity::Chromaticity;

/// Computes the enclosed area of a polygon given its vertices in order, using
/// the shoelace formula. The sequence is treated as cyclic: if the first and
/// last points differ, the polygon is closed by connecting them. The result is
/// an absolute value, so it is independent of winding order and never
/// negative; degenerate (collinear) input yields 0.
///
/// # Example
/// ```
/// # use analyze_gamut::chromaticity::Chromaticity;
/// # use analyze_gamut::geometry::polygon_area;
/// let unit_square = [
///     Chromaticity::new(0.0, 0.0),
///     Chromaticity::new(1.0, 0.0),
///     Chromaticity::new(1.0, 1.0),
///     Chromaticity::new(0.0, 1.0),
/// ];
/// assert!((polygon_area(&unit_square) - 1.0).abs() <= 1e-12);
/// ```
pub fn polygon_area(points: &[Chromaticity]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut closed: Vec<Chromaticity> = points.to_vec();
    if closed.first() != closed.last() {
        closed.push(closed[0]);
    }
    let twice_signed: f64 = closed
        .windows(2)
        .map(|pair| pair[0].x * pair[1].y - pair[1].x * pair[0].y)
        .sum();
    0.5 * twice_signed.abs()
}

/// Builds a closed `geo` polygon from a vertex list. `geo` closes the exterior
/// ring itself when the last point differs from the first.
pub fn to_polygon(points: &[Chromaticity]) -> Polygon<f64> {
    let ring: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(LineString::from(ring), vec![])
}

/// The area of the geometric intersection of two polygons. Returns 0 when
/// they do not overlap.
pub fn intersection_area(a: &[Chromaticity], b: &[Chromaticity]) -> f64 {
    let overlap = to_polygon(a).intersection(&to_polygon(b));
    overlap.unsigned_area()
}
