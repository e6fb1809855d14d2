//! Planar geometry primitives for polygon containment tests.
//!
//! Everything else in the crate reduces to asking whether a projected data
//! point falls inside a hand-drawn polygon, so this module is deliberately
//! small: a point, a polygon, and a ray-cast `contains`.

/// A point in the 2-D plane of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// A simple polygon given by its vertex ring.
///
/// Vertices are stored in drawing order; the ring is implicitly closed
/// (last vertex connects back to the first). Winding direction does not
/// matter. Self-intersecting rings are accepted and evaluated by the
/// even-odd rule, without repair.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        Polygon { vertices }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Check if a point is inside the polygon using ray casting.
    /// Casts a horizontal ray to the right and counts edge crossings.
    ///
    /// Each edge spans the half-open y-interval `[y_min, y_max)` and only
    /// crossings strictly to the right of the point count, so shared vertices
    /// are never double-counted and horizontal edges never cross. For an
    /// axis-aligned rectangle this puts points on the lower and left edges
    /// inside, and points on the upper and right edges outside.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.vertices.len();
        let mut crossings = 0;

        for i in 0..n {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];

            // Skip if edge is entirely above or below the ray
            let (y_min, y_max) = if v0.y < v1.y { (v0.y, v1.y) } else { (v1.y, v0.y) };
            if p.y < y_min || p.y >= y_max {
                continue;
            }

            // Find x-coordinate where edge crosses y=p.y
            let t = (p.y - v0.y) / (v1.y - v0.y);
            let x_crossing = v0.x + t * (v1.x - v0.x);

            if x_crossing > p.x {
                crossings += 1;
            }
        }

        // Point is inside if odd number of crossings
        crossings % 2 == 1
    }
}
