//! Closed 2D polygon type and queries.

use gateau_math::Point2;

/// A 2D polygon (closed path). The closing edge from the last vertex back
/// to the first is implicit.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices of the polygon in order.
    pub points: Vec<Point2>,
}

impl Polygon {
    /// Create a new polygon from points.
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Check if the polygon is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Signed area of the polygon.
    /// Positive for counter-clockwise, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.points[i].x * self.points[j].y;
            area -= self.points[j].x * self.points[i].y;
        }
        area / 2.0
    }

    /// Is the polygon counter-clockwise?
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Perimeter length, including the closing edge.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        let mut length = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            length += (self.points[j] - self.points[i]).norm();
        }
        length
    }

    /// Axis-aligned bounding box as `(min, max)`.
    ///
    /// Degenerate (empty) polygons report a zero box at the origin.
    pub fn bounding_box(&self) -> (Point2, Point2) {
        if self.points.is_empty() {
            return (Point2::origin(), Point2::origin());
        }
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Check if a point is inside the polygon (even-odd crossing rule).
    pub fn contains(&self, point: &Point2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;

        for i in 0..n {
            let pi = &self.points[i];
            let pj = &self.points[j];

            if ((pi.y > point.y) != (pj.y > point.y))
                && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// Boundary point at normalized arc-length fraction `t ∈ [0, 1]`.
    ///
    /// `t` values outside the range wrap around the closed boundary.
    /// Degenerate polygons (fewer than 2 vertices) return the first vertex
    /// or the origin.
    pub fn point_at(&self, t: f64) -> Point2 {
        let n = self.points.len();
        if n == 0 {
            return Point2::origin();
        }
        if n == 1 {
            return self.points[0];
        }

        let total = self.perimeter();
        if total <= 0.0 {
            return self.points[0];
        }

        let mut remaining = t.rem_euclid(1.0) * total;
        for i in 0..n {
            let j = (i + 1) % n;
            let edge = self.points[j] - self.points[i];
            let len = edge.norm();
            if remaining <= len {
                let frac = if len > 0.0 { remaining / len } else { 0.0 };
                return self.points[i] + edge * frac;
            }
            remaining -= len;
        }
        self.points[0]
    }
}
