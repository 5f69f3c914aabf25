//! Hand-authored silhouette curves for the non-trivial base shapes.
//!
//! Each silhouette is a fixed closed path flattened once into a [`Polygon`].
//! Control points are part of the product look and are not parametrized.

use std::f64::consts::PI;

use gateau_math::Point2;

use crate::polygon::Polygon;

/// Samples generated per cubic Bézier span when flattening.
const CURVE_DIVISIONS: usize = 12;

/// Segments used for the character-A face silhouette.
const FACE_SEGMENTS: usize = 32;

/// Builds a closed polygon from move/line/cubic path commands.
struct PathBuilder {
    points: Vec<Point2>,
    cursor: Point2,
}

impl PathBuilder {
    fn begin(x: f64, y: f64) -> Self {
        let start = Point2::new(x, y);
        Self {
            points: vec![start],
            cursor: start,
        }
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = Point2::new(x, y);
        self.points.push(p);
        self.cursor = p;
    }

    /// Flatten a cubic Bézier from the cursor through two control points.
    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        let p0 = self.cursor;
        let (p1, p2, p3) = (
            Point2::new(c1x, c1y),
            Point2::new(c2x, c2y),
            Point2::new(x, y),
        );
        for i in 1..=CURVE_DIVISIONS {
            let t = i as f64 / CURVE_DIVISIONS as f64;
            let u = 1.0 - t;
            let px = u * u * u * p0.x
                + 3.0 * u * u * t * p1.x
                + 3.0 * u * t * t * p2.x
                + t * t * t * p3.x;
            let py = u * u * u * p0.y
                + 3.0 * u * u * t * p1.y
                + 3.0 * u * t * t * p2.y
                + t * t * t * p3.y;
            self.points.push(Point2::new(px, py));
        }
        self.cursor = p3;
    }

    /// Close the path, dropping a duplicated final vertex if the path
    /// returned to its start.
    fn close(mut self) -> Polygon {
        if self.points.len() > 1 {
            let first = self.points[0];
            let last = *self.points.last().unwrap();
            if (last - first).norm() < 1e-9 {
                self.points.pop();
            }
        }
        Polygon::new(self.points)
    }
}

/// Heart silhouette: six cubic spans, dimple at the start point.
pub fn heart() -> Polygon {
    let mut path = PathBuilder::begin(0.5, 0.5);
    path.cubic_to(0.5, 0.5, 0.4, 0.0, 0.0, 0.0);
    path.cubic_to(-0.6, 0.0, -0.6, 0.7, -0.6, 0.7);
    path.cubic_to(-0.6, 1.1, -0.3, 1.54, 0.5, 1.9);
    path.cubic_to(1.2, 1.54, 1.6, 1.1, 1.6, 0.7);
    path.cubic_to(1.6, 0.7, 1.6, 0.0, 1.0, 0.0);
    path.cubic_to(0.7, 0.0, 0.5, 0.5, 0.5, 0.5);
    path.close()
}

/// Five-pointed star: ten vertices alternating outer/inner radius.
pub fn star() -> Polygon {
    let mut points = Vec::with_capacity(10);
    for i in 0..10 {
        let radius = if i % 2 == 0 { 1.5 } else { 0.75 };
        let angle = i as f64 / 10.0 * 2.0 * PI;
        points.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
    }
    Polygon::new(points)
}

/// Character-A face silhouette (round face).
pub fn character_a() -> Polygon {
    let radius = 1.0;
    let mut points = Vec::with_capacity(FACE_SEGMENTS);
    for i in 0..FACE_SEGMENTS {
        let angle = i as f64 / FACE_SEGMENTS as f64 * 2.0 * PI;
        points.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
    }
    Polygon::new(points)
}

/// Character-B face silhouette (wide face, rounded crown, tapered chin).
pub fn character_b() -> Polygon {
    let mut path = PathBuilder::begin(0.0, -1.0);
    path.cubic_to(0.6, -1.0, 1.2, -0.8, 1.4, -0.4);
    path.line_to(1.5, 0.5);
    path.cubic_to(1.5, 1.5, -1.5, 1.5, -1.5, 0.5);
    path.line_to(-1.4, -0.4);
    path.cubic_to(-1.2, -0.8, -0.6, -1.0, 0.0, -1.0);
    path.close()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_is_closed_and_nondegenerate() {
        let heart = heart();
        assert!(heart.len() > 50);
        assert!(heart.signed_area().abs() > 1.0);
        // No duplicated closing vertex.
        let first = heart.points[0];
        let last = *heart.points.last().unwrap();
        assert!((last - first).norm() > 1e-9);
    }

    #[test]
    fn test_heart_contains_body_not_dimple() {
        let heart = heart();
        // Inside the body of the silhouette.
        assert!(heart.contains(&Point2::new(0.5, 0.8)));
        // Above the dimple between the two lobes, outside the curve.
        assert!(!heart.contains(&Point2::new(0.5, 0.1)));
    }

    #[test]
    fn test_star_alternates_radii() {
        let star = star();
        assert_eq!(star.len(), 10);
        for (i, p) in star.points.iter().enumerate() {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            let expected = if i % 2 == 0 { 1.5 } else { 0.75 };
            assert!((r - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_character_silhouettes_deterministic() {
        let a1 = character_a();
        let a2 = character_a();
        assert_eq!(a1.len(), a2.len());
        for (p, q) in a1.points.iter().zip(&a2.points) {
            assert!((p - q).norm() < 1e-15);
        }

        let b = character_b();
        assert!(b.contains(&Point2::new(0.0, 0.0)));
        assert!(!b.contains(&Point2::new(0.0, 2.0)));
    }
}
