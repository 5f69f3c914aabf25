#![warn(missing_docs)]

//! Base-shape silhouettes and 2D outline queries for the gateau
//! configurator core.
//!
//! Every cake base shape has a closed 2D outline in its local silhouette
//! space. Round and square outlines are closed-form (exact containment and
//! boundary sampling, no polygon approximation); the remaining shapes are
//! fixed, hand-authored closed curves flattened into polygons.
//!
//! # Example
//!
//! ```
//! use gateau_outline::{BaseShape, Outline};
//!
//! let outline = Outline::of(BaseShape::Heart);
//! let rim = outline.point_at(0.25);
//! assert!(outline.bounding_box().1.y > 1.8);
//! # let _ = rim;
//! ```

use std::f64::consts::PI;

use gateau_math::Point2;
use serde::{Deserialize, Serialize};

pub mod polygon;
mod shapes;

pub use polygon::Polygon;

/// Top-face radius of the round cake base.
pub const ROUND_RADIUS: f64 = 1.5;

/// Half-extent of the square cake base.
pub const SQUARE_HALF: f64 = 1.3;

/// The supported cake base shapes.
///
/// The shape decides both which outline applies and which outline-to-world
/// convention the placement engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseShape {
    /// Cylindrical base, radius 1.5.
    #[default]
    Round,
    /// Box base, side 2.6.
    Square,
    /// Heart silhouette, extruded.
    Heart,
    /// Five-pointed star silhouette, extruded.
    Star,
    /// Round character face silhouette, extruded.
    CharacterA,
    /// Wide character face silhouette, extruded.
    CharacterB,
}

impl BaseShape {
    /// All shapes, in catalog order.
    pub const ALL: [BaseShape; 6] = [
        BaseShape::Round,
        BaseShape::Square,
        BaseShape::Heart,
        BaseShape::Star,
        BaseShape::CharacterA,
        BaseShape::CharacterB,
    ];
}

/// A closed 2D outline in a shape's local silhouette space.
///
/// Round and square bypass the polygon representation: containment and
/// boundary sampling are exact closed forms.
#[derive(Debug, Clone)]
pub enum Outline {
    /// Circle centered at the origin.
    Circle {
        /// Circle radius.
        radius: f64,
    },
    /// Axis-aligned square centered at the origin.
    Square {
        /// Half the side length.
        half: f64,
    },
    /// Arbitrary closed polygon.
    Polygon(Polygon),
}

impl Outline {
    /// The outline for a base shape. Deterministic: the same shape always
    /// yields the same outline.
    pub fn of(shape: BaseShape) -> Self {
        match shape {
            BaseShape::Round => Outline::Circle {
                radius: ROUND_RADIUS,
            },
            BaseShape::Square => Outline::Square { half: SQUARE_HALF },
            BaseShape::Heart => Outline::Polygon(shapes::heart()),
            BaseShape::Star => Outline::Polygon(shapes::star()),
            BaseShape::CharacterA => Outline::Polygon(shapes::character_a()),
            BaseShape::CharacterB => Outline::Polygon(shapes::character_b()),
        }
    }

    /// Boundary point at normalized arc-length fraction `t ∈ [0, 1]`.
    ///
    /// Circles use angular parametrization; squares walk the four edges
    /// starting at the bottom-left corner; polygons walk by arc length.
    pub fn point_at(&self, t: f64) -> Point2 {
        match self {
            Outline::Circle { radius } => {
                let theta = t.rem_euclid(1.0) * 2.0 * PI;
                Point2::new(radius * theta.cos(), radius * theta.sin())
            }
            Outline::Square { half } => {
                let h = *half;
                let p = t.rem_euclid(1.0) * 4.0;
                if p < 1.0 {
                    Point2::new(-h + p * 2.0 * h, -h)
                } else if p < 2.0 {
                    Point2::new(h, -h + (p - 1.0) * 2.0 * h)
                } else if p < 3.0 {
                    Point2::new(h - (p - 2.0) * 2.0 * h, h)
                } else {
                    Point2::new(-h, h - (p - 3.0) * 2.0 * h)
                }
            }
            Outline::Polygon(poly) => poly.point_at(t),
        }
    }

    /// Check if a point lies inside the outline.
    pub fn contains(&self, p: &Point2) -> bool {
        match self {
            Outline::Circle { radius } => p.x * p.x + p.y * p.y <= radius * radius,
            Outline::Square { half } => p.x.abs() <= *half && p.y.abs() <= *half,
            Outline::Polygon(poly) => poly.contains(p),
        }
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (Point2, Point2) {
        match self {
            Outline::Circle { radius } => (
                Point2::new(-radius, -radius),
                Point2::new(*radius, *radius),
            ),
            Outline::Square { half } => (Point2::new(-half, -half), Point2::new(*half, *half)),
            Outline::Polygon(poly) => poly.bounding_box(),
        }
    }

    /// Is the outline degenerate (unable to yield boundary points)?
    pub fn is_empty(&self) -> bool {
        match self {
            Outline::Circle { radius } => *radius <= 0.0,
            Outline::Square { half } => *half <= 0.0,
            Outline::Polygon(poly) => poly.is_empty(),
        }
    }
}
