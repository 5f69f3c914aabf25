//! Outline-space to world-space mapping per base shape.
//!
//! Decorations are computed in a shape's 2D silhouette space and land on
//! the cake's top face. For round and square bases the silhouette plane is
//! the top face. The remaining shapes are extrusions: their silhouette
//! lives in a plane rotated -90° about X and shifted by a fixed per-shape
//! offset that centers the visible silhouette at the origin. Every topping,
//! text label, and glaze overlay depends on these offsets being exact.

use std::f64::consts::FRAC_PI_2;

use gateau_math::{Point2, Point3, Transform, Vec3};
use gateau_outline::BaseShape;

/// World Y of the top face in the top-of-stack frame.
pub const TOP_Y: f64 = 0.0;

/// Does the shape use the rotated-extrusion convention?
pub fn is_extruded(shape: BaseShape) -> bool {
    !matches!(shape, BaseShape::Round | BaseShape::Square)
}

/// Fixed mesh-centering offset per shape, applied in the extrusion plane.
pub fn shape_offset(shape: BaseShape) -> Vec3 {
    match shape {
        BaseShape::Heart => Vec3::new(-0.5, 0.0, 1.0),
        BaseShape::CharacterA | BaseShape::CharacterB => Vec3::new(0.0, 0.0, 0.5),
        BaseShape::Round | BaseShape::Square | BaseShape::Star => Vec3::new(0.0, 0.0, 0.0),
    }
}

/// Map a silhouette-space point onto the top face, in the top-of-stack
/// frame (`y == TOP_Y`).
///
/// Round and square map directly (silhouette axes are the world horizontal
/// axes). Extruded shapes fold the silhouette Y axis into world -Z and add
/// the [`shape_offset`] X/Z components.
pub fn to_world(p: &Point2, shape: BaseShape) -> Point3 {
    match shape {
        BaseShape::Round | BaseShape::Square => Point3::new(p.x, TOP_Y, p.y),
        _ => {
            let offset = shape_offset(shape);
            Point3::new(p.x + offset.x, TOP_Y, offset.z - p.y)
        }
    }
}

/// The renderable transform of one layer: position, extrusion rotation,
/// per-axis scale, and the mesh-centering offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTransform {
    /// Vertical center of the layer in stack space.
    pub y_center: f64,
    /// Rotation about X in radians (`-π/2` for extruded shapes, else 0).
    pub rotation_x: f64,
    /// Per-axis scale: `[scale, height, scale]` for flat-top shapes,
    /// `[scale, scale, height]` for extrusions (depth is the height axis).
    pub scale: [f64; 3],
    /// Mesh-centering offset applied inside the rotated frame.
    pub mesh_offset: Vec3,
}

impl LayerTransform {
    /// Build the transform for one layer of `shape` with horizontal
    /// footprint `scale`, vertical extent `height`, centered at `y_center`.
    pub fn new(shape: BaseShape, scale: f64, height: f64, y_center: f64) -> Self {
        let (rotation_x, scale3) = if is_extruded(shape) {
            (-FRAC_PI_2, [scale, scale, height])
        } else {
            (0.0, [scale, height, scale])
        };
        Self {
            y_center,
            rotation_x,
            scale: scale3,
            mesh_offset: shape_offset(shape),
        }
    }

    /// The composed 4x4 matrix (offset, then scale, then rotation, then
    /// lift to `y_center`) for renderers that consume a single transform.
    pub fn matrix(&self) -> Transform {
        let lift = Transform::translation(0.0, self.y_center, 0.0);
        let rot = Transform::rotation_x(self.rotation_x);
        let scale = Transform::scale(self.scale[0], self.scale[1], self.scale[2]);
        let offset =
            Transform::translation(self.mesh_offset.x, self.mesh_offset.y, self.mesh_offset.z);
        lift.then(&rot).then(&scale).then(&offset)
    }
}
