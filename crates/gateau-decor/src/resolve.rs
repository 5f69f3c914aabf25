//! Topping placement resolution.
//!
//! Turns a selected topping id plus the active base shape into a list of
//! world-space instances. Pure apart from the injected random source:
//! scatter- and surface-type output is not reproducible across calls unless
//! the caller seeds the source.

use gateau_math::{Point2, Rgb};
use gateau_outline::{BaseShape, Outline};
use rand::Rng;

use crate::catalog::{self, ToppingColor, ToppingDefinition};
use crate::distribute::{DistributeParams, PlacementKind};
use crate::world::to_world;

/// Vertical clearance for scatter instances (small grains sit low).
pub const SCATTER_CLEARANCE: f64 = 0.02;

/// Vertical clearance for every other placement type.
pub const PLACEMENT_CLEARANCE: f64 = 0.1;

/// Saturation of randomized multi-color hues.
const MULTI_SATURATION: f64 = 0.7;

/// Lightness of randomized multi-color hues.
const MULTI_LIGHTNESS: f64 = 0.6;

/// One renderable topping instance. Derived fresh from the configuration;
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedInstance {
    /// Position in the anchor frame (top-of-stack for most types, the
    /// mounted layer's wall frame for side types).
    pub position: gateau_math::Point3,
    /// Rotation about the vertical axis, radians.
    pub rotation: f64,
    /// Final instance scale (definition scale × per-point jitter).
    pub scale: f64,
    /// Instance color; randomized per instance for multi-color toppings.
    pub color: Rgb,
}

/// Resolve a topping id for the active shape.
///
/// Unknown ids yield no instances.
pub fn resolve<R: Rng + ?Sized>(
    id: &str,
    shape: BaseShape,
    rng: &mut R,
) -> Vec<PlacedInstance> {
    match catalog::find(id) {
        Some(def) => resolve_definition(def, shape, rng),
        None => Vec::new(),
    }
}

/// Resolve a catalog definition for the active shape.
pub fn resolve_definition<R: Rng + ?Sized>(
    def: &ToppingDefinition,
    shape: BaseShape,
    rng: &mut R,
) -> Vec<PlacedInstance> {
    let outline = Outline::of(shape);
    let params = DistributeParams {
        count: def.count,
        radius: def.radius,
    };
    let samples = def.placement.distribute(shape, &outline, &params, rng);

    let clearance = match def.placement {
        PlacementKind::Scatter => SCATTER_CLEARANCE,
        _ => PLACEMENT_CLEARANCE,
    };

    samples
        .into_iter()
        .map(|sample| {
            let mut position = to_world(&Point2::new(sample.x, sample.y), shape);
            position.y += clearance + def.y_offset;
            let color = match def.color {
                ToppingColor::Fixed(c) => c,
                ToppingColor::Multi => {
                    Rgb::from_hsl(rng.gen::<f64>() * 360.0, MULTI_SATURATION, MULTI_LIGHTNESS)
                }
            };
            PlacedInstance {
                position,
                rotation: sample.rotation + def.rotation_offset,
                scale: def.scale * sample.jitter,
                color,
            }
        })
        .collect()
}
