//! Derived render-boundary data.
//!
//! A [`Frame`] is everything the rendering collaborator needs for one
//! configuration revision. It is recomputed from the configuration on every
//! change and consumed read-only.

use gateau_config::LayerId;
use gateau_decor::{LayerTransform, PlacedInstance, PlacementKind, ToppingVisual};
use gateau_math::Rgb;

/// Vertical gap between the stack top and the decoration text.
pub const TEXT_CLEARANCE: f64 = 0.05;

/// Text size per unit of top-layer footprint.
pub const TEXT_SIZE: f64 = 0.3;

/// Footprint factor of the glaze shell over the top layer.
pub const GLAZE_SCALE: f64 = 1.02;

/// Renderable state of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerView {
    /// Stable layer identity (for renderer-side caching).
    pub id: LayerId,
    /// Sponge color.
    pub color: Rgb,
    /// Vertical extent.
    pub height: f64,
    /// Horizontal footprint multiplier.
    pub footprint: f64,
    /// Placement transform in stack space.
    pub transform: LayerTransform,
}

/// All placed instances of one selected topping.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementGroup {
    /// The topping id this group renders.
    pub id: String,
    /// Model asset or procedural primitive.
    pub visual: ToppingVisual,
    /// Strategy that produced the instances.
    pub placement: PlacementKind,
    /// Instances in stack space.
    pub instances: Vec<PlacedInstance>,
}

/// Anchor data for the decoration text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    /// The text to draw.
    pub content: String,
    /// Vertical anchor in stack space.
    pub y: f64,
    /// Font size.
    pub size: f64,
    /// Text color.
    pub color: Rgb,
}

/// Anchor data for the glaze overlay on the top layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GlazeView {
    /// Coverage progress in `[0, 1]`.
    pub progress: f64,
    /// Placement transform of the slightly oversized glaze shell.
    pub transform: LayerTransform,
}

/// Derived render data for one configuration revision.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Uniform whole-cake scale from the size class.
    pub root_scale: f64,
    /// Layer views, bottom to top.
    pub layers: Vec<LayerView>,
    /// Placed instances per visible topping.
    pub toppings: Vec<PlacementGroup>,
    /// Top of the stack: anchor for all top-mounted decoration.
    pub top_y: f64,
    /// Decoration text, when set.
    pub text: Option<TextView>,
    /// Glaze overlay, once a pour has started.
    pub glaze: Option<GlazeView>,
}

impl Frame {
    /// Placeholder frame used before the first rebuild.
    pub(crate) fn empty() -> Self {
        Self {
            root_scale: 1.0,
            layers: Vec::new(),
            toppings: Vec::new(),
            top_y: 0.0,
            text: None,
            glaze: None,
        }
    }
}
