//! Layer-stack accumulator.
//!
//! Walks the layer list bottom to top accumulating vertical offset. This is
//! the single height computation shared by the renderable layer transforms
//! and the topping/text/glaze anchors; both paths consume [`StackLayout`]
//! so decorations can never detach from the stacked geometry.

use serde::{Deserialize, Serialize};

use crate::state::Layer;

/// Vertical placement of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerSlot {
    /// Vertical center of the layer.
    pub y_center: f64,
    /// Height of the layer (copied through for convenience).
    pub height: f64,
}

/// The accumulated layout of the whole stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackLayout {
    /// One slot per layer, bottom to top.
    pub slots: Vec<LayerSlot>,
    /// Cumulative top of the stack: the anchor for all top-mounted
    /// decoration.
    pub top: f64,
}

/// Accumulate the stack layout for an ordered layer list.
pub fn stack_layout(layers: &[Layer]) -> StackLayout {
    let mut running = 0.0;
    let mut slots = Vec::with_capacity(layers.len());
    for layer in layers {
        slots.push(LayerSlot {
            y_center: running + layer.height / 2.0,
            height: layer.height,
        });
        running += layer.height;
    }
    StackLayout { slots, top: running }
}
