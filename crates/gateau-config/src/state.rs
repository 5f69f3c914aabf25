//! The cake configuration value type and its transitions.
//!
//! `CakeConfig` is the single authoritative description of a design. It is
//! replaced wholesale on every transition (`with_*` methods return a new
//! value); the owning slot and change notification live in the session
//! facade. Invalid inputs from constrained UI controls (out-of-range layer
//! index, toggling an id twice, layer count at its cap or floor) are
//! no-ops, never errors.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use gateau_math::Rgb;
use gateau_outline::BaseShape;
use serde::{Deserialize, Serialize};

use crate::pour::PourState;

/// Maximum number of stacked layers.
pub const MAX_LAYERS: usize = 3;

/// Minimum number of stacked layers (the stack is never empty).
pub const MIN_LAYERS: usize = 1;

/// Footprint falloff applied to each added layer.
pub const LAYER_SCALE_FALLOFF: f64 = 0.8;

/// Smallest footprint scale an added layer can shrink to.
pub const LAYER_SCALE_FLOOR: f64 = 0.4;

/// Maximum length of the decoration text, in characters.
pub const TEXT_MAX_CHARS: usize = 20;

/// Default layer and base color (vanilla pink).
pub const DEFAULT_BASE_COLOR: &str = "#f8cada";

/// Default accent color for fruit decorations (cherry red).
pub const DEFAULT_FRUIT_COLOR: &str = "#d63031";

/// Default text color.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Global atomic counter for unique layer ids.
static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a globally unique [`LayerId`].
fn alloc_layer_id() -> LayerId {
    LayerId(NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed))
}

/// Opaque identifier of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u64);

/// The cake size classes and their uniform scale multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// 0.8× scale.
    Small,
    /// 1.0× scale.
    #[default]
    Medium,
    /// 1.2× scale.
    Large,
}

impl SizeClass {
    /// Linear scale multiplier applied uniformly to the whole cake.
    pub fn multiplier(self) -> f64 {
        match self {
            SizeClass::Small => 0.8,
            SizeClass::Medium => 1.0,
            SizeClass::Large => 1.2,
        }
    }
}

/// Sponge flavors; each carries the layer color it cascades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    /// Vanilla sponge.
    #[default]
    Vanilla,
    /// Chocolate sponge.
    Chocolate,
    /// Red velvet sponge.
    RedVelvet,
    /// Matcha sponge.
    Matcha,
}

impl Flavor {
    /// The layer color this flavor cascades onto the stack.
    pub fn color(self) -> Rgb {
        let hex = match self {
            Flavor::Vanilla => DEFAULT_BASE_COLOR,
            Flavor::Chocolate => "#5d4037",
            Flavor::RedVelvet => "#c0392b",
            Flavor::Matcha => "#b8e994",
        };
        Rgb::from_hex(hex).expect("flavor color table")
    }
}

/// One vertically stacked tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Opaque identifier.
    pub id: LayerId,
    /// Sponge color.
    pub color: Rgb,
    /// Horizontal footprint multiplier relative to the base.
    pub scale: f64,
    /// Vertical multiplier (default 1).
    pub height: f64,
}

/// The complete cake design. Created with defaults at session start and
/// only replaced through the `with_*` transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CakeConfig {
    /// Base shape.
    pub shape: BaseShape,
    /// Size class.
    pub size: SizeClass,
    /// Sponge flavor.
    pub flavor: Flavor,
    /// Display mirror of the top layer's color.
    pub base_color: Rgb,
    /// Accent color for fruit decorations.
    pub fruit_color: Rgb,
    /// The layer stack, bottom to top. Never empty.
    pub layers: Vec<Layer>,
    /// Selected topping ids.
    pub toppings: BTreeSet<String>,
    /// Decoration text, at most [`TEXT_MAX_CHARS`] characters.
    pub text: String,
    /// Decoration text color.
    pub text_color: Rgb,
    /// Chocolate-pour overlay state.
    pub pour: PourState,
}

impl Default for CakeConfig {
    fn default() -> Self {
        let base_color = Rgb::from_hex(DEFAULT_BASE_COLOR).expect("default color");
        Self {
            shape: BaseShape::Round,
            size: SizeClass::Medium,
            flavor: Flavor::Vanilla,
            base_color,
            fruit_color: Rgb::from_hex(DEFAULT_FRUIT_COLOR).expect("default color"),
            layers: vec![Layer {
                id: alloc_layer_id(),
                color: base_color,
                scale: 1.0,
                height: 1.0,
            }],
            toppings: BTreeSet::new(),
            text: String::new(),
            text_color: Rgb::from_hex(DEFAULT_TEXT_COLOR).expect("default color"),
            pour: PourState::default(),
        }
    }
}

impl CakeConfig {
    /// The top layer. The stack is never empty, so this always exists.
    pub fn top_layer(&self) -> &Layer {
        self.layers.last().expect("stack is never empty")
    }

    /// Replace the base shape.
    pub fn with_shape(&self, shape: BaseShape) -> Self {
        Self {
            shape,
            ..self.clone()
        }
    }

    /// Replace the size class.
    pub fn with_size(&self, size: SizeClass) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Replace the flavor, cascading its color onto every layer and the
    /// display base color.
    pub fn with_flavor(&self, flavor: Flavor) -> Self {
        let color = flavor.color();
        let mut next = self.clone();
        next.flavor = flavor;
        next.base_color = color;
        for layer in &mut next.layers {
            layer.color = color;
        }
        next
    }

    /// Append a layer inheriting the top layer's color, with reduced
    /// footprint and default height. No-op at the layer cap.
    pub fn with_layer_added(&self) -> Self {
        if self.layers.len() >= MAX_LAYERS {
            return self.clone();
        }
        let top = self.top_layer();
        let mut next = self.clone();
        next.layers.push(Layer {
            id: alloc_layer_id(),
            color: top.color,
            scale: (top.scale * LAYER_SCALE_FALLOFF).max(LAYER_SCALE_FLOOR),
            height: 1.0,
        });
        next
    }

    /// Drop the top layer. No-op when only one layer remains.
    pub fn with_layer_removed(&self) -> Self {
        if self.layers.len() <= MIN_LAYERS {
            return self.clone();
        }
        let mut next = self.clone();
        next.layers.pop();
        next
    }

    /// Set one layer's height. Out-of-range index or a non-positive /
    /// non-finite value is a no-op.
    pub fn with_layer_height(&self, index: usize, height: f64) -> Self {
        if index >= self.layers.len() || !height.is_finite() || height <= 0.0 {
            return self.clone();
        }
        let mut next = self.clone();
        next.layers[index].height = height;
        next
    }

    /// Set the top layer's color, mirrored into the display base color.
    pub fn with_base_color(&self, color: Rgb) -> Self {
        let mut next = self.clone();
        next.base_color = color;
        if let Some(top) = next.layers.last_mut() {
            top.color = color;
        }
        next
    }

    /// Replace the fruit accent color.
    pub fn with_fruit_color(&self, color: Rgb) -> Self {
        let mut next = self.clone();
        next.fruit_color = color;
        next
    }

    /// Symmetric topping toggle: select if absent, deselect if present.
    pub fn with_topping_toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        if !next.toppings.remove(id) {
            next.toppings.insert(id.to_string());
        }
        next
    }

    /// Replace the decoration text, truncated to [`TEXT_MAX_CHARS`]
    /// characters.
    pub fn with_text(&self, text: &str) -> Self {
        let mut next = self.clone();
        next.text = text.chars().take(TEXT_MAX_CHARS).collect();
        next
    }

    /// Replace the decoration text color.
    pub fn with_text_color(&self, color: Rgb) -> Self {
        let mut next = self.clone();
        next.text_color = color;
        next
    }

    /// Begin the pour overlay.
    pub fn with_pour_started(&self) -> Self {
        let mut next = self.clone();
        next.pour = next.pour.started();
        next
    }

    /// Stop the pour overlay, keeping accumulated progress.
    pub fn with_pour_stopped(&self) -> Self {
        let mut next = self.clone();
        next.pour = next.pour.stopped();
        next
    }

    /// Advance the pour overlay by an elapsed-time delta.
    pub fn with_pour_advanced(&self, dt: f64) -> Self {
        let mut next = self.clone();
        next.pour = next.pour.advanced(dt);
        next
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CakeConfig::default();
        assert_eq!(config.shape, BaseShape::Round);
        assert_eq!(config.size, SizeClass::Medium);
        assert_eq!(config.layers.len(), 1);
        assert_eq!(config.layers[0].scale, 1.0);
        assert_eq!(config.layers[0].height, 1.0);
        assert_eq!(config.base_color.to_hex(), "#f8cada");
        assert!(config.toppings.is_empty());
        assert!(config.text.is_empty());
    }

    #[test]
    fn test_add_then_remove_is_identity_below_cap() {
        let config = CakeConfig::default();
        let roundtrip = config.with_layer_added().with_layer_removed();
        assert_eq!(roundtrip, config);
    }

    #[test]
    fn test_added_layer_inherits_and_shrinks() {
        let config = CakeConfig::default().with_layer_added();
        assert_eq!(config.layers.len(), 2);
        let top = config.top_layer();
        assert_eq!(top.scale, 0.8);
        assert_eq!(top.height, 1.0);
        assert_eq!(top.color, config.layers[0].color);
    }

    #[test]
    fn test_layer_scale_floor() {
        let mut config = CakeConfig::default();
        for _ in 0..MAX_LAYERS {
            config = config.with_layer_added();
        }
        for layer in &config.layers {
            assert!(layer.scale >= LAYER_SCALE_FLOOR);
        }
    }

    #[test]
    fn test_layer_cap_and_floor_are_noops() {
        let mut config = CakeConfig::default();
        for _ in 0..10 {
            config = config.with_layer_added();
        }
        assert_eq!(config.layers.len(), MAX_LAYERS);

        let mut config = CakeConfig::default();
        for _ in 0..10 {
            config = config.with_layer_removed();
        }
        assert_eq!(config.layers.len(), MIN_LAYERS);
    }

    #[test]
    fn test_layer_height_validation() {
        let config = CakeConfig::default();
        assert_eq!(config.with_layer_height(5, 2.0), config);
        assert_eq!(config.with_layer_height(0, 0.0), config);
        assert_eq!(config.with_layer_height(0, f64::NAN), config);
        let taller = config.with_layer_height(0, 1.5);
        assert_eq!(taller.layers[0].height, 1.5);
    }

    #[test]
    fn test_flavor_cascades_to_all_layers() {
        let config = CakeConfig::default()
            .with_layer_added()
            .with_flavor(Flavor::Chocolate);
        for layer in &config.layers {
            assert_eq!(layer.color.to_hex(), "#5d4037");
        }
        assert_eq!(config.base_color.to_hex(), "#5d4037");
    }

    #[test]
    fn test_base_color_hits_top_layer_only() {
        let pink = Rgb::from_hex("#f8cada").unwrap();
        let blue = Rgb::from_hex("#0984e3").unwrap();
        let config = CakeConfig::default()
            .with_layer_added()
            .with_base_color(blue);
        assert_eq!(config.top_layer().color, blue);
        assert_eq!(config.layers[0].color, pink);
        assert_eq!(config.base_color, blue);
    }

    #[test]
    fn test_topping_toggle_is_symmetric() {
        let config = CakeConfig::default();
        let once = config.with_topping_toggled("cherries");
        assert!(once.toppings.contains("cherries"));
        let twice = once.with_topping_toggled("cherries");
        assert_eq!(twice.toppings, config.toppings);
    }

    #[test]
    fn test_text_is_length_capped() {
        let config = CakeConfig::default().with_text("Happy Birthday dear Margaux!");
        assert_eq!(config.text.chars().count(), TEXT_MAX_CHARS);
        assert!(config.text.starts_with("Happy Birthday"));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = CakeConfig::default()
            .with_shape(BaseShape::Heart)
            .with_size(SizeClass::Large)
            .with_layer_added()
            .with_topping_toggled("sprinkles")
            .with_text("Bon anniversaire");
        let json = config.to_json().expect("serialize");
        let restored = CakeConfig::from_json(&json).expect("deserialize");
        assert_eq!(restored, config);
    }

    #[test]
    fn test_layer_ids_are_unique() {
        let config = CakeConfig::default().with_layer_added().with_layer_added();
        assert_ne!(config.layers[0].id, config.layers[1].id);
        assert_ne!(config.layers[1].id, config.layers[2].id);
    }
}
