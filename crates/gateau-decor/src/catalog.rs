//! Static topping catalog.
//!
//! Every selectable topping resolves here to exactly one definition:
//! placement strategy, visual (an opaque model asset path or a procedural
//! primitive), base color, scale, and optional layout overrides. Unknown
//! ids resolve to nothing and are a silent no-op throughout the engine.

use std::sync::OnceLock;

use gateau_math::Rgb;
use serde::{Deserialize, Serialize};

use crate::distribute::PlacementKind;

/// Catalog grouping shown by the configurator UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToppingCategory {
    /// Fresh fruit.
    Fruit,
    /// Chocolate work.
    Chocolate,
    /// Nuts.
    Nuts,
    /// Confectionery.
    Candy,
    /// Occasion extras (candles and the like).
    Special,
}

/// Base color of a topping's instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToppingColor {
    /// Every instance uses this color.
    Fixed(Rgb),
    /// Each instance draws a random hue (sprinkle-style variety).
    Multi,
}

/// Procedural stand-in geometry for toppings without a model asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Plain sphere.
    Sphere,
    /// Capsule (sprinkle grain).
    Capsule,
    /// Piped cream swirl.
    RoseSwirl,
    /// Wax candle with wick and flame.
    Candle,
}

/// How one topping is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToppingVisual {
    /// External model asset, keyed by path. Opaque to the engine.
    Model(&'static str),
    /// Procedural primitive.
    Primitive(PrimitiveKind),
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct ToppingDefinition {
    /// Stable identifier stored in configurations.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Catalog grouping.
    pub category: ToppingCategory,
    /// Distribution strategy.
    pub placement: PlacementKind,
    /// Instance color.
    pub color: ToppingColor,
    /// Instance visual.
    pub visual: ToppingVisual,
    /// Uniform instance scale before jitter.
    pub scale: f64,
    /// Extra rotation about the vertical axis, radians.
    pub rotation_offset: f64,
    /// Instance-count override for scatter/side layouts.
    pub count: Option<usize>,
    /// Ring-radius override for round-base layouts.
    pub radius: Option<f64>,
    /// Extra vertical offset on top of the placement clearance.
    pub y_offset: f64,
}

impl ToppingDefinition {
    fn model(
        id: &'static str,
        label: &'static str,
        category: ToppingCategory,
        placement: PlacementKind,
        color: ToppingColor,
        path: &'static str,
        scale: f64,
    ) -> Self {
        Self {
            id,
            label,
            category,
            placement,
            color,
            visual: ToppingVisual::Model(path),
            scale,
            rotation_offset: 0.0,
            count: None,
            radius: None,
            y_offset: 0.0,
        }
    }
}

fn build_catalog() -> Vec<ToppingDefinition> {
    use PlacementKind::*;
    use ToppingCategory::*;

    let fixed = |hex: &str| ToppingColor::Fixed(Rgb::from_hex(hex).expect("catalog color"));

    vec![
        // Fruit
        ToppingDefinition::model(
            "cherries",
            "Cherries",
            Fruit,
            Perimeter,
            fixed("#d63031"),
            "models/cherries.glb",
            0.3,
        ),
        ToppingDefinition::model(
            "strawberry",
            "Strawberries",
            Fruit,
            Perimeter,
            fixed("#e84393"),
            "models/strawberry.glb",
            0.35,
        ),
        ToppingDefinition::model(
            "kiwi",
            "Kiwi Slices",
            Fruit,
            Surface,
            fixed("#78e08f"),
            "models/kiwi.glb",
            0.3,
        ),
        ToppingDefinition::model(
            "pineapple",
            "Pineapple",
            Fruit,
            Perimeter,
            fixed("#f6b93b"),
            "models/pineapple.glb",
            0.35,
        ),
        // Chocolate
        ToppingDefinition::model(
            "choco_chips",
            "Chocolate Chips",
            Chocolate,
            Scatter,
            fixed("#5d4037"),
            "models/choco_chips.glb",
            0.12,
        ),
        ToppingDefinition::model(
            "fudge_cubes",
            "Fudge Cubes",
            Chocolate,
            Scatter,
            fixed("#4e342e"),
            "models/fudge_cubes.glb",
            0.18,
        ),
        ToppingDefinition::model(
            "kitkat",
            "Wafer Fingers",
            Chocolate,
            Side,
            fixed("#6d4c41"),
            "models/kitkat.glb",
            0.4,
        ),
        ToppingDefinition::model(
            "oreo",
            "Cookie Discs",
            Chocolate,
            Surface,
            fixed("#3e2723"),
            "models/oreo.glb",
            0.25,
        ),
        ToppingDefinition::model(
            "ferrero",
            "Hazelnut Pralines",
            Chocolate,
            Perimeter,
            fixed("#8d6e63"),
            "models/ferrero.glb",
            0.3,
        ),
        // Nuts
        ToppingDefinition::model(
            "almonds",
            "Almonds",
            Nuts,
            Scatter,
            fixed("#c8a165"),
            "models/almonds.glb",
            0.15,
        ),
        ToppingDefinition::model(
            "cashews",
            "Cashews",
            Nuts,
            Scatter,
            fixed("#d7b98e"),
            "models/cashews.glb",
            0.15,
        ),
        // Candy
        ToppingDefinition {
            id: "sprinkles",
            label: "Sprinkles",
            category: Candy,
            placement: Scatter,
            color: ToppingColor::Multi,
            visual: ToppingVisual::Primitive(PrimitiveKind::Capsule),
            scale: 0.04,
            rotation_offset: 0.0,
            count: Some(150),
            radius: Some(1.4),
            y_offset: 0.0,
        },
        ToppingDefinition {
            id: "sugar_pearls",
            label: "Sugar Pearls",
            category: Candy,
            placement: Scatter,
            color: fixed("#f5f6fa"),
            visual: ToppingVisual::Primitive(PrimitiveKind::Sphere),
            scale: 0.05,
            rotation_offset: 0.0,
            count: Some(60),
            radius: None,
            y_offset: 0.0,
        },
        ToppingDefinition::model(
            "macarons",
            "Macarons",
            Candy,
            Perimeter,
            fixed("#f8a5c2"),
            "models/macarons.glb",
            0.35,
        ),
        ToppingDefinition {
            id: "rose",
            label: "Piped Rose",
            category: Candy,
            placement: Center,
            color: fixed("#f78fb3"),
            visual: ToppingVisual::Primitive(PrimitiveKind::RoseSwirl),
            scale: 0.4,
            rotation_offset: 0.0,
            count: None,
            radius: None,
            y_offset: 0.0,
        },
        // Special
        ToppingDefinition {
            id: "candles",
            label: "Candles",
            category: Special,
            placement: Perimeter,
            color: fixed("#fdf5e6"),
            visual: ToppingVisual::Primitive(PrimitiveKind::Candle),
            scale: 0.08,
            rotation_offset: 0.0,
            count: None,
            radius: Some(0.8),
            y_offset: 0.0,
        },
    ]
}

/// The full catalog, in display order.
pub fn catalog() -> &'static [ToppingDefinition] {
    static CATALOG: OnceLock<Vec<ToppingDefinition>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Look up one definition by id.
pub fn find(id: &str) -> Option<&'static ToppingDefinition> {
    catalog().iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let defs = catalog();
        for (i, a) in defs.iter().enumerate() {
            for b in &defs[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("cherries").is_some());
        assert!(find("sprinkles").is_some());
        assert!(find("motor_oil").is_none());
    }

    #[test]
    fn test_sprinkles_overrides() {
        let def = find("sprinkles").unwrap();
        assert_eq!(def.count, Some(150));
        assert_eq!(def.radius, Some(1.4));
        assert_eq!(def.color, ToppingColor::Multi);
    }

    #[test]
    fn test_every_placement_kind_represented() {
        for kind in [
            PlacementKind::Scatter,
            PlacementKind::Perimeter,
            PlacementKind::Center,
            PlacementKind::Side,
            PlacementKind::Surface,
        ] {
            assert!(
                catalog().iter().any(|d| d.placement == kind),
                "{kind:?} missing from catalog"
            );
        }
    }
}
