//! Weight, height, and price estimates.
//!
//! Pure functions over the configuration, derived from the same layer and
//! size data the geometry uses. The size surcharge multiplies the base and
//! per-layer cost; topping and text add-ons are applied after it.

use crate::state::{CakeConfig, SizeClass};

/// Mass per unit of scaled layer volume, in kilograms.
pub const DENSITY_KG: f64 = 0.8;

/// Physical height of one layer-height unit, in centimeters.
pub const UNIT_HEIGHT_CM: f64 = 5.0;

/// List price of the standard cake before layers and surcharge.
pub const BASE_PRICE: f64 = 10.0;

/// Price per unit of layer scale × height.
pub const LAYER_RATE: f64 = 10.0;

/// Flat price per selected topping.
pub const TOPPING_PRICE: f64 = 5.0;

/// Flat price when decoration text is present.
pub const TEXT_PRICE: f64 = 5.0;

/// Multiplicative size surcharge on the base + layer cost.
pub fn size_surcharge(size: SizeClass) -> f64 {
    match size {
        SizeClass::Small => 1.0,
        SizeClass::Medium => 1.2,
        SizeClass::Large => 1.5,
    }
}

/// Estimated weight in kilograms.
pub fn weight(config: &CakeConfig) -> f64 {
    let mult = config.size.multiplier();
    let volume: f64 = config
        .layers
        .iter()
        .map(|l| (l.scale * mult).powi(2) * l.height)
        .sum();
    volume * DENSITY_KG
}

/// Total stack height in centimeters.
pub fn total_height(config: &CakeConfig) -> f64 {
    let units: f64 = config.layers.iter().map(|l| l.height).sum();
    units * UNIT_HEIGHT_CM * config.size.multiplier()
}

/// Price estimate in currency units.
pub fn price(config: &CakeConfig) -> f64 {
    let mut price = BASE_PRICE;
    for layer in &config.layers {
        price += LAYER_RATE * layer.scale * layer.height;
    }
    price *= size_surcharge(config.size);
    price += config.toppings.len() as f64 * TOPPING_PRICE;
    if !config.text.is_empty() {
        price += TEXT_PRICE;
    }
    price
}
