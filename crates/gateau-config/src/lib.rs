#![warn(missing_docs)]

//! Cake configuration state, layer-stack accumulator, and metrics for the
//! gateau configurator core.
//!
//! [`CakeConfig`] is the single authoritative, serializable description of
//! a design. All mutation goes through named `with_*` transitions that
//! return a replacement value; inputs from constrained UI controls that
//! fall outside bounds are no-ops rather than errors.
//!
//! # Example
//!
//! ```
//! use gateau_config::{metrics, CakeConfig};
//!
//! let config = CakeConfig::default().with_layer_added();
//! assert_eq!(config.layers.len(), 2);
//! assert!(metrics::price(&config) > metrics::price(&CakeConfig::default()));
//! ```

pub mod metrics;
pub mod pour;
pub mod stack;
pub mod state;

pub use pour::{PourState, POUR_RATE, POUR_SATURATION};
pub use stack::{stack_layout, LayerSlot, StackLayout};
pub use state::{
    CakeConfig, Flavor, Layer, LayerId, SizeClass, LAYER_SCALE_FALLOFF, LAYER_SCALE_FLOOR,
    MAX_LAYERS, MIN_LAYERS, TEXT_MAX_CHARS,
};
