#![warn(missing_docs)]

//! Topping placement engine for the gateau configurator core.
//!
//! Consumes a base shape and a topping selection, produces world-space
//! placement instances. Three pieces:
//!
//! - [`world`] — the outline-space to world-space mapping per base shape,
//!   including the load-bearing per-shape offset table;
//! - [`distribute`] — the five layout strategies (scatter, perimeter,
//!   center, side, surface) behind a single dispatch;
//! - [`catalog`] + [`resolve`] — the static topping catalog and the
//!   resolver that turns a selected id into [`PlacedInstance`] lists.
//!
//! Scatter-style strategies draw from an injected [`rand::Rng`]; pass a
//! seeded source (e.g. `ChaCha8Rng`) when output must be reproducible.

pub mod catalog;
pub mod distribute;
pub mod resolve;
pub mod world;

pub use catalog::{
    catalog, find, PrimitiveKind, ToppingCategory, ToppingColor, ToppingDefinition, ToppingVisual,
};
pub use distribute::{DistributeParams, PlacementKind, Sample};
pub use resolve::{resolve, resolve_definition, PlacedInstance};
pub use world::{is_extruded, shape_offset, to_world, LayerTransform, TOP_Y};
