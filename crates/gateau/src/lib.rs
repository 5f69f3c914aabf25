#![warn(missing_docs)]

//! gateau — parametric cake configurator core.
//!
//! A [`Session`] owns the authoritative [`CakeConfig`], applies named
//! transitions, and keeps a derived [`Frame`] — layer transforms, placed
//! topping instances, text and glaze anchors — rebuilt eagerly on every
//! change so the rendering collaborator never observes stale placement
//! data. Weight, height, and price queries ride on the same layer data the
//! geometry uses.
//!
//! # Example
//!
//! ```
//! use gateau::Session;
//! use gateau_outline::BaseShape;
//!
//! let mut session = Session::seeded(1);
//! session.set_shape(BaseShape::Heart);
//! session.toggle_topping("cherries");
//! let frame = session.frame();
//! assert_eq!(frame.toppings.len(), 1);
//! assert!(session.price() > 24.0);
//! ```

use gateau_config::{
    metrics, stack_layout, CakeConfig, Flavor, SizeClass, MAX_LAYERS, MIN_LAYERS,
};
use gateau_decor::{resolve_definition, LayerTransform, PlacedInstance, PlacementKind};
use gateau_math::{Point3, Rgb};
use gateau_outline::BaseShape;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

mod frame;
mod snapshot;

pub use frame::{Frame, GlazeView, LayerView, PlacementGroup, TextView};
pub use snapshot::Snapshot;

/// Errors from restoring a serialized configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON payload could not be parsed.
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The restored layer stack violates its bounds.
    #[error("layer stack of {0} layers is out of bounds")]
    LayerBounds(usize),
}

/// Handle returned by [`Session::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CakeConfig)>;

/// An interactive configurator session.
///
/// Single-threaded and event-driven: the session is the only writer of its
/// configuration, every transition replaces the configuration value and
/// rebuilds the derived frame before returning, and per-frame animation is
/// advanced with [`Session::tick`] elapsed-time deltas.
pub struct Session {
    config: CakeConfig,
    frame: Frame,
    active_layer: Option<usize>,
    revision: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    snapshot: Snapshot,
    rng: StdRng,
}

impl Session {
    /// Create a session with the default configuration and an
    /// entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a session whose scatter placement is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Restore a session from a configuration serialized with
    /// [`CakeConfig::to_json`].
    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        let config = CakeConfig::from_json(json)?;
        let layers = config.layers.len();
        if !(MIN_LAYERS..=MAX_LAYERS).contains(&layers) {
            return Err(ConfigError::LayerBounds(layers));
        }
        let mut session = Self::new();
        session.config = config;
        session.rebuild();
        Ok(session)
    }

    fn with_rng(rng: StdRng) -> Self {
        let config = CakeConfig::default();
        let mut session = Self {
            frame: Frame::empty(),
            active_layer: None,
            revision: 0,
            listeners: Vec::new(),
            next_listener: 1,
            snapshot: Snapshot::Idle,
            rng,
            config,
        };
        session.rebuild();
        session
    }

    /// The current configuration.
    pub fn config(&self) -> &CakeConfig {
        &self.config
    }

    /// The derived render data for the current configuration.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Monotone counter bumped on every configuration change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Index of the layer side-mounted toppings attach to (clamped to the
    /// stack; follows the top layer until chosen explicitly).
    pub fn active_layer(&self) -> usize {
        let top = self.config.layers.len() - 1;
        match self.active_layer {
            Some(index) => index.min(top),
            None => top,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Replace the base shape.
    pub fn set_shape(&mut self, shape: BaseShape) {
        self.apply(|c| c.with_shape(shape));
    }

    /// Replace the size class.
    pub fn set_size(&mut self, size: SizeClass) {
        self.apply(|c| c.with_size(size));
    }

    /// Replace the flavor, cascading its color onto every layer.
    pub fn set_flavor(&mut self, flavor: Flavor) {
        self.apply(|c| c.with_flavor(flavor));
    }

    /// Append a layer; no-op at the cap.
    pub fn add_layer(&mut self) {
        self.apply(|c| c.with_layer_added());
    }

    /// Drop the top layer; no-op at the floor.
    pub fn remove_layer(&mut self) {
        self.apply(|c| c.with_layer_removed());
    }

    /// Set one layer's height; out-of-range input is a no-op.
    pub fn set_layer_height(&mut self, index: usize, height: f64) {
        self.apply(|c| c.with_layer_height(index, height));
    }

    /// Set the top layer's color.
    pub fn set_base_color(&mut self, color: Rgb) {
        self.apply(|c| c.with_base_color(color));
    }

    /// Set the fruit accent color.
    pub fn set_fruit_color(&mut self, color: Rgb) {
        self.apply(|c| c.with_fruit_color(color));
    }

    /// Toggle a topping selection.
    pub fn toggle_topping(&mut self, id: &str) {
        self.apply(|c| c.with_topping_toggled(id));
    }

    /// Replace the decoration text (length-capped).
    pub fn set_text(&mut self, text: &str) {
        self.apply(|c| c.with_text(text));
    }

    /// Replace the decoration text color.
    pub fn set_text_color(&mut self, color: Rgb) {
        self.apply(|c| c.with_text_color(color));
    }

    /// Begin the chocolate pour.
    pub fn start_pour(&mut self) {
        self.apply(|c| c.with_pour_started());
    }

    /// Stop the chocolate pour.
    pub fn stop_pour(&mut self) {
        self.apply(|c| c.with_pour_stopped());
    }

    /// Reset to the default configuration.
    pub fn reset(&mut self) {
        self.apply(|_| CakeConfig::default());
    }

    /// Choose the layer side-mounted toppings attach to (clamped).
    pub fn set_active_layer(&mut self, index: usize) {
        self.active_layer = Some(index.min(self.config.layers.len() - 1));
        self.rebuild();
    }

    /// Advance per-frame animation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        let next = self.config.with_pour_advanced(dt);
        if next.pour != self.config.pour {
            self.apply(move |_| next);
        }
    }

    // =========================================================================
    // Metrics boundary
    // =========================================================================

    /// Estimated weight in kilograms.
    pub fn weight(&self) -> f64 {
        metrics::weight(&self.config)
    }

    /// Total stack height in centimeters.
    pub fn total_height(&self) -> f64 {
        metrics::total_height(&self.config)
    }

    /// Price estimate in currency units.
    pub fn price(&self) -> f64 {
        metrics::price(&self.config)
    }

    // =========================================================================
    // Snapshot boundary
    // =========================================================================

    /// Ask the rendering collaborator for a still capture of the next
    /// frame.
    pub fn request_snapshot(&mut self) {
        self.snapshot = Snapshot::Pending;
    }

    /// Called by the rendering collaborator with the capture result.
    /// `None` marks a failed capture; it is not retried.
    pub fn submit_snapshot(&mut self, data: Option<Vec<u8>>) {
        self.snapshot = match data {
            Some(bytes) => Snapshot::Ready(bytes),
            None => Snapshot::Failed,
        };
    }

    /// Current snapshot state, without consuming it.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Hand the snapshot outcome to the order collaborator, re-arming the
    /// slot.
    pub fn take_snapshot(&mut self) -> Snapshot {
        std::mem::replace(&mut self.snapshot, Snapshot::Idle)
    }

    // =========================================================================
    // Change notification
    // =========================================================================

    /// Register a callback invoked after every configuration change.
    pub fn subscribe(&mut self, listener: impl FnMut(&CakeConfig) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn apply(&mut self, transition: impl FnOnce(&CakeConfig) -> CakeConfig) {
        self.config = transition(&self.config);
        self.revision += 1;
        self.rebuild();
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in &mut listeners {
            listener(&self.config);
        }
        self.listeners.extend(listeners);
    }

    /// Recompute the derived frame from the current configuration. The
    /// stack layout computed here anchors both the layer transforms and the
    /// decoration placement.
    fn rebuild(&mut self) {
        let config = &self.config;
        let shape = config.shape;
        let layout = stack_layout(&config.layers);
        let top_index = config.layers.len() - 1;
        let active = self
            .active_layer
            .map_or(top_index, |index| index.min(top_index));

        let layers: Vec<LayerView> = config
            .layers
            .iter()
            .zip(&layout.slots)
            .map(|(layer, slot)| LayerView {
                id: layer.id,
                color: layer.color,
                height: layer.height,
                footprint: layer.scale,
                transform: LayerTransform::new(shape, layer.scale, layer.height, slot.y_center),
            })
            .collect();

        let top = config.top_layer();
        let top_scale = top.scale;

        let mut toppings = Vec::new();
        for id in &config.toppings {
            let Some(def) = gateau_decor::find(id) else {
                continue;
            };
            let mut instances = resolve_definition(def, shape, &mut self.rng);
            if def.placement == PlacementKind::Side {
                let slot = layout.slots[active];
                let wall_scale = config.layers[active].scale;
                for inst in &mut instances {
                    attach(inst, wall_scale, slot.y_center, slot.height);
                }
            } else {
                for inst in &mut instances {
                    attach(inst, top_scale, layout.top, top_scale);
                }
            }
            toppings.push(PlacementGroup {
                id: id.clone(),
                visual: def.visual,
                placement: def.placement,
                instances,
            });
        }

        let text = (!config.text.is_empty()).then(|| TextView {
            content: config.text.clone(),
            y: layout.top + frame::TEXT_CLEARANCE,
            size: frame::TEXT_SIZE * top_scale,
            color: config.text_color,
        });

        let glaze = (config.pour.pouring || config.pour.progress > 0.0).then(|| {
            let slot = *layout.slots.last().expect("stack is never empty");
            GlazeView {
                progress: config.pour.progress,
                transform: LayerTransform::new(
                    shape,
                    top_scale * frame::GLAZE_SCALE,
                    slot.height,
                    slot.y_center,
                ),
            }
        });

        self.frame = Frame {
            root_scale: config.size.multiplier(),
            layers,
            toppings,
            top_y: layout.top,
            text,
            glaze,
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Move a resolved instance from its anchor frame into stack space:
/// horizontal coordinates and scale follow the mount's footprint, the
/// vertical clearance follows the mount's vertical extent.
fn attach(inst: &mut PlacedInstance, footprint: f64, base_y: f64, vertical: f64) {
    inst.position = Point3::new(
        inst.position.x * footprint,
        base_y + inst.position.y * vertical,
        inst.position.z * footprint,
    );
    inst.scale *= footprint;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gateau_decor::resolve::{PLACEMENT_CLEARANCE, SCATTER_CLEARANCE};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_default_session_frame() {
        let session = Session::seeded(1);
        let frame = session.frame();
        assert_eq!(frame.layers.len(), 1);
        assert_relative_eq!(frame.top_y, 1.0);
        assert_relative_eq!(frame.root_scale, 1.0);
        assert!(frame.toppings.is_empty());
        assert!(frame.text.is_none());
        assert!(frame.glaze.is_none());
    }

    #[test]
    fn test_non_side_toppings_anchor_at_stack_top() {
        let mut session = Session::seeded(2);
        session.add_layer();
        session.toggle_topping("cherries");
        let frame = session.frame();
        let group = &frame.toppings[0];
        let top_scale = session.config().top_layer().scale;
        for inst in &group.instances {
            assert_relative_eq!(
                inst.position.y,
                frame.top_y + PLACEMENT_CLEARANCE * top_scale,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_side_toppings_anchor_at_active_layer() {
        let mut session = Session::seeded(3);
        session.add_layer();
        session.set_active_layer(0);
        session.toggle_topping("kitkat");
        let frame = session.frame();
        let group = frame
            .toppings
            .iter()
            .find(|g| g.placement == PlacementKind::Side)
            .unwrap();
        let slot_center = 0.5; // bottom layer, height 1
        for inst in &group.instances {
            assert_relative_eq!(
                inst.position.y,
                slot_center + PLACEMENT_CLEARANCE,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_side_toppings_default_to_top_layer() {
        let mut session = Session::seeded(13);
        session.toggle_topping("kitkat");
        session.add_layer();
        assert_eq!(session.active_layer(), 1);
        let frame = session.frame();
        // Top layer slot center = 1.5, vertical extent 1.
        for inst in &frame.toppings[0].instances {
            assert_relative_eq!(
                inst.position.y,
                1.5 + PLACEMENT_CLEARANCE,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_active_layer_clamps_after_removal() {
        let mut session = Session::seeded(14);
        session.add_layer();
        session.set_active_layer(1);
        session.remove_layer();
        assert_eq!(session.active_layer(), 0);
    }

    #[test]
    fn test_scatter_clearance_scales_with_top_layer() {
        let mut session = Session::seeded(4);
        session.toggle_topping("sprinkles");
        let frame = session.frame();
        for inst in &frame.toppings[0].instances {
            assert_relative_eq!(inst.position.y, frame.top_y + SCATTER_CLEARANCE);
        }
    }

    #[test]
    fn test_unknown_topping_contributes_nothing() {
        let mut session = Session::seeded(5);
        session.toggle_topping("motor_oil");
        assert!(session.frame().toppings.is_empty());
        // The selection itself is kept; it simply resolves to no instances.
        assert!(session.config().toppings.contains("motor_oil"));
    }

    #[test]
    fn test_frame_rebuilds_on_every_change() {
        let mut session = Session::seeded(6);
        let r0 = session.revision();
        session.set_size(SizeClass::Large);
        assert_eq!(session.revision(), r0 + 1);
        assert_relative_eq!(session.frame().root_scale, 1.2);
        session.add_layer();
        assert_eq!(session.frame().layers.len(), 2);
        assert_relative_eq!(session.frame().top_y, 2.0);
    }

    #[test]
    fn test_listeners_fire_and_unsubscribe() {
        let mut session = Session::seeded(7);
        let seen = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&seen);
        let id = session.subscribe(move |_| *counter.borrow_mut() += 1);
        session.add_layer();
        session.set_text("hi");
        assert_eq!(*seen.borrow(), 2);
        session.unsubscribe(id);
        session.remove_layer();
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn test_text_view_follows_top_layer() {
        let mut session = Session::seeded(8);
        session.add_layer();
        session.set_text("Joyeux anniversaire");
        let frame = session.frame();
        let text = frame.text.as_ref().unwrap();
        assert_relative_eq!(text.y, frame.top_y + frame::TEXT_CLEARANCE);
        assert_relative_eq!(text.size, frame::TEXT_SIZE * 0.8);
    }

    #[test]
    fn test_pour_tick_drives_glaze() {
        let mut session = Session::seeded(9);
        assert!(session.frame().glaze.is_none());
        session.start_pour();
        session.tick(1.0);
        let glaze = session.frame().glaze.as_ref().unwrap();
        assert_relative_eq!(glaze.progress, 0.2);
        // Saturation auto-stops and clamps.
        session.tick(100.0);
        assert!(!session.config().pour.pouring);
        assert_relative_eq!(session.frame().glaze.as_ref().unwrap().progress, 1.0);
        // Idle ticks change nothing.
        let r = session.revision();
        session.tick(1.0);
        assert_eq!(session.revision(), r);
    }

    #[test]
    fn test_snapshot_failure_is_distinct_sentinel() {
        let mut session = Session::seeded(10);
        assert_eq!(*session.snapshot(), Snapshot::Idle);
        session.request_snapshot();
        assert_eq!(*session.snapshot(), Snapshot::Pending);
        session.submit_snapshot(None);
        assert_eq!(*session.snapshot(), Snapshot::Failed);
        assert_eq!(session.take_snapshot(), Snapshot::Failed);
        assert_eq!(*session.snapshot(), Snapshot::Idle);

        session.request_snapshot();
        session.submit_snapshot(Some(vec![1, 2, 3]));
        assert_eq!(session.take_snapshot(), Snapshot::Ready(vec![1, 2, 3]));
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let build = || {
            let mut s = Session::seeded(42);
            s.toggle_topping("choco_chips");
            s.frame().toppings[0].instances.clone()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_metrics_pass_through() {
        let session = Session::seeded(11);
        assert_relative_eq!(session.price(), 24.0);
        assert_relative_eq!(session.weight(), 0.8);
        assert_relative_eq!(session.total_height(), 5.0);
    }

    #[test]
    fn test_config_json_restore() {
        let mut session = Session::seeded(15);
        session.set_shape(BaseShape::Square);
        session.add_layer();
        session.toggle_topping("oreo");
        let json = session.config().to_json().unwrap();

        let restored = Session::from_config_json(&json).unwrap();
        assert_eq!(restored.config(), session.config());
        assert_eq!(restored.frame().layers.len(), 2);

        assert!(matches!(
            Session::from_config_json("{not json"),
            Err(ConfigError::Malformed(_))
        ));

        let mut hollow = session.config().clone();
        hollow.layers.clear();
        assert!(matches!(
            Session::from_config_json(&hollow.to_json().unwrap()),
            Err(ConfigError::LayerBounds(0))
        ));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = Session::seeded(12);
        session.set_shape(BaseShape::Star);
        session.add_layer();
        session.reset();
        assert_eq!(session.config().shape, BaseShape::Round);
        assert_eq!(session.config().layers.len(), 1);
    }
}
