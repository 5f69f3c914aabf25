//! Point-distribution strategies.
//!
//! Each placement kind is a pure layout function from a base shape and its
//! outline to a sequence of silhouette-space samples. Strategy selection is
//! a tagged dispatch on [`PlacementKind`]; every strategy satisfies the
//! single [`PlacementKind::distribute`] capability.
//!
//! Scatter and surface draw from the caller's random source. Pass a seeded
//! generator for reproducible output; layout math itself is deterministic.

use std::f64::consts::PI;

use gateau_math::Point2;
use gateau_outline::{BaseShape, Outline};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default scatter instance count.
pub const SCATTER_COUNT: usize = 30;
/// Default scatter radius on the round base.
pub const SCATTER_RADIUS: f64 = 1.2;
/// Side length of the scatter region on the square base.
pub const SCATTER_SQUARE_SIDE: f64 = 2.4;
/// Rejection-sampling attempt bound for arbitrary outlines.
pub const REJECTION_ATTEMPTS: usize = 50;

/// Instance count for perimeter rings.
pub const PERIMETER_COUNT: usize = 12;
/// Default perimeter ring radius on the round base.
pub const PERIMETER_RADIUS: f64 = 1.2;
/// Half-extent of the perimeter walk on the square base.
pub const PERIMETER_SQUARE_HALF: f64 = 1.1;

/// Default side-mount instance count.
pub const SIDE_COUNT: usize = 20;
/// Default side-mount radius: flush against the round base's side wall.
pub const SIDE_RADIUS: f64 = 1.55;
/// Half-extent of the side-mount walk on the square base.
pub const SIDE_SQUARE_HALF: f64 = 1.35;

/// Outer radius covered by concentric surface rings on the round base.
pub const SURFACE_MAX_RADIUS: f64 = 1.35;
/// Nominal footprint radius of one surface item.
pub const SURFACE_ITEM_RADIUS: f64 = 0.25;
/// Ring spacing as a multiple of the item footprint radius.
pub const SURFACE_SPACING_FACTOR: f64 = 2.2;
/// Side length of the surface grid on the square base.
pub const SURFACE_GRID_SIZE: f64 = 2.4;
/// Grid step of the surface fill on the square base.
pub const SURFACE_GRID_STEP: f64 = 0.5;
/// Scatter count used when a surface fill falls back to scatter.
pub const SURFACE_FALLBACK_COUNT: usize = 80;

/// Visual center of the heart silhouette (sits within the body, not at the
/// geometric origin).
pub const HEART_CENTER: (f64, f64) = (0.5, 0.8);

/// Distribution strategy tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    /// Random scatter across the top face.
    Scatter,
    /// Evenly spaced ring just inside the rim.
    Perimeter,
    /// A single visually centered instance.
    Center,
    /// Ring flush against the vertical side wall, instances facing outward.
    Side,
    /// Dense full-coverage fill of the top face.
    Surface,
}

/// One silhouette-space placement sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Silhouette-space X.
    pub x: f64,
    /// Silhouette-space Y.
    pub y: f64,
    /// Rotation about the vertical axis, radians.
    pub rotation: f64,
    /// Per-instance scale jitter; 1.0 where the strategy applies none.
    pub jitter: f64,
}

impl Sample {
    fn at(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            rotation,
            jitter: 1.0,
        }
    }
}

/// Per-call overrides from a topping definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributeParams {
    /// Instance count override.
    pub count: Option<usize>,
    /// Ring radius override (round-base perimeter/side/scatter).
    pub radius: Option<f64>,
}

impl PlacementKind {
    /// Run the strategy for `shape`, returning silhouette-space samples.
    pub fn distribute<R: Rng + ?Sized>(
        self,
        shape: BaseShape,
        outline: &Outline,
        params: &DistributeParams,
        rng: &mut R,
    ) -> Vec<Sample> {
        match self {
            PlacementKind::Scatter => scatter(shape, outline, params, rng),
            PlacementKind::Perimeter => perimeter(shape, outline, params),
            PlacementKind::Center => center(shape),
            PlacementKind::Side => side(shape, outline, params),
            PlacementKind::Surface => surface(shape, outline, rng),
        }
    }
}

/// Uniform random point inside the outline's bounding box, accepted by the
/// containment test. Bounded: after [`REJECTION_ATTEMPTS`] the last
/// attempted point is returned even if outside.
fn sample_in_outline<R: Rng + ?Sized>(outline: &Outline, rng: &mut R) -> Point2 {
    let (min, max) = outline.bounding_box();
    let mut last = min;
    for _ in 0..REJECTION_ATTEMPTS {
        let p = Point2::new(
            min.x + rng.gen::<f64>() * (max.x - min.x),
            min.y + rng.gen::<f64>() * (max.y - min.y),
        );
        if outline.contains(&p) {
            return p;
        }
        last = p;
    }
    last
}

fn scatter<R: Rng + ?Sized>(
    shape: BaseShape,
    outline: &Outline,
    params: &DistributeParams,
    rng: &mut R,
) -> Vec<Sample> {
    let count = params.count.unwrap_or(SCATTER_COUNT);
    let mut samples = Vec::with_capacity(count);
    for _ in 0..count {
        let p = match shape {
            BaseShape::Round => {
                // r = R·√u keeps areal density uniform across the disk.
                let radius = params.radius.unwrap_or(SCATTER_RADIUS);
                let r = radius * rng.gen::<f64>().sqrt();
                let theta = rng.gen::<f64>() * 2.0 * PI;
                Point2::new(r * theta.cos(), r * theta.sin())
            }
            BaseShape::Square => Point2::new(
                (rng.gen::<f64>() - 0.5) * SCATTER_SQUARE_SIDE,
                (rng.gen::<f64>() - 0.5) * SCATTER_SQUARE_SIDE,
            ),
            _ => sample_in_outline(outline, rng),
        };
        samples.push(Sample {
            x: p.x,
            y: p.y,
            rotation: 0.0,
            jitter: rng.gen::<f64>(),
        });
    }
    samples
}

fn perimeter(shape: BaseShape, outline: &Outline, params: &DistributeParams) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(PERIMETER_COUNT);
    match shape {
        BaseShape::Round => {
            let radius = params.radius.unwrap_or(PERIMETER_RADIUS);
            for i in 0..PERIMETER_COUNT {
                let theta = i as f64 / PERIMETER_COUNT as f64 * 2.0 * PI;
                samples.push(Sample::at(
                    radius * theta.cos(),
                    radius * theta.sin(),
                    -theta,
                ));
            }
        }
        BaseShape::Square => {
            let walk = Outline::Square {
                half: PERIMETER_SQUARE_HALF,
            };
            for i in 0..PERIMETER_COUNT {
                let p = walk.point_at(i as f64 / PERIMETER_COUNT as f64);
                samples.push(Sample::at(p.x, p.y, 0.0));
            }
        }
        _ => {
            if outline.is_empty() {
                return samples;
            }
            for i in 0..PERIMETER_COUNT {
                let p = outline.point_at(i as f64 / PERIMETER_COUNT as f64);
                samples.push(Sample::at(p.x, p.y, 0.0));
            }
        }
    }
    samples
}

fn center(shape: BaseShape) -> Vec<Sample> {
    let (x, y) = match shape {
        BaseShape::Heart => HEART_CENTER,
        _ => (0.0, 0.0),
    };
    vec![Sample::at(x, y, 0.0)]
}

fn side(shape: BaseShape, outline: &Outline, params: &DistributeParams) -> Vec<Sample> {
    let count = params.count.unwrap_or(SIDE_COUNT);
    let mut samples = Vec::with_capacity(count);
    match shape {
        BaseShape::Round => {
            let radius = params.radius.unwrap_or(SIDE_RADIUS);
            for i in 0..count {
                let theta = i as f64 / count as f64 * 2.0 * PI;
                samples.push(Sample::at(
                    radius * theta.cos(),
                    radius * theta.sin(),
                    -theta,
                ));
            }
        }
        BaseShape::Square => {
            let walk = Outline::Square {
                half: SIDE_SQUARE_HALF,
            };
            for i in 0..count {
                let t = i as f64 / count as f64;
                let p = walk.point_at(t);
                // One outward-facing rotation per wall.
                let rotation = match (t * 4.0) as u32 {
                    0 => 0.0,
                    1 => -PI / 2.0,
                    2 => -PI,
                    _ => -PI * 1.5,
                };
                samples.push(Sample::at(p.x, p.y, rotation));
            }
        }
        _ => {
            if outline.is_empty() {
                return samples;
            }
            for i in 0..count {
                let p = outline.point_at(i as f64 / count as f64);
                let next = outline.point_at(((i + 1) % count) as f64 / count as f64);
                // Tangent estimated from the direction to the next sample.
                let angle = (next.y - p.y).atan2(next.x - p.x);
                samples.push(Sample::at(p.x, p.y, -angle));
            }
        }
    }
    samples
}

fn surface<R: Rng + ?Sized>(shape: BaseShape, outline: &Outline, rng: &mut R) -> Vec<Sample> {
    match shape {
        BaseShape::Round => {
            let mut samples = vec![Sample::at(0.0, 0.0, 0.0)];
            let spacing = SURFACE_ITEM_RADIUS * SURFACE_SPACING_FACTOR;
            let mut ring_radius = spacing;
            while ring_radius < SURFACE_MAX_RADIUS {
                let circumference = 2.0 * PI * ring_radius;
                let in_ring = (circumference / spacing).floor() as usize;
                for i in 0..in_ring {
                    let theta = i as f64 / in_ring as f64 * 2.0 * PI;
                    samples.push(Sample::at(
                        ring_radius * theta.cos(),
                        ring_radius * theta.sin(),
                        rng.gen::<f64>() * PI,
                    ));
                }
                ring_radius += spacing;
            }
            samples
        }
        BaseShape::Square => {
            let per_axis = (SURFACE_GRID_SIZE / SURFACE_GRID_STEP).floor() as usize + 1;
            let mut samples = Vec::with_capacity(per_axis * per_axis);
            for ix in 0..per_axis {
                for iy in 0..per_axis {
                    samples.push(Sample::at(
                        -SURFACE_GRID_SIZE / 2.0 + ix as f64 * SURFACE_GRID_STEP,
                        -SURFACE_GRID_SIZE / 2.0 + iy as f64 * SURFACE_GRID_STEP,
                        rng.gen::<f64>() * PI,
                    ));
                }
            }
            samples
        }
        _ => {
            let mut samples = Vec::with_capacity(SURFACE_FALLBACK_COUNT);
            for _ in 0..SURFACE_FALLBACK_COUNT {
                let p = sample_in_outline(outline, rng);
                samples.push(Sample {
                    x: p.x,
                    y: p.y,
                    rotation: 0.0,
                    jitter: rng.gen::<f64>(),
                });
            }
            samples
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_scatter_count_honored_for_every_shape() {
        let mut rng = rng();
        for shape in BaseShape::ALL {
            let outline = Outline::of(shape);
            let samples = PlacementKind::Scatter.distribute(
                shape,
                &outline,
                &DistributeParams::default(),
                &mut rng,
            );
            assert_eq!(samples.len(), SCATTER_COUNT, "{shape:?}");
        }
    }

    #[test]
    fn test_scatter_round_stays_in_radius() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::Round);
        for s in PlacementKind::Scatter.distribute(
            BaseShape::Round,
            &outline,
            &DistributeParams::default(),
            &mut rng,
        ) {
            assert!(s.x * s.x + s.y * s.y <= SCATTER_RADIUS * SCATTER_RADIUS + 1e-12);
        }
    }

    #[test]
    fn test_scatter_square_stays_in_footprint() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::Square);
        for s in PlacementKind::Scatter.distribute(
            BaseShape::Square,
            &outline,
            &DistributeParams::default(),
            &mut rng,
        ) {
            assert!(s.x.abs() <= SCATTER_SQUARE_SIDE / 2.0);
            assert!(s.y.abs() <= SCATTER_SQUARE_SIDE / 2.0);
        }
    }

    #[test]
    fn test_scatter_seeded_is_reproducible() {
        let outline = Outline::of(BaseShape::Heart);
        let a = PlacementKind::Scatter.distribute(
            BaseShape::Heart,
            &outline,
            &DistributeParams::default(),
            &mut rng(),
        );
        let b = PlacementKind::Scatter.distribute(
            BaseShape::Heart,
            &outline,
            &DistributeParams::default(),
            &mut rng(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejection_samples_land_in_bbox() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::Star);
        let (min, max) = outline.bounding_box();
        for _ in 0..200 {
            let p = sample_in_outline(&outline, &mut rng);
            assert!(p.x >= min.x && p.x <= max.x);
            assert!(p.y >= min.y && p.y <= max.y);
        }
    }

    #[test]
    fn test_perimeter_is_twelve_evenly_spaced() {
        let mut rng = rng();
        for shape in BaseShape::ALL {
            let outline = Outline::of(shape);
            let samples = PlacementKind::Perimeter.distribute(
                shape,
                &outline,
                &DistributeParams::default(),
                &mut rng,
            );
            assert_eq!(samples.len(), PERIMETER_COUNT, "{shape:?}");
        }

        let outline = Outline::of(BaseShape::Round);
        let samples = PlacementKind::Perimeter.distribute(
            BaseShape::Round,
            &outline,
            &DistributeParams::default(),
            &mut rng,
        );
        for (i, s) in samples.iter().enumerate() {
            let theta = i as f64 / 12.0 * 2.0 * PI;
            assert_relative_eq!(s.x, PERIMETER_RADIUS * theta.cos(), epsilon = 1e-12);
            assert_relative_eq!(s.rotation, -theta);
        }
    }

    #[test]
    fn test_center_uses_heart_visual_center() {
        let heart = center(BaseShape::Heart);
        assert_eq!(heart.len(), 1);
        assert_relative_eq!(heart[0].x, 0.5);
        assert_relative_eq!(heart[0].y, 0.8);

        for shape in [BaseShape::Round, BaseShape::Square, BaseShape::Star] {
            let c = center(shape);
            assert_relative_eq!(c[0].x, 0.0);
            assert_relative_eq!(c[0].y, 0.0);
        }
    }

    #[test]
    fn test_side_sits_outside_round_rim() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::Round);
        let samples = PlacementKind::Side.distribute(
            BaseShape::Round,
            &outline,
            &DistributeParams::default(),
            &mut rng,
        );
        assert_eq!(samples.len(), SIDE_COUNT);
        for s in &samples {
            let r = (s.x * s.x + s.y * s.y).sqrt();
            assert_relative_eq!(r, SIDE_RADIUS, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_side_square_faces_each_wall_outward() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::Square);
        let samples = PlacementKind::Side.distribute(
            BaseShape::Square,
            &outline,
            &DistributeParams {
                count: Some(4),
                radius: None,
            },
            &mut rng,
        );
        let rotations: Vec<f64> = samples.iter().map(|s| s.rotation).collect();
        assert_relative_eq!(rotations[0], 0.0);
        assert_relative_eq!(rotations[1], -PI / 2.0);
        assert_relative_eq!(rotations[2], -PI);
        assert_relative_eq!(rotations[3], -PI * 1.5);
    }

    #[test]
    fn test_side_polygon_rotation_follows_tangent() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::Star);
        let samples = PlacementKind::Side.distribute(
            BaseShape::Star,
            &outline,
            &DistributeParams::default(),
            &mut rng,
        );
        assert_eq!(samples.len(), SIDE_COUNT);
        for (i, s) in samples.iter().enumerate() {
            let next = outline.point_at(((i + 1) % SIDE_COUNT) as f64 / SIDE_COUNT as f64);
            let expected = -(next.y - s.y).atan2(next.x - s.x);
            assert_relative_eq!(s.rotation, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_surface_round_rings_cover_disk() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::Round);
        let samples =
            PlacementKind::Surface.distribute(
                BaseShape::Round,
                &outline,
                &DistributeParams::default(),
                &mut rng,
            );
        // Center plus two rings at r = 0.55 and r = 1.1.
        assert!(samples.len() > 10);
        assert_relative_eq!(samples[0].x, 0.0);
        let max_r = samples
            .iter()
            .map(|s| (s.x * s.x + s.y * s.y).sqrt())
            .fold(0.0, f64::max);
        assert!(max_r < SURFACE_MAX_RADIUS);
    }

    #[test]
    fn test_surface_square_is_grid() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::Square);
        let samples =
            PlacementKind::Surface.distribute(
                BaseShape::Square,
                &outline,
                &DistributeParams::default(),
                &mut rng,
            );
        // 5 x 5 grid over the 2.4 footprint at step 0.5.
        assert_eq!(samples.len(), 25);
        assert!(samples
            .iter()
            .any(|s| (s.x - -1.2).abs() < 1e-12 && (s.y - -1.2).abs() < 1e-12));
    }

    #[test]
    fn test_surface_polygon_falls_back_to_dense_scatter() {
        let mut rng = rng();
        let outline = Outline::of(BaseShape::CharacterB);
        let samples = PlacementKind::Surface.distribute(
            BaseShape::CharacterB,
            &outline,
            &DistributeParams::default(),
            &mut rng,
        );
        assert_eq!(samples.len(), SURFACE_FALLBACK_COUNT);
    }
}
