//! Movement domain: narrow seams between locomotion rules and the engine.
//!
//! The kinematics only ever see these traits. Systems wrap the real engine
//! types (`Collider`, `SpatialQuery`, `ButtonInput<KeyCode>`) and tests plug in
//! plain structs.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Nearest surface found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World position of the hit point.
    pub point: Vec2,
    /// Surface normal at the hit point.
    pub normal: Vec2,
    /// Entity that was hit, when the caster knows it.
    pub entity: Option<Entity>,
}

/// Casts rays against whatever counts as terrain.
pub trait RayCaster {
    /// Returns the nearest hit within `max_distance`, if any.
    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayHit>;
}

/// Provides the world-space bounds of a character's box collider.
pub trait BoundsProvider {
    fn world_bounds(&self) -> Result<Rect, BoundsError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAxis {
    Horizontal,
    Vertical,
}

/// Source of raw, unsmoothed axis values.
pub trait InputSampler {
    fn axis_raw(&self, axis: InputAxis) -> f32;
}

/// Error type for bounds lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// The collider is not an axis-aligned box.
    NotABox,
}

impl std::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundsError::NotABox => write!(f, "character collider is not a box"),
        }
    }
}

impl std::error::Error for BoundsError {}

/// Bounds of a cuboid collider centred on its entity's transform.
pub struct ColliderBounds<'a> {
    pub transform: &'a Transform,
    pub collider: &'a Collider,
}

impl BoundsProvider for ColliderBounds<'_> {
    fn world_bounds(&self) -> Result<Rect, BoundsError> {
        let cuboid = self
            .collider
            .shape_scaled()
            .as_cuboid()
            .ok_or(BoundsError::NotABox)?;
        let half_size = Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y);

        Ok(Rect::from_center_half_size(
            self.transform.translation.truncate(),
            half_size,
        ))
    }
}

/// Ray caster over avian's spatial query, restricted to the terrain layer.
pub struct TerrainRays<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> TerrainRays<'a, 'w, 's> {
    pub fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Terrain),
        }
    }
}

impl RayCaster for TerrainRays<'_, '_, '_> {
    fn cast_ray(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Option<RayHit> {
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &self.filter)
            .map(|hit| RayHit {
                distance: hit.distance,
                point: origin + *direction * hit.distance,
                normal: hit.normal,
                entity: Some(hit.entity),
            })
    }
}

/// Digital keyboard axes: A/D or Left/Right, S/W or Down/Up.
impl InputSampler for ButtonInput<KeyCode> {
    fn axis_raw(&self, axis: InputAxis) -> f32 {
        let (negative, positive) = match axis {
            InputAxis::Horizontal => (
                [KeyCode::KeyA, KeyCode::ArrowLeft],
                [KeyCode::KeyD, KeyCode::ArrowRight],
            ),
            InputAxis::Vertical => (
                [KeyCode::KeyS, KeyCode::ArrowDown],
                [KeyCode::KeyW, KeyCode::ArrowUp],
            ),
        };

        let mut value = 0.0;
        if self.any_pressed(negative) {
            value -= 1.0;
        }
        if self.any_pressed(positive) {
            value += 1.0;
        }
        value
    }
}
