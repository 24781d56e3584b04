//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and any other surface the character stands on
    Terrain,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for terrain colliders
#[derive(Component, Debug)]
pub struct Terrain;

/// Raw axis values sampled this frame, each in `[-1, 1]`.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct InputState {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Velocities in world units per second. Persists across frames.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct MotionState {
    pub horizontal: f32,
    pub vertical: f32,
}

/// Corners of the collision bounds after shrinking by the skin width.
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct RaycastOrigins {
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
    pub top_left: Vec2,
    pub top_right: Vec2,
}

/// Effective ray counts and the distance between neighbouring rays.
///
/// Computed once when the character is initialized; it is not refreshed if the
/// collider changes shape later.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct RaySpacing {
    /// Rays stacked along the height (horizontal casts).
    pub horizontal_count: u32,
    /// Rays spread along the width (vertical casts).
    pub vertical_count: u32,
    pub horizontal: f32,
    pub vertical: f32,
}
