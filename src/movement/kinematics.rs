//! Movement domain: per-frame locomotion rules.
//!
//! Plain functions over component data. The systems in `movement::systems`
//! call these in a fixed order each frame; tests drive them directly with fake
//! ray casters and input samplers.

use bevy::prelude::*;

use crate::movement::ports::{InputAxis, InputSampler, RayCaster, RayHit};
use crate::movement::{InputState, MotionState, PlatformerTuning, RaySpacing, RaycastOrigins};

/// Axis magnitude at or below which input counts as neutral.
pub const INPUT_DEADZONE: f32 = 0.1;

/// Fewest rays cast along any edge.
pub const MIN_RAY_COUNT: u32 = 2;

/// Shrink `bounds` by `skin_width` on every side.
pub fn shrink_bounds(bounds: Rect, skin_width: f32) -> Rect {
    let skin = Vec2::splat(skin_width);
    Rect {
        min: bounds.min + skin,
        max: bounds.max - skin,
    }
}

pub fn effective_ray_count(configured: i32) -> u32 {
    configured.max(MIN_RAY_COUNT as i32) as u32
}

/// Evenly space rays over the skin-shrunk bounds.
pub fn calculate_ray_spacing(bounds: Rect, tuning: &PlatformerTuning) -> RaySpacing {
    let size = shrink_bounds(bounds, tuning.skin_width).size();
    let horizontal_count = effective_ray_count(tuning.horizontal_ray_count);
    let vertical_count = effective_ray_count(tuning.vertical_ray_count);

    RaySpacing {
        horizontal_count,
        vertical_count,
        horizontal: size.y / (horizontal_count - 1) as f32,
        vertical: size.x / (vertical_count - 1) as f32,
    }
}

pub fn raycast_origins(bounds: Rect, skin_width: f32) -> RaycastOrigins {
    let shrunk = shrink_bounds(bounds, skin_width);
    RaycastOrigins {
        bottom_left: shrunk.min,
        bottom_right: Vec2::new(shrunk.max.x, shrunk.min.y),
        top_left: Vec2::new(shrunk.min.x, shrunk.max.y),
        top_right: shrunk.max,
    }
}

pub fn sample_input(sampler: &impl InputSampler) -> InputState {
    InputState {
        horizontal: sampler.axis_raw(InputAxis::Horizontal),
        vertical: sampler.axis_raw(InputAxis::Vertical),
    }
}

pub fn apply_gravity(motion: &mut MotionState, gravity: f32, dt: f32) {
    motion.vertical -= gravity * dt;
}

/// Zero vertical velocity counts as moving up.
pub fn vertical_direction(vertical_velocity: f32) -> Dir2 {
    if vertical_velocity < 0.0 {
        Dir2::NEG_Y
    } else {
        Dir2::Y
    }
}

/// Origin of the `index`-th vertical ray, shifted by this frame's horizontal
/// displacement so the rays lead the character sideways.
pub fn vertical_ray_origin(
    origins: &RaycastOrigins,
    spacing: &RaySpacing,
    direction: Dir2,
    horizontal_shift: f32,
    index: u32,
) -> Vec2 {
    let edge = if direction == Dir2::NEG_Y {
        origins.bottom_left
    } else {
        origins.top_left
    };
    edge + Vec2::X * (spacing.vertical * index as f32 + horizontal_shift)
}

/// Clamp this frame's vertical travel so the leading edge stops `skin_width`
/// short of the nearest terrain found by any vertical ray.
///
/// Rays span the frame's vertical displacement plus the skin. Each hit
/// shortens the remaining rays to the hit distance, so the final velocity
/// always comes from the closest surface. Returns that closest hit.
pub fn resolve_vertical_collisions(
    motion: &mut MotionState,
    origins: &RaycastOrigins,
    spacing: &RaySpacing,
    skin_width: f32,
    dt: f32,
    caster: &impl RayCaster,
) -> Option<RayHit> {
    if dt <= 0.0 {
        return None;
    }

    let direction = vertical_direction(motion.vertical);
    let horizontal_shift = motion.horizontal * dt;
    let mut displacement = motion.vertical * dt;
    let mut ray_length = displacement.abs() + skin_width;
    let mut nearest = None;

    for index in 0..spacing.vertical_count {
        let origin = vertical_ray_origin(origins, spacing, direction, horizontal_shift, index);
        if let Some(hit) = caster.cast_ray(origin, direction, ray_length) {
            displacement = (hit.distance - skin_width) * direction.y;
            ray_length = hit.distance;
            nearest = Some(hit);
        }
    }

    if nearest.is_some() {
        motion.vertical = displacement / dt;
    }
    nearest
}

/// Move `current` toward `target` by at most `max_delta`, landing exactly on
/// `target` instead of overshooting it.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

pub fn update_horizontal_velocity(
    motion: &mut MotionState,
    input: &InputState,
    tuning: &PlatformerTuning,
    dt: f32,
) {
    let velocity = if input.horizontal.abs() > INPUT_DEADZONE {
        motion.horizontal + input.horizontal * tuning.horizontal_acceleration * dt
    } else {
        move_towards(motion.horizontal, 0.0, tuning.horizontal_deceleration * dt)
    };

    let limit = tuning.horizontal_max_running_velocity.max(0.0);
    motion.horizontal = velocity.clamp(-limit, limit);
}

pub fn integrate_position(translation: &mut Vec3, motion: &MotionState, dt: f32) {
    translation.x += motion.horizontal * dt;
    translation.y += motion.vertical * dt;
}
