//! Movement domain: per-character tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Author-time locomotion tunables. Read-only while the game runs.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct PlatformerTuning {
    /// Inward margin kept between the collider and anything it touches
    pub skin_width: f32,
    /// Clamped to at least 2 before use
    pub horizontal_ray_count: i32,
    /// Clamped to at least 2 before use
    pub vertical_ray_count: i32,
    pub gravity: f32,
    pub horizontal_acceleration: f32,
    pub horizontal_deceleration: f32,
    pub horizontal_max_running_velocity: f32,
}

impl Default for PlatformerTuning {
    fn default() -> Self {
        Self {
            skin_width: 0.15,
            horizontal_ray_count: 4,
            vertical_ray_count: 4,
            gravity: 15.0,
            horizontal_acceleration: 0.0,
            horizontal_deceleration: 0.0,
            horizontal_max_running_velocity: 0.0,
        }
    }
}

impl PlatformerTuning {
    /// Time in seconds to go from standstill to full speed with input held.
    pub fn time_to_max_speed(&self) -> Option<f32> {
        (self.horizontal_acceleration > 0.0)
            .then(|| self.horizontal_max_running_velocity / self.horizontal_acceleration)
    }

    /// Distance covered while braking from full speed to a stop.
    /// Uses v² / (2a)
    pub fn stopping_distance(&self) -> Option<f32> {
        (self.horizontal_deceleration > 0.0).then(|| {
            self.horizontal_max_running_velocity * self.horizontal_max_running_velocity
                / (2.0 * self.horizontal_deceleration)
        })
    }
}
