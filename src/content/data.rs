//! Content domain: serialized character definitions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::PlatformerTuning;

/// A playable character as authored in `platformer.ron`.
#[derive(Resource, Reflect, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlatformerDef {
    pub name: String,
    /// Spawn position of the collider centre
    pub spawn: [f32; 2],
    /// Box collider and sprite size
    pub size: [f32; 2],
    pub color: [f32; 3],
    pub tuning: PlatformerTuning,
}

impl Default for PlatformerDef {
    fn default() -> Self {
        Self {
            name: "Bert".to_string(),
            spawn: [0.0, 5.75],
            size: [1.0, 1.5],
            color: [0.9, 0.9, 0.9],
            tuning: PlatformerTuning::default(),
        }
    }
}
