//! Movement domain: locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
pub mod kinematics;
pub mod ports;
mod systems;
mod tuning;


pub use components::{
    GameLayer, InputState, MotionState, Player, RaySpacing, RaycastOrigins, Terrain,
};
#[cfg(feature = "dev-tools")]
pub use dev::DebugRays;
pub use tuning::PlatformerTuning;

use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_player, spawn_test_room};
use crate::movement::systems::{
    apply_gravity, apply_motion, init_ray_spacing, read_input, resolve_vertical_collisions,
    update_horizontal_velocity, update_raycast_origins,
};

/// Ordering of the per-frame locomotion pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Ray spacing for new characters, then ray origins for everyone
    Prepare,
    /// Debug drawing of the rays about to be cast
    DebugDraw,
    /// Input, gravity, collisions, run speed, position
    Simulate,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlatformerTuning>()
            .register_type::<InputState>()
            .register_type::<MotionState>()
            .register_type::<RaycastOrigins>()
            .register_type::<RaySpacing>()
            .configure_sets(
                Update,
                (
                    LocomotionSet::Prepare,
                    LocomotionSet::DebugDraw,
                    LocomotionSet::Simulate,
                )
                    .chain(),
            )
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(
                Update,
                (init_ray_spacing, update_raycast_origins)
                    .chain()
                    .in_set(LocomotionSet::Prepare),
            )
            .add_systems(
                Update,
                (
                    read_input,
                    apply_gravity,
                    resolve_vertical_collisions,
                    update_horizontal_velocity,
                    apply_motion,
                )
                    .chain()
                    .in_set(LocomotionSet::Simulate),
            );

        #[cfg(feature = "dev-tools")]
        app.init_resource::<DebugRays>().add_systems(
            Update,
            (dev::toggle_debug_rays, dev::draw_debug_rays)
                .chain()
                .in_set(LocomotionSet::DebugDraw),
        );
    }
}
