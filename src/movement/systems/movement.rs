//! Movement domain: gravity, run speed and position integration.

use bevy::prelude::*;

use crate::movement::kinematics;
use crate::movement::{InputState, MotionState, PlatformerTuning, Player, RaySpacing};

pub(crate) fn apply_gravity(
    time: Res<Time>,
    mut query: Query<(&PlatformerTuning, &mut MotionState), (With<Player>, With<RaySpacing>)>,
) {
    let dt = time.delta_secs();

    for (tuning, mut motion) in &mut query {
        kinematics::apply_gravity(&mut motion, tuning.gravity, dt);
    }
}

pub(crate) fn update_horizontal_velocity(
    time: Res<Time>,
    mut query: Query<
        (&PlatformerTuning, &InputState, &mut MotionState),
        (With<Player>, With<RaySpacing>),
    >,
) {
    let dt = time.delta_secs();

    for (tuning, input, mut motion) in &mut query {
        kinematics::update_horizontal_velocity(&mut motion, input, tuning, dt);
    }
}

pub(crate) fn apply_motion(
    time: Res<Time>,
    mut query: Query<(&MotionState, &mut Transform), (With<Player>, With<RaySpacing>)>,
) {
    let dt = time.delta_secs();

    for (motion, mut transform) in &mut query {
        kinematics::integrate_position(&mut transform.translation, motion, dt);
    }
}
