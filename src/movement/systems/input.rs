//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::kinematics::sample_input;
use crate::movement::{InputState, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut InputState, With<Player>>,
) {
    let sampled = sample_input(&*keyboard);

    for mut input in &mut query {
        *input = sampled;
    }
}
