//! Movement domain: debug-only ray visualisation.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::movement::kinematics::{vertical_direction, vertical_ray_origin};
use crate::movement::{MotionState, PlatformerTuning, Player, RaySpacing, RaycastOrigins};

/// Whether vertical collision rays are drawn each frame
#[derive(Resource, Debug)]
pub struct DebugRays {
    pub enabled: bool,
}

impl Default for DebugRays {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Toggle ray gizmos with F2
pub(crate) fn toggle_debug_rays(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_rays: ResMut<DebugRays>,
) {
    if keyboard.just_pressed(KeyCode::F2) {
        debug_rays.enabled = !debug_rays.enabled;
        info!("Debug rays: {}", if debug_rays.enabled { "on" } else { "off" });
    }
}

/// Draw the skin-shrunk bounds and the vertical rays about to be cast.
pub(crate) fn draw_debug_rays(
    time: Res<Time>,
    debug_rays: Res<DebugRays>,
    mut gizmos: Gizmos,
    query: Query<
        (&PlatformerTuning, &RaycastOrigins, &RaySpacing, &MotionState),
        With<Player>,
    >,
) {
    if !debug_rays.enabled {
        return;
    }

    let dt = time.delta_secs();

    for (tuning, origins, spacing, motion) in &query {
        let inner = Rect {
            min: origins.bottom_left,
            max: origins.top_right,
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(inner.center()),
            inner.size(),
            Color::srgb(0.2, 0.8, 1.0),
        );

        let direction = vertical_direction(motion.vertical);
        let ray_length = (motion.vertical * dt).abs() + tuning.skin_width;
        for index in 0..spacing.vertical_count {
            let origin =
                vertical_ray_origin(origins, spacing, direction, motion.horizontal * dt, index);
            gizmos.ray_2d(origin, *direction * ray_length, Color::srgb(1.0, 0.2, 0.2));
        }
    }
}
