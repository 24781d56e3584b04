//! Movement domain: ray setup and terrain collision systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::kinematics;
use crate::movement::ports::{BoundsProvider, ColliderBounds, TerrainRays};
use crate::movement::{MotionState, PlatformerTuning, Player, RaySpacing, RaycastOrigins};

/// Compute ray spacing for characters that do not have it yet.
///
/// Characters whose collider is not a box never get a `RaySpacing` and are
/// left out of every other locomotion system.
pub(crate) fn init_ray_spacing(
    mut commands: Commands,
    query: Query<
        (Entity, &Transform, &Collider, &PlatformerTuning),
        (With<Player>, Without<RaySpacing>),
    >,
) {
    for (entity, transform, collider, tuning) in &query {
        let bounds = ColliderBounds {
            transform,
            collider,
        };

        match bounds.world_bounds() {
            Ok(rect) => {
                let spacing = kinematics::calculate_ray_spacing(rect, tuning);
                debug!(
                    "Ray spacing for {:?}: {} x {:.3} horizontal, {} x {:.3} vertical",
                    entity,
                    spacing.horizontal_count,
                    spacing.horizontal,
                    spacing.vertical_count,
                    spacing.vertical
                );
                commands.entity(entity).insert(spacing);
            }
            Err(e) => {
                warn_once!("Skipping locomotion for {:?}: {}", entity, e);
            }
        }
    }
}

pub(crate) fn update_raycast_origins(
    mut query: Query<
        (&Transform, &Collider, &PlatformerTuning, &mut RaycastOrigins),
        (With<Player>, With<RaySpacing>),
    >,
) {
    for (transform, collider, tuning, mut origins) in &mut query {
        let bounds = ColliderBounds {
            transform,
            collider,
        };

        match bounds.world_bounds() {
            Ok(rect) => *origins = kinematics::raycast_origins(rect, tuning.skin_width),
            Err(e) => warn_once!("Raycast origins not updated: {}", e),
        }
    }
}

pub(crate) fn resolve_vertical_collisions(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &PlatformerTuning,
            &RaycastOrigins,
            &RaySpacing,
            &mut MotionState,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let terrain = TerrainRays::new(&spatial_query);

    for (entity, tuning, origins, spacing, mut motion) in &mut query {
        let hit = kinematics::resolve_vertical_collisions(
            &mut motion,
            origins,
            spacing,
            tuning.skin_width,
            dt,
            &terrain,
        );
        if let Some(hit) = hit {
            trace!(
                "{:?} stopped by {:?} at {:?} (normal {:?}), vy={:.3}",
                entity, hit.entity, hit.point, hit.normal, motion.vertical
            );
        }
    }
}
