//! Movement domain: character spawning and the terrain test room.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::PlatformerDef;
use crate::movement::{GameLayer, InputState, MotionState, Player, RaycastOrigins, Terrain};

/// Spawn the player character from the loaded definition.
pub(crate) fn spawn_player(
    mut commands: Commands,
    def: Res<PlatformerDef>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let size = Vec2::from_array(def.size);
    let [r, g, b] = def.color;
    let tuning = def.tuning.clone();

    info!(
        "Spawning player '{}' at {:?}: size={:?}, skin={}, gravity={}, max_speed={}",
        def.name,
        def.spawn,
        def.size,
        tuning.skin_width,
        tuning.gravity,
        tuning.horizontal_max_running_velocity
    );
    if let Some(t) = tuning.time_to_max_speed() {
        debug!("Reaches max speed in {:.2}s", t);
    }
    if let Some(d) = tuning.stopping_distance() {
        debug!("Stops from max speed within {:.2} units", d);
    }

    commands.spawn((
        // Identity & Movement
        (
            Player,
            tuning,
            InputState::default(),
            MotionState::default(),
            RaycastOrigins::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(r, g, b),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(def.spawn[0], def.spawn[1], 0.0),
        // Physics
        (
            RigidBody::Kinematic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Terrain]),
        ),
    ));
}

/// Flat floor with a few floating platforms. Surfaces only: the character
/// never collides sideways, so there are no walls.
pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor, top surface at y = 0
    spawn_terrain(
        &mut commands,
        Vec2::new(0.0, -0.5),
        Vec2::new(40.0, 1.0),
        ground_color,
    );

    // Platform 1 - left side
    spawn_terrain(
        &mut commands,
        Vec2::new(-6.0, 2.75),
        Vec2::new(5.0, 0.5),
        platform_color,
    );

    // Platform 2 - right side, higher
    spawn_terrain(
        &mut commands,
        Vec2::new(6.0, 4.75),
        Vec2::new(5.0, 0.5),
        platform_color,
    );

    // Platform 3 - center, highest
    spawn_terrain(
        &mut commands,
        Vec2::new(0.0, 7.75),
        Vec2::new(4.0, 0.5),
        platform_color,
    );
}

fn spawn_terrain(commands: &mut Commands, center: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        Terrain,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Terrain, [GameLayer::Player]),
    ));
}
