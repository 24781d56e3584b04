//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{init_ray_spacing, resolve_vertical_collisions, update_raycast_origins};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_gravity, apply_motion, update_horizontal_velocity};
