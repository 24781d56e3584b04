//! Content domain: data-driven character definitions loaded from RON.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::PlatformerDef;
pub use loader::load_platformer;
pub use validation::validate_platformer;

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON content files.
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PlatformerDef>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load the character definition, falling back to defaults on any error.
fn load_content(mut commands: Commands) {
    let def = match load_platformer(Path::new(CONTENT_DIR)) {
        Ok(def) => {
            info!("Loaded character '{}' from {}", def.name, CONTENT_DIR);
            def
        }
        Err(e) => {
            warn!("{}; using default character", e);
            PlatformerDef::default()
        }
    };

    for error in validate_platformer(&def) {
        warn!("Character '{}' {}", def.name, error);
    }

    commands.insert_resource(def);
}
