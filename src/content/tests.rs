//! Content domain: tests for RON parsing and validation.

use super::loader::parse_single;
use super::{PlatformerDef, validate_platformer};
use crate::movement::PlatformerTuning;

#[test]
fn test_parse_full_definition() {
    let ron = r#"(
        name: "Bert",
        spawn: (1.0, 6.0),
        size: (1.0, 2.0),
        color: (1.0, 0.5, 0.25),
        tuning: (
            skin_width: 0.1,
            horizontal_ray_count: 3,
            vertical_ray_count: 5,
            gravity: 20.0,
            horizontal_acceleration: 40.0,
            horizontal_deceleration: 60.0,
            horizontal_max_running_velocity: 8.0,
        ),
    )"#;

    let def: PlatformerDef = parse_single("platformer.ron", ron).unwrap();
    assert_eq!(def.name, "Bert");
    assert_eq!(def.spawn, [1.0, 6.0]);
    assert_eq!(def.size, [1.0, 2.0]);
    assert_eq!(def.tuning.vertical_ray_count, 5);
    assert_eq!(def.tuning.horizontal_max_running_velocity, 8.0);
}

#[test]
fn test_missing_fields_use_defaults() {
    let ron = r#"(name: "Sparse", tuning: (gravity: 30.0))"#;

    let def: PlatformerDef = parse_single("platformer.ron", ron).unwrap();
    assert_eq!(def.name, "Sparse");
    assert_eq!(def.size, PlatformerDef::default().size);
    assert_eq!(def.tuning.gravity, 30.0);
    assert_eq!(
        def.tuning.skin_width,
        PlatformerTuning::default().skin_width
    );
    assert_eq!(def.tuning.vertical_ray_count, 4);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<PlatformerDef>("broken.ron", "(name: ").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_default_definition_is_valid() {
    assert!(validate_platformer(&PlatformerDef::default()).is_empty());
}

#[test]
fn test_low_ray_counts_are_not_errors() {
    let mut def = PlatformerDef::default();
    def.tuning.horizontal_ray_count = 0;
    def.tuning.vertical_ray_count = -3;

    assert!(validate_platformer(&def).is_empty());
}

#[test]
fn test_validation_flags_bad_values() {
    let mut def = PlatformerDef::default();
    def.tuning.skin_width = -0.1;
    def.tuning.gravity = f32::NAN;
    def.tuning.horizontal_deceleration = -1.0;

    let fields: Vec<_> = validate_platformer(&def)
        .iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(
        fields,
        vec![
            "tuning.skin_width",
            "tuning.gravity",
            "tuning.horizontal_deceleration"
        ]
    );
}

#[test]
fn test_validation_flags_collider_smaller_than_skin() {
    let mut def = PlatformerDef::default();
    def.size = [0.25, 1.5];
    def.tuning.skin_width = 0.15;

    let errors = validate_platformer(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "size[0]");
}

#[test]
fn test_shipped_content_file_is_valid() {
    let contents = include_str!("../../assets/data/platformer.ron");
    let def: PlatformerDef = parse_single("platformer.ron", contents).unwrap();

    assert!(validate_platformer(&def).is_empty());
    assert!(def.tuning.horizontal_acceleration > 0.0);
}
