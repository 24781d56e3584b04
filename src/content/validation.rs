//! Validation for loaded character definitions.

use super::data::PlatformerDef;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// Helper macro for checking a numeric field against a predicate
macro_rules! check_field {
    ($errors:expr, $value:expr, $field:expr, $ok:expr, $message:expr) => {
        if !$ok($value) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("{} (got {})", $message, $value),
            });
        }
    };
}

/// Validate a character definition.
/// Returns a list of validation errors, empty if the definition is usable.
/// Ray counts below 2 are not errors; they are clamped at runtime.
pub fn validate_platformer(def: &PlatformerDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let tuning = &def.tuning;
    let non_negative = |v: f32| v >= 0.0;

    check_field!(
        errors,
        tuning.skin_width,
        "tuning.skin_width",
        non_negative,
        "must be >= 0"
    );
    check_field!(
        errors,
        tuning.gravity,
        "tuning.gravity",
        |v: f32| v.is_finite(),
        "must be finite"
    );
    check_field!(
        errors,
        tuning.horizontal_acceleration,
        "tuning.horizontal_acceleration",
        non_negative,
        "must be >= 0"
    );
    check_field!(
        errors,
        tuning.horizontal_deceleration,
        "tuning.horizontal_deceleration",
        non_negative,
        "must be >= 0"
    );
    check_field!(
        errors,
        tuning.horizontal_max_running_velocity,
        "tuning.horizontal_max_running_velocity",
        non_negative,
        "must be >= 0"
    );

    // The collider must stay non-empty once the skin is taken off both sides
    let min_extent = tuning.skin_width * 2.0;
    check_field!(
        errors,
        def.size[0],
        "size[0]",
        |v: f32| v > min_extent,
        "must be wider than twice the skin width"
    );
    check_field!(
        errors,
        def.size[1],
        "size[1]",
        |v: f32| v > min_extent,
        "must be taller than twice the skin width"
    );

    errors
}
