//! Known Dart state types and the initial value a fresh ViewModel starts with
//!
//! Types missing from the table are assumed to expose a `const` zero-argument
//! constructor. Nothing checks that assumption: a custom type without one
//! produces a main file that does not compile.

/// Built-in Dart types paired with their initial value literal
pub const KNOWN_DEFAULTS: &[(&str, &str)] = &[
    ("int", "0"),
    ("double", "0.0"),
    ("String", "''"),
    ("bool", "false"),
    ("List", "const []"),
    ("Map", "const {}"),
];

/// Literal default for a built-in state type
pub fn known_default(state_type: &str) -> Option<&'static str> {
    KNOWN_DEFAULTS
        .iter()
        .find(|(name, _)| *name == state_type)
        .map(|(_, value)| *value)
}

/// Initial value expression for any state type
pub fn initial_value(state_type: &str) -> String {
    match known_default(state_type) {
        Some(value) => value.to_string(),
        None => format!("const {}()", state_type),
    }
}
