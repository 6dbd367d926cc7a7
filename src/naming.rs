//! Naming helpers for ViewModel identifiers and file names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Suffix every ViewModel class name carries
pub const VIEW_MODEL_SUFFIX: &str = "ViewModel";

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("name pattern is valid"));

/// Convert PascalCase to camelCase (CounterViewModel -> counterViewModel)
pub fn to_camel_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert PascalCase to snake_case (CounterViewModel -> counter_view_model)
///
/// Every uppercase letter starts a new word, so acronyms come apart letter by
/// letter: `HTTPClient` becomes `h_t_t_p_client`.
pub fn to_snake_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 4);

    for c in text.chars() {
        if c.is_ascii_uppercase() {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }

    match result.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => result,
    }
}

/// Convert snake_case to PascalCase (counter_view_model -> CounterViewModel)
///
/// Not an inverse of [`to_snake_case`]: `h_t_t_p_client` comes back as
/// `HTTPClient` but `http_client` becomes `HttpClient`.
pub fn to_pascal_case(text: &str) -> String {
    text.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Append the ViewModel suffix unless the name already ends with it
pub fn ensure_view_model_suffix(name: &str) -> String {
    if name.ends_with(VIEW_MODEL_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, VIEW_MODEL_SUFFIX)
    }
}

/// Validate a user-supplied ViewModel name
///
/// The first `ViewModel` occurrence is ignored, the rest must be a PascalCase
/// alphanumeric identifier.
pub fn validate_view_model_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Name is required");
    }

    let bare = name.replacen(VIEW_MODEL_SUFFIX, "", 1);
    if !NAME_PATTERN.is_match(&bare) {
        return Err(
            "Name must start with uppercase letter and contain only alphanumeric characters",
        );
    }

    Ok(())
}

/// Validate a user-supplied state type; any non-empty text is accepted
pub fn validate_state_type(state_type: &str) -> Result<(), &'static str> {
    if state_type.is_empty() {
        return Err("State type is required");
    }
    Ok(())
}
