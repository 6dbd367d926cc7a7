//! Integration tests for extracting declarations from Dart files

use ease_codegen::generator::render;
use ease_codegen::models::ViewModelDecl;
use ease_codegen::parser::extract;
use std::path::PathBuf;

/// Get path to test fixtures
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read fixture file content
fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_extract_hand_edited_fixture() {
    let content = read_fixture("cart_view_model.dart");

    let decl = extract(&content).expect("Expected a declaration");

    assert_eq!(decl.class_name, "CartViewModel");
    assert_eq!(decl.state_type, "CartState");
}

#[test]
fn test_extract_wrapped_declaration_is_not_found() {
    let content = read_fixture("wrapped_declaration.dart");
    assert!(extract(&content).is_none());
}

#[test]
fn test_render_then_extract_recovers_identifiers() {
    for (class_name, file_name, state_type) in [
        ("CounterViewModel", "counter_view_model", "int"),
        ("NameViewModel", "name_view_model", "String"),
        ("CartViewModel", "cart_view_model", "CartState"),
        ("FlagsViewModel", "flags_view_model", "Map"),
    ] {
        let pair = render(class_name, file_name, state_type);
        assert_eq!(
            extract(&pair.main_content),
            Some(ViewModelDecl {
                class_name: class_name.to_string(),
                state_type: state_type.to_string(),
            }),
            "round trip failed for {}",
            class_name
        );
    }
}
