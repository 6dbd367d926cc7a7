//! Integration tests for creating and regenerating ViewModel files

use ease_codegen::generator::render;
use ease_codegen::pipeline::{CreateOutcome, NewViewModel, Pipeline};
use std::fs;
use tempfile::tempdir;

fn request(name: &str, state_type: &str) -> NewViewModel {
    NewViewModel {
        name: name.to_string(),
        state_type: state_type.to_string(),
    }
}

#[test]
fn test_create_into_missing_directory() {
    let temp = tempdir().unwrap();
    let target = temp.path().join("lib").join("view_models");

    let outcome = Pipeline::new()
        .create(&request("Cart", "CartState"), &target, false)
        .unwrap();
    assert!(matches!(outcome, CreateOutcome::Created { .. }));

    let main = fs::read_to_string(target.join("cart_view_model.dart")).unwrap();
    let companion = fs::read_to_string(target.join("cart_view_model.ease.dart")).unwrap();

    let expected = render("CartViewModel", "cart_view_model", "CartState");
    assert_eq!(main, expected.main_content);
    assert_eq!(companion, expected.companion_content);
    assert!(main.contains("super(const CartState());"));
}

#[test]
fn test_create_with_suffix_already_present() {
    let temp = tempdir().unwrap();

    Pipeline::new()
        .create(&request("AuthViewModel", "bool"), temp.path(), false)
        .unwrap();

    assert!(temp.path().join("auth_view_model.dart").exists());
    assert!(!temp.path().join("auth_view_model_view_model.dart").exists());
}

#[test]
fn test_create_overwrite_replaces_existing_files() {
    let temp = tempdir().unwrap();
    let pipeline = Pipeline::new();
    let companion_path = temp.path().join("counter_view_model.ease.dart");
    fs::write(&companion_path, "// stale").unwrap();

    let outcome = pipeline
        .create(&request("Counter", "int"), temp.path(), false)
        .unwrap();
    assert!(matches!(outcome, CreateOutcome::AlreadyExists(_)));
    assert_eq!(fs::read_to_string(&companion_path).unwrap(), "// stale");

    pipeline
        .create(&request("Counter", "int"), temp.path(), true)
        .unwrap();
    let companion = fs::read_to_string(&companion_path).unwrap();
    assert!(companion.starts_with("part of 'counter_view_model.dart';"));
}

#[test]
fn test_regenerate_after_state_type_change() {
    let temp = tempdir().unwrap();
    let pipeline = Pipeline::new();

    pipeline
        .create(&request("Counter", "int"), temp.path(), false)
        .unwrap();

    let main_path = temp.path().join("counter_view_model.dart");
    let edited = fs::read_to_string(&main_path)
        .unwrap()
        .replace("StateNotifier<int>", "StateNotifier<double>")
        .replace("super(0)", "super(0.0)");
    fs::write(&main_path, edited).unwrap();

    let regenerated = pipeline.regenerate(&main_path).unwrap();
    assert_eq!(regenerated.decl.class_name, "CounterViewModel");
    assert_eq!(regenerated.decl.state_type, "double");

    let companion = fs::read_to_string(temp.path().join("counter_view_model.ease.dart")).unwrap();
    assert!(companion.contains("final T Function(double state) selector;"));
    assert!(!companion.contains("int state"));
}

#[test]
fn test_regenerate_uses_file_stem_not_class_name() {
    let temp = tempdir().unwrap();
    let main_path = temp.path().join("shopping.dart");
    fs::write(
        &main_path,
        "part 'shopping.ease.dart';\n\nclass CartViewModel extends StateNotifier<CartState> {}\n",
    )
    .unwrap();

    Pipeline::new().regenerate(&main_path).unwrap();

    let companion = fs::read_to_string(temp.path().join("shopping.ease.dart")).unwrap();
    assert!(companion.starts_with("part of 'shopping.dart';"));
    assert!(companion.contains("class CartViewModelProvider"));
}

#[test]
fn test_regenerate_all_reports_skipped_files() {
    let temp = tempdir().unwrap();
    let pipeline = Pipeline::new();
    let features = temp.path().join("lib").join("features");
    fs::create_dir_all(&features).unwrap();

    pipeline
        .create(&request("Counter", "int"), &features, false)
        .unwrap();
    pipeline
        .create(&request("Cart", "CartState"), &temp.path().join("lib"), false)
        .unwrap();
    fs::write(temp.path().join("lib").join("main.dart"), "void main() {}").unwrap();

    fs::remove_file(features.join("counter_view_model.ease.dart")).unwrap();

    let build = temp.path().join("build");
    fs::create_dir_all(&build).unwrap();
    fs::write(
        build.join("copy.dart"),
        "class CopyViewModel extends StateNotifier<int> {}",
    )
    .unwrap();

    let report = pipeline
        .regenerate_all(temp.path(), &["build".to_string()])
        .unwrap();

    assert_eq!(report.regenerated.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].ends_with("main.dart"));
    assert!(features.join("counter_view_model.ease.dart").exists());
    assert!(!build.join("copy.ease.dart").exists());
}
