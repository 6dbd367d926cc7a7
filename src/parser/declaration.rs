use crate::models::ViewModelDecl;
use once_cell::sync::Lazy;
use regex::Regex;

/// Declaration shape the extractor understands, for diagnostics
pub const EXPECTED_DECLARATION: &str = "class MyViewModel extends StateNotifier<MyState>";

/// `class <Name> extends StateNotifier<<State>>` on a single line
static DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"class\s+((?-u:\w)+)\s+extends\s+StateNotifier<([^>\n]+)>")
        .expect("declaration pattern is valid")
});

/// Find the ViewModel class name and state type in a main file
///
/// Only the first matching declaration counts. Returns `None` when the file
/// has no declaration of the expected shape; callers should point users at
/// [`EXPECTED_DECLARATION`] rather than guess.
pub fn extract(content: &str) -> Option<ViewModelDecl> {
    let captures = DECLARATION_PATTERN.captures(content)?;

    Some(ViewModelDecl {
        class_name: captures[1].to_string(),
        state_type: captures[2].trim().to_string(),
    })
}
