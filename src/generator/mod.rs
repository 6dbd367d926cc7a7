pub mod ease_gen;
pub mod view_model_gen;

use crate::models::TemplatePair;

/// Inputs shared by every generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParams {
    /// ViewModel class name (e.g. "CounterViewModel")
    pub class_name: String,
    /// File base name without extension (e.g. "counter_view_model")
    pub file_name: String,
    /// State type token, passed through uninspected
    pub state_type: String,
}

impl TemplateParams {
    pub fn new(class_name: &str, file_name: &str, state_type: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            file_name: file_name.to_string(),
            state_type: state_type.to_string(),
        }
    }

    /// Render both files
    pub fn render(&self) -> TemplatePair {
        TemplatePair {
            main_content: view_model_gen::render_view_model(self),
            companion_content: ease_gen::render_companion(self),
        }
    }
}

/// Render the main and companion files for a ViewModel
pub fn render(class_name: &str, file_name: &str, state_type: &str) -> TemplatePair {
    TemplateParams::new(class_name, file_name, state_type).render()
}
