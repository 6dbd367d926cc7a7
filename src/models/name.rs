use crate::naming::{ensure_view_model_suffix, to_snake_case};

/// Name of a ViewModel as typed by the user and as used in code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelName {
    /// Name as supplied (e.g. "Counter")
    pub raw_name: String,
    /// Class name, always ending with `ViewModel` (e.g. "CounterViewModel")
    pub class_name: String,
}

impl ViewModelName {
    pub fn new(raw_name: &str) -> Self {
        Self {
            raw_name: raw_name.to_string(),
            class_name: ensure_view_model_suffix(raw_name),
        }
    }

    /// File base name shared by the main and companion files
    pub fn file_base_name(&self) -> String {
        to_snake_case(&self.class_name)
    }
}
