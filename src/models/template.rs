/// The two documents generated for a ViewModel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePair {
    /// Content of `<file>.dart`
    pub main_content: String,
    /// Content of `<file>.ease.dart`
    pub companion_content: String,
}
