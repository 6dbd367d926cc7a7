/// ViewModel declaration recovered from an existing main file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelDecl {
    pub class_name: String,
    pub state_type: String,
}
