mod declaration;
mod files;
mod name;
mod template;

pub use declaration::ViewModelDecl;
pub use files::ViewModelFiles;
pub use name::ViewModelName;
pub use template::TemplatePair;
