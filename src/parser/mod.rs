mod declaration;

pub use declaration::{extract, EXPECTED_DECLARATION};
