pub mod validate;

pub use validate::{validate_link, ValidateError};
