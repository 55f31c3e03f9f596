pub mod error;
pub mod generator;
pub mod identity;
pub mod models;
pub mod output;
pub mod parser;
pub mod utils;

// Re-export the main types for easier access
pub use error::LinkGenError;
pub use models::{ConnectionParams, Fingerprint, ServerParams};
