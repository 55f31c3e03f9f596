//! Core data models for the application
//!
//! The connection parameter record passed through the generator and the
//! server-provided parameter document, separated from the logic that
//! operates on them.

pub mod params;
pub mod server_doc;

pub use params::{
    ConnectionParams, Fingerprint, DEFAULT_FLOW, DEFAULT_PORT, DEFAULT_SERVER_NAME,
    DEFAULT_SHORT_ID, DEFAULT_TAG,
};
pub use server_doc::{ServerParams, ServerUser};
