//! Server parameter document
//!
//! `reality-client-params.json` is exported by the server provisioning
//! script and carries everything a client needs except the display tag.
//! The document is read once and consumed read-only; the first user and
//! first shortId are selected unless overridden by flags.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LinkGenError;

/// A user entry from the server document. Extra fields (email, level, ...)
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerUser {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerParams {
    #[serde(default)]
    pub server_host: String,
    #[serde(default)]
    pub server_port: Option<u16>,
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub server_name: String,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub short_ids: Vec<String>,
    #[serde(default)]
    pub users: Vec<ServerUser>,
}

impl ServerParams {
    /// Loads the document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LinkGenError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// A usable document carries at least one shortId and one user.
    pub fn ensure_complete(&self) -> Result<(), LinkGenError> {
        if self.short_ids.is_empty() || self.users.is_empty() {
            return Err(LinkGenError::Document(
                "file must contain shortIds and users".to_string(),
            ));
        }
        Ok(())
    }

    pub fn first_user_id(&self) -> Option<&str> {
        self.users.first().map(|u| u.id.as_str())
    }

    pub fn first_short_id(&self) -> Option<&str> {
        self.short_ids.first().map(|s| s.as_str())
    }
}
