//! Connection parameter definitions
//!
//! Contains the record that fully determines a REALITY connection
//! descriptor, plus the defaults used when neither a flag nor the server
//! parameter file supplies a value.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use uuid::Uuid;

use crate::error::LinkGenError;

/// XTLS flow used by VLESS over REALITY.
pub const DEFAULT_FLOW: &str = "xtls-rprx-vision";

/// Display label placed in the link fragment.
pub const DEFAULT_TAG: &str = "REALITY";

/// SNI to mimic when none is configured.
pub const DEFAULT_SERVER_NAME: &str = "www.cloudflare.com";

/// Placeholder shortId for manual mode (4-16 hex characters).
pub const DEFAULT_SHORT_ID: &str = "01234567";

pub const DEFAULT_PORT: u16 = 443;

/// TLS client-hello imitation profile presented by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fingerprint {
    Chrome,
    Firefox,
    Safari,
    Ios,
    Android,
}

impl Fingerprint {
    pub fn as_str(self) -> &'static str {
        match self {
            Fingerprint::Chrome => "chrome",
            Fingerprint::Firefox => "firefox",
            Fingerprint::Safari => "safari",
            Fingerprint::Ios => "ios",
            Fingerprint::Android => "android",
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fingerprint {
    type Err = LinkGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chrome" => Ok(Fingerprint::Chrome),
            "firefox" => Ok(Fingerprint::Firefox),
            "safari" => Ok(Fingerprint::Safari),
            "ios" => Ok(Fingerprint::Ios),
            "android" => Ok(Fingerprint::Android),
            other => Err(LinkGenError::InvalidFingerprint(other.to_string())),
        }
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Fingerprint::Chrome
    }
}

/// Everything needed to build a vless:// link and the client config shapes.
///
/// Immutable once resolved; the generator and exporters only read from it.
#[derive(Debug, Clone)]
pub struct ConnectionParams {
    pub uuid: Uuid,
    pub host: String,
    pub port: u16,
    pub public_key: String,
    pub short_id: String,
    pub server_name: String,
    pub fingerprint: Fingerprint,
    pub flow: String,
    pub tag: String,
}
