//! User identity generation
//!
//! VLESS identifies a user by a UUID. Two sources are supported: a stable
//! UUID v5 derived from a user name (so re-running the tool for the same
//! person always yields the same identity), or a random UUID v4 when no
//! name is given.

use uuid::Uuid;

/// Derives a deterministic UUID v5 from a user name against the standard
/// DNS namespace (`6ba7b810-9dad-11d1-80b4-00c04fd430c8`).
pub fn uuid_from_name(name: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, name.as_bytes())
}

/// Fresh random identity (UUID v4).
pub fn random_uuid() -> Uuid {
    Uuid::new_v4()
}
