//! Syntactic validation of generated vless:// links
//!
//! Re-parses the link from scratch, without reusing anything from the
//! builder, so a hand-edited or corrupted link is caught. Purely
//! syntactic: presence and shape of the required pieces, no semantic
//! checks against a server.

use thiserror::Error;
use uuid::Uuid;

/// Why a link failed validation. Every parse problem becomes a variant
/// here; the validator never panics on malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateError {
    #[error("must start with vless://")]
    BadScheme,

    #[error("invalid UUID")]
    InvalidUuid,

    #[error("port out of range")]
    PortOutOfRange,

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("{0}")]
    Malformed(String),
}

/// Required query substrings, checked in order; the first missing one is
/// reported.
const REQUIRED_PARAMS: [&str; 6] = ["security=reality", "pbk=", "fp=", "sni=", "sid=", "flow="];

/// Checks that a vless:// link is well formed.
pub fn validate_link(link: &str) -> Result<(), ValidateError> {
    let rest = link
        .strip_prefix("vless://")
        .ok_or(ValidateError::BadScheme)?;

    let (uuid_part, rest) = rest
        .split_once('@')
        .ok_or_else(|| ValidateError::Malformed("missing '@' separator".to_string()))?;
    if Uuid::parse_str(uuid_part).is_err() {
        return Err(ValidateError::InvalidUuid);
    }

    let (host_port, query) = rest
        .split_once('?')
        .ok_or_else(|| ValidateError::Malformed("missing '?' query separator".to_string()))?;
    // rsplit keeps a ':' inside the host (IPv6 literals) out of the port
    let (_host, port_str) = host_port
        .rsplit_once(':')
        .ok_or_else(|| ValidateError::Malformed("missing ':' port separator".to_string()))?;
    let port: i64 = port_str
        .parse()
        .map_err(|_| ValidateError::Malformed(format!("invalid port: {port_str}")))?;
    if !(1..=65535).contains(&port) {
        return Err(ValidateError::PortOutOfRange);
    }

    let query = match query.split_once('#') {
        Some((before_fragment, _)) => before_fragment,
        None => query,
    };

    for required in REQUIRED_PARAMS {
        if !query.contains(required) {
            return Err(ValidateError::MissingParameter(required));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "vless://123e4567-e89b-12d3-a456-426614174000@1.2.3.4:443\
                         ?type=tcp&security=reality&pbk=abcDEF123&fp=chrome\
                         &sni=www.cloudflare.com&sid=a1b2c3d4&flow=xtls-rprx-vision\
                         &spx=%2F#REALITY";

    #[test]
    fn test_reference_link_is_valid() {
        assert_eq!(validate_link(VALID), Ok(()));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            validate_link("vmess://whatever"),
            Err(ValidateError::BadScheme)
        );
        assert_eq!(validate_link(""), Err(ValidateError::BadScheme));
    }

    #[test]
    fn test_invalid_uuid() {
        let link = VALID.replace("123e4567-e89b-12d3-a456-426614174000", "not-a-uuid");
        assert_eq!(validate_link(&link), Err(ValidateError::InvalidUuid));
    }

    #[test]
    fn test_missing_at_separator() {
        assert!(matches!(
            validate_link("vless://no-user-part:443?security=reality"),
            Err(ValidateError::Malformed(_))
        ));
    }

    #[test]
    fn test_port_boundaries() {
        for port in ["1", "65535"] {
            let link = VALID.replace(":443?", &format!(":{port}?"));
            assert_eq!(validate_link(&link), Ok(()), "port {port} should pass");
        }
        for port in ["0", "65536"] {
            let link = VALID.replace(":443?", &format!(":{port}?"));
            assert_eq!(
                validate_link(&link),
                Err(ValidateError::PortOutOfRange),
                "port {port} should fail"
            );
        }
    }

    #[test]
    fn test_non_numeric_port() {
        let link = VALID.replace(":443?", ":https?");
        assert!(matches!(
            validate_link(&link),
            Err(ValidateError::Malformed(_))
        ));
    }

    #[test]
    fn test_each_required_parameter_is_reported() {
        for required in ["security=reality", "pbk=", "fp=", "sni=", "sid=", "flow="] {
            let mutated = VALID.replace(required, "x-");
            assert_eq!(
                validate_link(&mutated),
                Err(ValidateError::MissingParameter(required)),
                "dropping {required} should be detected"
            );
        }
    }

    #[test]
    fn test_fragment_is_ignored() {
        // Parameters hidden behind '#' must not count
        let link = "vless://123e4567-e89b-12d3-a456-426614174000@1.2.3.4:443\
                    ?type=tcp&security=reality&pbk=k&fp=chrome&sni=s&sid=i\
                    #flow=xtls-rprx-vision";
        assert_eq!(
            validate_link(link),
            Err(ValidateError::MissingParameter("flow="))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidateError::MissingParameter("pbk=").to_string(),
            "missing parameter: pbk="
        );
        assert_eq!(
            ValidateError::PortOutOfRange.to_string(),
            "port out of range"
        );
    }
}
