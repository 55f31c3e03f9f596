//! vless:// link builder
//!
//! Format: `vless://UUID@HOST:PORT?type=tcp&security=reality&pbk=...&fp=...&sni=...&sid=...&flow=...#TAG`

use crate::models::ConnectionParams;
use crate::utils::url_encode;

/// Assembles a vless:// link with REALITY parameters.
///
/// Query parameters are emitted in a fixed order so the output is
/// byte-stable for the same input. Every value goes through [`url_encode`];
/// the builder itself assumes already-validated parameters and has no
/// error paths.
pub fn build_vless_link(params: &ConnectionParams) -> String {
    let mut pairs: Vec<(&str, &str)> = vec![
        ("type", "tcp"),
        ("security", "reality"),
        ("pbk", &params.public_key),
        ("fp", params.fingerprint.as_str()),
        ("sni", &params.server_name),
        ("sid", &params.short_id),
        ("flow", &params.flow),
    ];
    // spx (spider X) - path of the first camouflage request; only useful
    // when an SNI is set
    if !params.server_name.is_empty() {
        pairs.push(("spx", "/"));
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, url_encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "vless://{}@{}:{}?{}#{}",
        params.uuid,
        params.host,
        params.port,
        query,
        url_encode(&params.tag)
    )
}
