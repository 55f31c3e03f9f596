//! Terminal presentation of a generated link
//!
//! Plain print happens at the call site; this module holds the annotated
//! human-readable block and the QR rendering. QR support is compiled in
//! behind the `qr` cargo feature so the default build stays lean.

use crate::models::{ConnectionParams, DEFAULT_FLOW};

/// Whether QR rendering was compiled in. Resolved once at build time and
/// consulted at the render call site.
pub const QR_AVAILABLE: bool = cfg!(feature = "qr");

/// Returns the annotated human-readable block for a link.
pub fn human_readable(link: &str, params: &ConnectionParams) -> String {
    let mut out = String::new();
    out.push_str("\n--- Connection parameters (REALITY) ---\n");
    out.push_str(&format!("  UUID:         {}\n", params.uuid));
    out.push_str(&format!(
        "  Server:       {}:{}\n",
        params.host, params.port
    ));
    out.push_str(&format!("  SNI (serverName): {}\n", params.server_name));
    out.push_str(&format!("  Fingerprint:  {}\n", params.fingerprint));
    out.push_str(&format!("  Short ID:     {}\n", params.short_id));
    out.push_str(&format!("  Flow:         {}\n", DEFAULT_FLOW));
    out.push_str("\n--- vless link ---\n");
    out.push_str(link);
    out.push('\n');
    out
}

/// Prints the link as a QR code to the terminal. Without the `qr` feature
/// this emits an instructional note on stderr and returns; never fatal.
pub fn print_qr(link: &str) {
    if !QR_AVAILABLE {
        eprintln!("QR output is not compiled in; rebuild with `cargo build --features qr`");
        return;
    }
    render_qr(link);
}

#[cfg(feature = "qr")]
fn render_qr(link: &str) {
    use qrcode::render::unicode;
    use qrcode::QrCode;

    match QrCode::new(link.as_bytes()) {
        Ok(code) => {
            let art = code.render::<unicode::Dense1x2>().quiet_zone(true).build();
            println!("{}", art);
        }
        Err(e) => log::error!("failed to encode QR code: {}", e),
    }
}

#[cfg(not(feature = "qr"))]
fn render_qr(_link: &str) {}
