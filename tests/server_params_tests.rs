use std::io::Write;

use tempfile::NamedTempFile;

use reality_link_gen::ServerParams;

fn write_doc(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn loads_a_complete_document() {
    let file = write_doc(
        r#"{
            "serverHost": "vpn.example.org",
            "serverPort": 8443,
            "publicKey": "pUbLiCkEy123",
            "serverName": "www.microsoft.com",
            "fingerprint": "firefox",
            "shortIds": ["0123abcd", "ffff0000"],
            "users": [
                {"id": "886313e1-3b8a-5372-9b90-0c9aee199e5d", "email": "alice@example.org"},
                {"id": "123e4567-e89b-12d3-a456-426614174000"}
            ]
        }"#,
    );

    let doc = ServerParams::load(file.path()).expect("load document");
    doc.ensure_complete().expect("document is complete");

    assert_eq!(doc.server_host, "vpn.example.org");
    assert_eq!(doc.server_port, Some(8443));
    assert_eq!(doc.public_key, "pUbLiCkEy123");
    assert_eq!(doc.server_name, "www.microsoft.com");
    assert_eq!(doc.fingerprint.as_deref(), Some("firefox"));
    // First user and first shortId are the ones selected
    assert_eq!(doc.first_short_id(), Some("0123abcd"));
    assert_eq!(
        doc.first_user_id(),
        Some("886313e1-3b8a-5372-9b90-0c9aee199e5d")
    );
}

#[test]
fn rejects_document_without_users() {
    let file = write_doc(r#"{"serverHost": "h", "publicKey": "k", "shortIds": ["abcd"]}"#);
    let doc = ServerParams::load(file.path()).expect("load document");
    assert!(doc.ensure_complete().is_err());
}

#[test]
fn rejects_document_without_short_ids() {
    let file = write_doc(r#"{"serverHost": "h", "publicKey": "k", "users": [{"id": "x"}]}"#);
    let doc = ServerParams::load(file.path()).expect("load document");
    assert!(doc.ensure_complete().is_err());
}

#[test]
fn invalid_json_is_an_error() {
    let file = write_doc("not json at all");
    assert!(ServerParams::load(file.path()).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(ServerParams::load(std::path::Path::new("/nonexistent/params.json")).is_err());
}
