//! URL encoding/decoding utilities

/// Encodes a string using URL encoding
///
/// Every character outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) is
/// escaped as `%XX`, so `/`, `=`, `&` and `#` never leak into a query value.
///
/// # Examples
/// ```
/// use reality_link_gen::utils::url::url_encode;
///
/// assert_eq!(url_encode("Hello World!"), "Hello%20World%21");
/// assert_eq!(url_encode("/"), "%2F");
/// ```
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decodes a URL-encoded string
///
/// Returns the original string unchanged if decoding fails.
///
/// # Examples
/// ```
/// use reality_link_gen::utils::url::url_decode;
///
/// assert_eq!(url_decode("Hello%20World%21"), "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}
