// Standard library
use std::net::Ipv4Addr;
use std::sync::LazyLock;

// 3rd party crates
use regex::Regex;

/// First dotted quad with every octet in 0-255. The per-octet
/// disjunction is deliberate: a generic `\d{1,3}` would happily match
/// version strings like `999.1.1.1` whole, while this pattern skips
/// ahead to the first in-range sub-sequence instead.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)",
    )
    .expect("IPv4 pattern is valid")
});

/// Decodes a response body, preferring UTF-8.
///
/// Echo services occasionally serve HTML in a legacy 8-bit encoding.
/// The Latin-1 fallback maps every byte to the code point of the same
/// value, so it accepts arbitrary bytes and cannot fail; the dotted
/// quad we are after is ASCII and survives either decoding.
pub fn decode_body(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Returns the first in-range dotted quad in `text`, if any.
pub fn extract_ipv4(text: &str) -> Option<Ipv4Addr> {
    IPV4_PATTERN
        .find(text)
        .map(|m| m.as_str().parse().expect("matched octets are in range"))
}
