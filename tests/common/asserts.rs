#![allow(dead_code)]

use super::headers::{has_header, header_value};
use cors_policy_rs::Headers;
use cors_policy_rs::constants::header;

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for {name} in {headers:?}",
    );
}

pub fn assert_header_absent(headers: &Headers, name: &str) {
    assert!(
        !has_header(headers, name),
        "{name} should be absent from {headers:?}",
    );
}

/// `Vary: Origin` must directly follow the allow-origin header.
pub fn assert_origin_then_vary(headers: &Headers, origin: &str) {
    let position = headers
        .iter()
        .position(|entry| entry.name == header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap_or_else(|| panic!("allow-origin missing from {headers:?}"));
    assert_eq!(headers[position].value, origin);
    let next = headers
        .get(position + 1)
        .unwrap_or_else(|| panic!("vary missing after allow-origin in {headers:?}"));
    assert_eq!(next.name, header::VARY);
    assert_eq!(next.value, header::ORIGIN);
}
