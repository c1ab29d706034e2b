use crate::api::extractors::authenticated_user::extract_token;

use am_auth::AuthError;

use axum::http::{HeaderMap, HeaderValue};
use googletest::prelude::*;

fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    map
}

#[test]
fn given_bearer_authorization_when_extracted_then_prefix_is_stripped() {
    let token = extract_token(&headers(&[("authorization", "Bearer abc.def.ghi")])).unwrap();

    assert_that!(token.as_str(), eq("abc.def.ghi"));
}

#[test]
fn given_authorization_without_scheme_when_extracted_then_whole_value_is_token() {
    let token = extract_token(&headers(&[("authorization", "abc.def.ghi")])).unwrap();

    assert_that!(token.as_str(), eq("abc.def.ghi"));
}

#[test]
fn given_only_x_auth_token_when_extracted_then_uses_it() {
    let token = extract_token(&headers(&[("x-auth-token", "abc.def.ghi")])).unwrap();

    assert_that!(token.as_str(), eq("abc.def.ghi"));
}

#[test]
fn given_both_headers_when_extracted_then_authorization_wins() {
    let token = extract_token(&headers(&[
        ("authorization", "Bearer from-authorization"),
        ("x-auth-token", "from-x-auth-token"),
    ]))
    .unwrap();

    assert_that!(token.as_str(), eq("from-authorization"));
}

#[test]
fn given_no_token_headers_when_extracted_then_missing_header() {
    let result = extract_token(&HeaderMap::new());

    assert!(matches!(result, Err(AuthError::MissingHeader { .. })));
}

#[test]
fn given_empty_bearer_when_extracted_then_missing_header() {
    let result = extract_token(&headers(&[("authorization", "Bearer ")]));

    assert!(matches!(result, Err(AuthError::MissingHeader { .. })));
}
