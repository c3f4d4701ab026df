use super::*;
use crate::net::test_helpers::session;

const BASE: &str = "https://demo.supabase.co";

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(signup_endpoint(BASE), "https://demo.supabase.co/auth/v1/signup");
    assert_eq!(user_endpoint(BASE), "https://demo.supabase.co/auth/v1/user");
    assert_eq!(logout_endpoint(BASE), "https://demo.supabase.co/auth/v1/logout");
}

#[test]
fn recent_logos_endpoint_orders_and_limits() {
    assert_eq!(
        recent_logos_endpoint(BASE, 12),
        "https://demo.supabase.co/rest/v1/user_logos?select=*&order=created_at.desc&limit=12"
    );
}

#[test]
fn bearer_token_reads_access_token() {
    assert_eq!(bearer_token(&session("abc")), Some("abc"));
    assert_eq!(bearer_token(&SessionHandle::from_raw(serde_json::json!({}))), None);
}

#[test]
fn tag_payload_sets_username_metadata() {
    assert_eq!(tag_payload("alice"), serde_json::json!({ "data": { "x_username": "alice" } }));
}

#[test]
fn status_error_prefers_backend_message() {
    assert_eq!(
        status_error(422, r#"{"code":422,"msg":"Anonymous sign-ins are disabled"}"#),
        BackendError::Status { status: 422, message: "Anonymous sign-ins are disabled".to_owned() }
    );
    assert_eq!(
        status_error(401, r#"{"message":"JWT expired"}"#),
        BackendError::Status { status: 401, message: "JWT expired".to_owned() }
    );
}

#[test]
fn status_error_falls_back_to_raw_body() {
    assert_eq!(
        status_error(502, "Bad Gateway"),
        BackendError::Status { status: 502, message: "Bad Gateway".to_owned() }
    );
}

#[test]
fn parse_session_requires_access_token() {
    let handle = parse_session(r#"{"access_token":"t1","refresh_token":"r1","user":{"id":"u"}}"#).unwrap();
    assert_eq!(bearer_token(&handle), Some("t1"));
    assert!(matches!(parse_session(r#"{"user":{}}"#), Err(BackendError::Decode(_))));
    assert!(matches!(parse_session("nope"), Err(BackendError::Decode(_))));
}

#[test]
fn parse_logo_rows_skips_malformed_rows() {
    let body = r##"[
        {"id":"1","x_username":"a","logo_colors":{"background":"#000","letterI":"#111","letterN":"#222","letterC":"#333","letterO":"#444","line1":"#555","line2":"#666","line3":"#777"},"created_at":"2025-01-02T00:00:00+00:00","updated_at":"2025-01-02T00:00:00+00:00"},
        {"id":"2","x_username":"b","logo_colors":{"background":"#000","text":"#fff"},"created_at":"2025-01-01T00:00:00+00:00","updated_at":"2025-01-01T00:00:00+00:00"}
    ]"##;
    let rows = parse_logo_rows(body).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "1");
}

#[test]
fn parse_logo_rows_rejects_non_array() {
    assert!(matches!(parse_logo_rows(r#"{"message":"oops"}"#), Err(BackendError::Decode(_))));
}

#[test]
fn parse_inserted_takes_first_row() {
    let body = r##"[{"id":"9","x_username":"z","logo_colors":{"background":"#000","letterI":"#111","letterN":"#222","letterC":"#333","letterO":"#444","line1":"#555","line2":"#666","line3":"#777"},"created_at":"2025-01-02T00:00:00Z","updated_at":"2025-01-02T00:00:00Z"}]"##;
    assert_eq!(parse_inserted(body).unwrap().id, "9");
    assert!(matches!(parse_inserted("[]"), Err(BackendError::Decode(_))));
}

#[test]
fn unconfigured_backend_reports_it() {
    assert!(!HttpBackend::default().is_configured());
    let configured = HttpBackend::new(crate::config::BackendConfig::new(BASE, "anon"));
    assert!(configured.is_configured());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let backend = HttpBackend::new(crate::config::BackendConfig::new(BASE, "anon"));
    let result = futures::executor::block_on(backend.create_anonymous_session());
    assert_eq!(result.unwrap_err(), BackendError::Unavailable);
    let result = futures::executor::block_on(backend.list_recent(12));
    assert_eq!(result.unwrap_err(), BackendError::Unavailable);
}
