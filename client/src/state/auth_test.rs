use super::*;

// =============================================================
// Username normalization
// =============================================================

#[test]
fn username_strips_at_and_whitespace() {
    assert_eq!(Username::parse("@Alice  ").unwrap().as_str(), "Alice");
    assert_eq!(Username::parse("  bob ").unwrap().as_str(), "bob");
    assert_eq!(Username::parse("@@carol").unwrap().as_str(), "carol");
    assert_eq!(Username::parse(" @ dave ").unwrap().as_str(), "dave");
}

#[test]
fn username_keeps_inner_at_sign() {
    assert_eq!(Username::parse("eve@home").unwrap().as_str(), "eve@home");
}

#[test]
fn username_blank_is_missing() {
    for raw in ["", "   ", "\t\n"] {
        assert_eq!(Username::parse(raw), Err(ValidationError::Missing), "input {raw:?}");
    }
}

#[test]
fn username_only_at_is_invalid() {
    for raw in ["@", " @ ", "@@@", "@  "] {
        assert_eq!(Username::parse(raw), Err(ValidationError::Invalid), "input {raw:?}");
    }
}

#[test]
fn validation_messages_match_login_copy() {
    assert_eq!(ValidationError::Missing.to_string(), "Please enter your X username");
    assert_eq!(ValidationError::Invalid.to_string(), "Please enter a valid X username");
}

// =============================================================
// AuthState invariant + persistence shape
// =============================================================

#[test]
fn auth_state_default_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.username(), None);
    assert_eq!(state.session(), None);
}

#[test]
fn auth_state_logged_in_is_authenticated() {
    let state = AuthState::logged_in(Username::parse("alice").unwrap(), None);
    assert!(state.is_authenticated());
    assert_eq!(state.username(), Some("alice"));
}

#[test]
fn auth_state_serializes_camel_case_record() {
    let session = SessionHandle::from_raw(serde_json::json!({ "access_token": "t" }));
    let state = AuthState::logged_in(Username::parse("alice").unwrap(), Some(session));
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "isAuthenticated": true,
            "username": "alice",
            "remoteSession": { "access_token": "t" }
        })
    );
}

#[test]
fn auth_state_reads_legacy_record_without_session() {
    let state: AuthState = serde_json::from_str(r#"{"isAuthenticated":true,"username":"alice"}"#).unwrap();
    assert_eq!(state.username(), Some("alice"));
    assert_eq!(state.session(), None);
}

#[test]
fn auth_state_authenticated_without_username_reads_logged_out() {
    let state: AuthState = serde_json::from_str(r#"{"isAuthenticated":true,"username":null}"#).unwrap();
    assert!(!state.is_authenticated());
    let state: AuthState = serde_json::from_str(r#"{"isAuthenticated":true,"username":"  @ "}"#).unwrap();
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_unauthenticated_flag_drops_username() {
    let state: AuthState = serde_json::from_str(r#"{"isAuthenticated":false,"username":"alice"}"#).unwrap();
    assert!(!state.is_authenticated());
    assert_eq!(state.username(), None);
}

#[test]
fn session_handle_is_transparent_json() {
    let raw = serde_json::json!({ "access_token": "abc", "user": { "id": "u1" } });
    let handle: SessionHandle = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(handle.raw(), &raw);
}

#[test]
fn auth_phase_defaults_to_logged_out() {
    assert_eq!(AuthPhase::default(), AuthPhase::LoggedOut);
}
