use super::*;

fn user(role: Role) -> User {
    User {
        id: "00000000-0000-0000-0000-000000000001".into(),
        email: "someone@usm.my".into(),
        name: "Someone".into(),
        role,
        matric_number: None,
        organization_id: None,
    }
}

// =============================================================================
// status_for / authorize
// =============================================================================

#[test]
fn status_for_maps_guard_outcomes() {
    assert_eq!(status_for(&GuardOutcome::Granted), Ok(()));
    assert_eq!(status_for(&GuardOutcome::Redirect("/login".into())), Err(StatusCode::UNAUTHORIZED));
    assert_eq!(status_for(&GuardOutcome::Redirect("/".into())), Err(StatusCode::FORBIDDEN));
    assert_eq!(status_for(&GuardOutcome::Pending), Err(StatusCode::SERVICE_UNAVAILABLE));
}

#[test]
fn authorize_without_user_is_unauthorized() {
    assert_eq!(authorize(None, &[Role::Admin]), Err(StatusCode::UNAUTHORIZED));
}

#[test]
fn authorize_wrong_role_is_forbidden() {
    assert_eq!(authorize(Some(&user(Role::Student)), &[Role::Organizer]), Err(StatusCode::FORBIDDEN));
    assert_eq!(authorize(Some(&user(Role::Organizer)), &[Role::Admin]), Err(StatusCode::FORBIDDEN));
}

#[test]
fn authorize_matching_role_passes() {
    assert_eq!(authorize(Some(&user(Role::Admin)), &[Role::Admin]), Ok(()));
    assert_eq!(authorize(Some(&user(Role::Organizer)), &[Role::Organizer, Role::Admin]), Ok(()));
}

#[test]
fn auth_user_require_delegates_to_authorize() {
    let auth = AuthUser { user: user(Role::Student) };
    assert_eq!(auth.require(&[Role::Student]), Ok(()));
    assert_eq!(auth.require(&[Role::Admin]), Err(StatusCode::FORBIDDEN));
}

// =============================================================================
// login_error_status / LoginResponse
// =============================================================================

#[test]
fn login_errors_map_to_distinct_statuses() {
    assert_eq!(login_error_status(&LoginError::InvalidEmailDomain), StatusCode::BAD_REQUEST);
    assert_eq!(login_error_status(&LoginError::InvalidCredentials), StatusCode::UNAUTHORIZED);
    assert_eq!(login_error_status(&LoginError::LookupFailed("down".into())), StatusCode::BAD_GATEWAY);
}

#[test]
fn login_response_flattens_outcome() {
    let failed = LoginResponse { outcome: LoginOutcome::failed(LoginError::InvalidCredentials), user: None };
    assert_eq!(
        serde_json::to_value(&failed).unwrap(),
        serde_json::json!({ "success": false, "error": "InvalidCredentials" })
    );

    let ok = LoginResponse { outcome: LoginOutcome::succeeded(), user: Some(user(Role::Student)) };
    let value = serde_json::to_value(&ok).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["user"]["role"], "student");
    assert!(value.get("error").is_none());
}

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_with_ttl() {
    let cookie = session_cookie("abc".into(), true, 24);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_session_cookie(false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.secure(), Some(false));
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}
