use super::*;
use usm_session::Role;

fn reply(json: &str) -> Option<LoginReply> {
    serde_json::from_str(json).ok()
}

#[test]
fn login_result_returns_user_on_success() {
    let body = r#"{"success":true,"user":{"id":"u1","email":"a@student.usm.my","name":"Ali","role":"student"}}"#;
    let user = login_result(200, reply(body)).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Student);
}

#[test]
fn login_result_maps_server_error_codes() {
    assert_eq!(
        login_result(401, reply(r#"{"success":false,"error":"InvalidCredentials"}"#)),
        Err(LoginError::InvalidCredentials)
    );
    assert_eq!(
        login_result(400, reply(r#"{"success":false,"error":"InvalidEmailDomain"}"#)),
        Err(LoginError::InvalidEmailDomain)
    );
}

#[test]
fn login_result_treats_other_failures_as_service_errors() {
    assert_eq!(
        login_result(502, reply(r#"{"success":false,"error":"LookupFailed"}"#)),
        Err(LoginError::LookupFailed("sign-in failed: 502".to_owned()))
    );
    assert_eq!(login_result(500, None), Err(LoginError::LookupFailed("sign-in failed: 500".to_owned())));
}

#[test]
fn login_result_rejects_success_without_user() {
    assert!(login_result(200, reply(r#"{"success":true}"#)).is_err());
}

#[test]
fn fetch_error_separates_expired_session_from_wrong_role() {
    assert_eq!(fetch_error(401), FetchError::Unauthorized);
    assert_eq!(fetch_error(403), FetchError::Forbidden);
    assert_eq!(fetch_error(500), FetchError::Failed("request failed: 500".to_owned()));
}

#[test]
fn only_unauthorized_ends_the_local_session() {
    assert!(FetchError::Unauthorized.ends_session());
    assert!(!FetchError::Forbidden.ends_session());
    assert!(!FetchError::Failed("boom".to_owned()).ends_session());
}
