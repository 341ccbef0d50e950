use super::*;
use usm_session::User;

fn signed_in(role: Role) -> SessionState {
    SessionState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "a@student.usm.my".to_owned(),
            name: "Aisyah".to_owned(),
            role,
            matric_number: None,
            organization_id: None,
        }),
        loading: false,
    }
}

fn signed_out() -> SessionState {
    SessionState { user: None, loading: false }
}

#[test]
fn step_waits_while_loading() {
    let mut guard = RouteGuard::authenticated(None);
    assert_eq!(step(&mut guard, &SessionState::default()), GuardStep { granted: false, navigate_to: None });
}

#[test]
fn step_grants_signed_in_user() {
    let mut guard = RouteGuard::authenticated(None);
    assert_eq!(step(&mut guard, &signed_in(Role::Student)), GuardStep { granted: true, navigate_to: None });
}

#[test]
fn step_navigates_once_then_stays_quiet() {
    let mut guard = RouteGuard::authenticated(None);
    assert_eq!(
        step(&mut guard, &signed_out()),
        GuardStep { granted: false, navigate_to: Some("/login".to_owned()) }
    );
    assert_eq!(step(&mut guard, &signed_out()), GuardStep { granted: false, navigate_to: None });
}

#[test]
fn step_redirects_after_logout_on_granted_page() {
    let mut guard = RouteGuard::role(&[Role::Admin], None);
    assert!(step(&mut guard, &signed_in(Role::Admin)).granted);
    assert_eq!(
        step(&mut guard, &signed_out()),
        GuardStep { granted: false, navigate_to: Some("/login".to_owned()) }
    );
}

#[test]
fn step_sends_wrong_role_to_fallback() {
    let mut guard = RouteGuard::role(&[Role::Organizer, Role::Admin], Some("/dashboard"));
    assert_eq!(
        step(&mut guard, &signed_in(Role::Student)),
        GuardStep { granted: false, navigate_to: Some("/dashboard".to_owned()) }
    );
}
