use super::*;
use usm_session::Role;

fn student() -> User {
    User {
        id: "u1".to_owned(),
        email: "ali@student.usm.my".to_owned(),
        name: "Ali".to_owned(),
        role: Role::Student,
        matric_number: Some("A12345".to_owned()),
        organization_id: None,
    }
}

#[test]
fn profile_rows_list_fields_in_order() {
    let labels: Vec<_> = profile_rows(&student()).into_iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec!["Name", "Email", "Role", "Matric", "Organization"]);
}

#[test]
fn profile_rows_show_role_and_placeholder_for_missing_fields() {
    let rows = profile_rows(&student());
    assert_eq!(rows[2].1, "student");
    assert_eq!(rows[3].1, "A12345");
    assert_eq!(rows[4].1, "—");
}
