use super::*;

fn record(role: &str) -> UserRecord {
    UserRecord {
        id: Uuid::nil(),
        email: "organizer@usm.my".into(),
        name: "Demo Organizer".into(),
        role: role.into(),
        matric_number: None,
        organization_id: Some("usm-computer-science-society".into()),
    }
}

#[test]
fn record_converts_to_user() {
    let user = User::try_from(record("organizer")).unwrap();
    assert_eq!(user.id, "00000000-0000-0000-0000-000000000000");
    assert_eq!(user.role, Role::Organizer);
    assert_eq!(user.organization_id.as_deref(), Some("usm-computer-science-society"));
}

#[test]
fn record_with_unknown_role_fails_to_convert() {
    assert!(User::try_from(record("superuser")).is_err());
}

#[test]
fn decode_maps_role_failure_to_column_decode() {
    let err = decode(record("superuser")).unwrap_err();
    assert!(matches!(err, sqlx::Error::ColumnDecode { ref index, .. } if index == "role"));
}

#[test]
fn user_columns_match_record_fields() {
    for field in ["id", "email", "name", "role", "matric_number", "organization_id"] {
        assert!(USER_COLUMNS.contains(field), "missing column {field}");
    }
}
