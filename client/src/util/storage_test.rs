#![cfg(not(feature = "csr"))]

use super::*;
use usm_session::Role;

#[test]
fn native_slot_is_always_empty() {
    let store = LocalStorageStore;
    assert!(store.load().unwrap().is_none());
}

#[test]
fn native_writes_are_accepted_and_discarded() {
    let store = LocalStorageStore;
    let user = User {
        id: "u1".to_owned(),
        email: "a@student.usm.my".to_owned(),
        name: "Aisyah".to_owned(),
        role: Role::Student,
        matric_number: None,
        organization_id: None,
    };
    store.save(&user).unwrap();
    assert!(store.load().unwrap().is_none());
    store.clear().unwrap();
}
