//! Password verification seam.
//!
//! There is no credential check yet: the directory only confirms that an
//! email exists. `AcceptAnyPassword` is the stand-in until the hosted auth
//! service verifies passwords, and it says so in the logs every time it runs.
//! Replace it with a real `CredentialVerifier`; do not extend it.

use crate::user::User;

pub trait CredentialVerifier {
    /// Return `true` when `password` is valid for `user`.
    fn verify(&self, user: &User, password: &str) -> bool;
}

/// Placeholder verifier that accepts every password.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyPassword;

impl CredentialVerifier for AcceptAnyPassword {
    fn verify(&self, user: &User, _password: &str) -> bool {
        tracing::warn!(
            user_id = %user.id,
            "password not verified: placeholder credential check accepted the login"
        );
        true
    }
}
