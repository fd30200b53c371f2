//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `users.role` in the initial
//! schema migration.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STUDENT: &str = "student";

/// All valid role values.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_STUDENT];

/// Reject role names outside [`VALID_ROLES`].
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown role '{role}', expected one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn known_roles_pass() {
        assert!(validate_role(ROLE_ADMIN).is_ok());
        assert!(validate_role(ROLE_STUDENT).is_ok());
    }

    #[test]
    fn unknown_role_rejected() {
        assert_matches!(validate_role("instructor"), Err(CoreError::Validation(_)));
    }
}
