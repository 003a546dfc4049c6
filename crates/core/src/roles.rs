//! Role names shared between auth token claims and the RBAC extractors.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_SUPERVISOR: &str = "SUPERVISOR";
pub const ROLE_WORKER: &str = "WORKER";

/// All roles a user account may hold.
pub const ALL_ROLES: [&str; 3] = [ROLE_ADMIN, ROLE_SUPERVISOR, ROLE_WORKER];

/// Validate a role name received from a request body.
pub fn validate_role(role: &str) -> Result<(), crate::error::CoreError> {
    if ALL_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(crate::error::CoreError::Validation(format!(
            "Unknown role: {role}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_roles() {
        for role in ALL_ROLES {
            assert!(validate_role(role).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(validate_role("MANAGER").is_err());
        assert!(validate_role("admin").is_err());
    }
}
