//! Access-control guards
//!
//! Request-entry gates evaluated before facade logic runs. The acting
//! principal's identity arrives from the external authentication
//! boundary and is trusted as given.

use thiserror::Error;
use uuid::Uuid;

/// Identity of the acting principal, supplied by the boundary
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub is_admin: bool,
}

/// Guard failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("acting user does not own this resource")]
    Forbidden,
}

/// A place is created on behalf of its owner: the acting user must be
/// that owner. No admin bypass.
pub fn place_owner_matches_user(ctx: &AuthContext, owner_id: Uuid) -> Result<(), AuthError> {
    if ctx.user_id == owner_id {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

/// The acting user must own the resource, unless they are an admin.
pub fn owner_matches_or_admin(ctx: &AuthContext, owner_id: Uuid) -> Result<(), AuthError> {
    if ctx.is_admin || ctx.user_id == owner_id {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(user_id: Uuid, is_admin: bool) -> AuthContext {
        AuthContext { user_id, is_admin }
    }

    #[test]
    fn test_owner_passes_both_guards() {
        let owner = Uuid::new_v4();
        let c = ctx(owner, false);
        assert_eq!(place_owner_matches_user(&c, owner), Ok(()));
        assert_eq!(owner_matches_or_admin(&c, owner), Ok(()));
    }

    #[test]
    fn test_stranger_is_forbidden() {
        let c = ctx(Uuid::new_v4(), false);
        let owner = Uuid::new_v4();
        assert_eq!(place_owner_matches_user(&c, owner), Err(AuthError::Forbidden));
        assert_eq!(owner_matches_or_admin(&c, owner), Err(AuthError::Forbidden));
    }

    #[test]
    fn test_admin_bypass_is_scoped() {
        let c = ctx(Uuid::new_v4(), true);
        let owner = Uuid::new_v4();
        assert_eq!(owner_matches_or_admin(&c, owner), Ok(()));
        // Creating a place for someone else stays forbidden even for admins.
        assert_eq!(place_owner_matches_user(&c, owner), Err(AuthError::Forbidden));
    }
}
