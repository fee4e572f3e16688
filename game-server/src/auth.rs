use chrono::NaiveDate;
use game_core::{AdminCredentials, validate_password, validate_username};
use game_types::{Identity, ValidationError};

/// Login gate: shape validation plus admin elevation.
#[derive(Debug, Clone, Default)]
pub struct AuthService {
    admin: AdminCredentials,
}

impl AuthService {
    pub fn new(admin: AdminCredentials) -> Self {
        Self { admin }
    }

    /// Validate the submitted credentials and build a fresh identity.
    /// The admin flag is fixed here and never changes afterwards.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        today: NaiveDate,
    ) -> Result<Identity, AuthError> {
        validate_username(username)?;
        validate_password(password)?;

        let is_admin = self.admin.matches(username, password);
        if is_admin {
            tracing::debug!("Admin credentials accepted for {}", username);
        }

        Ok(Identity::new(username, is_admin, today))
    }

    pub fn require_admin(&self, identity: &Identity) -> Result<(), AuthError> {
        if identity.is_admin {
            Ok(())
        } else {
            tracing::warn!("{} attempted an admin action", identity.username);
            Err(AuthError::AdminRequired)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Please log in first")]
    NotLoggedIn,
    #[error("Admin access required")]
    AdminRequired,
}
