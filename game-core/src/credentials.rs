use game_types::ValidationError;

pub const MIN_USERNAME_LENGTH: usize = 5;
pub const MIN_PASSWORD_LENGTH: usize = 5;
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['$', '%', '*', '@'];

pub const ADMIN_USERNAME: &str = "Admin";
pub const ADMIN_PASSWORD: &str = "Admin123@";

/// Username needs at least five characters with both upper and lower case letters.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooShort {
            min: MIN_USERNAME_LENGTH,
        });
    }

    let has_upper = username.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = username.chars().any(|c| c.is_ascii_lowercase());
    if !has_upper || !has_lower {
        return Err(ValidationError::UsernameMissingCase);
    }

    Ok(())
}

/// Password needs at least five characters including a letter, a digit and
/// one of `$ % * @`. Checks run in that order and the first failure wins.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::PasswordMissingLetter);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }

    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(&c)) {
        return Err(ValidationError::PasswordMissingSpecial);
    }

    Ok(())
}

/// The credential pair that grants admin access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact match only; a pattern-valid pair is not enough.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(ADMIN_USERNAME, ADMIN_PASSWORD)
    }
}
