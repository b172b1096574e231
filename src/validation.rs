//! Validation boundary - turns a non-zero change count into a typed error.

use secrecy::SecretString;
use thiserror::Error;

use crate::counter::count_changes;

/// Name shown in the error when the password owner has none.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Change {count} {} of {name}'s password", character_unit(.count))]
    NotStrong { name: String, count: usize },
}

impl PasswordPolicyError {
    /// Number of character changes that would make the password strong.
    pub fn count(&self) -> usize {
        match self {
            PasswordPolicyError::NotStrong { count, .. } => *count,
        }
    }
}

fn character_unit(count: &usize) -> &'static str {
    if *count == 1 { "character" } else { "characters" }
}

/// Checks a password on behalf of its owner.
///
/// # Errors
///
/// Returns `PasswordPolicyError::NotStrong` when at least one change is needed.
/// `name` falls back to [`DEFAULT_DISPLAY_NAME`].
///
/// # Example
///
/// ```rust
/// use pwd_change_count::validate_password_strength;
///
/// let err = validate_password_strength(Some("Dushyant"), None).unwrap_err();
/// assert_eq!(err.to_string(), "Change 10 characters of Dushyant's password");
/// ```
pub fn validate_password_strength(
    name: Option<&str>,
    password: Option<&SecretString>,
) -> Result<(), PasswordPolicyError> {
    let count = count_changes(password);
    if count == 0 {
        return Ok(());
    }

    let name = name.unwrap_or(DEFAULT_DISPLAY_NAME).to_string();

    #[cfg(feature = "tracing")]
    tracing::info!("password needs {} changes to be strong", count);

    Err(PasswordPolicyError::NotStrong { name, count })
}
