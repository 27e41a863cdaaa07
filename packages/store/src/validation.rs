//! Client-side form validation. These errors block submission and are shown
//! inline next to the form; they never reach the backend.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email and password are required")]
    CredentialsRequired,
    #[error("All fields are required")]
    AllFieldsRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Title is required")]
    TitleRequired,
    #[error("Content is required")]
    ContentRequired,
}

/// Check the sign-in form.
pub fn sign_in(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::CredentialsRequired);
    }
    Ok(())
}

/// Check the sign-up form. Missing fields are reported before a password mismatch.
pub fn sign_up(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if [name, email, password, confirm_password]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(ValidationError::AllFieldsRequired);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}
