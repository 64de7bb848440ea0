//! Registration form state
//!
//! Six required text fields plus display toggles. Submitting checks that
//! every field is filled and that both passwords match; on success the form
//! is cleared and a [`Registration`] is handed back to the caller.

use secrecy::SecretString;
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

/// Character shown in place of each password character
pub const MASK_CHAR: char = '•';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    #[default]
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
}

impl RegistrationField {
    /// Fields in display order
    pub const ALL: [RegistrationField; 6] = [
        RegistrationField::FirstName,
        RegistrationField::LastName,
        RegistrationField::Email,
        RegistrationField::PhoneNumber,
        RegistrationField::Password,
        RegistrationField::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::FirstName => "First Name",
            RegistrationField::LastName => "Last Name",
            RegistrationField::Email => "Email",
            RegistrationField::PhoneNumber => "Phone Number",
            RegistrationField::Password => "Password",
            RegistrationField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(
            self,
            RegistrationField::Password | RegistrationField::ConfirmPassword
        )
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next field, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A successful registration
///
/// The password is only reachable through `secrecy::ExposeSecret`.
#[derive(Debug)]
pub struct Registration {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: SecretString,
    pub registered_at: i64,
}

impl Registration {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    password: String,
    confirm_password: String,
    pub show_password: bool,
    pub night_mode: bool,
    /// Message from the last failed submit
    pub error_message: Option<String>,
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("show_password", &self.show_password)
            .field("night_mode", &self.night_mode)
            .field("error_message", &self.error_message)
            .finish()
    }
}

impl Drop for RegistrationForm {
    fn drop(&mut self) {
        self.password.zeroize();
        self.confirm_password.zeroize();
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::Email => &self.email,
            RegistrationField::PhoneNumber => &self.phone_number,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn value_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::PhoneNumber => &mut self.phone_number,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        let slot = self.value_mut(field);
        slot.zeroize();
        *slot = value.into();
    }

    pub fn push_char(&mut self, field: RegistrationField, c: char) {
        self.value_mut(field).push(c);
    }

    pub fn pop_char(&mut self, field: RegistrationField) {
        self.value_mut(field).pop();
    }

    /// Value as it should be drawn: secret fields are masked unless
    /// passwords are shown
    pub fn display_value(&self, field: RegistrationField) -> String {
        let value = self.value(field);
        if field.is_secret() && !self.show_password {
            std::iter::repeat(MASK_CHAR).take(value.chars().count()).collect()
        } else {
            value.to_string()
        }
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_night_mode(&mut self) {
        self.night_mode = !self.night_mode;
    }

    /// Check the form without changing it
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if RegistrationField::ALL
            .iter()
            .any(|field| self.value(*field).is_empty())
        {
            return Err(RegistrationError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }

        Ok(())
    }

    /// Validate and, on success, take the entered values and reset the form
    ///
    /// On failure the fields are kept and `error_message` is set.
    pub fn submit(&mut self) -> Result<Registration, RegistrationError> {
        if let Err(e) = self.validate() {
            self.error_message = Some(e.to_string());
            return Err(e);
        }

        let registration = Registration {
            user_id: Uuid::new_v4(),
            first_name: std::mem::take(&mut self.first_name),
            last_name: std::mem::take(&mut self.last_name),
            email: std::mem::take(&mut self.email),
            phone_number: std::mem::take(&mut self.phone_number),
            password: SecretString::from(std::mem::take(&mut self.password)),
            registered_at: chrono::Utc::now().timestamp(),
        };

        self.clear();
        tracing::info!(user_id = %registration.user_id, "Registration accepted");
        Ok(registration)
    }

    /// Empty every field and the error message; display toggles are kept
    pub fn clear(&mut self) {
        for field in RegistrationField::ALL {
            self.value_mut(field).zeroize();
        }
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn filled() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set(RegistrationField::FirstName, "Ada");
        form.set(RegistrationField::LastName, "Lovelace");
        form.set(RegistrationField::Email, "ada@example.com");
        form.set(RegistrationField::PhoneNumber, "555-0100");
        form.set(RegistrationField::Password, "engine");
        form.set(RegistrationField::ConfirmPassword, "engine");
        form
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut form = filled();
        form.set(RegistrationField::Email, "");

        let err = form.submit().unwrap_err();

        assert_eq!(err, RegistrationError::MissingFields);
        assert_eq!(form.error_message.as_deref(), Some("Please fill in all fields."));
        assert_eq!(form.value(RegistrationField::FirstName), "Ada");
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut form = filled();
        form.set(RegistrationField::ConfirmPassword, "engines");

        let err = form.submit().unwrap_err();

        assert_eq!(err, RegistrationError::PasswordMismatch);
        assert_eq!(form.error_message.as_deref(), Some("Passwords do not match."));
    }

    #[test]
    fn test_missing_fields_checked_before_mismatch() {
        let mut form = filled();
        form.set(RegistrationField::ConfirmPassword, "");

        assert_eq!(form.validate(), Err(RegistrationError::MissingFields));
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let mut form = filled();
        form.error_message = Some("Passwords do not match.".to_string());
        form.show_password = true;

        let registration = form.submit().unwrap();

        assert_eq!(registration.display_name(), "Ada Lovelace");
        assert_eq!(registration.email, "ada@example.com");
        assert_eq!(registration.password.expose_secret(), "engine");
        for field in RegistrationField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(form.error_message.is_none());
        assert!(form.show_password);
    }

    #[test]
    fn test_password_masked_until_shown() {
        let mut form = filled();

        assert_eq!(form.display_value(RegistrationField::Password), "••••••");
        assert_eq!(form.display_value(RegistrationField::Email), "ada@example.com");

        form.toggle_show_password();
        assert_eq!(form.display_value(RegistrationField::Password), "engine");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut form = RegistrationForm::new();
        form.push_char(RegistrationField::FirstName, 'A');
        form.push_char(RegistrationField::FirstName, 'l');
        form.pop_char(RegistrationField::FirstName);
        form.pop_char(RegistrationField::LastName);

        assert_eq!(form.value(RegistrationField::FirstName), "A");
        assert_eq!(form.value(RegistrationField::LastName), "");
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(RegistrationField::ConfirmPassword.next(), RegistrationField::FirstName);
        assert_eq!(RegistrationField::FirstName.prev(), RegistrationField::ConfirmPassword);
        assert_eq!(RegistrationField::Email.next(), RegistrationField::PhoneNumber);
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let form = filled();
        let debug = format!("{:?}", form);

        assert!(!debug.contains("engine"));
        assert!(debug.contains("[REDACTED]"));
    }
}
