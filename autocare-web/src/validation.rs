//! Client-side form validation.
//!
//! Every validator is pure and returns a [`FieldErrors`] map keyed by form
//! field name. An empty map is the only success signal; nothing here is ever
//! sent to a backend.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use shared::models::VehicleType;
use std::collections::BTreeMap;
use thiserror::Error;

/// Field names, matching the request bodies they feed.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const CURRENT_PASSWORD: &str = "currentPassword";
    pub const NEW_PASSWORD: &str = "newPassword";
    pub const CENTER: &str = "center";
    pub const SERVICE: &str = "service";
    pub const DATE: &str = "date";
    pub const TIME_SLOT: &str = "timeSlot";
    pub const LICENSE_PLATE: &str = "licensePlate";
}

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 8;
const MIN_PLATE_LEN: usize = 2;
const MAX_PLATE_LEN: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A single rule failure. `Display` is the message shown under the field.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be at least {1} characters")]
    TooShort(&'static str, usize),
    #[error("{0} must be at most {1} characters")]
    TooLong(&'static str, usize),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain a lowercase letter, an uppercase letter and a digit")]
    PasswordTooWeak,
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,
    #[error("New password must be different from the current password")]
    PasswordUnchanged,
}

/// Field name to message. Empty means the form is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// No field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether `field` failed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`FieldErrors::is_valid`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failing fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Record the outcome of a rule for `field`, keeping the first failure.
    pub fn check(&mut self, field: &'static str, outcome: Result<(), ValidationError>) {
        if let Err(err) = outcome {
            self.0.entry(field).or_insert_with(|| err.to_string());
        }
    }

    /// Drop the message for `field`, e.g. once the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }
}

/// Registration and employee-creation form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Profile edit form. Email is shown read-only and not validated.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
}

/// Password change form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Login form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Booking workflow selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub center_id: Option<i64>,
    pub service_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub vehicle_type: VehicleType,
    pub license_plate: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            center_id: None,
            service_id: None,
            date: None,
            time_slot: None,
            vehicle_type: VehicleType::Sedan,
            license_plate: String::new(),
        }
    }
}

/// Required name of at least two characters after trimming.
///
/// # Errors
/// [`ValidationError::Required`] or [`ValidationError::TooShort`].
pub fn validate_name(label: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(label));
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort(label, MIN_NAME_LEN));
    }
    Ok(())
}

/// Required address shaped like `local@domain.tld`.
///
/// # Errors
/// [`ValidationError::Required`] or [`ValidationError::InvalidEmail`].
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("Email"));
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// At least eight characters with a lowercase letter, an uppercase letter
/// and a digit.
///
/// # Errors
/// [`ValidationError::Required`], [`ValidationError::PasswordTooShort`] or
/// [`ValidationError::PasswordTooWeak`].
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required("Password"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Err(ValidationError::PasswordTooWeak);
    }
    Ok(())
}

/// Confirmation must be present and equal `password` exactly.
///
/// # Errors
/// [`ValidationError::Required`] or [`ValidationError::PasswordsDoNotMatch`].
pub fn validate_confirmation(confirmation: &str, password: &str) -> Result<(), ValidationError> {
    if confirmation.is_empty() {
        return Err(ValidationError::Required("Password confirmation"));
    }
    if confirmation != password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

fn required(label: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(label))
    } else {
        Ok(())
    }
}

/// Registration and employee creation.
#[must_use]
pub fn validate_registration(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check(fields::FIRST_NAME, validate_name("First name", &form.first_name));
    errors.check(fields::LAST_NAME, validate_name("Last name", &form.last_name));
    errors.check(fields::EMAIL, validate_email(&form.email));
    errors.check(fields::PASSWORD, validate_password_strength(&form.password));
    errors.check(
        fields::CONFIRM_PASSWORD,
        validate_confirmation(&form.confirm_password, &form.password),
    );
    errors
}

/// Profile edit.
#[must_use]
pub fn validate_profile(form: &ProfileForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check(fields::FIRST_NAME, validate_name("First name", &form.first_name));
    errors.check(fields::LAST_NAME, validate_name("Last name", &form.last_name));
    errors
}

/// Password change. Reusing the current password is rejected before the
/// strength rule is applied.
#[must_use]
pub fn validate_password_change(form: &PasswordChangeForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check(
        fields::CURRENT_PASSWORD,
        required("Current password", &form.current_password),
    );

    let new_password = if form.new_password.is_empty() {
        Err(ValidationError::Required("New password"))
    } else if form.new_password == form.current_password {
        Err(ValidationError::PasswordUnchanged)
    } else {
        validate_password_strength(&form.new_password)
    };
    errors.check(fields::NEW_PASSWORD, new_password);

    errors.check(
        fields::CONFIRM_PASSWORD,
        validate_confirmation(&form.confirm_password, &form.new_password),
    );
    errors
}

/// Login. Only presence and email shape; strength is the backend's concern.
#[must_use]
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check(fields::EMAIL, validate_email(&form.email));
    errors.check(fields::PASSWORD, required("Password", &form.password));
    errors
}

/// Booking submission.
#[must_use]
pub fn validate_booking(form: &BookingForm) -> FieldErrors {
    fn selected<T>(label: &'static str, value: Option<&T>) -> Result<(), ValidationError> {
        value.map(drop).ok_or(ValidationError::Required(label))
    }

    let mut errors = FieldErrors::default();
    errors.check(fields::CENTER, selected("Service center", form.center_id.as_ref()));
    errors.check(fields::SERVICE, selected("Service", form.service_id.as_ref()));
    errors.check(fields::DATE, selected("Date", form.date.as_ref()));
    errors.check(fields::TIME_SLOT, selected("Time slot", form.time_slot.as_ref()));

    let plate = form.license_plate.trim();
    let plate_len = plate.chars().count();
    let plate_outcome = if plate.is_empty() {
        Err(ValidationError::Required("License plate"))
    } else if plate_len < MIN_PLATE_LEN {
        Err(ValidationError::TooShort("License plate", MIN_PLATE_LEN))
    } else if plate_len > MAX_PLATE_LEN {
        Err(ValidationError::TooLong("License plate", MAX_PLATE_LEN))
    } else {
        Ok(())
    };
    errors.check(fields::LICENSE_PLATE, plate_outcome);
    errors
}
