//! Field validators for the login and registration forms.
//!
//! Everything here is a pure function of the typed values. The views decide
//! when to run them (on input, on blur, on submit) and how to show the result.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

// Colombian numbers: optional +57 country code, ten national digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+57)?[0-9]{10}$").expect("valid phone pattern"));

pub const MIN_PASSWORD_LEN: usize = 8;

/// Country code prepended by `format_phone_input`.
const COUNTRY_CODE: &str = "57";
const NATIONAL_DIGITS: usize = 10;

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whitespace is ignored, so `+57 300 123 4567` and `3001234567` both pass.
pub fn validate_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&compact)
}

/// Score 0–5: one point each for length ≥ 8, uppercase, lowercase, digit, symbol.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Weak,
            3 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// `None` for an empty password: the indicator is hidden.
    pub fn for_password(password: &str) -> Option<Self> {
        if password.is_empty() {
            None
        } else {
            Some(Self::from_score(password_strength(password)))
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "password-strength weak",
            Self::Medium => "password-strength medium",
            Self::Strong => "password-strength strong",
        }
    }
}

/// Visual state of an input after its last check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValidity {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

impl FieldValidity {
    /// Empty values stay unchecked; anything else is judged by `is_valid`.
    pub fn check(value: &str, is_valid: impl Fn(&str) -> bool) -> Self {
        if value.is_empty() {
            Self::Unchecked
        } else if is_valid(value) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Unchecked => "",
            Self::Valid => "is-valid",
            Self::Invalid => "is-invalid",
        }
    }
}

/// Live state of the confirm-password field.
pub fn confirmation_validity(password: &str, confirm: &str) -> FieldValidity {
    FieldValidity::check(confirm, |confirm| confirm == password)
}

/// Reformats phone input as the user types: `+57 300 123 4567`.
pub fn format_phone_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let national: String = digits
        .strip_prefix(COUNTRY_CODE)
        .unwrap_or(&digits)
        .chars()
        .take(NATIONAL_DIGITS)
        .collect();

    let mut formatted = format!("+{COUNTRY_CODE}");
    for (start, end) in [(0, 3), (3, 6), (6, NATIONAL_DIGITS)] {
        if national.len() > start {
            formatted.push(' ');
            formatted.push_str(&national[start..end.min(national.len())]);
        }
    }
    formatted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Terms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("El nombre es obligatorio.")]
    FirstNameRequired,
    #[error("El apellido es obligatorio.")]
    LastNameRequired,
    #[error("El correo electrónico es obligatorio.")]
    EmailRequired,
    #[error("El formato del correo electrónico no es válido.")]
    EmailInvalid,
    #[error("El teléfono es obligatorio.")]
    PhoneRequired,
    #[error("El formato del teléfono no es válido. Usa el formato: +57 300 123 4567")]
    PhoneInvalid,
    #[error("La contraseña es obligatoria.")]
    PasswordRequired,
    #[error("La contraseña debe tener al menos 8 caracteres.")]
    PasswordTooShort,
    #[error("Debes confirmar tu contraseña.")]
    ConfirmRequired,
    #[error("Las contraseñas no coinciden.")]
    PasswordMismatch,
    #[error("Debes aceptar los términos y condiciones.")]
    TermsNotAccepted,
}

impl RegistrationError {
    pub fn field(self) -> RegistrationField {
        match self {
            Self::FirstNameRequired => RegistrationField::FirstName,
            Self::LastNameRequired => RegistrationField::LastName,
            Self::EmailRequired | Self::EmailInvalid => RegistrationField::Email,
            Self::PhoneRequired | Self::PhoneInvalid => RegistrationField::Phone,
            Self::PasswordRequired | Self::PasswordTooShort => RegistrationField::Password,
            Self::ConfirmRequired | Self::PasswordMismatch => RegistrationField::ConfirmPassword,
            Self::TermsNotAccepted => RegistrationField::Terms,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// Every problem found on submit, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    errors: Vec<RegistrationError>,
}

impl RegistrationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The single message surfaced to the user.
    pub fn first_error(&self) -> Option<RegistrationError> {
        self.errors.first().copied()
    }

    pub fn errors(&self) -> &[RegistrationError] {
        &self.errors
    }

    pub fn is_invalid(&self, field: RegistrationField) -> bool {
        self.errors.iter().any(|err| err.field() == field)
    }
}

impl RegistrationForm {
    /// Checks first name, last name, email, phone, password, confirmation and
    /// terms in that order. Names, email and phone are trimmed; passwords are not.
    pub fn validate(&self) -> RegistrationReport {
        let mut errors = Vec::new();

        if self.first_name.trim().is_empty() {
            errors.push(RegistrationError::FirstNameRequired);
        }
        if self.last_name.trim().is_empty() {
            errors.push(RegistrationError::LastNameRequired);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(RegistrationError::EmailRequired);
        } else if !validate_email(email) {
            errors.push(RegistrationError::EmailInvalid);
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push(RegistrationError::PhoneRequired);
        } else if !validate_phone(phone) {
            errors.push(RegistrationError::PhoneInvalid);
        }

        if self.password.is_empty() {
            errors.push(RegistrationError::PasswordRequired);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(RegistrationError::PasswordTooShort);
        }

        if self.confirm_password.is_empty() {
            errors.push(RegistrationError::ConfirmRequired);
        } else if self.password != self.confirm_password {
            errors.push(RegistrationError::PasswordMismatch);
        }

        if !self.terms_accepted {
            errors.push(RegistrationError::TermsNotAccepted);
        }

        RegistrationReport { errors }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Por favor, completa todos los campos requeridos.")]
    MissingFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        Ok(())
    }
}
