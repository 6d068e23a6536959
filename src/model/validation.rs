use thiserror::Error;

use super::Sex;

/// Minimum age required to open an account.
pub const MIN_AGE: u32 = 18;

/// Validation errors for form fields.
///
/// The `Display` text of the input variants is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Informe o nome.")]
    EmptyName,
    #[error("A idade deve ser um número inteiro.")]
    AgeNotNumeric,
    #[error("É necessário ter pelo menos 18 anos.")]
    Underage,
    #[error("Selecione o sexo.")]
    SexNotSelected,
    #[error("limit must be between {min} and {max}: {value}")]
    LimitOutOfRange { value: u32, min: u32, max: u32 },
    #[error("limit must be a multiple of {step}: {value}")]
    LimitOffStep { value: u32, step: u32 },
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
}

/// Validates a name: must contain something other than whitespace.
///
/// Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    match name.trim() {
        "" => Err(ValidationError::EmptyName),
        trimmed => Ok(trimmed),
    }
}

/// Parses the age text as an integer of at least [`MIN_AGE`].
///
/// Accepts an optional sign followed by ASCII digits, ignoring surrounding
/// whitespace. Negative ages are underage; ages too large for `u32` saturate
/// to `u32::MAX`.
pub fn parse_age(text: &str) -> Result<u32, ValidationError> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::AgeNotNumeric);
    }
    // All digits, so parsing can only fail on overflow.
    let age = digits.parse::<u32>().unwrap_or(u32::MAX);
    if negative || age < MIN_AGE {
        return Err(ValidationError::Underage);
    }
    Ok(age)
}

/// Validates that a real option was picked rather than the placeholder.
pub fn validate_sex(sex: Sex) -> Result<Sex, ValidationError> {
    if sex.is_selected() {
        Ok(sex)
    } else {
        Err(ValidationError::SexNotSelected)
    }
}
