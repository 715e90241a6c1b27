use thiserror::Error;

/// The first validation rule a candidate record violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("first_name must not be empty")]
    MissingFirstName,

    #[error("last_name must not be empty")]
    MissingLastName,

    #[error("email must not be empty")]
    MissingEmail,

    #[error("email is not a valid address: {0}")]
    MalformedEmail(String),

    #[error("phone_number must be present and non-zero")]
    MissingPhoneNumber,
}
