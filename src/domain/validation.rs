use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    MissingEnvVar { name: &'static str },
    UnknownVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::MissingEnvVar { name } => {
                write!(f, "environment variable {name} is required")
            }
            Self::UnknownVariant { field, value } => {
                write!(f, "unknown {field} value: {value}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
