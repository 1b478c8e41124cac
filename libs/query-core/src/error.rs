use thiserror::Error;

use crate::schema::FieldType;

/// Unified error type for query compilation and page resolution.
///
/// Every variant describes bad client input; none of them is transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid field: {0}")]
    InvalidField(String),

    #[error("unsupported type '{declared}' for field '{field}'")]
    UnsupportedType { field: String, declared: FieldType },

    #[error("invalid value '{value}' for field '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("page must be a positive integer")]
    InvalidPage,

    #[error("pageSize must be a positive integer")]
    InvalidPageSize,
}

impl Error {
    pub fn invalid_field(field: impl Into<String>) -> Self {
        Self::InvalidField(field.into())
    }

    pub fn unsupported_type(field: impl Into<String>, declared: FieldType) -> Self {
        Self::UnsupportedType {
            field: field.into(),
            declared,
        }
    }

    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }

    /// Stable machine-readable code, used for problem responses and log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidField(_) => "QUERY_INVALID_FIELD",
            Self::UnsupportedType { .. } => "QUERY_UNSUPPORTED_TYPE",
            Self::InvalidValue { .. } => "QUERY_INVALID_VALUE",
            Self::InvalidPage => "QUERY_INVALID_PAGE",
            Self::InvalidPageSize => "QUERY_INVALID_PAGE_SIZE",
        }
    }
}

/// Raised when a schema declares a type tag that is not part of the grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field type tag: '{0}'")]
pub struct UnknownTypeTag(pub String);
