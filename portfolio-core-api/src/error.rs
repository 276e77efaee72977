use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

/// Failure messages keyed by the field they were raised on
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Validation error: {message}")]
    ValidationError { message: String, fields: FieldErrors },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {message}: {cause}")]
    RepositoryError { message: String, cause: String },
}

impl PortfolioError {
    pub fn validation(message: impl Into<String>) -> Self {
        PortfolioError::ValidationError {
            message: message.into(),
            fields: FieldErrors::new(),
        }
    }

    /// Validation error keeping the failing fields of a `validator` report
    pub fn invalid_fields(message: impl Into<String>, errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();
        PortfolioError::ValidationError {
            message: message.into(),
            fields,
        }
    }

    /// Per-field failures of a validation error
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            PortfolioError::ValidationError { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Not found error for a resource, optionally naming the id that was requested
    pub fn not_found(resource: &str, id: Option<i64>) -> Self {
        match id {
            Some(id) => PortfolioError::NotFound(format!("{resource} with id {id} not found")),
            None => PortfolioError::NotFound(format!("{resource} not found")),
        }
    }

    pub fn repository(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        PortfolioError::RepositoryError {
            message: message.into(),
            cause: cause.to_string(),
        }
    }

    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            PortfolioError::ValidationError { .. } => "VALIDATION_ERROR",
            PortfolioError::NotFound(_) => "NOT_FOUND",
            PortfolioError::RepositoryError { .. } => "REPOSITORY_ERROR",
        }
    }

    /// HTTP-style status a host application may map the error to
    pub fn status_code(&self) -> u16 {
        match self {
            PortfolioError::ValidationError { .. } => 400,
            PortfolioError::NotFound(_) => 404,
            PortfolioError::RepositoryError { .. } => 500,
        }
    }
}

pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Failures of the page window calculations.
///
/// Neither kind is retryable. `InvalidArgument` is a caller bug,
/// `OutOfRange` is a rejected navigation the caller is expected to ignore.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid argument: items per page must be at least 1, got {items_per_page}")]
    InvalidArgument { items_per_page: usize },

    #[error("Page {requested} is out of range 1..={total_pages}")]
    OutOfRange { requested: i64, total_pages: usize },
}

impl From<PaginationError> for PortfolioError {
    fn from(error: PaginationError) -> Self {
        PortfolioError::validation(error.to_string())
    }
}

pub type PaginationResult<T> = Result<T, PaginationError>;
