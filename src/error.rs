use thiserror::Error;

/// Failure talking to the retail backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx answer. `message` is the backend's `error` field when it sent one.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("could not read response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Form input that failed coercion before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingValue { field: &'static str },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("Please select products and quantities.")]
    EmptyInvoice,

    #[error("month {month} is out of range")]
    InvalidMonth { month: u32 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Text shown inline next to the control that triggered the operation.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(ApiError::Rejected { message, .. }) => message.clone(),
            AppError::Api(ApiError::Transport(_)) => "Could not reach the server.".to_string(),
            AppError::Api(ApiError::Decode(_)) => "Unexpected response from the server.".to_string(),
            AppError::Validation(v) => v.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_is_verbatim() {
        let err = AppError::from(ApiError::Rejected {
            status: 400,
            message: "Insufficient stock for product ID 7".to_string(),
        });
        assert_eq!(err.user_message(), "Insufficient stock for product ID 7");
        assert!(matches!(err, AppError::Api(_)));
    }

    #[test]
    fn empty_invoice_message() {
        let err = AppError::from(ValidationError::EmptyInvoice);
        assert_eq!(err.user_message(), "Please select products and quantities.");
        assert!(matches!(err, AppError::Validation(_)));
    }
}
