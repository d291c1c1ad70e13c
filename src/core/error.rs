use thiserror::Error;

use super::value::DataType;

/// Error raised by a method body itself, as opposed to the dispatch machinery.
pub type MethodError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("method '{0}' not found on type '{1}'")]
    MethodNotFound(String, String),

    #[error("method '{0}' requires at least {1} arguments, got {2}")]
    TooFewArguments(String, usize, usize),

    #[error("method '{0}' takes {1} arguments, got {2}")]
    TooManyArguments(String, usize, usize),

    #[error("method '{0}': argument {1} must be {2}, got no usable value")]
    InvalidArgument(String, usize, DataType),

    #[error("method '{0}': argument {1} must be {2}, got {3}")]
    TypeMismatch(String, usize, DataType, String),

    #[error("method '{0}' failed")]
    InvocationFailed(String, #[source] MethodError),
}

pub type Result<T> = std::result::Result<T, InvokeError>;
