//! Common error types.

/// A shortcut type equivalent to `Result<T, inkout::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// An [`OptionalValue`](crate::OptionalValue) was read while unset.
    AbsentValue,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AbsentValue => write!(f, "optional value must have a value"),
        }
    }
}

impl std::error::Error for Error {}
