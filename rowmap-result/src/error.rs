use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Unified error type for all rowmap operations.
///
/// # Thread Safety
///
/// `Error` is `Send + Sync + Clone`. The clone bound exists because a row
/// iterator keeps its error sticky and only lends it out by reference; the
/// row assembler hands an owned copy back to its caller.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Failure reported by the underlying row iterator.
    ///
    /// The wrapped error is opaque to rowmap. It may be a connection drop,
    /// a protocol decoding failure, or an error returned by the server for
    /// the query. rowmap never retries; the driver layer owns that policy.
    #[error("iterator error: {0}")]
    Iterator(Arc<dyn StdError + Send + Sync>),

    /// A column's type descriptor has no native mapping.
    ///
    /// Raised when a holder allocated for such a column is used as a scan
    /// destination (or earlier, when eager checking is configured). The
    /// payload is the descriptor rendered as a type name, e.g. `decimal`
    /// or `list<inet>`.
    #[error("unsupported column type: {type_name}")]
    UnsupportedType { type_name: String },

    /// A scanned value does not have the shape of its destination holder.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// The number of scan destinations differs from the number of columns.
    #[error("column count mismatch: expected {expected}, got {got}")]
    ColumnCount { expected: usize, got: usize },

    /// Invalid user input or API parameter.
    ///
    /// Used for malformed type names handed to the descriptor parser and for
    /// similar caller mistakes. The message says what was invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),
}

impl Error {
    /// Wrap an error reported by a row iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowmap_result::Error;
    ///
    /// let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
    /// let err = Error::iterator(io_err);
    /// assert!(matches!(err, Error::Iterator(_)));
    /// assert!(err.to_string().contains("peer reset"));
    /// ```
    #[inline]
    pub fn iterator<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error::Iterator(Arc::new(err))
    }

    /// Create an unsupported type error from any displayable descriptor.
    #[inline]
    pub fn unsupported_type<T: fmt::Display>(type_name: T) -> Self {
        Error::UnsupportedType {
            type_name: type_name.to_string(),
        }
    }

    /// Create a type mismatch error from two displayable type names.
    #[inline]
    pub fn type_mismatch<A: fmt::Display, B: fmt::Display>(expected: A, got: B) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    /// Report an error read from a row iterator's sticky error state.
    ///
    /// Iterators may store any variant (a shape error raised while decoding a
    /// row, for example); callers always see it as [`Error::Iterator`].
    pub fn from_iterator(err: &Error) -> Self {
        match err {
            Error::Iterator(_) => err.clone(),
            other => Error::iterator(other.clone()),
        }
    }

    /// Whether this error originated in the row iterator rather than in rowmap.
    #[inline]
    pub fn is_iterator(&self) -> bool {
        matches!(self, Error::Iterator(_))
    }
}
