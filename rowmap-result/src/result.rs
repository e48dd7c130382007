use crate::error::Error;

/// Result type alias used throughout rowmap.
///
/// This is a type alias for `std::result::Result<T, Error>`. All rowmap
/// operations that can fail return this type.
pub type Result<T> = std::result::Result<T, Error>;
