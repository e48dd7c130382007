//! Error types and result definitions shared by the rowmap crates.
//!
//! Every crate in the workspace returns [`Result<T>`], whose error variant is
//! the single [`Error`] enum defined here. Keeping one enum means errors can
//! cross crate boundaries with `?` and callers can match on a variant without
//! knowing which layer raised it.
//!
//! # Error Categories
//!
//! - **Iterator errors** ([`Error::Iterator`]): whatever the driver's row
//!   iterator reported (connection, protocol, or server-side failures)
//! - **Unsupported types** ([`Error::UnsupportedType`]): a column descriptor
//!   with no native mapping was used as a scan destination
//! - **Shape errors** ([`Error::TypeMismatch`], [`Error::ColumnCount`]): a
//!   scanned value or row does not fit the holders prepared for it
//! - **User input errors** ([`Error::InvalidArgumentError`]): malformed type
//!   names and other bad parameters

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
