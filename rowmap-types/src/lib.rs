//! Column type descriptors, native types, and values for rowmap.
//!
//! This crate bridges the driver's column type descriptors ([`TypeInfo`]) and
//! the owned Rust values rows are materialized into ([`Value`]):
//!
//! - [`resolve`] maps a descriptor to its [`NativeType`], recursing through
//!   lists, sets, and maps.
//! - [`Holder`] is a zero-valued scan destination allocated from a
//!   descriptor; the row iterator fills it and the row assembler copies the
//!   value out.
//!
//! Everything here is stateless and `Send + Sync`.

pub mod column;
pub mod holder;
pub mod native;
pub mod resolve;
pub mod type_info;
pub mod value;

pub use column::ColumnInfo;
pub use holder::Holder;
pub use native::NativeType;
pub use resolve::resolve;
pub use type_info::{MAX_TYPE_DEPTH, TypeInfo, TypeKind};
pub use value::{RowMap, Value};

pub use uuid::Uuid;
