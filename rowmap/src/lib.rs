//! rowmap: generic records from wide-column query results
//!
//! This crate is the entrypoint for the rowmap toolkit. It re-exports the
//! type resolution and row assembly APIs from the underlying `rowmap-*`
//! crates so callers can read result sets as name → value maps without
//! declaring a destination struct per query.
//!
//! # Quick Start
//!
//! A driver supplies a [`RowIterator`]; everything else comes from here:
//!
//! ```rust
//! use rowmap::{ColumnInfo, Error, Holder, RowIterator, RowIteratorExt, TypeInfo, Value};
//!
//! struct OneRow {
//!     columns: Vec<ColumnInfo>,
//!     done: bool,
//! }
//!
//! impl RowIterator for OneRow {
//!     fn columns(&self) -> &[ColumnInfo] {
//!         &self.columns
//!     }
//!
//!     fn scan(&mut self, dest: &mut [Holder]) -> bool {
//!         if self.done {
//!             return false;
//!         }
//!         self.done = true;
//!         rowmap::fill_holders(dest, [Value::from("ada"), Value::BigInt(3)]).is_ok()
//!     }
//!
//!     fn err(&self) -> Option<&Error> {
//!         None
//!     }
//! }
//!
//! let mut iter = OneRow {
//!     columns: vec![
//!         ColumnInfo::new("name", TypeInfo::Varchar),
//!         ColumnInfo::new("visits", TypeInfo::Counter),
//!     ],
//!     done: false,
//! };
//! let rows = iter.slice_map().unwrap();
//! assert_eq!(rows[0]["name"], Value::from("ada"));
//! assert_eq!(rows[0]["visits"], Value::BigInt(3));
//! ```
//!
//! # Architecture
//!
//! - **Errors** (`rowmap-result`): the shared [`Error`] enum and [`Result`] alias.
//! - **Types** (`rowmap-types`): descriptors, native types, values, and the
//!   [`resolve`] / [`Holder`] pair that replaces runtime reflection.
//! - **Assembly** (`rowmap-scan`): [`prepare_row`], [`slice_map`],
//!   [`map_scan`], and [`map_rows`] over any [`RowIterator`].

pub use rowmap_result::{Error, Result};

pub use rowmap_types::{
    ColumnInfo, Holder, NativeType, RowMap, TypeInfo, TypeKind, Uuid, Value, resolve,
};

pub use rowmap_scan::{
    MapRows, ReadState, RowData, RowIterator, RowIteratorExt, ScanOptions,
    UnsupportedTypePolicy, fill_holders, map_rows, map_scan, prepare_row, slice_map,
};
