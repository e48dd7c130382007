//! Row assembly for rowmap.
//!
//! Given a driver's [`RowIterator`], this crate prepares one typed holder per
//! result column, drives the iterator's scan step, and copies each row out as
//! a [`RowMap`](rowmap_types::RowMap) keyed by column name. Callers get
//! generic records without declaring a destination struct per query.
//!
//! Three entry points cover the common reading patterns:
//!
//! - [`slice_map`]: every row, all-or-nothing on iterator failure.
//! - [`map_scan`]: one row per call into a caller-owned map.
//! - [`map_rows`]: a std [`Iterator`] of `Result<RowMap>`.
//!
//! [`RowIteratorExt`] exposes the same operations as methods with default
//! [`ScanOptions`].

pub mod assemble;
pub mod iter;
pub mod options;
pub mod row_data;

pub use assemble::{
    MapRows, ReadState, RowIteratorExt, map_rows, map_scan, prepare_row, slice_map,
};
pub use iter::{RowIterator, fill_holders};
pub use options::{ScanOptions, UnsupportedTypePolicy};
pub use row_data::RowData;
