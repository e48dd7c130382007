//! Row assembly: turn a [`RowIterator`] into generic [`RowMap`] records.
//!
//! Every operation here checks the iterator's sticky error before doing any
//! work, allocates one [`Holder`](rowmap_types::Holder) per column, and
//! copies values out of the holders after each scan so emitted records never
//! alias scan state.

use std::iter::FusedIterator;

use rowmap_result::{Error, Result};
use rowmap_types::RowMap;

use crate::iter::RowIterator;
use crate::options::{ScanOptions, UnsupportedTypePolicy};
use crate::row_data::RowData;

/// Allocate column names and holders for the iterator's current result set.
///
/// Returns the iterator's error if one is already set, without allocating.
/// Does not move the iterator's read position.
pub fn prepare_row<I>(iter: &I, options: &ScanOptions) -> Result<RowData>
where
    I: RowIterator + ?Sized,
{
    if let Some(err) = iter.err() {
        tracing::trace!(error = %err, "iterator already failed; not preparing row");
        return Err(Error::from_iterator(err));
    }

    let columns = iter.columns();
    let mut row = RowData::with_capacity(columns.len());
    for column in columns {
        row.push(column.name.as_str(), column.new_holder());
    }

    if options.unsupported_types == UnsupportedTypePolicy::Eager {
        row.check_supported()?;
    }

    tracing::trace!(columns = row.len(), "prepared row holders");
    Ok(row)
}

/// Read every remaining row into a vector of records.
///
/// All-or-nothing: if the iterator reports an error at any point, the rows
/// read so far are dropped and only the error is returned.
pub fn slice_map<I>(iter: &mut I, options: &ScanOptions) -> Result<Vec<RowMap>>
where
    I: RowIterator + ?Sized,
{
    let mut rows = Vec::with_capacity(options.row_capacity_hint);
    for row in map_rows(iter, options) {
        match row {
            Ok(m) => rows.push(m),
            Err(err) => {
                tracing::debug!(discarded = rows.len(), error = %err, "row collection failed");
                return Err(err);
            }
        }
    }
    tracing::debug!(rows = rows.len(), "row collection complete");
    Ok(rows)
}

/// Scan a single row into `m`.
///
/// Returns `Ok(true)` when a row was written, and `Ok(false)` when no row was
/// available or the iterator had already failed; `m` is untouched in both
/// `false` cases. Callers loop until `false` and must then check
/// [`RowIterator::err`] to tell exhaustion from failure.
///
/// By default only same-named keys are overwritten, so keys left in `m` by a
/// row with a different column set persist. Use
/// [`ScanOptions::with_replace_map`] with `true` to have `m` hold exactly the
/// scanned row's columns after every `Ok(true)`.
///
/// Unsupported column types are reported as `Err` before any scan.
pub fn map_scan<I>(iter: &mut I, m: &mut RowMap, options: &ScanOptions) -> Result<bool>
where
    I: RowIterator + ?Sized,
{
    if iter.err().is_some() {
        return Ok(false);
    }

    let mut row = prepare_row(&*iter, options)?;
    row.check_supported()?;

    if !iter.scan(&mut row.values) {
        tracing::trace!(failed = iter.err().is_some(), "no row available");
        return Ok(false);
    }

    if options.replace_map {
        m.clear();
    }
    row.row_map(m)?;
    Ok(true)
}

/// Iterate rows one at a time as owned records.
///
/// Holders are prepared on the first call to `next`. The iterator yields the
/// underlying error once if the scan loop ends in failure and then fuses.
pub fn map_rows<'a, I>(iter: &'a mut I, options: &ScanOptions) -> MapRows<'a, I>
where
    I: RowIterator + ?Sized,
{
    MapRows {
        iter,
        options: options.clone(),
        row: None,
        state: ReadState::Idle,
    }
}

/// Progress of a [`MapRows`] through its result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadState {
    /// No scan attempted yet.
    Idle,
    /// At least one scan attempted and rows may remain.
    Reading,
    /// The iterator ran out of rows without an error.
    Exhausted,
    /// The iterator or row assembly failed. Terminal.
    Failed,
}

/// Row-at-a-time record iterator returned by [`map_rows`].
pub struct MapRows<'a, I: RowIterator + ?Sized> {
    iter: &'a mut I,
    options: ScanOptions,
    row: Option<RowData>,
    state: ReadState,
}

impl<I: RowIterator + ?Sized> MapRows<'_, I> {
    pub fn state(&self) -> ReadState {
        self.state
    }

    /// Column names of the records, once holders have been prepared.
    pub fn columns(&self) -> Option<&[String]> {
        self.row.as_ref().map(|row| row.columns.as_slice())
    }

    fn fail(&mut self, err: Error) -> Option<Result<RowMap>> {
        tracing::debug!(error = %err, "row iteration failed");
        self.state = ReadState::Failed;
        self.row = None;
        Some(Err(err))
    }
}

impl<I: RowIterator + ?Sized> Iterator for MapRows<'_, I> {
    type Item = Result<RowMap>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            ReadState::Exhausted | ReadState::Failed => return None,
            ReadState::Reading => {}
            ReadState::Idle => {
                let prepared = prepare_row(&*self.iter, &self.options)
                    .and_then(|row| row.check_supported().map(|()| row));
                match prepared {
                    Ok(row) => {
                        self.row = Some(row);
                        self.state = ReadState::Reading;
                    }
                    Err(err) => return self.fail(err),
                }
            }
        }

        let row = self.row.as_mut()?;
        if self.iter.scan(&mut row.values) {
            match row.to_row_map() {
                Ok(m) => Some(Ok(m)),
                Err(err) => self.fail(err),
            }
        } else if let Some(err) = self.iter.err() {
            let err = Error::from_iterator(err);
            self.fail(err)
        } else {
            tracing::trace!("row iterator exhausted");
            self.state = ReadState::Exhausted;
            self.row = None;
            None
        }
    }
}

impl<I: RowIterator + ?Sized> FusedIterator for MapRows<'_, I> {}

/// Method-call sugar for the assembly functions, using default options.
pub trait RowIteratorExt: RowIterator {
    fn row_data(&self) -> Result<RowData> {
        prepare_row(self, &ScanOptions::default())
    }

    fn slice_map(&mut self) -> Result<Vec<RowMap>> {
        slice_map(self, &ScanOptions::default())
    }

    fn map_scan(&mut self, m: &mut RowMap) -> Result<bool> {
        map_scan(self, m, &ScanOptions::default())
    }

    fn map_rows(&mut self) -> MapRows<'_, Self> {
        map_rows(self, &ScanOptions::default())
    }
}

impl<I: RowIterator + ?Sized> RowIteratorExt for I {}
