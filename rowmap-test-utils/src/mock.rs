use std::collections::VecDeque;

use rowmap_result::Error;
use rowmap_scan::{RowIterator, fill_holders};
use rowmap_types::{ColumnInfo, Holder, TypeInfo, Value};

/// Error type standing in for a driver failure.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockError(pub String);

/// Wrap a message as an iterator error, the way a driver would.
pub fn iterator_error(msg: impl Into<String>) -> Error {
    Error::iterator(MockError(msg.into()))
}

/// Build column metadata from a CQL type name.
///
/// Panics on a malformed type name; meant for test fixtures.
pub fn column(name: &str, type_name: &str) -> ColumnInfo {
    let type_info: TypeInfo = type_name
        .parse()
        .unwrap_or_else(|err| panic!("bad type name {type_name:?}: {err}"));
    ColumnInfo::new(name, type_info)
}

/// In-memory row iterator with scripted rows and failures.
///
/// Rows are handed out in order. A failure can be preset (the iterator is
/// already broken before the first read) or scheduled after a number of
/// rows, mirroring a connection dropping mid-result. Errors are sticky.
#[derive(Debug, Default)]
pub struct MockIter {
    columns: Vec<ColumnInfo>,
    rows: VecDeque<Vec<Value>>,
    fail_after: Option<(usize, Error)>,
    err: Option<Error>,
    yielded: usize,
    scan_calls: usize,
}

impl MockIter {
    pub fn new(columns: Vec<ColumnInfo>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push_back(row);
        self
    }

    pub fn with_rows<R>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<Value>>,
    {
        self.rows.extend(rows);
        self
    }

    /// Set the error before any read happens.
    pub fn with_error(mut self, err: Error) -> Self {
        self.err = Some(err);
        self
    }

    /// Fail the scan that would produce row `rows + 1`.
    pub fn failing_after(mut self, rows: usize, err: Error) -> Self {
        self.fail_after = Some((rows, err));
        self
    }

    /// Number of times `scan` has been called.
    pub fn scan_calls(&self) -> usize {
        self.scan_calls
    }

    /// Rows successfully handed out so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Scripted rows not yet handed out.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowIterator for MockIter {
    fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    fn scan(&mut self, dest: &mut [Holder]) -> bool {
        self.scan_calls += 1;
        if self.err.is_some() {
            return false;
        }

        if self
            .fail_after
            .as_ref()
            .is_some_and(|(rows, _)| *rows == self.yielded)
        {
            self.err = self.fail_after.take().map(|(_, err)| err);
            return false;
        }

        let Some(row) = self.rows.pop_front() else {
            return false;
        };
        match fill_holders(dest, row) {
            Ok(()) => {
                self.yielded += 1;
                true
            }
            Err(err) => {
                self.err = Some(err);
                false
            }
        }
    }

    fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }
}
