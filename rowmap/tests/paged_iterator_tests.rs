//! End-to-end checks against a driver-shaped iterator: rows arrive in pages,
//! a page fetch can fail, and a cancellation flag can stop reading early.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rowmap::{
    ColumnInfo, Error, Holder, RowIterator, RowIteratorExt, RowMap, TypeInfo, Uuid, Value,
    fill_holders,
};
use rowmap_test_utils::iterator_error;

enum Page {
    Rows(Vec<Vec<Value>>),
    Fail(&'static str),
}

struct PagedIter {
    columns: Vec<ColumnInfo>,
    pages: VecDeque<Page>,
    current: VecDeque<Vec<Value>>,
    cancelled: Arc<AtomicBool>,
    err: Option<Error>,
    pages_fetched: usize,
}

impl PagedIter {
    fn new(columns: Vec<ColumnInfo>, pages: Vec<Page>) -> Self {
        Self {
            columns,
            pages: pages.into(),
            current: VecDeque::new(),
            cancelled: Arc::new(AtomicBool::new(false)),
            err: None,
            pages_fetched: 0,
        }
    }

    fn fetch_next_page(&mut self) -> bool {
        match self.pages.pop_front() {
            Some(Page::Rows(rows)) => {
                self.pages_fetched += 1;
                self.current = rows.into();
                true
            }
            Some(Page::Fail(msg)) => {
                tracing::debug!(msg, "page fetch failed");
                self.err = Some(iterator_error(msg));
                false
            }
            None => false,
        }
    }
}

impl RowIterator for PagedIter {
    fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    fn scan(&mut self, dest: &mut [Holder]) -> bool {
        if self.err.is_some() || self.cancelled.load(Ordering::Relaxed) {
            return false;
        }
        while self.current.is_empty() {
            if !self.fetch_next_page() {
                return false;
            }
        }
        let Some(row) = self.current.pop_front() else {
            return false;
        };
        match fill_holders(dest, row) {
            Ok(()) => true,
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

fn events_columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("id", TypeInfo::TimeUuid).with_table("app", "events"),
        ColumnInfo::new("at", TypeInfo::Timestamp).with_table("app", "events"),
        ColumnInfo::new(
            "attrs",
            "map<text, blob>".parse().expect("type name"),
        )
        .with_table("app", "events"),
    ]
}

fn event(n: u128) -> Vec<Value> {
    vec![
        Value::Uuid(Uuid::from_u128(n)),
        Value::BigInt(1_700_000_000_000 + n as i64),
        Value::Map(vec![(Value::from("n"), Value::Blob(vec![n as u8]))]),
    ]
}

#[test]
fn slice_map_reads_across_pages() {
    let mut iter = PagedIter::new(
        events_columns(),
        vec![
            Page::Rows(vec![event(1), event(2)]),
            Page::Rows(Vec::new()),
            Page::Rows(vec![event(3)]),
        ],
    );

    let rows = iter.slice_map().expect("slice_map");
    assert_eq!(rows.len(), 3);
    assert_eq!(iter.pages_fetched, 3);
    assert_eq!(rows[2]["id"], Value::Uuid(Uuid::from_u128(3)));
    assert_eq!(
        rows[0]["attrs"].map_get(&Value::from("n")),
        Some(&Value::Blob(vec![1]))
    );
}

#[test]
fn a_failed_page_discards_earlier_pages() {
    let mut iter = PagedIter::new(
        events_columns(),
        vec![
            Page::Rows(vec![event(1), event(2)]),
            Page::Fail("read timeout"),
        ],
    );

    let err = iter.slice_map().unwrap_err();
    assert!(err.is_iterator());
    assert_eq!(err.to_string(), "iterator error: read timeout");
}

#[test]
fn cancellation_without_an_error_reads_as_exhaustion() {
    let mut iter = PagedIter::new(
        events_columns(),
        vec![Page::Rows(vec![event(1), event(2), event(3)])],
    );
    let cancel = Arc::clone(&iter.cancelled);

    let mut collected = Vec::new();
    let mut m = RowMap::default();
    while iter.map_scan(&mut m).expect("map_scan") {
        collected.push(m.clone());
        if collected.len() == 2 {
            cancel.store(true, Ordering::Relaxed);
        }
    }

    assert_eq!(collected.len(), 2);
    assert!(iter.err().is_none());
}

#[test]
fn map_rows_stops_at_a_failed_page() {
    let mut iter = PagedIter::new(
        events_columns(),
        vec![Page::Rows(vec![event(1)]), Page::Fail("node restarting")],
    );

    let results: Vec<_> = iter.map_rows().collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::Iterator(_))));
}

#[test]
fn a_malformed_row_surfaces_as_the_iterator_error() {
    let mut bad = event(1);
    bad[1] = Value::Int(5);
    let mut iter = PagedIter::new(events_columns(), vec![Page::Rows(vec![bad])]);

    let err = iter.slice_map().unwrap_err();
    assert!(err.is_iterator(), "{err:?}");
    assert_eq!(
        err.to_string(),
        "iterator error: type mismatch: expected i64, got int"
    );
}
