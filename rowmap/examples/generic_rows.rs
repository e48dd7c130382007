//! Print a small in-memory result set as generic records.
//!
//! Run with `cargo run -p rowmap --example generic_rows`.

use rowmap::{
    ColumnInfo, Error, Holder, RowIterator, RowIteratorExt, Value, fill_holders,
};

struct StaticRows {
    columns: Vec<ColumnInfo>,
    rows: std::vec::IntoIter<Vec<Value>>,
    err: Option<Error>,
}

impl RowIterator for StaticRows {
    fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }

    fn scan(&mut self, dest: &mut [Holder]) -> bool {
        let Some(row) = self.rows.next() else {
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

#[allow(clippy::print_stdout)]
fn main() -> rowmap::Result<()> {
    let columns = vec![
        ColumnInfo::new("name", "text".parse()?),
        ColumnInfo::new("langs", "set<text>".parse()?),
        ColumnInfo::new("score", "double".parse()?),
    ];
    let rows = vec![
        vec![
            Value::from("ada"),
            Value::List(vec![Value::from("rust"), Value::from("ocaml")]),
            Value::Double(9.5),
        ],
        vec![
            Value::from("grace"),
            Value::List(vec![Value::from("cobol")]),
            Value::Double(8.75),
        ],
    ];

    let mut iter = StaticRows {
        columns,
        rows: rows.into_iter(),
        err: None,
    };

    for row in iter.map_rows() {
        let row = row?;
        let mut keys: Vec<_> = row.keys().collect();
        keys.sort();
        let rendered: Vec<_> = keys
            .into_iter()
            .map(|k| format!("{}={}", k, row[k].format_display()))
            .collect();
        println!("{}", rendered.join(" "));
    }
    Ok(())
}
