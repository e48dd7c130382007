use rowmap_result::Result;
use rowmap_types::{Holder, RowMap};

/// Column names paired positionally with the holders one row is scanned into.
///
/// Built once per result set and reused for every row: each scan overwrites
/// the holders in place, and [`RowData::row_map`] copies them out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowData {
    pub columns: Vec<String>,
    pub values: Vec<Holder>,
}

impl RowData {
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            columns: Vec::with_capacity(columns),
            values: Vec::with_capacity(columns),
        }
    }

    pub fn push(&mut self, column: impl Into<String>, holder: Holder) {
        self.columns.push(column.into());
        self.values.push(holder);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Holder)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Fail if any column's holder cannot be scanned into.
    pub fn check_supported(&self) -> Result<()> {
        for (column, holder) in self.iter() {
            if let Err(err) = holder.check() {
                tracing::warn!(column, error = %err, "column cannot be materialized");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Copy every holder's value into `m`, keyed by column name.
    ///
    /// Keys already present are overwritten; other keys are left alone.
    pub fn row_map(&self, m: &mut RowMap) -> Result<()> {
        for (column, holder) in self.iter() {
            m.insert(column.to_string(), holder.unwrap_value()?);
        }
        Ok(())
    }

    /// Snapshot the current row into a fresh map.
    pub fn to_row_map(&self) -> Result<RowMap> {
        let mut m = RowMap::default();
        m.reserve(self.len());
        self.row_map(&mut m)?;
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmap_types::{TypeInfo, Value};

    fn sample() -> RowData {
        let mut row = RowData::with_capacity(2);
        row.push("id", Holder::new(&TypeInfo::BigInt));
        row.push("tags", Holder::new(&TypeInfo::set(TypeInfo::Varchar)));
        row
    }

    #[test]
    fn row_map_snapshots_are_independent_of_holders() {
        let mut row = sample();
        row.values[0].assign(Value::BigInt(1)).unwrap();
        let first = row.to_row_map().unwrap();

        row.values[0].assign(Value::BigInt(2)).unwrap();
        let second = row.to_row_map().unwrap();

        assert_eq!(first["id"], Value::BigInt(1));
        assert_eq!(second["id"], Value::BigInt(2));
        assert_eq!(first["tags"], Value::List(Vec::new()));
    }

    #[test]
    fn row_map_overwrites_only_matching_keys() {
        let row = sample();
        let mut m = RowMap::default();
        m.insert("id".into(), Value::from("stale"));
        m.insert("other".into(), Value::Boolean(true));
        row.row_map(&mut m).unwrap();

        assert_eq!(m.len(), 3);
        assert_eq!(m["id"], Value::BigInt(0));
        assert_eq!(m["other"], Value::Boolean(true));
    }

    #[test]
    fn check_supported_reports_the_first_bad_column() {
        let mut row = sample();
        row.push("price", Holder::new(&TypeInfo::Decimal));
        let err = row.check_supported().unwrap_err();
        assert_eq!(err.to_string(), "unsupported column type: decimal");
    }
}
