//! The row iterator a driver hands to rowmap.

use rowmap_result::{Error, Result};
use rowmap_types::{ColumnInfo, Holder, Value};

/// A single-consumer cursor over the rows of one query result.
///
/// Implemented by the driver layer, which owns the protocol I/O. rowmap only
/// reads column metadata, drives [`scan`](RowIterator::scan), and inspects the
/// error state.
///
/// # Contract
///
/// - [`columns`](RowIterator::columns) is stable for the lifetime of the
///   result set.
/// - [`scan`](RowIterator::scan) writes one value per column into `dest`,
///   positionally, and returns `true`; it returns `false` once no row is
///   available, whether because the result is exhausted, the read was
///   cancelled, or it failed.
/// - [`err`](RowIterator::err) is sticky: once it returns `Some`, it never
///   returns `None` again for this iterator. A scan that returns `false`
///   with no error set means exhaustion.
pub trait RowIterator {
    fn columns(&self) -> &[ColumnInfo];

    fn scan(&mut self, dest: &mut [Holder]) -> bool;

    fn err(&self) -> Option<&Error>;
}

impl<I: RowIterator + ?Sized> RowIterator for &mut I {
    fn columns(&self) -> &[ColumnInfo] {
        (**self).columns()
    }

    fn scan(&mut self, dest: &mut [Holder]) -> bool {
        (**self).scan(dest)
    }

    fn err(&self) -> Option<&Error> {
        (**self).err()
    }
}

impl<I: RowIterator + ?Sized> RowIterator for Box<I> {
    fn columns(&self) -> &[ColumnInfo] {
        (**self).columns()
    }

    fn scan(&mut self, dest: &mut [Holder]) -> bool {
        (**self).scan(dest)
    }

    fn err(&self) -> Option<&Error> {
        (**self).err()
    }
}

/// Write one decoded row into scan destinations.
///
/// Helper for [`RowIterator::scan`] implementations that decode a whole row
/// before handing it over. Every value is shape-checked against its holder;
/// on error some holders may already contain values from this row.
pub fn fill_holders<V>(dest: &mut [Holder], values: V) -> Result<()>
where
    V: IntoIterator<Item = Value>,
    V::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    if values.len() != dest.len() {
        return Err(Error::ColumnCount {
            expected: dest.len(),
            got: values.len(),
        });
    }
    for (holder, value) in dest.iter_mut().zip(values) {
        holder.assign(value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmap_types::TypeInfo;

    #[test]
    fn fill_holders_rejects_wrong_column_count() {
        let mut dest = vec![Holder::new(&TypeInfo::Int), Holder::new(&TypeInfo::Varchar)];
        let err = fill_holders(&mut dest, vec![Value::Int(1)]).unwrap_err();
        assert!(matches!(err, Error::ColumnCount { expected: 2, got: 1 }));
    }

    #[test]
    fn fill_holders_assigns_positionally() {
        let mut dest = vec![Holder::new(&TypeInfo::Int), Holder::new(&TypeInfo::Varchar)];
        fill_holders(&mut dest, vec![Value::Int(1), Value::from("a")]).unwrap();
        assert_eq!(dest[0].unwrap_value().unwrap(), Value::Int(1));
        assert_eq!(dest[1].unwrap_value().unwrap(), Value::from("a"));
    }

    #[test]
    fn fill_holders_surfaces_unsupported_destinations() {
        let mut dest = vec![Holder::new(&TypeInfo::Inet)];
        let err = fill_holders(&mut dest, vec![Value::Blob(vec![127, 0, 0, 1])]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { .. }));
    }
}
