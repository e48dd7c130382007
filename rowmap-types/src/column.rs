use crate::holder::Holder;
use crate::type_info::TypeInfo;

/// Metadata for one result column, as reported by the row iterator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnInfo {
    pub keyspace: String,
    pub table: String,
    pub name: String,
    pub type_info: TypeInfo,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, type_info: TypeInfo) -> Self {
        Self {
            keyspace: String::new(),
            table: String::new(),
            name: name.into(),
            type_info,
        }
    }

    /// Attach the keyspace and table the column was read from.
    pub fn with_table(mut self, keyspace: impl Into<String>, table: impl Into<String>) -> Self {
        self.keyspace = keyspace.into();
        self.table = table.into();
        self
    }

    #[inline]
    pub fn new_holder(&self) -> Holder {
        Holder::new(&self.type_info)
    }
}
