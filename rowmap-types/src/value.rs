//! Owned column values and the generic row record built from them.

use std::fmt::Write as _;

use rustc_hash::FxHashMap;
use uuid::Uuid;

/// A single materialized column value.
///
/// The variant set is closed and mirrors [`NativeType`](crate::NativeType)
/// exactly, so every value a row can contain is exhaustively matchable.
/// Map entries are kept in the order the driver produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    BigInt(i64),
    Blob(Vec<u8>),
    Boolean(bool),
    Float(f32),
    Double(f64),
    Int(i32),
    Uuid(Uuid),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

/// One result row keyed by column name.
pub type RowMap = FxHashMap<String, Value>;

macro_rules! impl_from_for_value {
    ($variant:ident, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value!(String, String, &str);
impl_from_for_value!(BigInt, i64);
impl_from_for_value!(Blob, Vec<u8>, &[u8]);
impl_from_for_value!(Boolean, bool);
impl_from_for_value!(Float, f32);
impl_from_for_value!(Double, f64);
impl_from_for_value!(Int, i32);
impl_from_for_value!(Uuid, Uuid);
impl_from_for_value!(List, Vec<Value>);
impl_from_for_value!(Map, Vec<(Value, Value)>);

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::BigInt(_) => "bigint",
            Value::Blob(_) => "blob",
            Value::Boolean(_) => "boolean",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::Int(_) => "int",
            Value::Uuid(_) => "uuid",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Value::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up `key` in a map value. Linear in the number of entries.
    pub fn map_get(&self, key: &Value) -> Option<&Value> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Human-friendly rendering used in debug and log output.
    pub fn format_display(&self) -> String {
        match self {
            Value::String(s) => format!("\"{}\"", escape_string(s)),
            Value::BigInt(v) => v.to_string(),
            Value::Blob(bytes) => {
                let mut out = String::with_capacity(2 + bytes.len() * 2);
                out.push_str("0x");
                for b in bytes {
                    let _ = write!(&mut out, "{:02x}", b);
                }
                out
            }
            Value::Boolean(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Double(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Uuid(u) => u.hyphenated().to_string(),
            Value::List(items) => {
                let parts: Vec<_> = items.iter().map(Value::format_display).collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Map(entries) => {
                let parts: Vec<_> = entries
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k.format_display(), v.format_display()))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
        }
    }
}

fn escape_string(value: &str) -> String {
    value.chars().flat_map(|c| c.escape_default()).collect()
}
