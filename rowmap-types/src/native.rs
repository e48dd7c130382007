//! Native type descriptors: the Rust-side shape a column is materialized as.

use std::fmt;

use uuid::Uuid;

use crate::value::Value;

/// The native representation of a column type.
///
/// Each variant corresponds to exactly one [`Value`] variant. Lists and sets
/// both materialize as [`NativeType::List`]; maps keep their key and element
/// types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NativeType {
    String,
    BigInt,
    Blob,
    Boolean,
    Float,
    Double,
    Int,
    Uuid,
    List(Box<NativeType>),
    Map(Box<NativeType>, Box<NativeType>),
}

impl NativeType {
    /// The zero value a freshly allocated holder of this type contains.
    pub fn zero_value(&self) -> Value {
        match self {
            NativeType::String => Value::String(String::new()),
            NativeType::BigInt => Value::BigInt(0),
            NativeType::Blob => Value::Blob(Vec::new()),
            NativeType::Boolean => Value::Boolean(false),
            NativeType::Float => Value::Float(0.0),
            NativeType::Double => Value::Double(0.0),
            NativeType::Int => Value::Int(0),
            NativeType::Uuid => Value::Uuid(Uuid::nil()),
            NativeType::List(_) => Value::List(Vec::new()),
            NativeType::Map(_, _) => Value::Map(Vec::new()),
        }
    }

    /// Whether `value` has the shape of this type, checking container
    /// contents recursively.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (NativeType::String, Value::String(_))
            | (NativeType::BigInt, Value::BigInt(_))
            | (NativeType::Blob, Value::Blob(_))
            | (NativeType::Boolean, Value::Boolean(_))
            | (NativeType::Float, Value::Float(_))
            | (NativeType::Double, Value::Double(_))
            | (NativeType::Int, Value::Int(_))
            | (NativeType::Uuid, Value::Uuid(_)) => true,
            (NativeType::List(elem), Value::List(items)) => {
                items.iter().all(|item| elem.accepts(item))
            }
            (NativeType::Map(key, elem), Value::Map(entries)) => entries
                .iter()
                .all(|(k, v)| key.accepts(k) && elem.accepts(v)),
            _ => false,
        }
    }

    #[inline]
    pub fn is_collection(&self) -> bool {
        matches!(self, NativeType::List(_) | NativeType::Map(_, _))
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::String => f.write_str("String"),
            NativeType::BigInt => f.write_str("i64"),
            NativeType::Blob => f.write_str("Vec<u8>"),
            NativeType::Boolean => f.write_str("bool"),
            NativeType::Float => f.write_str("f32"),
            NativeType::Double => f.write_str("f64"),
            NativeType::Int => f.write_str("i32"),
            NativeType::Uuid => f.write_str("Uuid"),
            NativeType::List(elem) => write!(f, "Vec<{}>", elem),
            NativeType::Map(key, elem) => write!(f, "Map<{}, {}>", key, elem),
        }
    }
}
