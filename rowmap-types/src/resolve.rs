//! Descriptor to native type resolution.

use crate::native::NativeType;
use crate::type_info::TypeInfo;

/// Resolve the native type a column of type `info` is materialized as.
///
/// | descriptor                        | native type               |
/// |-----------------------------------|---------------------------|
/// | `ascii`, `varchar`                | `String`                  |
/// | `bigint`, `counter`, `timestamp`  | `i64`                     |
/// | `blob`                            | `Vec<u8>`                 |
/// | `boolean`                         | `bool`                    |
/// | `float`                           | `f32`                     |
/// | `double`                          | `f64`                     |
/// | `int`                             | `i32`                     |
/// | `uuid`, `timeuuid`                | `Uuid`                    |
/// | `list<T>`, `set<T>`               | `Vec<resolve(T)>`         |
/// | `map<K, V>`                       | `Map<resolve(K), resolve(V)>` |
///
/// Returns `None` for descriptors with no native mapping (`decimal`,
/// `varint`, `inet`, custom types) and for any collection with such a type
/// anywhere inside it.
///
/// Pure and allocation-only; safe to call from any number of threads.
pub fn resolve(info: &TypeInfo) -> Option<NativeType> {
    match info {
        TypeInfo::Ascii | TypeInfo::Varchar => Some(NativeType::String),
        TypeInfo::BigInt | TypeInfo::Counter | TypeInfo::Timestamp => Some(NativeType::BigInt),
        TypeInfo::Blob => Some(NativeType::Blob),
        TypeInfo::Boolean => Some(NativeType::Boolean),
        TypeInfo::Float => Some(NativeType::Float),
        TypeInfo::Double => Some(NativeType::Double),
        TypeInfo::Int => Some(NativeType::Int),
        TypeInfo::Uuid | TypeInfo::TimeUuid => Some(NativeType::Uuid),
        TypeInfo::List(elem) | TypeInfo::Set(elem) => {
            Some(NativeType::List(Box::new(resolve(elem)?)))
        }
        TypeInfo::Map(key, elem) => Some(NativeType::Map(
            Box::new(resolve(key)?),
            Box::new(resolve(elem)?),
        )),
        TypeInfo::Decimal | TypeInfo::Varint | TypeInfo::Inet | TypeInfo::Custom(_) => None,
    }
}
