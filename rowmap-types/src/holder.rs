//! Typed scan destinations.
//!
//! A [`Holder`] is a zero-valued cell allocated from a column's descriptor.
//! The row iterator writes each scanned value into it, and the row assembler
//! copies the value out once the row is complete. A holder whose descriptor
//! has no native mapping still exists, so column positions stay aligned, but
//! every attempt to read or write it fails with [`Error::UnsupportedType`].

use rowmap_result::{Error, Result};

use crate::native::NativeType;
use crate::resolve::resolve;
use crate::type_info::TypeInfo;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Typed { native: NativeType, value: Value },
    Unsupported(TypeInfo),
}

/// A mutable, zero-initialized scan destination for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Holder {
    slot: Slot,
}

impl Holder {
    /// Allocate a holder for a column of type `info`.
    ///
    /// Collections are allocated as a single empty container of the resolved
    /// shape. Never fails; an unresolvable descriptor is reported on use.
    pub fn new(info: &TypeInfo) -> Self {
        let slot = match resolve(info) {
            Some(native) => {
                let value = native.zero_value();
                Slot::Typed { native, value }
            }
            None => {
                tracing::debug!(type_name = %info, "no native type for column descriptor");
                Slot::Unsupported(info.clone())
            }
        };
        Self { slot }
    }

    /// Allocate a holder directly from a resolved native type.
    pub fn from_native(native: NativeType) -> Self {
        let value = native.zero_value();
        Self {
            slot: Slot::Typed { native, value },
        }
    }

    pub fn native_type(&self) -> Option<&NativeType> {
        match &self.slot {
            Slot::Typed { native, .. } => Some(native),
            Slot::Unsupported(_) => None,
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        matches!(self.slot, Slot::Typed { .. })
    }

    /// Fail with [`Error::UnsupportedType`] if this holder cannot be used.
    pub fn check(&self) -> Result<&NativeType> {
        match &self.slot {
            Slot::Typed { native, .. } => Ok(native),
            Slot::Unsupported(info) => Err(Error::unsupported_type(info)),
        }
    }

    /// Mutable access to the held value, for scan steps that decode in place.
    ///
    /// Writers going through this reference are trusted to keep the value's
    /// shape; use [`Holder::assign`] for a checked write.
    pub fn slot(&mut self) -> Result<&mut Value> {
        match &mut self.slot {
            Slot::Typed { value, .. } => Ok(value),
            Slot::Unsupported(info) => Err(Error::unsupported_type(&*info)),
        }
    }

    /// Replace the held value, rejecting values of the wrong shape.
    pub fn assign(&mut self, new_value: Value) -> Result<()> {
        match &mut self.slot {
            Slot::Typed { native, value } => {
                if !native.accepts(&new_value) {
                    return Err(Error::type_mismatch(&*native, new_value.type_name()));
                }
                *value = new_value;
                Ok(())
            }
            Slot::Unsupported(info) => Err(Error::unsupported_type(&*info)),
        }
    }

    pub fn value(&self) -> Result<&Value> {
        match &self.slot {
            Slot::Typed { value, .. } => Ok(value),
            Slot::Unsupported(info) => Err(Error::unsupported_type(info)),
        }
    }

    /// Copy the held value out, leaving the holder ready for the next scan.
    #[inline]
    pub fn unwrap_value(&self) -> Result<Value> {
        self.value().cloned()
    }

    pub fn into_value(self) -> Result<Value> {
        match self.slot {
            Slot::Typed { value, .. } => Ok(value),
            Slot::Unsupported(info) => Err(Error::unsupported_type(info)),
        }
    }

    /// Put the zero value of the holder's type back.
    pub fn reset(&mut self) {
        if let Slot::Typed { native, value } = &mut self.slot {
            *value = native.zero_value();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn new_holders_are_zero_valued() {
        let holder = Holder::new(&TypeInfo::TimeUuid);
        assert_eq!(holder.native_type(), Some(&NativeType::Uuid));
        assert_eq!(holder.value().unwrap(), &Value::Uuid(Uuid::nil()));

        let holder = Holder::new(&TypeInfo::map(TypeInfo::Varchar, TypeInfo::list(TypeInfo::Int)));
        assert_eq!(holder.value().unwrap(), &Value::Map(Vec::new()));
    }

    #[test]
    fn assign_checks_shape() {
        let mut holder = Holder::new(&TypeInfo::list(TypeInfo::BigInt));
        holder
            .assign(Value::List(vec![Value::BigInt(1), Value::BigInt(2)]))
            .unwrap();
        assert_eq!(holder.value().unwrap().as_list().map(<[Value]>::len), Some(2));

        let err = holder.assign(Value::List(vec![Value::from("x")])).unwrap_err();
        assert_eq!(err.to_string(), "type mismatch: expected Vec<i64>, got list");
        // A rejected write leaves the previous value in place.
        assert_eq!(holder.value().unwrap().as_list().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn slot_writes_are_visible_and_reset_clears_them() {
        let mut holder = Holder::new(&TypeInfo::Varchar);
        *holder.slot().unwrap() = Value::from("hello");
        assert_eq!(holder.unwrap_value().unwrap(), Value::from("hello"));
        holder.reset();
        assert_eq!(holder.unwrap_value().unwrap(), Value::from(""));
    }

    #[test]
    fn unsupported_holders_fail_on_every_use() {
        let mut holder = Holder::new(&TypeInfo::list(TypeInfo::Decimal));
        assert!(!holder.is_supported());
        assert_eq!(holder.native_type(), None);

        let expected = "unsupported column type: list<decimal>";
        assert_eq!(holder.check().unwrap_err().to_string(), expected);
        assert_eq!(holder.slot().unwrap_err().to_string(), expected);
        assert_eq!(holder.assign(Value::Int(1)).unwrap_err().to_string(), expected);
        assert_eq!(holder.value().unwrap_err().to_string(), expected);
        assert_eq!(holder.into_value().unwrap_err().to_string(), expected);
    }
}
