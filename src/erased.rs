//! Type-erased values and dispatch by runtime type.
//!
//! [`ErasedValue`] owns one value of any `'static` type and remembers the
//! type's name, so callers can inspect what it holds before casting.
//! [`describe`] accepts only `i32` and `String` and rejects everything else
//! with [`DispatchError::UnsupportedType`].

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::config::Labels;
use crate::error::{DispatchError, Result};

/// Container holding exactly one value whose type is known at runtime.
pub struct ErasedValue {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl ErasedValue {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Replaces the held value, possibly with one of a different type.
    pub fn set<T: Any>(&mut self, value: T) {
        *self = Self::new(value);
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        // Deref to the trait object; calling on the Box would yield the Box's own TypeId.
        (*self.value).type_id()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrows the held value as `T`.
    ///
    /// Fails with [`DispatchError::BadCast`] when the container holds some
    /// other type.
    pub fn downcast_ref<T: Any>(&self) -> Result<&T> {
        self.value
            .downcast_ref::<T>()
            .ok_or(DispatchError::BadCast {
                expected: type_name::<T>(),
                actual: self.type_name,
            })
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl From<i32> for ErasedValue {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<String> for ErasedValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ErasedValue {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// Formats an `i32` or `String` with the default labels.
pub fn describe(value: &ErasedValue) -> Result<String> {
    describe_with(value, &Labels::default())
}

/// Formats an `i32` or `String` using the given label prefixes.
pub fn describe_with(value: &ErasedValue, labels: &Labels) -> Result<String> {
    if let Ok(n) = value.downcast_ref::<i32>() {
        Ok(format!("{}{}", labels.int, n))
    } else if let Ok(s) = value.downcast_ref::<String>() {
        Ok(format!("{}{}", labels.text, s))
    } else {
        Err(DispatchError::UnsupportedType {
            type_name: value.type_name(),
        })
    }
}
