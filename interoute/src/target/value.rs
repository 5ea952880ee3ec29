/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Type-erased values and argument lists passed through routes.

use crate::error::ArgumentError;
use crate::target::signature::TypeDescriptor;
use std::any::{type_name, Any};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Type-erased, cheaply clonable value.
#[derive(Clone)]
pub struct Value {
    ty: TypeDescriptor,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Value {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            ty: TypeDescriptor::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Completion value of a void route.
    pub fn unit() -> Self {
        Self::new(())
    }

    pub fn type_descriptor(&self) -> TypeDescriptor {
        self.ty
    }

    pub fn is_unit(&self) -> bool {
        self.ty.is_unit()
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.inner).is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }

    /// Clones the contained value out when it has type `T`.
    pub fn downcast<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Shares the contained value when it has type `T`; hands `self` back otherwise.
    pub fn downcast_arc<T: Any + Send + Sync>(self) -> Result<Arc<T>, Self> {
        let ty = self.ty;
        self.inner.downcast::<T>().map_err(|inner| Self { ty, inner })
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value<{}>", self.ty)
    }
}

/// Ordered list of type-erased call arguments.
#[derive(Clone, Debug, Default)]
pub struct Arguments {
    values: Vec<Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Appends `value`, builder style.
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.values.push(Value::new(value));
        self
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn types(&self) -> Vec<TypeDescriptor> {
        self.values.iter().map(Value::type_descriptor).collect()
    }

    pub fn expect_arity(&self, expected: usize) -> Result<(), ArgumentError> {
        if self.values.len() == expected {
            Ok(())
        } else {
            Err(ArgumentError::Arity {
                expected,
                received: self.values.len(),
            })
        }
    }

    /// Borrows argument `index` as a `T`.
    pub fn get_as<T: Any>(&self, index: usize) -> Result<&T, ArgumentError> {
        let value = self.values.get(index).ok_or(ArgumentError::Arity {
            expected: index + 1,
            received: self.values.len(),
        })?;

        value
            .downcast_ref::<T>()
            .ok_or_else(|| ArgumentError::TypeMismatch {
                index,
                expected: type_name::<T>(),
                found: value.type_descriptor().name(),
            })
    }

    pub fn cloned<T: Any + Clone>(&self, index: usize) -> Result<T, ArgumentError> {
        self.get_as::<T>(index).cloned()
    }
}

impl FromIterator<Value> for Arguments {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Builds an [`Arguments`] list from plain values.
///
/// ```
/// use interoute::arguments;
///
/// let args = arguments![5_i32, String::from("five")];
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.get_as::<i32>(0), Ok(&5));
/// ```
#[macro_export]
macro_rules! arguments {
    () => {
        $crate::Arguments::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Arguments::from_values(vec![$($crate::Value::new($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_downcasts_only_to_its_own_type() {
        let value = Value::new(7_i32);

        assert!(value.is::<i32>());
        assert_eq!(value.downcast::<i32>(), Some(7));
        assert_eq!(value.downcast_ref::<i64>(), None);

        let shared = value.downcast_arc::<i32>().expect("i32 payload");
        assert_eq!(*shared, 7);
    }

    #[test]
    fn failed_downcast_arc_returns_the_value() {
        let value = Value::new(String::from("seven"));
        let value = value.downcast_arc::<i32>().expect_err("not an i32");
        assert_eq!(value.downcast::<String>().as_deref(), Some("seven"));
    }

    #[test]
    fn get_as_reports_mismatch_and_missing_arguments() {
        let args = Arguments::new().with(5_i32).with("text");

        assert_eq!(args.get_as::<i32>(0), Ok(&5));
        assert_eq!(
            args.get_as::<i32>(1),
            Err(ArgumentError::TypeMismatch {
                index: 1,
                expected: "i32",
                found: "&str",
            })
        );
        assert_eq!(
            args.get_as::<i32>(2),
            Err(ArgumentError::Arity {
                expected: 3,
                received: 2,
            })
        );
    }

    #[test]
    fn types_follow_argument_order() {
        let args = arguments![1_u8, 2_u64];
        assert_eq!(
            args.types(),
            vec![TypeDescriptor::of::<u8>(), TypeDescriptor::of::<u64>()]
        );
        assert!(args.expect_arity(2).is_ok());
        assert!(args.expect_arity(1).is_err());
    }
}
