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

//! Type and operation-shape descriptors.

use crate::target::value::Arguments;
use std::any::{type_name, TypeId};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// Runtime identity of a Rust type.
///
/// Two descriptors are equal iff they describe the same type; the recorded name is only used
/// for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The void marker.
    pub fn unit() -> Self {
        Self::of::<()>()
    }

    /// The marker of a destination that receives the raw argument list.
    pub fn variadic() -> Self {
        Self::of::<Arguments>()
    }

    pub fn is_unit(&self) -> bool {
        self.id == TypeId::of::<()>()
    }

    pub fn is_variadic(&self) -> bool {
        self.id == TypeId::of::<Arguments>()
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Name, ordered parameter types and return type of an operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    name: String,
    parameter_types: Vec<TypeDescriptor>,
    return_type: TypeDescriptor,
}

impl MethodSignature {
    pub fn new(
        name: impl Into<String>,
        parameter_types: Vec<TypeDescriptor>,
        return_type: TypeDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            parameter_types,
            return_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_types(&self) -> &[TypeDescriptor] {
        &self.parameter_types
    }

    pub fn return_type(&self) -> TypeDescriptor {
        self.return_type
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    pub fn returns_unit(&self) -> bool {
        self.return_type.is_unit()
    }

    /// `true` when the only parameter is the raw argument list.
    pub fn is_variadic(&self) -> bool {
        matches!(self.parameter_types.as_slice(), [only] if only.is_variadic())
    }
}

impl Display for MethodSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (index, parameter) in self.parameter_types.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}

/// Builds a [`MethodSignature`] from a Rust-like declaration.
///
/// ```
/// use interoute::{signature, TypeDescriptor};
///
/// let calc = signature!(calc(i32, i32) -> i32);
/// assert_eq!(calc.name(), "calc");
/// assert_eq!(calc.arity(), 2);
///
/// let notify = signature!(notify(String));
/// assert_eq!(notify.return_type(), TypeDescriptor::unit());
/// ```
#[macro_export]
macro_rules! signature {
    ($name:ident ( $($param:ty),* $(,)? ) -> $ret:ty) => {
        $crate::MethodSignature::new(
            stringify!($name),
            vec![$($crate::TypeDescriptor::of::<$param>()),*],
            $crate::TypeDescriptor::of::<$ret>(),
        )
    };
    ($name:ident ( $($param:ty),* $(,)? )) => {
        $crate::MethodSignature::new(
            stringify!($name),
            vec![$($crate::TypeDescriptor::of::<$param>()),*],
            $crate::TypeDescriptor::unit(),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_compare_by_type_identity() {
        assert_eq!(TypeDescriptor::of::<i32>(), TypeDescriptor::of::<i32>());
        assert_ne!(TypeDescriptor::of::<i32>(), TypeDescriptor::of::<i64>());
        assert!(TypeDescriptor::of::<()>().is_unit());
        assert!(TypeDescriptor::of::<Arguments>().is_variadic());
    }

    #[test]
    fn signature_macro_matches_manual_construction() {
        let manual = MethodSignature::new(
            "calc",
            vec![TypeDescriptor::of::<i32>(), TypeDescriptor::of::<i32>()],
            TypeDescriptor::of::<i32>(),
        );

        assert_eq!(signature!(calc(i32, i32) -> i32), manual);
        assert!(signature!(fire()).returns_unit());
        assert!(signature!(echo(Arguments) -> String).is_variadic());
        assert!(!signature!(echo(Arguments, i32) -> String).is_variadic());
    }

    #[test]
    fn signature_display_lists_parameters() {
        let rendered = signature!(calc(i32, i32) -> i32).to_string();
        assert_eq!(rendered, "calc(i32, i32) -> i32");
    }
}
