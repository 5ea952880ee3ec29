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

//! Operation tables: the capabilities a target type exposes to routes.
//!
//! A target registers each callable operation once, with its full signature and a type-erased
//! invoker. Resolution only ever inspects the table; nothing is discovered at runtime.

use crate::error::{ArgumentError, DestinationError};
use crate::target::signature::{MethodSignature, TypeDescriptor};
use crate::target::value::{Arguments, Value};
use std::any::{type_name, Any};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased call of one operation against an optional receiver.
pub type Invoker = Arc<
    dyn Fn(Option<&(dyn Any + Send + Sync)>, &Arguments) -> Result<Value, DestinationError>
        + Send
        + Sync,
>;

/// A callable operation and its signature.
#[derive(Clone)]
pub struct TargetOperation {
    signature: MethodSignature,
    invoker: Invoker,
}

impl TargetOperation {
    pub fn new<F>(signature: MethodSignature, invoker: F) -> Self
    where
        F: Fn(Option<&(dyn Any + Send + Sync)>, &Arguments) -> Result<Value, DestinationError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            signature,
            invoker: Arc::new(invoker),
        }
    }

    /// Operation that ignores any receiver, for rootless destinations.
    pub fn from_fn<F>(signature: MethodSignature, call: F) -> Self
    where
        F: Fn(&Arguments) -> Result<Value, DestinationError> + Send + Sync + 'static,
    {
        Self::new(signature, move |_receiver, arguments| call(arguments))
    }

    pub fn signature(&self) -> &MethodSignature {
        &self.signature
    }

    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    pub fn invoke(
        &self,
        receiver: Option<&(dyn Any + Send + Sync)>,
        arguments: &Arguments,
    ) -> Result<Value, DestinationError> {
        (self.invoker)(receiver, arguments)
    }

    /// Invokes with `receiver` as the root instance.
    pub fn invoke_on<R: Any + Send + Sync>(
        &self,
        receiver: &R,
        arguments: &Arguments,
    ) -> Result<Value, DestinationError> {
        let receiver: &(dyn Any + Send + Sync) = receiver;
        self.invoke(Some(receiver), arguments)
    }
}

impl Debug for TargetOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetOperation")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Operations of one owner type, in declaration order.
#[derive(Clone, Debug)]
pub struct OperationTable {
    owner: TypeDescriptor,
    operations: Vec<TargetOperation>,
}

impl OperationTable {
    pub fn new(owner: TypeDescriptor) -> Self {
        Self {
            owner,
            operations: Vec::new(),
        }
    }

    pub fn builder<T: Any + Send + Sync>() -> OperationTableBuilder<T> {
        OperationTableBuilder {
            table: Self::new(TypeDescriptor::of::<T>()),
            _owner: PhantomData,
        }
    }

    pub fn owner(&self) -> TypeDescriptor {
        self.owner
    }

    pub fn operations(&self) -> &[TargetOperation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn push(&mut self, operation: TargetOperation) {
        self.operations.push(operation);
    }

    /// First operation named `name` whose parameter list equals `parameter_types` exactly.
    pub fn find(&self, name: &str, parameter_types: &[TypeDescriptor]) -> Option<&TargetOperation> {
        self.operations.iter().find(|operation| {
            operation.signature.name() == name
                && operation.signature.parameter_types() == parameter_types
        })
    }

    /// First operation named `name` that receives the raw argument list.
    pub fn find_variadic(&self, name: &str) -> Option<&TargetOperation> {
        self.operations
            .iter()
            .find(|operation| operation.signature.name() == name && operation.signature.is_variadic())
    }
}

/// Typed registration of the operations of `T`.
///
/// ```
/// use interoute::{arguments, OperationTable};
///
/// struct Counter {
///     step: i64,
/// }
///
/// let table = OperationTable::builder::<Counter>()
///     .operation1("advance", |counter: &Counter, from: i64| Ok(from + counter.step))
///     .build();
///
/// let counter = Counter { step: 3 };
/// let advance = table.find("advance", &[interoute::TypeDescriptor::of::<i64>()]).unwrap();
/// let value = advance.invoke_on(&counter, &arguments![4_i64]).unwrap();
/// assert_eq!(value.downcast::<i64>(), Some(7));
/// ```
pub struct OperationTableBuilder<T> {
    table: OperationTable,
    _owner: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> OperationTableBuilder<T> {
    pub fn operation0<R, F>(self, name: &str, call: F) -> Self
    where
        R: Any + Send + Sync,
        F: Fn(&T) -> Result<R, DestinationError> + Send + Sync + 'static,
    {
        self.register(name, Vec::new(), move |target: &T, arguments: &Arguments| {
            arguments.expect_arity(0)?;
            call(target)
        })
    }

    pub fn operation1<A, R, F>(self, name: &str, call: F) -> Self
    where
        A: Any + Clone + Send + Sync,
        R: Any + Send + Sync,
        F: Fn(&T, A) -> Result<R, DestinationError> + Send + Sync + 'static,
    {
        self.register(
            name,
            vec![TypeDescriptor::of::<A>()],
            move |target: &T, arguments: &Arguments| {
                arguments.expect_arity(1)?;
                call(target, arguments.cloned::<A>(0)?)
            },
        )
    }

    pub fn operation2<A, B, R, F>(self, name: &str, call: F) -> Self
    where
        A: Any + Clone + Send + Sync,
        B: Any + Clone + Send + Sync,
        R: Any + Send + Sync,
        F: Fn(&T, A, B) -> Result<R, DestinationError> + Send + Sync + 'static,
    {
        self.register(
            name,
            vec![TypeDescriptor::of::<A>(), TypeDescriptor::of::<B>()],
            move |target: &T, arguments: &Arguments| {
                arguments.expect_arity(2)?;
                call(target, arguments.cloned::<A>(0)?, arguments.cloned::<B>(1)?)
            },
        )
    }

    pub fn operation3<A, B, C, R, F>(self, name: &str, call: F) -> Self
    where
        A: Any + Clone + Send + Sync,
        B: Any + Clone + Send + Sync,
        C: Any + Clone + Send + Sync,
        R: Any + Send + Sync,
        F: Fn(&T, A, B, C) -> Result<R, DestinationError> + Send + Sync + 'static,
    {
        self.register(
            name,
            vec![
                TypeDescriptor::of::<A>(),
                TypeDescriptor::of::<B>(),
                TypeDescriptor::of::<C>(),
            ],
            move |target: &T, arguments: &Arguments| {
                arguments.expect_arity(3)?;
                call(
                    target,
                    arguments.cloned::<A>(0)?,
                    arguments.cloned::<B>(1)?,
                    arguments.cloned::<C>(2)?,
                )
            },
        )
    }

    /// Operation that receives the caller's arguments untouched.
    pub fn variadic<R, F>(self, name: &str, call: F) -> Self
    where
        R: Any + Send + Sync,
        F: Fn(&T, &Arguments) -> Result<R, DestinationError> + Send + Sync + 'static,
    {
        self.register(name, vec![TypeDescriptor::variadic()], call)
    }

    /// Adds a pre-built operation as is.
    pub fn raw(mut self, operation: TargetOperation) -> Self {
        self.table.push(operation);
        self
    }

    pub fn build(self) -> OperationTable {
        self.table
    }

    fn register<R, F>(mut self, name: &str, parameter_types: Vec<TypeDescriptor>, call: F) -> Self
    where
        R: Any + Send + Sync,
        F: Fn(&T, &Arguments) -> Result<R, DestinationError> + Send + Sync + 'static,
    {
        let signature = MethodSignature::new(name, parameter_types, TypeDescriptor::of::<R>());
        let operation = name.to_string();

        self.table.push(TargetOperation::new(
            signature,
            move |receiver, arguments| {
                let target = receiver
                    .and_then(|receiver| receiver.downcast_ref::<T>())
                    .ok_or_else(|| ArgumentError::Receiver {
                        operation: operation.clone(),
                        expected: type_name::<T>(),
                    })?;
                call(target, arguments).map(Value::new)
            },
        ));
        self
    }
}

/// A type that can be registered in a backend configuration.
pub trait RouteTarget: Any + Send + Sync + Sized {
    fn operation_table() -> OperationTable;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments;

    struct Adder;

    fn adder_table() -> OperationTable {
        OperationTable::builder::<Adder>()
            .operation2("plus", |_: &Adder, a: i32, b: i32| Ok(a + b))
            .operation2("plus", |_: &Adder, a: i64, b: i64| Ok(a + b))
            .variadic("plus", |_: &Adder, args: &Arguments| Ok(args.len()))
            .operation0("zero", |_: &Adder| Ok(0_i32))
            .build()
    }

    #[test]
    fn find_requires_exact_parameter_types() {
        let table = adder_table();
        let i64_params = [TypeDescriptor::of::<i64>(), TypeDescriptor::of::<i64>()];

        let plus = table.find("plus", &i64_params).expect("i64 overload");
        assert_eq!(plus.signature().return_type(), TypeDescriptor::of::<i64>());

        assert!(table
            .find("plus", &[TypeDescriptor::of::<i32>()])
            .is_none());
        assert!(table.find_variadic("plus").is_some());
        assert!(table.find_variadic("zero").is_none());
        assert_eq!(table.owner(), TypeDescriptor::of::<Adder>());
    }

    #[test]
    fn invoker_unpacks_arguments_and_checks_receiver() {
        let table = adder_table();
        let plus = &table.operations()[0];

        let value = plus
            .invoke_on(&Adder, &arguments![5_i32, 2_i32])
            .expect("plus succeeds");
        assert_eq!(value.downcast::<i32>(), Some(7));

        let wrong_receiver = plus.invoke_on(&"not an adder", &arguments![5_i32, 2_i32]);
        assert!(wrong_receiver
            .expect_err("receiver mismatch")
            .to_string()
            .contains("requires a receiver"));

        let wrong_arity = plus.invoke_on(&Adder, &arguments![5_i32]);
        assert!(wrong_arity.is_err());
    }

    #[test]
    fn rootless_operation_ignores_receiver() {
        let operation = TargetOperation::from_fn(crate::signature!(answer() -> u32), |_| {
            Ok(Value::new(42_u32))
        });

        let value = operation.invoke(None, &Arguments::new()).expect("answer");
        assert_eq!(value.downcast::<u32>(), Some(42));
    }
}
