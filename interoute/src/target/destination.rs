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

//! Resolved root and target entities embedded into routes.

use crate::error::DestinationError;
use crate::target::operation::{Invoker, OperationTable, TargetOperation};
use crate::target::signature::{MethodSignature, TypeDescriptor};
use crate::target::value::{Arguments, Value};
use std::any::Any;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Named instance a destination's target is scoped to.
#[derive(Clone)]
pub struct RootEntity {
    name: String,
    instance: Arc<dyn Any + Send + Sync>,
    operations: Arc<OperationTable>,
}

impl RootEntity {
    pub fn new(
        name: &str,
        instance: Arc<dyn Any + Send + Sync>,
        operations: Arc<OperationTable>,
    ) -> Self {
        Self {
            name: name.to_string(),
            instance,
            operations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.instance
    }

    pub fn operations(&self) -> &OperationTable {
        &self.operations
    }
}

impl Debug for RootEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootEntity")
            .field("name", &self.name)
            .field("owner", &self.operations.owner())
            .finish()
    }
}

/// Callable target of a destination.
#[derive(Clone)]
pub struct TargetDescriptor {
    owner_type: Option<TypeDescriptor>,
    signature: MethodSignature,
    invoker: Invoker,
}

impl TargetDescriptor {
    pub fn new(owner_type: Option<TypeDescriptor>, operation: &TargetOperation) -> Self {
        Self {
            owner_type,
            signature: operation.signature().clone(),
            invoker: operation.invoker().clone(),
        }
    }

    pub fn owner_type(&self) -> Option<TypeDescriptor> {
        self.owner_type
    }

    pub fn signature(&self) -> &MethodSignature {
        &self.signature
    }

    pub fn method_name(&self) -> &str {
        self.signature.name()
    }

    pub fn parameter_types(&self) -> &[TypeDescriptor] {
        self.signature.parameter_types()
    }

    pub fn return_type(&self) -> TypeDescriptor {
        self.signature.return_type()
    }
}

impl Debug for TargetDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetDescriptor")
            .field("owner_type", &self.owner_type)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Outcome of resolving a destination notation: an optional root and its target.
#[derive(Clone, Debug)]
pub struct ResolvedDestination {
    root: Option<RootEntity>,
    target: TargetDescriptor,
}

impl ResolvedDestination {
    pub fn new(root: Option<RootEntity>, target: TargetDescriptor) -> Self {
        Self { root, target }
    }

    pub fn root(&self) -> Option<&RootEntity> {
        self.root.as_ref()
    }

    pub fn target(&self) -> &TargetDescriptor {
        &self.target
    }

    /// Calls the target with the root instance, if any, as receiver.
    pub fn invoke(&self, arguments: &Arguments) -> Result<Value, DestinationError> {
        let receiver: Option<&(dyn Any + Send + Sync)> =
            self.root.as_ref().map(|root| &*root.instance);
        (self.target.invoker)(receiver, arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments;

    struct Greeter {
        greeting: &'static str,
    }

    #[test]
    fn invoke_passes_root_instance_as_receiver() {
        let table = Arc::new(
            OperationTable::builder::<Greeter>()
                .operation1("greet", |greeter: &Greeter, name: String| {
                    Ok(format!("{}, {name}", greeter.greeting))
                })
                .build(),
        );
        let operation = table.operations()[0].clone();
        let root = RootEntity::new(
            "Greeter",
            Arc::new(Greeter { greeting: "hello" }),
            table.clone(),
        );
        let destination = ResolvedDestination::new(
            Some(root),
            TargetDescriptor::new(Some(table.owner()), &operation),
        );

        let value = destination
            .invoke(&arguments![String::from("route")])
            .expect("greet succeeds");
        assert_eq!(value.downcast::<String>().as_deref(), Some("hello, route"));
        assert_eq!(destination.target().method_name(), "greet");
        assert_eq!(destination.root().map(RootEntity::name), Some("Greeter"));
    }

    #[test]
    fn rootless_destination_invokes_without_receiver() {
        let operation = TargetOperation::from_fn(crate::signature!(ping() -> bool), |_| {
            Ok(Value::new(true))
        });
        let destination = ResolvedDestination::new(None, TargetDescriptor::new(None, &operation));

        let value = destination.invoke(&Arguments::new()).expect("ping");
        assert_eq!(value.downcast::<bool>(), Some(true));
    }
}
