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

//! Immutable name-to-instance snapshots and their builder.

use crate::target::{OperationTable, RootEntity, RouteTarget, TypeDescriptor};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// An instance registered under a name, with the operations its type exposes.
///
/// Equality is identity of the registered instance, not structural equality.
#[derive(Clone)]
pub struct RegisteredInstance {
    instance: Arc<dyn Any + Send + Sync>,
    operations: Arc<OperationTable>,
}

impl RegisteredInstance {
    pub fn new<T: RouteTarget>(instance: Arc<T>) -> Self {
        Self::with_operations(instance, Arc::new(T::operation_table()))
    }

    /// Registers an instance whose operations are described by hand.
    pub fn with_operations(
        instance: Arc<dyn Any + Send + Sync>,
        operations: Arc<OperationTable>,
    ) -> Self {
        Self {
            instance,
            operations,
        }
    }

    pub fn instance(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.instance
    }

    pub fn operations(&self) -> &Arc<OperationTable> {
        &self.operations
    }

    pub fn owner(&self) -> TypeDescriptor {
        self.operations.owner()
    }

    pub(crate) fn to_root(&self, name: &str) -> RootEntity {
        RootEntity::new(name, self.instance.clone(), self.operations.clone())
    }
}

impl PartialEq for RegisteredInstance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl Eq for RegisteredInstance {}

impl Debug for RegisteredInstance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredInstance")
            .field("owner", &self.owner())
            .field("operations", &self.operations.len())
            .finish()
    }
}

/// Frozen view of the instances a backend resolves roots against.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BackendConfiguration {
    instances: Arc<HashMap<String, RegisteredInstance>>,
}

impl BackendConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> BackendConfigurationBuilder {
        BackendConfigurationBuilder::default()
    }

    pub fn instance(&self, name: &str) -> Option<&RegisteredInstance> {
        self.instances.get(name)
    }

    pub fn instances(&self) -> &HashMap<String, RegisteredInstance> {
        &self.instances
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Builder seeded with every entry of this snapshot.
    pub fn to_builder(&self) -> BackendConfigurationBuilder {
        BackendConfigurationBuilder {
            instances: HashMap::clone(&self.instances),
        }
    }
}

impl Debug for BackendConfiguration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.instances.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("BackendConfiguration")
            .field("instances", &names)
            .finish()
    }
}

/// Mutable staging area for a [`BackendConfiguration`]; stays usable after [`build`](Self::build).
///
/// ```
/// use std::sync::Arc;
/// use interoute::{BackendConfiguration, OperationTable, RouteTarget};
///
/// struct Clock;
///
/// impl RouteTarget for Clock {
///     fn operation_table() -> OperationTable {
///         OperationTable::builder::<Clock>()
///             .operation0("now", |_: &Clock| Ok(0_u64))
///             .build()
///     }
/// }
///
/// let mut builder = BackendConfiguration::builder();
/// builder.add_instance("Clock", Arc::new(Clock));
/// let first = builder.build();
///
/// builder.remove_instance("Clock");
/// assert!(first.contains("Clock"));
/// assert!(builder.build().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct BackendConfigurationBuilder {
    instances: HashMap<String, RegisteredInstance>,
}

impl BackendConfigurationBuilder {
    /// Registers `instance` under `name`, replacing any previous registration.
    pub fn add_instance<T: RouteTarget>(&mut self, name: &str, instance: Arc<T>) -> &mut Self {
        let owner = TypeDescriptor::of::<T>();
        let operations = self
            .instances
            .values()
            .find(|registered| registered.owner() == owner)
            .map(|registered| registered.operations.clone())
            .unwrap_or_else(|| Arc::new(T::operation_table()));

        self.add_registered(name, RegisteredInstance::with_operations(instance, operations))
    }

    pub fn add_registered(&mut self, name: &str, registered: RegisteredInstance) -> &mut Self {
        self.instances.insert(name.to_string(), registered);
        self
    }

    /// Removes `name`; no-op when absent.
    pub fn remove_instance(&mut self, name: &str) -> &mut Self {
        self.instances.remove(name);
        self
    }

    pub fn build(&self) -> BackendConfiguration {
        BackendConfiguration {
            instances: Arc::new(self.instances.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Math;

    impl RouteTarget for Math {
        fn operation_table() -> OperationTable {
            OperationTable::builder::<Math>()
                .operation2("plus", |_: &Math, a: i32, b: i32| Ok(a + b))
                .build()
        }
    }

    #[test]
    fn build_is_idempotent() {
        let mut builder = BackendConfiguration::builder();
        builder.add_instance("Math", Arc::new(Math));

        assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn repeated_identical_add_instance_matches_single_add() {
        let math = Arc::new(Math);

        let mut once = BackendConfiguration::builder();
        once.add_instance("Math", math.clone());
        let mut twice = BackendConfiguration::builder();
        twice
            .add_instance("Math", math.clone())
            .add_instance("Math", math);

        let configuration = twice.build();
        assert_eq!(configuration, once.build());
        assert_eq!(configuration.len(), 1);
    }

    #[test]
    fn last_write_wins() {
        let first = Arc::new(Math);
        let second = Arc::new(Math);
        let second_erased: Arc<dyn Any + Send + Sync> = second.clone();

        let mut builder = BackendConfiguration::builder();
        builder
            .add_instance("Math", first)
            .add_instance("Math", second);
        let configuration = builder.build();

        let registered = configuration.instance("Math").expect("registered");
        assert!(Arc::ptr_eq(registered.instance(), &second_erased));
        assert_eq!(configuration.len(), 1);
    }

    #[test]
    fn to_builder_round_trips_snapshot() {
        let mut builder = BackendConfiguration::builder();
        builder
            .add_instance("Math", Arc::new(Math))
            .add_instance("Other", Arc::new(Math));
        let configuration = builder.build();

        assert_eq!(configuration.to_builder().build(), configuration);
    }

    #[test]
    fn equality_tracks_instance_identity() {
        let mut left = BackendConfiguration::builder();
        left.add_instance("Math", Arc::new(Math));
        let mut right = BackendConfiguration::builder();
        right.add_instance("Math", Arc::new(Math));

        assert_ne!(left.build(), right.build());
    }

    #[test]
    fn remove_missing_instance_is_noop() {
        let mut builder = BackendConfiguration::builder();
        builder.add_instance("Math", Arc::new(Math));
        let before = builder.build();

        builder.remove_instance("Ghost");
        assert_eq!(builder.build(), before);

        builder.remove_instance("Math");
        assert!(builder.build().is_empty());
        assert!(before.contains("Math"));
    }

    #[test]
    fn same_type_shares_operation_table() {
        let mut builder = BackendConfiguration::builder();
        builder
            .add_instance("Left", Arc::new(Math))
            .add_instance("Right", Arc::new(Math));
        let configuration = builder.build();

        let left = configuration.instance("Left").expect("left");
        let right = configuration.instance("Right").expect("right");
        assert!(Arc::ptr_eq(left.operations(), right.operations()));
        assert_ne!(left, right);
    }
}
