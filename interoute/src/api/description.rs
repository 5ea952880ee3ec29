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

//! Abstract router descriptions consumed by the router factory.

use crate::backend::Configurer;
use crate::control_plane::{MetadataEntry, RouteSpec};
use crate::error::RouterCreationError;
use crate::routing::is_token;
use crate::target::{MethodSignature, TypeDescriptor};
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Whether an operation is routed or already implemented by the router itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Abstract,
    Provided,
}

/// One operation of a router description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDescription {
    signature: MethodSignature,
    destination: Option<String>,
    metadata: Vec<MetadataEntry>,
    kind: OperationKind,
}

impl OperationDescription {
    /// Abstract operation; it still needs a destination.
    pub fn new(signature: MethodSignature) -> Self {
        Self {
            signature,
            destination: None,
            metadata: Vec::new(),
            kind: OperationKind::Abstract,
        }
    }

    /// Operation implemented by the router itself; never routed.
    pub fn provided(signature: MethodSignature) -> Self {
        Self {
            kind: OperationKind::Provided,
            ..Self::new(signature)
        }
    }

    pub fn route_to(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push(MetadataEntry::new(key, value));
        self
    }

    pub fn signature(&self) -> &MethodSignature {
        &self.signature
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn is_abstract(&self) -> bool {
        self.kind == OperationKind::Abstract
    }
}

/// Declarative description of a router: its name, backend, configurers and operations.
///
/// ```
/// use std::sync::Arc;
/// use interoute::{signature, BackendConfiguration, OperationDescription, RouterDescription};
///
/// let description = RouterDescription::new("Calculator")
///     .configurer(|configuration: BackendConfiguration| configuration)
///     .operation(OperationDescription::new(signature!(calc(i32, i32) -> i32)).route_to("Math.plus"))
///     .operation(OperationDescription::provided(signature!(describe() -> String)));
///
/// assert!(description.validate().is_ok());
/// assert_eq!(description.route_specs().unwrap().len(), 1);
/// ```
#[derive(Clone)]
pub struct RouterDescription {
    name: String,
    backend: Option<String>,
    configurers: Vec<Arc<dyn Configurer>>,
    operations: Vec<OperationDescription>,
    metadata: Vec<MetadataEntry>,
}

impl RouterDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend: None,
            configurers: Vec::new(),
            operations: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Names the backend; the factory's configured default is used otherwise.
    pub fn backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = Some(backend.into());
        self
    }

    /// Appends a configurer; configurers run in the order they were added.
    pub fn configurer<C: Configurer + 'static>(mut self, configurer: C) -> Self {
        self.configurers.push(Arc::new(configurer));
        self
    }

    pub fn operation(mut self, operation: OperationDescription) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push(MetadataEntry::new(key, value));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn backend_name(&self) -> Option<&str> {
        self.backend.as_deref()
    }

    pub fn configurers(&self) -> &[Arc<dyn Configurer>] {
        &self.configurers
    }

    pub fn operations(&self) -> &[OperationDescription] {
        &self.operations
    }

    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }

    /// Checks the description can be turned into a router.
    pub fn validate(&self) -> Result<(), RouterCreationError> {
        if !is_token(&self.name) {
            return Err(RouterCreationError::invalid(format!(
                "router name '{}' is not an identifier",
                self.name
            )));
        }

        let mut seen: HashSet<(&str, &[TypeDescriptor])> = HashSet::new();
        for operation in &self.operations {
            let signature = operation.signature();
            if !is_token(signature.name()) {
                return Err(RouterCreationError::invalid(format!(
                    "operation name '{}' is not an identifier",
                    signature.name()
                )));
            }
            if !seen.insert((signature.name(), signature.parameter_types())) {
                return Err(RouterCreationError::invalid(format!(
                    "operation '{signature}' is declared more than once"
                )));
            }
            if operation.is_abstract() && operation.destination().map_or(true, str::is_empty) {
                return Err(RouterCreationError::invalid(format!(
                    "abstract operation '{signature}' has no destination"
                )));
            }
        }

        Ok(())
    }

    /// Route specs of every abstract operation, in declaration order.
    pub fn route_specs(&self) -> Result<Vec<RouteSpec>, RouterCreationError> {
        self.operations
            .iter()
            .filter(|operation| operation.is_abstract())
            .map(|operation| {
                RouteSpec::new(
                    operation.signature().clone(),
                    operation.destination().unwrap_or_default(),
                    operation.metadata().to_vec(),
                )
            })
            .collect()
    }
}

impl Debug for RouterDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterDescription")
            .field("name", &self.name)
            .field("backend", &self.backend)
            .field("configurers", &self.configurers.len())
            .field("operations", &self.operations)
            .field("metadata", &self.metadata)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature;

    fn calc() -> OperationDescription {
        OperationDescription::new(signature!(calc(i32, i32) -> i32)).route_to("Math.plus")
    }

    #[test]
    fn name_must_be_an_identifier() {
        let err = RouterDescription::new("not a router")
            .validate()
            .expect_err("invalid name");
        assert!(err.to_string().starts_with("not a valid router description"));
        assert!(RouterDescription::new("").validate().is_err());
    }

    #[test]
    fn abstract_operations_need_destinations() {
        let description = RouterDescription::new("Calculator")
            .operation(OperationDescription::new(signature!(calc(i32, i32) -> i32)));
        assert!(description.validate().is_err());

        let empty = RouterDescription::new("Calculator")
            .operation(OperationDescription::new(signature!(calc(i32, i32) -> i32)).route_to(""));
        assert!(empty.validate().is_err());
    }

    #[test]
    fn duplicate_signatures_are_rejected_but_overloads_are_not() {
        let duplicated = RouterDescription::new("Calculator")
            .operation(calc())
            .operation(calc());
        assert!(duplicated.validate().is_err());

        let overloaded = RouterDescription::new("Calculator")
            .operation(calc())
            .operation(OperationDescription::new(signature!(calc(i64, i64) -> i64)).route_to("Math.plus"));
        assert!(overloaded.validate().is_ok());
    }

    #[test]
    fn provided_operations_produce_no_route_spec() {
        let description = RouterDescription::new("Calculator")
            .operation(calc().with_metadata("owner", "math"))
            .operation(OperationDescription::provided(signature!(name() -> String)));

        let specs = description.route_specs().expect("valid");
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].destination(), "Math.plus");
        assert_eq!(specs[0].metadata_value("owner"), Some("math"));
    }
}
