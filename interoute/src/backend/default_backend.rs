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

//! Configuration-driven backend: roots are registered instances, targets are their operations.

use crate::backend::configuration::BackendConfiguration;
use crate::backend::RouterBackend;
use crate::control_plane::RouteSpec;
use crate::error::{NotationError, ResolutionError};
use crate::observability::events;
use crate::routing::{
    parse_and_resolve, DestinationResolver, RootResolver, TargetResolver, VariadicPolicy,
};
use crate::target::{MethodSignature, ResolvedDestination, RootEntity, TargetDescriptor};
use tracing::debug;

pub const DEFAULT_BACKEND_NAME: &str = "default";

const COMPONENT: &str = "default_backend";

/// Resolves `Root.target` against the instances of a [`BackendConfiguration`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultBackend {
    policy: VariadicPolicy,
}

impl DefaultBackend {
    pub fn new(policy: VariadicPolicy) -> Self {
        Self { policy }
    }
}

impl RouterBackend for DefaultBackend {
    fn name(&self) -> &str {
        DEFAULT_BACKEND_NAME
    }

    fn requires_configuration(&self) -> bool {
        true
    }

    fn create_configuration(&self) -> BackendConfiguration {
        BackendConfiguration::new()
    }

    fn resolve_destination(
        &self,
        route: &RouteSpec,
        configuration: &BackendConfiguration,
    ) -> Result<ResolvedDestination, NotationError> {
        let resolver = ConfigurationResolver {
            configuration,
            origin: route.origin(),
            policy: self.policy,
        };
        let destination: DestinationResolver<'_, RootEntity, TargetDescriptor> =
            DestinationResolver::new(&resolver, &resolver);
        let (root, target) = parse_and_resolve(route.destination(), &destination)?.into_resolved();

        debug!(
            event = events::DESTINATION_RESOLVED,
            component = COMPONENT,
            origin = %route.origin(),
            destination = route.destination(),
            resolved = %target.signature(),
            "resolved destination against configuration"
        );

        Ok(ResolvedDestination::new(root, target))
    }
}

struct ConfigurationResolver<'a> {
    configuration: &'a BackendConfiguration,
    origin: &'a MethodSignature,
    policy: VariadicPolicy,
}

impl RootResolver<RootEntity> for ConfigurationResolver<'_> {
    fn resolve_root(&self, token: &str) -> Result<RootEntity, ResolutionError> {
        self.configuration
            .instance(token)
            .map(|registered| registered.to_root(token))
            .ok_or_else(|| ResolutionError::root(token, "registered instance missing"))
    }
}

impl TargetResolver<RootEntity, TargetDescriptor> for ConfigurationResolver<'_> {
    fn resolve_target(
        &self,
        token: &str,
        root: Option<&RootEntity>,
    ) -> Result<TargetDescriptor, ResolutionError> {
        let root = root
            .ok_or_else(|| ResolutionError::target(token, "no root instance to scope the target"))?;
        let operations = root.operations();

        let operation = operations
            .find(token, self.origin.parameter_types())
            .or_else(|| {
                if self.policy.admits(self.origin.arity()) {
                    operations.find_variadic(token)
                } else {
                    None
                }
            })
            .ok_or_else(|| {
                ResolutionError::target(
                    token,
                    format!(
                        "no operation of '{}' accepts the parameters of {}",
                        operations.owner(),
                        self.origin
                    ),
                )
            })?;

        Ok(TargetDescriptor::new(Some(operations.owner()), operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature;
    use crate::target::{Arguments, OperationTable, RouteTarget};
    use std::sync::Arc;

    struct Math;

    impl RouteTarget for Math {
        fn operation_table() -> OperationTable {
            OperationTable::builder::<Math>()
                .operation2("plus", |_: &Math, a: i32, b: i32| Ok(a + b))
                .operation2("plus", |_: &Math, a: i64, b: i64| Ok(a + b))
                .variadic("sum", |_: &Math, args: &Arguments| Ok(args.len()))
                .build()
        }
    }

    fn configuration() -> BackendConfiguration {
        let mut builder = BackendConfiguration::builder();
        builder.add_instance("Math", Arc::new(Math));
        builder.build()
    }

    fn route(origin: MethodSignature, destination: &str) -> RouteSpec {
        RouteSpec::new(origin, destination, Vec::new()).expect("non-empty destination")
    }

    #[test]
    fn resolves_exact_overload() {
        let backend = DefaultBackend::default();
        let resolved = backend
            .resolve_destination(&route(signature!(calc(i64, i64) -> i64), "Math.plus"), &configuration())
            .expect("resolves");

        assert_eq!(resolved.root().map(RootEntity::name), Some("Math"));
        assert_eq!(resolved.target().signature(), &signature!(plus(i64, i64) -> i64));
    }

    #[test]
    fn missing_root_reports_registered_instance_missing() {
        let backend = DefaultBackend::default();
        let err = backend
            .resolve_destination(&route(signature!(calc(i32, i32) -> i32), "Ghost.plus"), &configuration())
            .expect_err("unknown root");

        assert_eq!(
            err.to_string(),
            "could not resolve root type from notation: registered instance missing ('Ghost')"
        );
    }

    #[test]
    fn bare_target_fails_without_root() {
        let backend = DefaultBackend::default();
        let err = backend
            .resolve_destination(&route(signature!(calc(i32, i32) -> i32), "plus"), &configuration())
            .expect_err("no root");

        assert!(err
            .to_string()
            .starts_with("could not resolve target method from notation"));
    }

    #[test]
    fn parameter_mismatch_fails_target_resolution() {
        let backend = DefaultBackend::default();
        let err = backend
            .resolve_destination(&route(signature!(calc(u8) -> i32), "Math.plus"), &configuration())
            .expect_err("no overload takes u8");

        assert!(matches!(err, NotationError::Resolution(ResolutionError::Target { .. })));
    }

    #[test]
    fn variadic_fallback_follows_policy() {
        let origin = signature!(count(String, u8) -> usize);

        let forwarding = DefaultBackend::new(VariadicPolicy::PassThrough);
        assert!(forwarding
            .resolve_destination(&route(origin.clone(), "Math.sum"), &configuration())
            .is_ok());

        let strict = DefaultBackend::new(VariadicPolicy::Reject);
        assert!(strict
            .resolve_destination(&route(origin, "Math.sum"), &configuration())
            .is_err());
    }
}
