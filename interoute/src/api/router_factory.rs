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

//! Router creation: description validation, backend setup, configuration, assembly.

use crate::api::description::RouterDescription;
use crate::api::router::Router;
use crate::backend::{apply_configurers, BackendRegistry};
use crate::config::DispatchConfig;
use crate::control_plane::{DispatchAssembler, RouterSpec};
use crate::error::RouterCreationError;
use crate::observability::events;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "router_factory";

/// Creates routers from descriptions, instantiating backends from a [`BackendRegistry`].
pub struct RouterFactory {
    registry: Arc<BackendRegistry>,
    config: DispatchConfig,
}

impl RouterFactory {
    /// Factory backed by the process-wide registry.
    pub fn new(config: DispatchConfig) -> Self {
        Self::with_registry(BackendRegistry::global(), config)
    }

    pub fn with_registry(registry: Arc<BackendRegistry>, config: DispatchConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<BackendRegistry> {
        &self.registry
    }

    /// Validates `description`, instantiates its backend and runs its configurers.
    pub fn router_spec(
        &self,
        description: &RouterDescription,
    ) -> Result<RouterSpec, RouterCreationError> {
        description.validate()?;

        let backend_name = description
            .backend_name()
            .unwrap_or(self.config.default_backend.as_str());
        let backend = self
            .registry
            .create(backend_name, &self.config)
            .ok_or_else(|| RouterCreationError::UnknownBackend {
                backend: backend_name.to_string(),
            })?;

        if backend.requires_configuration() && description.configurers().is_empty() {
            return Err(RouterCreationError::MissingConfigurer {
                backend: backend_name.to_string(),
            });
        }

        let configuration =
            apply_configurers(backend.create_configuration(), description.configurers());
        let routes = description.route_specs()?;

        Ok(RouterSpec::new(
            description.clone(),
            backend,
            configuration,
            routes,
        ))
    }

    /// Builds a router for `description`.
    ///
    /// Fails on an invalid description, an unknown backend, a backend that requires
    /// configurers when none are declared, or any route that cannot be assembled.
    pub fn create_router(
        &self,
        description: &RouterDescription,
    ) -> Result<Router, RouterCreationError> {
        debug!(
            event = events::ROUTER_CREATE_START,
            component = COMPONENT,
            router = description.name(),
            operations = description.operations().len(),
            "creating router"
        );

        let result = self.router_spec(description).and_then(|spec| {
            DispatchAssembler::new(self.config.variadic_policy)
                .assemble(spec)
                .map_err(RouterCreationError::from)
        });

        match &result {
            Ok(router) => debug!(
                event = events::ROUTER_CREATE_OK,
                component = COMPONENT,
                router = router.name(),
                routes = router.len(),
                "router created"
            ),
            Err(err) => warn!(
                event = events::ROUTER_CREATE_REJECTED,
                component = COMPONENT,
                router = description.name(),
                err = %err,
                "router creation rejected"
            ),
        }

        result
    }
}

impl Default for RouterFactory {
    fn default() -> Self {
        Self::new(DispatchConfig::default())
    }
}

/// Creates a router with the default configuration and the process-wide backend registry.
pub fn create_router(description: &RouterDescription) -> Result<Router, RouterCreationError> {
    RouterFactory::default().create_router(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OperationDescription;
    use crate::backend::{BackendConfiguration, RouterBackend};
    use crate::control_plane::RouteSpec;
    use crate::error::NotationError;
    use crate::signature;
    use crate::target::{OperationTable, ResolvedDestination, RouteTarget};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Math;

    impl RouteTarget for Math {
        fn operation_table() -> OperationTable {
            OperationTable::builder::<Math>()
                .operation2("plus", |_: &Math, a: i32, b: i32| Ok(a + b))
                .build()
        }
    }

    fn register_math(configuration: BackendConfiguration) -> BackendConfiguration {
        configuration
            .to_builder()
            .add_instance("Math", Arc::new(Math))
            .build()
    }

    fn calculator() -> RouterDescription {
        RouterDescription::new("Calculator")
            .operation(OperationDescription::new(signature!(calc(i32, i32) -> i32)).route_to("Math.plus"))
    }

    fn factory() -> RouterFactory {
        RouterFactory::with_registry(Arc::new(BackendRegistry::new()), DispatchConfig::default())
    }

    #[test]
    fn invalid_description_is_rejected_before_backend_lookup() {
        let err = factory()
            .create_router(&RouterDescription::new("bad name").backend("missing"))
            .expect_err("invalid");
        assert!(matches!(err, RouterCreationError::InvalidDescription { .. }));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = factory()
            .create_router(&calculator().backend("missing").configurer(register_math))
            .expect_err("unknown backend");
        assert!(matches!(err, RouterCreationError::UnknownBackend { ref backend } if backend == "missing"));
    }

    #[test]
    fn configuring_backend_requires_a_configurer() {
        let err = factory().create_router(&calculator()).expect_err("no configurer");
        assert!(err
            .to_string()
            .starts_with("backend requires at least one configurer"));
    }

    #[test]
    fn configurers_feed_route_resolution() {
        let router = factory()
            .create_router(&calculator().configurer(register_math))
            .expect("router");

        assert_eq!(router.name(), "Calculator");
        assert!(router.configuration().contains("Math"));
        assert!(router.route("calc").is_some());
    }

    #[test]
    fn generation_failures_are_propagated() {
        let description = calculator()
            .operation(OperationDescription::new(signature!(other(i32, i32) -> i32)).route_to("Ghost.plus"))
            .configurer(register_math);

        match factory().create_router(&description) {
            Err(RouterCreationError::Generation(composite)) => {
                assert_eq!(composite.len(), 1);
                assert_eq!(composite.causes()[0].operation(), "other");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    struct CountingBackend {
        configurations: Arc<AtomicUsize>,
    }

    impl RouterBackend for CountingBackend {
        fn name(&self) -> &str {
            "counting"
        }

        fn create_configuration(&self) -> BackendConfiguration {
            self.configurations.fetch_add(1, Ordering::SeqCst);
            BackendConfiguration::new()
        }

        fn resolve_destination(
            &self,
            route: &RouteSpec,
            _configuration: &BackendConfiguration,
        ) -> Result<ResolvedDestination, NotationError> {
            Err(crate::ResolutionError::target(route.destination(), "counting resolves nothing").into())
        }
    }

    #[test]
    fn backend_without_configuration_requirement_skips_configurer_check() {
        let configurations = Arc::new(AtomicUsize::new(0));
        let registry = Arc::new(BackendRegistry::empty());
        let counter = configurations.clone();
        registry.register("counting", move |_: &DispatchConfig| {
            Arc::new(CountingBackend {
                configurations: counter.clone(),
            }) as Arc<dyn RouterBackend>
        });
        let config = DispatchConfig {
            default_backend: "counting".to_string(),
            ..DispatchConfig::default()
        };

        let router = RouterFactory::with_registry(registry, config)
            .create_router(&RouterDescription::new("Empty"))
            .expect("no routes to resolve");

        assert!(router.is_empty());
        assert_eq!(configurations.load(Ordering::SeqCst), 1);
    }
}
