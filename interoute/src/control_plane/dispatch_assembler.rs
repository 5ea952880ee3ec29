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

//! Turns a [`RouterSpec`] into a [`Router`], one route per spec.
//!
//! Every route is resolved and shape-checked independently; failures are collected rather
//! than short-circuiting, so one pass reports every broken route at once.

use crate::api::Router;
use crate::backend::{BackendConfiguration, RouterBackend};
use crate::control_plane::route_spec::RouteSpec;
use crate::control_plane::router_spec::RouterSpec;
use crate::data_plane::Route;
use crate::error::{AssemblyError, CompositeGenerationError};
use crate::observability::{events, fields};
use crate::routing::{check_shape, VariadicPolicy};
use tracing::{debug, warn};

const COMPONENT: &str = "dispatch_assembler";

/// Builds routers from router specs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DispatchAssembler {
    policy: VariadicPolicy,
}

impl DispatchAssembler {
    pub fn new(policy: VariadicPolicy) -> Self {
        Self { policy }
    }

    /// Assembles every route of `spec`.
    ///
    /// Returns the router only when every route assembled; otherwise all per-route failures,
    /// most recent first.
    pub fn assemble(&self, spec: RouterSpec) -> Result<Router, CompositeGenerationError> {
        let router_name = spec.description().name();
        let mut routes = Vec::with_capacity(spec.routes().len());
        let mut failures = Vec::new();

        for route_spec in spec.routes() {
            match self.assemble_route(spec.backend().as_ref(), spec.configuration(), route_spec) {
                Ok(route) => {
                    debug!(
                        event = events::ROUTE_ASSEMBLED,
                        component = COMPONENT,
                        router = router_name,
                        origin = %route_spec.origin(),
                        destination = route_spec.destination(),
                        metadata = %fields::format_metadata(route_spec.metadata()),
                        "assembled route"
                    );
                    routes.push(route);
                }
                Err(err) => {
                    warn!(
                        event = events::ROUTE_ASSEMBLY_FAILED,
                        component = COMPONENT,
                        router = router_name,
                        origin = %route_spec.origin(),
                        destination = route_spec.destination(),
                        err = %err,
                        "unable to assemble route"
                    );
                    failures.push(err);
                }
            }
        }

        if let Some(composite) = CompositeGenerationError::from_errors(failures) {
            warn!(
                event = events::ROUTER_ASSEMBLY_FAILED,
                component = COMPONENT,
                router = router_name,
                failed_routes = composite.len(),
                "router assembly failed"
            );
            return Err(composite);
        }

        Ok(Router::new(
            spec.description(),
            spec.configuration().clone(),
            routes,
        ))
    }

    fn assemble_route(
        &self,
        backend: &dyn RouterBackend,
        configuration: &BackendConfiguration,
        route_spec: &RouteSpec,
    ) -> Result<Route, AssemblyError> {
        let operation = route_spec.origin().name();
        let destination = backend
            .resolve_destination(route_spec, configuration)
            .map_err(|err| AssemblyError::from_notation(operation, err))?;

        check_shape(
            route_spec.origin(),
            destination.target().signature(),
            self.policy,
        )
        .map_err(|source| AssemblyError::ShapeMismatch {
            operation: operation.to_string(),
            source,
        })?;

        Ok(Route::new(route_spec.clone(), destination))
    }
}
