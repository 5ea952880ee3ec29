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

//! Everything needed to assemble one router.

use crate::api::RouterDescription;
use crate::backend::{BackendConfiguration, RouterBackend};
use crate::control_plane::route_spec::RouteSpec;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Description, backend, final configuration and route specs of a router.
///
/// Consumed by [`crate::control_plane::DispatchAssembler::assemble`].
pub struct RouterSpec {
    description: RouterDescription,
    backend: Arc<dyn RouterBackend>,
    configuration: BackendConfiguration,
    routes: Vec<RouteSpec>,
}

impl RouterSpec {
    pub fn new(
        description: RouterDescription,
        backend: Arc<dyn RouterBackend>,
        configuration: BackendConfiguration,
        routes: Vec<RouteSpec>,
    ) -> Self {
        Self {
            description,
            backend,
            configuration,
            routes,
        }
    }

    pub fn description(&self) -> &RouterDescription {
        &self.description
    }

    pub fn backend(&self) -> &Arc<dyn RouterBackend> {
        &self.backend
    }

    pub fn configuration(&self) -> &BackendConfiguration {
        &self.configuration
    }

    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }
}

impl Debug for RouterSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterSpec")
            .field("router", &self.description.name())
            .field("backend", &self.backend.name())
            .field("configuration", &self.configuration)
            .field("routes", &self.routes)
            .finish()
    }
}
