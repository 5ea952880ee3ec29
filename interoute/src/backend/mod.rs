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

//! Backend plugin layer.
//!
//! A backend supplies the initial configuration of a router and resolves each route's
//! destination against the configuration produced by the configurer chain. Backends are
//! instantiated by name through a [`BackendRegistry`].

pub(crate) mod configuration;
pub(crate) mod configurer;
pub(crate) mod default_backend;
pub(crate) mod registry;

pub use configuration::{BackendConfiguration, BackendConfigurationBuilder, RegisteredInstance};
pub use configurer::{apply_configurers, Configurer};
pub use default_backend::{DefaultBackend, DEFAULT_BACKEND_NAME};
pub use registry::{BackendConstructor, BackendRegistry};

use crate::control_plane::RouteSpec;
use crate::error::NotationError;
use crate::target::ResolvedDestination;

/// Strategy that turns route destinations into resolved destinations.
pub trait RouterBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Whether routers using this backend must declare at least one configurer.
    fn requires_configuration(&self) -> bool {
        false
    }

    fn create_configuration(&self) -> BackendConfiguration {
        BackendConfiguration::new()
    }

    fn resolve_destination(
        &self,
        route: &RouteSpec,
        configuration: &BackendConfiguration,
    ) -> Result<ResolvedDestination, NotationError>;
}
