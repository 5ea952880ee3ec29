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

//! Router facade handed to implementation synthesizers.

use crate::api::description::RouterDescription;
use crate::backend::BackendConfiguration;
use crate::control_plane::MetadataEntry;
use crate::data_plane::{Route, RouteFuture};
use crate::error::DispatchError;
use crate::target::{Arguments, MethodSignature};
use futures::future;
use futures::FutureExt;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

struct RouterInner {
    name: String,
    configuration: BackendConfiguration,
    routes: Vec<Route>,
    metadata: Vec<MetadataEntry>,
}

/// Assembled router: one route per abstract operation of its description.
#[derive(Clone)]
pub struct Router {
    inner: Arc<RouterInner>,
}

impl Router {
    pub(crate) fn new(
        description: &RouterDescription,
        configuration: BackendConfiguration,
        routes: Vec<Route>,
    ) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                name: description.name().to_string(),
                configuration,
                routes,
                metadata: description.metadata().to_vec(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.inner.metadata
    }

    /// Configuration snapshot the routes were resolved against.
    pub fn configuration(&self) -> &BackendConfiguration {
        &self.inner.configuration
    }

    /// `(origin signature, route)` pairs in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = (&MethodSignature, &Route)> + '_ {
        self.inner.routes.iter().map(|route| (route.origin(), route))
    }

    pub fn len(&self) -> usize {
        self.inner.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.routes.is_empty()
    }

    /// First route whose origin is named `name`.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.inner
            .routes
            .iter()
            .find(|route| route.origin().name() == name)
    }

    pub fn route_for(&self, signature: &MethodSignature) -> Option<&Route> {
        self.inner
            .routes
            .iter()
            .find(|route| route.origin() == signature)
    }

    /// Executes operation `name`, preferring the overload whose parameters match `arguments`.
    pub fn call(&self, name: &str, arguments: Arguments) -> RouteFuture {
        let argument_types = arguments.types();
        let route = self
            .inner
            .routes
            .iter()
            .find(|route| {
                route.origin().name() == name && route.origin().parameter_types() == argument_types
            })
            .or_else(|| self.route(name));

        match route {
            Some(route) => route.execute(arguments),
            None => future::ready(Err(DispatchError::UnknownOperation {
                router: self.inner.name.clone(),
                operation: name.to_string(),
            }))
            .boxed(),
        }
    }
}

impl Debug for Router {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("name", &self.inner.name)
            .field("routes", &self.inner.routes)
            .finish()
    }
}
