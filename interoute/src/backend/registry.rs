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

//! Backend constructors keyed by backend name.

use crate::backend::default_backend::{DefaultBackend, DEFAULT_BACKEND_NAME};
use crate::backend::RouterBackend;
use crate::config::DispatchConfig;
use crate::observability::events;
use arc_swap::ArcSwap;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

const COMPONENT: &str = "backend_registry";

/// Builds a backend instance for one router.
pub type BackendConstructor =
    Arc<dyn Fn(&DispatchConfig) -> Arc<dyn RouterBackend> + Send + Sync>;

lazy_static! {
    static ref GLOBAL_REGISTRY: Arc<BackendRegistry> = Arc::new(BackendRegistry::new());
}

/// Lock-free lookup table of backend constructors.
///
/// Registration publishes a new snapshot; lookups never block registrations.
pub struct BackendRegistry {
    constructors: ArcSwap<HashMap<String, BackendConstructor>>,
}

impl BackendRegistry {
    /// Registry without any backend.
    pub fn empty() -> Self {
        Self {
            constructors: ArcSwap::from_pointee(HashMap::new()),
        }
    }

    /// Registry holding the `default` backend.
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.register(DEFAULT_BACKEND_NAME, |config: &DispatchConfig| {
            Arc::new(DefaultBackend::new(config.variadic_policy)) as Arc<dyn RouterBackend>
        });
        registry
    }

    /// Process-wide registry used by [`crate::create_router`].
    pub fn global() -> Arc<BackendRegistry> {
        GLOBAL_REGISTRY.clone()
    }

    /// Registers `constructor` under `name`, replacing any previous one.
    pub fn register<F>(&self, name: &str, constructor: F)
    where
        F: Fn(&DispatchConfig) -> Arc<dyn RouterBackend> + Send + Sync + 'static,
    {
        let constructor: BackendConstructor = Arc::new(constructor);
        let previous = self.constructors.rcu(|current| {
            let mut next = HashMap::clone(current);
            next.insert(name.to_string(), constructor.clone());
            next
        });

        debug!(
            event = events::BACKEND_REGISTERED,
            component = COMPONENT,
            backend = name,
            replaced = previous.contains_key(name),
            "registered backend constructor"
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.load().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.load().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Instantiates the backend registered under `name`.
    pub fn create(&self, name: &str, config: &DispatchConfig) -> Option<Arc<dyn RouterBackend>> {
        let constructors = self.constructors.load();
        let constructor = constructors.get(name)?;
        Some(constructor(config))
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}
