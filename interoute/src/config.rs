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

//! Runtime options of router creation and dispatch.

use crate::backend::DEFAULT_BACKEND_NAME;
use crate::error::ConfigError;
use crate::routing::VariadicPolicy;
use crate::runtime::task_runtime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FALLBACK_WORKER_THREADS: usize = 4;

/// Options shared by every router a factory creates.
///
/// ```
/// use interoute::{DispatchConfig, VariadicPolicy};
///
/// let config = DispatchConfig::from_json_str(r#"{ "variadic_policy": { "max_arity": 2 } }"#).unwrap();
/// assert_eq!(config.variadic_policy, VariadicPolicy::MaxArity(2));
/// assert_eq!(config.default_backend, "default");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Backend used when a router description names none.
    pub default_backend: String,
    pub variadic_policy: VariadicPolicy,
    /// Worker threads of the shared runtime used when routes execute outside any tokio runtime.
    /// Takes effect through [`DispatchConfig::install_fallback_runtime`].
    pub fallback_worker_threads: usize,
}

impl DispatchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fixes the worker count of the shared fallback runtime to `fallback_worker_threads`.
    ///
    /// Only the first install counts, and only before that runtime has started; returns whether
    /// this call took effect. Creating factories or routers never changes the installed count.
    pub fn install_fallback_runtime(&self) -> bool {
        task_runtime::install_fallback_worker_threads(self.fallback_worker_threads)
    }

    /// Worker count of the shared fallback runtime, once installed or started.
    pub fn installed_fallback_worker_threads() -> Option<usize> {
        task_runtime::fallback_worker_threads()
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_backend: DEFAULT_BACKEND_NAME.to_string(),
            variadic_policy: VariadicPolicy::default(),
            fallback_worker_threads: DEFAULT_FALLBACK_WORKER_THREADS,
        }
    }
}
