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

//! Configurer chain applied to a backend's initial configuration.

use crate::backend::configuration::BackendConfiguration;
use std::sync::Arc;

/// Produces the next configuration snapshot from the previous one.
pub trait Configurer: Send + Sync {
    fn configure(&self, configuration: BackendConfiguration) -> BackendConfiguration;
}

impl<F> Configurer for F
where
    F: Fn(BackendConfiguration) -> BackendConfiguration + Send + Sync,
{
    fn configure(&self, configuration: BackendConfiguration) -> BackendConfiguration {
        self(configuration)
    }
}

/// Folds `configurers` left to right over `initial`.
pub fn apply_configurers(
    initial: BackendConfiguration,
    configurers: &[Arc<dyn Configurer>],
) -> BackendConfiguration {
    configurers
        .iter()
        .fold(initial, |configuration, configurer| {
            configurer.configure(configuration)
        })
}
