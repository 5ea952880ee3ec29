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

//! Route execution layer.
//!
//! A [`Route`] executes its resolved destination on the task runtime and reports destination
//! failures as values, keeping the future's own error channel for dispatch failures.

pub(crate) mod route;

pub use route::{BoundRoute, Route, RouteFuture, RouteOutcome};
