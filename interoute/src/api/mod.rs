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

//! API facade layer.
//!
//! Outward surface of the crate: router descriptions go in, [`Router`] values come out through
//! the [`RouterFactory`].

pub(crate) mod description;
pub(crate) mod router;
pub(crate) mod router_factory;

pub use description::{OperationDescription, OperationKind, RouterDescription};
pub use router::Router;
pub use router_factory::{create_router, RouterFactory};
