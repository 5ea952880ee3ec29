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

//! Router assembly layer.
//!
//! Owns the route and router specification models and the assembler that resolves each
//! route spec through its backend, checks its shape, and produces the executable routes.
//!
//! ```
//! use std::sync::Arc;
//! use interoute::control_plane::{DispatchAssembler, RouteSpec, RouterSpec};
//! use interoute::{signature, BackendConfiguration, DefaultBackend, RouterDescription};
//!
//! let route = RouteSpec::new(signature!(calc(i32, i32) -> i32), "Math.plus", Vec::new()).unwrap();
//! let spec = RouterSpec::new(
//!     RouterDescription::new("Calculator"),
//!     Arc::new(DefaultBackend::default()),
//!     BackendConfiguration::new(),
//!     vec![route],
//! );
//!
//! // Nothing is registered under `Math`, so the only route fails to assemble.
//! let err = DispatchAssembler::default().assemble(spec).unwrap_err();
//! assert_eq!(err.len(), 1);
//! ```

pub(crate) mod dispatch_assembler;
pub(crate) mod route_spec;
pub(crate) mod router_spec;

pub use dispatch_assembler::DispatchAssembler;
pub use route_spec::{MetadataEntry, RouteSpec};
pub use router_spec::RouterSpec;
