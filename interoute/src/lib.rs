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

//! # interoute
//!
//! `interoute` routes the abstract operations of a router to concrete target operations named
//! by a compact `[Root.]Target` destination notation, and executes them asynchronously with
//! uniform success and failure reporting.
//!
//! Typical usage is API-first and centers on [`RouterDescription`], [`RouterFactory`] and
//! [`Router`]. Internal modules are organized by domain layer to keep behavior ownership explicit.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use interoute::{
//!     arguments, create_router, signature, BackendConfiguration, OperationDescription,
//!     OperationTable, RouteTarget, RouterDescription,
//! };
//!
//! struct Math;
//!
//! impl RouteTarget for Math {
//!     fn operation_table() -> OperationTable {
//!         OperationTable::builder::<Math>()
//!             .operation2("plus", |_: &Math, a: i32, b: i32| Ok(a + b))
//!             .build()
//!     }
//! }
//!
//! let description = RouterDescription::new("Calculator")
//!     .configurer(|configuration: BackendConfiguration| {
//!         configuration.to_builder().add_instance("Math", Arc::new(Math)).build()
//!     })
//!     .operation(OperationDescription::new(signature!(calc(i32, i32) -> i32)).route_to("Math.plus"));
//!
//! let router = create_router(&description).unwrap();
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let outcome = router.call("calc", arguments![5_i32, 2_i32]).await.unwrap();
//! assert_eq!(outcome.unwrap().downcast::<i32>(), Some(7));
//! # });
//! ```
//!
//! ## Route contract
//!
//! A route future only fails when the dispatch plumbing fails. Errors and panics raised by the
//! destination complete the future normally, carrying a [`RoutingError`]; unit origins complete
//! with [`Value::unit`] once the destination has returned, whatever it produced.
//!
//! ```
//! use std::sync::Arc;
//! use interoute::{
//!     arguments, create_router, signature, BackendConfiguration, OperationDescription,
//!     OperationTable, RouteTarget, RouterDescription, RoutingError,
//! };
//!
//! struct Divider;
//!
//! impl RouteTarget for Divider {
//!     fn operation_table() -> OperationTable {
//!         OperationTable::builder::<Divider>()
//!             .operation2("divide", |_: &Divider, a: i32, b: i32| {
//!                 a.checked_div(b).ok_or_else(|| "division by zero".into())
//!             })
//!             .build()
//!     }
//! }
//!
//! let router = create_router(
//!     &RouterDescription::new("Checked")
//!         .configurer(|configuration: BackendConfiguration| {
//!             configuration.to_builder().add_instance("Divider", Arc::new(Divider)).build()
//!         })
//!         .operation(
//!             OperationDescription::new(signature!(divide(i32, i32) -> i32))
//!                 .route_to("Divider.divide"),
//!         )
//!         .operation(
//!             OperationDescription::new(signature!(divide_quietly(i32, i32)))
//!                 .route_to("Divider.divide"),
//!         ),
//! )
//! .unwrap();
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let failed = router.call("divide", arguments![1_i32, 0_i32]).await.unwrap();
//! assert!(matches!(failed, Err(RoutingError::Failed { .. })));
//!
//! let quiet = router.call("divide_quietly", arguments![4_i32, 2_i32]).await.unwrap();
//! assert!(quiet.unwrap().is_unit());
//! # });
//! ```
//!
//! ## Internal architecture map
//!
//! - API facade: router descriptions, the router factory and the `Router` surface
//! - Backend: backend plugin contract, configuration snapshots, configurers, backend registry
//! - Control plane: route/router specifications and the dispatch assembler
//! - Routing: destination notation grammar, resolver protocol and shape policy
//! - Data plane: route execution contract
//! - Runtime: blocking task pool boundary
//! - Target: operation tables and type-erased values that replace runtime reflection
//!
//! ## Observability model
//!
//! The workspace uses `tracing` for logs/events.
//! Library code emits events and does not unconditionally initialize a global
//! subscriber. Binaries/tests are responsible for one-time `tracing_subscriber`
//! initialization at process boundaries.

mod api;
pub use api::{
    create_router, OperationDescription, OperationKind, Router, RouterDescription, RouterFactory,
};

mod backend;
pub use backend::{
    apply_configurers, BackendConfiguration, BackendConfigurationBuilder, BackendConstructor,
    BackendRegistry, Configurer, DefaultBackend, RegisteredInstance, RouterBackend,
    DEFAULT_BACKEND_NAME,
};

mod config;
pub use config::{DispatchConfig, DEFAULT_FALLBACK_WORKER_THREADS};

pub mod control_plane;
pub use control_plane::{MetadataEntry, RouteSpec};

mod data_plane;
pub use data_plane::{BoundRoute, Route, RouteFuture, RouteOutcome};

mod error;
pub use error::{
    ArgumentError, AssemblyError, CompositeGenerationError, ConfigError, DestinationError,
    DispatchError, NotationError, ParseError, ResolutionError, RouterCreationError, RoutingError,
    ShapeMismatchError,
};

#[doc(hidden)]
pub mod observability;
pub mod routing;
pub use routing::VariadicPolicy;
mod runtime;

mod target;
pub use target::{
    Arguments, Invoker, MethodSignature, OperationTable, OperationTableBuilder, ResolvedDestination,
    RootEntity, RouteTarget, TargetDescriptor, TargetOperation, TypeDescriptor, Value,
};
