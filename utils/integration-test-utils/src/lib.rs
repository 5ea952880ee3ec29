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

//! Shared fixtures for `interoute` integration tests and benchmarks.

use interoute::{
    signature, Arguments, BackendConfiguration, DestinationError, OperationDescription,
    OperationTable, RouteTarget, RouterDescription,
};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Installs a test-writer `tracing` subscriber once per process; `RUST_LOG` selects the level.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Arithmetic target. `plus2` stores its sum instead of returning it.
#[derive(Debug, Default)]
pub struct Math {
    last_result: AtomicI64,
}

impl Math {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_result(&self) -> i64 {
        self.last_result.load(Ordering::SeqCst)
    }

    fn plus2(&self, a: i32, b: i32) {
        let sum = i64::from(a) + i64::from(b);
        tracing::debug!(a, b, sum, "storing plus2 result");
        self.last_result.store(sum, Ordering::SeqCst);
    }
}

impl RouteTarget for Math {
    fn operation_table() -> OperationTable {
        OperationTable::builder::<Math>()
            .operation2("plus", |_: &Math, a: i32, b: i32| Ok(a + b))
            .operation2("plus2", |math: &Math, a: i32, b: i32| {
                math.plus2(a, b);
                Ok(())
            })
            .operation2("divide", |_: &Math, a: i32, b: i32| -> Result<i32, DestinationError> {
                a.checked_div(b).ok_or_else(|| "division by zero".into())
            })
            .operation0("explode", |_: &Math| -> Result<i32, DestinationError> {
                panic!("math exploded")
            })
            .variadic("count", |_: &Math, arguments: &Arguments| Ok(arguments.len()))
            .build()
    }
}

/// Configurer registering `math` under `Math`.
pub fn math_configurer(
    math: Arc<Math>,
) -> impl Fn(BackendConfiguration) -> BackendConfiguration + Send + Sync + 'static {
    move |configuration: BackendConfiguration| {
        configuration
            .to_builder()
            .add_instance("Math", math.clone())
            .build()
    }
}

/// `Calculator` router over [`Math`], with one operation per `Math` capability.
pub fn calculator_description(math: Arc<Math>) -> RouterDescription {
    RouterDescription::new("Calculator")
        .configurer(math_configurer(math))
        .operation(
            OperationDescription::new(signature!(calc(i32, i32) -> i32))
                .route_to("Math.plus")
                .with_metadata("kind", "pure"),
        )
        .operation(OperationDescription::new(signature!(calc2(i32, i32))).route_to("Math.plus2"))
        .operation(
            OperationDescription::new(signature!(discard(i32, i32))).route_to("Math.plus"),
        )
        .operation(
            OperationDescription::new(signature!(divide(i32, i32) -> i32)).route_to("Math.divide"),
        )
        .operation(OperationDescription::new(signature!(explode() -> i32)).route_to("Math.explode"))
        .operation(
            OperationDescription::new(signature!(count(String, u8, bool) -> usize))
                .route_to("Math.count"),
        )
}
