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

//! Executable binding between an origin operation and its resolved destination.

use crate::control_plane::{MetadataEntry, RouteSpec};
use crate::error::{DispatchError, RoutingError};
use crate::observability::{events, fields};
use crate::runtime::task_runtime;
use crate::target::{Arguments, MethodSignature, ResolvedDestination, Value};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

const COMPONENT: &str = "route";

/// Completed value of one execution: the destination's value, or why the destination failed.
pub type RouteOutcome = Result<Value, RoutingError>;

/// Future of one execution. Its own error channel only carries dispatch plumbing failures.
pub type RouteFuture = BoxFuture<'static, Result<RouteOutcome, DispatchError>>;

struct RouteInner {
    spec: RouteSpec,
    destination: ResolvedDestination,
}

impl RouteInner {
    fn run(&self, invocation_id: Uuid, arguments: &Arguments) -> RouteOutcome {
        let operation = self.spec.origin().name();
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.destination.invoke(arguments)));

        match result {
            Ok(Ok(value)) => {
                debug!(
                    event = events::ROUTE_EXECUTE_OK,
                    component = COMPONENT,
                    operation,
                    %invocation_id,
                    "route destination completed"
                );
                if self.spec.origin().returns_unit() {
                    Ok(Value::unit())
                } else {
                    Ok(value)
                }
            }
            Ok(Err(cause)) => {
                warn!(
                    event = events::ROUTE_EXECUTE_DESTINATION_FAILED,
                    component = COMPONENT,
                    operation,
                    %invocation_id,
                    err = %cause,
                    "route destination failed"
                );
                Err(RoutingError::Failed {
                    operation: operation.to_string(),
                    cause,
                })
            }
            Err(payload) => {
                let message = fields::format_panic_payload(&*payload);
                warn!(
                    event = events::ROUTE_EXECUTE_DESTINATION_FAILED,
                    component = COMPONENT,
                    operation,
                    %invocation_id,
                    panic = %message,
                    "route destination panicked"
                );
                Err(RoutingError::Panicked {
                    operation: operation.to_string(),
                    message,
                })
            }
        }
    }
}

/// Reusable, re-entrant asynchronous invocation unit.
///
/// Every [`execute`](Self::execute) schedules one independent run of the destination on the
/// task runtime; nothing is cached between runs.
#[derive(Clone)]
pub struct Route {
    inner: Arc<RouteInner>,
}

impl Route {
    pub(crate) fn new(spec: RouteSpec, destination: ResolvedDestination) -> Self {
        Self {
            inner: Arc::new(RouteInner { spec, destination }),
        }
    }

    pub fn origin(&self) -> &MethodSignature {
        self.inner.spec.origin()
    }

    /// Destination notation this route was assembled from.
    pub fn destination_notation(&self) -> &str {
        self.inner.spec.destination()
    }

    pub fn destination(&self) -> &ResolvedDestination {
        &self.inner.destination
    }

    pub fn metadata(&self) -> &[MetadataEntry] {
        self.inner.spec.metadata()
    }

    /// Schedules one run with `arguments` and returns immediately.
    ///
    /// Destination errors and panics complete the future with `Ok(Err(RoutingError))`; a unit
    /// origin completes with `Ok(Ok(Value::unit()))` once the destination has returned.
    pub fn execute(&self, arguments: Arguments) -> RouteFuture {
        let inner = self.inner.clone();
        let operation = inner.spec.origin().name().to_string();
        let invocation_id = Uuid::new_v4();

        debug!(
            event = events::ROUTE_EXECUTE_SCHEDULED,
            component = COMPONENT,
            operation = operation.as_str(),
            %invocation_id,
            destination = inner.spec.destination(),
            args = %fields::format_argument_types(&arguments),
            "scheduling route execution"
        );

        let task = task_runtime::spawn_blocking(move || inner.run(invocation_id, &arguments));

        async move {
            task.await.map_err(|err| {
                error!(
                    event = events::ROUTE_EXECUTE_TASK_FAILED,
                    component = COMPONENT,
                    operation = operation.as_str(),
                    %invocation_id,
                    err = %err,
                    "route task did not complete"
                );
                DispatchError::TaskFailed {
                    operation,
                    reason: err.to_string(),
                }
            })
        }
        .boxed()
    }

    /// Fixes `arguments` for repeated argument-free executions.
    pub fn bind(&self, arguments: Arguments) -> BoundRoute {
        BoundRoute {
            route: self.clone(),
            arguments,
        }
    }
}

impl Debug for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("origin", self.origin())
            .field("destination", &self.destination_notation())
            .finish()
    }
}

/// A route with its arguments already supplied.
#[derive(Clone, Debug)]
pub struct BoundRoute {
    route: Route,
    arguments: Arguments,
}

impl BoundRoute {
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn execute(&self) -> RouteFuture {
        self.route.execute(self.arguments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments;
    use crate::error::DestinationError;
    use crate::signature;
    use crate::target::{TargetDescriptor, TargetOperation};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn rootless_route<F>(origin: MethodSignature, target: MethodSignature, call: F) -> Route
    where
        F: Fn(&Arguments) -> Result<Value, DestinationError> + Send + Sync + 'static,
    {
        let operation = TargetOperation::from_fn(target, call);
        let spec = RouteSpec::new(origin, "target", Vec::new()).expect("non-empty");
        Route::new(
            spec,
            ResolvedDestination::new(None, TargetDescriptor::new(None, &operation)),
        )
    }

    #[tokio::test]
    async fn execute_yields_destination_value() {
        let route = rootless_route(
            signature!(calc(i32, i32) -> i32),
            signature!(plus(i32, i32) -> i32),
            |args: &Arguments| Ok(Value::new(args.get_as::<i32>(0)? + args.get_as::<i32>(1)?)),
        );

        let outcome = route
            .execute(arguments![5_i32, 2_i32])
            .await
            .expect("dispatch succeeds")
            .expect("destination succeeds");
        assert_eq!(outcome.downcast::<i32>(), Some(7));
    }

    #[tokio::test]
    async fn destination_error_is_reported_inside_the_outcome() {
        let route = rootless_route(signature!(fail() -> i32), signature!(fail() -> i32), |_: &Arguments| {
            Err("destination refused".into())
        });

        let outcome = route.execute(Arguments::new()).await.expect("dispatch succeeds");
        match outcome {
            Err(RoutingError::Failed { operation, cause }) => {
                assert_eq!(operation, "fail");
                assert_eq!(cause.to_string(), "destination refused");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn destination_panic_is_reported_inside_the_outcome() {
        let route = rootless_route(signature!(boom()), signature!(boom()), |_: &Arguments| {
            panic!("exploded")
        });

        let outcome = route.execute(Arguments::new()).await.expect("dispatch succeeds");
        assert!(matches!(
            outcome,
            Err(RoutingError::Panicked { ref message, .. }) if message == "exploded"
        ));
    }

    #[tokio::test]
    async fn unit_origin_discards_destination_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let route = rootless_route(signature!(touch()), signature!(touch() -> usize), move |_: &Arguments| {
            Ok(Value::new(counter.fetch_add(1, Ordering::SeqCst) + 1))
        });

        let outcome = route
            .execute(Arguments::new())
            .await
            .expect("dispatch succeeds")
            .expect("destination succeeds");
        assert!(outcome.is_unit());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn execution_runs_off_the_calling_thread() {
        let caller = thread::current().id();
        let route = rootless_route(signature!(where_am_i() -> String), signature!(where_am_i() -> String), |_: &Arguments| {
            Ok(Value::new(format!("{:?}", thread::current().id())))
        });

        let outcome = route
            .execute(Arguments::new())
            .await
            .expect("dispatch succeeds")
            .expect("destination succeeds");
        assert_ne!(outcome.downcast::<String>(), Some(format!("{caller:?}")));
    }

    #[tokio::test]
    async fn bound_route_is_repeatable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let route = rootless_route(signature!(tick(u8)), signature!(tick(u8)), move |_: &Arguments| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Value::unit())
        });
        let bound = route.bind(arguments![1_u8]);

        for _ in 0..3 {
            bound
                .execute()
                .await
                .expect("dispatch succeeds")
                .expect("destination succeeds");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn argument_mismatch_is_a_destination_failure() {
        let route = rootless_route(
            signature!(calc(i32, i32) -> i32),
            signature!(plus(i32, i32) -> i32),
            |args: &Arguments| Ok(Value::new(args.get_as::<i32>(0)? + args.get_as::<i32>(1)?)),
        );

        let outcome = route
            .execute(arguments![5_i32, "two"])
            .await
            .expect("dispatch succeeds");
        assert!(matches!(outcome, Err(RoutingError::Failed { .. })));
    }
}
