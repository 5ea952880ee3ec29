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

//! Installing the shared fallback runtime is a one-time choice. Kept in its own test binary since
//! the installed worker count is process-wide.

use integration_test_utils::{calculator_description, init_logging, Math};
use interoute::{arguments, create_router, DispatchConfig, RouterFactory};
use std::sync::Arc;

#[test]
fn factories_keep_the_installed_worker_count() {
    init_logging();
    let custom = DispatchConfig {
        fallback_worker_threads: 1,
        ..DispatchConfig::default()
    };
    assert!(custom.install_fallback_runtime());

    let _custom_factory = RouterFactory::new(custom);
    let _default_factory = RouterFactory::default();
    let router = create_router(&calculator_description(Arc::new(Math::new())))
        .expect("calculator router assembles");
    assert_eq!(DispatchConfig::installed_fallback_worker_threads(), Some(1));

    let outcome = futures::executor::block_on(router.call("calc", arguments![5_i32, 2_i32]))
        .expect("dispatch succeeds")
        .expect("destination succeeds");
    assert_eq!(outcome.downcast::<i32>(), Some(7));

    assert!(!DispatchConfig::default().install_fallback_runtime());
    assert_eq!(DispatchConfig::installed_fallback_worker_threads(), Some(1));
}
