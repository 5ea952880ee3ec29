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

//! Blocking task pool boundary for route execution.

use crate::config::DEFAULT_FALLBACK_WORKER_THREADS;
use crate::observability::events;
use lazy_static::lazy_static;
use std::sync::OnceLock;
use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;
use tracing::debug;

const COMPONENT: &str = "task_runtime";

// Fixed by the first explicit install or, failing that, by the shared runtime's start.
static FALLBACK_WORKER_THREADS: OnceLock<usize> = OnceLock::new();

lazy_static! {
    static ref FALLBACK_RUNTIME: Runtime = {
        let worker_threads = (*FALLBACK_WORKER_THREADS.get_or_init(|| DEFAULT_FALLBACK_WORKER_THREADS)).max(1);
        debug!(
            event = events::FALLBACK_RUNTIME_START,
            component = COMPONENT,
            worker_threads,
            "starting shared route runtime"
        );
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .thread_name("interoute-route")
            .enable_all()
            .build()
            .expect("Unable to create route runtime")
    };
}

/// Fixes the worker count of the shared runtime. Returns `false` when a count was already
/// installed or the runtime has started.
pub(crate) fn install_fallback_worker_threads(worker_threads: usize) -> bool {
    FALLBACK_WORKER_THREADS.set(worker_threads).is_ok()
}

pub(crate) fn fallback_worker_threads() -> Option<usize> {
    FALLBACK_WORKER_THREADS.get().copied()
}

/// Runs `work` on the blocking pool of the current runtime, or of the shared runtime when the
/// caller is outside any tokio runtime.
pub(crate) fn spawn_blocking<F, R>(work: F) -> JoinHandle<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => handle.spawn_blocking(work),
        Err(_) => FALLBACK_RUNTIME.spawn_blocking(work),
    }
}
