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

//! Event names.

pub const BACKEND_REGISTERED: &str = "backend_registered";
pub const DESTINATION_RESOLVED: &str = "destination_resolved";

pub const ROUTE_ASSEMBLED: &str = "route_assembled";
pub const ROUTE_ASSEMBLY_FAILED: &str = "route_assembly_failed";
pub const ROUTER_ASSEMBLY_FAILED: &str = "router_assembly_failed";

pub const ROUTER_CREATE_START: &str = "router_create_start";
pub const ROUTER_CREATE_REJECTED: &str = "router_create_rejected";
pub const ROUTER_CREATE_OK: &str = "router_create_ok";

pub const ROUTE_EXECUTE_SCHEDULED: &str = "route_execute_scheduled";
pub const ROUTE_EXECUTE_OK: &str = "route_execute_ok";
pub const ROUTE_EXECUTE_DESTINATION_FAILED: &str = "route_execute_destination_failed";
pub const ROUTE_EXECUTE_TASK_FAILED: &str = "route_execute_task_failed";

pub const FALLBACK_RUNTIME_START: &str = "fallback_runtime_start";
