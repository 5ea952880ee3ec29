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

//! Formatting helpers for structured log fields.

use crate::control_plane::MetadataEntry;
use crate::target::Arguments;
use std::any::Any;

/// Argument types in call order, e.g. `(i32, i32)`.
pub fn format_argument_types(arguments: &Arguments) -> String {
    let types: Vec<&str> = arguments
        .values()
        .iter()
        .map(|value| value.type_descriptor().name())
        .collect();
    format!("({})", types.join(", "))
}

pub fn format_metadata(metadata: &[MetadataEntry]) -> String {
    let entries: Vec<String> = metadata
        .iter()
        .map(|entry| format!("{}={}", entry.key, entry.value))
        .collect();
    format!("[{}]", entries.join(", "))
}

/// Message carried by a panic payload, when it has one.
pub fn format_panic_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
