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

//! Abstract operation plus the destination it is routed to.

use crate::error::RouterCreationError;
use crate::target::MethodSignature;
use serde::{Deserialize, Serialize};

/// Key/value tag attached to an operation or a router.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl MetadataEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One abstract operation and its unresolved destination notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    origin: MethodSignature,
    destination: String,
    metadata: Vec<MetadataEntry>,
}

impl RouteSpec {
    pub fn new(
        origin: MethodSignature,
        destination: impl Into<String>,
        metadata: Vec<MetadataEntry>,
    ) -> Result<Self, RouterCreationError> {
        let destination = destination.into();
        if destination.is_empty() {
            return Err(RouterCreationError::invalid(format!(
                "operation '{}' has an empty destination",
                origin.name()
            )));
        }

        Ok(Self {
            origin,
            destination,
            metadata,
        })
    }

    pub fn origin(&self) -> &MethodSignature {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn metadata(&self) -> &[MetadataEntry] {
        &self.metadata
    }

    /// First metadata value tagged `key`.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature;

    #[test]
    fn empty_destination_is_rejected() {
        let err = RouteSpec::new(signature!(calc(i32, i32) -> i32), "", Vec::new())
            .expect_err("empty destination");
        assert!(err.to_string().starts_with("not a valid router description"));
    }

    #[test]
    fn metadata_keeps_declaration_order() {
        let spec = RouteSpec::new(
            signature!(calc(i32, i32) -> i32),
            "Math.plus",
            vec![
                MetadataEntry::new("tag", "first"),
                MetadataEntry::new("tag", "second"),
            ],
        )
        .expect("valid");

        assert_eq!(spec.metadata_value("tag"), Some("first"));
        assert_eq!(spec.metadata()[1].value, "second");
        assert_eq!(spec.metadata_value("missing"), None);
    }
}
