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

//! Two-stage resolution of notation tokens: root first, then target.

use crate::error::ResolutionError;
use crate::routing::notation::{DestinationNotation, ParsedNotation};

/// Resolves the root token of a notation.
pub trait RootResolver<R> {
    fn resolve_root(&self, token: &str) -> Result<R, ResolutionError>;
}

/// Resolves the target token, optionally scoped by an already resolved root.
pub trait TargetResolver<R, T> {
    fn resolve_target(&self, token: &str, root: Option<&R>) -> Result<T, ResolutionError>;
}

impl<R, F> RootResolver<R> for F
where
    F: Fn(&str) -> Result<R, ResolutionError>,
{
    fn resolve_root(&self, token: &str) -> Result<R, ResolutionError> {
        self(token)
    }
}

impl<R, T, F> TargetResolver<R, T> for F
where
    F: Fn(&str, Option<&R>) -> Result<T, ResolutionError>,
{
    fn resolve_target(&self, token: &str, root: Option<&R>) -> Result<T, ResolutionError> {
        self(token, root)
    }
}

/// Composition of a root resolver and a target resolver.
pub struct DestinationResolver<'a, R, T> {
    root: &'a dyn RootResolver<R>,
    target: &'a dyn TargetResolver<R, T>,
}

impl<'a, R, T> DestinationResolver<'a, R, T> {
    pub fn new(root: &'a dyn RootResolver<R>, target: &'a dyn TargetResolver<R, T>) -> Self {
        Self { root, target }
    }

    /// Resolves the root (when present) and then the target.
    ///
    /// A root failure is returned as is and the target resolver is never consulted.
    pub fn resolve(
        &self,
        parsed: ParsedNotation,
    ) -> Result<DestinationNotation<R, T>, ResolutionError> {
        let resolved_root = match parsed.root_token() {
            Some(token) => Some(self.root.resolve_root(token)?),
            None => None,
        };
        let resolved_target = self
            .target
            .resolve_target(parsed.target_token(), resolved_root.as_ref())?;

        Ok(DestinationNotation::new(
            parsed,
            resolved_root,
            resolved_target,
        ))
    }
}
