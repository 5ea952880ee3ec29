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

//! Shape compatibility between an origin operation and its resolved target.

use crate::error::ShapeMismatchError;
use crate::target::MethodSignature;
use serde::{Deserialize, Serialize};

/// Whether an origin may be forwarded to a target that takes the raw argument list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariadicPolicy {
    /// Any origin arity is forwarded.
    #[default]
    PassThrough,
    /// Only exact parameter lists match.
    Reject,
    /// Forwarded when the origin has at most this many parameters.
    MaxArity(usize),
}

impl VariadicPolicy {
    pub fn admits(&self, origin_arity: usize) -> bool {
        match self {
            Self::PassThrough => true,
            Self::Reject => false,
            Self::MaxArity(max) => origin_arity <= *max,
        }
    }
}

/// Checks that `target` accepts the parameters of `origin` and yields what `origin` returns.
///
/// A unit-returning origin accepts any target return type; the value is dropped after the
/// target completes.
pub fn check_shape(
    origin: &MethodSignature,
    target: &MethodSignature,
    policy: VariadicPolicy,
) -> Result<(), ShapeMismatchError> {
    let exact_parameters = origin.parameter_types() == target.parameter_types();
    let forwarded = target.is_variadic() && policy.admits(origin.arity());
    if !exact_parameters && !forwarded {
        return Err(ShapeMismatchError::Parameters {
            origin: origin.to_string(),
            target: target.to_string(),
        });
    }

    if !origin.returns_unit() && origin.return_type() != target.return_type() {
        return Err(ShapeMismatchError::ReturnType {
            origin: origin.to_string(),
            target: target.to_string(),
        });
    }

    Ok(())
}
