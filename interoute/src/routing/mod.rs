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

//! Destination notation and resolution layer.
//!
//! Owns the `[Root.]Target` grammar, the root-then-target resolver protocol, and the shape
//! policy deciding whether an origin operation may be bound to a resolved target.
//!
//! ```
//! use interoute::routing::{parse, parse_and_resolve, DestinationResolver};
//! use interoute::ResolutionError;
//!
//! let parsed = parse("Math.plus").unwrap();
//! assert_eq!(parsed.root_token(), Some("Math"));
//!
//! let root = |token: &str| -> Result<usize, ResolutionError> { Ok(token.len()) };
//! let target = |token: &str, root: Option<&usize>| -> Result<String, ResolutionError> {
//!     Ok(format!("{token}/{}", root.copied().unwrap_or_default()))
//! };
//! let resolver = DestinationResolver::new(&root, &target);
//!
//! let resolved = parse_and_resolve("Math.plus", &resolver).unwrap();
//! assert_eq!(resolved.resolved_target(), "plus/4");
//! assert!(parse("1abc").is_err());
//! ```

pub(crate) mod notation;
pub(crate) mod resolver;
pub(crate) mod shape;

pub use notation::{is_token, parse, parse_and_resolve, DestinationNotation, ParsedNotation};
pub use resolver::{DestinationResolver, RootResolver, TargetResolver};
pub use shape::{check_shape, VariadicPolicy};
