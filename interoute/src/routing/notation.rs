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

//! `[Root.]Target` destination notation.

use crate::error::{NotationError, ParseError};
use crate::routing::resolver::DestinationResolver;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NOTATION_PATTERN: Regex =
        Regex::new(r"^(?:([A-Za-z_][A-Za-z0-9_]*)\.)?([A-Za-z_][A-Za-z0-9_]*)$").expect("notation pattern is valid");
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("token pattern is valid");
}

/// `true` when `candidate` is a single notation token: ASCII letters, digits and `_`, not starting with a digit.
pub fn is_token(candidate: &str) -> bool {
    TOKEN_PATTERN.is_match(candidate)
}

/// Tokens of a syntactically valid notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedNotation {
    root_token: Option<String>,
    target_token: String,
}

impl ParsedNotation {
    pub fn root_token(&self) -> Option<&str> {
        self.root_token.as_deref()
    }

    pub fn target_token(&self) -> &str {
        &self.target_token
    }
}

/// Splits `notation` into its optional root token and its target token.
pub fn parse(notation: &str) -> Result<ParsedNotation, ParseError> {
    let captures = NOTATION_PATTERN
        .captures(notation)
        .ok_or_else(|| ParseError::new(notation))?;
    let target_token = captures
        .get(2)
        .ok_or_else(|| ParseError::new(notation))?
        .as_str()
        .to_string();

    Ok(ParsedNotation {
        root_token: captures.get(1).map(|root| root.as_str().to_string()),
        target_token,
    })
}

/// A parsed notation together with the entities its tokens resolved to.
#[derive(Clone, Debug)]
pub struct DestinationNotation<R, T> {
    root_token: Option<String>,
    target_token: String,
    resolved_root: Option<R>,
    resolved_target: T,
}

impl<R, T> DestinationNotation<R, T> {
    pub(crate) fn new(parsed: ParsedNotation, resolved_root: Option<R>, resolved_target: T) -> Self {
        Self {
            root_token: parsed.root_token,
            target_token: parsed.target_token,
            resolved_root,
            resolved_target,
        }
    }

    pub fn root_token(&self) -> Option<&str> {
        self.root_token.as_deref()
    }

    pub fn target_token(&self) -> &str {
        &self.target_token
    }

    pub fn resolved_root(&self) -> Option<&R> {
        self.resolved_root.as_ref()
    }

    pub fn resolved_target(&self) -> &T {
        &self.resolved_target
    }

    pub fn into_resolved(self) -> (Option<R>, T) {
        (self.resolved_root, self.resolved_target)
    }
}

/// Parses `notation`, then resolves it; no resolver runs when parsing fails.
pub fn parse_and_resolve<R, T>(
    notation: &str,
    resolver: &DestinationResolver<'_, R, T>,
) -> Result<DestinationNotation<R, T>, NotationError> {
    let parsed = parse(notation)?;
    Ok(resolver.resolve(parsed)?)
}
