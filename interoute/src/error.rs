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

//! Error taxonomy shared by assembly and execution.
//!
//! Assembly-time failures (`ParseError`, `ResolutionError`, `ShapeMismatchError`) are
//! collected per route as [`AssemblyError`] and surfaced together as a
//! [`CompositeGenerationError`]. Execution-time failures of a destination are reported as
//! [`RoutingError`] inside the completed route outcome, never through the future itself.

use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Failure raised by a destination while it runs.
pub type DestinationError = Box<dyn Error + Send + Sync + 'static>;

/// A destination string that does not follow the `[Root.]Target` grammar.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("destination '{notation}' does not match simple destination notation")]
pub struct ParseError {
    notation: String,
}

impl ParseError {
    pub(crate) fn new(notation: &str) -> Self {
        Self {
            notation: notation.to_string(),
        }
    }

    pub fn notation(&self) -> &str {
        &self.notation
    }
}

/// Root or target lookup failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("could not resolve root type from notation: {reason} ('{token}')")]
    Root { token: String, reason: String },
    #[error("could not resolve target method from notation: {reason} ('{token}')")]
    Target { token: String, reason: String },
}

impl ResolutionError {
    pub fn root(token: &str, reason: impl Into<String>) -> Self {
        Self::Root {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub fn target(token: &str, reason: impl Into<String>) -> Self {
        Self::Target {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// Token that failed to resolve.
    pub fn token(&self) -> &str {
        match self {
            Self::Root { token, .. } | Self::Target { token, .. } => token,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root { .. })
    }
}

/// Either stage of turning a destination string into resolved entities.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Parameter list or return type of an origin incompatible with its destination.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShapeMismatchError {
    #[error("parameters of origin '{origin}' are not accepted by destination '{target}'")]
    Parameters { origin: String, target: String },
    #[error("return type of origin '{origin}' differs from destination '{target}'")]
    ReturnType { origin: String, target: String },
}

/// Failure to assemble one route, tagged with the origin operation name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("route '{operation}': {source}")]
    Parse {
        operation: String,
        #[source]
        source: ParseError,
    },
    #[error("route '{operation}': {source}")]
    Resolution {
        operation: String,
        #[source]
        source: ResolutionError,
    },
    #[error("route '{operation}': {source}")]
    ShapeMismatch {
        operation: String,
        #[source]
        source: ShapeMismatchError,
    },
}

impl AssemblyError {
    pub(crate) fn from_notation(operation: &str, error: NotationError) -> Self {
        let operation = operation.to_string();
        match error {
            NotationError::Parse(source) => Self::Parse { operation, source },
            NotationError::Resolution(source) => Self::Resolution { operation, source },
        }
    }

    pub fn operation(&self) -> &str {
        match self {
            Self::Parse { operation, .. }
            | Self::Resolution { operation, .. }
            | Self::ShapeMismatch { operation, .. } => operation,
        }
    }
}

/// Every route failure of one assembly pass, most recent first.
///
/// [`Error::source`] yields the most recent failure; [`causes`](Self::causes) exposes all of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeGenerationError {
    causes: Vec<AssemblyError>,
}

impl CompositeGenerationError {
    /// Aggregates failures given in occurrence order. Returns `None` when nothing failed.
    pub(crate) fn from_errors(mut errors: Vec<AssemblyError>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        errors.reverse();
        Some(Self { causes: errors })
    }

    pub fn causes(&self) -> &[AssemblyError] {
        &self.causes
    }

    pub fn len(&self) -> usize {
        self.causes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }
}

impl Display for CompositeGenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} route(s) failed to assemble", self.causes.len())?;
        if let Some(latest) = self.causes.first() {
            write!(f, ", latest: {latest}")?;
        }
        Ok(())
    }
}

impl Error for CompositeGenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.causes.first().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Failure of a destination call, carried inside a completed route outcome.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("destination of route '{operation}' failed: {cause}")]
    Failed {
        operation: String,
        #[source]
        cause: DestinationError,
    },
    #[error("destination of route '{operation}' panicked: {message}")]
    Panicked { operation: String, message: String },
}

impl RoutingError {
    pub fn operation(&self) -> &str {
        match self {
            Self::Failed { operation, .. } | Self::Panicked { operation, .. } => operation,
        }
    }
}

/// Failure of the dispatch plumbing itself; the only error that rejects a route future.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("route task for '{operation}' did not complete: {reason}")]
    TaskFailed { operation: String, reason: String },
    #[error("router '{router}' has no operation named '{operation}'")]
    UnknownOperation { router: String, operation: String },
}

/// Argument unpacking failures raised by generated target invokers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("expected {expected} argument(s), received {received}")]
    Arity { expected: usize, received: usize },
    #[error("argument {index} is '{found}', expected '{expected}'")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("operation '{operation}' requires a receiver of type '{expected}'")]
    Receiver {
        operation: String,
        expected: &'static str,
    },
}

/// Router factory failure; terminal for one `create_router` call.
#[derive(Debug, Error)]
pub enum RouterCreationError {
    #[error("not a valid router description: {reason}")]
    InvalidDescription { reason: String },
    #[error("backend '{backend}' is not registered")]
    UnknownBackend { backend: String },
    #[error("backend requires at least one configurer: '{backend}'")]
    MissingConfigurer { backend: String },
    #[error("unable to generate router: {0}")]
    Generation(#[from] CompositeGenerationError),
}

impl RouterCreationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidDescription {
            reason: reason.into(),
        }
    }
}

/// Invalid [`crate::DispatchConfig`] input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to parse dispatch configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_failure(operation: &str) -> AssemblyError {
        AssemblyError::Resolution {
            operation: operation.to_string(),
            source: ResolutionError::root("Missing", "registered instance missing"),
        }
    }

    #[test]
    fn composite_orders_causes_most_recent_first() {
        let composite = CompositeGenerationError::from_errors(vec![
            root_failure("first"),
            AssemblyError::Parse {
                operation: "second".to_string(),
                source: ParseError::new("a..b"),
            },
        ])
        .expect("two failures");

        assert_eq!(composite.len(), 2);
        assert_eq!(composite.causes()[0].operation(), "second");
        assert_eq!(composite.causes()[1].operation(), "first");

        let source = composite.source().expect("latest cause");
        assert!(source.to_string().contains("second"));
    }

    #[test]
    fn composite_is_absent_without_failures() {
        assert!(CompositeGenerationError::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn resolution_messages_name_the_failed_stage() {
        let root = ResolutionError::root("Math", "registered instance missing");
        assert!(root
            .to_string()
            .starts_with("could not resolve root type from notation: registered instance missing"));
        assert!(root.is_root());

        let target = ResolutionError::target("plus", "no operation with matching shape");
        assert!(target
            .to_string()
            .starts_with("could not resolve target method from notation"));
        assert_eq!(target.token(), "plus");
    }

    #[test]
    fn routing_error_keeps_destination_cause() {
        let cause: DestinationError = "division by zero".into();
        let error = RoutingError::Failed {
            operation: "divide".to_string(),
            cause,
        };

        assert_eq!(error.operation(), "divide");
        assert_eq!(
            error.source().map(|source| source.to_string()),
            Some("division by zero".to_string())
        );
    }
}
