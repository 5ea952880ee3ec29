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

//! Target model.
//!
//! Targets declare their callable operations up front through an [`OperationTable`]; a route
//! destination is resolved against those tables and never against runtime type inspection.
//!
//! ```
//! use interoute::{arguments, OperationTable, RouteTarget};
//!
//! struct Math;
//!
//! impl RouteTarget for Math {
//!     fn operation_table() -> OperationTable {
//!         OperationTable::builder::<Math>()
//!             .operation2("plus", |_: &Math, a: i32, b: i32| Ok(a + b))
//!             .build()
//!     }
//! }
//!
//! let table = Math::operation_table();
//! let plus = &table.operations()[0];
//! let sum = plus.invoke_on(&Math, &arguments![5_i32, 2_i32]).unwrap();
//! assert_eq!(sum.downcast::<i32>(), Some(7));
//! ```

pub(crate) mod destination;
pub(crate) mod operation;
pub(crate) mod signature;
pub(crate) mod value;

pub use destination::{ResolvedDestination, RootEntity, TargetDescriptor};
pub use operation::{Invoker, OperationTable, OperationTableBuilder, RouteTarget, TargetOperation};
pub use signature::{MethodSignature, TypeDescriptor};
pub use value::{Arguments, Value};
