//! # fieldmap - declared field-descriptor tables for records
//!
//! fieldmap replaces accessor-convention reflection with an explicit,
//! statically declared field-descriptor table per record type. A table is
//! registered once at type-definition time; the enumerator, printer, and
//! copier iterate the declared table instead of introspecting at runtime.
//!
//! ## Core Concepts
//!
//! - **Record**: a type with a declared [`DescriptorTable`]
//! - **FieldDescriptor**: (name, type, reader, optional writer), declared
//!   under bean-style accessor names (`getX`, `isX`, `setX`)
//! - **Value**: the dynamic, exactly-typed currency fields exchange
//! - **CopyReport**: what a copy pass applied and what it skipped, and why
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fieldmap::{copy_properties, print_all_properties, DescriptorTable,
//!     Record, Value, ValueType};
//!
//! // Declare a table once per record type (see the Record docs), then:
//! let report = copy_properties(Some(&source), Some(&mut target))?;
//! assert!(report.was_copied("salary"));
//!
//! print_all_properties(Some(&target), &mut std::io::stdout())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod copy;
pub mod enumerate;
pub mod error;
pub mod field;
pub mod naming;
pub mod print;
pub mod record;
pub mod value;

// Re-export primary types at crate root for convenience
pub use copy::{copy_properties, CopyReport, SkipReason, SkippedField};
pub use enumerate::{properties, Properties, Property};
pub use error::{AccessError, FieldmapError, FieldmapResult, TableError, ValidationError};
pub use field::{DescriptorTable, FieldDescriptor, FieldSpec, Reader, TableBuilder, Writer};
pub use print::{format_properties, print_all_properties, NO_RECORD_LINE};
pub use record::{read_field, write_field, Record};
pub use value::{Value, ValueType};
