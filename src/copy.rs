//! The property copier.
//!
//! [`copy_properties`] walks the source table's readable fields in order
//! and, for each one with a matching writable counterpart on the target
//! (same derived name, identical value type), reads the value and writes
//! it through the target's own writer. The source is never mutated.
//!
//! Three outcomes per field, mirroring the error taxonomy:
//! - no matching writer, or a type-mismatched one: skipped, recorded in
//!   the report (normal, not an error);
//! - reader failure: skipped with a diagnostic entry, the pass continues;
//! - writer rejection: returned to the caller. Fields applied before the
//!   rejection stay applied; there is no rollback.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::record::Record;
use crate::value::ValueType;

/// Why a source field was not applied to the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The target declares no writable field under this name.
    NoWriter,
    /// The target's writer declares a different value type.
    TypeMismatch {
        source_type: ValueType,
        target_type: ValueType,
    },
    /// The source reader failed; the diagnostic message is kept.
    ReadFailed { message: String },
}

/// One field the copier skipped, with its reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedField {
    /// Derived property name on the source.
    pub field: String,
    /// Why the field was not applied.
    pub reason: SkipReason,
}

/// Outcome of a completed copy pass.
///
/// Only produced when no writer rejected a value; a rejection aborts the
/// pass and surfaces as `Err` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReport {
    /// Fields applied to the target, in source table order.
    pub copied: Vec<String>,
    /// Fields skipped, with reasons, in source table order.
    pub skipped: Vec<SkippedField>,
}

impl CopyReport {
    /// Returns true if nothing was copied and nothing was skipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.copied.is_empty() && self.skipped.is_empty()
    }

    /// Returns true if the named field was applied.
    #[must_use]
    pub fn was_copied(&self, field: &str) -> bool {
        self.copied.iter().any(|f| f == field)
    }

    /// The skip reason for a field, if it was skipped.
    #[must_use]
    pub fn skip_reason(&self, field: &str) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.field == field)
            .map(|s| &s.reason)
    }
}

/// Copies every matching field from `source` to `target`.
///
/// If either argument is `None` the operation is a deliberate no-op and
/// reports no error — the result is `Ok` with an empty report.
///
/// # Errors
///
/// Returns the first [`ValidationError`] raised by a target writer. Fields
/// applied before the rejection stay applied.
///
/// # Examples
///
/// ```
/// use std::sync::OnceLock;
/// use fieldmap::{copy_properties, DescriptorTable, Record, Value, ValueType};
///
/// #[derive(Default)]
/// struct Badge {
///     label: String,
/// }
///
/// impl Record for Badge {
///     fn descriptors() -> &'static DescriptorTable<Self> {
///         static TABLE: OnceLock<DescriptorTable<Badge>> = OnceLock::new();
///         TABLE.get_or_init(|| {
///             DescriptorTable::builder()
///                 .reader("getLabel", ValueType::String, |b: &Badge| {
///                     Ok(Value::String(b.label.clone()))
///                 })
///                 .writer("setLabel", ValueType::String, |b: &mut Badge, v| {
///                     b.label = v.as_string().unwrap_or_default().to_string();
///                     Ok(())
///                 })
///                 .build()
///                 .expect("badge table")
///         })
///     }
/// }
///
/// let source = Badge { label: "staff".to_string() };
/// let mut target = Badge::default();
/// let report = copy_properties(Some(&source), Some(&mut target)).unwrap();
/// assert_eq!(target.label, "staff");
/// assert!(report.was_copied("label"));
/// ```
pub fn copy_properties<S: Record, T: Record>(
    source: Option<&S>,
    target: Option<&mut T>,
) -> Result<CopyReport, ValidationError> {
    let mut report = CopyReport::default();
    let (Some(source), Some(target)) = (source, target) else {
        return Ok(report);
    };

    let target_table = T::descriptors();
    for descriptor in S::descriptors().readable() {
        let name = descriptor.name();
        let matched = match target_table.get(name) {
            Some(candidate) if candidate.is_writable() => {
                if candidate.value_type() == descriptor.value_type() {
                    Some(candidate)
                } else {
                    report.skipped.push(SkippedField {
                        field: name.to_string(),
                        reason: SkipReason::TypeMismatch {
                            source_type: descriptor.value_type(),
                            target_type: candidate.value_type(),
                        },
                    });
                    None
                }
            }
            _ => {
                report.skipped.push(SkippedField {
                    field: name.to_string(),
                    reason: SkipReason::NoWriter,
                });
                None
            }
        };
        let Some(matched) = matched else {
            continue;
        };

        match descriptor.read(source) {
            Ok(value) => {
                matched.write(target, value)?;
                report.copied.push(name.to_string());
            }
            Err(access) => {
                report.skipped.push(SkippedField {
                    field: name.to_string(),
                    reason: SkipReason::ReadFailed {
                        message: access.message,
                    },
                });
            }
        }
    }
    Ok(report)
}
