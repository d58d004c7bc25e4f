//! The property printer.
//!
//! Diagnostic companion to the enumerator: one `name = value` line per
//! readable field, in enumerator order, written to any [`io::Write`] sink.

use std::io;

use crate::enumerate::properties;
use crate::record::Record;

/// Placeholder line emitted for a `None` record.
pub const NO_RECORD_LINE: &str = "no record";

/// Writes every readable field of a record as `name = value` lines.
///
/// A `None` record emits exactly one `no record` line and raises no
/// error. A reader failure emits a one-line diagnostic for that field and
/// the remaining fields are still printed. No write access to the record
/// occurs.
///
/// # Errors
///
/// Only sink failures surface; the record itself cannot fail the call.
///
/// # Examples
///
/// ```
/// use std::sync::OnceLock;
/// use fieldmap::{print_all_properties, DescriptorTable, Record, Value, ValueType};
///
/// struct Pair {
///     left: i64,
///     right: i64,
/// }
///
/// impl Record for Pair {
///     fn descriptors() -> &'static DescriptorTable<Self> {
///         static TABLE: OnceLock<DescriptorTable<Pair>> = OnceLock::new();
///         TABLE.get_or_init(|| {
///             DescriptorTable::builder()
///                 .reader("getLeft", ValueType::Int, |p: &Pair| Ok(Value::Int(p.left)))
///                 .reader("getRight", ValueType::Int, |p: &Pair| Ok(Value::Int(p.right)))
///                 .build()
///                 .expect("pair table")
///         })
///     }
/// }
///
/// let pair = Pair { left: 1, right: 2 };
/// let mut out = Vec::new();
/// print_all_properties(Some(&pair), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "left = 1\nright = 2\n");
/// ```
pub fn print_all_properties<R: Record, W: io::Write>(
    record: Option<&R>,
    out: &mut W,
) -> io::Result<()> {
    if record.is_none() {
        return writeln!(out, "{NO_RECORD_LINE}");
    }
    for property in properties(record) {
        match property.read() {
            Ok(value) => writeln!(out, "{} = {}", property.name(), value)?,
            Err(access) => writeln!(
                out,
                "{} = <read error: {}>",
                property.name(),
                access.message
            )?,
        }
    }
    Ok(())
}

/// Formats every readable field of a record into a `String`.
///
/// Convenience wrapper over [`print_all_properties`] with an in-memory
/// sink.
#[must_use]
pub fn format_properties<R: Record>(record: Option<&R>) -> String {
    let mut buf = Vec::new();
    // A Vec sink cannot fail.
    let _ = print_all_properties(record, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
