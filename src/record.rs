//! The [`Record`] trait and direct field access helpers.

use std::sync::OnceLock;

use crate::error::{AccessError, ValidationError};
use crate::field::DescriptorTable;
use crate::value::Value;

/// A type with a declared field-descriptor table.
///
/// The table is registered once at record-type definition time and lives
/// for the process. The usual idiom is a [`OnceLock`]:
///
/// ```
/// use std::sync::OnceLock;
/// use fieldmap::{DescriptorTable, Record, Value, ValueType};
///
/// #[derive(Default)]
/// struct Account {
///     balance: f64,
/// }
///
/// impl Record for Account {
///     fn descriptors() -> &'static DescriptorTable<Self> {
///         static TABLE: OnceLock<DescriptorTable<Account>> = OnceLock::new();
///         TABLE.get_or_init(|| {
///             DescriptorTable::builder()
///                 .reader("getBalance", ValueType::Float, |a: &Account| {
///                     Ok(Value::Float(a.balance))
///                 })
///                 .writer("setBalance", ValueType::Float, |a: &mut Account, v| {
///                     a.balance = v.as_float().unwrap_or_default();
///                     Ok(())
///                 })
///                 .build()
///                 .expect("account table")
///         })
///     }
/// }
///
/// let account = Account { balance: 12.5 };
/// assert_eq!(
///     fieldmap::read_field(&account, "balance"),
///     Some(Ok(Value::Float(12.5)))
/// );
/// ```
pub trait Record: Sized + 'static {
    /// The declared descriptor table for this type.
    fn descriptors() -> &'static DescriptorTable<Self>;
}

/// Reads one named field of a record.
///
/// Returns `None` for an unknown field name, `Some(Err(_))` when the field
/// exists but its reader fails or is absent.
pub fn read_field<R: Record>(record: &R, name: &str) -> Option<Result<Value, AccessError>> {
    R::descriptors().get(name).map(|d| d.read(record))
}

/// Writes one named field of a record through its declared writer.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownField`] for a name the table does not
/// declare, [`ValidationError::NotWritable`] / [`ValidationError::TypeMismatch`]
/// for misuse, or the writer's own rejection.
pub fn write_field<R: Record>(
    record: &mut R,
    name: &str,
    value: Value,
) -> Result<(), ValidationError> {
    match R::descriptors().get(name) {
        Some(descriptor) => descriptor.write(record, value),
        None => Err(ValidationError::UnknownField {
            field: name.to_string(),
        }),
    }
}
