//! The property enumerator.
//!
//! [`properties`] walks a record's declared table and yields one
//! [`Property`] per readable field, in declaration order. Nothing is read
//! until a property's [`read`](Property::read) is invoked, and enumerating
//! has no side effects on the record.

use crate::field::FieldDescriptor;
use crate::record::Record;
use crate::value::{Value, ValueType};
use crate::error::AccessError;

/// One readable field of a record, bound to a record instance.
#[derive(Debug)]
pub struct Property<'a, R> {
    descriptor: &'a FieldDescriptor<R>,
    record: &'a R,
}

impl<'a, R> Property<'a, R> {
    /// Derived property name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Declared value type.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        self.descriptor.value_type()
    }

    /// The underlying descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &'a FieldDescriptor<R> {
        self.descriptor
    }

    /// Invokes the reader on the bound record.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the reader fails internally.
    pub fn read(&self) -> Result<Value, AccessError> {
        self.descriptor.read(self.record)
    }
}

/// Lazy iterator over the readable fields of a record.
///
/// Produced by [`properties`]. The order is the declared table order,
/// stable for a given record type within one process.
#[derive(Debug)]
pub struct Properties<'a, R: Record> {
    record: Option<&'a R>,
    index: usize,
}

impl<'a, R: Record> Iterator for Properties<'a, R> {
    type Item = Property<'a, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.record?;
        loop {
            let descriptor = R::descriptors().field_at(self.index)?;
            self.index += 1;
            if descriptor.is_readable() {
                return Some(Property { descriptor, record });
            }
        }
    }
}

/// Enumerates the readable fields of a record.
///
/// `None` yields an empty sequence rather than failing — the silent-null
/// policy shared with [`copy_properties`](crate::copy_properties).
///
/// # Examples
///
/// ```
/// use std::sync::OnceLock;
/// use fieldmap::{properties, DescriptorTable, Record, Value, ValueType};
///
/// struct Reading {
///     celsius: f64,
/// }
///
/// impl Record for Reading {
///     fn descriptors() -> &'static DescriptorTable<Self> {
///         static TABLE: OnceLock<DescriptorTable<Reading>> = OnceLock::new();
///         TABLE.get_or_init(|| {
///             DescriptorTable::builder()
///                 .reader("getCelsius", ValueType::Float, |r: &Reading| {
///                     Ok(Value::Float(r.celsius))
///                 })
///                 .build()
///                 .expect("reading table")
///         })
///     }
/// }
///
/// let reading = Reading { celsius: 21.5 };
/// let mut props = properties(Some(&reading));
/// let prop = props.next().unwrap();
/// assert_eq!(prop.name(), "celsius");
/// assert_eq!(prop.read().unwrap(), Value::Float(21.5));
/// assert!(props.next().is_none());
///
/// assert_eq!(properties::<Reading>(None).count(), 0);
/// ```
pub fn properties<R: Record>(record: Option<&R>) -> Properties<'_, R> {
    Properties { record, index: 0 }
}
