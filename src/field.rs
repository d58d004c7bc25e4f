//! Field descriptors and per-type descriptor tables.
//!
//! A [`DescriptorTable`] is the statically declared replacement for
//! accessor discovery: each record type registers, once, the list of its
//! fields with typed reader and writer function references. The
//! enumerator, printer, and copier iterate this table; nothing is
//! discovered at call time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, TableError, ValidationError};
use crate::naming;
use crate::value::{Value, ValueType};

/// Typed reader function reference for a record of type `R`.
pub type Reader<R> = fn(&R) -> Result<Value, AccessError>;

/// Typed writer function reference for a record of type `R`.
///
/// Writers own their record's validation; a rejection is returned as a
/// [`ValidationError`] and never swallowed by the copier.
pub type Writer<R> = fn(&mut R, Value) -> Result<(), ValidationError>;

/// One field of a record type: name, value type, and its accessors.
///
/// Either accessor may be absent — a computed field has no writer, a
/// secret field may have no reader.
pub struct FieldDescriptor<R> {
    name: String,
    value_type: ValueType,
    reader: Option<Reader<R>>,
    writer: Option<Writer<R>>,
}

impl<R> FieldDescriptor<R> {
    /// Derived property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value type.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns true if the field has a reader.
    #[must_use]
    pub const fn is_readable(&self) -> bool {
        self.reader.is_some()
    }

    /// Returns true if the field has a writer.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        self.writer.is_some()
    }

    /// The reader function reference, if any.
    #[must_use]
    pub const fn reader(&self) -> Option<Reader<R>> {
        self.reader
    }

    /// The writer function reference, if any.
    #[must_use]
    pub const fn writer(&self) -> Option<Writer<R>> {
        self.writer
    }

    /// Invokes the reader.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] when the field has no reader or the reader
    /// itself fails.
    pub fn read(&self, record: &R) -> Result<Value, AccessError> {
        match self.reader {
            Some(reader) => reader(record),
            None => Err(AccessError::new(&self.name, "field is not readable")),
        }
    }

    /// Invokes the writer after an exact type check.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotWritable`] when the field has no
    /// writer, [`ValidationError::TypeMismatch`] when the value's type tag
    /// differs from the declared type, or whatever rejection the writer
    /// itself produces.
    pub fn write(&self, record: &mut R, value: Value) -> Result<(), ValidationError> {
        let Some(writer) = self.writer else {
            return Err(ValidationError::NotWritable {
                field: self.name.clone(),
            });
        };
        if value.value_type() != self.value_type {
            return Err(ValidationError::TypeMismatch {
                field: self.name.clone(),
                expected: self.value_type,
                actual: value.value_type(),
            });
        }
        writer(record, value)
    }
}

impl<R> std::fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .field("readable", &self.is_readable())
            .field("writable", &self.is_writable())
            .finish()
    }
}

/// Type-erased view of a descriptor, safe to serialize or report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Derived property name.
    pub name: String,
    /// Declared value type.
    pub value_type: ValueType,
    /// Whether the field has a reader.
    pub readable: bool,
    /// Whether the field has a writer.
    pub writable: bool,
}

/// The declared field table of a record type.
///
/// Iteration order is declaration order — stable for a given record type
/// across calls within one process. No ordering relation holds between
/// tables of different record types.
///
/// # Examples
///
/// ```
/// use fieldmap::{DescriptorTable, Value, ValueType};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let table: DescriptorTable<Point> = DescriptorTable::builder()
///     .reader("getX", ValueType::Int, |p: &Point| Ok(Value::Int(p.x)))
///     .writer("setX", ValueType::Int, |p: &mut Point, v| {
///         p.x = v.as_int().unwrap_or_default();
///         Ok(())
///     })
///     .reader("getY", ValueType::Int, |p: &Point| Ok(Value::Int(p.y)))
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert!(table.get("x").unwrap().is_writable());
/// assert!(!table.get("y").unwrap().is_writable());
/// ```
pub struct DescriptorTable<R> {
    fields: Vec<FieldDescriptor<R>>,
    by_name: HashMap<String, usize>,
}

impl<R> DescriptorTable<R> {
    /// Starts a new table declaration.
    #[must_use]
    pub fn builder() -> TableBuilder<R> {
        TableBuilder::new()
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a field by its derived property name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor<R>> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    /// Iterates all declared fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor<R>> {
        self.fields.iter()
    }

    /// Iterates readable fields in declaration order.
    pub fn readable(&self) -> impl Iterator<Item = &FieldDescriptor<R>> {
        self.fields.iter().filter(|d| d.is_readable())
    }

    /// Looks up a writable field matching an exact name and type pair.
    ///
    /// This is the copier's match rule: same derived name, identical value
    /// type, writer present. Anything else is `None`.
    #[must_use]
    pub fn writer_for(&self, name: &str, value_type: ValueType) -> Option<&FieldDescriptor<R>> {
        self.get(name)
            .filter(|d| d.is_writable() && d.value_type() == value_type)
    }

    pub(crate) fn field_at(&self, index: usize) -> Option<&FieldDescriptor<R>> {
        self.fields.get(index)
    }

    /// Type-erased view of the table.
    #[must_use]
    pub fn specs(&self) -> Vec<FieldSpec> {
        self.fields
            .iter()
            .map(|d| FieldSpec {
                name: d.name.clone(),
                value_type: d.value_type,
                readable: d.is_readable(),
                writable: d.is_writable(),
            })
            .collect()
    }

    /// Stable fingerprint of the table's shape.
    ///
    /// Hashes the ordered (name, type, readable, writable) tuples with
    /// blake3. Two tables with the same declarations in the same order
    /// produce the same fingerprint in any process.
    #[must_use]
    pub fn shape_fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for d in &self.fields {
            hasher.update(d.name.as_bytes());
            hasher.update(&[0]);
            hasher.update(d.value_type.name().as_bytes());
            hasher.update(&[u8::from(d.is_readable()), u8::from(d.is_writable())]);
        }
        hasher.finalize()
    }

    /// Returns true if at least one readable field here has a matching
    /// writable counterpart (same name, same type) in `other`.
    #[must_use]
    pub fn shape_compatible<T>(&self, other: &DescriptorTable<T>) -> bool {
        self.readable()
            .any(|d| other.writer_for(d.name(), d.value_type()).is_some())
    }
}

impl<R> std::fmt::Debug for DescriptorTable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptorTable")
            .field("fields", &self.fields)
            .finish()
    }
}

/// Builder for a [`DescriptorTable`].
///
/// Accessors are declared under their bean-style names; the property name
/// is derived by the rules in [`naming`]. Declaring a reader and a writer
/// for the same property merges them into one descriptor. Convention
/// violations are rejected by [`build`](TableBuilder::build) instead of
/// being silently passed over.
pub struct TableBuilder<R> {
    fields: Vec<FieldDescriptor<R>>,
    by_name: HashMap<String, usize>,
    error: Option<TableError>,
}

impl<R> TableBuilder<R> {
    fn new() -> Self {
        Self {
            fields: Vec::new(),
            by_name: HashMap::new(),
            error: None,
        }
    }

    /// Declares a reader under its accessor name (`get<X>` or `is<X>`).
    ///
    /// The `is` prefix is reserved for [`ValueType::Bool`] fields.
    #[must_use]
    pub fn reader(mut self, accessor: &str, value_type: ValueType, reader: Reader<R>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let parsed = match naming::parse_reader(accessor) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.error = Some(e);
                return self;
            }
        };
        if parsed.is_prefix && value_type != ValueType::Bool {
            self.error = Some(TableError::IsPrefixNotBool {
                suffix: naming::capitalize(&parsed.property),
                declared: value_type,
            });
            return self;
        }
        self.attach(parsed.property, value_type, Some(reader), None);
        self
    }

    /// Declares a writer under its accessor name (`set<X>`).
    #[must_use]
    pub fn writer(mut self, accessor: &str, value_type: ValueType, writer: Writer<R>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let property = match naming::parse_writer(accessor) {
            Ok(property) => property,
            Err(e) => {
                self.error = Some(e);
                return self;
            }
        };
        self.attach(property, value_type, None, Some(writer));
        self
    }

    fn attach(
        &mut self,
        property: String,
        value_type: ValueType,
        reader: Option<Reader<R>>,
        writer: Option<Writer<R>>,
    ) {
        if let Some(&index) = self.by_name.get(&property) {
            let existing = &mut self.fields[index];
            let duplicate = (reader.is_some() && existing.reader.is_some())
                || (writer.is_some() && existing.writer.is_some());
            if duplicate {
                self.error = Some(TableError::DuplicateField { field: property });
                return;
            }
            if existing.value_type != value_type {
                self.error = Some(TableError::WriterTypeConflict {
                    field: property,
                    reader_type: if reader.is_some() {
                        value_type
                    } else {
                        existing.value_type
                    },
                    writer_type: if writer.is_some() {
                        value_type
                    } else {
                        existing.value_type
                    },
                });
                return;
            }
            if let Some(reader) = reader {
                existing.reader = Some(reader);
            }
            if let Some(writer) = writer {
                existing.writer = Some(writer);
            }
            return;
        }
        self.by_name.insert(property.clone(), self.fields.len());
        self.fields.push(FieldDescriptor {
            name: property,
            value_type,
            reader,
            writer,
        });
    }

    /// Finalizes the table.
    ///
    /// # Errors
    ///
    /// Returns the first [`TableError`] hit during declaration.
    pub fn build(self) -> Result<DescriptorTable<R>, TableError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(DescriptorTable {
            fields: self.fields,
            by_name: self.by_name,
        })
    }
}

impl<R> Default for TableBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
