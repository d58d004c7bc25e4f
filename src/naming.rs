//! Accessor naming conventions.
//!
//! Descriptor tables are declared with bean-style accessor names, and the
//! property name is derived the same way the convention derives it:
//! strip the `get`/`is`/`set` prefix and lower-case the first remaining
//! character. A reader is `get<X>` for any value type or `is<X>` for bool
//! only; a writer is `set<X>`.

use crate::error::TableError;

/// A reader accessor name, parsed into its derived property name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderName {
    /// Derived property name (`getSalary` -> `salary`).
    pub property: String,
    /// True when the accessor used the `is` prefix, which restricts the
    /// declared type to bool.
    pub is_prefix: bool,
}

/// Parses a reader accessor name (`get<X>` or `is<X>`).
///
/// # Errors
///
/// Returns [`TableError::InvalidReaderName`] when the name fits neither
/// convention or has an empty suffix.
///
/// # Examples
///
/// ```
/// use fieldmap::naming::parse_reader;
///
/// let name = parse_reader("getSalary").unwrap();
/// assert_eq!(name.property, "salary");
/// assert!(!name.is_prefix);
///
/// let name = parse_reader("isActive").unwrap();
/// assert_eq!(name.property, "active");
/// assert!(name.is_prefix);
/// ```
pub fn parse_reader(name: &str) -> Result<ReaderName, TableError> {
    if let Some(suffix) = name.strip_prefix("get") {
        if !suffix.is_empty() {
            return Ok(ReaderName {
                property: decapitalize(suffix),
                is_prefix: false,
            });
        }
    }
    if let Some(suffix) = name.strip_prefix("is") {
        if !suffix.is_empty() {
            return Ok(ReaderName {
                property: decapitalize(suffix),
                is_prefix: true,
            });
        }
    }
    Err(TableError::InvalidReaderName {
        name: name.to_string(),
    })
}

/// Parses a writer accessor name (`set<X>`), returning the derived
/// property name.
///
/// # Errors
///
/// Returns [`TableError::InvalidWriterName`] when the name does not start
/// with `set` or has an empty suffix.
pub fn parse_writer(name: &str) -> Result<String, TableError> {
    match name.strip_prefix("set") {
        Some(suffix) if !suffix.is_empty() => Ok(decapitalize(suffix)),
        _ => Err(TableError::InvalidWriterName {
            name: name.to_string(),
        }),
    }
}

/// Derives the writer accessor name for a property (`salary` -> `setSalary`).
#[must_use]
pub fn setter_name(property: &str) -> String {
    format!("set{}", capitalize(property))
}

/// Lower-cases the first character.
#[must_use]
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
