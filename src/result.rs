//! The outcome of validating a whole form.

use std::collections::BTreeMap;

use crate::error::{Field, FieldError};

/// Per-field errors for one form snapshot.
///
/// A field without an entry is valid. The result as a whole is valid iff
/// there are no entries. Entries iterate in display order (see [`Field`]).
///
/// With the `serde` feature this serializes as
/// `{"errors": {"cardNumber": "..."}, "isValid": false}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    /// Creates an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error, keyed by the field it belongs to.
    ///
    /// A field keeps its first error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.entry(error.field()).or_insert(error);
    }

    /// Records the error of a field check, if any.
    pub(crate) fn check<T>(&mut self, outcome: Result<T, FieldError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    /// Returns true if no field produced an error.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the error for `field`, if it failed.
    #[inline]
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Returns true if `field` failed.
    #[inline]
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Number of failed fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed. Same as [`is_valid`](Self::is_valid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over failed fields and their errors in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// Returns the failed fields in display order.
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    /// Returns every error message in display order.
    ///
    /// This is the flat form a pre-submission check reports.
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = std::collections::btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        struct Messages<'a>(&'a BTreeMap<Field, FieldError>);

        impl serde::Serialize for Messages<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_map(
                    self.0
                        .iter()
                        .map(|(field, error)| (field.key(), error.to_string())),
                )
            }
        }

        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("errors", &Messages(&self.errors))?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.end()
    }
}
