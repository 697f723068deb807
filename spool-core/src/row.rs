use crate::{AsValue, Error, Maybe, NonEmptyText, Result, Value};
use std::{any, sync::Arc};

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

/// A result row with its corresponding column labels.
#[derive(Debug, Clone)]
pub struct RowLabeled {
    /// Column names.
    pub labels: RowNames,
    /// Data values (aligned by index with `labels`).
    pub values: Row,
}

impl RowLabeled {
    pub fn new(names: RowNames, values: Row) -> Self {
        Self {
            labels: names,
            values,
        }
    }

    pub fn names(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.labels.iter().position(|v| v == name)
    }

    pub fn column(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|i| &self.values[i])
    }

    /// Read a column as `T`, requiring a non-null value.
    ///
    /// A missing column, a NULL and a value of the wrong type each produce a
    /// failure with its own message; driver conversion errors are absorbed
    /// rather than propagated.
    pub fn get<T: AsValue>(&self, name: &str) -> Maybe<T> {
        let Some(value) = self.column(name) else {
            return Maybe::fail(format!("Column '{name}' does not exist."));
        };
        if value.is_null() {
            return Maybe::fail(format!("Column '{name}' is null."));
        }
        match T::try_from_value(value.clone()) {
            Ok(v) => Maybe::ok(v),
            Err(..) => Maybe::fail(format!(
                "Column '{name}' could not be read as type {}.",
                any::type_name::<T>(),
            )),
        }
    }

    /// Read a column as `T`, mapping NULL to `None` instead of failing.
    pub fn get_nullable<T: AsValue>(&self, name: &str) -> Maybe<Option<T>> {
        let Some(value) = self.column(name) else {
            return Maybe::fail(format!("Column '{name}' does not exist."));
        };
        if value.is_null() {
            return Maybe::ok(None);
        }
        match T::try_from_value(value.clone()) {
            Ok(v) => Maybe::ok(Some(v)),
            Err(..) => Maybe::fail(format!(
                "Column '{name}' could not be read as type {}.",
                any::type_name::<T>(),
            )),
        }
    }

    /// Read a text column that must hold a non-empty string.
    ///
    /// An empty or all-whitespace string is reported with a message distinct
    /// from both the missing-column and the NULL case.
    pub fn non_empty_text(&self, name: &str) -> Maybe<NonEmptyText> {
        let Some(value) = self.column(name) else {
            return Maybe::fail(format!("Column '{name}' does not exist."));
        };
        if value.is_null() {
            return Maybe::fail(format!("Column '{name}' is null."));
        }
        let Ok(text) = String::try_from_value(value.clone()) else {
            return Maybe::fail(format!(
                "Column '{name}' could not be read as type {}.",
                any::type_name::<String>(),
            ));
        };
        match NonEmptyText::new(text) {
            Ok(v) => Maybe::ok(v),
            Err(..) => Maybe::fail(format!(
                "Column '{name}' is an empty string, but a non-empty string is expected.",
            )),
        }
    }

    /// Plain string accessor for call sites that accept hard failures.
    pub fn text(&self, name: &str) -> Result<String> {
        let value = self
            .column(name)
            .ok_or_else(|| Error::msg(format!("Column '{name}' does not exist.")))?;
        String::try_from_value(value.clone())
    }
}

impl From<RowLabeled> for Row {
    fn from(value: RowLabeled) -> Self {
        value.values
    }
}
