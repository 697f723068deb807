use crate::{Error, Result, Value};
use std::{
    fmt::{self, Display},
    slice,
};

/// A parameter name normalized to the `@` placeholder prefix drivers expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterName(String);

impl ParameterName {
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if name.trim().is_empty() {
            return Err(Error::msg("Parameter name must not be empty or whitespace"));
        }
        Ok(Self(if name.starts_with('@') {
            name.into()
        } else {
            format!("@{name}")
        }))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of an operation argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    In,
    InOut,
}

/// One named, typed operation argument. The [`Value`] variant doubles as the
/// declared storage type.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: ParameterName,
    direction: Direction,
    value: Value,
}

impl Parameter {
    pub fn new(name: ParameterName, direction: Direction, value: Value) -> Self {
        Self {
            name,
            direction,
            value,
        }
    }

    pub fn name(&self) -> &ParameterName {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Insertion-ordered, unique-keyed collection of operation arguments.
///
/// Built incrementally while an operation describes itself, immutable once
/// handed to a request. Inserting a duplicate name is a hard error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Look up a parameter, accepting the name with or without its prefix.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        let name = name.strip_prefix('@').unwrap_or(name);
        self.parameters
            .iter()
            .find(|p| p.name.as_str().strip_prefix('@') == Some(name))
    }

    pub fn iter(&self) -> slice::Iter<'_, Parameter> {
        self.parameters.iter()
    }

    /// Append an input parameter.
    pub fn add(&mut self, name: impl AsRef<str>, value: impl Into<Value>) -> Result<&mut Self> {
        self.insert(ParameterName::new(name)?, Direction::In, value.into())
    }

    /// Append an input parameter only when a value is present. An absent
    /// optional argument is omitted, not bound as a NULL placeholder.
    pub fn add_opt(
        &mut self,
        name: impl AsRef<str>,
        value: Option<impl Into<Value>>,
    ) -> Result<&mut Self> {
        match value {
            Some(value) => self.add(name, value),
            None => Ok(self),
        }
    }

    /// Append a parameter the driver may write back to.
    pub fn add_in_out(
        &mut self,
        name: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        self.insert(ParameterName::new(name)?, Direction::InOut, value.into())
    }

    fn insert(
        &mut self,
        name: ParameterName,
        direction: Direction,
        value: Value,
    ) -> Result<&mut Self> {
        if self.parameters.iter().any(|p| p.name == name) {
            return Err(Error::msg(format!("Duplicate parameter name `{name}`")));
        }
        self.parameters.push(Parameter::new(name, direction, value));
        Ok(self)
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
