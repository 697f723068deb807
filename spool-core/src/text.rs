use crate::{AsValue, Error, Result, Value};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use std::fmt::{self, Display};

/// A string restricted to ASCII characters, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiText(String);

impl AsciiText {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !text.is_ascii() {
            return Err(Error::msg(format!(
                "String `{text}` must contain only ASCII characters"
            )));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for AsciiText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsValue for AsciiText {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.0))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Self::new(String::try_from_value(value)?)
    }
}

/// A string guaranteed to contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::msg("String must not be empty or whitespace"));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsValue for NonEmptyText {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.0))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Self::new(String::try_from_value(value)?)
    }
}

/// A byte sequence carried in its base64 text form.
///
/// Bound as a parameter it travels as text; `from_encoded` validates the
/// input so `bytes` never fails afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Text {
    bytes: Box<[u8]>,
}

impl Base64Text {
    pub fn encode(bytes: impl Into<Box<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn from_encoded(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref();
        let bytes = BASE64
            .decode(text)
            .map_err(|e| Error::new(e).context(format!("`{text}` is not valid base64")))?;
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encoded(&self) -> String {
        BASE64.encode(&self.bytes)
    }
}

impl Display for Base64Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

impl AsValue for Base64Text {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.encoded()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(bytes)) => Ok(Self::encode(bytes)),
            other => Self::from_encoded(String::try_from_value(other)?),
        }
    }
}
