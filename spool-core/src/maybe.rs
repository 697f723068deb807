use crate::{Error, Result};

/// Outcome of a typed column read: either a value or a failure message.
///
/// Extraction failures are ordinary values rather than errors, so a caller
/// can compose several independent column reads and aggregate the result.
/// The first failure in a chain wins and later steps are never evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Maybe<T> {
    Ok(T),
    Fail(String),
}

impl<T> Maybe<T> {
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Create a failure carrying `message`.
    ///
    /// # Panics
    /// An empty or all-whitespace message is a programming error and panics
    /// immediately rather than producing a failure nobody can diagnose.
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(
            !message.trim().is_empty(),
            "A failure message must not be empty",
        );
        Self::Fail(message)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(..))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(..))
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Ok(v) => Some(v),
            Self::Fail(..) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ok(..) => None,
            Self::Fail(message) => Some(message),
        }
    }

    /// Apply `f` to the value; a failure propagates unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Ok(v) => Maybe::Ok(f(v)),
            Self::Fail(message) => Maybe::Fail(message),
        }
    }

    /// Monadic bind: `f` runs only if this is a success.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Ok(v) => f(v),
            Self::Fail(message) => Maybe::Fail(message),
        }
    }

    /// Chain a dependent read and merge both values.
    ///
    /// `f` is evaluated only if this is a success, and `g` only if `f`
    /// succeeded too, so a chain of `combine` calls stops at the first
    /// failure and carries its message through untouched.
    pub fn combine<U, V>(
        self,
        f: impl FnOnce(&T) -> Maybe<U>,
        g: impl FnOnce(T, U) -> V,
    ) -> Maybe<V> {
        match self {
            Self::Fail(message) => Maybe::Fail(message),
            Self::Ok(v) => match f(&v) {
                Maybe::Fail(message) => Maybe::Fail(message),
                Maybe::Ok(u) => Maybe::Ok(g(v, u)),
            },
        }
    }

    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Fail(message) => Err(Error::msg(message)),
        }
    }
}
