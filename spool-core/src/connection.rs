use crate::{CommandSpec, Driver, Result};

/// A native connection handle with explicit open/close state.
///
/// `open` and `close` are idempotent: opening an open connection and closing
/// a closed one are no-ops.
pub trait Connection: Sized {
    type Driver: Driver;

    /// Establish a connection to the given descriptor and open it.
    fn connect(descriptor: &str) -> Result<Self>;

    fn is_open(&self) -> bool;

    /// Open the connection if it is not already open.
    fn open(&mut self) -> Result<()>;

    /// Close the connection if it is open.
    fn close(&mut self) -> Result<()>;

    /// Build a native command from command text, kind and bound parameters.
    fn command(&mut self, spec: &CommandSpec) -> Result<<Self::Driver as Driver>::Command>;
}

/// A connection scoped to one execute invocation.
///
/// `Owned` connections are created by the framework from a descriptor and
/// released when the lease is dropped. `Borrowed` connections belong to the
/// caller: the framework uses them but never closes them, and the caller is
/// responsible for their state before and after the call.
pub enum Lease<'c, C: Connection> {
    Owned {
        descriptor: String,
        connection: Option<C>,
    },
    Borrowed(&'c mut C),
}

impl<'c, C: Connection> Lease<'c, C> {
    /// An owned lease; the native connection is established on first `open`.
    pub fn connect(descriptor: impl Into<String>) -> Self {
        Self::Owned {
            descriptor: descriptor.into(),
            connection: None,
        }
    }

    /// Wrap a caller-supplied connection without taking ownership.
    pub fn borrow(connection: &'c mut C) -> Self {
        Self::Borrowed(connection)
    }

    pub fn is_open(&self) -> bool {
        match self {
            Self::Owned { connection, .. } => {
                connection.as_ref().is_some_and(Connection::is_open)
            }
            Self::Borrowed(connection) => connection.is_open(),
        }
    }

    /// Ensure the underlying connection is open. A no-op on an already-open
    /// owned connection and always on a borrowed one.
    pub fn open(&mut self) -> Result<&mut Self> {
        if let Self::Owned {
            descriptor,
            connection,
        } = self
        {
            match connection {
                None => *connection = Some(C::connect(descriptor)?),
                Some(connection) => connection.open()?,
            }
        }
        Ok(self)
    }

    /// Close an owned connection if it is open. A no-op on a borrowed one.
    pub fn close(&mut self) -> Result<&mut Self> {
        if let Self::Owned {
            connection: Some(connection),
            ..
        } = self
        {
            connection.close()?;
        }
        Ok(self)
    }

    /// The underlying connection; fails on an owned lease never opened.
    pub fn connection(&mut self) -> Result<&mut C> {
        match self {
            Self::Owned { connection, .. } => connection.as_mut().ok_or_else(|| {
                crate::Error::msg("The owned connection has not been opened yet")
            }),
            Self::Borrowed(connection) => Ok(connection),
        }
    }
}

impl<C: Connection> Drop for Lease<'_, C> {
    fn drop(&mut self) {
        // Best effort: a release failure must not mask the error that
        // triggered disposal.
        if let Self::Owned {
            connection: Some(connection),
            descriptor,
        } = self
        {
            if let Err(e) = connection.close() {
                log::warn!("Error while releasing the connection to `{descriptor}`: {e:#}");
            }
        }
    }
}
