use crate::{Command, Connection, Cursor};

/// A backend implementation: one concrete type per capability.
///
/// The core logic is generic over these associated types, so a driver is
/// written once and every operation, lease and cursor works against it.
pub trait Driver: Sized {
    type Connection: Connection<Driver = Self>;
    type Command: Command<Driver = Self>;
    type Cursor: Cursor;

    /// Scheme expected in connection descriptors, e.g. `memdb` in
    /// `memdb://reporting`.
    const NAME: &'static str;
}
