use crate::{MemCommand, MemConnection, MemCursor};
use spool_core::Driver;

#[derive(Debug, Clone, Copy, Default)]
pub struct MemDriver;

impl MemDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for MemDriver {
    type Connection = MemConnection;
    type Command = MemCommand;
    type Cursor = MemCursor;

    const NAME: &'static str = "memdb";
}
