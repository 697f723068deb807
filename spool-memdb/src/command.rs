use crate::{
    MemDriver,
    store::{self, Script, SharedStore},
};
use spool_core::{Command, Cursor, Error, Result, RowLabeled, RowsAffected};

/// A command resolved against a store script.
pub struct MemCommand {
    store: SharedStore,
    script: Script,
}

impl MemCommand {
    pub(crate) fn new(store: SharedStore, script: Script) -> Self {
        Self { store, script }
    }
}

impl Command for MemCommand {
    type Driver = MemDriver;

    fn fetch(self) -> Result<MemCursor> {
        let (rows, then_fail) = match self.script {
            Script::Rows { rows, then_fail } => (rows, then_fail),
            // A non-query script still yields a cursor, just an empty one.
            Script::Affected(..) => (vec![], None),
            Script::Fail(message) => {
                let error = Error::msg(message);
                log::error!("{error:#}");
                return Err(error);
            }
        };
        store::lock(&self.store).counters.cursors += 1;
        Ok(MemCursor {
            store: self.store,
            rows: rows.into_iter(),
            then_fail,
        })
    }

    fn execute(self) -> Result<RowsAffected> {
        match self.script {
            Script::Affected(affected) => Ok(affected),
            Script::Rows { rows, .. } => Ok(RowsAffected {
                rows_affected: rows.len() as u64,
                last_affected_id: None,
            }),
            Script::Fail(message) => {
                let error = Error::msg(message);
                log::error!("{error:#}");
                Err(error)
            }
        }
    }
}

/// Streams scripted rows one at a time; releases its handle on drop.
pub struct MemCursor {
    store: SharedStore,
    rows: std::vec::IntoIter<RowLabeled>,
    then_fail: Option<String>,
}

impl Cursor for MemCursor {
    fn advance(&mut self) -> Result<Option<RowLabeled>> {
        match self.rows.next() {
            Some(row) => {
                store::lock(&self.store).counters.rows_served += 1;
                Ok(Some(row))
            }
            None => match self.then_fail.take() {
                Some(message) => {
                    let error = Error::msg(message);
                    log::error!("{error:#}");
                    Err(error)
                }
                None => Ok(None),
            },
        }
    }
}

impl Drop for MemCursor {
    fn drop(&mut self) {
        store::lock(&self.store).counters.cursor_drops += 1;
    }
}
