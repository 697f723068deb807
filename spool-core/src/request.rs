use crate::{Command, CommandSpec, Connection, Context, Cursor, Driver, Lease, Result, RowLabeled};

/// Metadata about modify operations.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsAffected {
    /// Total number of rows impacted.
    pub rows_affected: u64,
    /// Backend-specific last inserted / affected identifier when available.
    pub last_affected_id: Option<i64>,
}

/// One invocation: a command description bound to a connection lease.
///
/// Both execution paths consume the request, so the lease is released
/// exactly once on every exit path whether the command ran or not.
pub struct Request<'c, C: Connection> {
    lease: Lease<'c, C>,
    spec: CommandSpec,
}

impl<'c, C: Connection> Request<'c, C> {
    pub fn new(lease: Lease<'c, C>, spec: CommandSpec) -> Self {
        Self { lease, spec }
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Run as a non-query and return the affected-row count. The lease is
    /// disposed before returning.
    pub fn execute(mut self) -> Result<RowsAffected> {
        self.lease.open()?;
        let command = self.lease.connection()?.command(&self.spec)?;
        command
            .execute()
            .with_context(|| format!("While executing `{}`", self.spec.text))
    }

    /// Run and hand back a row sequence. Cursor execution starts eagerly;
    /// the first row fetch is deferred to the first advance. Ownership of
    /// the cursor and the lease transfers to the returned [`Rows`].
    pub fn fetch(mut self) -> Result<Rows<'c, C>> {
        self.lease.open()?;
        let cursor = self
            .lease
            .connection()?
            .command(&self.spec)?
            .fetch()
            .with_context(|| format!("While executing `{}`", self.spec.text))?;
        Ok(Rows {
            cursor,
            lease: self.lease,
            done: false,
        })
    }
}

/// Lazy row sequence over one executed command.
///
/// Iteration stops at the end of the rows or at the first fetch error.
/// Dropping the value, at any point and on any path, releases the native
/// cursor and then the lease, each exactly once.
pub struct Rows<'c, C: Connection> {
    // Field order matters: the cursor must drop before the lease releases
    // the connection it is bound to.
    cursor: <C::Driver as Driver>::Cursor,
    lease: Lease<'c, C>,
    done: bool,
}

impl<C: Connection> Rows<'_, C> {
    /// Whether the sequence has terminated, by exhaustion or by error.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<C: Connection> Iterator for Rows<'_, C> {
    type Item = Result<RowLabeled>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.advance() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
