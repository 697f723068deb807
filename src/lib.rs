//! Spool: the Rust routine invocation layer.
//!
//! A small, explicit framework to call stored routines and parameterized
//! statements on a relational backend. Drivers implement four capability
//! traits ([`Driver`], [`Connection`], [`Command`], [`Cursor`]); the core
//! provides connection leases that are either owned by the framework or
//! borrowed from the caller, requests with leak-free row cursors, and a
//! null-safe typed column extraction layer.
//!
//! ```no_run
//! use spool::{Definition, Operation, Request, Result};
//! # use spool_memdb::MemConnection;
//!
//! struct GetTotals {
//!     region: i32,
//! }
//!
//! impl Operation for GetTotals {
//!     type Connection = MemConnection;
//!     type Output = Vec<(i64, String)>;
//!
//!     fn definition(&self) -> Result<Definition> {
//!         let mut definition = Definition::routine("reporting", "GetTotals");
//!         definition.parameters_mut().add("region", self.region)?;
//!         Ok(definition)
//!     }
//!
//!     fn submit(&self, request: Request<'_, MemConnection>) -> Result<Self::Output> {
//!         let mut totals = vec![];
//!         for row in request.fetch()? {
//!             let row = row?;
//!             let total = row
//!                 .get::<i64>("total")
//!                 .combine(|_| row.get::<String>("label"), |total, label| (total, label));
//!             totals.push(total.into_result()?);
//!         }
//!         Ok(totals)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! // Owned connection, from a descriptor:
//! let totals = GetTotals { region: 3 }.run("memdb://reporting")?;
//! # Ok(())
//! # }
//! ```

pub use spool_core::*;
