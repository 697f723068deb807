mod as_value;
mod command;
mod connection;
mod driver;
mod maybe;
mod non_empty;
mod operation;
mod parameter;
mod random;
mod request;
mod row;
mod text;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use command::*;
pub use connection::*;
pub use driver::*;
pub use maybe::*;
pub use non_empty::*;
pub use operation::*;
pub use parameter::*;
pub use random::*;
pub use request::*;
pub use row::*;
pub use text::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
