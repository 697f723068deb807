use crate::{
    CommandSpec, Connection, Lease, ParameterSet, Request, Result, RowsAffected, separated_by,
};
use std::marker::PhantomData;

/// The typed description of a database call prior to execution: resolved
/// command text plus the parameters it binds.
#[derive(Debug, Clone, Default)]
pub struct Definition {
    text: String,
    parameters: ParameterSet,
}

impl Definition {
    /// Explicit command text, taken as supplied.
    pub fn statement(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: ParameterSet::new(),
        }
    }

    /// Command text computed from a namespace and a routine name, joined
    /// with `.`. Empty namespace segments are removed; an absent namespace
    /// yields the bare name with no leading separator.
    pub fn routine(namespace: &str, name: &str) -> Self {
        let mut text = String::new();
        separated_by(
            &mut text,
            namespace
                .split('.')
                .filter(|segment| !segment.trim().is_empty())
                .chain([name]),
            |out, segment| out.push_str(segment),
            ".",
        );
        Self {
            text,
            parameters: ParameterSet::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// The parameter set, for the building phase of a concrete operation.
    pub fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.parameters
    }

    pub fn into_spec(self) -> CommandSpec {
        CommandSpec::new(self.text, self.parameters)
    }
}

/// What a caller supplies to run an operation: a descriptor the framework
/// connects to and owns end-to-end, or a lent, already-managed connection.
pub enum Source<'c, C: Connection> {
    Descriptor(String),
    Connection(&'c mut C),
}

impl<'c, C: Connection> Source<'c, C> {
    pub fn lease(self) -> Lease<'c, C> {
        match self {
            Self::Descriptor(descriptor) => Lease::connect(descriptor),
            Self::Connection(connection) => Lease::borrow(connection),
        }
    }
}

impl<C: Connection> From<&str> for Source<'_, C> {
    fn from(descriptor: &str) -> Self {
        Self::Descriptor(descriptor.into())
    }
}

impl<C: Connection> From<String> for Source<'_, C> {
    fn from(descriptor: String) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl<'c, C: Connection> From<&'c mut C> for Source<'c, C> {
    fn from(connection: &'c mut C) -> Self {
        Self::Connection(connection)
    }
}

/// A typed database operation: how to describe the call and how to fold its
/// raw result into `Output`.
///
/// `run` is the entry point. It resolves the lease from the supplied source,
/// ensures the connection is open before any command is built, and hands a
/// [`Request`] to `submit`; the lease is disposed on every exit path because
/// the request owns it.
pub trait Operation {
    type Connection: Connection;
    type Output;

    /// Describe the call. Construction failures (invalid or duplicate
    /// parameter names) surface here, before anything touches the database.
    fn definition(&self) -> Result<Definition>;

    /// Execute the request and shape its outcome.
    fn submit(&self, request: Request<'_, Self::Connection>) -> Result<Self::Output>;

    fn run<'c>(&self, source: impl Into<Source<'c, Self::Connection>>) -> Result<Self::Output>
    where
        Self::Connection: 'c,
    {
        let definition = self.definition()?;
        let mut lease = source.into().lease();
        lease.open()?;
        self.submit(Request::new(lease, definition.into_spec()))
    }
}

/// An ad-hoc non-query: explicit text, pre-built parameters, affected-row
/// count as the result.
pub struct AdHocNonQuery<C: Connection> {
    definition: Definition,
    marker: PhantomData<fn(C)>,
}

impl<C: Connection> AdHocNonQuery<C> {
    pub fn new(text: impl Into<String>, parameters: ParameterSet) -> Self {
        let mut definition = Definition::statement(text);
        *definition.parameters_mut() = parameters;
        Self {
            definition,
            marker: PhantomData,
        }
    }
}

impl<C: Connection> Operation for AdHocNonQuery<C> {
    type Connection = C;
    type Output = RowsAffected;

    fn definition(&self) -> Result<Definition> {
        Ok(self.definition.clone())
    }

    fn submit(&self, request: Request<'_, C>) -> Result<RowsAffected> {
        request.execute()
    }
}
