use crate::{Driver, ParameterSet, Result, RowLabeled, RowsAffected};

/// How a piece of command text is dispatched to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// A stored routine invoked by name.
    Routine,
    /// A literal statement executed as-is.
    Statement,
}

impl CommandKind {
    /// Classify command text.
    ///
    /// Text starting with `[` (a bracket-quoted identifier) or containing no
    /// whitespace at all is treated as a bare routine name; anything else as
    /// a literal statement. A statement that happens to be a single word is
    /// therefore misclassified as a routine; callers that hit this can state
    /// their intent with [`crate::Definition::statement`] text containing
    /// whitespace, there is no further disambiguation.
    pub fn classify(text: &str) -> Self {
        if text.starts_with('[') || !text.contains(char::is_whitespace) {
            Self::Routine
        } else {
            Self::Statement
        }
    }
}

/// The stateless description of one invocation, handed to
/// [`crate::Connection::command`] to produce a native command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub text: String,
    pub kind: CommandKind,
    pub parameters: ParameterSet,
}

impl CommandSpec {
    pub fn new(text: impl Into<String>, parameters: ParameterSet) -> Self {
        let text = text.into();
        Self {
            kind: CommandKind::classify(&text),
            text,
            parameters,
        }
    }
}

/// A native command ready to run. Consumed by execution: a command runs at
/// most once and at most one cursor exists per command.
pub trait Command: Sized {
    type Driver: Driver;

    /// Run the command and return a cursor over its result rows.
    fn fetch(self) -> Result<<Self::Driver as Driver>::Cursor>;

    /// Run the command and return the affected-row count.
    fn execute(self) -> Result<RowsAffected>;
}

/// A forward-only, single-pass sequence of result rows bound to one executed
/// command. `Ok(None)` signals the end of the sequence; the native handles
/// are released when the cursor is dropped.
pub trait Cursor {
    fn advance(&mut self) -> Result<Option<RowLabeled>>;
}
