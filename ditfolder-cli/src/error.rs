// ditfolder-cli/src/error.rs
//
// Errors surfaced by the CLI are plain core errors. Command code prefixes
// them with what the operator asked for, so "Folder already exists at: ..."
// reads as "Failed to create day folder: Folder already exists at: ...".

use std::fmt::Display;

use ditfolder_core::{CoreError, CoreResult};

pub type CliResult<T> = CoreResult<T>;

fn prefixed(context: impl Display, error: CoreError) -> CoreError {
    CoreError::OperationFailed(format!("{context}: {error}"))
}

/// Adds an operator-facing prefix to a failed core call.
pub trait CliErrorContext<T> {
    fn cli_context(self, context: impl Display) -> CliResult<T>;

    /// Like `cli_context`, building the prefix only on failure.
    fn cli_with_context<C: Display>(self, context: impl FnOnce() -> C) -> CliResult<T>;
}

impl<T, E: Into<CoreError>> CliErrorContext<T> for Result<T, E> {
    fn cli_context(self, context: impl Display) -> CliResult<T> {
        self.map_err(|e| prefixed(context, e.into()))
    }

    fn cli_with_context<C: Display>(self, context: impl FnOnce() -> C) -> CliResult<T> {
        self.map_err(|e| prefixed(context(), e.into()))
    }
}
