//! Errors raised by the terminal session.
//!
//! Illegal moves and passes are not errors: the core reports them as
//! `false`. Only failures of the terminal itself end up here.

use derive_more::{Display, Error, From};
use rustyline::error::ReadlineError;

#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading a line from the terminal failed.
    #[display("terminal input failed: {_0}")]
    Readline(#[error(source)] ReadlineError),
    /// Writing to the terminal failed.
    #[display("terminal output failed: {_0}")]
    Io(#[error(source)] std::io::Error),
}
