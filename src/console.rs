use std::io::{self, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::SessionError;

/// Line-oriented terminal used by the session.
pub trait Console {
    /// Reads one line. `Ok(None)` means the input was closed (Ctrl-D or
    /// Ctrl-C).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError>;

    fn write(&mut self, text: &str) -> Result<(), SessionError>;
}

/// Console backed by rustyline, with in-memory history.
pub struct RustylineConsole {
    editor: DefaultEditor,
}

impl RustylineConsole {
    pub fn new() -> Result<Self, SessionError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Console for RustylineConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(line.as_str());
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, text: &str) -> Result<(), SessionError> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Replays prepared input lines and records everything written.
#[cfg(test)]
pub(crate) struct ScriptedConsole {
    lines: std::collections::VecDeque<String>,
    pub output: String,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            output: String::new(),
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        self.output.push_str(prompt);
        Ok(self.lines.pop_front())
    }

    fn write(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.push_str(text);
        Ok(())
    }
}
