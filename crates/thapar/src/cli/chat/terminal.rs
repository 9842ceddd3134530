use anyhow::Result;
use console::Term;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::IsTerminal;

/// Result of waiting for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C while reading.
    Interrupted,
    /// Input closed.
    Eof,
}

/// Line input and screen control for the chat loop.
pub trait Terminal {
    /// Whether `read_line` displays the prompt itself.
    fn shows_prompt(&self) -> bool;
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
    fn clear_screen(&mut self) -> Result<()>;
}

/// Interactive terminal on stdin/stdout backed by rustyline.
pub struct ConsoleTerminal {
    editor: DefaultEditor,
    term: Term,
    interactive: bool,
}

impl ConsoleTerminal {
    pub fn new() -> Result<Self> {
        // In-memory history only, nothing is persisted
        let config = rustyline::Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        Ok(Self {
            editor: DefaultEditor::with_config(config)?,
            term: Term::stdout(),
            // rustyline skips the prompt when reading piped input
            interactive: std::io::stdin().is_terminal(),
        })
    }
}

impl Terminal for ConsoleTerminal {
    fn shows_prompt(&self) -> bool {
        self.interactive
    }

    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err.into()),
        }
    }

    fn clear_screen(&mut self) -> Result<()> {
        // Nothing to clear when output is redirected
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        Ok(())
    }
}
