//! Interactive menu loop over a [`Timeline`].
//!
//! The shell is a small state machine:
//!
//! ```text
//! MenuPrompt ──▶ AwaitingChoice ──▶ Dispatch(choice) ──▶ MenuPrompt
//!     ▲              │  ▲                  │
//!     └─ out of range┘  └─ not a number    └─ Exit (choice 7 or end of input)
//! ```
//!
//! It is generic over its input and output streams so sessions can be
//! scripted in tests.

use std::io::{BufRead, Write};

use chirp_engine::{PostId, Timeline, TimelineError};
use thiserror::Error;
use tracing::{debug, trace};

use crate::menu::{parse_choice, parse_number, ChoiceInput, MenuChoice};
use crate::render::{render_menu, render_timeline};

/// Errors that stop the shell.
///
/// Timeline errors from user actions are printed, not returned; only
/// failures on the shell's own streams end up here.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the shell is in its read-dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Print the menu and the `Select:` prompt.
    MenuPrompt,
    /// Wait for a numeric choice.
    AwaitingChoice,
    /// Run the chosen action.
    Dispatch(MenuChoice),
    /// Terminal state.
    Exit,
}

/// The interactive shell.
pub struct Shell<R, W> {
    timeline: Timeline,
    input: R,
    output: W,
    state: ShellState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over `timeline`, starting at the menu.
    pub fn new(timeline: Timeline, input: R, output: W) -> Self {
        Self {
            timeline,
            input,
            output,
            state: ShellState::MenuPrompt,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Consume the shell, returning the timeline and the output stream.
    pub fn into_parts(self) -> (Timeline, W) {
        (self.timeline, self.output)
    }

    /// Step until the shell reaches [`ShellState::Exit`].
    pub fn run(&mut self) -> Result<(), ShellError> {
        while self.state != ShellState::Exit {
            self.step()?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Advance one transition and return the new state.
    pub fn step(&mut self) -> Result<ShellState, ShellError> {
        let next = match self.state {
            ShellState::MenuPrompt => {
                write!(self.output, "{}\n\nSelect: ", render_menu())?;
                self.output.flush()?;
                ShellState::AwaitingChoice
            }
            ShellState::AwaitingChoice => self.await_choice()?,
            ShellState::Dispatch(choice) => self.dispatch(choice)?,
            ShellState::Exit => ShellState::Exit,
        };
        trace!(from = ?self.state, to = ?next, "shell transition");
        self.state = next;
        Ok(next)
    }

    fn await_choice(&mut self) -> Result<ShellState, ShellError> {
        let Some(line) = self.read_line()? else {
            return Ok(ShellState::Exit);
        };

        Ok(match parse_choice(&line) {
            ChoiceInput::Choice(choice) => ShellState::Dispatch(choice),
            ChoiceInput::OutOfRange(number) => {
                debug!(number, "menu choice out of range");
                ShellState::MenuPrompt
            }
            ChoiceInput::NotANumber => {
                write!(self.output, "Select: ")?;
                self.output.flush()?;
                ShellState::AwaitingChoice
            }
        })
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ShellState, ShellError> {
        match choice {
            MenuChoice::Display => self.display(),
            MenuChoice::Select => self.select(),
            MenuChoice::Add => self.add(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Like => self.like(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Exit => Ok(ShellState::Exit),
        }
    }

    fn display(&mut self) -> Result<ShellState, ShellError> {
        let table = render_timeline(&self.timeline.display());
        write!(self.output, "\n{table}\n\n\n")?;
        Ok(ShellState::MenuPrompt)
    }

    fn select(&mut self) -> Result<ShellState, ShellError> {
        if self.timeline.is_empty() {
            self.report(TimelineError::Empty)?;
            return Ok(ShellState::MenuPrompt);
        }

        let Some(number) = self.read_number("Enter ID: ")? else {
            return Ok(ShellState::Exit);
        };

        // Anything outside the id range cannot match a post
        let result = PostId::try_from(number)
            .map_err(|_| TimelineError::NotFound)
            .and_then(|id| self.timeline.select(id).map(|post| post.id));

        match result {
            Ok(id) => writeln!(self.output, "\nSelected tweet {id}.\n")?,
            Err(e) => self.report(e)?,
        }
        Ok(ShellState::MenuPrompt)
    }

    fn add(&mut self) -> Result<ShellState, ShellError> {
        if self.timeline.is_full() {
            self.report(TimelineError::Full)?;
            return Ok(ShellState::MenuPrompt);
        }

        write!(self.output, "\nEnter tweet: \n")?;
        self.output.flush()?;
        let Some(text) = self.read_line()? else {
            return Ok(ShellState::Exit);
        };

        // A freshly written post becomes the selection
        let added = self.timeline.add(&text);
        match added.and_then(|id| self.timeline.select(id).map(|post| post.id)) {
            Ok(_) => writeln!(self.output)?,
            Err(e) => self.report(e)?,
        }
        Ok(ShellState::MenuPrompt)
    }

    fn edit(&mut self) -> Result<ShellState, ShellError> {
        if self.timeline.selection().is_none() {
            self.report(TimelineError::NoSelection)?;
            return Ok(ShellState::MenuPrompt);
        }

        write!(self.output, "\nEnter new tweet: \n")?;
        self.output.flush()?;
        let Some(text) = self.read_line()? else {
            return Ok(ShellState::Exit);
        };

        if let Err(e) = self.timeline.edit_selected(&text) {
            self.report(e)?;
        }
        Ok(ShellState::MenuPrompt)
    }

    fn like(&mut self) -> Result<ShellState, ShellError> {
        if let Err(e) = self.timeline.like_selected() {
            self.report(e)?;
        }
        Ok(ShellState::MenuPrompt)
    }

    fn delete(&mut self) -> Result<ShellState, ShellError> {
        match self.timeline.delete_selected() {
            Ok(_) => write!(self.output, "\nTweet was deleted.\n\n")?,
            Err(e) => self.report(e)?,
        }
        Ok(ShellState::MenuPrompt)
    }

    /// Print a timeline error in the style the user sees for its kind.
    fn report(&mut self, err: TimelineError) -> Result<(), ShellError> {
        match err {
            TimelineError::Empty | TimelineError::NotFound => {
                write!(self.output, "\n{err}\n\n")?;
            }
            TimelineError::Full | TimelineError::NoSelection | TimelineError::IdsExhausted => {
                write!(self.output, "\nERROR: {err}.\n")?;
            }
        }
        Ok(())
    }

    /// Prompt until the user types an integer. `None` at end of input.
    fn read_number(&mut self, prompt: &str) -> Result<Option<i64>, ShellError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(number) = parse_number(&line) {
                return Ok(Some(number));
            }
        }
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
