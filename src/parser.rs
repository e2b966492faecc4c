use tracing::trace;
use winnow::{combinator::separated, prelude::*, token::take_till};

use crate::complete_command::{CatCommand, ChangeDirCommand, CompleteCommand};

/// A parser for single shell lines.
///
/// Words are separated by exactly one space, so repeated spaces produce empty
/// words: `"cd  docs"` is `["cd", "", "docs"]`. The first word picks the
/// command; unknown words parse to `None` and are ignored by the shell.
pub struct WinnowCommandParser<'a> {
    input: &'a str,
}

impl<'a> WinnowCommandParser<'a> {
    /// Create a new parser for the given input
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    pub fn tokens(&self) -> Vec<&'a str> {
        Self::parse_tokens
            .parse(self.input)
            .inspect_err(|e| trace!("failed to tokenize {:?}: {}", self.input, e))
            .unwrap_or_default()
    }

    pub fn get_command(&self) -> Option<CompleteCommand> {
        let command = match self.tokens().as_slice() {
            ["pwd", ..] => CompleteCommand::PrintWorkingDir,
            ["ls", ..] => CompleteCommand::List,
            ["cd"] => CompleteCommand::ChangeDir(ChangeDirCommand::default()),
            ["cd", path, ..] => CompleteCommand::ChangeDir(ChangeDirCommand {
                path: path.to_string(),
            }),
            ["cat", files @ ..] => CompleteCommand::Cat(CatCommand {
                files: files.iter().map(|file| file.to_string()).collect(),
            }),
            ["exit", ..] => CompleteCommand::Exit,
            _ => return None,
        };

        Some(command)
    }

    fn parse_word<'s>(input: &mut &'s str) -> PResult<&'s str> {
        take_till(0.., ' ').parse_next(input)
    }

    fn parse_tokens<'s>(input: &mut &'s str) -> PResult<Vec<&'s str>> {
        separated(1.., Self::parse_word, ' ').parse_next(input)
    }
}
