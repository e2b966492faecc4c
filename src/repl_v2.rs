use std::borrow::Cow;
use std::io::Write;

use miette::{IntoDiagnostic, Report, Result};

use clap_repl::reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};
use tracing::debug;

use crate::shell::{execute_line, Control};
use crate::system::System;

pub static DEFAULT_PROMPT_INDICATOR: &str = "$ ";
static DEFAULT_MULTILINE_INDICATOR: &str = "::: ";

/// The `user@host:~/path` prompt of one console line, rendered from the
/// session state at the time the line is read.
pub struct ZipshPrompt {
    left: String,
}

impl ZipshPrompt {
    pub fn new<S: System + ?Sized>(system: &S) -> Self {
        Self {
            left: system.prompt(),
        }
    }
}

impl Prompt for ZipshPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(&self.left)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<str> {
        DEFAULT_PROMPT_INDICATOR.into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed(DEFAULT_MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

/// The interactive console.
pub struct ReplV2 {}

impl ReplV2 {
    /// Read commands from the terminal until `exit` or end of input (Ctrl-D).
    /// Ctrl-C drops the line being edited.
    pub fn run<S>(system: &mut S) -> Result<()>
    where
        S: System,
    {
        let mut line_editor = Reedline::create();
        let mut stdout = std::io::stdout();

        loop {
            let prompt = ZipshPrompt::new(&*system);

            match line_editor.read_line(&prompt).into_diagnostic()? {
                Signal::Success(line) => {
                    match execute_line(&mut *system, &line, &mut stdout) {
                        Ok(Control::Continue) => {}
                        Ok(Control::Exit) => break,
                        Err(err) => eprintln!("{:?}", Report::new(err)),
                    }
                    stdout.flush().into_diagnostic()?;
                }
                Signal::CtrlD => break,
                _ => debug!("line abandoned"),
            }
        }

        Ok(())
    }
}
