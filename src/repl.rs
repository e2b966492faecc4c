use miette::{IntoDiagnostic, Report, Result};

use crate::{
    repl_v2::DEFAULT_PROMPT_INDICATOR,
    shell::{execute_line, Control},
    system::System,
};

/// Plays back a script of shell commands.
///
/// Every line is echoed after the prompt before it runs, so the output reads
/// like a console transcript. Playback stops at the end of the input, at the
/// first empty line or at `exit`.
pub struct Repl<I, O, S>
where
    I: std::io::BufRead,
    O: std::io::Write,
    S: System,
{
    input_stream: I,
    output_stream: O,
    system: S,
}

impl<I, O, S> Repl<I, O, S>
where
    I: std::io::BufRead,
    O: std::io::Write,
    S: System,
{
    pub fn new(input_stream: I, output_stream: O, system: S) -> Self {
        Self {
            input_stream,
            output_stream,
            system,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut buffer = String::new();

        loop {
            buffer.clear();
            if self.input_stream.read_line(&mut buffer).into_diagnostic()? == 0 {
                break;
            }

            let line = buffer.strip_suffix('\n').unwrap_or(&buffer);
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                break;
            }

            writeln!(
                self.output_stream,
                "{}{}{}",
                self.system.prompt(),
                DEFAULT_PROMPT_INDICATOR,
                line
            )
            .into_diagnostic()?;

            match execute_line(&mut self.system, line, &mut self.output_stream) {
                Ok(Control::Continue) => {}
                Ok(Control::Exit) => break,
                Err(err) => eprintln!("{:?}", Report::new(err)),
            }
        }

        self.output_stream.flush().into_diagnostic()
    }

    /// Give back the output stream and the session.
    pub fn into_parts(self) -> (O, S) {
        (self.output_stream, self.system)
    }
}
