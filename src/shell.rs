use std::io::Write;

use tracing::debug;

use crate::{
    complete_command::CompleteCommand, error::ShellResult, parser::WinnowCommandParser,
    system::System,
};

/// What the session driver should do after a command.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Exit,
}

/// Parse and run one command line. Unknown commands are ignored.
pub fn execute_line<S>(system: &mut S, line: &str, out: &mut dyn Write) -> ShellResult<Control>
where
    S: System + ?Sized,
{
    match WinnowCommandParser::new(line).get_command() {
        Some(command) => execute(system, &command, out),
        None => {
            debug!("ignoring unknown command {:?}", line);
            Ok(Control::Continue)
        }
    }
}

pub fn execute<S>(system: &mut S, command: &CompleteCommand, out: &mut dyn Write) -> ShellResult<Control>
where
    S: System + ?Sized,
{
    match command {
        CompleteCommand::PrintWorkingDir => writeln!(out, "{}", system.pwd())?,
        CompleteCommand::List => write!(out, "{}", system.list())?,
        CompleteCommand::ChangeDir(cmd) => {
            system.chdir(cmd);
        }
        CompleteCommand::Cat(cmd) => system.cat(cmd, out)?,
        CompleteCommand::Exit => return Ok(Control::Exit),
    }

    Ok(Control::Continue)
}
