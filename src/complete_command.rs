/// The complete set of commands understood by the shell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CompleteCommand {
    /// Print the image name, user and current path
    PrintWorkingDir,
    /// List the names directly below the current path
    List,
    /// Change the current path
    ChangeDir(ChangeDirCommand),
    /// Print the content of the given files
    Cat(CatCommand),
    /// Leave the shell
    Exit,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChangeDirCommand {
    /// Target path, `.` when none was given
    pub path: String,
}

impl Default for ChangeDirCommand {
    fn default() -> Self {
        Self { path: ".".into() }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CatCommand {
    /// The files to print, in order
    pub files: Vec<String>,
}
