use std::io::Write;

use tracing::debug;

use crate::{
    complete_command::{CatCommand, ChangeDirCommand},
    error::{ShellError, ShellResult},
    fs::Filesystem,
    identity::Identity,
    index::{DirectoryView, EntryIndex},
    path::{resolve, CurrentPath, Resolution},
};

/// Printed by `cat` for every argument that is not a file entry.
pub static FILE_NOT_FOUND: &str = "File not found.";

/// A system that can execute commands
///
/// This trait is the interface between the shell dispatcher and one session
/// over a file system image.
pub trait System {
    /// Get the current working directory
    fn get_cwd(&self) -> &CurrentPath;
    /// The prompt shown before each command, without the indicator
    fn prompt(&self) -> String;
    /// Identify the image, the user and the current directory
    fn pwd(&self) -> String;
    /// List the contents of the current directory
    fn list(&self) -> DirectoryView;
    /// Move to another directory. The current directory only changes when
    /// the result is [`Resolution::Found`].
    fn chdir(&mut self, cmd: &ChangeDirCommand) -> Resolution;
    /// Write the content of each file to `out`, or a not found notice
    fn cat(&mut self, cmd: &CatCommand, out: &mut dyn Write) -> ShellResult<()>;
}

/// The state of one shell session: the open image, its index, the current
/// directory and who is browsing it. Dropping it closes the image.
pub struct ArchiveSystem<F>
where
    F: Filesystem,
{
    file_system: F,
    index: EntryIndex,
    cwd: CurrentPath,
    identity: Identity,
}

impl<F> ArchiveSystem<F>
where
    F: Filesystem,
{
    pub fn new(file_system: F, identity: Identity) -> Self {
        let index = EntryIndex::new(file_system.entry_names());

        Self {
            file_system,
            index,
            cwd: CurrentPath::root(),
            identity,
        }
    }

    /// Name of the entry `argument` points at, if it is a file.
    fn find_file(&self, argument: &str) -> Option<String> {
        let path = resolve(&self.index, &self.cwd, argument).found()?;
        self.index
            .file_entry(&path)
            .map(|entry| entry.name().to_string())
    }
}

impl<F: Filesystem> System for ArchiveSystem<F> {
    fn get_cwd(&self) -> &CurrentPath {
        &self.cwd
    }

    fn prompt(&self) -> String {
        self.identity.prompt(&self.cwd)
    }

    fn pwd(&self) -> String {
        format!(
            "{}/{}{}",
            self.file_system.image_name(),
            self.identity.user,
            self.cwd.rooted()
        )
    }

    fn list(&self) -> DirectoryView {
        self.index.view(&self.cwd)
    }

    fn chdir(&mut self, cmd: &ChangeDirCommand) -> Resolution {
        let resolution = match resolve(&self.index, &self.cwd, &cmd.path) {
            Resolution::Found(path) if self.index.is_file(&path) => {
                debug!("chdir: `{}` is a file", path);
                Resolution::NotFound
            }
            resolution => resolution,
        };

        if let Resolution::Found(path) = &resolution {
            debug!("chdir: `{}` -> `{}`", self.cwd, path);
            self.cwd = path.clone();
        }

        resolution
    }

    fn cat(&mut self, cmd: &CatCommand, out: &mut dyn Write) -> ShellResult<()> {
        for file in &cmd.files {
            let Some(name) = self.find_file(file) else {
                debug!("cat: no file `{}` from `{}`", file, self.cwd);
                writeln!(out, "{FILE_NOT_FOUND}")?;
                continue;
            };

            debug!("cat: reading `{}`", name);
            self.file_system
                .copy_entry(&name, out)
                .map_err(|source| ShellError::EntryRead {
                    name: name.clone(),
                    source,
                })?;
            writeln!(out)?;
        }

        Ok(())
    }
}
