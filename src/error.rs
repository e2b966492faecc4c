use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use zip::result::ZipError;

pub type ShellResult<T> = std::result::Result<T, ShellError>;

/// Everything that can go wrong while running a zipsh session.
///
/// Navigation misses are not errors: `cd` silently keeps the current path and
/// `cat` prints `File not found.`.
#[derive(Debug, Diagnostic, Error)]
pub enum ShellError {
    /// The image path does not point to a readable file.
    #[error("File system image not found: {}", path.display())]
    #[diagnostic(
        code(zipsh::image::not_found),
        help("pass the path of an existing zip archive as the first argument")
    )]
    ImageNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but is not a zip archive.
    #[error("{} is not a valid file system image", path.display())]
    #[diagnostic(
        code(zipsh::image::invalid),
        help("only zip archives can be used as file system images")
    )]
    InvalidImage {
        path: PathBuf,
        #[source]
        source: ZipError,
    },

    #[error("Failed to read script {}", path.display())]
    #[diagnostic(code(zipsh::script::unreadable))]
    ScriptUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A listed file entry could not be streamed back out of the image.
    #[error("Failed to read `{name}` from the file system image")]
    #[diagnostic(
        code(zipsh::entry::read),
        help("the entry is listed in the image but its data is unreadable; the image may be corrupt")
    )]
    EntryRead {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error")]
    #[diagnostic(code(zipsh::io))]
    Io(#[from] io::Error),
}
