use std::{
    fs::File,
    io::{self, Read, Seek, Write},
    path::Path,
};

use tracing::info;
use zip::{result::ZipResult, ZipArchive};

use crate::{
    error::{ShellError, ShellResult},
    fs::Filesystem,
};

/// A zip archive opened read-only and used as a file system image.
///
/// The archive handle lives as long as the image and is closed when it is
/// dropped.
pub struct ZipImage<R: Read + Seek = File> {
    name: String,
    archive: ZipArchive<R>,
}

impl ZipImage<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> ShellResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ShellError::ImageNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = ZipArchive::new(file).map_err(|source| ShellError::InvalidImage {
            path: path.to_path_buf(),
            source,
        })?;

        info!("opened {} with {} entries", path.display(), archive.len());
        Ok(Self {
            name: image_stem(path),
            archive,
        })
    }
}

impl<R: Read + Seek> ZipImage<R> {
    /// Wrap an already open zip stream under the given image name.
    pub fn from_reader(name: impl Into<String>, reader: R) -> ZipResult<Self> {
        Ok(Self {
            name: name.into(),
            archive: ZipArchive::new(reader)?,
        })
    }
}

impl<R: Read + Seek> Filesystem for ZipImage<R> {
    fn image_name(&self) -> &str {
        &self.name
    }

    fn entry_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }

    fn copy_entry(&mut self, name: &str, out: &mut dyn Write) -> io::Result<u64> {
        let mut entry = self.archive.by_name(name).map_err(io::Error::other)?;
        io::copy(&mut entry, out)
    }
}

/// `files/archive.v2.zip` is shown as `archive`.
fn image_stem(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_image_from_disk() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("archive.zip");
        fs::write(&path, fixture::zip_bytes(&[("docs/readme.txt", "hi"), ("bin/run.sh", "")]))?;

        let image = ZipImage::open(&path)?;

        assert_eq!(image.image_name(), "archive");

        let mut names = image.entry_names();
        names.sort();
        assert_eq!(names, vec!["bin/run.sh", "docs/readme.txt"]);

        Ok(())
    }

    #[test]
    fn test_missing_image() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("missing.zip");

        let result = ZipImage::open(&path);

        assert!(matches!(result, Err(ShellError::ImageNotFound { .. })));
        Ok(())
    }

    #[test]
    fn test_not_a_zip_image() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("plain.zip");
        fs::write(&path, "definitely not a zip archive")?;

        let result = ZipImage::open(&path);

        assert!(matches!(result, Err(ShellError::InvalidImage { .. })));
        Ok(())
    }

    #[test]
    fn test_copy_entry() -> Result<()> {
        let mut image = fixture::zip_image(&[("docs/readme.txt", "line one\nline two")]);
        let mut out = Vec::new();

        let copied = image.copy_entry("docs/readme.txt", &mut out)?;

        assert_eq!(copied, 17);
        assert_eq!(String::from_utf8(out)?, "line one\nline two");
        Ok(())
    }

    #[test]
    fn test_copy_missing_entry_fails() {
        let mut image = fixture::zip_image(&[("a.txt", "a")]);
        let mut out = Vec::new();

        assert!(image.copy_entry("b.txt", &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_image_stem() {
        assert_eq!(image_stem(Path::new("files/archive.zip")), "archive");
        assert_eq!(image_stem(Path::new("/tmp/image.v2.zip")), "image");
        assert_eq!(image_stem(Path::new("noext")), "noext");
    }
}
