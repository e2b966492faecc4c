use std::{collections::BTreeSet, fmt};

use tracing::debug;

use crate::path::CurrentPath;

/// Width of the terminal the listing is laid out for.
pub const LINE_WIDTH: usize = 80;
/// Spaces kept between two listed names.
pub const COLUMN_GAP: usize = 4;

/// One named record of the image. Directories are only implied by the names
/// of the entries below them, unless the archive stores an explicit marker.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ArchiveEntry {
    name: String,
    segments: Vec<String>,
    is_dir: bool,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let segments = name
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();
        let is_dir = name.ends_with('/');

        Self {
            name,
            segments,
            is_dir,
        }
    }

    /// Name exactly as stored in the archive.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn lies_under(&self, path: &CurrentPath) -> bool {
        self.segments.len() > path.level() && self.segments.starts_with(path.segments())
    }
}

/// The flat entry listing of an image, queried by path.
#[derive(Debug, Clone)]
pub struct EntryIndex {
    entries: Vec<ArchiveEntry>,
}

impl EntryIndex {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = Self {
            entries: names.into_iter().map(ArchiveEntry::new).collect(),
        };
        debug!("indexed {} entries", index.len());
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Names one level below `path`, with repeats.
    pub fn children_at<'a>(&'a self, path: &'a CurrentPath) -> impl Iterator<Item = &'a str> + 'a {
        let level = path.level();
        self.entries
            .iter()
            .filter(move |entry| entry.lies_under(path))
            .map(move |entry| entry.segments[level].as_str())
    }

    pub fn has_child(&self, path: &CurrentPath, name: &str) -> bool {
        self.children_at(path).any(|child| child == name)
    }

    /// The entry `path` names, if it is a file: a non-directory entry with
    /// nothing stored below it.
    pub fn file_entry(&self, path: &CurrentPath) -> Option<&ArchiveEntry> {
        if path.is_root() || self.children_at(path).next().is_some() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| !entry.is_dir && entry.segments.as_slice() == path.segments())
    }

    pub fn is_file(&self, path: &CurrentPath) -> bool {
        self.file_entry(path).is_some()
    }

    /// Snapshot of the directory at `path`.
    pub fn view(&self, path: &CurrentPath) -> DirectoryView {
        DirectoryView::new(path.level(), self.children_at(path))
    }
}

/// The immediate children of one path together with the layout used to list
/// them. Built per request and never cached.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DirectoryView {
    pub level: usize,
    pub max_name_length: usize,
    pub columns_per_line: usize,
    pub entities: BTreeSet<String>,
}

impl DirectoryView {
    pub fn new<'a>(level: usize, names: impl IntoIterator<Item = &'a str>) -> Self {
        let entities: BTreeSet<String> = names.into_iter().map(String::from).collect();
        let max_name_length = entities
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);
        let columns_per_line = (LINE_WIDTH / (max_name_length + COLUMN_GAP)).max(1);

        Self {
            level,
            max_name_length,
            columns_per_line,
            entities,
        }
    }
}

/// The `ls` layout: sorted names in fixed-width columns, always ending with a
/// newline.
impl fmt::Display for DirectoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_name_length + COLUMN_GAP;

        for (i, name) in self.entities.iter().enumerate() {
            write!(f, "{name:<width$}")?;
            if (i + 1) % self.columns_per_line == 0 {
                writeln!(f)?;
            }
        }

        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> EntryIndex {
        EntryIndex::new(["docs/readme.txt", "docs/sub/notes.txt", "bin/run.sh"])
    }

    fn names(view: &DirectoryView) -> Vec<&str> {
        view.entities.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_entry_segments() {
        let entry = ArchiveEntry::new("/docs//sub/");

        assert_eq!(entry.name(), "/docs//sub/");
        assert_eq!(entry.segments, ["docs", "sub"]);
        assert!(entry.is_dir);
    }

    #[test]
    fn test_index_keeps_every_entry() {
        let index = EntryIndex::new(["docs/", "docs/readme.txt", "docs/readme.txt"]);

        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_root_view() {
        let index = scenario();

        let view = index.view(&CurrentPath::root());

        assert_eq!(view.level, 0);
        assert_eq!(names(&view), ["bin", "docs"]);
        assert_eq!(view.max_name_length, 4);
        assert_eq!(view.columns_per_line, 10);
    }

    #[test]
    fn test_nested_view_collapses_duplicates() {
        let index = EntryIndex::new([
            "docs/readme.txt",
            "docs/sub/notes.txt",
            "docs/sub/todo.txt",
            "docs/sub/",
        ]);

        let view = index.view(&CurrentPath::parse("docs"));

        assert_eq!(view.level, 1);
        assert_eq!(names(&view), ["readme.txt", "sub"]);
        assert_eq!(view.max_name_length, 10);
    }

    #[test]
    fn test_sibling_containing_path_is_not_a_child() {
        // "docs" is a substring of "mydocs/..." and "docs2/..."
        let index = EntryIndex::new(["docs/a.txt", "mydocs/b.txt", "docs2/c.txt", "x/docs/d.txt"]);

        let view = index.view(&CurrentPath::parse("docs"));

        assert_eq!(names(&view), ["a.txt"]);
    }

    #[test]
    fn test_view_below_a_file_is_empty() {
        let index = scenario();

        let view = index.view(&CurrentPath::parse("docs/readme.txt"));

        assert!(view.entities.is_empty());
        assert_eq!(view.max_name_length, 1);
        assert_eq!(view.columns_per_line, 16);
    }

    #[test]
    fn test_is_file() {
        let index = EntryIndex::new([
            "docs/readme.txt",
            "docs/sub/notes.txt",
            "empty/",
            "bin/run.sh",
        ]);

        assert!(index.is_file(&CurrentPath::parse("docs/readme.txt")));
        assert!(index.is_file(&CurrentPath::parse("bin/run.sh")));
        assert!(!index.is_file(&CurrentPath::parse("docs")));
        assert!(!index.is_file(&CurrentPath::parse("docs/sub")));
        assert!(!index.is_file(&CurrentPath::parse("empty")));
        assert!(!index.is_file(&CurrentPath::parse("docs/missing.txt")));
        assert!(!index.is_file(&CurrentPath::root()));

        let entry = index.file_entry(&CurrentPath::parse("bin/run.sh")).unwrap();
        assert_eq!(entry.name(), "bin/run.sh");
    }

    #[test]
    fn test_has_child() {
        let index = scenario();
        let docs = CurrentPath::parse("docs");

        assert!(index.has_child(&docs, "sub"));
        assert!(index.has_child(&docs, "readme.txt"));
        assert!(!index.has_child(&docs, "run.sh"));
        assert!(!index.has_child(&docs, ""));
    }

    #[test]
    fn test_columns_per_line() {
        let view = DirectoryView::new(0, ["a", "bb", "ccc"]);

        assert_eq!(view.max_name_length, 3);
        assert_eq!(view.columns_per_line, 11);
        assert_eq!(view.to_string(), "a      bb     ccc    \n");
    }

    #[test]
    fn test_wide_names_keep_one_column() {
        let long = "n".repeat(100);
        let view = DirectoryView::new(0, [long.as_str()]);

        assert_eq!(view.columns_per_line, 1);
        assert_eq!(view.to_string(), format!("{long}    \n\n"));
    }

    #[test]
    fn test_listing_wraps_lines() {
        // 16 + 4 = 20 characters per column, 4 columns per line
        let names = [
            "aaaaaaaaaaaaaaaa",
            "b",
            "c",
            "d",
            "e",
        ];
        let view = DirectoryView::new(0, names);

        assert_eq!(view.columns_per_line, 4);

        let pad = |name: &str| format!("{name:<20}");
        let expected = format!(
            "{}{}{}{}\n{}\n",
            pad("aaaaaaaaaaaaaaaa"),
            pad("b"),
            pad("c"),
            pad("d"),
            pad("e"),
        );
        assert_eq!(view.to_string(), expected);
    }

    #[test]
    fn test_empty_listing() {
        let view = DirectoryView::new(3, std::iter::empty());

        assert_eq!(view.to_string(), "\n");
    }
}
