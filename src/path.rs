use std::fmt;

use tracing::debug;

use crate::index::EntryIndex;

/// The working directory of a session inside the image.
///
/// An empty segment list is the root. Displayed canonically as `a/b`; use
/// [`CurrentPath::rooted`] for the `/a/b` form shown in prompts.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct CurrentPath {
    segments: Vec<String>,
}

impl CurrentPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from slash separated text, dropping empty segments.
    /// Performs no lookup; use [`resolve`] for navigation.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Hierarchy level: the index of the next segment below this path.
    pub fn level(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The parent path; the root is its own parent.
    pub fn parent(&self) -> Self {
        let mut parent = self.clone();
        parent.segments.pop();
        parent
    }

    pub fn join(&self, segment: &str) -> Self {
        let mut child = self.clone();
        child.segments.push(segment.to_string());
        child
    }

    /// `/a/b`, or an empty string for the root.
    pub fn rooted(&self) -> String {
        self.segments.iter().map(|segment| format!("/{segment}")).collect()
    }
}

impl fmt::Display for CurrentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Outcome of resolving a navigation argument.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Resolution {
    /// Every segment exists; this is the fully descended path.
    Found(CurrentPath),
    /// Some segment is missing. The caller keeps its path unchanged.
    NotFound,
}

impl Resolution {
    pub fn found(self) -> Option<CurrentPath> {
        match self {
            Resolution::Found(path) => Some(path),
            Resolution::NotFound => None,
        }
    }
}

/// Resolve `argument` against `cwd`.
///
/// Each leading `..` climbs one level (never above the root), then `~/` or
/// `/` restart from the root, otherwise a leading `.` is dropped. Every prefix
/// takes one optional slash with it. What remains is walked one segment at a
/// time; a missing segment fails the whole walk.
pub fn resolve(index: &EntryIndex, cwd: &CurrentPath, argument: &str) -> Resolution {
    let mut base = cwd.clone();
    let mut rest = if argument.is_empty() { "." } else { argument };

    while let Some(after) = strip_prefix_and_slash(rest, "..") {
        base = base.parent();
        rest = after;
    }

    let rest = if let Some(absolute) = rest.strip_prefix("~/").or_else(|| rest.strip_prefix('/')) {
        base = CurrentPath::root();
        absolute
    } else {
        strip_prefix_and_slash(rest, ".").unwrap_or(rest)
    };

    walk(index, base, rest)
}

/// `prefix` stripped from `path`, along with one slash right after it.
fn strip_prefix_and_slash<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let after = path.strip_prefix(prefix)?;
    Some(after.strip_prefix('/').unwrap_or(after))
}

fn walk(index: &EntryIndex, base: CurrentPath, rest: &str) -> Resolution {
    let rest = rest.trim_matches('/');
    if rest.is_empty() {
        return Resolution::Found(base);
    }

    let mut path = base;
    for segment in rest.split('/') {
        if !index.has_child(&path, segment) {
            debug!("no `{}` below `{}`", segment, path);
            return Resolution::NotFound;
        }
        path = path.join(segment);
    }

    Resolution::Found(path)
}
