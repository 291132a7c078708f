//! Path normalization and breadcrumbs.
//!
//! Every path the manager hands to a disk goes through `clean_folder` first:
//! rooted at `/`, no `..`, no empty segments, no trailing separator.

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const ROOT_LABEL: &str = "Root";

/// Normalize user input into a disk path.
///
/// Every `..` substring is removed (a run of dots shrinks to at most one dot,
/// so none survive), empty segments are dropped and a single leading `/` is
/// added. Empty or separator-only input yields `/`.
pub fn clean_folder(input: &str) -> String {
    let stripped = input.replace("..", "");
    let segments: Vec<&str> = stripped.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// `folder` + `/` + `name`, cleaned.
pub fn join_path(folder: &str, name: &str) -> String {
    clean_folder(&format!("{folder}/{name}"))
}

/// Last segment of a path; empty for root.
pub fn basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Hidden entries are those whose last segment starts with `.`.
pub fn is_hidden(path: &str) -> bool {
    basename(path).starts_with('.')
}

/// True when `candidate` is `ancestor` or lies below it, by whole segments:
/// `/foo/bar` is within `/foo`, `/foobar` is not.
pub fn is_within(candidate: &str, ancestor: &str) -> bool {
    if ancestor == "/" {
        return true;
    }
    candidate == ancestor
        || candidate
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub path: String,
    pub label: String,
}

/// Ordered path -> label pairs, serialized as a JSON object in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumbs(Vec<Breadcrumb>);

impl Breadcrumbs {
    /// Remove and return the deepest crumb.
    pub fn pop(&mut self) -> Option<Breadcrumb> {
        self.0.pop()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|c| c.path == path)
            .map(|c| c.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breadcrumb> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, path: impl Into<String>, label: impl Into<String>) {
        self.0.push(Breadcrumb {
            path: path.into(),
            label: label.into(),
        });
    }
}

impl Serialize for Breadcrumbs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for crumb in &self.0 {
            map.serialize_entry(&crumb.path, &crumb.label)?;
        }
        map.end()
    }
}

/// Breadcrumbs for `folder`, starting with the synthetic `/` -> "Root" entry
/// followed by one entry per segment.
pub fn breadcrumbs(folder: &str) -> Breadcrumbs {
    let mut crumbs = Breadcrumbs::default();
    crumbs.push("/", ROOT_LABEL);

    let mut build = String::new();
    for segment in folder.trim_matches('/').split('/').filter(|s| !s.is_empty()) {
        build.push('/');
        build.push_str(segment);
        crumbs.push(build.clone(), segment);
    }
    crumbs
}
