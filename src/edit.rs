use crate::Fragment;
use itertools::Itertools;
use std::fmt;

/// A single operation of an edit script.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edit {
    /// Replace the source [Fragment] with the target one.
    Update(Fragment, Fragment),

    /// Remove the source [Fragment].
    Delete(Fragment),

    /// Insert the target [Fragment].
    Insert(Fragment),
}

/// The kind of an [Edit], without its payload.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum EditKind {
    /// See [Edit::Update].
    Update,
    /// See [Edit::Delete].
    Delete,
    /// See [Edit::Insert].
    Insert,
}

impl Edit {
    /// The kind of this operation.
    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Update(..) => EditKind::Update,
            Edit::Delete(_) => EditKind::Delete,
            Edit::Insert(_) => EditKind::Insert,
        }
    }

    /// The fragment taken from the source tree, if any.
    pub fn source(&self) -> Option<&Fragment> {
        match self {
            Edit::Update(s, _) | Edit::Delete(s) => Some(s),
            Edit::Insert(_) => None,
        }
    }

    /// The fragment taken from the target tree, if any.
    pub fn target(&self) -> Option<&Fragment> {
        match self {
            Edit::Update(_, t) | Edit::Insert(t) => Some(t),
            Edit::Delete(_) => None,
        }
    }
}

struct RootLabel<'a>(&'a Fragment);

impl fmt::Display for RootLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.root() {
            Some(n) => write!(f, "{}", n.label),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Update(s, t) => write!(f, "Update: {} -> {}", RootLabel(s), RootLabel(t)),
            Edit::Delete(s) => write!(f, "Delete: {}", RootLabel(s)),
            Edit::Insert(t) => write!(f, "Insert: {}", RootLabel(t)),
        }
    }
}

/// Renders a human readable report with one line per [Edit].
pub fn report(edits: &[Edit]) -> String {
    edits.iter().map(|e| format!("{e}\n")).join("")
}
