use crate::{tree_distance, Error, Node, Result};
use derive_more::{Deref, From};
use itertools::Itertools;
use std::fmt;

/// A maximal contiguous run of [Node]s sliced from a linearized tree.
///
/// The first node, the fragment's _root_, sits at the minimum depth of the run.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deref, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment(#[deref(forward)] Vec<Node>);

impl Fragment {
    /// The first [Node], if any.
    pub fn root(&self) -> Option<&Node> {
        self.first()
    }

    /// The depth of the [root][Fragment::root], 0 for an empty fragment.
    pub fn base_depth(&self) -> usize {
        self.root().map_or(0, |n| n.depth)
    }

    /// The [tree distance][tree_distance] to another fragment.
    pub fn distance(&self, other: &Fragment) -> f64 {
        tree_distance(self, other)
    }

    /// Consumes the fragment and returns its nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

/// Partitions a linearized tree into [Fragment]s.
///
/// A new fragment starts whenever a node is shallower than the root of the
/// fragment being built, so concatenating the fragments yields the tree back.
/// A well-formed single-rooted tree is therefore a single fragment.
pub fn fragments(tree: &[Node]) -> Result<Vec<Fragment>> {
    let (first, rest) = tree.split_first().ok_or(Error::EmptyTree)?;

    let mut fragments = Vec::new();
    let mut current = vec![first.clone()];
    let mut base = first.depth;

    for node in rest {
        if node.depth >= base {
            current.push(node.clone());
        } else {
            if !current.is_empty() {
                fragments.push(Fragment(current));
            }

            current = vec![node.clone()];
            base = node.depth;
        }
    }

    if !current.is_empty() {
        fragments.push(Fragment(current));
    }

    Ok(fragments)
}
