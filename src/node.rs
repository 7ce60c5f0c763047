use crate::{Error, Result};
use derive_more::Display;
use std::fmt;

/// What a [Node] stands for in the source document.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// An element with the given tag.
    #[display(fmt = "{}", _0)]
    Tag(String),

    /// An attribute of the enclosing element as a `(name, value)` pair.
    #[display(fmt = "@{}={}", _0, _1)]
    Attribute(String, String),

    /// Marks an element that has no child elements.
    #[display(fmt = "0")]
    Terminal,
}

/// One element, attribute or terminal marker of a linearized document.
///
/// Nodes are compared by value: two nodes with identical fields are
/// indistinguishable, so documents with repeated substructures may match
/// ambiguously.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Tag of the enclosing element, `None` for the document root.
    pub parent: Option<String>,

    /// The node's [Label].
    pub label: Label,

    /// Distance from the document root, which sits at depth 0.
    pub depth: usize,

    /// The element's direct text, only present in [text-aware][crate::Mode::TextAware] mode.
    pub text: Option<String>,
}

impl Node {
    /// An element node.
    pub fn element(parent: Option<&str>, tag: impl Into<String>, depth: usize) -> Self {
        Node {
            parent: parent.map(str::to_owned),
            label: Label::Tag(tag.into()),
            depth,
            text: None,
        }
    }

    /// An attribute node of the element tagged `parent`.
    pub fn attribute(
        parent: &str,
        name: impl Into<String>,
        value: impl Into<String>,
        depth: usize,
    ) -> Self {
        Node {
            parent: Some(parent.to_owned()),
            label: Label::Attribute(name.into(), value.into()),
            depth,
            text: None,
        }
    }

    /// The marker appended to an element tagged `parent` that has no children.
    pub fn terminal(parent: &str, depth: usize) -> Self {
        Node {
            parent: Some(parent.to_owned()),
            label: Label::Terminal,
            depth,
            text: None,
        }
    }

    /// Attaches text to this node.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Whether this node is a terminal marker.
    pub fn is_terminal(&self) -> bool {
        self.label == Label::Terminal
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self.parent.as_deref().unwrap_or("0");
        match &self.text {
            None => write!(f, "({}, {}, {})", parent, self.label, self.depth),
            Some(text) => write!(f, "({}, {}, {}, {:?})", parent, self.label, self.depth, text),
        }
    }
}

/// Basic statistics about a linearized tree.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeStats {
    /// The depth of the deepest node.
    pub max_depth: usize,

    /// The number of nodes.
    pub total_nodes: usize,

    /// The number of [terminal][Label::Terminal] markers.
    pub leaf_nodes: usize,
}

/// Computes [TreeStats] over a linearized tree.
pub fn stats(tree: &[Node]) -> Result<TreeStats> {
    let max_depth = tree.iter().map(|n| n.depth).max().ok_or(Error::EmptyTree)?;

    Ok(TreeStats {
        max_depth,
        total_nodes: tree.len(),
        leaf_nodes: tree.iter().filter(|n| n.is_terminal()).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;
    use itertools::Itertools;
    use proptest::{collection::vec, prelude::*};
    use test_strategy::proptest;

    /// An XML element from which well-formed linearized trees are derived.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub(crate) struct MockElement {
        pub(crate) tag: u8,
        pub(crate) attributes: Vec<u8>,
        pub(crate) words: Vec<u8>,
        pub(crate) children: Vec<Self>,
    }

    impl Arbitrary for MockElement {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: ()) -> Self::Strategy {
            let leaf = (0u8..4, vec(0u8..3, ..=2), vec(0u8..4, ..=3)).prop_map(
                |(tag, attributes, words)| MockElement {
                    tag,
                    attributes,
                    words,
                    children: Vec::new(),
                },
            );

            leaf.prop_recursive(4, 32, 4, |inner| {
                (0u8..4, vec(0u8..3, ..=2), vec(0u8..4, ..=3), vec(inner, ..=4)).prop_map(
                    |(tag, attributes, words, children)| MockElement {
                        tag,
                        attributes,
                        words,
                        children,
                    },
                )
            })
            .boxed()
        }
    }

    impl MockElement {
        pub(crate) fn tag(&self) -> String {
            format!("t{}", self.tag)
        }

        pub(crate) fn text(&self) -> String {
            self.words.iter().map(|w| format!("w{w}")).join(" ")
        }

        pub(crate) fn linearize(&self, mode: Mode) -> Vec<Node> {
            let mut nodes = Vec::new();
            self.push(None, 0, mode, &mut nodes);
            nodes
        }

        fn push(&self, parent: Option<&str>, depth: usize, mode: Mode, nodes: &mut Vec<Node>) {
            let tag = self.tag();
            let with_text = |n: Node, text: String| match mode {
                Mode::LabelOnly => n,
                Mode::TextAware => n.with_text(text),
            };

            nodes.push(with_text(Node::element(parent, &tag, depth), self.text()));

            for (i, v) in self.attributes.iter().enumerate() {
                let value = format!("v{v}");
                let node = Node::attribute(&tag, format!("a{i}"), &value, depth + 1);
                nodes.push(with_text(node, value));
            }

            if self.children.is_empty() {
                nodes.push(with_text(Node::terminal(&tag, depth + 1), String::new()));
            }

            for child in &self.children {
                child.push(Some(&tag), depth + 1, mode, nodes);
            }
        }

        pub(crate) fn to_xml(&self) -> String {
            let attributes: String = self
                .attributes
                .iter()
                .enumerate()
                .map(|(i, v)| format!(" a{i}=\"v{v}\""))
                .collect();

            let children: String = self.children.iter().map(Self::to_xml).collect();
            let tag = self.tag();
            format!("<{tag}{attributes}>{}{children}</{tag}>", self.text())
        }

        pub(crate) fn relabel<F: Fn(u8) -> u8>(&self, f: &F) -> Self {
            MockElement {
                tag: f(self.tag),
                attributes: self.attributes.clone(),
                words: self.words.clone(),
                children: self.children.iter().map(|c| c.relabel(f)).collect(),
            }
        }

        fn count(&self) -> usize {
            1 + self.children.iter().map(Self::count).sum::<usize>()
        }

        fn leaves(&self) -> usize {
            match &self.children[..] {
                [] => 1,
                children => children.iter().map(Self::leaves).sum(),
            }
        }
    }

    #[test]
    fn labels_display_like_the_linearizer_writes_them() {
        assert_eq!(Label::Tag("a".into()).to_string(), "a");
        assert_eq!(Label::Attribute("id".into(), "7".into()).to_string(), "@id=7");
        assert_eq!(Label::Terminal.to_string(), "0");
        assert_eq!(Node::element(None, "a", 0).to_string(), "(0, a, 0)");
        assert_eq!(Node::terminal("a", 1).to_string(), "(a, 0, 1)");
        assert_eq!(Node::terminal("a", 1).with_text("").to_string(), "(a, 0, 1, \"\")");
        assert_eq!(
            Node::element(None, "a", 0).with_text("x y").to_string(),
            "(0, a, 0, \"x y\")"
        );
    }

    #[test]
    fn stats_of_an_empty_tree_is_an_error() {
        assert_eq!(stats(&[]), Err(Error::EmptyTree));
    }

    #[test]
    fn stats_count_depth_nodes_and_terminals() {
        let tree = [
            Node::element(None, "a", 0),
            Node::attribute("a", "id", "1", 1),
            Node::element(Some("a"), "b", 1),
            Node::terminal("b", 2),
        ];

        assert_eq!(
            stats(&tree),
            Ok(TreeStats {
                max_depth: 2,
                total_nodes: 4,
                leaf_nodes: 1,
            })
        );
    }

    #[proptest]
    fn every_childless_element_has_one_terminal(e: MockElement) {
        let tree = e.linearize(Mode::LabelOnly);
        let s = stats(&tree).unwrap();
        assert_eq!(s.total_nodes, tree.len());
        assert_eq!(s.leaf_nodes, e.leaves());

        let elements = tree.iter().filter(|n| matches!(n.label, Label::Tag(_)));
        assert_eq!(elements.count(), e.count());
    }

    #[proptest]
    fn depth_increases_by_at_most_one_between_neighbours(e: MockElement) {
        let tree = e.linearize(Mode::LabelOnly);
        assert_eq!(tree[0].depth, 0);
        for (a, b) in tree.iter().tuple_windows() {
            assert!(b.depth <= a.depth + 1);
        }
    }
}

#[cfg(test)]
pub(crate) use tests::MockElement;
