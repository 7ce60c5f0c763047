use crate::{Error, Node, Result};
use derive_more::Display;
use std::str::FromStr;

/// How two [Node]s are compared once their fragments have been matched.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Only labels are compared; [Node::text] is ignored.
    #[default]
    #[display(fmt = "label-only")]
    LabelOnly,

    /// Every node carries its direct text and label changes are confirmed with the
    /// [word distance][crate::word_distance] between texts.
    #[display(fmt = "text-aware")]
    TextAware,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "label-only" | "nierman" => Ok(Mode::LabelOnly),
            "text-aware" | "wagner" => Ok(Mode::TextAware),
            _ => Err(Error::InvalidMode(s.to_owned())),
        }
    }
}

impl Mode {
    /// Checks that every node of `tree` carries the fields this mode relies on.
    pub fn validate(&self, tree: &[Node]) -> Result<()> {
        match self {
            Mode::LabelOnly => Ok(()),
            Mode::TextAware => match tree.iter().position(|n| n.text.is_none()) {
                None => Ok(()),
                Some(position) => Err(Error::MalformedNode {
                    position,
                    reason: format!("`{}` has no text in {self} mode", tree[position].label),
                }),
            },
        }
    }
}

/// Options shared by [linearize][crate::linearize] and [compare][crate::compare].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    /// The comparison mode.
    pub mode: Mode,

    /// Whether attributes are linearized into `(name, value)` nodes.
    pub include_attributes: bool,

    /// Prefix of the [Identities][crate::Identity] assigned to the source tree.
    pub source_prefix: char,

    /// Prefix of the [Identities][crate::Identity] assigned to the target tree.
    pub target_prefix: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::default(),
            include_attributes: true,
            source_prefix: 'A',
            target_prefix: 'B',
        }
    }
}

impl Config {
    /// Sets the comparison mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether attributes are linearized.
    pub fn with_attributes(mut self, include: bool) -> Self {
        self.include_attributes = include;
        self
    }

    /// Sets the identity prefixes of the source and target trees.
    pub fn with_prefixes(mut self, source: char, target: char) -> Self {
        self.source_prefix = source;
        self.target_prefix = target;
        self
    }
}
