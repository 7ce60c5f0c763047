use crate::Fragment;
use derive_more::Display;

/// The symbolic name of a [Fragment] within one [NamedTree].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "{}{}", prefix, index)]
pub struct Identity {
    prefix: char,
    index: usize,
}

impl Identity {
    /// The identity of the fragment at position `index`.
    pub fn new(prefix: char, index: usize) -> Self {
        Identity { prefix, index }
    }

    /// The prefix distinguishing the tree this identity belongs to.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// The position of the fragment in extraction order.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A [Fragment] together with its place in the identity forest.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The enclosing fragment's identity, `None` for roots.
    pub parent: Option<Identity>,

    /// The fragment itself.
    pub fragment: Fragment,

    /// Nested fragments, in extraction order.
    pub children: Vec<Identity>,
}

/// A forest of [Identities][Identity], each owning one [Fragment].
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTree {
    prefix: char,
    entries: Vec<Entry>,
}

impl NamedTree {
    /// Names every fragment `prefix` followed by its position and nests it under
    /// the closest preceding fragment that is still open and strictly shallower.
    ///
    /// A fragment is closed by any later fragment whose base depth is not deeper.
    pub fn new(fragments: Vec<Fragment>, prefix: char) -> Self {
        let mut entries: Vec<Entry> = Vec::with_capacity(fragments.len());
        let mut open: Vec<(usize, usize)> = Vec::new();

        for (index, fragment) in fragments.into_iter().enumerate() {
            let depth = fragment.base_depth();

            while open.last().is_some_and(|&(_, d)| d >= depth) {
                open.pop();
            }

            let identity = Identity::new(prefix, index);
            let parent = open.last().map(|&(i, _)| {
                entries[i].children.push(identity);
                Identity::new(prefix, i)
            });

            entries.push(Entry {
                parent,
                fragment,
                children: Vec::new(),
            });

            open.push((index, depth));
        }

        NamedTree { prefix, entries }
    }

    /// The prefix shared by all identities of this tree.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// The number of identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no identities.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the [Entry] of an identity.
    pub fn get(&self, id: Identity) -> Option<&Entry> {
        if id.prefix == self.prefix {
            self.entries.get(id.index)
        } else {
            None
        }
    }

    /// Iterates over identities and their entries in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (Identity, &Entry)> {
        let prefix = self.prefix;
        (0..).map(move |i| Identity::new(prefix, i)).zip(&self.entries)
    }

    /// The fragments in extraction order.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> + Clone {
        self.entries.iter().map(|e| &e.fragment)
    }

    /// The identities without a parent.
    pub fn roots(&self) -> impl Iterator<Item = Identity> + '_ {
        self.iter().filter(|(_, e)| e.parent.is_none()).map(|(id, _)| id)
    }

    /// Lists every identity in pre-order.
    ///
    /// Roots are taken from a stack, so the last root comes first, while the
    /// children of each identity keep their recorded order.
    pub fn flatten(&self) -> Vec<Identity> {
        let mut flat = Vec::with_capacity(self.len());
        let mut stack: Vec<Identity> = self.roots().collect();

        while let Some(id) = stack.pop() {
            flat.push(id);
            stack.extend(self.entries[id.index].children.iter().rev());
        }

        flat
    }
}
