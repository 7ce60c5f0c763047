use crate::{Fragment, Identity, NamedTree};
use std::collections::BTreeMap;

/// Tree distances from every [Identity] of one [NamedTree] to the [Fragment]s of
/// another tree, keyed by the fragments' textual form, texts included.
///
/// The matrix is asymmetric: it is built once per direction and rows belong to
/// identities while columns belong to fragments. Building it takes
/// `O(F_A × F_B × L²)` for `F` fragments of up to `L` nodes each.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CostMatrix {
    rows: BTreeMap<Identity, BTreeMap<String, f64>>,
}

impl CostMatrix {
    /// Computes the distance of every identity of `source` to every fragment of
    /// `targets`.
    pub fn new<'a, I>(source: &NamedTree, targets: I) -> Self
    where
        I: IntoIterator<Item = &'a Fragment>,
        I::IntoIter: Clone,
    {
        let targets = targets.into_iter();

        let rows = source
            .iter()
            .map(|(id, entry)| {
                let row = targets
                    .clone()
                    .map(|t| (t.to_string(), entry.fragment.distance(t)))
                    .collect();

                (id, row)
            })
            .collect();

        CostMatrix { rows }
    }

    /// The distance of `id` to `fragment`, if both were part of the computation.
    pub fn get(&self, id: Identity, fragment: &Fragment) -> Option<f64> {
        self.rows.get(&id)?.get(&fragment.to_string()).copied()
    }

    /// All distances computed for `id`.
    pub fn row(&self, id: Identity) -> Option<&BTreeMap<String, f64>> {
        self.rows.get(&id)
    }

    /// Iterates over the rows in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (Identity, &BTreeMap<String, f64>)> {
        self.rows.iter().map(|(&id, row)| (id, row))
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fragments, MockElement, Mode, Node};
    use test_strategy::proptest;

    fn named(tree: &[Node], prefix: char) -> NamedTree {
        NamedTree::new(fragments(tree).unwrap(), prefix)
    }

    #[test]
    fn every_identity_is_measured_against_every_fragment() {
        let a = [2, 1, 0].map(|d| Node::element(Some("p"), "x", d));
        let b = [
            Node::element(Some("p"), "x", 1),
            Node::element(Some("p"), "y", 0),
        ];

        let (a, b) = (named(&a, 'A'), named(&b, 'B'));
        let costs = CostMatrix::new(&a, b.fragments());

        assert_eq!(costs.len(), 3);
        for (id, row) in costs.iter() {
            assert_eq!(id.prefix(), 'A');
            assert_eq!(row.len(), 2);
        }

        let mut fragments = b.fragments();
        let (x, y) = (fragments.next().unwrap(), fragments.next().unwrap());
        assert_eq!(costs.get(Identity::new('A', 0), x), Some(0.0));
        assert_eq!(costs.get(Identity::new('A', 0), y), Some(1.0));
        assert_eq!(costs.get(Identity::new('B', 0), x), None);
    }

    #[test]
    fn equal_fragments_share_a_column() {
        let a = named(&[Node::element(None, "a", 0)], 'A');
        let f = Fragment::from(vec![Node::element(None, "a", 0)]);
        let b = NamedTree::new(vec![f.clone(), f], 'B');

        let costs = CostMatrix::new(&a, b.fragments());
        assert_eq!(costs.row(Identity::new('A', 0)).map(BTreeMap::len), Some(1));
    }

    #[test]
    fn fragments_differing_in_text_get_their_own_columns() {
        let a = named(&[Node::element(None, "a", 0).with_text("")], 'A');
        let f = |text: &str| Fragment::from(vec![Node::element(None, "a", 0).with_text(text)]);
        let b = NamedTree::new(vec![f("x"), f("y")], 'B');

        let costs = CostMatrix::new(&a, b.fragments());
        assert_eq!(costs.row(Identity::new('A', 0)).map(BTreeMap::len), Some(2));
        assert_eq!(costs.get(Identity::new('A', 0), &f("y")), Some(0.0));
    }

    #[proptest]
    fn a_tree_is_at_distance_zero_of_itself(e: MockElement) {
        let tree = e.linearize(Mode::LabelOnly);
        let (a, b) = (named(&tree, 'A'), named(&tree, 'B'));
        let costs = CostMatrix::new(&a, b.fragments());

        for (id, entry) in a.iter() {
            assert_eq!(costs.get(id, &entry.fragment), Some(0.0));
        }
    }
}
