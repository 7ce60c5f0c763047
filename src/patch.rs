use crate::{Edit, Node};

/// Collects the nodes an edit script contributes to the target document.
///
/// Updated and inserted fragments are appended in script order, deletions are
/// skipped. The result is a flat node sequence, see [serialize][crate::serialize]
/// for rebuilding a document out of it.
pub fn patch(edits: &[Edit]) -> Vec<Node> {
    edits
        .iter()
        .filter_map(|e| match e {
            Edit::Update(_, t) | Edit::Insert(t) => Some(t.iter()),
            Edit::Delete(_) => None,
        })
        .flatten()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fragment;

    fn fragment(tag: &str) -> Fragment {
        vec![Node::element(None, tag, 0), Node::terminal(tag, 1)].into()
    }

    #[test]
    fn deletions_contribute_nothing() {
        assert!(patch(&[Edit::Delete(fragment("a"))]).is_empty());
    }

    #[test]
    fn targets_are_appended_in_order() {
        let edits = [
            Edit::Insert(fragment("a")),
            Edit::Delete(fragment("x")),
            Edit::Update(fragment("y"), fragment("b")),
        ];

        let expected: Vec<_> = [fragment("a"), fragment("b")]
            .into_iter()
            .flat_map(Fragment::into_nodes)
            .collect();

        assert_eq!(patch(&edits), expected);
    }
}
