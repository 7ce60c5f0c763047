use crate::Node;
use arrayvec::ArrayVec;
use pathfinding::matrix::Matrix;

/// The cost of turning one [Node] into another.
///
/// Inserting or removing a node, represented by a missing side, costs 1. Nodes
/// with equal labels are interchangeable, anything else costs 1.
pub fn node_distance(a: Option<&Node>, b: Option<&Node>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) if a.label == b.label => 0.0,
        _ => 1.0,
    }
}

/// Aligns two node sequences and returns the cost of the last pair.
///
/// Each cell holds the cheapest of substituting its pair of nodes on its own,
/// removing the source node after the cell above, or inserting the target node
/// after the cell to the left. The first row and column have no predecessor to
/// remove or insert from. Aligning against an empty sequence is infinitely
/// expensive.
pub fn tree_distance(a: &[Node], b: &[Node]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }

    // Only the previous row is ever read, so rows alternate between the two.
    let mut costs = Matrix::new(2, b.len(), 0.0);

    for (i, x) in a.iter().enumerate() {
        let (row, above) = (i % 2, (i + 1) % 2);

        for (j, y) in b.iter().enumerate() {
            let mut candidates = ArrayVec::<f64, 3>::new();
            candidates.push(node_distance(Some(x), Some(y)));

            if i > 0 {
                candidates.push(node_distance(Some(x), None) + costs[(above, j)]);
            }

            if j > 0 {
                candidates.push(node_distance(None, Some(y)) + costs[(row, j - 1)]);
            }

            costs[(row, j)] = candidates.into_iter().fold(f64::INFINITY, f64::min);
        }
    }

    costs[((a.len() - 1) % 2, b.len() - 1)]
}
