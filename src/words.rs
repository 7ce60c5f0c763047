use pathfinding::matrix::Matrix;

fn length(word: &str) -> usize {
    word.chars().count()
}

/// Equal words cost 1, different words cost the difference of their lengths.
fn substitution(a: &str, b: &str) -> usize {
    if a == b {
        1
    } else {
        length(a).abs_diff(length(b))
    }
}

/// Computes the word-level edit distance between two texts.
///
/// Texts are split on whitespace. Removing or inserting a word costs its length.
/// Substituting a word for an equal one costs 1, for a different one the
/// difference of their lengths, so identical non-empty texts have a positive
/// distance.
///
/// Returns the full `(M + 1) × (N + 1)` cost matrix together with its bottom-right
/// cell, the total cost.
///
/// # Example
///
/// ```rust
/// use xml_edit_script::word_distance;
///
/// let (_, cost) = word_distance("a b", "a b");
/// assert_eq!(cost, 2);
/// ```
pub fn word_distance(a: &str, b: &str) -> (Matrix<usize>, usize) {
    let a: Vec<_> = a.split_whitespace().collect();
    let b: Vec<_> = b.split_whitespace().collect();
    let (m, n) = (a.len(), b.len());

    let mut dist = Matrix::new(m + 1, n + 1, 0);

    for i in 1..=m {
        dist[(i, 0)] = dist[(i - 1, 0)] + length(a[i - 1]);
    }

    for j in 1..=n {
        dist[(0, j)] = dist[(0, j - 1)] + length(b[j - 1]);
    }

    for i in 1..=m {
        for j in 1..=n {
            dist[(i, j)] = (dist[(i - 1, j - 1)] + substitution(a[i - 1], b[j - 1]))
                .min(dist[(i - 1, j)] + length(a[i - 1]))
                .min(dist[(i, j - 1)] + length(b[j - 1]));
        }
    }

    let cost = dist[(m, n)];
    (dist, cost)
}
