use crate::tracing_macros::{debug, trace};
use crate::{
    fragments, word_distance, Config, CostMatrix, Edit, Error, Fragment, Mode, NamedTree, Node,
    Result,
};

/// Everything computed while comparing two linearized trees.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// The named fragments of the source tree.
    pub source: NamedTree,

    /// The named fragments of the target tree.
    pub target: NamedTree,

    /// Distances from the source identities to the target fragments.
    pub source_costs: CostMatrix,

    /// Distances from the target identities to the source fragments.
    pub target_costs: CostMatrix,

    /// The edit script turning the source into the target.
    pub edits: Vec<Edit>,
}

/// Compares two linearized trees.
///
/// Both trees are partitioned into fragments and named, cost matrices are
/// computed in both directions, and the edit script is derived with
/// [edit_script]. The cost matrices are diagnostics only, they do not take part
/// in deriving the edit script.
pub fn compare(source: &[Node], target: &[Node], config: &Config) -> Result<Comparison> {
    config.mode.validate(source)?;
    config.mode.validate(target)?;

    let source = NamedTree::new(fragments(source)?, config.source_prefix);
    let target = NamedTree::new(fragments(target)?, config.target_prefix);
    debug!(source = source.len(), target = target.len(), "named fragments");

    let source_costs = CostMatrix::new(&source, target.fragments());
    let target_costs = CostMatrix::new(&target, source.fragments());

    let edits = edit_script(&source, &target, config.mode)?;
    debug!(edits = edits.len(), mode = %config.mode, "derived edit script");

    Ok(Comparison {
        source,
        target,
        source_costs,
        target_costs,
        edits,
    })
}

/// Finds the sequence of [Edit]s that turns one linearized tree into the other.
///
/// See [compare] for the intermediate results.
pub fn diff(source: &[Node], target: &[Node], config: &Config) -> Result<Vec<Edit>> {
    Ok(compare(source, target, config)?.edits)
}

/// Derives an edit script from two [NamedTree]s.
///
/// Both trees are [flattened][NamedTree::flatten] first. Source fragments that
/// appear nowhere in the target are deleted, then target fragments that appear
/// nowhere in the source are inserted. A target fragment that does appear in
/// the source is compared with the source fragment at the same flattened
/// position and updated if their roots' labels differ. In
/// [text-aware][Mode::TextAware] mode the update additionally requires a
/// positive [word distance][word_distance] between the roots' texts.
///
/// Fragments are matched by value, so repeated substructures may match a
/// fragment other than the one at the same place in the document.
pub fn edit_script(source: &NamedTree, target: &NamedTree, mode: Mode) -> Result<Vec<Edit>> {
    let s = flat_fragments(source);
    let t = flat_fragments(target);

    let mut edits = Vec::new();

    for &f in &s {
        if !t.contains(&f) {
            trace!(fragment = %f, "delete");
            edits.push(Edit::Delete(f.clone()));
        }
    }

    for (k, &f) in t.iter().enumerate() {
        if !s.contains(&f) {
            trace!(fragment = %f, "insert");
            edits.push(Edit::Insert(f.clone()));
        } else if let Some(&counterpart) = s.get(k) {
            if differs(counterpart, f, mode)? {
                trace!(source = %counterpart, target = %f, "update");
                edits.push(Edit::Update(counterpart.clone(), f.clone()));
            }
        }
    }

    Ok(edits)
}

fn flat_fragments(tree: &NamedTree) -> Vec<&Fragment> {
    tree.flatten()
        .into_iter()
        .filter_map(|id| tree.get(id))
        .map(|e| &e.fragment)
        .collect()
}

fn differs(a: &Fragment, b: &Fragment, mode: Mode) -> Result<bool> {
    let (Some(x), Some(y)) = (a.root(), b.root()) else {
        return Ok(false);
    };

    if x.label == y.label {
        return Ok(false);
    }

    match mode {
        Mode::LabelOnly => Ok(true),
        Mode::TextAware => {
            let (_, cost) = word_distance(text(x)?, text(y)?);
            Ok(cost > 0)
        }
    }
}

fn text(root: &Node) -> Result<&str> {
    root.text.as_deref().ok_or_else(|| Error::MalformedNode {
        position: 0,
        reason: format!("fragment root `{}` has no text", root.label),
    })
}
