use log::warn;
use std::collections::{HashMap, HashSet};

use crate::graph::VertexId;
use crate::{Error, Result};

/// Rebuilds the path from `source` to `target` by walking predecessor links.
///
/// Returns `Ok(None)` when `target` was not reached (no predecessor and not
/// the source itself). The predecessor map must come from a run with the same
/// source: a walk that ends before reaching `source`, or that revisits a
/// vertex, is reported as [`Error::InconsistentPredecessors`].
pub fn reconstruct_path<V: VertexId>(
    predecessors: &HashMap<V, Option<V>>,
    source: &V,
    target: &V,
) -> Result<Option<Vec<V>>> {
    if target == source {
        return Ok(Some(vec![source.clone()]));
    }

    let Some(mut current) = predecessors.get(target).and_then(Option::as_ref) else {
        return Ok(None);
    };

    let inconsistent = || Error::InconsistentPredecessors {
        expected: source.to_string(),
        target: target.to_string(),
    };

    let mut path = vec![target.clone()];
    let mut visited: HashSet<&V> = HashSet::new();
    visited.insert(target);

    // Build path in reverse order
    loop {
        if !visited.insert(current) {
            warn!("Cycle in predecessor map at vertex {}", current);
            return Err(inconsistent());
        }

        path.push(current.clone());
        if current == source {
            break;
        }

        match predecessors.get(current).and_then(Option::as_ref) {
            Some(pred) => current = pred,
            None => {
                warn!(
                    "Predecessor chain from {} ends at {} instead of {}",
                    target, current, source
                );
                return Err(inconsistent());
            }
        }
    }

    path.reverse();
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> HashMap<&'static str, Option<&'static str>> {
        // A -> B -> C, D unreached
        HashMap::from([("A", None), ("B", Some("A")), ("C", Some("B")), ("D", None)])
    }

    #[test]
    fn test_walks_back_to_source() {
        let path = reconstruct_path(&chain(), &"A", &"C").unwrap();
        assert_eq!(path, Some(vec!["A", "B", "C"]));
    }

    #[test]
    fn test_source_to_itself() {
        let path = reconstruct_path(&chain(), &"A", &"A").unwrap();
        assert_eq!(path, Some(vec!["A"]));
    }

    #[test]
    fn test_unreached_target_has_no_path() {
        assert_eq!(reconstruct_path(&chain(), &"A", &"D").unwrap(), None);
        assert_eq!(reconstruct_path(&chain(), &"A", &"Z").unwrap(), None);
    }

    #[test]
    fn test_wrong_source_is_rejected() {
        let result = reconstruct_path(&chain(), &"D", &"C");
        assert!(matches!(result, Err(Error::InconsistentPredecessors { .. })));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let predecessors = HashMap::from([("S", None), ("X", Some("Y")), ("Y", Some("X"))]);
        let result = reconstruct_path(&predecessors, &"S", &"X");
        assert!(matches!(result, Err(Error::InconsistentPredecessors { .. })));
    }
}
