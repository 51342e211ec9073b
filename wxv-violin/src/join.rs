//! Keyed reconciliation of rendered items against new data.

use std::collections::HashSet;
use std::hash::Hash;

/// Which keys appear, stay and disappear between two renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinPlan<K> {
    /// New keys, in `next` order
    pub enter: Vec<K>,
    /// Keys present in both, in `next` order
    pub update: Vec<K>,
    /// Keys no longer present, in `previous` order
    pub exit: Vec<K>,
}

impl<K> JoinPlan<K> {
    pub fn is_noop(&self) -> bool {
        self.enter.is_empty() && self.exit.is_empty()
    }
}

/// Split `previous` and `next` key sequences into enter/update/exit sets.
pub fn join<K>(previous: &[K], next: &[K]) -> JoinPlan<K>
where
    K: Clone + Eq + Hash,
{
    let before: HashSet<&K> = previous.iter().collect();
    let after: HashSet<&K> = next.iter().collect();

    let (update, enter): (Vec<K>, Vec<K>) = next.iter().cloned().partition(|k| before.contains(k));
    let exit = previous
        .iter()
        .filter(|k| !after.contains(k))
        .cloned()
        .collect();

    JoinPlan { enter, update, exit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_render_enters_everything() {
        let plan = join(&[], &["Winter", "Summer"]);
        assert_eq!(plan.enter, vec!["Winter", "Summer"]);
        assert!(plan.update.is_empty());
        assert!(plan.exit.is_empty());
    }

    #[test]
    fn test_filter_to_single_season() {
        let all = ["Winter", "Spring", "Summer", "Fall"];
        let plan = join(&all, &["Summer"]);
        assert!(plan.enter.is_empty());
        assert_eq!(plan.update, vec!["Summer"]);
        assert_eq!(plan.exit, vec!["Winter", "Spring", "Fall"]);
    }

    #[test]
    fn test_switch_between_single_seasons() {
        let plan = join(&["Summer"], &["Winter"]);
        assert_eq!(plan.enter, vec!["Winter"]);
        assert_eq!(plan.exit, vec!["Summer"]);
        assert!(!plan.is_noop());
    }

    #[test]
    fn test_same_keys_is_noop() {
        let plan = join(&[1, 2, 3], &[3, 2, 1]);
        assert!(plan.is_noop());
        assert_eq!(plan.update, vec![3, 2, 1]);
    }
}
