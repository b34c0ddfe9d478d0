//! Index bookkeeping for consumed neighbours.
//!
//! A reduction pass reads every match against the sequence as it stood when
//! the pass began, so removal has to wait until the scan is over. Each match
//! marks its neighbours here; the pass then drops all marked positions in a
//! single filter.
//!
//! ```text
//! before:  ["2", ">", "1", ">", "0"]
//! marks:   {0, 2} ∪ {2, 4}  = {0, 2, 4}
//! after:   [N(2>1), N(1>0)]
//! ```
//!
//! Two matches that claim the same neighbour mark it twice; it is removed
//! once. Marks outside the sequence are ignored when applied.

use std::collections::BTreeSet;

#[derive(Debug, Default, Clone)]
pub(crate) struct PruneSet {
    marks: BTreeSet<usize>,
}

impl PruneSet {
    pub fn mark(&mut self, position: usize) {
        self.marks.insert(position);
    }

    /// Number of distinct marked positions that fall inside `0..len`.
    pub fn count_within(&self, len: usize) -> usize {
        self.marks.range(..len).count()
    }

    /// Drop every marked position from `items`, keeping order.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        if self.marks.is_empty() {
            return items;
        }
        items.into_iter().enumerate().filter(|(i, _)| !self.marks.contains(i)).map(|(_, item)| item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_marks_remove_once() {
        let mut prune = PruneSet::default();
        for position in [0, 2, 2, 4] {
            prune.mark(position);
        }
        assert_eq!(prune.count_within(5), 3);
        assert_eq!(prune.apply(vec!["2", ">", "1", ">", "0"]), vec![">", ">"]);
    }

    #[test]
    fn marks_past_the_end_are_ignored() {
        let mut prune = PruneSet::default();
        prune.mark(1);
        prune.mark(7);
        assert_eq!(prune.count_within(3), 1);
        assert_eq!(prune.apply(vec!['a', 'b', 'c']), vec!['a', 'c']);
    }

    #[test]
    fn nothing_marked_keeps_everything() {
        let prune = PruneSet::default();
        assert_eq!(prune.apply(vec![1, 2, 3]), vec![1, 2, 3]);
    }
}
