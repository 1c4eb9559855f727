use std::collections::BTreeSet;

/*-------------------------------------------------------------------------------------------------
  Session Accumulator
-------------------------------------------------------------------------------------------------*/

/// An in-memory accumulation of unique values across one or more collection
/// passes. Created empty, grown only through [Session::merge_batch], and
/// consumed once at session end.
///
/// Deduplication is exact-value only; range containment between prefixes is
/// the reducer's concern, never the accumulator's.
#[derive(Clone, Debug)]
pub struct Session<T: Ord> {
    items: BTreeSet<T>,
    last_added: usize,
}

impl<T: Ord> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Session<T> {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            items: BTreeSet::new(),
            last_added: 0,
        }
    }

    /// Merge a batch into the session, keeping only values not already
    /// present. Returns the number of newly added values, which always equals
    /// the growth in [Session::len]: re-merging an identical batch returns 0.
    pub fn merge_batch<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.items.len();
        self.items.extend(batch);
        self.last_added = self.items.len() - before;
        self.last_added
    }

    /// Total count of unique values observed so far. Monotonically
    /// non-decreasing over the session's lifetime.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of values added by the most recent merge.
    pub fn last_added(&self) -> usize {
        self.last_added
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Consume the session, yielding the accumulated values in their natural
    /// order.
    pub fn into_items(self) -> BTreeSet<T> {
        self.items
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_batch_counts_new_values_only() {
        let mut session = Session::new();

        let added = session.merge_batch([1u64, 2, 3]);
        assert_eq!(added, 3);
        assert_eq!(session.len(), 3);

        // Overlapping batch: only the genuinely new value counts
        let added = session.merge_batch([2u64, 3, 4]);
        assert_eq!(added, 1);
        assert_eq!(session.len(), 4);
        assert_eq!(session.last_added(), 1);
    }

    #[test]
    fn test_remerging_identical_batch_adds_zero() {
        let mut session = Session::new();
        session.merge_batch(["a", "b"]);

        let added = session.merge_batch(["a", "b"]);
        assert_eq!(added, 0);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_delta_equals_growth() {
        let mut session = Session::new();
        let batches = vec![vec![1u64, 2], vec![2, 3, 3], vec![], vec![4]];

        for batch in batches {
            let before = session.len();
            let added = session.merge_batch(batch);
            assert_eq!(added, session.len() - before);
        }
    }

    #[test]
    fn test_empty_batch() {
        let mut session: Session<u64> = Session::new();
        assert_eq!(session.merge_batch([]), 0);
        assert!(session.is_empty());
    }

    #[test]
    fn test_into_items_yields_sorted_unique_values() {
        let mut session = Session::new();
        session.merge_batch([30u64, 10]);
        session.merge_batch([20, 10]);

        let items: Vec<u64> = session.into_items().into_iter().collect();
        assert_eq!(items, vec![10, 20, 30]);
    }
}
