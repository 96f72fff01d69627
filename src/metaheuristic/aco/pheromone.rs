use decorum::R64;
use num_traits::identities::Zero;
use std::collections::BTreeMap;

/// Intensity an edge reads as before any ant has deposited on it.
pub const DEFAULT_INTENSITY: f64 = 0.1;

/// Shared reinforcement state of one optimization session.
///
/// Keys are unordered node pairs stored in canonical (sorted) order, so the
/// trail between two nodes is one value no matter the travel direction.
/// Pairs appear in the table on first deposit and persist for its lifetime;
/// evaporation only touches pairs that are present, untouched edges keep
/// reading as the neutral default.
#[derive(Debug, Clone)]
pub struct PheromoneTable<IndexType: Ord> {
    levels: BTreeMap<(IndexType, IndexType), R64>,
}

impl<IndexType> PheromoneTable<IndexType>
where
    IndexType: Clone + Ord,
{
    pub fn new() -> Self {
        PheromoneTable {
            levels: BTreeMap::new(),
        }
    }

    fn canonical(a: &IndexType, b: &IndexType) -> (IndexType, IndexType) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    /// Current intensity of the trail between a and b. Never fails.
    pub fn intensity(&self, a: &IndexType, b: &IndexType) -> R64 {
        self.levels
            .get(&Self::canonical(a, b))
            .copied()
            .unwrap_or_else(|| R64::from_inner(DEFAULT_INTENSITY))
    }

    /// Adds amount to the trail between a and b, initializing the pair from
    /// the default intensity if it has never been written. The amount must
    /// be non-negative; callers guard against degenerate walks producing a
    /// non-finite amount before it can reach the table.
    pub fn deposit(&mut self, a: &IndexType, b: &IndexType, amount: R64) {
        debug_assert!(amount >= R64::zero());
        let level = self
            .levels
            .entry(Self::canonical(a, b))
            .or_insert_with(|| R64::from_inner(DEFAULT_INTENSITY));
        *level = *level + amount;
    }

    /// Scales every pair currently present in the table by (1 - rate).
    /// Pairs that were never deposited on stay absent and keep reading as
    /// the default intensity.
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!(rate > 0.0 && rate < 1.0);
        let keep = R64::from_inner(1.0 - rate);
        for level in self.levels.values_mut() {
            *level = *level * keep;
        }
    }

    /// Number of pairs that have been written at least once.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<IndexType: Clone + Ord> Default for PheromoneTable<IndexType> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_pairs_read_as_default() {
        let table: PheromoneTable<char> = PheromoneTable::new();

        assert_eq!(table.intensity(&'A', &'B'), R64::from_inner(0.1));
        assert!(table.is_empty());
    }

    #[test]
    fn deposit_adds_exactly_the_amount() {
        let mut table = PheromoneTable::new();
        table.deposit(&'A', &'B', R64::from_inner(0.5));
        let before = table.intensity(&'A', &'B');

        table.deposit(&'A', &'B', R64::from_inner(0.25));

        assert_eq!(
            table.intensity(&'A', &'B'),
            before + R64::from_inner(0.25)
        );
    }

    #[test]
    fn deposit_initializes_from_the_default() {
        let mut table = PheromoneTable::new();

        table.deposit(&'A', &'B', R64::from_inner(1.0));

        assert_eq!(
            table.intensity(&'A', &'B'),
            R64::from_inner(0.1) + R64::from_inner(1.0)
        );
    }

    #[test]
    fn pairs_are_unordered() {
        let mut table = PheromoneTable::new();

        table.deposit(&'B', &'A', R64::from_inner(1.0));

        assert_eq!(table.intensity(&'A', &'B'), table.intensity(&'B', &'A'));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn evaporate_scales_present_pairs() {
        let mut table = PheromoneTable::new();
        table.deposit(&'A', &'B', R64::from_inner(2.0));
        let before = table.intensity(&'A', &'B');

        table.evaporate(0.05);

        assert_eq!(
            table.intensity(&'A', &'B'),
            before * R64::from_inner(0.95)
        );
    }

    #[test]
    fn evaporate_leaves_absent_pairs_absent() {
        let mut table = PheromoneTable::new();
        table.deposit(&'A', &'B', R64::from_inner(1.0));

        table.evaporate(0.5);

        assert_eq!(table.len(), 1, "Evaporation wrote a new pair.");
        assert_eq!(table.intensity(&'C', &'D'), R64::from_inner(0.1));
    }
}
