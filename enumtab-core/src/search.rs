/// How a lookup scans a sorted run of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Search {
    /// Front-to-back comparison
    Linear,
    /// Bisection over the sort key
    Binary,
}

impl Search {
    /// Linear below `binary_min` entries, binary from there on.
    #[inline]
    pub const fn for_len(len: usize, binary_min: usize) -> Self {
        if len < binary_min {
            Search::Linear
        } else {
            Search::Binary
        }
    }

    /// Finds the item of `items` (sorted by `key_of`, keys unique) whose key is `key`.
    #[inline]
    pub(crate) fn find<T, K: Ord>(
        self,
        items: &[T],
        key: K,
        key_of: impl Fn(&T) -> K,
    ) -> Option<&T> {
        match self {
            Search::Linear => items.iter().find(|item| key_of(item) == key),
            Search::Binary => items
                .binary_search_by(|item| key_of(item).cmp(&key))
                .ok()
                .map(|index| &items[index]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossover() {
        assert_eq!(Search::for_len(0, 12), Search::Linear);
        assert_eq!(Search::for_len(11, 12), Search::Linear);
        assert_eq!(Search::for_len(12, 12), Search::Binary);
    }

    #[test]
    fn both_strategies_agree() {
        let items = [-5i64, -1, 0, 3, 8, 13, 21];
        for strategy in [Search::Linear, Search::Binary] {
            for &needle in &items {
                assert_eq!(strategy.find(&items, needle, |x| *x), Some(&needle));
            }
            assert_eq!(strategy.find(&items, 4, |x| *x), None);
            assert_eq!(strategy.find(&[], 4, |x: &i64| *x), None);
        }
    }
}
