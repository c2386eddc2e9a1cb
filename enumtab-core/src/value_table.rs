//! Value-indexed search with the sparse / continuous / sparse split.

use core::ops::Range;

use crate::entry::EnumEntry;
use crate::search::Search;
use crate::thresholds::Thresholds;

/// Locates the longest run of consecutive values in `entries`, which must be
/// sorted by strictly increasing value.
///
/// Returns `(head, tail)` so that `entries[head..tail]` is the run. Among
/// runs of equal length the leftmost wins. An empty input yields `(0, 0)`.
pub const fn continuous_run(entries: &[EnumEntry]) -> (usize, usize) {
    if entries.is_empty() {
        return (0, 0);
    }
    let (mut best_head, mut best_tail) = (0, 1);
    let mut head = 0;
    let mut i = 1;
    while i < entries.len() {
        let consecutive = match entries[i - 1].value.checked_add(1) {
            Some(next) => next == entries[i].value,
            None => false,
        };
        if !consecutive {
            head = i;
        }
        if i + 1 - head > best_tail - best_head {
            best_head = head;
            best_tail = i + 1;
        }
        i += 1;
    }
    (best_head, best_tail)
}

/// Where a value lookup goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueRoute {
    /// The table has no entries
    Empty,
    /// The run is too short to bother; search the whole table
    Flat(Search),
    /// The value is below the continuous run
    SparseLeft(Search),
    /// The value falls inside the continuous run and is read directly from `slot`
    Continuous {
        /// Index into the table's entries
        slot: usize,
    },
    /// The value is above the continuous run
    SparseRight(Search),
    /// The candidate can't be represented as a table value
    Unrepresentable,
}

/// Value-sorted, value-unique entries plus the bounds of their longest
/// continuous run.
///
/// Invariant: `continuous_head <= continuous_tail <= entries.len()`, and
/// `entries[i].value == entries[i - 1].value + 1` for every `i` in
/// `continuous_head + 1..continuous_tail`.
#[derive(Clone, Copy, Debug)]
pub struct ValueSearchTable {
    entries: &'static [EnumEntry],
    continuous_head: usize,
    continuous_tail: usize,
    run_min: usize,
    binary_min: usize,
}

impl ValueSearchTable {
    /// Builds the table over `entries`.
    ///
    /// # Panics
    ///
    /// If `entries` is not sorted by strictly increasing value.
    pub const fn new(entries: &'static [EnumEntry], thresholds: &Thresholds) -> Self {
        let mut i = 1;
        while i < entries.len() {
            assert!(
                entries[i - 1].value < entries[i].value,
                "value table entries must be sorted and unique"
            );
            i += 1;
        }
        let (continuous_head, continuous_tail) = continuous_run(entries);
        Self {
            entries,
            continuous_head,
            continuous_tail,
            run_min: thresholds.value_run_min,
            binary_min: thresholds.value_binary_min,
        }
    }

    /// The deduplicated entries, ascending by value.
    #[inline]
    pub const fn entries(&self) -> &'static [EnumEntry] {
        self.entries
    }

    /// Number of distinct values.
    #[inline]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index range of the longest continuous run.
    #[inline]
    pub const fn continuous_range(&self) -> Range<usize> {
        self.continuous_head..self.continuous_tail
    }

    /// Whether lookups use the three-segment split.
    #[inline]
    pub const fn is_segmented(&self) -> bool {
        !self.entries.is_empty() && self.continuous_tail - self.continuous_head >= self.run_min
    }

    /// Decides how `value` would be looked up, without looking it up.
    pub fn route(&self, value: i128) -> ValueRoute {
        if self.entries.is_empty() {
            return ValueRoute::Empty;
        }
        if !self.is_segmented() {
            return ValueRoute::Flat(Search::for_len(self.entries.len(), self.binary_min));
        }
        let min = self.entries[self.continuous_head].value;
        let max = self.entries[self.continuous_tail - 1].value;
        if value < min {
            ValueRoute::SparseLeft(Search::for_len(self.continuous_head, self.binary_min))
        } else if value > max {
            ValueRoute::SparseRight(Search::for_len(
                self.entries.len() - self.continuous_tail,
                self.binary_min,
            ))
        } else {
            // value - min < run length, which fits the entry count
            ValueRoute::Continuous {
                slot: self.continuous_head + (value - min) as usize,
            }
        }
    }

    /// Finds the entry holding `value`, following [`route`](Self::route).
    pub fn find(&self, value: i128) -> Option<&'static EnumEntry> {
        self.find_routed(value, self.route(value))
    }

    pub(crate) fn find_routed(&self, value: i128, route: ValueRoute) -> Option<&'static EnumEntry> {
        let entries = self.entries;
        match route {
            ValueRoute::Empty | ValueRoute::Unrepresentable => None,
            ValueRoute::Flat(search) => search.find(entries, value, |e| e.value),
            ValueRoute::SparseLeft(search) => {
                search.find(&entries[..self.continuous_head], value, |e| e.value)
            }
            ValueRoute::Continuous { slot } => Some(&entries[slot]),
            ValueRoute::SparseRight(search) => {
                search.find(&entries[self.continuous_tail..], value, |e| e.value)
            }
        }
    }

    /// Whether some entry holds `value`.
    #[inline]
    pub fn contains(&self, value: i128) -> bool {
        self.find(value).is_some()
    }
}
