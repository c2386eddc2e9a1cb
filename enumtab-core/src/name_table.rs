//! Name-indexed search: a dense hash-sorted array, optionally backed by a
//! direct-indexed table sized so that `hash % modulo` is injective.

use crate::entry::{EnumEntry, HashEntry};
use crate::hash::bkdr_hash_str;
use crate::search::Search;
use crate::sort::{sort_by_hash, sort_u64};
use crate::thresholds::Thresholds;

/// Hashes every entry's name and sorts the result by hash.
///
/// Entries sharing a hash keep their declaration order.
pub const fn hash_entries<const N: usize>(entries: &[EnumEntry; N]) -> [HashEntry; N] {
    let mut out = [HashEntry::EMPTY; N];
    let mut i = 0;
    while i < N {
        out[i] = HashEntry::from_entry(&entries[i]);
        i += 1;
    }
    sort_by_hash(out)
}

/// Whether two entries share a hash, or one hashes to the zero sentinel.
///
/// `dense` must be sorted by hash.
pub const fn is_collision_bearing(dense: &[HashEntry]) -> bool {
    if dense.is_empty() {
        return false;
    }
    if dense[0].name_hash == 0 {
        return true;
    }
    let mut i = 1;
    while i < dense.len() {
        if dense[i - 1].name_hash == dense[i].name_hash {
            return true;
        }
        i += 1;
    }
    false
}

/// Whether `hash % modulo` is distinct for every entry.
const fn is_injective<const N: usize>(dense: &[HashEntry; N], modulo: usize) -> bool {
    let mut residues = [0u64; N];
    let mut i = 0;
    while i < N {
        residues[i] = dense[i].name_hash % modulo as u64;
        i += 1;
    }
    let residues = sort_u64(residues);
    let mut i = 1;
    while i < N {
        if residues[i - 1] == residues[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Picks the size of the direct name table, or `0` when none should be built.
///
/// No table is built for collision-bearing entries, or when the entry count
/// falls outside `[name_table_min, name_table_max)`. Otherwise candidate
/// sizes in `[bit_ceil(N), N * inv_min_load_factor]` are tried, powers of two
/// first and then the remaining even numbers, and the first one under which
/// every hash lands in its own slot wins. If none does, no table is built.
pub const fn find_modulo<const N: usize>(dense: &[HashEntry; N], thresholds: &Thresholds) -> usize {
    if N == 0
        || N < thresholds.name_table_min
        || N >= thresholds.name_table_max
        || is_collision_bearing(dense)
    {
        return 0;
    }

    let lower = N.next_power_of_two();
    let upper = N.saturating_mul(thresholds.inv_min_load_factor);

    let mut size = lower;
    while size <= upper {
        if is_injective(dense, size) {
            return size;
        }
        size = match size.checked_mul(2) {
            Some(next) => next,
            None => break,
        };
    }

    let mut size = if lower % 2 == 0 { lower } else { lower + 1 };
    while size <= upper {
        if !size.is_power_of_two() && is_injective(dense, size) {
            return size;
        }
        size = match size.checked_add(2) {
            Some(next) => next,
            None => break,
        };
    }

    0
}

/// Lays `dense` out as a direct table of `M` slots, each entry at `hash % M`.
///
/// `M` must come from [`find_modulo`]; `M == 0` yields an empty table.
pub const fn fill_slots<const M: usize>(dense: &[HashEntry]) -> [HashEntry; M] {
    let mut slots = [HashEntry::EMPTY; M];
    if M == 0 {
        return slots;
    }
    let mut i = 0;
    while i < dense.len() {
        let slot = (dense[i].name_hash % M as u64) as usize;
        assert!(slots[slot].is_empty_slot(), "direct name table slot collision");
        slots[slot] = dense[i];
        i += 1;
    }
    slots
}

/// Where a name lookup goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameRoute {
    /// The empty string is never an enumerator
    Rejected,
    /// Hashes are not unique: bisect on the hash, then scan the equal range
    CollisionScan,
    /// Search the dense hash-sorted array
    Dense(Search),
    /// Read the direct table at `slot`
    Direct {
        /// Slot index, `hash % modulo`
        slot: usize,
    },
}

/// Name lookup structure for one enum.
#[derive(Clone, Copy, Debug)]
pub struct NameHashTable {
    dense: &'static [HashEntry],
    slots: &'static [HashEntry],
    collision_bearing: bool,
    binary_min: usize,
}

impl NameHashTable {
    /// Wraps the hash-sorted `dense` entries and the (possibly empty) direct
    /// table `slots` produced by [`fill_slots`].
    pub const fn new(
        dense: &'static [HashEntry],
        slots: &'static [HashEntry],
        thresholds: &Thresholds,
    ) -> Self {
        let collision_bearing = is_collision_bearing(dense);
        assert!(
            !(collision_bearing && !slots.is_empty()),
            "collision-bearing entries cannot have a direct name table"
        );
        Self {
            dense,
            slots,
            collision_bearing,
            binary_min: thresholds.name_binary_min,
        }
    }

    /// All entries, ascending by name hash.
    #[inline]
    pub const fn dense(&self) -> &'static [HashEntry] {
        self.dense
    }

    /// The direct table, empty when none was built.
    #[inline]
    pub const fn slots(&self) -> &'static [HashEntry] {
        self.slots
    }

    /// Number of slots in the direct table, `0` when none was built.
    #[inline]
    pub const fn modulo(&self) -> usize {
        self.slots.len()
    }

    /// Whether a direct table was built.
    #[inline]
    pub const fn has_direct_table(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Whether two names share a hash, or a name hashes to zero.
    #[inline]
    pub const fn is_collision_bearing(&self) -> bool {
        self.collision_bearing
    }

    /// Number of entries.
    #[inline]
    pub const fn len(&self) -> usize {
        self.dense.len()
    }

    /// Whether there are no entries.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Decides how `name` would be looked up, without looking it up.
    pub fn route(&self, name: &str) -> NameRoute {
        if name.is_empty() {
            return NameRoute::Rejected;
        }
        self.route_hash(bkdr_hash_str(name))
    }

    fn route_hash(&self, hash: u64) -> NameRoute {
        if self.collision_bearing {
            NameRoute::CollisionScan
        } else if self.slots.is_empty() {
            NameRoute::Dense(Search::for_len(self.dense.len(), self.binary_min))
        } else {
            NameRoute::Direct {
                slot: (hash % self.slots.len() as u64) as usize,
            }
        }
    }

    /// Finds the entry named `name`.
    pub fn find(&self, name: &str) -> Option<&'static HashEntry> {
        if name.is_empty() {
            return None;
        }
        let hash = bkdr_hash_str(name);
        self.find_routed(name, hash, self.route_hash(hash))
    }

    pub(crate) fn find_routed(
        &self,
        name: &str,
        hash: u64,
        route: NameRoute,
    ) -> Option<&'static HashEntry> {
        let dense = self.dense;
        match route {
            NameRoute::Rejected => None,
            NameRoute::CollisionScan => {
                let start = dense.partition_point(|e| e.name_hash < hash);
                dense[start..]
                    .iter()
                    .take_while(|e| e.name_hash == hash)
                    .find(|e| e.name == name)
            }
            NameRoute::Dense(search) => search
                .find(dense, hash, |e| e.name_hash)
                .filter(|e| e.name == name),
            NameRoute::Direct { slot } => {
                let entry = &self.slots[slot];
                (entry.name_hash == hash && entry.name == name).then_some(entry)
            }
        }
    }

    /// Whether some entry is named `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}
