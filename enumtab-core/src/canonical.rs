//! Canonicalization: the three orderings of an enum's entries and the
//! value-deduplicated view the value search table is built from.

use crate::entry::{EnumEntry, RawEntry};
use crate::hash::str_eq;
use crate::sort::{sort_by_name, sort_by_value};

/// Upper bound on the number of enumerators, so every index fits a `u16`.
pub const MAX_ENTRIES: usize = u16::MAX as usize;

/// What to do when two enumerators share a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Keep them all; the value table resolves the value to the
    /// enumerator declared first.
    #[default]
    FirstDeclared,
    /// Abort constant evaluation.
    Reject,
}

/// Number of entries in `raw`, checked against [`MAX_ENTRIES`].
///
/// # Panics
///
/// If `raw` holds more than [`MAX_ENTRIES`] entries (a compile error in
/// const context).
pub const fn checked_len(raw: &[RawEntry]) -> usize {
    assert!(
        raw.len() <= MAX_ENTRIES,
        "enum has more than 65535 enumerators"
    );
    raw.len()
}

/// Whether `name` can be written between JSON quotes as is: no `"`, no
/// `\` and no ASCII control characters.
const fn is_json_safe(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'"' || b == b'\\' || b < 0x20 || b == 0x7f {
            return false;
        }
        i += 1;
    }
    true
}

/// An enum's entries under every [`Order`](crate::Order), with each entry
/// aware of its index in all three.
#[derive(Clone, Copy, Debug)]
pub struct Canonical<const N: usize> {
    /// Declaration order
    pub original: [EnumEntry; N],
    /// Stable ascending value order
    pub by_value: [EnumEntry; N],
    /// Byte-wise name order
    pub by_name: [EnumEntry; N],
}

impl<const N: usize> Canonical<N> {
    /// Canonicalizes `raw`, which must hold exactly `N` entries.
    ///
    /// # Panics
    ///
    /// On an empty name, a name containing `"`, `\` or a control character,
    /// a duplicate name, more than [`MAX_ENTRIES`]
    /// entries, or a duplicate value under [`DuplicatePolicy::Reject`].
    pub const fn new(raw: &[RawEntry], policy: DuplicatePolicy) -> Self {
        assert!(raw.len() == N, "entry count does not match the table size");
        assert!(N <= MAX_ENTRIES, "enum has more than 65535 enumerators");

        let mut original = [EnumEntry::EMPTY; N];
        let mut i = 0;
        while i < N {
            assert!(!raw[i].name.is_empty(), "enumerator names must not be empty");
            assert!(
                is_json_safe(raw[i].name),
                "enumerator names must not contain '\"', '\\' or control characters"
            );
            original[i] = EnumEntry {
                value: raw[i].value,
                name: raw[i].name,
                index_original: i as u16,
                index_by_value: 0,
                index_by_name: 0,
            };
            i += 1;
        }

        let mut by_value = sort_by_value(original);
        let mut by_name = sort_by_name(original);

        let mut k = 0;
        while k < N {
            original[by_value[k].index_original as usize].index_by_value = k as u16;
            original[by_name[k].index_original as usize].index_by_name = k as u16;
            k += 1;
        }

        // refresh the sorted copies so all three orderings carry every index
        let mut k = 0;
        while k < N {
            by_value[k] = original[by_value[k].index_original as usize];
            by_name[k] = original[by_name[k].index_original as usize];
            k += 1;
        }

        let mut k = 1;
        while k < N {
            assert!(
                !str_eq(by_name[k - 1].name, by_name[k].name),
                "duplicate enumerator name"
            );
            if matches!(policy, DuplicatePolicy::Reject) {
                assert!(
                    by_value[k - 1].value != by_value[k].value,
                    "duplicate enumerator value rejected by DuplicatePolicy::Reject"
                );
            }
            k += 1;
        }

        Self {
            original,
            by_value,
            by_name,
        }
    }

    /// Number of distinct values.
    pub const fn unique_value_count(&self) -> usize {
        let mut count = 0;
        let mut k = 0;
        while k < N {
            if k == 0 || self.by_value[k - 1].value != self.by_value[k].value {
                count += 1;
            }
            k += 1;
        }
        count
    }

    /// The value-sorted entries with one representative per value: the
    /// enumerator declared first.
    ///
    /// `M` must equal [`unique_value_count`](Self::unique_value_count).
    pub const fn dedup_by_value<const M: usize>(&self) -> [EnumEntry; M] {
        assert!(
            M == self.unique_value_count(),
            "deduplicated table size does not match the distinct value count"
        );
        let mut out = [EnumEntry::EMPTY; M];
        let mut written = 0;
        let mut k = 0;
        while k < N {
            let current = self.by_value[k];
            if k > 0 && self.by_value[k - 1].value == current.value {
                if current.index_original < out[written - 1].index_original {
                    out[written - 1] = current;
                }
            } else {
                out[written] = current;
                written += 1;
            }
            k += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Order;

    const RAW: &[RawEntry] = &[
        RawEntry::new("GREEN", 1),
        RawEntry::new("RED", 0),
        RawEntry::new("LIME", 1),
        RawEntry::new("BLUE", 2),
    ];

    #[test]
    fn orderings_agree_on_indices() {
        const C: Canonical<4> = Canonical::new(RAW, DuplicatePolicy::FirstDeclared);

        let names = |entries: &[EnumEntry]| entries.iter().map(|e| e.name).collect::<Vec<_>>();
        assert_eq!(names(&C.original), ["GREEN", "RED", "LIME", "BLUE"]);
        assert_eq!(names(&C.by_value), ["RED", "GREEN", "LIME", "BLUE"]);
        assert_eq!(names(&C.by_name), ["BLUE", "GREEN", "LIME", "RED"]);

        for order in Order::ALL {
            let view = match order {
                Order::Original => &C.original,
                Order::ByValue => &C.by_value,
                Order::ByName => &C.by_name,
            };
            for (position, entry) in view.iter().enumerate() {
                assert_eq!(entry.index(order), position, "{order:?} {}", entry.name);
                assert_eq!(C.original[entry.index_original as usize], *entry);
            }
        }
    }

    #[test]
    fn first_declared_wins_on_duplicate_values() {
        const C: Canonical<4> = Canonical::new(RAW, DuplicatePolicy::FirstDeclared);
        const UNIQUE: usize = C.unique_value_count();
        const DEDUP: [EnumEntry; UNIQUE] = C.dedup_by_value();

        assert_eq!(UNIQUE, 3);
        let pairs: Vec<_> = DEDUP.iter().map(|e| (e.name, e.value)).collect();
        assert_eq!(pairs, [("RED", 0), ("GREEN", 1), ("BLUE", 2)]);
    }

    #[test]
    fn empty_input_is_fine() {
        const C: Canonical<0> = Canonical::new(&[], DuplicatePolicy::Reject);
        assert_eq!(C.unique_value_count(), 0);
        assert_eq!(C.dedup_by_value::<0>(), []);
    }

    #[test]
    #[should_panic(expected = "rejected by DuplicatePolicy::Reject")]
    fn reject_policy_refuses_shared_values() {
        Canonical::<4>::new(RAW, DuplicatePolicy::Reject);
    }

    #[test]
    #[should_panic(expected = "duplicate enumerator name")]
    fn duplicate_names_are_refused() {
        Canonical::<2>::new(
            &[RawEntry::new("A", 0), RawEntry::new("A", 1)],
            DuplicatePolicy::FirstDeclared,
        );
    }

    #[test]
    #[should_panic(expected = "must not contain")]
    fn names_must_render_unescaped() {
        Canonical::<2>::new(
            &[RawEntry::new("SAY_\"HI\"", 0), RawEntry::new("BYE", 1)],
            DuplicatePolicy::FirstDeclared,
        );
    }

    #[test]
    fn json_safety() {
        assert!(is_json_safe("GREEN"));
        assert!(is_json_safe("Grün"));
        assert!(!is_json_safe("A\\B"));
        assert!(!is_json_safe("\0"));
        assert!(!is_json_safe("TAB\t"));
        assert!(!is_json_safe("DEL\u{7f}"));
    }

    #[test]
    fn checked_len_counts_entries() {
        assert_eq!(checked_len(RAW), 4);
        assert_eq!(checked_len(&vec![RawEntry::new("A", 0); MAX_ENTRIES]), MAX_ENTRIES);
    }

    #[test]
    #[should_panic(expected = "more than 65535")]
    fn checked_len_refuses_oversized_enums() {
        checked_len(&vec![RawEntry::new("A", 0); MAX_ENTRIES + 1]);
    }
}
