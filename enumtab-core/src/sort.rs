//! Stable const-evaluable sorts.
//!
//! Closures can't be called in const context, so each key gets its own
//! bottom-up merge sort stamped out by [`const_merge_sort`].

use crate::entry::{EnumEntry, HashEntry};
use crate::hash::str_lt;

/// Defines `const fn $name<const N: usize>(items: [$ty; N]) -> [$ty; N]`,
/// a stable merge sort where `$before` decides whether `$a` sorts strictly
/// before `$b`.
macro_rules! const_merge_sort {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($ty:ty) by |$a:ident, $b:ident| $before:expr) => {
        $(#[$meta])*
        $vis const fn $name<const N: usize>(mut items: [$ty; N]) -> [$ty; N] {
            let mut scratch = items;
            let mut width = 1;
            while width < N {
                let mut lo = 0;
                while lo < N {
                    let mid = if lo + width < N { lo + width } else { N };
                    let hi = if lo + 2 * width < N { lo + 2 * width } else { N };
                    let (mut i, mut j, mut k) = (lo, mid, lo);
                    while k < hi {
                        // ties take from the left run, which keeps the sort stable
                        let take_right = if i >= mid {
                            true
                        } else if j >= hi {
                            false
                        } else {
                            let $a = &items[j];
                            let $b = &items[i];
                            $before
                        };
                        if take_right {
                            scratch[k] = items[j];
                            j += 1;
                        } else {
                            scratch[k] = items[i];
                            i += 1;
                        }
                        k += 1;
                    }
                    lo = hi;
                }
                items = scratch;
                width *= 2;
            }
            items
        }
    };
}

const_merge_sort! {
    /// Sorts entries by value, keeping declaration order among equal values.
    pub(crate) fn sort_by_value(EnumEntry) by |a, b| a.value < b.value
}

const_merge_sort! {
    /// Sorts entries by name, byte-wise.
    pub(crate) fn sort_by_name(EnumEntry) by |a, b| str_lt(a.name, b.name)
}

const_merge_sort! {
    /// Sorts hashed entries by name hash, keeping declaration order among equal hashes.
    pub(crate) fn sort_by_hash(HashEntry) by |a, b| a.name_hash < b.name_hash
}

const_merge_sort! {
    pub(crate) fn sort_u64(u64) by |a, b| *a < *b
}
