use crate::hash::bkdr_hash_str;

/// One declared enumerator, as extracted from the enum declaration.
///
/// This is the input of the table pipeline. The derive macro emits one per
/// variant (plus one per alias), in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawEntry {
    /// Name of the enumerator
    pub name: &'static str,

    /// Value of the enumerator, widened from the underlying integer type
    pub value: i128,
}

impl RawEntry {
    /// Creates a new raw entry
    #[inline]
    pub const fn new(name: &'static str, value: i128) -> Self {
        Self { name, value }
    }
}

/// A canonicalized enumerator, aware of its position under every [`Order`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnumEntry {
    /// Value of the enumerator
    pub value: i128,

    /// Name of the enumerator
    pub name: &'static str,

    /// Position in declaration order
    pub index_original: u16,

    /// Position once all entries are stably sorted by value
    pub index_by_value: u16,

    /// Position once all entries are sorted by name
    pub index_by_name: u16,
}

impl EnumEntry {
    pub(crate) const EMPTY: Self = Self {
        value: 0,
        name: "",
        index_original: 0,
        index_by_value: 0,
        index_by_name: 0,
    };

    /// Position of this entry under `order`.
    #[inline]
    pub const fn index(&self, order: Order) -> usize {
        match order {
            Order::Original => self.index_original as usize,
            Order::ByValue => self.index_by_value as usize,
            Order::ByName => self.index_by_name as usize,
        }
    }
}

/// A name-indexed record: an enumerator together with the hash of its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashEntry {
    /// [`bkdr_hash`](crate::bkdr_hash) of `name`. Zero marks an empty slot.
    pub name_hash: u64,

    /// Value of the enumerator
    pub value: i128,

    /// Name of the enumerator
    pub name: &'static str,

    /// Position of the enumerator in declaration order
    pub index_original: u16,
}

impl HashEntry {
    /// The empty-slot sentinel of a direct hash table.
    pub const EMPTY: Self = Self {
        name_hash: 0,
        value: 0,
        name: "",
        index_original: 0,
    };

    /// Hashes the name of `entry`.
    #[inline]
    pub const fn from_entry(entry: &EnumEntry) -> Self {
        Self {
            name_hash: bkdr_hash_str(entry.name),
            value: entry.value,
            name: entry.name,
            index_original: entry.index_original,
        }
    }

    /// Returns true for the empty-slot sentinel.
    #[inline]
    pub const fn is_empty_slot(&self) -> bool {
        self.name_hash == 0
    }
}

/// Ordering selector for entry views and JSON rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Declaration order
    #[default]
    Original,
    /// Ascending value; enumerators sharing a value keep their declaration order
    ByValue,
    /// Byte-wise lexicographic order of names
    ByName,
}

impl Order {
    /// All orderings, in a fixed order.
    pub const ALL: [Order; 3] = [Order::Original, Order::ByValue, Order::ByName];
}

/// An integer that can be looked up in a value table.
///
/// Every candidate is widened to `i128` before it is compared, so signed
/// and unsigned candidates compare against stored values consistently:
/// `-1i8` never matches a stored `u64::MAX`.
pub trait Discriminant: Copy {
    /// Widens `self` into the table's value domain, or `None` if it cannot be represented.
    fn widen(self) -> Option<i128>;
}

macro_rules! impl_discriminant_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Discriminant for $ty {
                #[inline]
                fn widen(self) -> Option<i128> {
                    Some(self as i128)
                }
            }
        )*
    };
}

impl_discriminant_lossless!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl Discriminant for u128 {
    #[inline]
    fn widen(self) -> Option<i128> {
        i128::try_from(self).ok()
    }
}
