use crate::canonical::DuplicatePolicy;
use crate::entry::{Discriminant, EnumEntry, Order};
use crate::hash::bkdr_hash_str;
use crate::name_table::{NameHashTable, NameRoute};
use crate::thresholds::Thresholds;
use crate::value_table::{ValueRoute, ValueSearchTable};

/// Everything known about one enum type, computed during constant evaluation.
///
/// An `EnumTables` is normally produced by [`enum_tables!`](crate::enum_tables)
/// (which the `Enumeration` derive invokes) and lives in static storage.
/// Lookups on it never allocate and never panic.
#[derive(Clone, Copy, Debug)]
pub struct EnumTables {
    type_name: &'static str,
    original: &'static [EnumEntry],
    by_value: &'static [EnumEntry],
    by_name: &'static [EnumEntry],
    value_table: ValueSearchTable,
    name_table: NameHashTable,
    json: [&'static str; 3],
    type_hash: u64,
    thresholds: Thresholds,
    duplicate_policy: DuplicatePolicy,
}

const EMPTY_VESSEL: EnumTables = EnumTables {
    type_name: "‹unnamed›",
    original: &[],
    by_value: &[],
    by_name: &[],
    value_table: ValueSearchTable::new(&[], &Thresholds::DEFAULT),
    name_table: NameHashTable::new(&[], &[], &Thresholds::DEFAULT),
    json: ["{}", "{}", "{}"],
    type_hash: 0,
    thresholds: Thresholds::DEFAULT,
    duplicate_policy: DuplicatePolicy::FirstDeclared,
};

const fn order_slot(order: Order) -> usize {
    match order {
        Order::Original => 0,
        Order::ByValue => 1,
        Order::ByName => 2,
    }
}

impl EnumTables {
    /// Starts building the tables of the type called `type_name`.
    #[inline]
    pub const fn builder(type_name: &'static str) -> EnumTablesBuilder {
        EnumTablesBuilder::new(type_name)
    }

    /// Name of the enum type, as written in its declaration.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of declared enumerators, aliases included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.original.len()
    }

    /// Whether the enum declares no enumerators.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// All entries under `order`.
    ///
    /// Entries sharing a value all appear here; only the value table
    /// collapses them.
    #[inline]
    pub const fn entries(&self, order: Order) -> &'static [EnumEntry] {
        match order {
            Order::Original => self.original,
            Order::ByValue => self.by_value,
            Order::ByName => self.by_name,
        }
    }

    /// The entry at `index` under `order`.
    #[inline]
    pub const fn entry(&self, order: Order, index: usize) -> Option<&'static EnumEntry> {
        let entries = self.entries(order);
        if index < entries.len() {
            Some(&entries[index])
        } else {
            None
        }
    }

    /// Enumerator names under `order`.
    pub fn names(&self, order: Order) -> impl ExactSizeIterator<Item = &'static str> + use<> {
        self.entries(order).iter().map(|e| e.name)
    }

    /// Enumerator values under `order`, repeats included.
    pub fn values(&self, order: Order) -> impl ExactSizeIterator<Item = i128> + use<> {
        self.entries(order).iter().map(|e| e.value)
    }

    /// Decides how a lookup of `value` would be routed.
    pub fn value_route(&self, value: impl Discriminant) -> ValueRoute {
        match value.widen() {
            Some(value) => self.value_table.route(value),
            None => ValueRoute::Unrepresentable,
        }
    }

    /// Finds the enumerator holding `value`.
    ///
    /// When several enumerators share the value, the one declared first is
    /// returned.
    pub fn find_value(&self, value: impl Discriminant) -> Option<&'static EnumEntry> {
        let Some(value) = value.widen() else {
            trace!(
                type_name = self.type_name,
                "value lookup: candidate is not representable"
            );
            return None;
        };
        let route = self.value_table.route(value);
        let found = self.value_table.find_routed(value, route);
        trace!(
            type_name = self.type_name,
            value = %value,
            route = ?route,
            hit = found.is_some(),
            "value lookup"
        );
        found
    }

    /// Decides how a lookup of `name` would be routed.
    #[inline]
    pub fn name_route(&self, name: &str) -> NameRoute {
        self.name_table.route(name)
    }

    /// Finds the enumerator called exactly `name`.
    pub fn find_name(&self, name: &str) -> Option<&'static EnumEntry> {
        let route = self.name_table.route(name);
        let found = self
            .name_table
            .find_routed(name, bkdr_hash_str(name), route)
            .map(|hit| &self.original[hit.index_original as usize]);
        trace!(
            type_name = self.type_name,
            name,
            route = ?route,
            hit = found.is_some(),
            "name lookup"
        );
        found
    }

    /// Name of the enumerator holding `value`, the first declared one if
    /// several share it.
    #[inline]
    pub fn name_of(&self, value: impl Discriminant) -> Option<&'static str> {
        self.find_value(value).map(|e| e.name)
    }

    /// Whether some enumerator holds `value`.
    #[inline]
    pub fn contains_value(&self, value: impl Discriminant) -> bool {
        self.find_value(value).is_some()
    }

    /// Whether some enumerator is called `name`.
    #[inline]
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_name(name).is_some()
    }

    /// The entries under `order` as compact JSON, e.g. `{"RED":0,"GREEN":1}`.
    #[inline]
    pub const fn json(&self, order: Order) -> &'static str {
        self.json[order_slot(order)]
    }

    /// Stable 64-bit fingerprint of the `(name, value)` set.
    ///
    /// Independent of declaration order; any change to a name, a value or
    /// the set of enumerators changes it.
    #[inline]
    pub const fn type_hash(&self) -> u64 {
        self.type_hash
    }

    /// The value-indexed search structure.
    #[inline]
    pub const fn value_table(&self) -> &ValueSearchTable {
        &self.value_table
    }

    /// The name-indexed search structure.
    #[inline]
    pub const fn name_table(&self) -> &NameHashTable {
        &self.name_table
    }

    /// The thresholds the tables were built with.
    #[inline]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// How enumerators sharing a value were treated.
    #[inline]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }
}

/// Builder for [`EnumTables`], usable in const context.
///
/// ```ignore
/// EnumTables::builder("Color")
///     .orderings(&ORIGINAL, &BY_VALUE, &BY_NAME)
///     .value_table(VALUES)
///     .name_table(NAMES)
///     .json(JSON_ORIGINAL, JSON_BY_VALUE, JSON_BY_NAME)
///     .build()
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EnumTablesBuilder {
    tables: EnumTables,
}

impl EnumTablesBuilder {
    /// Starts building the tables of the type called `type_name`.
    #[inline]
    pub const fn new(type_name: &'static str) -> Self {
        Self {
            tables: EnumTables {
                type_name,
                ..EMPTY_VESSEL
            },
        }
    }

    /// Records the thresholds used to build the search structures.
    #[inline]
    pub const fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.tables.thresholds = thresholds;
        self
    }

    /// Records the duplicate policy the entries were canonicalized under.
    #[inline]
    pub const fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.tables.duplicate_policy = policy;
        self
    }

    /// Sets the three orderings of the entries.
    #[inline]
    pub const fn orderings(
        mut self,
        original: &'static [EnumEntry],
        by_value: &'static [EnumEntry],
        by_name: &'static [EnumEntry],
    ) -> Self {
        self.tables.original = original;
        self.tables.by_value = by_value;
        self.tables.by_name = by_name;
        self
    }

    /// Sets the value search table.
    #[inline]
    pub const fn value_table(mut self, table: ValueSearchTable) -> Self {
        self.tables.value_table = table;
        self
    }

    /// Sets the name hash table.
    #[inline]
    pub const fn name_table(mut self, table: NameHashTable) -> Self {
        self.tables.name_table = table;
        self
    }

    /// Sets the JSON renderings, one per [`Order`].
    #[inline]
    pub const fn json(
        mut self,
        original: &'static str,
        by_value: &'static str,
        by_name: &'static str,
    ) -> Self {
        self.tables.json = [original, by_value, by_name];
        self
    }

    /// Builds the tables, deriving the type hash from the by-name JSON.
    ///
    /// # Panics
    ///
    /// If the parts disagree on the number of entries.
    pub const fn build(self) -> EnumTables {
        let t = self.tables;
        let n = t.original.len();
        assert!(
            t.by_value.len() == n && t.by_name.len() == n,
            "orderings disagree on the entry count"
        );
        assert!(
            t.name_table.len() == n,
            "name table does not cover every enumerator"
        );
        assert!(
            t.value_table.len() <= n && (n == 0 || !t.value_table.is_empty()),
            "value table does not match the entries"
        );
        EnumTables {
            type_hash: bkdr_hash_str(t.json[order_slot(Order::ByName)]),
            ..t
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enum_tables;

    static COLOR: &EnumTables = enum_tables! {
        "Color";
        "RED" = 0,
        "GREEN" = 1,
        "LIME" = 1,
        "BLUE" = 2,
    };

    #[test]
    fn accessors() {
        assert_eq!(COLOR.type_name(), "Color");
        assert_eq!(COLOR.len(), 4);
        assert!(!COLOR.is_empty());
        assert_eq!(
            COLOR.names(Order::ByName).collect::<Vec<_>>(),
            ["BLUE", "GREEN", "LIME", "RED"]
        );
        assert_eq!(COLOR.values(Order::ByValue).collect::<Vec<_>>(), [0, 1, 1, 2]);
        assert_eq!(COLOR.entry(Order::Original, 2).map(|e| e.name), Some("LIME"));
        assert_eq!(COLOR.entry(Order::Original, 4), None);
        assert_eq!(COLOR.value_table().len(), 3);
        assert_eq!(COLOR.duplicate_policy(), DuplicatePolicy::FirstDeclared);
    }

    #[test]
    fn lookups() {
        assert_eq!(COLOR.find_value(1u8).map(|e| e.name), Some("GREEN"));
        assert_eq!(COLOR.find_value(-1i64), None);
        assert_eq!(COLOR.find_value(u128::MAX), None);
        assert_eq!(COLOR.value_route(u128::MAX), ValueRoute::Unrepresentable);
        assert_eq!(COLOR.find_name("LIME").map(|e| (e.value, e.index_original)), Some((1, 2)));
        assert_eq!(COLOR.find_name("lime"), None);
        assert_eq!(COLOR.find_name(""), None);
        assert_eq!(COLOR.name_of(2i32), Some("BLUE"));
        assert!(COLOR.contains_value(0usize));
        assert!(!COLOR.contains_name("YELLOW"));
    }

    #[test]
    fn json_and_hash() {
        assert_eq!(
            COLOR.json(Order::Original),
            r#"{"RED":0,"GREEN":1,"LIME":1,"BLUE":2}"#
        );
        assert_eq!(
            COLOR.json(Order::ByName),
            r#"{"BLUE":2,"GREEN":1,"LIME":1,"RED":0}"#
        );
        assert_eq!(
            COLOR.type_hash(),
            crate::bkdr_hash(br#"{"BLUE":2,"GREEN":1,"LIME":1,"RED":0}"#)
        );
    }

    #[test]
    fn builder_fills_defaults() {
        const EMPTY: EnumTables = EnumTables::builder("Never").build();
        assert_eq!(EMPTY.type_name(), "Never");
        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY.json(Order::ByValue), "{}");
        assert_eq!(EMPTY.type_hash(), crate::bkdr_hash(b"{}"));
        assert_eq!(EMPTY.find_value(0), None);
        assert_eq!(EMPTY.find_name("A"), None);
    }
}
