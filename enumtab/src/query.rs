//! Free functions over any [`Enumeration`].

use crate::{Discriminant, EnumEntry, EnumError, Enumeration, Order};

/// Number of enumerators, aliases included.
#[inline]
pub const fn enum_count<E: Enumeration>() -> usize {
    E::TABLES.len()
}

/// Every enumerator under `order`.
#[inline]
pub const fn enum_entries<E: Enumeration>(order: Order) -> &'static [EnumEntry] {
    E::TABLES.entries(order)
}

/// Every enumerator name under `order`.
pub fn enum_names<E: Enumeration>(
    order: Order,
) -> impl ExactSizeIterator<Item = &'static str> {
    E::TABLES.names(order)
}

/// Every enumerator under `order`, as variants.
///
/// An alias yields the variant it aliases, so a variant with aliases shows
/// up more than once.
pub fn enum_values<E: Enumeration>(order: Order) -> impl Iterator<Item = E> {
    E::TABLES
        .entries(order)
        .iter()
        .filter_map(|entry| E::from_index(entry.index_original as usize))
}

/// Every enumerator value under `order`.
pub fn enum_discriminants<E: Enumeration>(
    order: Order,
) -> impl ExactSizeIterator<Item = i128> {
    E::TABLES.values(order)
}

fn entry_of<E: Enumeration>(value: &E) -> Option<&'static EnumEntry> {
    E::TABLES.find_value(value.discriminant())
}

/// The name of `value`. A variant with aliases is named by its own name.
///
/// `None` only when `value`'s discriminant is missing from `E::TABLES`,
/// which a derived impl never allows.
pub fn enum_name<E: Enumeration>(value: &E) -> Option<&'static str> {
    entry_of(value).map(|entry| entry.name)
}

/// Position of `value` in declaration order.
pub fn enum_index<E: Enumeration>(value: &E) -> Option<usize> {
    entry_of(value).map(|entry| entry.index_original as usize)
}

/// The variant holding `value`.
pub fn enum_cast_from_value<E: Enumeration>(value: impl Discriminant) -> Option<E> {
    E::TABLES
        .find_value(value)
        .and_then(|entry| E::from_index(entry.index_original as usize))
}

/// The variant, or alias, called exactly `name`.
pub fn enum_cast_from_name<E: Enumeration>(name: &str) -> Option<E> {
    E::TABLES
        .find_name(name)
        .and_then(|entry| E::from_index(entry.index_original as usize))
}

/// Like [`enum_cast_from_value`], with the reason for a miss.
pub fn enum_try_cast_from_value<E: Enumeration>(value: impl Discriminant) -> Result<E, EnumError> {
    let type_name = E::TABLES.type_name();
    let Some(wide) = value.widen() else {
        return Err(EnumError::Unrepresentable { type_name });
    };
    enum_cast_from_value(wide).ok_or(EnumError::UnknownValue {
        type_name,
        value: wide,
    })
}

/// Like [`enum_cast_from_name`], with the reason for a miss.
pub fn enum_try_cast_from_name<E: Enumeration>(name: &str) -> Result<E, EnumError> {
    enum_cast_from_name(name).ok_or(EnumError::UnknownName {
        type_name: E::TABLES.type_name(),
    })
}

/// Whether some enumerator holds `value`.
#[inline]
pub fn enum_contains_value<E: Enumeration>(value: impl Discriminant) -> bool {
    E::TABLES.contains_value(value)
}

/// Whether some enumerator is called exactly `name`.
#[inline]
pub fn enum_contains_name<E: Enumeration>(name: &str) -> bool {
    E::TABLES.contains_name(name)
}

/// Whether `value` is one of the declared variants.
#[inline]
pub fn enum_contains<E: Enumeration>(value: &E) -> bool {
    E::TABLES.contains_value(value.discriminant())
}

/// `{"NAME":VALUE,...}` under `order`, rendered at compile time.
#[inline]
pub const fn enum_to_json<E: Enumeration>(order: Order) -> &'static str {
    E::TABLES.json(order)
}

/// Stable hash of the enum's name/value pairs.
///
/// Declaration order does not affect it; renaming an enumerator or
/// changing its value does.
#[inline]
pub const fn enum_type_hash<E: Enumeration>() -> u64 {
    E::TABLES.type_hash()
}
