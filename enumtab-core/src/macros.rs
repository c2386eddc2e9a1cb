/// Builds a `&'static EnumTables` from a list of enumerators, entirely in
/// const context.
///
/// The full form is what `#[derive(Enumeration)]` emits:
///
/// ```
/// use enumtab_core::{DuplicatePolicy, EnumTables, RawEntry, Thresholds, enum_tables};
///
/// static TABLES: &EnumTables = enum_tables! {
///     type_name: "Level",
///     thresholds: Thresholds::BUILD,
///     policy: DuplicatePolicy::Reject,
///     entries: [
///         RawEntry::new("Low", 1),
///         RawEntry::new("High", 9),
///     ],
/// };
/// assert_eq!(TABLES.name_of(9u8), Some("High"));
/// ```
///
/// The short forms take `"name" = value` pairs, optionally preceded by
/// thresholds, and keep duplicate values with the first declared winning:
///
/// ```
/// use enumtab_core::{EnumTables, Order, Thresholds, enum_tables};
///
/// static PLAIN: &EnumTables = enum_tables! { "Color"; "RED" = 0, "GREEN" = 1 };
/// static TUNED: &EnumTables = enum_tables! {
///     "Color", Thresholds::DEFAULT.with_name_table_min(1);
///     "RED" = 0, "GREEN" = 1,
/// };
/// assert_eq!(PLAIN.json(Order::Original), r#"{"RED":0,"GREEN":1}"#);
/// assert!(TUNED.name_table().has_direct_table());
/// ```
///
/// Every check fails constant evaluation, so a bad entry list is a compile
/// error. That covers duplicate or empty names, names that `json()` could
/// not render unescaped (`"`, `\` or control characters), the duplicate
/// policy and the 65535 entry bound.
#[macro_export]
macro_rules! enum_tables {
    (
        type_name: $type_name:expr,
        thresholds: $thresholds:expr,
        policy: $policy:expr,
        entries: [$($entry:expr),* $(,)?] $(,)?
    ) => {{
        const RAW: &[$crate::RawEntry] = &[$($entry),*];
        const THRESHOLDS: $crate::Thresholds = $thresholds.validated();
        const POLICY: $crate::DuplicatePolicy = $policy;
        const N: usize = $crate::checked_len(RAW);

        const CANON: $crate::Canonical<N> = $crate::Canonical::new(RAW, POLICY);
        const ORIGINAL: [$crate::EnumEntry; N] = CANON.original;
        const BY_VALUE: [$crate::EnumEntry; N] = CANON.by_value;
        const BY_NAME: [$crate::EnumEntry; N] = CANON.by_name;

        const UNIQUE: usize = CANON.unique_value_count();
        const BY_VALUE_UNIQUE: [$crate::EnumEntry; UNIQUE] = CANON.dedup_by_value();

        const HASHED: [$crate::HashEntry; N] = $crate::hash_entries(&ORIGINAL);
        const MODULO: usize = $crate::find_modulo(&HASHED, &THRESHOLDS);
        const SLOTS: [$crate::HashEntry; MODULO] = $crate::fill_slots(&HASHED);

        const JSON_ORIGINAL_LEN: usize = $crate::text::json_len(&ORIGINAL);
        const JSON_BY_VALUE_LEN: usize = $crate::text::json_len(&BY_VALUE);
        const JSON_BY_NAME_LEN: usize = $crate::text::json_len(&BY_NAME);
        const JSON_ORIGINAL: [u8; JSON_ORIGINAL_LEN] = $crate::text::write_json(&ORIGINAL);
        const JSON_BY_VALUE: [u8; JSON_BY_VALUE_LEN] = $crate::text::write_json(&BY_VALUE);
        const JSON_BY_NAME: [u8; JSON_BY_NAME_LEN] = $crate::text::write_json(&BY_NAME);

        const TABLES: $crate::EnumTables = $crate::EnumTables::builder($type_name)
            .thresholds(THRESHOLDS)
            .duplicate_policy(POLICY)
            .orderings(&ORIGINAL, &BY_VALUE, &BY_NAME)
            .value_table($crate::ValueSearchTable::new(&BY_VALUE_UNIQUE, &THRESHOLDS))
            .name_table($crate::NameHashTable::new(&HASHED, &SLOTS, &THRESHOLDS))
            .json(
                $crate::text::as_str(&JSON_ORIGINAL),
                $crate::text::as_str(&JSON_BY_VALUE),
                $crate::text::as_str(&JSON_BY_NAME),
            )
            .build();
        &TABLES
    }};

    ($type_name:literal; $($name:literal = $value:expr),* $(,)?) => {
        $crate::enum_tables! {
            type_name: $type_name,
            thresholds: $crate::Thresholds::BUILD,
            policy: $crate::DuplicatePolicy::FirstDeclared,
            entries: [$($crate::RawEntry::new($name, $value)),*],
        }
    };

    ($type_name:literal, $thresholds:expr; $($name:literal = $value:expr),* $(,)?) => {
        $crate::enum_tables! {
            type_name: $type_name,
            thresholds: $thresholds,
            policy: $crate::DuplicatePolicy::FirstDeclared,
            entries: [$($crate::RawEntry::new($name, $value)),*],
        }
    };
}
