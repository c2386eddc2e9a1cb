use enumtab::{
    EnumTables, Enumeration, NameRoute, Order, Search, ValueRoute, enum_cast_from_name,
    enum_cast_from_value, enum_switch, enum_switch_or, enum_tables,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
enum Sparse {
    A = 1,
    B = 2,
    C = 3,
    D = 7,
    E = 10,
    F = 11,
    G = 12,
    H = 13,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
#[enumtab(value_run_min = 9)]
enum Unsplit {
    A = 1,
    B = 2,
    C = 3,
    D = 7,
    E = 10,
    F = 11,
    G = 12,
    H = 13,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
enum Compass {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
#[enumtab(name_table_min = 1, name_binary_min = 1)]
enum Pair {
    Left,
    Right,
}

#[enumtab_testhelpers::test]
fn longest_run_is_read_directly() {
    let table = Sparse::TABLES.value_table();
    assert!(table.is_segmented());
    assert_eq!(table.continuous_range(), 4..8);

    assert_eq!(Sparse::TABLES.value_route(11), ValueRoute::Continuous { slot: 5 });
    assert_eq!(Sparse::TABLES.value_route(2), ValueRoute::SparseLeft(Search::Linear));
    assert_eq!(Sparse::TABLES.value_route(8), ValueRoute::SparseLeft(Search::Linear));
    assert_eq!(Sparse::TABLES.value_route(50), ValueRoute::SparseRight(Search::Linear));

    for (value, expected) in [(1, Some(Sparse::A)), (7, Some(Sparse::D)), (13, Some(Sparse::H))] {
        assert_eq!(enum_cast_from_value::<Sparse>(value), expected);
    }
    for miss in [0, 4, 8, 9, 14, i64::MIN, i64::MAX] {
        assert_eq!(enum_cast_from_value::<Sparse>(miss), None, "{miss}");
    }
}

#[enumtab_testhelpers::test]
fn short_runs_keep_one_flat_table() {
    assert!(!Unsplit::TABLES.value_table().is_segmented());
    assert_eq!(Unsplit::TABLES.value_route(11), ValueRoute::Flat(Search::Linear));
    assert_eq!(enum_cast_from_value::<Unsplit>(11), Some(Unsplit::F));
    assert_eq!(enum_cast_from_value::<Unsplit>(9), None);
}

#[enumtab_testhelpers::test]
fn names_use_the_direct_table_when_it_fits() {
    let names = Compass::TABLES.name_table();
    assert!(names.has_direct_table());
    assert!(matches!(Compass::TABLES.name_route("West"), NameRoute::Direct { .. }));
    assert_eq!(enum_cast_from_name::<Compass>("West"), Some(Compass::West));
    assert_eq!(enum_cast_from_name::<Compass>("WEST"), None);

    assert!(Pair::TABLES.name_table().has_direct_table());
    assert_eq!(enum_cast_from_name::<Pair>("Right"), Some(Pair::Right));
}

static COLLIDING: &EnumTables = enum_tables! { "Colliding"; "A©" = 1, "B@&" = 2, "C" = 3, "D" = 4 };
static ZERO_HASH: &EnumTables = enum_tables! {
    "ZeroHash"; "PRIOPVKTPOSMPUJLQJ" = 0, "ONE" = 1, "TWO" = 2, "THREE" = 3
};

#[enumtab_testhelpers::test]
fn colliding_names_are_scanned() {
    assert!(COLLIDING.name_table().is_collision_bearing());
    assert!(!COLLIDING.name_table().has_direct_table());
    assert_eq!(COLLIDING.name_route("C"), NameRoute::CollisionScan);
    assert_eq!(COLLIDING.find_name("A©").map(|e| e.value), Some(1));
    assert_eq!(COLLIDING.find_name("B@&").map(|e| e.value), Some(2));
    assert_eq!(COLLIDING.find_name("D").map(|e| e.value), Some(4));
    assert_eq!(COLLIDING.find_name("E"), None);

    assert!(ZERO_HASH.name_table().is_collision_bearing());
    assert_eq!(
        ZERO_HASH.find_name("PRIOPVKTPOSMPUJLQJ").map(|e| e.value),
        Some(0)
    );
    assert_eq!(ZERO_HASH.find_name("TWO").map(|e| e.value), Some(2));
    assert_eq!(ZERO_HASH.find_name("PRIOPVKTPOSMPUJLQ"), None);
}

static LARGE: &EnumTables = enum_tables! {
    "Large";
    "N0" = 0, "N1" = 1, "N2" = 2, "N3" = 3, "N4" = 4, "N5" = 5,
    "N6" = 6, "N7" = 7, "N8" = 8, "N9" = 9, "N10" = 10, "N11" = 11,
    "N12" = 12, "N13" = 13, "N14" = 14, "N15" = 15, "N16" = 16, "N17" = 17,
    "N18" = 18, "N19" = 19, "N20" = 20, "N21" = 21, "N22" = 22, "N23" = 23,
    "N24" = 24, "N25" = 25, "N26" = 26, "N27" = 27, "N28" = 28, "N29" = 29,
    "N30" = 30, "N31" = 31, "N32" = 32, "N33" = 33, "N34" = 34, "N35" = 35,
    "N36" = 36, "N37" = 37, "N38" = 38, "N39" = 39, "N40" = 40, "N41" = 41,
    "N42" = 42, "N43" = 43, "N44" = 44, "N45" = 45, "N46" = 46, "N47" = 47,
    "N48" = 48, "N49" = 49, "N50" = 50, "N51" = 51, "N52" = 52, "N53" = 53,
    "N54" = 54, "N55" = 55, "N56" = 56, "N57" = 57, "N58" = 58, "N59" = 59,
    "N60" = 60, "N61" = 61, "N62" = 62, "N63" = 63, "N64" = 64, "N65" = 65,
    "X" = 1000, "Y" = -5,
};

#[enumtab_testhelpers::test]
fn large_enums_bisect_the_dense_names() {
    assert_eq!(LARGE.len(), 68);
    assert!(!LARGE.name_table().has_direct_table());
    assert!(!LARGE.name_table().is_collision_bearing());
    for entry in LARGE.entries(Order::Original) {
        assert_eq!(LARGE.name_route(entry.name), NameRoute::Dense(Search::Binary));
        assert_eq!(LARGE.find_name(entry.name), Some(entry));
        assert_eq!(LARGE.find_value(entry.value), Some(entry));
    }
    assert_eq!(LARGE.find_name("N66"), None);
    assert_eq!(LARGE.find_name("n1"), None);
    assert_eq!(LARGE.find_value(66), None);
    assert_eq!(LARGE.find_value(-4), None);
}

static SHARED: &EnumTables = enum_tables! { "Shared"; "LIME" = 1, "RED" = 0, "GREEN" = 1 };

#[enumtab_testhelpers::test]
fn first_declared_name_wins_a_shared_value() {
    assert_eq!(SHARED.name_of(1), Some("LIME"));
    assert_eq!(SHARED.find_value(1).map(|e| e.index_original), Some(0));
    assert_eq!(SHARED.find_name("GREEN").map(|e| e.index_original), Some(2));
    assert_eq!(SHARED.value_table().len(), 2);
}

#[enumtab_testhelpers::test]
fn switch_falls_back_to_the_default() {
    let letter = |s: Sparse| format!("{s:?}");
    assert_eq!(enum_switch(12, letter).as_deref(), Some("G"));
    assert_eq!(enum_switch(5, letter), None);
    assert_eq!(enum_switch_or(7, letter, String::from("?")), "D");
    assert_eq!(enum_switch_or(99, letter, String::from("?")), "?");
}
