const THRESHOLD_VARS: [&str; 6] = [
    "ENUMTAB_VALUE_RUN_MIN",
    "ENUMTAB_VALUE_BINARY_MIN",
    "ENUMTAB_NAME_TABLE_MIN",
    "ENUMTAB_NAME_TABLE_MAX",
    "ENUMTAB_NAME_BINARY_MIN",
    "ENUMTAB_INV_MIN_LOAD_FACTOR",
];

fn main() {
    // `Thresholds::BUILD` reads these through `option_env!`, which cargo
    // doesn't track on its own.
    for var in THRESHOLD_VARS {
        println!("cargo::rerun-if-env-changed={var}");
    }
}
