//! Tunable search-strategy thresholds.
//!
//! None of these affect lookup results, only which search a lookup performs
//! and whether a direct name table is built at all.

/// The six knobs governing table construction and lookup dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Thresholds {
    /// Minimum length of the longest continuous value run before the value
    /// table is split into sparse-left / continuous / sparse-right segments.
    pub value_run_min: usize,

    /// Value searches over at least this many entries use binary search.
    pub value_binary_min: usize,

    /// Enums with fewer enumerators never get a direct name table.
    pub name_table_min: usize,

    /// Enums with this many enumerators or more never get a direct name table.
    pub name_table_max: usize,

    /// Dense name searches over at least this many entries use binary search.
    pub name_binary_min: usize,

    /// A direct name table has at most `len * inv_min_load_factor` slots,
    /// i.e. its load factor never drops below `1 / inv_min_load_factor`.
    pub inv_min_load_factor: usize,
}

impl Thresholds {
    /// The documented defaults.
    pub const DEFAULT: Self = Self {
        value_run_min: 4,
        value_binary_min: 12,
        name_table_min: 4,
        name_table_max: 64,
        name_binary_min: 12,
        inv_min_load_factor: 4,
    };

    /// [`Thresholds::DEFAULT`], overridden by the `ENUMTAB_*` environment
    /// variables present when `enumtab-core` was compiled.
    ///
    /// | variable | field |
    /// |---|---|
    /// | `ENUMTAB_VALUE_RUN_MIN` | [`value_run_min`](Self::value_run_min) |
    /// | `ENUMTAB_VALUE_BINARY_MIN` | [`value_binary_min`](Self::value_binary_min) |
    /// | `ENUMTAB_NAME_TABLE_MIN` | [`name_table_min`](Self::name_table_min) |
    /// | `ENUMTAB_NAME_TABLE_MAX` | [`name_table_max`](Self::name_table_max) |
    /// | `ENUMTAB_NAME_BINARY_MIN` | [`name_binary_min`](Self::name_binary_min) |
    /// | `ENUMTAB_INV_MIN_LOAD_FACTOR` | [`inv_min_load_factor`](Self::inv_min_load_factor) |
    ///
    /// Values must be plain decimal integers; anything else aborts compilation.
    pub const BUILD: Self = Self {
        value_run_min: env_or(
            option_env!("ENUMTAB_VALUE_RUN_MIN"),
            Self::DEFAULT.value_run_min,
        ),
        value_binary_min: env_or(
            option_env!("ENUMTAB_VALUE_BINARY_MIN"),
            Self::DEFAULT.value_binary_min,
        ),
        name_table_min: env_or(
            option_env!("ENUMTAB_NAME_TABLE_MIN"),
            Self::DEFAULT.name_table_min,
        ),
        name_table_max: env_or(
            option_env!("ENUMTAB_NAME_TABLE_MAX"),
            Self::DEFAULT.name_table_max,
        ),
        name_binary_min: env_or(
            option_env!("ENUMTAB_NAME_BINARY_MIN"),
            Self::DEFAULT.name_binary_min,
        ),
        inv_min_load_factor: env_or(
            option_env!("ENUMTAB_INV_MIN_LOAD_FACTOR"),
            Self::DEFAULT.inv_min_load_factor,
        ),
    }
    .validated();

    /// Sets [`value_run_min`](Self::value_run_min).
    #[inline]
    pub const fn with_value_run_min(mut self, value: usize) -> Self {
        self.value_run_min = value;
        self
    }

    /// Sets [`value_binary_min`](Self::value_binary_min).
    #[inline]
    pub const fn with_value_binary_min(mut self, value: usize) -> Self {
        self.value_binary_min = value;
        self
    }

    /// Sets [`name_table_min`](Self::name_table_min).
    #[inline]
    pub const fn with_name_table_min(mut self, value: usize) -> Self {
        self.name_table_min = value;
        self
    }

    /// Sets [`name_table_max`](Self::name_table_max).
    #[inline]
    pub const fn with_name_table_max(mut self, value: usize) -> Self {
        self.name_table_max = value;
        self
    }

    /// Sets [`name_binary_min`](Self::name_binary_min).
    #[inline]
    pub const fn with_name_binary_min(mut self, value: usize) -> Self {
        self.name_binary_min = value;
        self
    }

    /// Sets [`inv_min_load_factor`](Self::inv_min_load_factor).
    #[inline]
    pub const fn with_inv_min_load_factor(mut self, value: usize) -> Self {
        self.inv_min_load_factor = value;
        self
    }

    /// Returns `self` after checking its fields are consistent.
    ///
    /// # Panics
    ///
    /// If `inv_min_load_factor` is zero or `name_table_min > name_table_max`.
    /// In const context this is a compile error.
    pub const fn validated(self) -> Self {
        assert!(
            self.inv_min_load_factor >= 1,
            "inv_min_load_factor must be at least 1"
        );
        assert!(
            self.name_table_min <= self.name_table_max,
            "name_table_min must not exceed name_table_max"
        );
        self
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses a build-time environment override, falling back to `default`.
const fn env_or(value: Option<&str>, default: usize) -> usize {
    match value {
        Some(text) => parse_decimal(text),
        None => default,
    }
}

const fn parse_decimal(text: &str) -> usize {
    let bytes = text.as_bytes();
    assert!(!bytes.is_empty(), "ENUMTAB_* threshold overrides must not be empty");
    let mut value: usize = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        assert!(
            digit.is_ascii_digit(),
            "ENUMTAB_* threshold overrides must be decimal integers"
        );
        value = match value.checked_mul(10) {
            Some(v) => match v.checked_add((digit - b'0') as usize) {
                Some(v) => v,
                None => panic!("ENUMTAB_* threshold override overflows usize"),
            },
            None => panic!("ENUMTAB_* threshold override overflows usize"),
        };
        i += 1;
    }
    value
}
