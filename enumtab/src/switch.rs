//! Dispatching a runtime value to a handler taking the matching variant.

use crate::{Discriminant, Enumeration, enum_cast_from_value};

/// Calls `f` with the variant holding `value`.
///
/// Returns `None` without calling `f` when no variant holds `value`.
/// Handlers returning `()` can ignore the result.
///
/// ```
/// use enumtab::{Enumeration, enum_switch};
///
/// #[derive(Enumeration)]
/// enum Op { Add = 1, Mul = 2 }
///
/// let apply = |op| match op { Op::Add => 3 + 4, Op::Mul => 3 * 4 };
/// assert_eq!(enum_switch(2u8, apply), Some(12));
/// assert_eq!(enum_switch(9u8, apply), None);
/// ```
pub fn enum_switch<E, R, F>(value: impl Discriminant, f: F) -> Option<R>
where
    E: Enumeration,
    F: FnOnce(E) -> R,
{
    enum_cast_from_value(value).map(f)
}

/// Calls `f` with the variant holding `value` and converts its result into
/// `D`, or returns `default` unchanged when no variant holds `value`.
///
/// ```
/// use enumtab::{Enumeration, enum_switch_or};
///
/// #[derive(Enumeration)]
/// enum Unit { Byte = 1, Kib = 1024 }
///
/// let size = |u| match u { Unit::Byte => 1u32, Unit::Kib => 1024u32 };
/// assert_eq!(enum_switch_or(1024, size, -1i64), 1024i64);
/// assert_eq!(enum_switch_or(3, size, -1i64), -1i64);
/// ```
pub fn enum_switch_or<E, R, D, F>(value: impl Discriminant, f: F, default: D) -> D
where
    E: Enumeration,
    F: FnOnce(E) -> R,
    R: Into<D>,
{
    match enum_cast_from_value::<E>(value) {
        Some(variant) => f(variant).into(),
        None => default,
    }
}
