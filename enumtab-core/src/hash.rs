//! The 64-bit multiplicative string hash used for name tables and type hashes.

/// Multiplier of [`bkdr_hash`].
pub const BKDR_SEED: u64 = 131;

/// Hashes `bytes` as `h = h * 131 + byte`, starting from zero and wrapping on overflow.
///
/// The empty input hashes to zero, as do runs of NUL bytes and a few
/// wrapping names such as `PRIOPVKTPOSMPUJLQJ`. Zero doubles as the
/// empty-slot sentinel in [`NameHashTable`](crate::NameHashTable).
///
/// ```
/// use enumtab_core::bkdr_hash;
///
/// assert_eq!(bkdr_hash(b""), 0);
/// assert_eq!(bkdr_hash(b"A"), 65);
/// assert_eq!(bkdr_hash(b"AB"), 65 * 131 + 66);
/// ```
#[inline]
pub const fn bkdr_hash(bytes: &[u8]) -> u64 {
    let mut hash = 0u64;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(BKDR_SEED).wrapping_add(bytes[i] as u64);
        i += 1;
    }
    hash
}

/// [`bkdr_hash`] over the UTF-8 bytes of `s`.
#[inline]
pub const fn bkdr_hash_str(s: &str) -> u64 {
    bkdr_hash(s.as_bytes())
}

/// Byte-wise string equality usable in const context.
pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Byte-wise lexicographic `a < b`, usable in const context.
pub(crate) const fn str_lt(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() < b.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_base_131() {
        assert_eq!(bkdr_hash_str("RED"), (82 * 131 + 69) * 131 + 68);
        assert_eq!(bkdr_hash_str("\0"), 0);
        assert_eq!(bkdr_hash_str("PRIOPVKTPOSMPUJLQJ"), 0);
    }

    #[test]
    fn hash_wraps_instead_of_overflowing() {
        let long = [b'Z'; 64];
        let expected = long
            .iter()
            .fold(0u64, |h, &b| h.wrapping_mul(131).wrapping_add(u64::from(b)));
        assert_eq!(bkdr_hash(&long), expected);
    }

    #[test]
    fn multibyte_names_can_collide() {
        // 'A' 0xC2 0xA9 and 'B' '@' '&' land on the same sum of powers of 131.
        assert_eq!(bkdr_hash_str("A©"), bkdr_hash_str("B@&"));
    }

    #[test]
    fn const_string_comparisons() {
        assert!(str_eq("GREEN", "GREEN"));
        assert!(!str_eq("GREEN", "GREEd"));
        assert!(!str_eq("GREEN", "GREENS"));
        assert!(str_lt("BLUE", "GREEN"));
        assert!(str_lt("RED", "REDDISH"));
        assert!(!str_lt("RED", "RED"));
        assert!(str_lt("Zebra", "apple"));
    }
}
