//! Compact JSON rendering of an entry set, evaluated in const context.
//!
//! The output is `{"NAME":VALUE,...}` with no whitespace. Names are written
//! verbatim; the derive refuses names that would need escaping.

use crate::entry::EnumEntry;

/// Number of decimal digits in `value`, counting a leading `-`.
pub const fn decimal_len(value: i128) -> usize {
    let mut len = if value < 0 { 2 } else { 1 };
    let mut rest = value.unsigned_abs() / 10;
    while rest > 0 {
        len += 1;
        rest /= 10;
    }
    len
}

/// Writes `value` in decimal into `buf` at `at`, returning the position after it.
const fn write_decimal<const L: usize>(buf: &mut [u8; L], at: usize, value: i128) -> usize {
    let len = decimal_len(value);
    let end = at + len;
    let mut rest = value.unsigned_abs();
    let mut pos = end;
    loop {
        pos -= 1;
        buf[pos] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    if value < 0 {
        buf[at] = b'-';
    }
    end
}

const fn write_bytes<const L: usize>(buf: &mut [u8; L], at: usize, bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() {
        buf[at + i] = bytes[i];
        i += 1;
    }
    at + bytes.len()
}

/// Length in bytes of the JSON rendering of `entries`.
pub const fn json_len(entries: &[EnumEntry]) -> usize {
    // braces
    let mut len = 2;
    let mut i = 0;
    while i < entries.len() {
        if i > 0 {
            len += 1;
        }
        // two quotes and a colon
        len += entries[i].name.len() + 3 + decimal_len(entries[i].value);
        i += 1;
    }
    len
}

/// Renders `entries`, in the order given, as compact JSON.
///
/// # Panics
///
/// If `L` is not [`json_len(entries)`](json_len).
pub const fn write_json<const L: usize>(entries: &[EnumEntry]) -> [u8; L] {
    assert!(L == json_len(entries), "JSON buffer size mismatch");
    let mut buf = [0u8; L];
    let mut at = write_bytes(&mut buf, 0, b"{");
    let mut i = 0;
    while i < entries.len() {
        if i > 0 {
            at = write_bytes(&mut buf, at, b",");
        }
        at = write_bytes(&mut buf, at, b"\"");
        at = write_bytes(&mut buf, at, entries[i].name.as_bytes());
        at = write_bytes(&mut buf, at, b"\":");
        at = write_decimal(&mut buf, at, entries[i].value);
        i += 1;
    }
    at = write_bytes(&mut buf, at, b"}");
    assert!(at == L, "JSON buffer size mismatch");
    buf
}

/// Reinterprets rendered bytes as text.
///
/// # Panics
///
/// If `bytes` is not valid UTF-8, which cannot happen for output of
/// [`write_json`] since names are `&str`.
pub const fn as_str(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => panic!("rendered JSON is not valid UTF-8"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn entry(name: &'static str, value: i128) -> EnumEntry {
        EnumEntry {
            value,
            name,
            ..EnumEntry::EMPTY
        }
    }

    const RGB: [EnumEntry; 3] = [entry("RED", 0), entry("GREEN", 1), entry("BLUE", 2)];

    #[test]
    fn renders_compact_json() {
        const LEN: usize = json_len(&RGB);
        const BYTES: [u8; LEN] = write_json(&RGB);
        assert_eq!(as_str(&BYTES), r#"{"RED":0,"GREEN":1,"BLUE":2}"#);
    }

    #[test]
    fn empty_set_is_an_empty_object() {
        const BYTES: [u8; 2] = write_json(&[]);
        assert_eq!(as_str(&BYTES), "{}");
    }

    #[test]
    fn decimal_edges() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(-1), 2);
        assert_eq!(decimal_len(i128::MIN), 40);
        assert_eq!(decimal_len(i128::MAX), 39);

        const EXTREMES: [EnumEntry; 3] = [
            entry("MIN", i128::MIN),
            entry("NEG", -42),
            entry("MAX", u64::MAX as i128),
        ];
        const LEN: usize = json_len(&EXTREMES);
        const BYTES: [u8; LEN] = write_json(&EXTREMES);
        assert_eq!(
            as_str(&BYTES),
            concat!(
                r#"{"MIN":-170141183460469231731687303715884105728,"#,
                r#""NEG":-42,"MAX":18446744073709551615}"#
            )
        );
    }

    #[test]
    fn non_ascii_names_pass_through() {
        const NAMES: [EnumEntry; 1] = [entry("Grün", 7)];
        const LEN: usize = json_len(&NAMES);
        const BYTES: [u8; LEN] = write_json(&NAMES);
        assert_eq!(as_str(&BYTES), "{\"Grün\":7}");
    }
}
