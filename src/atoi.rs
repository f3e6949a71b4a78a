//! Best-effort text to integer conversion.
//!
//! Mirrors the C `atoi` contract: leading whitespace is skipped, one optional sign is
//! accepted, the longest run of ASCII digits is consumed and anything after it is ignored.
//! Input without digits yields 0. The conversion never fails.

use std::ffi::OsStr;

/// Parse `bytes` as a signed base-10 integer, yielding 0 when no digits are present.
///
/// Out-of-range values saturate at the `i64` bounds and are then truncated to `i32`,
/// which is what `(int)strtol(..)` produces on 64-bit hosts.
pub fn atoi(bytes: &[u8]) -> i32 {
    let start = bytes
        .iter()
        .position(|&b| !is_c_space(b))
        .unwrap_or(bytes.len());
    let mut rest = &bytes[start..];

    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for &b in rest.iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i64::from(b - b'0');
        // Accumulate on the negative side so i64::MIN is reachable without overflow.
        value = value.saturating_mul(10).saturating_sub(digit);
    }

    let value = if negative {
        value
    } else {
        value.checked_neg().unwrap_or(i64::MAX)
    };

    value as i32
}

/// Parse an OS-provided argument. Non-UTF-8 content is scanned byte-wise like any other text.
pub fn atoi_os(arg: &OsStr) -> i32 {
    atoi(arg.as_encoded_bytes())
}

// C `isspace` in the "C" locale
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
