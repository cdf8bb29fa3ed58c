//! Input masks for the national ID (cédula) and phone fields.
//!
//! Both formatters strip every non-digit, cap the digit count, and regroup
//! the digits with `-`. They never fail and are stable when fed their own
//! output, so they can replace the field value on every keystroke.

/// Maximum number of digits kept for a cédula.
pub const CEDULA_MAX_DIGITS: usize = 11;

/// Digit groups of a formatted cédula (`XXX-XXXXXXXX-X`).
const CEDULA_GROUPS: [usize; 3] = [3, 8, 1];

/// Maximum number of digits kept for a phone number.
pub const TELEFONO_MAX_DIGITS: usize = 10;

/// Digit groups of a formatted phone number (`XXX-XXX-XXXX`).
const TELEFONO_GROUPS: [usize; 3] = [3, 3, 4];

/// Returns the ASCII digits of `input`, in order, up to `limit` of them.
pub fn digits(input: &str, limit: usize) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(limit)
        .collect()
}

/// Splits `digits` into consecutive groups of the given widths and joins the
/// non-empty ones with `-`.
fn group(digits: &str, widths: &[usize]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(widths.len());
    let mut rest = digits;
    for &width in widths {
        if rest.is_empty() {
            break;
        }
        // Digits are ASCII, so byte offsets are char offsets.
        let (head, tail) = rest.split_at(width.min(rest.len()));
        parts.push(head);
        rest = tail;
    }
    parts.join("-")
}

/// Formats a national ID as `XXX-XXXXXXXX-X`, keeping at most 11 digits.
pub fn format_cedula(input: &str) -> String {
    group(&digits(input, CEDULA_MAX_DIGITS), &CEDULA_GROUPS)
}

/// Formats a phone number as `XXX-XXX-XXXX`, keeping at most 10 digits.
pub fn format_telefono(input: &str) -> String {
    group(&digits(input, TELEFONO_MAX_DIGITS), &TELEFONO_GROUPS)
}
