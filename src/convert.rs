//! Permissive text to value conversion
//!
//! Token values are read the forgiving way: leading whitespace is skipped,
//! the longest numeric prefix is used, and anything unreadable becomes zero.
//! None of these functions fail.

/// Splits an optional sign off the front of `text`
fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Length of the leading run of ASCII digits
fn digit_run(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Checks if `text` starts (after whitespace and sign) with a digit
pub fn has_integer_prefix(text: &str) -> bool {
    let (_, rest) = split_sign(text.trim_start());
    digit_run(rest) > 0
}

/// Reads the leading integer of `text`, or 0
///
/// Values outside the `i32` range saturate.
pub fn parse_integer(text: &str) -> i32 {
    let (negative, rest) = split_sign(text.trim_start());

    let mut value: i64 = 0;
    for byte in rest.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }
    if negative {
        value = -value;
    }

    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Reads the leading floating point number of `text`, or 0.0
///
/// Accepts `[sign] digits [. digits] [e [sign] digits]`, hexadecimal
/// `0x` numbers with an optional `p` exponent, and `inf`, `infinity` and
/// `nan` in any case.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let (negative, rest) = split_sign(text);

    let lower = rest.get(..8).unwrap_or(rest).to_ascii_lowercase();
    let special = if lower.starts_with("infinity") || lower.starts_with("inf") {
        Some(f64::INFINITY)
    } else if lower.starts_with("nan") {
        Some(f64::NAN)
    } else {
        None
    };
    if let Some(value) = special {
        return if negative { -value } else { value };
    }

    if let Some(value) = parse_hex_float(rest) {
        return if negative { -value } else { value };
    }

    let sign_len = text.len() - rest.len();
    let bytes = rest.as_bytes();

    let int_digits = digit_run(rest);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&rest[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let (_, exponent) = split_sign(&rest[end + 1..]);
        let exp_digits = digit_run(exponent);
        if exp_digits > 0 {
            let exp_sign_len = rest.len() - (end + 1) - exponent.len();
            end += 1 + exp_sign_len + exp_digits;
        }
    }

    text[..sign_len + end].parse().unwrap_or(0.0)
}

/// Reads an unsigned `0x1A`, `0x1.8` or `0x1p4` style number
///
/// Returns `None` unless at least one hex digit follows the prefix, so a
/// bare `0x` falls back to reading the leading `0`.
fn parse_hex_float(text: &str) -> Option<f64> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))?;
    let bytes = digits.as_bytes();

    let mut value = 0.0f64;
    let mut seen = false;
    let mut index = 0;
    while let Some(digit) = bytes.get(index).and_then(|b| (*b as char).to_digit(16)) {
        value = value * 16.0 + f64::from(digit);
        seen = true;
        index += 1;
    }

    if bytes.get(index) == Some(&b'.') {
        index += 1;
        let mut scale = 1.0 / 16.0;
        while let Some(digit) = bytes.get(index).and_then(|b| (*b as char).to_digit(16)) {
            value += f64::from(digit) * scale;
            scale /= 16.0;
            seen = true;
            index += 1;
        }
    }
    if !seen {
        return None;
    }

    if matches!(bytes.get(index), Some(b'p' | b'P')) {
        let (negative, exponent) = split_sign(&digits[index + 1..]);
        let exp_digits = digit_run(exponent);
        if exp_digits > 0 && value != 0.0 {
            let power: i32 = exponent[..exp_digits].parse().unwrap_or(i32::MAX);
            let power = if negative { -power } else { power };
            value *= 2f64.powi(power);
        }
    }

    Some(value)
}

/// Reads `text` as a boolean
///
/// `no` and `false` (any case) are false, as is any text whose leading
/// integer is zero (`0`, `00`, `-0`) and the empty string. Everything else,
/// including non-numeric words such as `yes` or `on`, is true. This differs
/// from a plain "leading integer is non-zero" test, which would make `yes`
/// false.
pub fn parse_bool(text: &str) -> bool {
    if text.eq_ignore_ascii_case("no") || text.eq_ignore_ascii_case("false") {
        return false;
    }

    if text.is_empty() {
        return false;
    }

    if has_integer_prefix(text) {
        return parse_integer(text) != 0;
    }

    true
}
