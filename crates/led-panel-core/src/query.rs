//! Request target helpers.

/// Split a request target into its path and optional query string.
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

/// Find the raw value of `name` in an `a=1&b=2` query string.
///
/// The first occurrence wins. A key without `=` yields an empty value.
/// Keys are compared raw and the value is returned undecoded.
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Decode a raw query value: `%XX` escapes and `+` as space.
///
/// A `%` not followed by two hex digits is kept as is.
pub fn percent_decode(value: &str) -> PercentDecode<'_> {
    PercentDecode {
        bytes: value.as_bytes(),
    }
}

/// Byte iterator returned by [`percent_decode`].
#[derive(Debug, Clone)]
pub struct PercentDecode<'a> {
    bytes: &'a [u8],
}

impl Iterator for PercentDecode<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let (&first, rest) = self.bytes.split_first()?;
        self.bytes = rest;
        match first {
            b'+' => Some(b' '),
            b'%' => match (rest.first().and_then(hex_value), rest.get(1).and_then(hex_value)) {
                (Some(high), Some(low)) => {
                    self.bytes = &rest[2..];
                    Some((high << 4) | low)
                }
                _ => Some(b'%'),
            },
            byte => Some(byte),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn hex_value(byte: &u8) -> Option<u8> {
    char::from(*byte).to_digit(16).map(|digit| digit as u8)
}

/// Parse the leading integer of `value`, returning 0 when there is none.
///
/// Leading spaces and one sign character are accepted, parsing stops at the
/// first non-digit, and out of range values saturate. `"12abc"` is 12,
/// `"abc"` and `""` are 0.
pub fn parse_int_lenient(value: &str) -> i32 {
    parse_leading_int(value.bytes())
}

fn parse_leading_int(bytes: impl Iterator<Item = u8>) -> i32 {
    let mut bytes = bytes.skip_while(u8::is_ascii_whitespace).peekable();
    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut result: i32 = 0;
    for digit in bytes.take_while(u8::is_ascii_digit) {
        let digit = i32::from(digit - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }
    result
}

/// Lenient integer value of a query parameter, 0 when it is missing.
///
/// The value is percent-decoded first, so `%35` reads as 5.
pub fn int_param(query: Option<&str>, name: &str) -> i32 {
    query
        .and_then(|query| query_param(query, name))
        .map_or(0, |value| parse_leading_int(percent_decode(value)))
}
