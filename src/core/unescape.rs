//! Escape-sequence decoding for string literals.
//!
//! Turns the raw source text between a string literal's quotes into the
//! value the program would see at runtime. Decoding never fails: malformed
//! or truncated escapes degrade to their longest valid prefix, and lone
//! surrogate escapes become U+FFFD.

const REPLACEMENT: char = '\u{FFFD}';

const HIGH_SURROGATE: std::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATE: std::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Decodes all escape sequences in the raw inner text of a string literal.
///
/// # Examples
///
/// ```
/// use litdup::core::unescape::decode_string;
///
/// assert_eq!(decode_string(r"line\nbreak"), "line\nbreak");
/// assert_eq!(decode_string(r#"He said \"hello\""#), "He said \"hello\"");
/// assert_eq!(decode_string(r"\u0041\x42"), "AB");
/// assert_eq!(decode_string(r"\uD83D\uDE00"), "😀");
/// ```
pub fn decode_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        rest = decode_escape(&rest[pos + 1..], &mut out);
    }
    out.push_str(rest);
    out
}

/// Decodes a single escape sequence whose leading backslash has already been
/// consumed, appends the result to `out`, and returns the unconsumed input.
fn decode_escape<'a>(input: &'a str, out: &mut String) -> &'a str {
    let mut chars = input.chars();
    let Some(c) = chars.next() else {
        // Trailing lone backslash in recovered input decodes to nothing.
        return input;
    };
    let rest = chars.as_str();

    match c {
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        'b' => out.push('\u{0008}'),
        'f' => out.push('\u{000C}'),
        'v' => out.push('\u{000B}'),
        '0' => out.push('\0'),
        'x' => {
            if let Some((code, after)) = take_hex(rest, 2) {
                push_scalar(code, out);
                return after;
            }
            out.push('x');
        }
        'u' => return decode_unicode(rest, out),
        // Line continuations produce nothing.
        '\n' => {}
        '\r' => {
            if let Some(after) = rest.strip_prefix('\n') {
                return after;
            }
        }
        // Identity escape: quotes, backslash, and anything unrecognized.
        other => out.push(other),
    }
    rest
}

/// Handles `\uHHHH` and `\u{...}`, including surrogate-pair combination
/// across two adjacent `\uHHHH` escapes.
fn decode_unicode<'a>(input: &'a str, out: &mut String) -> &'a str {
    if let Some(braced) = input.strip_prefix('{') {
        if let Some(end) = braced.find('}') {
            let digits = &braced[..end];
            if !digits.is_empty()
                && digits.len() <= 6
                && digits.bytes().all(|b| b.is_ascii_hexdigit())
            {
                if let Ok(code) = u32::from_str_radix(digits, 16) {
                    push_scalar(code, out);
                    return &braced[end + 1..];
                }
            }
        }
        out.push('u');
        return input;
    }

    let Some((code, after)) = take_hex(input, 4) else {
        out.push('u');
        return input;
    };

    if HIGH_SURROGATE.contains(&code) {
        // A high surrogate only means something when the low half follows
        // immediately as another \uHHHH escape.
        if let Some(tail) = after.strip_prefix("\\u") {
            if let Some((low, after_pair)) = take_hex(tail, 4) {
                if LOW_SURROGATE.contains(&low) {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    push_scalar(combined, out);
                    return after_pair;
                }
            }
        }
        out.push(REPLACEMENT);
        return after;
    }

    push_scalar(code, out);
    after
}

/// Takes exactly `n` hex digits from the start of `input`.
fn take_hex(input: &str, n: usize) -> Option<(u32, &str)> {
    let digits = input.get(..n)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let code = u32::from_str_radix(digits, 16).ok()?;
    Some((code, &input[n..]))
}

/// Pushes a decoded code point, substituting U+FFFD for values that are not
/// valid Unicode scalars (unpaired surrogates, out-of-range braces).
fn push_scalar(code: u32, out: &mut String) {
    out.push(char::from_u32(code).unwrap_or(REPLACEMENT));
}
