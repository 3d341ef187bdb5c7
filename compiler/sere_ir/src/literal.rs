//! Decoding literal source text.
//!
//! Number and string tokens keep their source text (see
//! [`Literal`](crate::ast::Literal)). Consumers that need the value decode
//! it here.

/// Why a literal could not be decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LiteralError {
    /// Integer does not fit in `i64`.
    IntOutOfRange,
    Malformed,
    /// `f"..."` pieces have no constant value.
    FormattedString,
    /// Bytes and text pieces joined in one literal.
    MixedBytes,
}

/// A decoded string token.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum StringValue {
    Text(String),
    Bytes(Vec<u8>),
}

/// Decimal, `0x`, `0o` or `0b` integer text with optional `_` separators.
pub fn decode_int(text: &str) -> Result<i64, LiteralError> {
    let digits: String = text.chars().filter(|&c| c != '_').collect();
    let (radix, body) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        _ => (10, digits.as_str()),
    };
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::Malformed);
    }
    i64::from_str_radix(body, radix).map_err(|_| LiteralError::IntOutOfRange)
}

pub fn decode_float(text: &str) -> Result<f64, LiteralError> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    cleaned.parse().map_err(|_| LiteralError::Malformed)
}

/// `3j`, `1.5J`: the imaginary part of a complex number.
pub fn decode_imaginary(text: &str) -> Result<f64, LiteralError> {
    let body = text
        .strip_suffix(['j', 'J'])
        .ok_or(LiteralError::Malformed)?;
    decode_float(body)
}

/// Decode a string token. The text may hold several adjacent literals
/// separated by whitespace; they are concatenated.
pub fn decode_string(text: &str) -> Result<StringValue, LiteralError> {
    let mut rest = text.trim_start();
    let mut text_out = String::new();
    let mut bytes_out = Vec::new();
    let mut is_bytes = None;

    while !rest.is_empty() {
        let (piece, remaining) = split_piece(rest)?;
        if piece.formatted {
            return Err(LiteralError::FormattedString);
        }
        match is_bytes {
            Some(previous) if previous != piece.bytes => return Err(LiteralError::MixedBytes),
            _ => is_bytes = Some(piece.bytes),
        }

        let decoded = if piece.raw {
            piece.body.to_owned()
        } else {
            unescape(piece.body)?
        };
        if piece.bytes {
            bytes_out.extend(decoded.chars().map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?')));
        } else {
            text_out.push_str(&decoded);
        }
        rest = remaining.trim_start();
    }

    Ok(if is_bytes == Some(true) {
        StringValue::Bytes(bytes_out)
    } else {
        StringValue::Text(text_out)
    })
}

struct Piece<'a> {
    body: &'a str,
    raw: bool,
    bytes: bool,
    formatted: bool,
}

fn split_piece(text: &str) -> Result<(Piece<'_>, &str), LiteralError> {
    let prefix_len = text
        .find(['"', '\''])
        .ok_or(LiteralError::Malformed)?;
    let prefix = text[..prefix_len].to_ascii_lowercase();
    if prefix.len() > 2 || !prefix.chars().all(|c| matches!(c, 'r' | 'b' | 'u' | 'f')) {
        return Err(LiteralError::Malformed);
    }

    let quoted = &text[prefix_len..];
    let quote = if quoted.starts_with("\"\"\"") || quoted.starts_with("'''") {
        &quoted[..3]
    } else {
        &quoted[..1]
    };
    let after_open = &quoted[quote.len()..];
    let close = find_close(after_open, quote).ok_or(LiteralError::Malformed)?;

    let piece = Piece {
        body: &after_open[..close],
        raw: prefix.contains('r'),
        bytes: prefix.contains('b'),
        formatted: prefix.contains('f'),
    };
    Ok((piece, &after_open[close + quote.len()..]))
}

/// Byte offset of the closing quote, skipping escaped characters.
fn find_close(text: &str, quote: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if text[i..].starts_with(quote) {
            return Some(i);
        }
    }
    None
}

fn unescape(body: &str) -> Result<String, LiteralError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            return Err(LiteralError::Malformed);
        };
        match escape {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                out.push(hex_char(&hex, 2)?);
            }
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                out.push(hex_char(&hex, 4)?);
            }
            'U' => {
                let hex: String = chars.by_ref().take(8).collect();
                out.push(hex_char(&hex, 8)?);
            }
            // Unknown escapes are kept verbatim.
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    Ok(out)
}

fn hex_char(hex: &str, len: usize) -> Result<char, LiteralError> {
    if hex.len() != len {
        return Err(LiteralError::Malformed);
    }
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or(LiteralError::Malformed)
}
