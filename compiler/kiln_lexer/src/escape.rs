//! String escape cooking.
//!
//! K strings are byte strings. Named escapes are `\n \t \r \b \f \" \\`; any
//! other byte may be written as one to three octal digits (`\012`).

use crate::lex_error::LexErrorKind;

/// Cook the content between the quotes of a string literal.
pub(crate) fn unescape(content: &str) -> Result<Vec<u8>, LexErrorKind> {
    let bytes = content.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        i += 1;
        if b != b'\\' {
            out.push(b);
            continue;
        }
        let Some(&esc) = bytes.get(i) else {
            return Err(LexErrorKind::UnterminatedString);
        };
        i += 1;
        let cooked = match esc {
            b'n' => b'\n',
            b't' => b'\t',
            b'r' => b'\r',
            b'b' => 0x08,
            b'f' => 0x0c,
            b'"' => b'"',
            b'\\' => b'\\',
            b'0'..=b'7' => {
                let mut value = u32::from(esc - b'0');
                let mut digits = 1;
                while digits < 3 {
                    match bytes.get(i) {
                        Some(&d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            i += 1;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                u8::try_from(value).map_err(|_| LexErrorKind::InvalidEscape(char::from(esc)))?
            }
            other => return Err(LexErrorKind::InvalidEscape(char::from(other))),
        };
        out.push(cooked);
    }
    Ok(out)
}
