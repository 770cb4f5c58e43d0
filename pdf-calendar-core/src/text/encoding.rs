/// Converts text to Windows-1252 bytes for use with the standard fonts.
///
/// Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            0x00..=0x7F | 0xA0..=0xFF => ch as u8,
            0x20AC => 0x80, // Euro sign
            0x2026 => 0x85, // Horizontal ellipsis
            0x2018 => 0x91, // Left single quotation mark
            0x2019 => 0x92, // Right single quotation mark
            0x201C => 0x93, // Left double quotation mark
            0x201D => 0x94, // Right double quotation mark
            0x2022 => 0x95, // Bullet
            0x2013 => 0x96, // En dash
            0x2014 => 0x97, // Em dash
            0x0160 => 0x8A, // S with caron
            0x0161 => 0x9A, // s with caron
            0x017D => 0x8E, // Z with caron
            0x017E => 0x9E, // z with caron
            _ => b'?',
        })
        .collect()
}

/// Writes `bytes` as a PDF literal string, including the parentheses.
pub fn escape_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('(');
    for &byte in bytes {
        match byte {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii() {
        assert_eq!(encode_win_ansi("March 2027"), b"March 2027".to_vec());
    }

    #[test]
    fn test_encode_latin1_and_specials() {
        assert_eq!(encode_win_ansi("Mär"), vec![b'M', 0xE4, b'r']);
        assert_eq!(encode_win_ansi("\u{20AC}"), vec![0x80]);
        assert_eq!(encode_win_ansi("\u{65E5}"), vec![b'?']);
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal(b"a(b)c\\"), "(a\\(b\\)c\\\\)");
        assert_eq!(escape_literal(&[b'M', 0xE4]), "(M\\344)");
    }
}
