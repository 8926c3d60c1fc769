/// Finds the first balanced bracket-delimited array or object in free text.
///
/// Model replies often wrap the JSON payload in prose, so a naive
/// first-to-last bracket match breaks on nested brackets inside string
/// literals or on trailing prose that mentions arrays. This scanner tracks
/// bracket depth and string-literal state (including backslash escapes) and
/// returns the first substring whose brackets balance. Byte scanning is safe
/// here: every delimiter is ASCII and multi-byte UTF-8 sequences never
/// collide with them.
pub fn extract_json(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut search_from = 0;

    while let Some(open) = find_opener(bytes, search_from) {
        if let Some(end) = scan_balanced(bytes, open) {
            return Some(&text[open..=end]);
        }
        search_from = open + 1;
    }

    None
}

fn find_opener(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == b'[' || b == b'{')
        .map(|offset| from + offset)
}

/// Returns the index of the closing bracket matching the opener at `open`,
/// or `None` if the brackets never balance (unterminated or mismatched).
fn scan_balanced(bytes: &[u8], open: usize) -> Option<usize> {
    let mut stack: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'[' | b'{' => stack.push(b),
            b']' | b'}' => {
                let expected = if b == b']' { b'[' } else { b'{' };
                if stack.pop() != Some(expected) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}
