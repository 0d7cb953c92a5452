// src/core/sanitize.rs

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Filename-safe stem. Keeps letters/digits of any script (CJK report
/// prefixes stay readable), `-` and `_`; whitespace becomes `_`.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

/// Split label text into lines for diffing: CRLF/CR normalized, trailing
/// whitespace dropped per line.
pub fn text_lines(s: &str) -> Vec<&str> {
    if s.is_empty() { return Vec::new(); }
    s.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).trim_end())
        .collect()
}

/// Remove a leading UTF-8 byte order mark.
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_keeps_cjk_and_collapses_spaces() {
        assert_eq!(sanitize_file_stem("仿單異動檢查表", "report"), "仿單異動檢查表");
        assert_eq!(sanitize_file_stem("  weekly   report ", "report"), "weekly_report");
        assert_eq!(sanitize_file_stem("a/b:c", "report"), "abc");
    }

    #[test]
    fn stem_falls_back_when_nothing_survives() {
        assert_eq!(sanitize_file_stem("///", "report"), "report");
        assert_eq!(sanitize_file_stem("", "report"), "report");
    }

    #[test]
    fn lines_handle_crlf_and_empty() {
        assert!(text_lines("").is_empty());
        assert_eq!(text_lines("a\r\nb  \nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn bom_is_stripped_once() {
        assert_eq!(strip_bom(b"\xEF\xBB\xBF[]"), b"[]");
        assert_eq!(strip_bom(b"[]"), b"[]");
    }

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  a \t b\n"), "a b");
    }
}
