use std::sync::LazyLock;

use regex::Regex;

static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Separator and bullet characters the upstream pages hang off the edges of fragments.
const DECORATION: &[char] = &['·', '•', '|', ';', '；', ',', '，'];

/// Collapse every whitespace run (NBSP and newlines included) to one space and trim.
pub fn normalize(s: &str) -> String {
    SPACE_RE.replace_all(s, " ").trim().to_string()
}

/// `normalize`, then strip decorative leading/trailing artifacts.
pub fn clean(s: &str) -> String {
    normalize(s)
        .trim_matches(|c: char| c.is_whitespace() || DECORATION.contains(&c))
        .to_string()
}

/// First run of ASCII digits, e.g. `"star star4"` → 4.
pub fn first_number(s: &str) -> Option<u32> {
    DIGITS_RE.find(s).and_then(|m| m.as_str().parse().ok())
}

/// `Some(s)` unless `s` is empty.
pub fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs() {
        assert_eq!(normalize("  a   b\n c "), "a b c");
        assert_eq!(normalize("tab\tand\u{a0}nbsp"), "tab and nbsp");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["  a   b\n c ", "", "   ", "你好 世界\n\n", "x"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn clean_strips_decoration() {
        assert_eq!(clean("  int. ；"), "int.");
        assert_eq!(clean("· hellos |"), "hellos");
        assert_eq!(clean("，，"), "");
        let once = clean(" • a, b ; ");
        assert_eq!(once, "a, b");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn digits() {
        assert_eq!(first_number("star star4"), Some(4));
        assert_eq!(first_number("star"), None);
        assert_eq!(first_number("r12 s3"), Some(12));
    }
}
