//! Keyword search over plain document text.
//!
//! Matching is case-insensitive using a locale-independent per-char fold and
//! reports overlapping occurrences: after a hit the scan resumes one char
//! past the start of that hit.

use serde::{Deserialize, Serialize};

/// Outcome of a keyword search.
///
/// `match_positions` are byte offsets into the searched content, strictly
/// ascending and always on char boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The keyword exactly as supplied by the caller.
    pub keyword: String,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    #[serde(rename = "matchPositions")]
    pub match_positions: Vec<usize>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

/// Simple uppercase mapping, kept only when it is a single char of the same
/// encoded width, so a match always spans exactly `keyword.len()` bytes.
fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u.len_utf8() == c.len_utf8() => u,
        _ => c,
    }
}

/// Find every case-insensitive, possibly overlapping occurrence of `keyword`.
///
/// Empty content or an empty keyword yields zero matches. Never fails.
///
/// # Examples
///
/// ```
/// # use mdreader::search::search;
/// let result = search("cat and cat and cat", "cat");
/// assert_eq!(result.match_positions, vec![0, 8, 16]);
///
/// let result = search("aaa", "aa");
/// assert_eq!(result.match_positions, vec![0, 1]);
/// ```
pub fn search(content: &str, keyword: &str) -> SearchResult {
    let mut result = SearchResult {
        keyword: keyword.to_string(),
        ..Default::default()
    };

    if content.is_empty() || keyword.is_empty() {
        return result;
    }

    let needle: Vec<char> = keyword.chars().map(fold).collect();
    let haystack: Vec<(usize, char)> = content
        .char_indices()
        .map(|(offset, c)| (offset, fold(c)))
        .collect();

    if needle.len() > haystack.len() {
        return result;
    }

    for start in 0..=haystack.len() - needle.len() {
        let window = &haystack[start..start + needle.len()];
        if window.iter().zip(&needle).all(|((_, c), n)| c == n) {
            result.match_positions.push(haystack[start].0);
        }
    }

    result.total_matches = result.match_positions.len();
    log::debug!(
        "search {:?}: {} matches in {} bytes",
        keyword,
        result.total_matches,
        content.len()
    );
    result
}

/// Navigation state over the matches of one search.
///
/// `current` is 1-based; it is 0 only when there are no matches. Moving past
/// either end wraps around.
#[derive(Debug, Clone, Default)]
pub struct SearchCursor {
    result: SearchResult,
    current: usize,
}

impl SearchCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active result and select its first match.
    pub fn set_result(&mut self, result: SearchResult) {
        self.current = if result.total_matches > 0 { 1 } else { 0 };
        self.result = result;
    }

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.result.total_matches
    }

    pub fn select_next(&mut self) {
        let total = self.total();
        if total == 0 {
            return;
        }
        self.current = if self.current >= total { 1 } else { self.current + 1 };
    }

    pub fn select_previous(&mut self) {
        let total = self.total();
        if total == 0 {
            return;
        }
        self.current = if self.current <= 1 { total } else { self.current - 1 };
    }

    /// Byte offset of the selected match, if any.
    pub fn current_position(&self) -> Option<usize> {
        self.current
            .checked_sub(1)
            .and_then(|i| self.result.match_positions.get(i).copied())
    }

    /// Status text such as `"2/5"`, or `"0/0"` when nothing matched.
    pub fn label(&self) -> String {
        if self.total() > 0 {
            format!("{}/{}", self.current, self.total())
        } else {
            "0/0".to_string()
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Independent scan over ASCII-lowercased bytes.
    fn reference_positions(content: &str, keyword: &str) -> Vec<usize> {
        let c = content.to_ascii_lowercase().into_bytes();
        let k = keyword.to_ascii_lowercase().into_bytes();
        if k.is_empty() || k.len() > c.len() {
            return Vec::new();
        }
        (0..=c.len() - k.len())
            .filter(|&i| c[i..i + k.len()] == k[..])
            .collect()
    }

    #[test]
    fn test_cat_scenario() {
        let result = search("cat and cat and cat", "cat");
        assert_eq!(result.total_matches, 3);
        assert_eq!(result.match_positions, vec![0, 8, 16]);
        assert_eq!(result.keyword, "cat");
    }

    #[test]
    fn test_overlapping_matches() {
        let result = search("aaa", "aa");
        assert_eq!(result.total_matches, 2);
        assert_eq!(result.match_positions, vec![0, 1]);

        assert_eq!(search("aaaa", "a").match_positions, vec![0, 1, 2, 3]);
        assert_eq!(search("abababa", "aba").match_positions, vec![0, 2, 4]);
    }

    #[test]
    fn test_case_insensitive() {
        let result = search("Rust rust RUST rUsT", "rust");
        assert_eq!(result.match_positions, vec![0, 5, 10, 15]);

        let upper = search("Hello World hello", "HELLO");
        let lower = search("Hello World hello", "hello");
        assert_eq!(upper.match_positions, lower.match_positions);
        assert_eq!(upper.total_matches, lower.total_matches);
    }

    #[test]
    fn test_keyword_echoed_unmodified() {
        assert_eq!(search("abc", "AbC").keyword, "AbC");
        assert_eq!(search("", "Key").keyword, "Key");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(search("", "x").is_empty());
        assert!(search("text", "").is_empty());
        assert!(search("", "").is_empty());
        assert!(search("ab", "abc").is_empty());
        assert!(search("abc", "xyz").match_positions.is_empty());
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let content = "naïve café CAFÉ";
        let result = search(content, "café");

        assert_eq!(result.total_matches, 2);
        for &p in &result.match_positions {
            assert!(content.is_char_boundary(p));
        }
        assert_eq!(&content[result.match_positions[0]..][..5], "café");
        assert_eq!(&content[result.match_positions[1]..][..5], "CAFÉ");
    }

    #[test]
    fn test_width_changing_case_pairs_do_not_match() {
        // KELVIN SIGN lowercases to an ASCII 'k' but is three bytes wide
        assert!(search("\u{212A}elvin", "k").is_empty());
        assert!(search("\u{212A}elvin", "K").is_empty());
        assert!(search("\u{17F}", "s").is_empty());
        assert!(search("\u{131}", "I").is_empty());

        let content = "\u{212A}elvin K";
        assert_eq!(search(content, "k").match_positions, vec![9]);
    }

    #[test]
    fn test_match_slices_equal_keyword_non_ascii() {
        let content = "\u{212A}elvin K \u{17F}tra\u{DF}e STRASSE \u{131} I i \u{1C4} \u{1C5} \u{1C6} \u{C9}t\u{E9}";
        for keyword in ["k", "K", "s", "S", "i", "\u{1C6}", "\u{E9}t\u{C9}", "strasse"] {
            let result = search(content, keyword);
            for &p in &result.match_positions {
                let slice = content
                    .get(p..p + keyword.len())
                    .expect("match must end on a char boundary");
                assert!(
                    slice.chars().map(fold).eq(keyword.chars().map(fold)),
                    "{slice:?} vs {keyword:?}"
                );
            }
        }

        assert_eq!(search(content, "\u{1C6}").total_matches, 3);
        assert_eq!(search(content, "\u{E9}t\u{C9}").total_matches, 1);
    }

    #[test]
    fn test_matches_reference_scan() {
        let alphabet = ['a', 'b', 'A', 'B', ' '];
        let mut seed: u64 = 7;
        let mut next = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };

        for _ in 0..200 {
            let content: String = (0..next() % 40).map(|_| alphabet[next() % 5]).collect();
            let keyword: String = (0..next() % 4).map(|_| alphabet[next() % 5]).collect();

            let result = search(&content, &keyword);
            let expected = reference_positions(&content, &keyword);
            assert_eq!(result.match_positions, expected, "{content:?} / {keyword:?}");
            assert_eq!(result.total_matches, result.match_positions.len());
            assert!(result.match_positions.windows(2).all(|w| w[0] < w[1]));

            for &p in &result.match_positions {
                assert!(content[p..p + keyword.len()].eq_ignore_ascii_case(&keyword));
            }

            let upper = search(&content, &keyword.to_uppercase());
            let lower = search(&content, &keyword.to_lowercase());
            assert_eq!(upper.match_positions, lower.match_positions);
        }
    }

    #[test]
    fn test_cursor_navigation_wraps() {
        let mut cursor = SearchCursor::new();
        assert_eq!(cursor.label(), "0/0");

        cursor.set_result(search("x.x.x", "x"));
        assert_eq!(cursor.label(), "1/3");
        assert_eq!(cursor.current_position(), Some(0));

        cursor.select_next();
        cursor.select_next();
        assert_eq!(cursor.label(), "3/3");
        assert_eq!(cursor.current_position(), Some(4));

        cursor.select_next();
        assert_eq!(cursor.current(), 1);

        cursor.select_previous();
        assert_eq!(cursor.current(), 3);
        cursor.select_previous();
        assert_eq!(cursor.current(), 2);
    }

    #[test]
    fn test_cursor_without_matches() {
        let mut cursor = SearchCursor::new();
        cursor.set_result(search("abc", "z"));

        cursor.select_next();
        cursor.select_previous();
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.current_position(), None);
        assert_eq!(cursor.label(), "0/0");
    }

    #[test]
    fn test_cursor_clear() {
        let mut cursor = SearchCursor::new();
        cursor.set_result(search("aa", "a"));
        cursor.clear();

        assert_eq!(cursor.total(), 0);
        assert_eq!(cursor.label(), "0/0");
        assert_eq!(cursor.result().keyword, "");
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(search("aa", "a")).unwrap();
        assert_eq!(json["totalMatches"], 2);
        assert_eq!(json["matchPositions"], serde_json::json!([0, 1]));
    }
}
