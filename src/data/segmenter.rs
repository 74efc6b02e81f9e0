// ============================================================
// Layer 4 - Section Segmenter
// ============================================================
// Splits a flat list of document lines into named sections.
//
// There is no layout information in extracted PDF text, so a
// header is recognised purely by the shape of the line:
//
//   - one or more words separated by a single whitespace char
//   - every word is one uppercase ASCII letter followed by one
//     or more lowercase ASCII letters
//   - fewer than 50 characters in total
//
//   "Results"               → header
//   "Related Work"          → header
//   "RESULTS"               → body (all caps)
//   "Section 2"             → body (digits)
//   "Results and discussion"→ body ("and" is lowercase)
//
// Walking the lines in order:
//
//   "Some preamble"   → Introduction: ["Some preamble"]
//   "Methods"         → Methods:      []
//   "We measured..."  → Methods:      ["We measured..."]
//   "Methods"         → Methods:      []          (reset!)
//   "Second try..."   → Methods:      ["Second try..."]
//
// A repeated header throws away what was collected under the
// earlier occurrence. The title keeps its first position.
//
// Known misfires (short title-case sentences such as "Thank You"
// become headers) are accepted as part of the heuristic.
//
// Reference: regex crate documentation
//            Rust Book §8 (Hash Maps)

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::section::{Section, SectionMap, DEFAULT_SECTION};

/// Headers must be strictly shorter than this many characters
pub const MAX_HEADER_CHARS: usize = 50;

static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+(\s[A-Z][a-z]+)*$").expect("section header pattern is valid")
});

/// Returns true if an already-trimmed line looks like a section header.
pub fn is_header(line: &str) -> bool {
    SECTION_HEADER.is_match(line) && line.chars().count() < MAX_HEADER_CHARS
}

/// Stateless line-shape segmenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Group `lines` into sections.
    ///
    /// Lines are trimmed before matching and stored trimmed.
    /// Empty lines are kept as empty strings in the body, and a
    /// header with nothing under it yields an empty body.
    pub fn segment<'a, I>(&self, lines: I) -> SectionMap
    where
        I: IntoIterator<Item = &'a str>,
    {
        // Bodies in first-seen order, plus a title → slot lookup
        let mut bodies: Vec<(&'a str, Vec<&'a str>)> = Vec::new();
        let mut slots:  HashMap<&'a str, usize>     = HashMap::new();
        let mut current = DEFAULT_SECTION;

        for line in lines {
            let line = line.trim();

            if is_header(line) {
                current = line;
                match slots.get(line) {
                    Some(&i) => bodies[i].1.clear(),
                    None => {
                        slots.insert(line, bodies.len());
                        bodies.push((line, Vec::new()));
                    }
                }
            } else {
                // The default bucket only exists once a line lands in it
                let i = *slots.entry(current).or_insert_with(|| {
                    bodies.push((current, Vec::new()));
                    bodies.len() - 1
                });
                bodies[i].1.push(line);
            }
        }

        // Titles in `bodies` are unique already, thanks to `slots`
        let sections = SectionMap::from_unique(
            bodies
                .into_iter()
                .map(|(title, body)| Section::new(title, body.join("\n")))
                .collect(),
        );

        tracing::debug!(
            "Segmented document into {} sections: {:?}",
            sections.len(),
            sections.titles().collect::<Vec<_>>()
        );

        sections
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn segment(lines: &[&str]) -> SectionMap {
        Segmenter::new().segment(lines.iter().copied())
    }

    #[test]
    fn test_intro_then_results() {
        let map = segment(&["Introduction text", "Results", "r1", "r2"]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Introduction"), Some("Introduction text"));
        assert_eq!(map.get("Results"), Some("r1\nr2"));
        assert_eq!(map.titles().collect::<Vec<_>>(), vec!["Introduction", "Results"]);
    }

    #[test]
    fn test_no_headers_gives_single_introduction() {
        let map = segment(&["  the first line ", "second line", "", "RESULTS 2"]);

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("Introduction"),
            Some("the first line\nsecond line\n\nRESULTS 2")
        );
    }

    #[test]
    fn test_duplicate_header_resets_body() {
        let map = segment(&["Methods", "a1", "a2", "Results", "r", "Methods", "b1"]);

        assert_eq!(map.get("Methods"), Some("b1"));
        assert_eq!(map.get("Results"), Some("r"));
        // The reset title stays where it was first seen
        assert_eq!(map.titles().collect::<Vec<_>>(), vec!["Methods", "Results"]);
    }

    #[test]
    fn test_leading_header_has_no_introduction() {
        let map = segment(&["Abstract", "We study things."]);
        assert_eq!(map.get("Introduction"), None);
        assert_eq!(map.get("Abstract"), Some("We study things."));
    }

    #[test]
    fn test_header_without_body_is_kept_empty() {
        let map = segment(&["intro", "Acknowledgements"]);
        assert_eq!(map.get("Acknowledgements"), Some(""));
    }

    #[test]
    fn test_long_header_shaped_line_is_body() {
        // 11 words of "Abcd" + spaces = 54 characters
        let long = vec!["Abcd"; 11].join(" ");
        assert!(long.len() >= MAX_HEADER_CHARS);

        let map = segment(&["intro", &long]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Introduction"), Some(format!("intro\n{long}").as_str()));
    }

    #[test]
    fn test_header_is_trimmed_before_matching() {
        let map = segment(&["   Related Work \t", "prior art"]);
        assert_eq!(map.get("Related Work"), Some("prior art"));
    }

    #[test]
    fn test_header_shapes() {
        assert!(is_header("Results"));
        assert!(is_header("Related Work"));
        assert!(is_header("Related\tWork"));

        assert!(!is_header("RESULTS"));
        assert!(!is_header("Section 2"));
        assert!(!is_header("Results and discussion"));
        assert!(!is_header("Related  Work"));
        assert!(!is_header("A"));
        assert!(!is_header("Résumé"));
        assert!(!is_header(""));
    }

    #[test]
    fn test_explicit_introduction_header_resets_preamble() {
        let map = segment(&["preamble", "Introduction", "real intro"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Introduction"), Some("real intro"));
    }

    #[test]
    fn test_many_headers_keep_first_seen_order() {
        let titles: Vec<String> = (0..200)
            .map(|i| format!("Part {}", "Ab".repeat(i % 20 + 1).to_lowercase().replacen('a', "A", 1)))
            .collect();
        let mut lines: Vec<&str> = Vec::new();
        for title in &titles {
            lines.push(title);
            lines.push("body");
        }

        let map = segment(&lines);

        // Only 20 distinct titles; later repeats reset in place
        let expected: Vec<&str> = titles.iter().take(20).map(String::as_str).collect();
        assert_eq!(map.titles().collect::<Vec<_>>(), expected);
        assert!(expected.iter().all(|t| map.get(t) == Some("body")));
    }

    // Lowercase-led lines can never look like a header
    fn body_line() -> impl Strategy<Value = String> {
        "[a-z0-9 .,]{0,40}"
    }

    proptest! {
        #[test]
        fn prop_headerless_input_is_one_joined_section(
            lines in prop::collection::vec(body_line(), 1..30)
        ) {
            let map = Segmenter::new().segment(lines.iter().map(String::as_str));
            let expected = lines.iter().map(|l| l.trim()).collect::<Vec<_>>().join("\n");

            prop_assert_eq!(map.len(), 1);
            prop_assert_eq!(map.get("Introduction"), Some(expected.as_str()));
        }

        #[test]
        fn prop_lines_after_header_land_under_it(
            before in prop::collection::vec(body_line(), 0..10),
            after  in prop::collection::vec(body_line(), 0..10),
        ) {
            let mut lines = before.clone();
            lines.push("Results".to_string());
            lines.extend(after.iter().cloned());

            let map = Segmenter::new().segment(lines.iter().map(String::as_str));
            let expected = after.iter().map(|l| l.trim()).collect::<Vec<_>>().join("\n");
            prop_assert_eq!(map.get("Results"), Some(expected.as_str()));

            if before.is_empty() {
                prop_assert_eq!(map.get("Introduction"), None);
            } else {
                let intro = before.iter().map(|l| l.trim()).collect::<Vec<_>>().join("\n");
                prop_assert_eq!(map.get("Introduction"), Some(intro.as_str()));
            }
        }
    }
}
