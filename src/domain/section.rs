// ============================================================
// Layer 3 - Section Map
// ============================================================
// The result of segmenting a document: an ordered list of
// (title, body) pairs.
//
// Order is the order in which titles were first seen. A title
// that appears twice keeps its first position; only its body
// is replaced (see data::segmenter).

use serde::{Deserialize, Serialize};

/// Title used for every line that precedes the first header.
pub const DEFAULT_SECTION: &str = "Introduction";

/// One named section of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,

    /// The section's lines joined with "\n". May be empty.
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body:  body.into(),
        }
    }
}

/// Insertion-ordered mapping from section title to body.
/// Titles are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section. An existing title keeps its position
    /// and has its body overwritten.
    pub fn insert(&mut self, title: impl Into<String>, body: impl Into<String>) {
        let title = title.into();
        let body  = body.into();
        match self.sections.iter_mut().find(|s| s.title == title) {
            Some(existing) => existing.body = body,
            None           => self.sections.push(Section { title, body }),
        }
    }

    /// Build a map from sections whose titles are already unique,
    /// keeping their order.
    /// Titles are not checked.
    pub fn from_unique(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Look up a body by its exact title
    #[cfg(test)]
    pub fn get(&self, title: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.body.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item     = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl FromIterator<Section> for SectionMap {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut map = SectionMap::new();
        for section in iter {
            map.insert(section.title, section.body);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_seen_order() {
        let mut map = SectionMap::new();
        map.insert("Introduction", "a");
        map.insert("Methods", "b");
        map.insert("Results", "c");
        assert_eq!(
            map.titles().collect::<Vec<_>>(),
            vec!["Introduction", "Methods", "Results"]
        );
    }

    #[test]
    fn test_reinsert_overwrites_in_place() {
        let mut map = SectionMap::new();
        map.insert("Methods", "old");
        map.insert("Results", "r");
        map.insert("Methods", "new");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Methods"), Some("new"));
        assert_eq!(map.titles().next(), Some("Methods"));
    }

    #[test]
    fn test_from_unique_keeps_given_order() {
        let map = SectionMap::from_unique(vec![
            Section::new("Results", "r"),
            Section::new("Introduction", "i"),
        ]);
        assert_eq!(map.titles().collect::<Vec<_>>(), vec!["Results", "Introduction"]);
        assert_eq!(map.get("Introduction"), Some("i"));
    }

    #[test]
    fn test_serializes_as_list_of_sections() {
        let map: SectionMap = vec![Section::new("Results", "r1\nr2")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"[{"title":"Results","body":"r1\nr2"}]"#);
    }
}
