// ============================================================
// Layer 4 - Chunk Planner
// ============================================================
// Cuts document text into pieces small enough for the
// summarization model's input window.
//
// Two limits apply:
//   - only the first `max_chars` characters are considered
//     (5000 by default); anything after that is dropped
//   - that prefix is cut into consecutive, non-overlapping
//     spans of `chunk_chars` characters (1024 by default);
//     the last span may be shorter
//
// Example with chunk_chars=4, max_chars=10:
//   Text:    "abcdefghijklmnop"
//   Prefix:  "abcdefghij"
//   Chunks:  "abcd", "efgh", "ij"
//
// Lengths are counted in characters, not bytes, so a chunk
// boundary never lands inside a multi-byte UTF-8 sequence.
// It can land mid-word or mid-sentence; no attempt is made to
// find a nicer split point.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

/// Characters per chunk fed to the summarization model
pub const DEFAULT_CHUNK_CHARS: usize = 1024;

/// Characters of the document that are ever summarized
pub const DEFAULT_MAX_CHARS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlanner {
    /// Maximum characters in a single chunk
    chunk_chars: usize,
    /// Characters of input considered at all
    max_chars: usize,
}

impl ChunkPlanner {
    /// Create a new ChunkPlanner.
    ///
    /// # Panics
    /// Panics if chunk_chars is 0, since no progress could ever
    /// be made through the text.
    pub fn new(chunk_chars: usize, max_chars: usize) -> Self {
        assert!(chunk_chars > 0, "chunk_chars must be greater than zero");
        Self { chunk_chars, max_chars }
    }

    /// Plan the chunks of `text`, left to right.
    ///
    /// The returned iterator borrows from `text` and yields each
    /// chunk once; callers that stop early never pay for the rest.
    pub fn plan<'a>(&self, text: &'a str) -> Chunks<'a> {
        let prefix = match text.char_indices().nth(self.max_chars) {
            Some((end, _)) => &text[..end],
            None           => text,
        };
        Chunks {
            rest:        prefix,
            chunk_chars: self.chunk_chars,
        }
    }

    /// How many chunks a text of `char_count` characters produces
    #[cfg(test)]
    pub fn num_chunks(&self, char_count: usize) -> usize {
        char_count.min(self.max_chars).div_ceil(self.chunk_chars)
    }
}

impl Default for ChunkPlanner {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_CHARS, DEFAULT_MAX_CHARS)
    }
}

/// Iterator over the planned chunks of one text.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    rest:        &'a str,
    chunk_chars: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(self.chunk_chars)
            .map_or(self.rest.len(), |(i, _)| i);

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_limits() {
        let p      = ChunkPlanner::new(4, 10);
        let chunks: Vec<&str> = p.plan("abcdefghijklmnop").collect();
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_6000_chars_gives_five_chunks_from_first_5000() {
        let text: String = (0..6000).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let chunks: Vec<&str> = ChunkPlanner::default().plan(&text).collect();

        assert_eq!(chunks.len(), 5);
        for c in &chunks[..4] {
            assert_eq!(c.chars().count(), 1024);
        }
        assert_eq!(chunks[4].chars().count(), 904);
        assert_eq!(chunks.concat(), text[..5000]);
    }

    #[test]
    fn test_short_text_gives_one_chunk() {
        let chunks: Vec<&str> = ChunkPlanner::default().plan("just a few words").collect();
        assert_eq!(chunks, vec!["just a few words"]);
    }

    #[test]
    fn test_empty_text_gives_no_chunks() {
        assert_eq!(ChunkPlanner::default().plan("").count(), 0);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        let text = "x".repeat(2048);
        let chunks: Vec<&str> = ChunkPlanner::default().plan(&text).collect();
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() == 1024));
    }

    #[test]
    fn test_multibyte_characters_counted_as_one() {
        let p      = ChunkPlanner::new(2, 5);
        let chunks: Vec<&str> = p.plan("ééééééé").collect();
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_num_chunks() {
        let p = ChunkPlanner::default();
        assert_eq!(p.num_chunks(0), 0);
        assert_eq!(p.num_chunks(1), 1);
        assert_eq!(p.num_chunks(1024), 1);
        assert_eq!(p.num_chunks(1025), 2);
        assert_eq!(p.num_chunks(6000), 5);
    }

    #[test]
    #[should_panic]
    fn test_zero_chunk_size_panics() {
        let _ = ChunkPlanner::new(0, 5000);
    }

    proptest! {
        #[test]
        fn prop_chunks_cover_capped_prefix(text in "\\PC{0,7000}") {
            let planner = ChunkPlanner::default();
            let chunks: Vec<&str> = planner.plan(&text).collect();

            let n = text.chars().count();
            let prefix: String = text.chars().take(n.min(DEFAULT_MAX_CHARS)).collect();

            prop_assert_eq!(chunks.len(), planner.num_chunks(n));
            prop_assert_eq!(chunks.concat(), prefix);
            prop_assert!(chunks.iter().all(|c| {
                let len = c.chars().count();
                len > 0 && len <= DEFAULT_CHUNK_CHARS
            }), "every chunk must be non-empty and at most DEFAULT_CHUNK_CHARS chars");
        }
    }
}
