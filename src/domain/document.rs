// ============================================================
// Layer 3 - Document Domain Type
// ============================================================
// The raw text of one uploaded PDF, exactly as the document
// reader produced it: every page's text joined with "\n".
//
// A Document is created once per session and never mutated.
// Both pipeline flows borrow it:
//   - the process flow walks its lines into sections
//   - the summary flow feeds its text to the chunk planner
//
// Reference: Rust Book §5 (Structs and Methods)

/// Text extracted from a single uploaded PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name the text came from, kept for log messages
    pub source: String,

    /// Every page's text, joined with newlines
    pub text: String,
}

impl Document {
    /// Create a Document from already-joined text.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Build a Document from per-page text in page order.
    /// Pages are joined with a single "\n" and nothing else,
    /// so a page's trailing newline produces an empty line.
    pub fn from_pages<I, S>(source: impl Into<String>, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, page) in pages.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(page.as_ref());
        }
        Self::new(source, text)
    }

    /// The ordered lines of the document.
    ///
    /// Splits on '\n' only. Unlike str::lines() this keeps a final
    /// empty line after a trailing newline, and an empty document
    /// still yields one (empty) line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Number of characters (not bytes) in the text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
