// ============================================================
// Layer 3 - Summary Verbosity and Length Parameters
// ============================================================
// The user picks one of two verbosities. Each one fixes the
// length bounds passed to the summarization model for every
// chunk, and whether summarization stops early.
//
//   verbosity | max_length | min_length | chunks summarized
//   ----------+------------+------------+------------------
//   Short     |     60     |     30     | at most 2
//   Detailed  |    150     |     50     | all planned chunks

/// How much summary the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Short,
    Detailed,
}

/// Length bounds for a single call to the summarization model.
/// Lengths are in model tokens, as the model interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryParams {
    pub max_length: usize,
    pub min_length: usize,

    /// Greedy decoding when true (no sampling)
    pub deterministic: bool,
}

impl Verbosity {
    /// Per-chunk parameters for this verbosity
    pub fn params(self) -> SummaryParams {
        match self {
            Verbosity::Short => SummaryParams {
                max_length:    60,
                min_length:    30,
                deterministic: true,
            },
            Verbosity::Detailed => SummaryParams {
                max_length:    150,
                min_length:    50,
                deterministic: true,
            },
        }
    }

    /// How many chunk summaries to keep before stopping.
    /// None means every planned chunk is summarized.
    pub fn chunk_limit(self) -> Option<usize> {
        match self {
            Verbosity::Short    => Some(2),
            Verbosity::Detailed => None,
        }
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verbosity::Short    => f.write_str("short"),
            Verbosity::Detailed => f.write_str("detailed"),
        }
    }
}
