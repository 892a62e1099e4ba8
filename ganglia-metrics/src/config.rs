//! Metric computation configuration.

/// Tunables for metric computation and hypothesis decoding.
///
/// Everything a run needs is passed in here; there is no process-wide
/// state to configure.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Maximum number of decoded hypotheses in the report (default: 200).
    pub sample_cap: usize,

    /// Relation vocabulary size assumed when the reference corpus cannot
    /// supply one (default: 15).
    pub default_vocab_size: usize,

    /// Namespace prefix stripped from relation labels for display
    /// (default: `dblp:`).
    pub relation_prefix: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            sample_cap: 200,
            default_vocab_size: 15,
            relation_prefix: "dblp:".to_string(),
        }
    }
}

impl MetricsConfig {
    pub fn with_sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    pub fn with_default_vocab_size(mut self, size: usize) -> Self {
        self.default_vocab_size = size;
        self
    }

    pub fn with_relation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.relation_prefix = prefix.into();
        self
    }
}
