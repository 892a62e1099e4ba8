//! Hypothesis decoding for display.
//!
//! The dashboard shows a bounded sample of the batch with identifiers
//! resolved to names. This is a stable truncation of the batch in file
//! order, not a ranked top-N.

use crate::MetricsConfig;
use ganglia_core::{GeneratedBatch, IdentifierMap, ReferenceCorpus};
use serde::Serialize;

/// A generated triple decoded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hypothesis {
    /// Resolved head name.
    pub head: String,
    /// Relation label with the namespace prefix stripped.
    pub relation: String,
    /// Resolved tail name.
    pub tail: String,
    /// Confidence formatted to four decimal digits.
    pub score: String,
    /// Whether the triple is absent from the reference corpus. Always
    /// true when the corpus is unavailable.
    pub is_novel: bool,
}

/// Decode the leading slice of a batch into display form.
///
/// Takes the first [`MetricsConfig::sample_cap`] triples in file order.
/// Head and tail identifiers resolve through the mapping with identity
/// fallback; the novelty flag uses the same membership test as the
/// metrics engine.
pub fn decode_hypotheses(
    batch: &GeneratedBatch,
    mapping: &IdentifierMap,
    corpus: &ReferenceCorpus,
    config: &MetricsConfig,
) -> Vec<Hypothesis> {
    batch
        .triples()
        .iter()
        .take(config.sample_cap)
        .map(|st| {
            let triple = &st.triple;
            let relation = triple.relation.as_str();
            Hypothesis {
                head: mapping.resolve(triple.head.as_str()).to_string(),
                relation: relation
                    .strip_prefix(config.relation_prefix.as_str())
                    .unwrap_or(relation)
                    .to_string(),
                tail: mapping.resolve(triple.tail.as_str()).to_string(),
                score: format!("{:.4}", st.score),
                is_novel: !corpus.is_available() || !corpus.contains(triple),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganglia_core::{ScoredTriple, Triple};

    fn mapping() -> IdentifierMap {
        [("e1", "Alice"), ("e2", "Bob")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_decode_resolves_and_flags() {
        let batch = GeneratedBatch::from_triples([
            ScoredTriple::new(Triple::new("e1", "dblp:hasAuthor", "e2"), 0.9),
            ScoredTriple::new(Triple::new("e1", "dblp:cites", "e3"), 0.5),
        ]);
        let corpus = ReferenceCorpus::from_triples([Triple::new("e1", "dblp:hasAuthor", "e2")]);

        let hypotheses =
            decode_hypotheses(&batch, &mapping(), &corpus, &MetricsConfig::default());

        assert_eq!(hypotheses.len(), 2);
        assert_eq!(hypotheses[0].head, "Alice");
        assert_eq!(hypotheses[0].relation, "hasAuthor");
        assert_eq!(hypotheses[0].tail, "Bob");
        assert_eq!(hypotheses[0].score, "0.9000");
        assert!(!hypotheses[0].is_novel);

        // Unmapped tail falls back to the identifier.
        assert_eq!(hypotheses[1].tail, "e3");
        assert!(hypotheses[1].is_novel);
    }

    #[test]
    fn test_decode_respects_cap_and_order() {
        let batch = GeneratedBatch::from_triples(
            (0..10).map(|i| {
                ScoredTriple::new(Triple::new(format!("h{i}"), "r", format!("t{i}")), 0.1)
            }),
        );

        let config = MetricsConfig::default().with_sample_cap(3);
        let hypotheses = decode_hypotheses(
            &batch,
            &IdentifierMap::default(),
            &ReferenceCorpus::unavailable(),
            &config,
        );

        assert_eq!(hypotheses.len(), 3);
        let heads: Vec<&str> = hypotheses.iter().map(|h| h.head.as_str()).collect();
        assert_eq!(heads, ["h0", "h1", "h2"]);
        assert!(hypotheses.iter().all(|h| h.is_novel));
    }

    #[test]
    fn test_prefix_only_stripped_at_start() {
        let batch = GeneratedBatch::from_triples([ScoredTriple::new(
            Triple::new("a", "my:dblp:thing", "b"),
            1.0,
        )]);

        let hypotheses = decode_hypotheses(
            &batch,
            &IdentifierMap::default(),
            &ReferenceCorpus::unavailable(),
            &MetricsConfig::default(),
        );
        assert_eq!(hypotheses[0].relation, "my:dblp:thing");
    }

    #[test]
    fn test_score_formatting() {
        let batch = GeneratedBatch::from_triples([
            ScoredTriple::new(Triple::new("a", "r", "b"), 0.123456),
            ScoredTriple::new(Triple::new("a", "r", "c"), 2.0),
        ]);

        let hypotheses = decode_hypotheses(
            &batch,
            &IdentifierMap::default(),
            &ReferenceCorpus::unavailable(),
            &MetricsConfig::default(),
        );
        assert_eq!(hypotheses[0].score, "0.1235");
        assert_eq!(hypotheses[1].score, "2.0000");
    }
}
