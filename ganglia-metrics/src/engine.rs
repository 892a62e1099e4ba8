//! Batch metric computation.
//!
//! All scalar statistics for one generated batch are derived in a single
//! pass over the triples plus one membership test each against the
//! reference corpus. Percentages are in \[0, 100\]; any statistic whose
//! denominator is zero reports 0.

use crate::{MetricsConfig, RuleTable};
use ganglia_core::{GeneratedBatch, ReferenceCorpus, RelationId, Triple};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// One relation's share of the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationFrequency {
    /// Relation identifier.
    pub relation: String,
    /// Triples in the batch using this relation.
    pub count: usize,
    /// Share of the batch total, as a percentage.
    pub percent: f64,
}

/// Scalar statistics over one generated batch.
#[derive(Debug, Clone, Default)]
pub struct BatchMetrics {
    /// Percentage of triples absent from the reference corpus.
    pub novelty: f64,
    /// Percentage of triples present in the reference corpus.
    pub overlap: f64,
    /// Percentage of distinct (head, relation, tail) keys in the batch.
    pub uniqueness: f64,
    /// Percentage of the relation vocabulary used by the batch.
    pub relation_diversity: f64,
    /// Arithmetic mean of the confidence scores.
    pub avg_confidence: f64,
    /// Percentage of triples passing their relation's tail rule.
    pub schema_validity: f64,
    /// Total triples in the batch.
    pub total_generated: usize,
    /// Whether novelty was checked against a real corpus. When false,
    /// novelty/overlap are the assumed-novel policy values, not
    /// measurements.
    pub novelty_check_active: bool,
    /// Per-relation counts, sorted by relation id ascending.
    pub relation_freq: Vec<RelationFrequency>,
}

impl BatchMetrics {
    /// Derive all statistics for a batch.
    ///
    /// With an unavailable corpus every triple counts as novel by policy
    /// and the relation vocabulary falls back to
    /// [`MetricsConfig::default_vocab_size`]; `novelty_check_active`
    /// records which mode produced the numbers.
    pub fn compute(
        batch: &GeneratedBatch,
        corpus: &ReferenceCorpus,
        rules: &RuleTable,
        config: &MetricsConfig,
    ) -> Self {
        let novelty_check_active = corpus.is_available();
        let total = batch.len();
        if total == 0 {
            return Self {
                novelty_check_active,
                ..Self::default()
            };
        }
        let total_f = total as f64;

        let novel = if novelty_check_active {
            batch
                .triples()
                .iter()
                .filter(|st| !corpus.contains(&st.triple))
                .count()
        } else {
            total
        };
        let overlap = total - novel;

        let distinct: HashSet<&Triple> = batch.triples().iter().map(|st| &st.triple).collect();

        let mut counts: BTreeMap<&RelationId, usize> = BTreeMap::new();
        for st in batch.triples() {
            *counts.entry(&st.triple.relation).or_default() += 1;
        }

        // An empty vocabulary is as useless as an unknown one.
        let vocab = corpus
            .relation_count()
            .filter(|&n| n > 0)
            .unwrap_or(config.default_vocab_size);
        let relation_diversity = if vocab == 0 {
            0.0
        } else {
            counts.len() as f64 / vocab as f64 * 100.0
        };

        let relation_freq = counts
            .iter()
            .map(|(relation, &count)| RelationFrequency {
                relation: relation.as_str().to_string(),
                count,
                percent: count as f64 / total_f * 100.0,
            })
            .collect();

        let score_sum: f64 = batch.triples().iter().map(|st| st.score).sum();
        let valid = batch
            .triples()
            .iter()
            .filter(|st| rules.is_valid(&st.triple))
            .count();

        Self {
            novelty: novel as f64 / total_f * 100.0,
            overlap: overlap as f64 / total_f * 100.0,
            uniqueness: distinct.len() as f64 / total_f * 100.0,
            relation_diversity,
            avg_confidence: score_sum / total_f,
            schema_validity: valid as f64 / total_f * 100.0,
            total_generated: total,
            novelty_check_active,
            relation_freq,
        }
    }

    /// Format as a one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "novelty: {:.1}% | unique: {:.1}% | diversity: {:.1}% | valid: {:.1}% (n={})",
            self.novelty,
            self.uniqueness,
            self.relation_diversity,
            self.schema_validity,
            self.total_generated
        )
    }
}
