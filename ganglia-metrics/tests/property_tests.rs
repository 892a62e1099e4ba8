//! Property-based tests for batch metrics.
//!
//! These verify invariants that should hold for any generated batch:
//! - Novelty and overlap partition the batch
//! - Uniqueness is a true distinct-key ratio
//! - Relation frequencies partition the batch
//! - Empty batches never divide by zero

use proptest::prelude::*;

use ganglia_core::{GeneratedBatch, ReferenceCorpus, ScoredTriple, Triple};
use ganglia_metrics::{BatchMetrics, MetricsConfig, RuleTable};

fn arb_entity_id() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,4}".prop_map(|s| s)
}

fn arb_relation() -> impl Strategy<Value = String> {
    "r[0-9]{1,2}".prop_map(|s| s)
}

prop_compose! {
    fn arb_scored_triple()(
        head in arb_entity_id(),
        relation in arb_relation(),
        tail in arb_entity_id(),
        score in 0.0f64..1.0f64,
    ) -> ScoredTriple {
        ScoredTriple::new(Triple::new(head, relation, tail), score)
    }
}

fn batch_of(triples: Vec<ScoredTriple>) -> GeneratedBatch {
    GeneratedBatch::from_triples(triples)
}

mod partition_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn novelty_and_overlap_sum_to_100(
            triples in prop::collection::vec(arb_scored_triple(), 1..60),
            known in prop::collection::vec(arb_scored_triple(), 0..30),
        ) {
            let corpus = ReferenceCorpus::from_triples(
                known.into_iter().map(|st| st.triple),
            );
            let metrics = BatchMetrics::compute(
                &batch_of(triples),
                &corpus,
                &RuleTable::empty(),
                &MetricsConfig::default(),
            );

            prop_assert!(
                (metrics.novelty + metrics.overlap - 100.0).abs() < 1e-6,
                "novelty {} + overlap {} != 100",
                metrics.novelty, metrics.overlap
            );
        }

        #[test]
        fn unavailable_corpus_means_fully_novel(
            triples in prop::collection::vec(arb_scored_triple(), 1..60),
        ) {
            let metrics = BatchMetrics::compute(
                &batch_of(triples),
                &ReferenceCorpus::unavailable(),
                &RuleTable::empty(),
                &MetricsConfig::default(),
            );

            prop_assert_eq!(metrics.novelty, 100.0);
            prop_assert_eq!(metrics.overlap, 0.0);
            prop_assert!(!metrics.novelty_check_active);
        }

        #[test]
        fn relation_freq_partitions_batch(
            triples in prop::collection::vec(arb_scored_triple(), 1..60),
        ) {
            let total = triples.len();
            let metrics = BatchMetrics::compute(
                &batch_of(triples),
                &ReferenceCorpus::unavailable(),
                &RuleTable::empty(),
                &MetricsConfig::default(),
            );

            let count_sum: usize = metrics.relation_freq.iter().map(|f| f.count).sum();
            prop_assert_eq!(count_sum, total, "frequency counts must cover the batch");

            let percent_sum: f64 = metrics.relation_freq.iter().map(|f| f.percent).sum();
            prop_assert!(
                (percent_sum - 100.0).abs() < 1e-6,
                "frequency percents sum to {}",
                percent_sum
            );

            let relations: Vec<&str> = metrics
                .relation_freq
                .iter()
                .map(|f| f.relation.as_str())
                .collect();
            let mut sorted = relations.clone();
            sorted.sort_unstable();
            prop_assert_eq!(relations, sorted, "frequency rows must sort by relation id");
        }
    }
}

mod uniqueness_props {
    use super::*;
    use std::collections::HashSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn uniqueness_bounded_and_exact(
            triples in prop::collection::vec(arb_scored_triple(), 1..60),
        ) {
            let distinct: HashSet<&Triple> = triples.iter().map(|st| &st.triple).collect();
            let all_distinct = distinct.len() == triples.len();
            let expected = distinct.len() as f64 / triples.len() as f64 * 100.0;

            let metrics = BatchMetrics::compute(
                &batch_of(triples),
                &ReferenceCorpus::unavailable(),
                &RuleTable::empty(),
                &MetricsConfig::default(),
            );

            prop_assert!(metrics.uniqueness <= 100.0 + 1e-9);
            prop_assert!((metrics.uniqueness - expected).abs() < 1e-6);
            prop_assert_eq!(
                metrics.uniqueness >= 100.0 - 1e-9,
                all_distinct,
                "uniqueness hits 100 exactly when all keys are distinct"
            );
        }

        #[test]
        fn duplicating_the_batch_halves_uniqueness(
            triples in prop::collection::vec(arb_scored_triple(), 1..30),
        ) {
            let distinct: HashSet<&Triple> = triples.iter().map(|st| &st.triple).collect();
            prop_assume!(distinct.len() == triples.len());

            let mut doubled = triples.clone();
            doubled.extend(triples);

            let metrics = BatchMetrics::compute(
                &batch_of(doubled),
                &ReferenceCorpus::unavailable(),
                &RuleTable::empty(),
                &MetricsConfig::default(),
            );

            prop_assert!((metrics.uniqueness - 50.0).abs() < 1e-6);
        }
    }
}

mod zero_props {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn empty_batch_never_divides_by_zero(
            known in prop::collection::vec(arb_scored_triple(), 0..30),
        ) {
            let corpus = ReferenceCorpus::from_triples(
                known.into_iter().map(|st| st.triple),
            );
            let metrics = BatchMetrics::compute(
                &GeneratedBatch::default(),
                &corpus,
                &RuleTable::dblp(),
                &MetricsConfig::default(),
            );

            for value in [
                metrics.novelty,
                metrics.overlap,
                metrics.uniqueness,
                metrics.relation_diversity,
                metrics.avg_confidence,
                metrics.schema_validity,
            ] {
                prop_assert!(value == 0.0, "expected 0, got {}", value);
            }
            prop_assert!(metrics.relation_freq.is_empty());
        }

        #[test]
        fn scores_never_affect_membership(
            triples in prop::collection::vec(arb_scored_triple(), 1..40),
        ) {
            // The corpus knows every triple in the batch, so overlap must be
            // total no matter what the scores were.
            let corpus = ReferenceCorpus::from_triples(
                triples.iter().map(|st| st.triple.clone()),
            );
            let metrics = BatchMetrics::compute(
                &batch_of(triples),
                &corpus,
                &RuleTable::empty(),
                &MetricsConfig::default(),
            );

            prop_assert_eq!(metrics.novelty, 0.0);
            prop_assert_eq!(metrics.overlap, 100.0);
        }
    }
}
