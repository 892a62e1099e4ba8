//! Metrics over synthetic knowledge-graph batches.
//!
//! This crate derives dashboard statistics from one generated batch:
//!
//! - [`BatchMetrics`] - novelty, uniqueness, diversity, validity, confidence
//! - [`RuleTable`] / [`TailRule`] - relation tail validation rules
//! - [`decode_hypotheses`] - bounded display sample with resolved names
//! - [`TrainingStatus`] - snapshot of the training log tail
//! - [`DashboardReport`] - the assembled JSON payload
//!
//! # Example
//!
//! ```rust
//! use ganglia_core::{GeneratedBatch, ReferenceCorpus, ScoredTriple, Triple};
//! use ganglia_metrics::{BatchMetrics, MetricsConfig, RuleTable};
//!
//! let batch = GeneratedBatch::from_triples([
//!     ScoredTriple::new(Triple::new("e1", "r1", "e2"), 0.9),
//!     ScoredTriple::new(Triple::new("e1", "r2", "e3"), 0.5),
//! ]);
//! let corpus = ReferenceCorpus::from_triples([Triple::new("e1", "r1", "e2")]);
//!
//! let metrics = BatchMetrics::compute(
//!     &batch,
//!     &corpus,
//!     &RuleTable::empty(),
//!     &MetricsConfig::default(),
//! );
//! assert_eq!(metrics.novelty, 50.0);
//! assert_eq!(metrics.uniqueness, 100.0);
//! ```

mod config;
mod engine;
mod report;
mod rules;
mod sample;
mod training;

pub use config::MetricsConfig;
pub use engine::{BatchMetrics, RelationFrequency};
pub use report::{DashboardReport, ReportStats, ReportTrainingStatus};
pub use rules::{RuleTable, TailRule};
pub use sample::{decode_hypotheses, Hypothesis};
pub use training::TrainingStatus;
