//! Dashboard report assembly.
//!
//! This module provides the **serde-friendly** aggregate the dashboard UI
//! consumes. It is built once per run from the computed parts and written
//! as a single JSON document; nothing here persists between runs.

use crate::{BatchMetrics, Hypothesis, RelationFrequency, TrainingStatus};
use serde::Serialize;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Scalar stats block of the report. Percentages are rounded to two
/// decimals, the confidence mean to four.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStats {
    pub novelty: f64,
    pub train_overlap: f64,
    pub uniqueness: f64,
    pub relation_diversity: f64,
    pub avg_distance: f64,
    pub schema_validity: f64,
    pub total_generated: usize,
    pub total_knowledge_base: usize,
    /// False when novelty/overlap come from the assumed-novel fallback.
    pub novelty_check_active: bool,
}

/// Training-status block, losses rounded to four decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTrainingStatus {
    pub epoch: u64,
    pub d_loss: f64,
    pub g_loss: f64,
}

/// The complete dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Wall-clock timestamp of this run.
    pub last_updated: String,
    pub training_status: ReportTrainingStatus,
    pub stats: ReportStats,
    pub relation_freq: Vec<RelationFrequency>,
    pub hypotheses: Vec<Hypothesis>,
}

impl DashboardReport {
    /// Merge the computed parts into the final payload.
    pub fn assemble(
        last_updated: impl Into<String>,
        status: &TrainingStatus,
        metrics: &BatchMetrics,
        hypotheses: Vec<Hypothesis>,
        knowledge_base_size: usize,
    ) -> Self {
        let relation_freq = metrics
            .relation_freq
            .iter()
            .map(|f| RelationFrequency {
                relation: f.relation.clone(),
                count: f.count,
                percent: round2(f.percent),
            })
            .collect();

        Self {
            last_updated: last_updated.into(),
            training_status: ReportTrainingStatus {
                epoch: status.epoch,
                d_loss: round4(status.d_loss),
                g_loss: round4(status.g_loss),
            },
            stats: ReportStats {
                novelty: round2(metrics.novelty),
                train_overlap: round2(metrics.overlap),
                uniqueness: round2(metrics.uniqueness),
                relation_diversity: round2(metrics.relation_diversity),
                avg_distance: round4(metrics.avg_confidence),
                schema_validity: round2(metrics.schema_validity),
                total_generated: metrics.total_generated,
                total_knowledge_base: knowledge_base_size,
                novelty_check_active: metrics.novelty_check_active,
            },
            relation_freq,
            hypotheses,
        }
    }
}
