//! Training-log snapshot.
//!
//! The dashboard shows where adversarial training currently stands. Only
//! the last row of the log matters; the status is advisory and never
//! fatal, so every failure mode degrades to the zero snapshot.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Training state read from the tail of the log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrainingStatus {
    /// Last completed epoch.
    pub epoch: u64,
    /// Discriminator loss at that epoch.
    pub d_loss: f64,
    /// Generator loss at that epoch.
    pub g_loss: f64,
}

#[derive(Debug, Deserialize)]
struct LogRow {
    #[serde(rename = "Epoch", default)]
    epoch: u64,
    #[serde(rename = "D_Loss", default)]
    d_loss: f64,
    #[serde(rename = "G_Loss", default)]
    g_loss: f64,
}

impl TrainingStatus {
    /// Read the last row of a CSV training log.
    ///
    /// A missing file, unreadable rows, or an empty log all yield the
    /// zero snapshot with a warning.
    pub fn from_csv(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "training log not found, status defaults to zero");
            return Self::default();
        }

        let mut reader = match csv::Reader::from_path(path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable training log");
                return Self::default();
            }
        };

        let mut last = None;
        for row in reader.deserialize::<LogRow>() {
            match row {
                Ok(row) => last = Some(row),
                Err(e) => warn!(error = %e, "skipping malformed training log row"),
            }
        }

        last.map(|row| Self {
            epoch: row.epoch,
            d_loss: row.d_loss,
            g_loss: row.g_loss,
        })
        .unwrap_or_default()
    }
}
