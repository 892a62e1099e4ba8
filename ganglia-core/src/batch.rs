//! Generated-batch selection and parsing.
//!
//! Generation runs drop tab-separated files into a directory; each file
//! has one header line followed by `head\trelation\ttail\tscore` rows.
//! Filenames carry sortable run counters, so "latest batch" is the
//! lexicographically last matching name - no timestamps are read.

use crate::{Result, ScoredTriple};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the newest generation file in `dir`.
///
/// Matches regular files whose name starts with `prefix` and returns the
/// lexicographically last one. Returns `Ok(None)` when nothing matches
/// or the directory does not exist; callers treat that as "nothing to
/// report".
pub fn latest_generated_file(dir: impl AsRef<Path>, prefix: &str) -> Result<Option<PathBuf>> {
    let entries = match fs::read_dir(dir.as_ref()) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(prefix) {
            matches.push(entry.path());
        }
    }

    matches.sort();
    Ok(matches.pop())
}

/// One batch of scored triples, in file order.
///
/// Order matters downstream: the hypothesis sample is a stable truncation
/// of the batch, not a re-sort. Duplicates are kept - they feed the
/// uniqueness metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedBatch {
    triples: Vec<ScoredTriple>,
}

impl GeneratedBatch {
    /// Build a batch from triples already in memory.
    pub fn from_triples(triples: impl IntoIterator<Item = ScoredTriple>) -> Self {
        Self {
            triples: triples.into_iter().collect(),
        }
    }

    /// Parse a generation file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::read(File::open(path)?)
    }

    /// Parse a batch from a reader.
    ///
    /// The first line is a header and is discarded. Data lines need at
    /// least four fields with a numeric fourth; lines failing either
    /// check are dropped individually without aborting the read.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let buf = BufReader::new(reader);
        let mut lines = buf.lines();

        // Header line.
        lines.next().transpose()?;

        let mut triples = Vec::new();
        let mut dropped = 0usize;
        for line in lines {
            let line = line?;
            match ScoredTriple::from_tsv(line.trim()) {
                Ok(triple) => triples.push(triple),
                Err(_) => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(dropped, "dropped malformed generated lines");
        }

        Ok(Self { triples })
    }

    /// The batch contents, in file order.
    pub fn triples(&self) -> &[ScoredTriple] {
        &self.triples
    }

    /// Number of triples in the batch.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the batch holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Triple;

    #[test]
    fn test_read_skips_header_and_malformed() {
        let input = "head\trelation\ttail\tscore\n\
                     e1\tr1\te2\t0.9\n\
                     e1\tr2\n\
                     e1\tr2\te3\tNaN-ish\n\
                     e4\tr2\te5\t0.5\n";
        let batch = GeneratedBatch::read(input.as_bytes()).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.triples()[0].triple, Triple::new("e1", "r1", "e2"));
        assert_eq!(batch.triples()[1].triple, Triple::new("e4", "r2", "e5"));
    }

    #[test]
    fn test_order_preserved() {
        let input = "h\tr\tt\ts\n\
                     b\tr\tx\t0.1\n\
                     a\tr\ty\t0.2\n\
                     c\tr\tz\t0.3\n";
        let batch = GeneratedBatch::read(input.as_bytes()).unwrap();

        let heads: Vec<&str> = batch
            .triples()
            .iter()
            .map(|st| st.triple.head.as_str())
            .collect();
        assert_eq!(heads, ["b", "a", "c"]);
    }

    #[test]
    fn test_header_only_is_empty() {
        let batch = GeneratedBatch::read("head\trelation\ttail\tscore\n".as_bytes()).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_latest_generated_file_lexicographic() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "generated_000002.txt",
            "generated_000010.txt",
            "generated_000001.txt",
            "training_log.csv",
        ] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let latest = latest_generated_file(dir.path(), "generated").unwrap();
        assert_eq!(
            latest.unwrap().file_name().unwrap(),
            "generated_000010.txt"
        );
    }

    #[test]
    fn test_latest_generated_file_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(latest_generated_file(dir.path(), "generated")
            .unwrap()
            .is_none());

        // A missing directory means the same thing: nothing to report.
        assert!(latest_generated_file(dir.path().join("nope"), "generated")
            .unwrap()
            .is_none());
    }
}
