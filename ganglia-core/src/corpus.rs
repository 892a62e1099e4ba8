//! Reference corpus of known triples.
//!
//! The corpus backs the novelty check: a generated triple already present
//! in it is overlap, everything else is novel. Loading never fails the
//! run - a missing file or an allocation failure mid-load yields an
//! unavailable corpus and novelty-based metrics fall back to their
//! assumed-novel policy.

use crate::{RelationId, Result, Triple};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// The set of known triples, used for membership tests only.
///
/// # Example
///
/// ```rust
/// use ganglia_core::{ReferenceCorpus, Triple};
///
/// let corpus = ReferenceCorpus::read("e1\tr1\te2\n".as_bytes()).unwrap();
/// assert!(corpus.contains(&Triple::new("e1", "r1", "e2")));
/// assert!(!corpus.contains(&Triple::new("e1", "r1", "e3")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceCorpus {
    triples: HashSet<Triple>,
    relations: HashSet<RelationId>,
    available: bool,
}

impl ReferenceCorpus {
    /// An unavailable corpus: every membership test reports "not known".
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Build an available corpus from triples already in memory.
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut corpus = Self {
            available: true,
            ..Self::default()
        };
        for triple in triples {
            corpus.relations.insert(triple.relation.clone());
            corpus.triples.insert(triple);
        }
        corpus
    }

    /// Load from a tab-separated file (`head\trelation\ttail` per line).
    ///
    /// A missing file or a failure mid-load (read error, allocation
    /// failure on a corpus too large for memory) degrades to
    /// [`ReferenceCorpus::unavailable`] with a warning instead of
    /// aborting the run.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                path = %path.display(),
                "reference triples not found, exact novelty check disabled"
            );
            return Self::unavailable();
        }

        match File::open(path).map_err(Into::into).and_then(Self::read) {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load reference corpus, exact novelty check disabled"
                );
                Self::unavailable()
            }
        }
    }

    /// Parse a reference corpus from a reader.
    ///
    /// Lines that are empty or do not have exactly three fields are
    /// skipped. Set growth is fallible so that an oversized corpus
    /// surfaces as an error rather than an allocation abort.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let buf = BufReader::new(reader);
        let mut triples = HashSet::new();
        let mut relations = HashSet::new();
        let mut skipped = 0usize;

        for line in buf.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Ok(triple) = Triple::from_tsv(line) else {
                skipped += 1;
                continue;
            };

            if triples.len() == triples.capacity() {
                triples
                    .try_reserve(triples.len().max(1024))
                    .map_err(|_| out_of_memory())?;
            }
            relations.insert(triple.relation.clone());
            triples.insert(triple);
        }

        if skipped > 0 {
            debug!(skipped, "skipped malformed reference lines");
        }

        Ok(Self {
            triples,
            relations,
            available: true,
        })
    }

    /// Membership test for a structural (head, relation, tail) key.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Whether the exact novelty check can run.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Number of distinct relations observed, when available.
    pub fn relation_count(&self) -> Option<usize> {
        self.available.then(|| self.relations.len())
    }

    /// Number of known triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the corpus holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

fn out_of_memory() -> crate::Error {
    std::io::Error::new(
        std::io::ErrorKind::OutOfMemory,
        "reference corpus exceeds available memory",
    )
    .into()
}
