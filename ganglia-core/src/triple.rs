//! Triple types for knowledge-graph batches.
//!
//! A triple represents a (head, relation, tail) statement. Generated
//! batches attach a confidence score to each triple.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create a new entity ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier for a relation type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelationId(pub String);

impl RelationId {
    /// Create a new relation ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RelationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RelationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A (head, relation, tail) triple.
///
/// Identity is the ordered tuple of the three identifiers. The derived
/// `Hash`/`Eq` make a triple usable directly as a set key, so corpus
/// membership tests are structural rather than string-joined.
///
/// # Example
///
/// ```rust
/// use ganglia_core::Triple;
///
/// let triple = Triple::new("e1", "dblp:hasAuthor", "author_42");
/// assert_eq!(triple.head.as_str(), "e1");
/// assert_eq!(triple.relation.as_str(), "dblp:hasAuthor");
/// assert_eq!(triple.tail.as_str(), "author_42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Head entity (subject).
    pub head: EntityId,

    /// Relation type (predicate).
    pub relation: RelationId,

    /// Tail entity (object).
    pub tail: EntityId,
}

impl Triple {
    /// Create a new triple.
    pub fn new(
        head: impl Into<EntityId>,
        relation: impl Into<RelationId>,
        tail: impl Into<EntityId>,
    ) -> Self {
        Self {
            head: head.into(),
            relation: relation.into(),
            tail: tail.into(),
        }
    }

    /// Parse from a tab-separated line: `head\trelation\ttail`.
    ///
    /// The line must contain exactly three fields.
    pub fn from_tsv(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(Error::ParseLine(format!(
                "expected 3 fields, got {}: {}",
                fields.len(),
                line
            )));
        }
        Ok(Self::new(fields[0], fields[1], fields[2]))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.head, self.relation, self.tail)
    }
}

/// A triple plus model confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTriple {
    /// The generated statement.
    pub triple: Triple,

    /// Model confidence. Typically in \[0, 1\] but not enforced.
    pub score: f64,
}

impl ScoredTriple {
    /// Create a new scored triple.
    pub fn new(triple: Triple, score: f64) -> Self {
        Self { triple, score }
    }

    /// Parse from a tab-separated line: `head\trelation\ttail\tscore`.
    ///
    /// At least four fields are required and the fourth must parse as a
    /// float; extra fields are ignored.
    pub fn from_tsv(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            return Err(Error::ParseLine(format!(
                "expected at least 4 fields, got {}: {}",
                fields.len(),
                line
            )));
        }
        let score: f64 = fields[3]
            .parse()
            .map_err(|_| Error::ParseLine(format!("non-numeric score: {}", fields[3])))?;
        Ok(Self::new(Triple::new(fields[0], fields[1], fields[2]), score))
    }
}

impl fmt::Display for ScoredTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.4}", self.triple, self.score)
    }
}
