//! Core types for analyzing synthetic knowledge-graph batches.
//!
//! This crate provides the data model and loaders shared by the ganglia
//! pipeline:
//!
//! - [`Triple`] - A (head, relation, tail) fact, usable directly as a set key
//! - [`ScoredTriple`] - A triple plus model confidence
//! - [`ReferenceCorpus`] - Known triples, used for novelty membership tests
//! - [`IdentifierMap`] - Identifier-to-display-name table
//! - [`GeneratedBatch`] - One generation file parsed into scored triples
//!
//! # Example
//!
//! ```rust
//! use ganglia_core::{GeneratedBatch, Triple};
//!
//! let input = "head\trelation\ttail\tscore\n\
//!              e1\tr1\te2\t0.9\n\
//!              e1\tr2\te3\t0.5\n";
//!
//! let batch = GeneratedBatch::read(input.as_bytes()).unwrap();
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch.triples()[0].triple, Triple::new("e1", "r1", "e2"));
//! ```

mod batch;
mod corpus;
mod error;
mod mapping;
mod triple;

pub use batch::{latest_generated_file, GeneratedBatch};
pub use corpus::ReferenceCorpus;
pub use error::{Error, Result};
pub use mapping::IdentifierMap;
pub use triple::{EntityId, RelationId, ScoredTriple, Triple};
