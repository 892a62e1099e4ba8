//! Relation tail validation rules.
//!
//! Each relation may declare what kind of value its tail should hold.
//! Only two categories carry a machine check (years are digit strings,
//! author entities embed "author" in their identifier); the remaining
//! categories document the schema and always validate.

use ganglia_core::{RelationId, Triple};
use std::collections::HashMap;

/// Expected tail category for a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailRule {
    /// Tail must be composed entirely of decimal digits.
    Year,
    /// Tail must contain the substring `author`.
    Author,
    /// Venue entity (conference series, journal, listing). Always valid.
    Venue,
    /// Organization entity. Always valid.
    Organization,
    /// Publication entity. Always valid.
    Publication,
    /// Ontology type object. Always valid.
    Type,
}

impl TailRule {
    /// Check a tail value against this rule.
    pub fn validates(&self, tail: &str) -> bool {
        match self {
            TailRule::Year => !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()),
            TailRule::Author => tail.contains("author"),
            _ => true,
        }
    }
}

/// Lookup table from relation to expected tail category.
///
/// Relations without an entry are automatically valid.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<RelationId, TailRule>,
}

impl RuleTable {
    /// An empty table: every triple validates.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Build a table from explicit (relation, rule) pairs.
    pub fn from_rules(rules: impl IntoIterator<Item = (RelationId, TailRule)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The DBLP citation-graph rule set.
    pub fn dblp() -> Self {
        Self::from_rules(
            [
                ("dblp:hasAuthor", TailRule::Author),
                ("dblp:hasEditor", TailRule::Author),
                ("dblp:coauthorWith", TailRule::Author),
                ("dblp:conferenceSeries", TailRule::Venue),
                ("dblp:journalID", TailRule::Venue),
                ("dblp:listedIn", TailRule::Venue),
                ("dblp:presentedAt", TailRule::Venue),
                ("dblp:publishedInJournal", TailRule::Venue),
                ("dblp:publishedInYear", TailRule::Year),
                ("dblp:conferenceYear", TailRule::Year),
                ("dblp:cites", TailRule::Publication),
                ("dblp:affiliation", TailRule::Organization),
                ("rdf:type", TailRule::Type),
            ]
            .map(|(relation, rule)| (RelationId::new(relation), rule)),
        )
    }

    /// Rule declared for a relation, if any.
    pub fn get(&self, relation: &RelationId) -> Option<TailRule> {
        self.rules.get(relation).copied()
    }

    /// Validate a triple's tail against its relation's rule.
    pub fn is_valid(&self, triple: &Triple) -> bool {
        self.get(&triple.relation)
            .map_or(true, |rule| rule.validates(triple.tail.as_str()))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::dblp()
    }
}
