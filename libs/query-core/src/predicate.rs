//! Backend-agnostic query predicate: a conjunction of per-field conditions.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use regex::{Regex, RegexBuilder};

/// Typed literal produced by value conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Date(DateTime<Utc>),
}

impl Value {
    /// Numeric view used when comparing integers against floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Date(_) => None,
        }
    }
}

/// A regular-expression fragment matched anywhere inside a string value.
///
/// The source is taken from user input verbatim; metacharacters are not escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub source: String,
    pub case_insensitive: bool,
}

impl Pattern {
    pub fn case_insensitive(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            case_insensitive: true,
        }
    }

    pub fn to_regex(&self) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&self.source)
            .case_insensitive(self.case_insensitive)
            .build()
    }
}

/// Matching condition for a single field.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// Exact equality with a typed literal.
    Equals(Value),
    /// Partial match against a string field.
    Regex(Pattern),
    /// Every inner condition must be satisfied by some element of an array field.
    AllOf(Vec<Condition>),
}

/// Field name → condition. Iteration order is by field name, so two
/// predicates compiled from reordered clauses compare equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predicate(BTreeMap<String, Condition>);

impl Predicate {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert or replace the condition for `field`.
    pub(crate) fn insert(&mut self, field: String, condition: Condition) {
        self.0.insert(field, condition);
    }

    pub fn get(&self, field: &str) -> Option<&Condition> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Condition> {
        self.0.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a Predicate {
    type Item = (&'a String, &'a Condition);
    type IntoIter = btree_map::Iter<'a, String, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
