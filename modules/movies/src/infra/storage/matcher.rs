//! Evaluation of compiled predicates and sort specs over JSON documents.
//!
//! Semantics follow document-store conventions: a scalar condition on an
//! array field matches when any element matches, and `AllOf` requires each
//! inner condition to be met by at least one element.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use query_core::{Condition, Predicate, SortDir, SortSpec, Value};
use regex::Regex;
use serde_json::{Map, Value as JsonValue};

pub type Document = Map<String, JsonValue>;

/// A predicate with its patterns compiled once per query.
#[derive(Debug)]
pub struct CompiledFilter(Vec<(String, Matcher)>);

#[derive(Debug)]
enum Matcher {
    Equals(Value),
    Regex(Regex),
    AllOf(Vec<Matcher>),
}

impl Matcher {
    fn compile(cond: &Condition) -> Result<Self, regex::Error> {
        Ok(match cond {
            Condition::Equals(v) => Matcher::Equals(v.clone()),
            Condition::Regex(p) => Matcher::Regex(p.to_regex()?),
            Condition::AllOf(inner) => Matcher::AllOf(
                inner
                    .iter()
                    .map(Matcher::compile)
                    .collect::<Result<_, _>>()?,
            ),
        })
    }

    fn matches(&self, value: &JsonValue) -> bool {
        match (self, value) {
            (Matcher::AllOf(inner), JsonValue::Array(items)) => inner
                .iter()
                .all(|m| items.iter().any(|item| m.matches_scalar(item))),
            (Matcher::AllOf(inner), other) => inner.iter().all(|m| m.matches_scalar(other)),
            (m, JsonValue::Array(items)) => items.iter().any(|item| m.matches_scalar(item)),
            (m, other) => m.matches_scalar(other),
        }
    }

    fn matches_scalar(&self, value: &JsonValue) -> bool {
        match self {
            Matcher::Regex(re) => value.as_str().is_some_and(|s| re.is_match(s)),
            Matcher::Equals(Value::Date(expected)) => value
                .as_str()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .is_some_and(|t| t.with_timezone(&Utc) == *expected),
            Matcher::Equals(lit) => match (lit.as_f64(), value.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            Matcher::AllOf(inner) => inner.iter().all(|m| m.matches_scalar(value)),
        }
    }
}

impl CompiledFilter {
    pub fn compile(predicate: &Predicate) -> Result<Self, regex::Error> {
        predicate
            .iter()
            .map(|(field, cond)| Ok((field.clone(), Matcher::compile(cond)?)))
            .collect::<Result<Vec<_>, _>>()
            .map(CompiledFilter)
    }

    /// All conditions hold. A missing or null field never matches.
    pub fn matches(&self, doc: &Document) -> bool {
        self.0.iter().all(|(field, m)| match doc.get(field) {
            None | Some(JsonValue::Null) => false,
            Some(v) => m.matches(v),
        })
    }
}

/// Order two documents by the sort keys, most significant first.
pub fn compare_documents(sort: &SortSpec, a: &Document, b: &Document) -> Ordering {
    for key in sort.iter() {
        let ord = compare_values(a.get(&key.field), b.get(&key.field));
        let ord = match key.dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn type_rank(v: Option<&JsonValue>) -> u8 {
    match v {
        None | Some(JsonValue::Null) => 0,
        Some(JsonValue::Number(_)) => 1,
        Some(JsonValue::String(_)) => 2,
        Some(JsonValue::Object(_)) => 3,
        Some(JsonValue::Array(_)) => 4,
        Some(JsonValue::Bool(_)) => 5,
    }
}

// Missing values sort before everything else; mixed types order by rank.
fn compare_values(a: Option<&JsonValue>, b: Option<&JsonValue>) -> Ordering {
    match (a, b) {
        (Some(JsonValue::Number(x)), Some(JsonValue::Number(y))) => x
            .as_f64()
            .unwrap_or_default()
            .total_cmp(&y.as_f64().unwrap_or_default()),
        // Timestamps compare as instants; the fraction is omitted when zero.
        (Some(JsonValue::String(x)), Some(JsonValue::String(y))) => {
            match (DateTime::parse_from_rfc3339(x), DateTime::parse_from_rfc3339(y)) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => x.cmp(y),
            }
        }
        (Some(JsonValue::Bool(x)), Some(JsonValue::Bool(y))) => x.cmp(y),
        (Some(JsonValue::Array(xs)), Some(JsonValue::Array(ys))) => xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| compare_values(Some(x), Some(y)))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or_else(|| xs.len().cmp(&ys.len())),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}
