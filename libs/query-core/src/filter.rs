//! Filter expression → `Predicate` compiler.
//!
//! Grammar:
//! ```text
//! filter := clause (',' clause)*
//! clause := field ':' value
//! value  := token ('|' token)*      ; '|' only meaningful for array fields
//! ```
//! Clauses are AND-combined. There is no OR and no grouping.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::Error;
use crate::predicate::{Condition, Pattern, Predicate, Value};
use crate::schema::{ElementType, EntitySchema, FieldType};

const CLAUSE_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = ':';
const TOKEN_SEPARATOR: char = '|';

/// Compile a filter expression against `schema`.
///
/// An absent or empty expression yields an empty predicate (matches everything).
/// Compilation is all-or-nothing: the first invalid clause aborts it.
pub fn compile_filter(schema: &EntitySchema, expr: Option<&str>) -> Result<Predicate, Error> {
    let mut predicate = Predicate::new();
    let Some(expr) = expr.filter(|e| !e.is_empty()) else {
        return Ok(predicate);
    };

    for clause in expr.split(CLAUSE_SEPARATOR) {
        // Split on the first ':' only, date-times carry their own colons.
        let (field, raw) = clause.split_once(FIELD_SEPARATOR).unwrap_or((clause, ""));
        let declared = schema
            .get(field)
            .ok_or_else(|| Error::invalid_field(field))?;
        let condition = convert(field, declared, raw)?;
        predicate.insert(field.to_string(), condition);
    }

    Ok(predicate)
}

fn convert(field: &str, declared: FieldType, raw: &str) -> Result<Condition, Error> {
    match declared {
        FieldType::String => partial_match(field, raw),
        FieldType::Integer => parse_integer(field, raw).map(Condition::Equals),
        FieldType::Float | FieldType::Number => parse_float(field, raw).map(Condition::Equals),
        FieldType::Date => parse_date(field, raw).map(Condition::Equals),
        FieldType::ArrayOf(element) => all_of(field, declared, element, raw),
        FieldType::Boolean | FieldType::Object => Err(Error::unsupported_type(field, declared)),
    }
}

fn all_of(
    field: &str,
    declared: FieldType,
    element: ElementType,
    raw: &str,
) -> Result<Condition, Error> {
    let tokens = raw.split(TOKEN_SEPARATOR);
    let conditions = match element {
        ElementType::String => tokens
            .map(|t| partial_match(field, t))
            .collect::<Result<Vec<_>, _>>()?,
        ElementType::Integer => tokens
            .map(|t| parse_integer(field, t).map(Condition::Equals))
            .collect::<Result<Vec<_>, _>>()?,
        ElementType::Float | ElementType::Number => tokens
            .map(|t| parse_float(field, t).map(Condition::Equals))
            .collect::<Result<Vec<_>, _>>()?,
        ElementType::Date | ElementType::Boolean | ElementType::Object => {
            return Err(Error::unsupported_type(field, declared))
        }
    };
    Ok(Condition::AllOf(conditions))
}

fn partial_match(field: &str, raw: &str) -> Result<Condition, Error> {
    let pattern = Pattern::case_insensitive(raw);
    // Syntax check only; the store compiles its own matcher.
    pattern
        .to_regex()
        .map_err(|_| Error::invalid_value(field, raw, "regular expression"))?;
    Ok(Condition::Regex(pattern))
}

fn parse_integer(field: &str, raw: &str) -> Result<Value, Error> {
    raw.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| Error::invalid_value(field, raw, "integer"))
}

fn parse_float(field: &str, raw: &str) -> Result<Value, Error> {
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Value::Float(f)),
        _ => Err(Error::invalid_value(field, raw, "number")),
    }
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and
/// plain `YYYY-MM-DD` dates (midnight UTC).
fn parse_date(field: &str, raw: &str) -> Result<Value, Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Value::Date(dt.with_timezone(&Utc)));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Value::Date(naive.and_utc()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Value::Date(naive.and_utc()))
        .ok_or_else(|| Error::invalid_value(field, raw, "date"))
}
