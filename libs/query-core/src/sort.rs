use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::schema::EntitySchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// `asc` in any letter case is ascending; every other token is descending.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("asc") {
            SortDir::Asc
        } else {
            SortDir::Desc
        }
    }

    /// +1 for ascending, -1 for descending.
    pub fn signum(self) -> i8 {
        match self {
            SortDir::Asc => 1,
            SortDir::Desc => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub dir: SortDir,
}

/// Ordered sort keys; earlier keys take precedence on ties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec(pub Vec<SortKey>);

impl SortSpec {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortKey> {
        self.0.iter()
    }

    /// Append a key, or update the direction of an existing one in place.
    pub fn set(&mut self, field: &str, dir: SortDir) {
        match self.0.iter_mut().find(|k| k.field == field) {
            Some(existing) => existing.dir = dir,
            None => self.0.push(SortKey {
                field: field.to_string(),
                dir,
            }),
        }
    }

    /// Reject keys that name fields absent from `schema`.
    pub fn validate(&self, schema: &EntitySchema) -> Result<(), Error> {
        match self.0.iter().find(|k| !schema.contains(&k.field)) {
            Some(key) => Err(Error::invalid_field(key.field.clone())),
            None => Ok(()),
        }
    }

    /// Render back into the wire grammar, e.g. `year:desc,title:asc`.
    pub fn to_expression(&self) -> String {
        self.0
            .iter()
            .map(|k| format!("{}:{}", k.field, k.dir.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Compile a sort expression (`field:dir,field:dir,...`).
///
/// An absent or empty expression returns `default` unchanged. Blank clauses
/// are skipped; a missing or unrecognised direction means descending.
pub fn compile_sort(expr: Option<&str>, default: &SortSpec) -> SortSpec {
    let Some(expr) = expr.filter(|e| !e.is_empty()) else {
        return default.clone();
    };

    let mut spec = SortSpec::empty();
    for clause in expr.split(',') {
        if clause.trim().is_empty() {
            continue;
        }
        let mut parts = clause.split(':');
        let field = parts.next().unwrap_or_default();
        let dir = SortDir::from_token(parts.next().unwrap_or_default());
        spec.set(field, dir);
    }
    spec
}
