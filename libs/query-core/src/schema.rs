//! Entity schemas: field name → primitive (or array-of-primitive) type tag.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTypeTag;

/// Element type of an array field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    String,
    Integer,
    Float,
    Number,
    Date,
    Boolean,
    Object,
}

impl ElementType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Object => "object",
        }
    }
}

impl FromStr for ElementType {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "boolean" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            _ => Err(UnknownTypeTag(s.to_string())),
        }
    }
}

/// Declared type of a schema field.
///
/// `Boolean` and `Object` can be declared but have no filter conversion rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Number,
    Date,
    Boolean,
    Object,
    ArrayOf(ElementType),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Number => f.write_str("number"),
            Self::Date => f.write_str("date"),
            Self::Boolean => f.write_str("boolean"),
            Self::Object => f.write_str("object"),
            Self::ArrayOf(element) => write!(f, "array<{}>", element.as_str()),
        }
    }
}

impl FromStr for FieldType {
    type Err = UnknownTypeTag;

    /// Accepts `string`, `integer`, `float`, `number`, `date`, `boolean`,
    /// `object` and `array<E>` where `E` is any of the scalar tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        if let Some(inner) = tag
            .strip_prefix("array<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return inner
                .parse::<ElementType>()
                .map(FieldType::ArrayOf)
                .map_err(|_| UnknownTypeTag(s.to_string()));
        }

        match tag.as_str() {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "boolean" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            _ => Err(UnknownTypeTag(s.to_string())),
        }
    }
}

impl TryFrom<String> for FieldType {
    type Error = UnknownTypeTag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.to_string()
    }
}

/// Immutable description of a queryable record type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntitySchema {
    fields: HashMap<String, FieldType>,
}

impl EntitySchema {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Builder-style insert; a repeated name replaces the earlier declaration.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, FieldType)> for EntitySchema {
    fn from_iter<I: IntoIterator<Item = (S, FieldType)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
