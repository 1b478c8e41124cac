use query_core::{ElementType, EntitySchema, FieldType};

/// Filterable and sortable fields of a movie document.
///
/// Names match the stored document keys, so a compiled predicate can be
/// evaluated against a document without renaming.
pub fn movie_schema() -> EntitySchema {
    EntitySchema::new()
        .field("title", FieldType::String)
        .field("plot", FieldType::String)
        .field("year", FieldType::Integer)
        .field("runtime", FieldType::Integer)
        .field("imdb_rating", FieldType::Float)
        .field("released", FieldType::Date)
        .field("genres", FieldType::ArrayOf(ElementType::String))
        .field("cast", FieldType::ArrayOf(ElementType::String))
        .field("directors", FieldType::ArrayOf(ElementType::String))
        .field("languages", FieldType::ArrayOf(ElementType::String))
        .field("awards", FieldType::Object)
}
