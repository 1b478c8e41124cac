#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::{
        compile_filter, compile_sort, Condition, ElementType, EntitySchema, Error, FieldType,
        Pattern, SortDir, SortKey, SortSpec, Value,
    };

    fn movie_schema() -> EntitySchema {
        EntitySchema::new()
            .field("title", FieldType::String)
            .field("plot", FieldType::String)
            .field("year", FieldType::Integer)
            .field("imdb_rating", FieldType::Float)
            .field("metacritic", FieldType::Number)
            .field("released", FieldType::Date)
            .field("genres", FieldType::ArrayOf(ElementType::String))
            .field("scores", FieldType::ArrayOf(ElementType::Integer))
            .field("weights", FieldType::ArrayOf(ElementType::Float))
            .field("premieres", FieldType::ArrayOf(ElementType::Date))
            .field("awards", FieldType::Object)
            .field("restricted", FieldType::Boolean)
    }

    fn regex(source: &str) -> Condition {
        Condition::Regex(Pattern::case_insensitive(source))
    }

    #[test]
    fn test_absent_filter_matches_everything() {
        let schema = movie_schema();
        assert!(compile_filter(&schema, None).unwrap().is_empty());
        assert!(compile_filter(&schema, Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_string_field_compiles_to_case_insensitive_regex() {
        let predicate = compile_filter(&movie_schema(), Some("title:matrix")).unwrap();
        assert_eq!(predicate.len(), 1);
        assert_eq!(predicate.get("title"), Some(&regex("matrix")));
    }

    #[test]
    fn test_string_value_is_not_escaped() {
        let predicate = compile_filter(&movie_schema(), Some("title:^The.*")).unwrap();
        assert_eq!(predicate.get("title"), Some(&regex("^The.*")));
    }

    #[test]
    fn test_malformed_regex_is_invalid_value() {
        let err = compile_filter(&movie_schema(), Some("title:(unclosed")).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue {
                ref field,
                expected: "regular expression",
                ..
            } if field == "title"
        ));
        assert_eq!(err.code(), "QUERY_INVALID_VALUE");
    }

    #[test]
    fn test_numeric_fields_compile_to_equality() {
        let predicate = compile_filter(
            &movie_schema(),
            Some("year:1999,imdb_rating:8.7,metacritic:73"),
        )
        .unwrap();
        assert_eq!(
            predicate.get("year"),
            Some(&Condition::Equals(Value::Integer(1999)))
        );
        assert_eq!(
            predicate.get("imdb_rating"),
            Some(&Condition::Equals(Value::Float(8.7)))
        );
        assert_eq!(
            predicate.get("metacritic"),
            Some(&Condition::Equals(Value::Float(73.0)))
        );
    }

    #[test]
    fn test_unparseable_numbers_are_invalid_values() {
        let schema = movie_schema();
        for (expr, expected) in [
            ("year:nineteen", "integer"),
            ("year:19.5", "integer"),
            ("imdb_rating:high", "number"),
            ("imdb_rating:NaN", "number"),
        ] {
            match compile_filter(&schema, Some(expr)) {
                Err(Error::InvalidValue { expected: e, .. }) => assert_eq!(e, expected, "{expr}"),
                other => panic!("expected InvalidValue for {expr}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_date_field_accepts_date_and_datetime() {
        let schema = movie_schema();
        let midnight = Utc.with_ymd_and_hms(1999, 3, 31, 0, 0, 0).unwrap();

        let predicate = compile_filter(&schema, Some("released:1999-03-31")).unwrap();
        assert_eq!(
            predicate.get("released"),
            Some(&Condition::Equals(Value::Date(midnight)))
        );

        // The first ':' separates the field; the rest belongs to the value.
        let predicate = compile_filter(&schema, Some("released:1999-03-31T00:00:00Z")).unwrap();
        assert_eq!(
            predicate.get("released"),
            Some(&Condition::Equals(Value::Date(midnight)))
        );

        let err = compile_filter(&schema, Some("released:yesterday")).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { expected: "date", .. }));
    }

    #[test]
    fn test_string_arrays_compile_to_all_of_regex() {
        let schema = EntitySchema::new()
            .field("foo", FieldType::ArrayOf(ElementType::String))
            .field("bar", FieldType::ArrayOf(ElementType::String));

        let predicate = compile_filter(&schema, Some("foo:foo|bar,bar:baz|qux")).unwrap();
        assert_eq!(predicate.len(), 2);
        assert_eq!(
            predicate.get("foo"),
            Some(&Condition::AllOf(vec![regex("foo"), regex("bar")]))
        );
        assert_eq!(
            predicate.get("bar"),
            Some(&Condition::AllOf(vec![regex("baz"), regex("qux")]))
        );
    }

    #[test]
    fn test_integer_array_compiles_to_all_of_membership() {
        let schema = EntitySchema::new().field("foo", FieldType::ArrayOf(ElementType::Integer));
        let predicate = compile_filter(&schema, Some("foo:1|2")).unwrap();
        assert_eq!(
            predicate.get("foo"),
            Some(&Condition::AllOf(vec![
                Condition::Equals(Value::Integer(1)),
                Condition::Equals(Value::Integer(2)),
            ]))
        );
    }

    #[test]
    fn test_float_array_rejects_bad_token() {
        let err = compile_filter(&movie_schema(), Some("weights:0.5|x")).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref value, .. } if value == "x"));
    }

    #[test]
    fn test_unknown_field_is_invalid_field() {
        let schema = EntitySchema::new().field("foo", FieldType::String);
        let err = compile_filter(&schema, Some("invalid:foo")).unwrap_err();
        assert_eq!(err, Error::InvalidField("invalid".to_string()));
    }

    #[test]
    fn test_invalid_field_after_valid_clause_yields_no_partial_predicate() {
        let result = compile_filter(&movie_schema(), Some("title:alien,director:scott"));
        assert!(matches!(result, Err(Error::InvalidField(ref f)) if f == "director"));
    }

    #[test]
    fn test_unsupported_types_are_rejected() {
        let schema = movie_schema();
        for (expr, field, declared) in [
            ("awards:oscar", "awards", FieldType::Object),
            ("restricted:true", "restricted", FieldType::Boolean),
            (
                "premieres:2001-01-01",
                "premieres",
                FieldType::ArrayOf(ElementType::Date),
            ),
        ] {
            let err = compile_filter(&schema, Some(expr)).unwrap_err();
            assert_eq!(
                err,
                Error::UnsupportedType {
                    field: field.to_string(),
                    declared
                }
            );
        }
    }

    #[test]
    fn test_repeated_field_keeps_last_clause() {
        let predicate = compile_filter(&movie_schema(), Some("year:1999,year:2003")).unwrap();
        assert_eq!(predicate.len(), 1);
        assert_eq!(
            predicate.get("year"),
            Some(&Condition::Equals(Value::Integer(2003)))
        );
    }

    #[test]
    fn test_clause_without_separator_has_empty_value() {
        let predicate = compile_filter(&movie_schema(), Some("title")).unwrap();
        assert_eq!(predicate.get("title"), Some(&regex("")));
    }

    #[test]
    fn test_compilation_is_deterministic_and_order_independent() {
        let schema = movie_schema();
        let a = compile_filter(&schema, Some("title:alien,plot:space,genres:horror")).unwrap();
        let b = compile_filter(&schema, Some("title:alien,plot:space,genres:horror")).unwrap();
        let c = compile_filter(&schema, Some("genres:horror,plot:space,title:alien")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.fields().collect::<Vec<_>>(), vec!["genres", "plot", "title"]);
    }

    #[test]
    fn test_absent_sort_returns_default() {
        let default = SortSpec(vec![SortKey {
            field: "year".to_string(),
            dir: SortDir::Desc,
        }]);
        assert_eq!(compile_sort(None, &default), default);
        assert_eq!(compile_sort(Some(""), &default), default);
    }

    #[test]
    fn test_sort_preserves_clause_order() {
        let spec = compile_sort(Some("year:desc,title:asc,runtime:ASC"), &SortSpec::empty());
        let keys: Vec<_> = spec.iter().map(|k| (k.field.as_str(), k.dir)).collect();
        assert_eq!(
            keys,
            vec![
                ("year", SortDir::Desc),
                ("title", SortDir::Asc),
                ("runtime", SortDir::Asc),
            ]
        );
        assert_eq!(spec.to_expression(), "year:desc,title:asc,runtime:asc");
    }

    #[test]
    fn test_sort_direction_fallback_is_descending() {
        let spec = compile_sort(Some("a:ascending,b,c:up,d:Asc,e:"), &SortSpec::empty());
        let dirs: Vec<_> = spec.iter().map(|k| k.dir.signum()).collect();
        assert_eq!(dirs, vec![-1, -1, -1, 1, -1]);
    }

    #[test]
    fn test_sort_repeated_field_keeps_position_and_last_direction() {
        let spec = compile_sort(Some("year:asc,title:asc,year:desc"), &SortSpec::empty());
        assert_eq!(spec.to_expression(), "year:desc,title:asc");
    }

    #[test]
    fn test_sort_skips_blank_clauses() {
        let spec = compile_sort(Some("year:asc,,title:desc,"), &SortSpec::empty());
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn test_sort_validation_against_schema() {
        let schema = movie_schema();
        let ok = compile_sort(Some("year:desc,title:asc"), &SortSpec::empty());
        assert!(ok.validate(&schema).is_ok());

        let bad = compile_sort(Some("year:desc,budget:asc"), &SortSpec::empty());
        assert_eq!(
            bad.validate(&schema),
            Err(Error::InvalidField("budget".to_string()))
        );
    }
}
