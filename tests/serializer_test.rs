//! Integration tests for expression-to-query serialization.

use sarissa_dsl::prelude::*;
use sarissa_dsl::query::{Bound, WildcardQuery};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn name() -> Expression {
    Expression::path("name")
}

/// A well-formed operation for `operator`.
fn sample(operator: Operator) -> Expression {
    let leaf = || name().eq("a");
    let args = match operator {
        Operator::Or | Operator::And => vec![leaf(), leaf()],
        Operator::Not => vec![leaf()],
        Operator::Between => vec![
            name(),
            Expression::constant("a"),
            Expression::constant("z"),
        ],
        Operator::In => vec![name(), Expression::constant(vec!["a", "b c"])],
        Operator::Lower | Operator::Upper | Operator::IsNull | Operator::IsNotNull => {
            vec![name()]
        }
        _ => vec![name(), Expression::constant("ab cd")],
    };
    Expression::operation(operator, args)
}

fn is_translatable(operator: Operator) -> bool {
    !matches!(
        operator,
        Operator::Lower
            | Operator::Upper
            | Operator::LessThan
            | Operator::LessOrEqual
            | Operator::GreaterThan
            | Operator::GreaterOrEqual
            | Operator::IsNull
            | Operator::IsNotNull
            | Operator::Matches
    )
}

#[test]
fn test_every_operator_has_a_decision() {
    init_logging();
    for &operator in Operator::ALL {
        let result = QuerySerializer::DEFAULT.to_query(&sample(operator));
        if is_translatable(operator) {
            assert!(result.is_ok(), "{operator} failed: {result:?}");
        } else {
            let err = result.unwrap_err();
            assert!(err.is_unsupported_operation(), "{operator}: {err}");
        }
    }
}

#[test]
fn test_eq_single_term() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().eq("foo"))?;
    let term = query.as_term().expect("term query");
    assert_eq!(term.field(), "name");
    assert_eq!(term.term(), "foo");

    let query = QuerySerializer::DEFAULT.to_query(&name().eq("FOO"))?;
    assert_eq!(query.as_term().unwrap().term(), "FOO");
    Ok(())
}

#[test]
fn test_eq_phrase() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().eq("foo bar"))?;
    let phrase = query.as_phrase().expect("phrase query");
    assert_eq!(phrase.field(), "name");
    assert_eq!(phrase.terms(), &["foo", "bar"]);
    Ok(())
}

#[test]
fn test_lowercase_normalization() -> Result<()> {
    let query = QuerySerializer::LOWERCASE.to_query(&name().eq("FOO"))?;
    assert_eq!(query.as_term().unwrap().term(), "foo");

    let custom = QuerySerializer::new(SerializerConfig {
        lower_case_normalization: true,
    });
    let query = custom.to_query(&name().starts_with("AB CD"))?;
    assert_eq!(query.to_string(), "+name:ab* +name:*cd*");
    Ok(())
}

#[test]
fn test_eq_ignore_case_and_primitive_share_eq() -> Result<()> {
    for operator in [Operator::EqualsPrimitive, Operator::EqualsIgnoreCase] {
        let expr = Expression::operation(operator, vec![name(), Expression::constant("x y")]);
        let query = QuerySerializer::DEFAULT.to_query(&expr)?;
        assert_eq!(query.to_string(), "name:\"x y\"");
    }
    Ok(())
}

#[test]
fn test_not_equals() -> Result<()> {
    for operator in [Operator::NotEquals, Operator::NotEqualsPrimitive] {
        let expr = Expression::operation(operator, vec![name(), Expression::constant("foo bar")]);
        let query = QuerySerializer::DEFAULT.to_query(&expr)?;

        let bq = query.as_boolean().expect("boolean query");
        assert_eq!(bq.clauses().len(), 1);
        assert_eq!(bq.clauses()[0].occur, Occur::MustNot);
        assert_eq!(
            bq.clauses()[0].query,
            QuerySerializer::DEFAULT.to_query(&name().eq("foo bar"))?
        );
    }
    Ok(())
}

#[test]
fn test_and_or_not() -> Result<()> {
    let expr = name()
        .eq("a")
        .and(name().eq("b").or(name().eq("c")))
        .and(name().eq("d").not());
    let query = QuerySerializer::DEFAULT.to_query(&expr)?;
    assert_eq!(
        query.to_string(),
        "+(+name:a +(name:b name:c)) +(-name:d)"
    );

    let bq = query.as_boolean().unwrap();
    assert_eq!(bq.clauses_by_occur(Occur::Must).len(), 2);
    Ok(())
}

#[test]
fn test_between() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().between("a", "z"))?;
    let range = query.as_range().expect("range query");
    assert_eq!(range.field(), "name");
    assert_eq!(range.lower_bound(), &Bound::Included("a".to_string()));
    assert_eq!(range.upper_bound(), &Bound::Included("z".to_string()));
    assert!(range.includes_lower());
    assert!(range.includes_upper());

    // only the first term of each bound is used
    let query = QuerySerializer::DEFAULT.to_query(&name().between("a b", "y z"))?;
    assert_eq!(query.to_string(), "name:[a TO y]");
    Ok(())
}

#[test]
fn test_in() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().in_values(["a", "b c"]))?;
    let bq = query.as_boolean().expect("boolean query");
    assert_eq!(bq.clauses().len(), 2);
    assert!(bq.clauses().iter().all(|c| c.occur == Occur::Should));

    assert_eq!(bq.clauses()[0].query.as_term().unwrap().term(), "a");
    assert_eq!(bq.clauses()[1].query.as_phrase().unwrap().terms(), &["b", "c"]);
    Ok(())
}

#[test]
fn test_starts_with() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().starts_with("ab"))?;
    let prefix = query.as_prefix().expect("prefix query");
    assert_eq!(prefix.field(), "name");
    assert_eq!(prefix.prefix(), "ab");

    let query = QuerySerializer::DEFAULT.to_query(&name().starts_with("ab cd"))?;
    let bq = query.as_boolean().expect("boolean query");
    let patterns: Vec<_> = bq
        .clauses()
        .iter()
        .map(|c| {
            assert_eq!(c.occur, Occur::Must);
            c.query.as_wildcard().unwrap().pattern().to_string()
        })
        .collect();
    assert_eq!(patterns, vec!["ab*", "*cd*"]);
    Ok(())
}

#[test]
fn test_ends_with() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().ends_with("ab"))?;
    assert_eq!(query.as_wildcard().unwrap().pattern(), "*ab");

    let query = QuerySerializer::DEFAULT.to_query(&name().ends_with("ab cd ef"))?;
    assert_eq!(query.to_string(), "+name:*ab* +name:*cd* +name:*ef");
    Ok(())
}

#[test]
fn test_contains() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().contains("ab"))?;
    assert_eq!(query, Query::from(WildcardQuery::new("name", "*ab*")));

    let query = QuerySerializer::DEFAULT.to_query(&name().contains_ignore_case("ab cd"))?;
    assert_eq!(query.to_string(), "+name:*ab* +name:*cd*");
    Ok(())
}

#[test]
fn test_escaped_wildcards_match_literally() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().contains("c++"))?;
    let wildcard = query.as_wildcard().unwrap();
    assert_eq!(wildcard.pattern(), "*c\\+\\+*");
    assert!(wildcard.matches("learn c++ today")?);
    assert!(!wildcard.matches("learn c today")?);

    let query = QuerySerializer::DEFAULT.to_query(&name().ends_with("a?"))?;
    let wildcard = query.as_wildcard().unwrap();
    assert!(wildcard.matches("what a?")?);
    assert!(!wildcard.matches("ab")?);
    Ok(())
}

#[test]
fn test_starts_with_is_escaped() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().starts_with("a*b"))?;
    assert_eq!(query.as_prefix().unwrap().prefix(), "a\\*b");

    let query = QuerySerializer::DEFAULT.to_query(&name().starts_with("a* b"))?;
    let patterns: Vec<_> = query
        .as_boolean()
        .unwrap()
        .clauses()
        .iter()
        .map(|c| c.query.as_wildcard().unwrap().pattern().to_string())
        .collect();
    assert_eq!(patterns, vec!["a\\**", "*b*"]);
    Ok(())
}

#[test]
fn test_in_is_not_escaped() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().in_values(["c++"]))?;
    let bq = query.as_boolean().unwrap();
    assert_eq!(bq.clauses()[0].query.as_term().unwrap().term(), "c++");
    // escaping happens once, when rendered
    assert_eq!(query.to_string(), "name:c\\+\\+");
    Ok(())
}

#[test]
fn test_display_escapes_terms_and_phrases() -> Result<()> {
    let query = QuerySerializer::DEFAULT.to_query(&name().eq("c++"))?;
    assert_eq!(query.as_term().unwrap().term(), "c++");
    assert_eq!(query.to_string(), "name:c\\+\\+");

    let query = QuerySerializer::DEFAULT.to_query(&name().eq("a:b (c)"))?;
    assert_eq!(query.to_string(), "name:\"a\\:b \\(c\\)\"");
    Ok(())
}

#[test]
fn test_display_of_empty_in() -> Result<()> {
    let empty: Vec<&str> = Vec::new();
    let query = QuerySerializer::DEFAULT.to_query(&name().in_values(empty.clone()))?;
    assert_eq!(query.to_string(), "");

    let expr = name().eq("a").and(name().in_values(empty).not());
    let query = QuerySerializer::DEFAULT.to_query(&expr)?;
    assert_eq!(query.to_string(), "+name:a +(-())");
    Ok(())
}

#[test]
fn test_lowercase_folds_between_in_and_ends_with() -> Result<()> {
    let serializer = QuerySerializer::LOWERCASE;

    let query = serializer.to_query(&name().between("ABC", "XYZ"))?;
    assert_eq!(query.to_string(), "name:[abc TO xyz]");

    let query = serializer.to_query(&name().in_values(["FOO", "Bar Baz"]))?;
    assert_eq!(query.to_string(), "name:foo name:\"bar baz\"");

    let query = serializer.to_query(&name().ends_with("AB"))?;
    assert_eq!(query.as_wildcard().unwrap().pattern(), "*ab");

    let query = serializer.to_query(&name().ends_with("AB CD"))?;
    assert_eq!(query.to_string(), "+name:*ab* +name:*cd");
    Ok(())
}

#[test]
fn test_like() -> Result<()> {
    let query = QuerySerializer::LOWERCASE.to_query(&name().like("Ab"))?;
    assert_eq!(query.as_wildcard().unwrap().pattern(), "*ab*");

    let query = QuerySerializer::DEFAULT.to_query(&name().like("ab cd"))?;
    let bq = query.as_boolean().unwrap();
    assert_eq!(bq.clauses().len(), 2);
    assert!(bq.clauses().iter().all(|c| c.occur == Occur::Must));
    Ok(())
}

#[test]
fn test_non_operation_root() {
    for expr in [name(), Expression::constant("foo")] {
        let err = QuerySerializer::DEFAULT.to_query(&expr).unwrap_err();
        assert!(err.is_invalid_argument(), "{err}");
    }

    // nested non-operation under a combinator fails too
    let expr = Expression::operation(Operator::And, vec![name().eq("a"), name()]);
    assert!(QuerySerializer::DEFAULT.to_query(&expr).unwrap_err().is_invalid_argument());
}

#[test]
fn test_unsupported_operator() {
    let expr = Expression::operation(
        Operator::LessThan,
        vec![name(), Expression::constant(3)],
    );
    let err = QuerySerializer::DEFAULT.to_query(&expr).unwrap_err();
    assert!(matches!(err, SarissaError::UnsupportedOperation(_)));
}

#[test]
fn test_field_resolution_through_case_folding() -> Result<()> {
    let serializer = QuerySerializer::DEFAULT;
    assert_eq!(serializer.field_name(&name().lower())?, "name");
    assert_eq!(serializer.field_name(&name().upper())?, "name");
    assert_eq!(serializer.field_name(&name().lower())?, serializer.field_name(&name())?);

    let query = serializer.to_query(&name().lower().eq("bob"))?;
    assert_eq!(query.to_string(), "name:bob");

    assert!(serializer.field_name(&Expression::constant("x")).unwrap_err().is_invalid_argument());
    assert!(serializer.field_name(&name().eq("x")).unwrap_err().is_invalid_argument());
    Ok(())
}

#[test]
fn test_field_must_resolve() {
    let expr = Expression::operation(
        Operator::Equals,
        vec![Expression::constant("name"), Expression::constant("x")],
    );
    assert!(QuerySerializer::DEFAULT.to_query(&expr).unwrap_err().is_invalid_argument());
}

#[test]
fn test_deterministic() -> Result<()> {
    let expr = name().eq("a b").or(name().contains("c").not());
    let first = QuerySerializer::DEFAULT.to_query(&expr)?;
    let second = QuerySerializer::DEFAULT.to_query(&expr)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_expression_from_json() -> Result<()> {
    let expr = name().in_values(["a", "b c"]).and(name().between("a", "m"));
    let json = serde_json::to_string(&expr)?;
    let decoded: Expression = serde_json::from_str(&json)?;

    let query = QuerySerializer::DEFAULT.to_query(&decoded)?;
    assert_eq!(query.to_string(), "+(name:a name:\"b c\") +name:[a TO m]");
    Ok(())
}

#[test]
fn test_shared_across_threads() {
    let serializer = QuerySerializer::LOWERCASE;
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                serializer
                    .to_query(&name().eq(format!("Term{i}")))
                    .map(|q| q.to_string())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().unwrap(), format!("name:term{i}"));
    }
}
