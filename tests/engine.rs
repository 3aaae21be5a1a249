use tuplecalc::{
    compute,
    config::EngineConfig,
    error::{ErrorKind, SyntaxError},
    interpreter::parser::core::{parse_expression, parse_expression_with_depth},
    service::{compute::parse_expression_list, protocol::ComputeRequest},
    values::{
        domain::parse_domains,
        tuple::{ValuesKind, build_tuples},
    },
};

fn assert_success(computation: &str, values: &str, domains: &str, expressions: &str, expected: f64) {
    match compute(computation, values, domains, expressions) {
        Ok(result) => assert!((result - expected).abs() < 1e-9,
                              "{computation}_{values};{domains};{expressions}: expected {expected}, got {result}"),
        Err(e) => panic!("{computation}_{values};{domains};{expressions} failed: {e}"),
    }
}

fn assert_failure(computation: &str, values: &str, domains: &str, expressions: &str, kind: ErrorKind) {
    match compute(computation, values, domains, expressions) {
        Ok(result) => panic!("{computation}_{values};{domains};{expressions} succeeded with {result} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "unexpected error: {e}"),
    }
}

#[test]
fn single_variable_grid() {
    assert_success("MIN", "GRID", "x:0:1:2", "x", 0.0);
    assert_success("MAX", "GRID", "x:0:1:2", "x", 2.0);
    assert_success("AVG", "GRID", "x:0:1:2", "x", 1.0);
    assert_success("COUNT", "GRID", "x:0:1:2", "x", 3.0);
}

#[test]
fn two_variable_grid() {
    assert_success("MAX", "GRID", "x:0:1:1,y:0:1:1", "(x+y)", 2.0);
    assert_success("AVG", "GRID", "x:0:1:1,y:0:1:1", "(x+y)", 1.0);
    assert_success("COUNT", "GRID", "x:0:1:1,y:0:1:1", "(x+y)", 4.0);
}

#[test]
fn list_pairs_values_by_position() {
    assert_success("MAX", "LIST", "x:0:1:2,y:0:1:2", "(x*y)", 4.0);
    assert_success("AVG", "LIST", "x:0:1:2,y:0:1:2", "(x*y)", 5.0 / 3.0);
    assert_success("COUNT", "LIST", "x:0:1:2,y:0:1:2", "(x*y)", 3.0);
}

#[test]
fn list_with_mismatched_lengths_fails() {
    assert_failure("MAX", "LIST", "x:0:1:2,y:0:1:3", "(x*y)", ErrorKind::TupleMode);
}

#[test]
fn undeclared_variable_is_named() {
    let err = compute("MIN", "GRID", "x:0:1:2", "(x+z)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Evaluation);
    assert!(err.to_string().contains('z'), "message should name the variable: {err}");
}

#[test]
fn average_divides_by_tuple_count() {
    // Two expressions over three tuples: (0 + 1 + 2) + (0 + 10 + 20) over 3.
    assert_success("AVG", "GRID", "x:0:1:2", "x,(x*10)", 11.0);
}

#[test]
fn count_ignores_expressions() {
    assert_success("COUNT", "GRID", "x:0:1:2", "(x+undeclared)", 3.0);
    assert_success("COUNT", "GRID", "x:0:1:2", "", 3.0);
}

#[test]
fn reductions_over_nothing_fail() {
    assert_failure("MIN", "GRID", "x:1:1:0", "x", ErrorKind::EmptyInput);
    assert_failure("COUNT", "LIST", "x:1:1:-5", "x", ErrorKind::EmptyInput);
    assert_failure("MAX", "GRID", "x:0:1:2", "(x+", ErrorKind::EmptyInput);
}

#[test]
fn operators_follow_ieee_arithmetic() {
    assert_success("MAX", "GRID", "x:2:1:2", "(x^10)", 1024.0);
    assert_success("MIN", "GRID", "x:1:1:3", "(6/x)", 2.0);
    assert_success("MIN", "GRID", "x:0:1:1", "(x-5)", -5.0);

    let max = compute("MAX", "GRID", "x:0:1:1", "(1/x)").unwrap();
    assert!(max.is_infinite() && max.is_sign_positive());

    let min = compute("MIN", "GRID", "x:0:1:1", "(x/x)").unwrap();
    assert!(min.is_nan());
}

#[test]
fn kinds_are_case_insensitive() {
    assert_success("max", "grid", "x:0:1:2", "x", 2.0);
    assert_success("Avg", "List", "x:0:1:2", "x", 1.0);
}

#[test]
fn unknown_kinds_fail() {
    assert_failure("MEDIAN", "GRID", "x:0:1:2", "x", ErrorKind::Request);
    assert_failure("MAX", "ZIP", "x:0:1:2", "x", ErrorKind::TupleMode);
}

#[test]
fn malformed_domains_fail() {
    assert_failure("MAX", "GRID", "x:0:1", "x", ErrorKind::DomainSpec);
    assert_failure("MAX", "GRID", "x:0:a:2", "x", ErrorKind::DomainSpec);
    assert_failure("MAX", "GRID", "x:0:0:2", "x", ErrorKind::DomainSpec);
    assert_failure("MAX", "GRID", "x:0:-1:2", "x", ErrorKind::DomainSpec);
    assert_failure("MAX", "GRID", "x:0:1:2,x:0:1:3", "x", ErrorKind::DomainSpec);
    assert_failure("MAX", "GRID", "x:0:1:inf", "x", ErrorKind::DomainSpec);
}

#[test]
fn domain_sequences_overshoot_end() {
    let domains = parse_domains("x:0:0.3:1").unwrap();
    let xs = &domains["x"];
    assert_eq!(xs.len(), 5);
    assert!((xs[4] - 1.2).abs() < 1e-12);

    let domains = parse_domains("x:5:1:5").unwrap();
    assert_eq!(domains["x"], vec![5.0]);

    let domains = parse_domains(" x : 0 : 1 : 2 ,").unwrap();
    assert_eq!(domains["x"], vec![0.0, 1.0, 2.0]);
}

#[test]
fn grid_enumerates_last_variable_fastest() {
    let domains = parse_domains("a:0:1:1,b:0:1:2").unwrap();
    let tuples = build_tuples(&domains, ValuesKind::Grid).unwrap();

    let pairs: Vec<(f64, f64)> = tuples.iter()
                                       .map(|t| (t.get("a").unwrap(), t.get("b").unwrap()))
                                       .collect();
    assert_eq!(pairs,
               [(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (1.0, 0.0), (1.0, 1.0), (1.0, 2.0)]);

    let names: Vec<&str> = tuples[0].iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn grid_with_an_empty_domain_is_empty() {
    let domains = parse_domains("a:0:1:1,b:1:1:0").unwrap();
    assert!(build_tuples(&domains, ValuesKind::Grid).unwrap().is_empty());
}

#[test]
fn parser_accepts_well_formed_expressions() {
    for source in ["x", "42", "3.14", "x1", "(x+1)", "((x*y)-(2/z))", "( x ^ 2 )", "((((1+2)+3)+4)+5)"] {
        if let Err(e) = parse_expression(source) {
            panic!("{source:?} failed to parse: {e}");
        }
    }
}

#[test]
fn parser_round_trips_through_display() {
    let expr = parse_expression(" ( (x1 + 2.5) * y ) ").unwrap();
    assert_eq!(expr.to_string(), "((x1+2.5)*y)");
    assert_eq!(parse_expression(&expr.to_string()).unwrap(), expr);
}

#[test]
fn parser_reports_positions() {
    let cases = [("(x2)", SyntaxError::MissingOperator { position: 3, found: ')' }),
                 ("(x%2)", SyntaxError::UnknownOperator { position: 2, symbol: "%".to_string() }),
                 ("(x+2", SyntaxError::UnexpectedEnd { position: 4, expected: "')'" }),
                 ("(x+2]", SyntaxError::MissingClosingBracket { position: 4, found: ']' }),
                 ("x+1", SyntaxError::TrailingInput { position: 1, rest: "+1".to_string() }),
                 ("X", SyntaxError::UnexpectedChar { position: 0, found: 'X' }),
                 ("", SyntaxError::UnexpectedEnd { position: 0, expected: "expression" }),
                 ("(+1)", SyntaxError::UnexpectedChar { position: 1, found: '+' }),
                 ("(1+2+3)", SyntaxError::MissingClosingBracket { position: 4, found: '+' })];

    for (source, expected) in cases {
        assert_eq!(parse_expression(source).unwrap_err(), expected, "source: {source:?}");
    }
}

#[test]
fn parser_rejects_deep_nesting() {
    let deep = format!("{}x{}", "(".repeat(10), "+1)".repeat(10));
    assert!(parse_expression_with_depth(&deep, 10).is_ok());
    assert_eq!(parse_expression_with_depth(&deep, 9).unwrap_err(),
               SyntaxError::NestingTooDeep { position: 9, limit: 9 });
}

#[test]
fn malformed_expressions_are_skipped_unless_strict() {
    let lenient = EngineConfig::default();
    let strict = EngineConfig { strict_expressions: true,
                                ..EngineConfig::default() };

    let exprs = parse_expression_list("x,(x+,(x*2)", &lenient).unwrap();
    assert_eq!(exprs.len(), 2);
    assert_success("MAX", "GRID", "x:0:1:2", "x,(x+,(x*2)", 4.0);

    let err = parse_expression_list("x,(x+,(x*2)", &strict).unwrap_err();
    assert_eq!(err, SyntaxError::UnexpectedEnd { position: 3, expected: "expression" });

    let request = ComputeRequest { computation: "MAX".parse().unwrap(),
                                   values:      "GRID".parse().unwrap(),
                                   domains:     "x:0:1:2".to_string(),
                                   expressions: "x,(x+".to_string(), };
    let err = tuplecalc::service::compute::compute(&request, &strict).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn tuple_limit_is_enforced() {
    let config = EngineConfig { max_tuples: 10,
                                ..EngineConfig::default() };
    let request = ComputeRequest { computation: "COUNT".parse().unwrap(),
                                   values:      "GRID".parse().unwrap(),
                                   domains:     "x:0:1:4,y:0:1:4".to_string(),
                                   expressions: "x".to_string(), };

    let err = tuplecalc::service::compute::compute(&request, &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TupleMode);

    let request = ComputeRequest { domains: "x:0:1:100".to_string(),
                                   ..request };
    let err = tuplecalc::service::compute::compute(&request, &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainSpec);
}

#[test]
fn dangling_decimal_point_is_read_as_operator() {
    assert_eq!(parse_expression("(1.+2)").unwrap_err(),
               SyntaxError::UnexpectedChar { position: 3, found: '+' });
    assert_eq!(parse_expression("(1.2)").unwrap_err(),
               SyntaxError::MissingOperator { position: 4, found: ')' });
}

#[test]
fn grid_over_many_variables_does_not_recurse() {
    let domains = (0..200_000).map(|i| format!("v{i}:0:1:0"))
                              .collect::<Vec<_>>()
                              .join(",");

    assert_success("COUNT", "GRID", &domains, "v0", 1.0);
    assert_success("MAX", "GRID", &domains, "(v0+v199999)", 0.0);
}

#[test]
fn grid_carries_into_earlier_variables() {
    let domains = parse_domains("a:0:1:1,b:0:1:1,c:0:1:2").unwrap();
    let tuples = build_tuples(&domains, ValuesKind::Grid).unwrap();

    let triples: Vec<(f64, f64, f64)> =
        tuples.iter()
              .map(|t| (t.get("a").unwrap(), t.get("b").unwrap(), t.get("c").unwrap()))
              .collect();
    let mut expected = Vec::new();
    for a in [0.0, 1.0] {
        for b in [0.0, 1.0] {
            for c in [0.0, 1.0, 2.0] {
                expected.push((a, b, c));
            }
        }
    }
    assert_eq!(triples, expected);
}

const ORDERS: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

fn reorder(items: &[&str; 3], order: [usize; 3]) -> String {
    order.iter().map(|&i| items[i]).collect::<Vec<_>>().join(",")
}

#[test]
fn declaration_and_expression_order_do_not_change_results() {
    let domains = ["x:0:1:2", "y:-1:0.5:1", "z:1:2:5"];
    let expressions = ["((x*y)-z)", "(z/(x+1))", "((y^2)+x)"];

    for computation in ["MIN", "MAX", "AVG", "COUNT"] {
        let reference = compute(computation, "GRID", &domains.join(","), &expressions.join(",")).unwrap();

        for domain_order in ORDERS {
            for expression_order in ORDERS {
                let domains = reorder(&domains, domain_order);
                let expressions = reorder(&expressions, expression_order);
                assert_success(computation, "GRID", &domains, &expressions, reference);
            }
        }
    }
}

#[test]
fn list_declaration_order_does_not_change_results() {
    let domains = ["x:0:1:4", "y:10:1:14", "z:0:0.25:1"];
    let expressions = ["(x+y)", "(y*z)", "(x-z)"];

    for computation in ["MIN", "MAX", "AVG"] {
        let reference = compute(computation, "LIST", &domains.join(","), &expressions.join(",")).unwrap();

        for domain_order in ORDERS {
            for expression_order in ORDERS {
                let domains = reorder(&domains, domain_order);
                let expressions = reorder(&expressions, expression_order);
                assert_success(computation, "LIST", &domains, &expressions, reference);
            }
        }
    }
}

#[test]
fn count_depends_only_on_tuples() {
    let cases = [("x:0:1:2", "GRID", 3.0),
                 ("x:0:1:2,y:0:1:3", "GRID", 12.0),
                 ("x:0:0.5:2,y:1:1:5", "LIST", 5.0),
                 ("x:0:3:10", "GRID", 5.0)];
    let expression_lists = ["x",
                            "(x+1)",
                            "x,x,x",
                            "((x*x)/(x-x))",
                            "(x+unbound)",
                            "(x+,)",
                            "",
                            "1,2,3,4,5,6,7"];

    for (domains, values, expected) in cases {
        for expressions in expression_lists {
            assert_success("COUNT", values, domains, expressions, expected);
        }
    }
}

#[test]
#[allow(clippy::cast_precision_loss)]
fn domain_sequences_follow_the_length_formula() {
    let triples: [(f64, f64, f64); 10] = [(0.0, 1.0, 0.0),
                   (0.0, 1.0, 10.0),
                   (0.0, 3.0, 10.0),
                   (-5.0, 0.5, 5.0),
                   (-5.0, 0.7, 5.0),
                   (1.0, 0.1, 2.0),
                   (2.5, 2.0, 3.0),
                   (-10.0, 4.0, -1.0),
                   (100.0, 33.0, 1000.0),
                   (0.0, 0.25, 0.9)];

    for (start, step, end) in triples {
        let values = parse_domains(&format!("v:{start}:{step}:{end}")).unwrap().swap_remove("v").unwrap();

        let expected_len = ((end - start) / step).ceil() + 1.0;
        assert_eq!(values.len() as f64, expected_len, "length for {start}:{step}:{end}");
        assert_eq!(values[0], start, "first value for {start}:{step}:{end}");

        for (i, value) in values.iter().enumerate() {
            assert!((value - (start + i as f64 * step)).abs() < 1e-9,
                    "value {i} for {start}:{step}:{end} is {value}");
        }

        let last = values[values.len() - 1];
        assert!(last >= end - 1e-9, "last value {last} is below {end}");
        assert!(last - end < step, "last value {last} overshoots {end} by a full step");
        if values.len() > 1 {
            assert!(values[values.len() - 2] < end, "one value too many for {start}:{step}:{end}");
        }
    }
}
