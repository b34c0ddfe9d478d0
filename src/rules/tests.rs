use crate::rules::{arithmetic, comparison, default_config, groups, logic};
use crate::{Chunk, Config, Resolved, Result, Siblings, Value, parse, parse_with};

fn all_true(chunks: Vec<Chunk>) -> bool {
    chunks.iter().all(|c| c.value() == Value::Bool(true))
}

fn all_nil(chunks: Vec<Chunk>) -> bool {
    chunks.iter().all(|c| c.value().is_nil())
}

fn with_groups() -> Config {
    groups::brackets(Config::new())
}

#[test]
fn single_comparison_resolves_to_its_value() {
    let config = Config::new().rule(">", comparison::gt);
    let out = parse(&config).unwrap().process("1 > 0").unwrap();
    assert_eq!(out, Resolved::Value(Value::Bool(true)));
}

#[test]
fn custom_resolver_sees_every_remaining_node() {
    let chained = Config::new().rule(">", comparison::gt);
    let cases: Vec<(bool, &str)> = vec![(true, "2 > 1 > 0"), (false, "2 > 0 > 1")];
    for (expected, input) in cases {
        let parser = parse_with(&chained, all_true).unwrap();
        assert_eq!(parser.process(input).unwrap(), expected, "Expected {} for '{}'", expected, input);
    }

    let joined = Config::new().rule(">", comparison::gt).rule("&&", logic::and);
    assert!(parse_with(&joined, all_true).unwrap().process("2 > 1 && 1 > 0").unwrap());
}

#[test]
fn reducers_may_return_text() {
    let config = Config::new().rule(">", |s| {
        Ok(if s.number(0) > s.number(1) {
            Value::from("Now this I can understand!")
        } else {
            Value::Text(format!("{}>{}", s.number(0), s.number(1)))
        })
    });
    let out = parse(&config).unwrap().process("1 > 0").unwrap();
    assert_eq!(out.value(), Some(&Value::from("Now this I can understand!")));
}

#[test]
fn modifier_output_feeds_later_rules() {
    fn xor(s: &Siblings<'_>) -> Result<Value> {
        let flip = (s.number(0) as i64) ^ (s.number(1) as i64);
        Ok(Value::from(if flip != 0 { ">" } else { "<" }))
    }

    // The nested parse only sees the rules, otherwise the modifier would
    // match its own input forever.
    let config = Config::new()
        .modifier(re!(r"\d+\s?\|\s?\d+"), |matched, full, _config| {
            let rules = Config::new().rule("|", xor).rule("<", comparison::lt);
            let result = parse(&rules)?.process(matched)?;
            Ok(full.replacen(matched, &result.to_string(), 1))
        })
        .rule("|", xor)
        .rule("<", comparison::lt);

    let out = parse(&config).unwrap().process("3 0 |0 1").unwrap();
    assert_eq!(out, Resolved::Value(Value::Bool(false)));
}

#[test]
fn parenthesised_groups_resolve_first() {
    let config = with_groups()
        .rule("*", arithmetic::multiply)
        .rule("+", arithmetic::add)
        .rule("-", arithmetic::subtract);

    let cases: Vec<(f64, &str)> = vec![(10.0, "4 + 2 * (1 + 2)"), (18.0, "(4 + 2) * (1 + 2)"), (8.0, "8 * (3 + (1 - 3))")];
    for (expected, input) in cases {
        let out = parse(&config).unwrap().process(input).unwrap();
        assert_eq!(out.value(), Some(&Value::Number(expected)), "Expected {} for '{}'", expected, input);
    }
}

#[test]
fn binary_minus_regex_skips_negative_literals() {
    let config = Config::new().rule(re!(r"-(?:\s|$)"), arithmetic::subtract);
    let out = parse(&config).unwrap().process("-1 - -1").unwrap();
    assert_eq!(out.value(), Some(&Value::Number(0.0)));
}

#[test]
fn mixed_arithmetic_and_equality() {
    let config = with_groups()
        .rule("*", arithmetic::multiply)
        .rule("+", arithmetic::add)
        .rule(re!(r"-(?:\s|$)"), arithmetic::subtract)
        .rule("=", comparison::equal);
    let out = parse(&config).unwrap().process("3 + 1 = (7 - 11) * -1").unwrap();
    assert_eq!(out, Resolved::Value(Value::Bool(true)));
}

#[test]
fn reducer_may_read_a_prefix_of_its_neighbour() {
    fn leading_int(value: Option<&Value>) -> f64 {
        let text = value.map(Value::to_string).unwrap_or_default();
        let digits: String = text.trim_start().chars().take_while(char::is_ascii_digit).collect();
        digits.parse().unwrap_or(f64::NAN)
    }

    let config = Config::new().rule(">", |s| Ok(Value::Bool(s.number(0) > leading_int(s.arg(1)))));
    let out = parse(&config).unwrap().process("1 > 0 plus all of this text too").unwrap();
    assert_eq!(out, Resolved::Value(Value::Bool(true)));
}

#[test]
fn absent_input_resolves_to_empty_sequence() {
    let config = Config::new().rule(">", comparison::gt);
    assert_eq!(parse(&config).unwrap().process(None).unwrap(), Resolved::Chunks(Vec::new()));
}

#[test]
fn unmatched_input_comes_back_unchanged() {
    let config = Config::new().rule(">", comparison::gt);
    let out = parse(&config).unwrap().process("no matches found").unwrap();
    assert_eq!(out, Resolved::Value(Value::from("no matches found")));
}

#[test]
fn empty_key_consumes_every_boundary() {
    let config = Config::new().rule("", |_| Ok(Value::Nil));
    assert!(parse_with(&config, all_nil).unwrap().process(" + 5 ").unwrap());
}

#[test]
fn default_config_examples() {
    let cases: Vec<(Value, &str)> = vec![
        (Value::Number(10.0), "4 + 2 * (1 + 2)"),
        (Value::Number(18.0), "(4 + 2) * (1 + 2)"),
        (Value::Number(8.0), "8 * (3 + (1 - 3))"),
        (Value::Number(0.0), "-1 - -1"),
        (Value::Number(2.5), "10 / 4"),
        (Value::Bool(true), "3 + 1 = (7 - 11) * -1"),
        (Value::Bool(true), "1 / 0 > 5"),
        (Value::Bool(true), "(1 / 0) > 5"),
        (Value::Bool(true), "(0 - 1 / 0) < 5"),
        (Value::Bool(true), "0x10 = 16"),
        (Value::Bool(true), "2 >= 2"),
        (Value::Bool(false), "3 <= 2"),
        (Value::Bool(true), "2 > 1 && 1 < 2"),
        (Value::Bool(true), "1 > 2 || 3 > 2"),
        (Value::Bool(false), "true && false"),
    ];

    let config = default_config();
    for (expected, input) in cases {
        let out = parse(&config).unwrap().process(input).unwrap();
        assert_eq!(out.value(), Some(&expected), "Expected {:?} for '{}'", expected, input);
    }
}
