use rpn_tree::{
    BuildError, Traversal, Tree,
    ast::{Operator, Symbol},
    tree::lexer::{Token, Tokenizer, tokenize},
};
use rstest::rstest;

fn build(src: &str) -> Tree {
    Tree::from_postfix(src).unwrap_or_else(|e| panic!("failed to build {src:?}: {e}"))
}

#[rstest]
#[case("3 4 +", 7.0)]
#[case("5 1 2 + 4 * + 3 -", 14.0)]
#[case("6 2 /", 3.0)]
#[case("2 3 ^", 8.0)]
#[case("-3 4 +", 1.0)]
#[case("2.5 2 *", 5.0)]
#[case(".5 .25 +", 0.75)]
#[case("42", 42.0)]
#[case("10 4 3 - -", 9.0)]
fn evaluates_expressions(#[case] src: &str, #[case] expected: f64) {
    assert!((build(src).evaluate() - expected).abs() < f64::EPSILON,
            "{src} should evaluate to {expected}");
}

#[test]
fn empty_tree_evaluates_to_zero() {
    assert!(Tree::new().evaluate().abs() < f64::EPSILON);

    let mut tree = Tree::new();
    assert!(tree.build("1 +").is_err());
    assert!(tree.evaluate().abs() < f64::EPSILON);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(build("1 0 /").evaluate(), f64::INFINITY);
    assert_eq!(build("-1 0 /").evaluate(), f64::NEG_INFINITY);
    assert!(build("0 0 /").evaluate().is_nan());
}

#[rstest]
#[case(Traversal::InOrder, "3 + 4")]
#[case(Traversal::PreOrder, "+ 3 4")]
#[case(Traversal::PostOrder, "3 4 +")]
fn traverses_simple_sum(#[case] order: Traversal, #[case] expected: &str) {
    assert_eq!(build("3 4 +").traverse(order), expected);
}

#[test]
fn traversals_of_nested_expression() {
    let tree = build("5 1 2 + 4 * + 3 -");
    assert_eq!(tree.traverse(Traversal::PreOrder), "- + 5 * + 1 2 4 3");
    assert_eq!(tree.traverse(Traversal::InOrder), "5 + 1 + 2 * 4 - 3");
    assert_eq!(tree.traverse(Traversal::PostOrder), "5 1 2 + 4 * + 3 -");
}

#[test]
fn traversal_keeps_literal_text() {
    assert_eq!(build("2.50 -1 *").traverse(Traversal::PostOrder), "2.50 -1 *");
}

#[test]
fn traversal_of_empty_tree_is_empty() {
    for order in [Traversal::InOrder, Traversal::PreOrder, Traversal::PostOrder] {
        assert_eq!(Tree::new().traverse(order), "");
    }
}

#[test]
fn unknown_traversal_name_yields_empty_string() {
    let tree = build("3 4 +");
    assert_eq!(tree.traverse_named("post-order"), "3 4 +");
    assert_eq!(tree.traverse_named("levelorder"), "");
}

#[test]
fn assigns_preorder_ids() {
    let tree = build("3 4 +");
    let root = tree.root().unwrap();
    assert_eq!((root.value(), root.id(), root.parent_id()), ("+", 0, None));

    let left = root.left().unwrap();
    assert_eq!((left.value(), left.id(), left.parent_id()), ("3", 1, Some(0)));

    let right = root.right().unwrap();
    assert_eq!((right.value(), right.id(), right.parent_id()), ("4", 2, Some(0)));
}

#[test]
fn preorder_ids_follow_preorder_positions() {
    let tree = build("5 1 2 + 4 * + 3 -");
    for (position, node) in tree.nodes(Traversal::PreOrder).iter().enumerate() {
        assert_eq!(node.id(), position);
    }
    // "*" is reached after "-", "+", "5".
    let mul = tree.node(3).unwrap();
    assert_eq!(mul.value(), "*");
    assert_eq!(mul.parent_id(), Some(1));
    assert_eq!(tree.node(8).map(|n| (n.value(), n.parent_id())), Some(("3", Some(0))));
}

#[rstest]
#[case("+", 0)]
#[case("3 +", 1)]
#[case("3 4 + *", 1)]
fn rejects_operator_underflow(#[case] src: &str, #[case] expected_available: usize) {
    match Tree::from_postfix(src) {
        Err(BuildError::OperatorUnderflow { available, .. }) => {
            assert_eq!(available, expected_available);
        },
        other => panic!("expected underflow for {src:?}, got {other:?}"),
    }
}

#[test]
fn underflow_stops_at_first_bad_operator() {
    let err = Tree::from_postfix("1 - 2 3 + +").unwrap_err();
    assert_eq!(err,
               BuildError::OperatorUnderflow { operator:  Operator::Sub,
                                               position:  2,
                                               available: 1, });
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("( )")]
fn rejects_empty_input(#[case] src: &str) {
    assert_eq!(Tree::from_postfix(src).unwrap_err(), BuildError::EmptyExpression);
}

#[rstest]
#[case("3 4", 2)]
#[case("1 2 3 +", 2)]
#[case("1 2 3", 3)]
fn rejects_leftover_operands(#[case] src: &str, #[case] remaining: usize) {
    assert_eq!(Tree::from_postfix(src).unwrap_err(), BuildError::DanglingOperands { remaining });
}

#[test]
fn rejects_reserved_sentinel() {
    assert_eq!(Tree::from_postfix("3 # +").unwrap_err(),
               BuildError::ReservedSentinel { position: 2 });
}

#[test]
fn single_operand_builds_one_node() {
    let tree = build("-7.5");
    assert_eq!(tree.len(), 1);
    let root = tree.root().unwrap();
    assert!(root.is_leaf());
    assert_eq!(root.symbol(), Symbol::Operand(-7.5));
}

#[test]
fn parentheses_are_ignored() {
    let tree = build("(3 4 +) 2 *");
    assert_eq!(tree.traverse(Traversal::PostOrder), "3 4 + 2 *");
    assert!((tree.evaluate() - 14.0).abs() < f64::EPSILON);
}

#[test]
fn rebuild_replaces_previous_tree() {
    let mut tree = build("1 2 +");
    tree.build("9").unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.traverse(Traversal::InOrder), "9");

    assert!(tree.build("9 9").is_err());
    assert!(tree.is_empty());
}

#[test]
fn parses_from_str() {
    let tree: Tree = "2 3 ^".parse().unwrap();
    assert!((tree.evaluate() - 8.0).abs() < f64::EPSILON);
    assert!("2 ^".parse::<Tree>().is_err());
}

#[test]
fn lexes_negative_literals_and_minus() {
    assert_eq!(tokenize("-3 4 +"), vec!["-3", "4", "+"]);
    assert_eq!(tokenize("3 4 -"), vec!["3", "4", "-"]);
    assert_eq!(tokenize("3 4 - -.5"), vec!["3", "4", "-", "-", ".5"]);

    let tokens: Vec<Token> = Tokenizer::new("-3 4 +").map(|l| l.token).collect();
    assert_eq!(tokens, vec![Token::Operand(-3.0), Token::Operand(4.0), Token::Plus]);
}

#[test]
fn lexer_skips_unrecognized_characters() {
    assert_eq!(tokenize("1 x 2 $ + ."), vec!["1", "2", "+"]);
    assert_eq!(tokenize("1.5.5"), vec!["1.5", ".5"]);
}

#[test]
fn tokenizer_reports_cursor() {
    let mut tokens = Tokenizer::new("12  3.5 +");
    assert_eq!(tokens.next().map(|l| l.span), Some(0..2));
    assert_eq!(tokens.position(), 2);
    assert_eq!(tokens.next().map(|l| l.text), Some("3.5"));
    assert_eq!(tokens.position(), 7);
    assert_eq!(tokens.next().map(|l| l.token), Some(Token::Plus));
    assert!(tokens.next().is_none());
}

#[test]
fn flat_step_trace_lists_nodes_in_postorder() {
    let trace = build("3 4 +").step_by_step_string(false);
    let lines: Vec<&str> = trace.lines().collect();
    assert_eq!(lines,
               vec![r##"{"value":3.00, "operator":"#", "operand":true, "id":1, "parent":0}"##,
                    r##"{"value":4.00, "operator":"#", "operand":true, "id":2, "parent":0}"##,
                    r#"{"value":7.00, "operator":"+", "operand":false, "id":0, "parent":-1}"#,]);
}

#[test]
fn leveled_step_trace_indents_by_depth() {
    let trace = build("5 1 2 + 4 * + 3 -").step_by_step_string(true);
    let lines: Vec<&str> = trace.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], r##"  {"value":5.00, "operator":"#", "operand":true}"##);
    assert_eq!(lines[1], r##"    {"value":1.00, "operator":"#", "operand":true}"##);
    assert_eq!(lines[3], r#"   {"value":3.00, "operator":"+", "operand":false}"#);
    assert_eq!(lines[6], r#" {"value":17.00, "operator":"+", "operand":false}"#);
    assert_eq!(lines[8], r#"{"value":14.00, "operator":"-", "operand":false}"#);
    assert!(lines.iter().all(|line| !line.contains("\"id\"")));
}

#[test]
fn step_trace_of_empty_tree_writes_nothing() {
    assert_eq!(Tree::new().step_by_step_string(false), "");
}

#[test]
fn step_trace_formats_non_finite_values() {
    let trace = build("1 0 /").step_by_step_string(false);
    assert_eq!(trace.lines().last(),
               Some(r#"{"value":inf, "operator":"/", "operand":false, "id":0, "parent":-1}"#));
}

#[test]
fn deep_chain_does_not_exhaust_the_stack() {
    const TERMS: usize = 100_000;

    let mut src = String::from("1");
    for _ in 1..TERMS {
        src.push_str(" 1 +");
    }

    let tree = build(&src);
    assert_eq!(tree.len(), 2 * TERMS - 1);
    assert!((tree.evaluate() - 100_000.0).abs() < f64::EPSILON);
    assert_eq!(tree.traverse(Traversal::InOrder).len(), src.len());
    assert_eq!(tree.step_by_step_string(true).lines().count(), 2 * TERMS - 1);
    drop(tree);

    // Failed builds release their partial subtrees too.
    src.push_str(" 1");
    assert!(Tree::from_postfix(&src).is_err());
}
