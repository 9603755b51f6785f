//! Marker text export
//!
//! The `Q:`/`A:` text is what the recovery parser reads, so exporting and parsing again must
//! give back the same deck.

use ankilab_babel::format::Format;
use ankilab_babel::formats::QaFormat;
use ankilab_parser::{parse_cards, Card};
use ankilab_parser::flashcards::testing::Sample;
use rstest::rstest;

#[rstest]
#[case::prose(Card::new("What is ownership?", "Each value has a single owner."))]
#[case::multiline(Card::new(
    "Name two smart pointers",
    "Box<T> for heap allocation.\nRc<T> for shared ownership."
))]
#[case::indented_code(Card::new(
    "Write a memo helper",
    "    cache = {}\n    def memo(x): return cache.setdefault(x, f(x))"
))]
#[case::code_comment_marker(Card::new(
    "What does this struct look like?",
    "struct Point {\n    A: i32,\n}"
))]
fn test_export_then_parse(#[case] card: Card) {
    let cards = vec![Card::new("First?", "One."), card];
    let text = QaFormat.serialize(&cards).unwrap();
    assert_eq!(parse_cards(&text), cards);
}

#[test]
fn test_export_is_idempotent() {
    let source = "\
Here are your cards:

1. Q: What is **borrowing**?
A: Taking a reference.

Q: Show a loop
A:
    for x in xs:
        print(x)
";
    let once = QaFormat.serialize(&QaFormat.parse(source).unwrap()).unwrap();
    let twice = QaFormat.serialize(&QaFormat.parse(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
    assert!(once.starts_with("Q: What is borrowing?\nA: Taking a reference.\n\n"));
    assert!(once.contains("A:\n    for x in xs:\n        print(x)\n"));
}

#[test]
fn test_export_snapshot() {
    let cards = Sample::ClosureAndMemo.parse();
    let text = QaFormat.serialize(&cards).unwrap();
    insta::assert_snapshot!(text.trim_end(), @r###"
    Q: What is a closure?
    A: A function bundled with its enclosing lexical scope.

    Q: How do you memoize a function in one line?
    A:
        cache = {}
        def memo(x): return cache.setdefault(x, f(x))
    "###);
}
