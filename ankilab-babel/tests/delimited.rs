//! Spreadsheet import

use ankilab_babel::format::Format;
use ankilab_babel::formats::DelimitedFormat;
use ankilab_babel::FormatRegistry;
use ankilab_parser::Card;

#[test]
fn test_import_spreadsheet_export() {
    let source = "\
Question,Answer,Tags
What is a trait?,A set of shared behavior,rust
\"What does `a, b` destructure?\",A tuple,rust
\"Show a match\",\"match x {
    _ => 0,
}\",rust
";
    let cards = DelimitedFormat::default().parse(source).unwrap();
    assert_eq!(
        cards,
        vec![
            Card::new("What is a trait?", "A set of shared behavior"),
            Card::new("What does `a, b` destructure?", "A tuple"),
            Card::new("Show a match", "match x {\n    _ => 0,\n}"),
        ]
    );
}

#[test]
fn test_import_semicolon_export() {
    let source = "Frente;Verso\nCapital da França?;Paris\nCapital do Peru?;Lima<br>(desde 1535)\n";
    let cards = DelimitedFormat::default().parse(source).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[1].answer, "Lima\n(desde 1535)");
}

#[test]
fn test_convert_csv_to_tsv() {
    let registry = FormatRegistry::with_defaults();
    let cards = registry
        .parse("question,answer\n\"a, b?\",c\n", "csv")
        .unwrap();
    let tsv = registry.serialize(&cards, "tsv").unwrap();
    assert_eq!(tsv, "a, b?\tc\n");
}
