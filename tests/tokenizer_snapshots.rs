//! Snapshot tests for tokenized templates and rendered text.

use tinytime::{compile, compile_lenient, tokenize, Date, Options};

#[test]
fn test_sentence_tokens() {
    let tokens = tokenize("It was {h}:{mm}{a} on {MMMM} {Do}.");

    insta::assert_debug_snapshot!(tokens, @r###"
    [
        Literal(
            "It was ",
        ),
        Directive(
            Hour12,
        ),
        Literal(
            ":",
        ),
        Directive(
            Minute,
        ),
        Directive(
            Meridiem,
        ),
        Literal(
            " on ",
        ),
        Directive(
            FullMonth,
        ),
        Literal(
            " ",
        ),
        Directive(
            OrdinalDayOfMonth,
        ),
        Literal(
            ".",
        ),
    ]
    "###);
}

#[test]
fn test_unknown_groups_stay_literal() {
    let template = compile_lenient("{YYY}-{MM}-{ DD }");

    insta::assert_debug_snapshot!(template.tokens(), @r###"
    [
        Literal(
            "{YYY}-",
        ),
        Directive(
            PartialMonth,
        ),
        Literal(
            "-{ DD }",
        ),
    ]
    "###);
}

#[test]
fn test_tokens_serialize_to_json() {
    let tokens = tokenize("{YYYY}-{Mo}");
    let json = serde_json::to_string(&tokens).unwrap();

    insta::assert_snapshot!(json, @r###"[{"Directive":"FullYear"},{"Literal":"-"},{"Directive":"NumericMonth"}]"###);
}

#[test]
fn test_rendered_calendar_line() {
    let template = compile("{dddd}, {MMMM} {Do} {YYYY} at {h}:{mm}:{ss} {a}").unwrap();
    let date = Date::new(2016, 10, 3, 14, 53, 17).unwrap();

    insta::assert_snapshot!(
        template.render(&date, &Options::default()),
        @"Thursday, November 3rd 2016 at 2:53:17 PM"
    );
}

#[test]
fn test_date_serializes_fields() {
    let date = Date::new(1992, 8, 24, 21, 7, 30).unwrap();
    let json = serde_json::to_string(&date).unwrap();

    insta::assert_snapshot!(json, @r###"{"year":1992,"month":8,"day":24,"hour":21,"minute":7,"second":30}"###);

    let back: Date = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
    assert!(serde_json::from_str::<Date>(r#"{"year":2021,"month":1,"day":30}"#).is_err());
}
