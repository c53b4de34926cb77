//! Property-based tests for tokenizing, rendering and parsing.

use proptest::prelude::*;
use tinytime::{compile, compile_lenient, tokenize, Date, Options, ParseOptions, Token};

fn date_strategy() -> impl Strategy<Value = Date> {
    (1000i32..=9999, 0u32..12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(year, month, day, hour, minute, second)| {
            Date::new(year, month, day, hour, minute, second).unwrap()
        },
    )
}

fn options_strategy() -> impl Strategy<Value = Options> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(pad_hours, pad_days, pad_month)| {
        Options {
            pad_hours,
            pad_days,
            pad_month,
        }
    })
}

/// Templates made of directives, braces and plain text in any order.
fn template_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("{YYYY}".to_string()),
        Just("{YY}".to_string()),
        Just("{MMMM}".to_string()),
        Just("{MM}".to_string()),
        Just("{Mo}".to_string()),
        Just("{DD}".to_string()),
        Just("{Do}".to_string()),
        Just("{dddd}".to_string()),
        Just("{H}".to_string()),
        Just("{h}".to_string()),
        Just("{mm}".to_string()),
        Just("{ss}".to_string()),
        Just("{a}".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        "[a-zA-Z0-9 :/.,_-]{1,6}",
    ];
    prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn test_tokenize_is_deterministic(template in template_strategy()) {
        prop_assert_eq!(tokenize(&template), tokenize(&template));
    }

    #[test]
    fn test_tokenize_never_panics(template in "\\PC*") {
        let _tokens = tokenize(&template);
    }

    #[test]
    fn test_tokens_reconstruct_template(template in template_strategy()) {
        let rebuilt: String = tokenize(&template).iter().map(|t| t.to_string()).collect();
        prop_assert_eq!(rebuilt, template);
    }

    #[test]
    fn test_literals_are_coalesced(template in template_strategy()) {
        let tokens = tokenize(&template);
        for pair in tokens.windows(2) {
            prop_assert!(!(pair[0].is_literal() && pair[1].is_literal()));
        }
        for token in &tokens {
            if let Token::Literal(text) = token {
                prop_assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn test_lenient_render_never_panics(
        template in template_strategy(),
        date in date_strategy(),
        options in options_strategy()
    ) {
        let _text = compile_lenient(&template).render(&date, &options);
    }

    #[test]
    fn test_lossless_round_trip(date in date_strategy(), options in options_strategy()) {
        let template = compile("{YYYY}/{MM}-{DD}_{H}:{mm}.{ss}").unwrap();
        let text = template.render(&date, &options);
        let parsed = template.parse(&text, &ParseOptions::default()).unwrap();
        prop_assert_eq!(parsed, date);
    }

    #[test]
    fn test_twelve_hour_round_trip(date in date_strategy(), options in options_strategy()) {
        let template = compile("{Do} {MMMM} {YYYY}, {h}:{mm}:{ss} {a}").unwrap();
        let text = template.render(&date, &options);
        let parsed = template.parse(&text, &ParseOptions::default()).unwrap();
        prop_assert_eq!(parsed, date);
    }
}
