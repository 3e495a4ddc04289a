use crate::{
    ArgumentIssue, DEFAULT_FORMAT, DatePattern, Format, FormatError, Policy, RandomBits,
    SequenceWidth, Token, TokenKind,
};

/// Format strings the parser must accept and re-serialize unchanged.
const ACCEPTED: &[&str] = &[
    "",
    DEFAULT_FORMAT,
    "ITEM-{SEQ:5}",
    "{GUID}",
    "{RANDOM:6}{RANDOM:9}{RANDOM:20}",
    "{RANDOM:32}",
    "INV-{DATE:yyyyMMdd}-{SEQ}",
    "{DATE:yyyy-MM-dd}/{DATE:HHmmss}/{DATE:dd.MM.yyyy}",
    "A}B:C",
    "plain text only",
    "ünïcødé-{SEQ:12}-ß",
    "{SEQ:1}{SEQ:20}",
    "x{GUID}y{GUID}z",
];

fn parse_err(text: &str) -> FormatError {
    Format::parse(text).unwrap_err()
}

fn invalid(kind: TokenKind, offset: usize, issue: ArgumentIssue) -> FormatError {
    FormatError::InvalidArgument {
        kind,
        offset,
        issue,
    }
}

#[test]
fn serialize_inverts_parse() {
    for &text in ACCEPTED {
        let format = Format::parse(text).unwrap();
        assert_eq!(format.to_string(), text);
        assert_eq!(text.parse::<Format>().unwrap(), format);
    }
}

#[test]
fn parse_inverts_serialize_up_to_text_merging() {
    let formats = [
        Format::standard(),
        Format::from(vec![
            Token::text("ITEM"),
            Token::text("-"),
            Token::sequence(),
        ]),
        Format::from(vec![
            Token::text(""),
            Token::date(DatePattern::Iso),
            Token::text(""),
            Token::guid(),
        ]),
        Format::from(vec![
            Token::random(RandomBits::Nine),
            Token::Sequence {
                width: SequenceWidth::Explicit(7),
            },
            Token::text("-}-"),
            Token::random(RandomBits::ThirtyTwo),
        ]),
        Format::new(),
    ];

    for format in formats {
        let reparsed = Format::parse(&format.to_string()).unwrap();
        assert_eq!(reparsed, format.normalized(), "{format}");
    }
}

#[test]
fn default_format_compiles_to_text_then_sequence() {
    let format = Format::compile(DEFAULT_FORMAT, &Policy::default()).unwrap();
    assert_eq!(format, Format::standard());
    assert_eq!(
        format.tokens(),
        &[Token::text("ITEM-"), Token::sequence()]
    );
    assert!(format.has_sequence());
}

#[test]
fn guid_round_trips_exactly() {
    let format = Format::parse("{GUID}").unwrap();
    assert_eq!(format.tokens(), &[Token::guid()]);
    assert_eq!(format.to_string(), "{GUID}");
}

#[test]
fn literal_runs_are_maximal() {
    let format = Format::parse("ab}c{GUID}de").unwrap();
    assert_eq!(
        format.tokens(),
        &[Token::text("ab}c"), Token::guid(), Token::text("de")]
    );
}

#[test]
fn malformed_directives() {
    assert_eq!(
        parse_err("ITEM-{SEQ"),
        FormatError::MalformedDirective { offset: 5 }
    );
    assert_eq!(parse_err("{"), FormatError::MalformedDirective { offset: 0 });
    assert_eq!(parse_err("{}"), FormatError::MalformedDirective { offset: 0 });
    assert_eq!(
        parse_err("ab{:6}"),
        FormatError::MalformedDirective { offset: 2 }
    );
    assert_eq!(
        parse_err("{SEQ{GUID}"),
        FormatError::MalformedDirective { offset: 0 }
    );
}

#[test]
fn unknown_directives_are_case_sensitive() {
    assert_eq!(
        parse_err("X{seq}"),
        FormatError::UnknownDirective {
            head: "seq".into(),
            offset: 1
        }
    );
    assert_eq!(
        parse_err("{TEXT:abc}"),
        FormatError::UnknownDirective {
            head: "TEXT".into(),
            offset: 0
        }
    );
    assert_eq!(
        parse_err("{UUID}"),
        FormatError::UnknownDirective {
            head: "UUID".into(),
            offset: 0
        }
    );
}

#[test]
fn random_arguments() {
    assert_eq!(
        parse_err("BAD-{RANDOM:7}"),
        invalid(TokenKind::Random, 4, ArgumentIssue::UnsupportedBits(7))
    );
    assert_eq!(
        parse_err("{RANDOM}"),
        invalid(TokenKind::Random, 0, ArgumentIssue::Missing)
    );
    assert_eq!(
        parse_err("{RANDOM:}"),
        invalid(TokenKind::Random, 0, ArgumentIssue::Missing)
    );
    assert_eq!(
        parse_err("{RANDOM:six}"),
        invalid(TokenKind::Random, 0, ArgumentIssue::NotNumeric("six".into()))
    );
    assert_eq!(
        parse_err("{RANDOM:+6}"),
        invalid(TokenKind::Random, 0, ArgumentIssue::NotNumeric("+6".into()))
    );
    assert_eq!(
        parse_err("{RANDOM:06}"),
        invalid(TokenKind::Random, 0, ArgumentIssue::LeadingZero("06".into()))
    );
    assert_eq!(
        parse_err("{RANDOM:99999999999}"),
        invalid(TokenKind::Random, 0, ArgumentIssue::UnsupportedBits(u32::MAX))
    );
    assert_eq!(
        parse_err("{RANDOM:6:9}"),
        invalid(TokenKind::Random, 0, ArgumentIssue::Unexpected("9".into()))
    );
}

#[test]
fn date_arguments() {
    assert_eq!(
        parse_err("{DATE}"),
        invalid(TokenKind::Date, 0, ArgumentIssue::Missing)
    );
    assert_eq!(
        parse_err("{DATE:YYYY}"),
        invalid(
            TokenKind::Date,
            0,
            ArgumentIssue::UnknownDatePattern("YYYY".into())
        )
    );
    // A colon in a pattern splits it into two arguments.
    assert_eq!(
        parse_err("{DATE:HH:mm}"),
        invalid(
            TokenKind::Date,
            0,
            ArgumentIssue::UnknownDatePattern("HH".into())
        )
    );
}

#[test]
fn guid_and_sequence_arguments() {
    assert_eq!(
        parse_err("{GUID:4}"),
        invalid(TokenKind::Guid, 0, ArgumentIssue::Unexpected("4".into()))
    );
    assert_eq!(
        parse_err("{SEQ:0}"),
        invalid(TokenKind::Sequence, 0, ArgumentIssue::WidthOutOfRange(0))
    );
    assert_eq!(
        parse_err("{SEQ:21}"),
        invalid(TokenKind::Sequence, 0, ArgumentIssue::WidthOutOfRange(21))
    );
    assert_eq!(
        parse_err("{SEQ:}"),
        invalid(TokenKind::Sequence, 0, ArgumentIssue::Missing)
    );
    assert_eq!(
        parse_err("{SEQ:5:5}"),
        invalid(TokenKind::Sequence, 0, ArgumentIssue::Unexpected("5".into()))
    );
    assert_eq!(
        Format::parse("{SEQ:12}").unwrap().tokens(),
        &[Token::Sequence {
            width: SequenceWidth::Explicit(12)
        }]
    );
}

#[test]
fn four_randoms_exceed_the_kind_cap() {
    let text = "{RANDOM:6}-{RANDOM:9}-{RANDOM:20}-{RANDOM:32}";
    let format = Format::parse(text).unwrap();
    assert_eq!(
        format.validate(&Policy::default()),
        Err(FormatError::TooManyOfKind {
            kind: TokenKind::Random,
            count: 4,
            max: 3
        })
    );
    assert_eq!(
        Format::compile(text, &Policy::default()).unwrap_err(),
        FormatError::TooManyOfKind {
            kind: TokenKind::Random,
            count: 4,
            max: 3
        }
    );
}

#[test]
fn text_runs_are_not_capped_per_kind() {
    let text = "INV-{DATE:yyyy}-{DATE:yyyyMM}-{RANDOM:6}-{SEQ}";
    let format = Format::compile(text, &Policy::default()).unwrap();
    assert_eq!(format.count(TokenKind::Text), 4);
    assert!(Format::compile("a{GUID}b{GUID}c{GUID}d", &Policy::default()).is_ok());

    // Only the total cap bounds text.
    let policy = Policy::default().with_max_tokens(8);
    assert_eq!(
        Format::compile("a{GUID}b{GUID}c{GUID}d{SEQ}e", &policy).unwrap_err(),
        FormatError::TooManyTokens { count: 9, max: 8 }
    );
}

#[test]
fn try_push_accepts_separators_beyond_the_kind_cap() {
    let policy = Policy::default();
    let mut format = Format::new();
    for _ in 0..5 {
        format.push_kind(TokenKind::Text, &policy).unwrap();
    }
    assert_eq!(format.count(TokenKind::Text), 5);
}

#[test]
fn total_cap() {
    let policy = Policy::default().with_max_per_kind(10).with_max_tokens(4);
    let err = Format::compile("a{GUID}b{GUID}c", &policy).unwrap_err();
    assert_eq!(err, FormatError::TooManyTokens { count: 5, max: 4 });
    assert!(Format::compile("a{GUID}b{GUID}", &policy).is_ok());
}

#[test]
fn kind_cap_is_reported_before_total_cap() {
    let policy = Policy::default().with_max_tokens(3);
    let err = Format::compile("{GUID}{GUID}{GUID}{GUID}", &policy).unwrap_err();
    assert!(matches!(
        err,
        FormatError::TooManyOfKind {
            kind: TokenKind::Guid,
            ..
        }
    ));
}

#[test]
fn validate_rejects_reserved_characters_in_text() {
    let format = Format::from(vec![
        Token::guid(),
        Token::text("ok"),
        Token::text("a{b"),
    ]);
    assert_eq!(
        format.validate(&Policy::default()),
        Err(invalid(TokenKind::Text, 8, ArgumentIssue::ReservedCharacter))
    );
}

#[test]
fn try_push_enforces_caps_without_mutating() {
    let policy = Policy::default();
    let mut format = Format::new();
    for _ in 0..3 {
        format.push_kind(TokenKind::Date, &policy).unwrap();
    }
    let before = format.clone();
    assert_eq!(
        format.push_kind(TokenKind::Date, &policy),
        Err(FormatError::TooManyOfKind {
            kind: TokenKind::Date,
            count: 4,
            max: 3
        })
    );
    assert_eq!(format, before);
    assert_eq!(format.to_string(), "{DATE:yyyyMMdd}".repeat(3));

    let policy = Policy::default().with_max_tokens(3);
    assert_eq!(
        format.try_push(Token::guid(), &policy),
        Err(FormatError::TooManyTokens { count: 4, max: 3 })
    );
    assert_eq!(format, before);
}

#[test]
fn editing_reorders_tokens() {
    let a = Token::text("a");
    let b = Token::guid();
    let c = Token::sequence();
    let mut format = Format::from(vec![a.clone(), b.clone(), c.clone()]);

    assert!(!format.move_up(0));
    assert!(!format.move_down(2));
    assert!(!format.move_up(7));

    assert!(format.move_down(0));
    assert_eq!(format.tokens(), &[b.clone(), a.clone(), c.clone()]);
    assert!(format.move_up(2));
    assert_eq!(format.tokens(), &[b.clone(), c.clone(), a.clone()]);

    assert_eq!(format.remove(1), Some(c.clone()));
    assert_eq!(format.remove(5), None);
    assert_eq!(format.tokens(), &[b, a]);

    format.reset();
    assert_eq!(format, Format::standard());
}

#[test]
fn drag_and_drop_adjusts_downward_targets() {
    let tokens: Vec<Token> = ["a", "b", "c", "d"].into_iter().map(Token::text).collect();
    let labels = |f: &Format| f.to_string();

    let mut format = Format::from(tokens.clone());
    assert!(format.move_to(0, 2));
    assert_eq!(labels(&format), "bacd");

    let mut format = Format::from(tokens.clone());
    assert!(!format.move_to(0, 1));
    assert_eq!(labels(&format), "abcd");

    let mut format = Format::from(tokens.clone());
    assert!(format.move_to(3, 0));
    assert_eq!(labels(&format), "dabc");

    let mut format = Format::from(tokens);
    assert!(!format.move_to(1, 1));
    assert!(!format.move_to(4, 0));
    assert!(!format.move_to(0, 4));
    assert_eq!(labels(&format), "abcd");
}

#[test]
fn normalized_merges_and_drops_text() {
    let format = Format::from(vec![
        Token::text(""),
        Token::text("IT"),
        Token::text("EM"),
        Token::text(""),
        Token::text("-"),
        Token::sequence(),
        Token::text(""),
    ]);
    assert_eq!(format.normalized(), Format::standard());
    assert_eq!(format.to_string(), DEFAULT_FORMAT);
    assert_eq!(Format::from(vec![Token::text("")]).normalized(), Format::new());
}

#[test]
fn counts_by_kind() {
    let format = Format::parse("a{GUID}b{GUID}{SEQ}").unwrap();
    assert_eq!(format.count(TokenKind::Text), 2);
    assert_eq!(format.count(TokenKind::Guid), 2);
    assert_eq!(format.count(TokenKind::Sequence), 1);
    assert_eq!(format.count(TokenKind::Date), 0);
    assert_eq!(format.len(), 5);
    assert!(!Format::parse("{GUID}").unwrap().has_sequence());
}

#[cfg(feature = "serde")]
#[test]
fn serde_is_a_plain_token_list() {
    let json = serde_json::to_string(&Format::standard()).unwrap();
    assert_eq!(
        json,
        r#"[{"type":"TEXT","literal":"ITEM-"},{"type":"SEQUENCE","width":null}]"#
    );
    let back: Format = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Format::standard());
}
