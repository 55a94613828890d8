use tape::lang::{lex, token::*, ErrorCode};

#[test]
fn test_empty() {
    let v = lex("").unwrap();
    assert_eq!(v, vec![]);
}

#[test]
fn test_whitespace_only() {
    let v = lex(" \t\n").unwrap();
    assert_eq!(v, vec![]);
}

#[test]
fn test_blank() {
    let v = lex("_").unwrap();
    assert_eq!(v, vec![Token::Blank]);
}

#[test]
fn test_simple_value_identifier() {
    let v = lex("abc").unwrap();
    assert_eq!(v, vec![Token::ValueIdentifier(Ident::value("abc"))]);
}

#[test]
fn test_complex_mixed_value_identifier() {
    let v = lex("a0_z").unwrap();
    assert_eq!(v, vec![Token::ValueIdentifier(Ident::value("a0_z"))]);
}

#[test]
fn test_address_identifier() {
    let v = lex("@abc").unwrap();
    let mut x = v.iter();
    assert_eq!(x.next(), Some(&Token::AddressIdentifier(Ident::address("@abc"))));
    assert_eq!(x.next(), None);
    assert_eq!(v[0].identifier(), Some("abc"));
}

#[test]
fn test_call_identifier() {
    let v = lex("abc!").unwrap();
    assert_eq!(v, vec![Token::CallIdentifier(Ident::call("abc!"))]);
    assert_eq!(v[0].identifier(), Some("abc"));
}

#[test]
fn test_label_identifier() {
    let v = lex("abc:").unwrap();
    assert_eq!(v, vec![Token::LabelIdentifier(Ident::label("abc:"))]);
    assert_eq!(v[0].identifier(), Some("abc"));
}

#[test]
fn test_whitespace_separated_sequence() {
    let v = lex("ab _ z 3 33.44").unwrap();
    let mut x = v.iter();
    assert_eq!(x.next(), Some(&Token::ValueIdentifier(Ident::value("ab"))));
    assert_eq!(x.next(), Some(&Token::Blank));
    assert_eq!(x.next(), Some(&Token::ValueIdentifier(Ident::value("z"))));
    assert_eq!(x.next(), Some(&Token::Number("3".to_string())));
    assert_eq!(x.next(), Some(&Token::Number("33.44".to_string())));
    assert_eq!(x.next(), None);
}

#[test]
fn test_number_trailing_period() {
    let error = lex("1.").unwrap_err();
    assert!(error == ErrorCode::InvalidDecimal);
    let error = lex("1. ").unwrap_err();
    assert!(error == ErrorCode::InvalidDecimal);
}

#[test]
fn test_number_double_period() {
    let error = lex("1.2.3").unwrap_err();
    assert!(error == ErrorCode::UnexpectedCharacter);
}

#[test]
fn test_string() {
    let v = lex("\"meow\"").unwrap();
    assert_eq!(v, vec![Token::String("\"meow\"".to_string())]);
}

#[test]
fn test_string_with_escaped_quote() {
    let v = lex("\"me\\\"ow\"").unwrap();
    assert_eq!(v, vec![Token::String("\"me\\\"ow\"".to_string())]);
}

#[test]
fn test_string_swallows_anything() {
    let v = lex("\"1 + [2] {,} @!\"").unwrap();
    assert_eq!(v.len(), 1);
}

#[test]
fn test_unterminated_string() {
    let error = lex("\"meow").unwrap_err();
    assert!(error == ErrorCode::UnterminatedString);
}

#[test]
fn test_invalid_escape() {
    let error = lex("\"me\\ow\"").unwrap_err();
    assert!(error == ErrorCode::InvalidEscape);
    let error = lex("\"me\\").unwrap_err();
    assert!(error == ErrorCode::InvalidEscape);
}

#[test]
fn test_brackets_and_commas_terminate_tokens() {
    let v = lex("(n)[n,2]").unwrap();
    let mut x = v.iter();
    assert_eq!(x.next(), Some(&Token::OpenParams));
    assert_eq!(x.next(), Some(&Token::ValueIdentifier(Ident::value("n"))));
    assert_eq!(x.next(), Some(&Token::CloseParams));
    assert_eq!(x.next(), Some(&Token::OpenTape));
    assert_eq!(x.next(), Some(&Token::ValueIdentifier(Ident::value("n"))));
    assert_eq!(x.next(), Some(&Token::Comma));
    assert_eq!(x.next(), Some(&Token::Number("2".to_string())));
    assert_eq!(x.next(), Some(&Token::CloseTape));
    assert_eq!(x.next(), None);
}

#[test]
fn test_inline_tape_brackets() {
    let v = lex("{ a }").unwrap();
    let mut x = v.iter();
    assert_eq!(x.next(), Some(&Token::OpenInlineTape));
    assert_eq!(x.next(), Some(&Token::ValueIdentifier(Ident::value("a"))));
    assert_eq!(x.next(), Some(&Token::CloseInlineTape));
    assert_eq!(x.next(), None);
}

#[test]
fn test_bad_character() {
    let error = lex("#").unwrap_err();
    assert!(error == ErrorCode::UnexpectedCharacter);
}

#[test]
fn test_operator_is_bad_outside_string() {
    let error = lex("1 + 2").unwrap_err();
    assert!(error == ErrorCode::UnexpectedCharacter);
}

#[test]
fn test_address_cannot_be_call() {
    let error = lex("@foo!").unwrap_err();
    assert!(error == ErrorCode::UnexpectedCharacter);
}

#[test]
fn test_address_cannot_be_label() {
    let error = lex("@foo:").unwrap_err();
    assert!(error == ErrorCode::UnexpectedCharacter);
}

#[test]
fn test_bare_sigils_are_bad() {
    assert!(lex(":").is_err());
    assert!(lex("!").is_err());
    assert!(lex(".").is_err());
}

#[test]
fn test_number_conversion() {
    let v = lex("33.44").unwrap();
    assert_eq!(v[0].as_val(), Some(tape::lang::ast::Val::Number(33.44)));
}

#[test]
fn test_string_conversion() {
    let v = lex("\"me\\\"ow\"").unwrap();
    assert_eq!(
        v[0].as_val(),
        Some(tape::lang::ast::Val::String("me\"ow".to_string()))
    );
}
