use super::chars::{self, Kind};
use super::{token::*, Error};
use crate::error;

/// Run the lexical state machine over an entire source string and
/// return the ordered token list.
pub fn lex(s: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new();
    chars::stream_file(s, &mut |kind, ch| lexer.event(kind, ch))?;
    debug_assert_eq!(lexer.state, State::Done);
    Ok(lexer.tokens)
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum State {
    None,
    Identifier,
    Number,
    DecimalPre,
    DecimalPost,
    Str,
    Escape,
    Done,
}

// A token still being accumulated. Finalizing derives the semantic
// identifier from the raw text.
enum Partial {
    Value(String),
    Address(String),
    Number(String),
    Str(String),
}

impl Partial {
    fn push(&mut self, ch: char) {
        match self {
            Partial::Value(s) | Partial::Address(s) | Partial::Number(s) | Partial::Str(s) => {
                s.push(ch)
            }
        }
    }

    fn finalize(self) -> Token {
        match self {
            Partial::Value(s) => Token::ValueIdentifier(Ident::value(&s)),
            Partial::Address(s) => Token::AddressIdentifier(Ident::address(&s)),
            Partial::Number(s) => Token::Number(s),
            Partial::Str(s) => Token::String(s),
        }
    }
}

struct Lexer {
    state: State,
    tokens: Vec<Token>,
    current: Option<Partial>,
    col: usize,
}

impl Lexer {
    fn new() -> Lexer {
        Lexer {
            state: State::None,
            tokens: vec![],
            current: None,
            col: 0,
        }
    }

    fn event(&mut self, kind: Kind, ch: Option<char>) -> Result<(), Error> {
        let result = match self.state {
            State::None => self.none(kind, ch),
            State::Identifier => self.identifier(kind, ch),
            State::Number => self.number(kind, ch),
            State::DecimalPre => self.decimal_pre(kind, ch),
            State::DecimalPost => self.decimal_post(kind, ch),
            State::Str => self.string(kind, ch),
            State::Escape => self.escape(kind, ch),
            State::Done => self.bad_char(ch),
        };
        self.col += 1;
        result
    }

    fn start(&mut self, partial: Partial, state: State) {
        debug_assert!(self.current.is_none());
        self.current = Some(partial);
        self.state = state;
    }

    fn append(&mut self, ch: Option<char>) {
        if let (Some(partial), Some(ch)) = (self.current.as_mut(), ch) {
            partial.push(ch);
        }
    }

    fn finish(&mut self) {
        if let Some(partial) = self.current.take() {
            self.tokens.push(partial.finalize());
        }
        self.state = State::None;
    }

    fn bad_char(&self, ch: Option<char>) -> Result<(), Error> {
        let column = self.col..self.col + 1;
        match ch {
            Some(ch) => {
                Err(error!(UnexpectedCharacter, ..&column; &format!("BAD CHARACTER '{}'", ch)))
            }
            None => Err(error!(UnexpectedCharacter, ..&column; "UNEXPECTED END OF INPUT")),
        }
    }

    // Single-character tokens emitted directly from the `None` state,
    // and after terminating whatever token was in progress.
    fn punctuation(kind: Kind) -> Option<Token> {
        match kind {
            Kind::Comma => Some(Token::Comma),
            Kind::OpenTape => Some(Token::OpenTape),
            Kind::CloseTape => Some(Token::CloseTape),
            Kind::OpenParams => Some(Token::OpenParams),
            Kind::CloseParams => Some(Token::CloseParams),
            Kind::OpenInlineTape => Some(Token::OpenInlineTape),
            Kind::CloseInlineTape => Some(Token::CloseInlineTape),
            _ => None,
        }
    }

    fn none(&mut self, kind: Kind, ch: Option<char>) -> Result<(), Error> {
        match kind {
            Kind::Whitespace => Ok(()),
            Kind::Underscore => {
                self.tokens.push(Token::Blank);
                Ok(())
            }
            Kind::Alphabetic => {
                self.start(Partial::Value(text(ch)), State::Identifier);
                Ok(())
            }
            Kind::AtSign => {
                self.start(Partial::Address(text(ch)), State::Identifier);
                Ok(())
            }
            Kind::Numeric => {
                self.start(Partial::Number(text(ch)), State::Number);
                Ok(())
            }
            Kind::DoubleQuote => {
                self.start(Partial::Str(text(ch)), State::Str);
                Ok(())
            }
            Kind::Eof => {
                self.state = State::Done;
                Ok(())
            }
            _ => match Lexer::punctuation(kind) {
                Some(token) => {
                    self.tokens.push(token);
                    Ok(())
                }
                None => self.bad_char(ch),
            },
        }
    }

    fn identifier(&mut self, kind: Kind, ch: Option<char>) -> Result<(), Error> {
        match kind {
            Kind::Alphabetic | Kind::Numeric | Kind::Underscore => {
                self.append(ch);
                Ok(())
            }
            Kind::Whitespace => {
                self.finish();
                Ok(())
            }
            // An identifier ending in `:` is a label, ending in `!` a
            // call. Only a plain value identifier may be retagged; an
            // address identifier cannot also carry a call or label
            // sigil.
            Kind::Colon => match self.current.take() {
                Some(Partial::Value(mut s)) => {
                    s.push(':');
                    self.tokens.push(Token::LabelIdentifier(Ident::label(&s)));
                    self.state = State::None;
                    Ok(())
                }
                other => {
                    self.current = other;
                    self.bad_char(ch)
                }
            },
            Kind::Exclamation => match self.current.take() {
                Some(Partial::Value(mut s)) => {
                    s.push('!');
                    self.tokens.push(Token::CallIdentifier(Ident::call(&s)));
                    self.state = State::None;
                    Ok(())
                }
                other => {
                    self.current = other;
                    self.bad_char(ch)
                }
            },
            Kind::Eof => {
                self.finish();
                self.state = State::Done;
                Ok(())
            }
            _ => match Lexer::punctuation(kind) {
                Some(token) => {
                    self.finish();
                    self.tokens.push(token);
                    Ok(())
                }
                None => self.bad_char(ch),
            },
        }
    }

    fn number(&mut self, kind: Kind, ch: Option<char>) -> Result<(), Error> {
        match kind {
            Kind::Numeric => {
                self.append(ch);
                Ok(())
            }
            Kind::Period => {
                self.append(ch);
                self.state = State::DecimalPre;
                Ok(())
            }
            Kind::Whitespace => {
                self.finish();
                Ok(())
            }
            Kind::Eof => {
                self.finish();
                self.state = State::Done;
                Ok(())
            }
            _ => match Lexer::punctuation(kind) {
                Some(token) => {
                    self.finish();
                    self.tokens.push(token);
                    Ok(())
                }
                None => self.bad_char(ch),
            },
        }
    }

    // A decimal number must have at least one digit after the period.
    fn decimal_pre(&mut self, kind: Kind, ch: Option<char>) -> Result<(), Error> {
        match kind {
            Kind::Numeric => {
                self.append(ch);
                self.state = State::DecimalPost;
                Ok(())
            }
            _ => {
                let column = self.col..self.col + 1;
                Err(error!(InvalidDecimal, ..&column; "EXPECTED DIGIT AFTER PERIOD"))
            }
        }
    }

    fn decimal_post(&mut self, kind: Kind, ch: Option<char>) -> Result<(), Error> {
        match kind {
            Kind::Numeric => {
                self.append(ch);
                Ok(())
            }
            Kind::Whitespace => {
                self.finish();
                Ok(())
            }
            Kind::Eof => {
                self.finish();
                self.state = State::Done;
                Ok(())
            }
            _ => match Lexer::punctuation(kind) {
                Some(token) => {
                    self.finish();
                    self.tokens.push(token);
                    Ok(())
                }
                None => self.bad_char(ch),
            },
        }
    }

    // Almost any character may appear inside a string.
    fn string(&mut self, kind: Kind, ch: Option<char>) -> Result<(), Error> {
        match kind {
            Kind::DoubleQuote => {
                self.append(ch);
                self.finish();
                Ok(())
            }
            Kind::Backslash => {
                self.append(ch);
                self.state = State::Escape;
                Ok(())
            }
            Kind::Eof => {
                let column = self.col..self.col + 1;
                Err(error!(UnterminatedString, ..&column))
            }
            _ => {
                self.append(ch);
                Ok(())
            }
        }
    }

    // An escaped quote does not terminate the string. Nothing else may
    // be escaped.
    fn escape(&mut self, kind: Kind, ch: Option<char>) -> Result<(), Error> {
        match kind {
            Kind::DoubleQuote => {
                self.append(ch);
                self.state = State::Str;
                Ok(())
            }
            _ => {
                let column = self.col..self.col + 1;
                match ch {
                    Some(ch) => {
                        Err(error!(InvalidEscape, ..&column; &format!("CANNOT ESCAPE '{}'", ch)))
                    }
                    None => Err(error!(InvalidEscape, ..&column; "UNEXPECTED END OF INPUT")),
                }
            }
        }
    }
}

fn text(ch: Option<char>) -> String {
    let mut s = String::new();
    if let Some(ch) = ch {
        s.push(ch);
    }
    s
}
