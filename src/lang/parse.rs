use super::{ast::*, lex::lex, promise::Promise, token::*, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Run the parsing state machine over a finalized token list and
/// return the finished (unresolved) tree.
pub fn parse(tokens: &[Token]) -> Result<AbstractSyntaxTree> {
    let mut parser = Parser::new();
    for token in tokens {
        parser.event(token)?;
    }
    parser.done()
}

/// The whole pipeline: lex, parse, resolve. The result is delivered
/// through a one-shot promise, already settled by the time it is
/// returned; a failure in any stage rejects it.
pub fn parse_file(source: &str) -> Promise<AbstractSyntaxTree> {
    let promise = Promise::new();
    match lex(source).and_then(|tokens| parse(&tokens)) {
        Ok(mut tree) => {
            tree.resolve();
            promise.resolve(tree);
        }
        Err(error) => promise.reject(error),
    }
    promise
}

// The label sub-state: armed after a label identifier until the
// promised block arrives.
#[derive(Debug, PartialEq, Clone, Copy)]
enum LabelState {
    Any,
    ExpectingBlock,
}

// The parameter-list sub-state: active between `(` and the tape open
// that consumes the list.
#[derive(Debug, PartialEq, Clone, Copy)]
enum ParamState {
    Not,
    Open,
    ExpectingDefaultValue,
    ExpectingTape,
}

struct Parser {
    tree: AbstractSyntaxTree,
    label: LabelState,
    params: ParamState,
    index: usize,
}

impl Parser {
    fn new() -> Parser {
        Parser {
            tree: AbstractSyntaxTree::new(),
            label: LabelState::Any,
            params: ParamState::Not,
            index: 0,
        }
    }

    fn event(&mut self, token: &Token) -> Result<()> {
        let index = self.index;
        self.index += 1;
        let result = match self.params {
            ParamState::Not => self.ready(token),
            ParamState::Open => self.param_open(token),
            ParamState::ExpectingDefaultValue => self.param_default(token),
            ParamState::ExpectingTape => self.param_tape(token),
        };
        result.map_err(|error| error.in_column(&(index..index + 1)))
    }

    fn ready(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::ValueIdentifier(_)
            | Token::AddressIdentifier(_)
            | Token::Number(_)
            | Token::String(_)
            | Token::Blank => {
                self.tree.append_value_block(token.clone());
                self.label = LabelState::Any;
                Ok(())
            }
            Token::CallIdentifier(_) => {
                self.tree.append_op_block(token.clone());
                self.label = LabelState::Any;
                Ok(())
            }
            Token::Comma => {
                self.tree.append_comma();
                self.label = LabelState::Any;
                Ok(())
            }
            Token::LabelIdentifier(ident) => {
                if self.label == LabelState::ExpectingBlock {
                    return Err(
                        error!(ConsecutiveLabels; &format!("LABEL {} FOLLOWS ANOTHER LABEL", ident)),
                    );
                }
                self.tree.label_next_cell(token)?;
                self.label = LabelState::ExpectingBlock;
                Ok(())
            }
            Token::OpenTape => {
                self.tree.open_tape(false);
                self.label = LabelState::Any;
                Ok(())
            }
            Token::OpenInlineTape => {
                self.tree.open_tape(true);
                self.label = LabelState::Any;
                Ok(())
            }
            Token::CloseTape | Token::CloseInlineTape => self.tree.close_tape(),
            Token::OpenParams => {
                self.params = ParamState::Open;
                Ok(())
            }
            Token::CloseParams => Err(error!(UnexpectedToken; "CLOSE PARAMS WITHOUT OPEN")),
        }
    }

    fn param_open(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::ValueIdentifier(_) => self.tree.add_param_for_next_tape(token),
            Token::LabelIdentifier(_) => {
                self.tree.add_param_for_next_tape(token)?;
                self.params = ParamState::ExpectingDefaultValue;
                Ok(())
            }
            Token::CloseParams => {
                self.params = ParamState::ExpectingTape;
                Ok(())
            }
            _ => Err(error!(InvalidParameter; &format!("UNEXPECTED {} IN PARAMETER LIST", token))),
        }
    }

    fn param_default(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::Number(_)
            | Token::String(_)
            | Token::AddressIdentifier(_)
            | Token::ValueIdentifier(_) => {
                self.tree.fulfill_param_default(token.clone());
                self.params = ParamState::Open;
                Ok(())
            }
            _ => Err(
                error!(MissingDefaultValue; &format!("EXPECTED DEFAULT VALUE, FOUND {}", token)),
            ),
        }
    }

    // A finished parameter list belongs to the tape that opens next.
    fn param_tape(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::OpenTape => {
                self.tree.open_tape(false);
                self.params = ParamState::Not;
                self.label = LabelState::Any;
                Ok(())
            }
            _ => Err(
                error!(ParamsWithoutTape; &format!("EXPECTED TAPE AFTER PARAMETERS, FOUND {}", token)),
            ),
        }
    }

    fn done(self) -> Result<AbstractSyntaxTree> {
        match self.params {
            ParamState::Not => {}
            ParamState::ExpectingDefaultValue => {
                return Err(error!(MissingDefaultValue; "NO DEFAULT VALUE BEFORE END OF INPUT"))
            }
            ParamState::Open | ParamState::ExpectingTape => {
                return Err(error!(ParamsWithoutTape; "PARAMETERS UNFINISHED AT END OF INPUT"))
            }
        }
        if self.label == LabelState::ExpectingBlock {
            return Err(error!(LabelWithoutBlock; "LABEL AT END OF INPUT"));
        }
        if self.tree.depth() > 0 {
            return Err(error!(UnbalancedTape; "UNCLOSED TAPE AT END OF INPUT"));
        }
        Ok(self.tree)
    }
}
