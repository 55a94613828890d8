use tape::lang::{ast::AbstractSyntaxTree, lex, parse, Error};

pub fn parse_str(s: &str) -> AbstractSyntaxTree {
    match lex(s).and_then(|tokens| parse(&tokens)) {
        Ok(tree) => tree,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

pub fn parse_err(s: &str) -> Error {
    match lex(s).and_then(|tokens| parse(&tokens)) {
        Ok(tree) => panic!("expected error, parsed {}", tree),
        Err(e) => e,
    }
}
