//! End to end pipeline tests: Jack source through the tokeniser, a minimal
//! statement parser, the XML codec and a trivial evaluator.

use anyhow::{anyhow, bail, Result};
use jackc_ast::{Ann, Ast, AstKind, NodeStore};
use jackc_tokens::{LexError, Token, TokenKind, Tokenizer};

#[test]
fn tokens_carry_kind_spelling_and_position() -> Result<()> {
    let mut lexer = Tokenizer::new("let x = 1 + 2 ;");
    let expected = [
        (TokenKind::Let, "let", 1),
        (TokenKind::Identifier, "x", 5),
        (TokenKind::Operator, "=", 7),
        (TokenKind::Integer, "1", 9),
        (TokenKind::Operator, "+", 11),
        (TokenKind::Integer, "2", 13),
        (TokenKind::Symbol, ";", 15),
    ];
    for (kind, spelling, column) in expected {
        let token = lexer.next_token()?;
        assert_eq!(token.kind(), kind);
        assert_eq!(token.spelling(), spelling);
        assert_eq!(token.line(), 1);
        assert_eq!(token.column(), column);
    }
    assert_eq!(lexer.next_token()?.kind(), TokenKind::Eoi);
    // end of input repeats forever
    assert_eq!(lexer.next_token()?.kind(), TokenKind::Eoi);
    Ok(())
}

#[test]
fn comments_and_whitespace_are_skipped() -> Result<()> {
    let source = "// leading\nlet /* inline */ x = 2 ; /* trailing\nspans lines */";
    let mut lexer = Tokenizer::new(source);
    assert_eq!(lexer.next_token()?.kind(), TokenKind::Let);
    let name = lexer.next_token()?;
    assert_eq!(name.spelling(), "x");
    assert_eq!(name.line(), 2);
    Ok(())
}

#[test]
fn string_constants_drop_their_quotes() -> Result<()> {
    let mut lexer = Tokenizer::new("\"hello world\"");
    let token = lexer.next_token()?;
    assert_eq!(token.kind(), TokenKind::String);
    assert_eq!(token.spelling(), "hello world");
    Ok(())
}

#[test]
fn lexical_failures_carry_their_position() {
    let mut lexer = Tokenizer::new("let #");
    lexer.next_token().unwrap();
    match lexer.next_token() {
        Err(LexError::UnexpectedChar { ch, line, column }) => {
            assert_eq!(ch, '#');
            assert_eq!((line, column), (1, 5));
        }
        other => panic!("expected an unexpected character error, got {other:?}"),
    }

    let mut lexer = Tokenizer::new("\"no closing quote");
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnterminatedString { .. })
    ));

    let mut lexer = Tokenizer::new("99999");
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::IntegerOutOfRange { .. })
    ));
}

#[test]
fn context_draws_a_caret_under_the_token() -> Result<()> {
    let mut lexer = Tokenizer::new("let x = 1 ;");
    lexer.next_token()?;
    let name = lexer.next_token()?;
    assert_eq!(lexer.context(&name), "let x = 1 ;\n    ^");
    Ok(())
}

/// A minimal recursive-descent parser for one `let <name> = <int> (+ <int>)* ;`
/// statement, just enough grammar to drive the library end to end.
struct LetParser<'s> {
    store: &'s mut NodeStore,
    lexer: Tokenizer,
}

impl<'s> LetParser<'s> {
    fn new(store: &'s mut NodeStore, source: &str) -> Self {
        LetParser {
            store,
            lexer: Tokenizer::new(source),
        }
    }

    fn parse(&mut self) -> Result<Ast> {
        self.expect(TokenKind::Let)?;
        let name = self.expect(TokenKind::Identifier)?;
        let eq = self.expect(TokenKind::Operator)?;
        if eq.spelling() != "=" {
            bail!("expected `=`, found `{eq}`\n{}", self.lexer.context(&eq));
        }

        let mut parts = vec![self.term()?];
        loop {
            let token = self.lexer.next_token()?;
            match (token.kind(), token.spelling()) {
                (TokenKind::Symbol, ";") => break,
                (TokenKind::Operator, op) => {
                    parts.push(self.store.create_infix_op(Ann::EMPTY, op));
                    parts.push(self.term()?);
                }
                _ => bail!(
                    "expected an operator or `;`, found `{token}`\n{}",
                    self.lexer.context(&token)
                ),
            }
        }

        let expr = self.store.create_expr(Ann::EMPTY, &parts);
        let var = self
            .store
            .create_var(Ann::EMPTY, name.spelling(), "local", 0, "int");
        Ok(self.store.create_let(Ann::EMPTY, var, expr))
    }

    fn term(&mut self) -> Result<Ast> {
        let token = self.expect(TokenKind::Integer)?;
        let constant = self.store.create_int(Ann::EMPTY, token.int_value());
        Ok(self.store.create_term(Ann::EMPTY, constant))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.lexer.next_token()?;
        if token.kind() == kind {
            Ok(token)
        } else {
            Err(anyhow!(
                "expected {kind}, found `{token}`\n{}",
                self.lexer.context(&token)
            ))
        }
    }
}

/// Left-to-right evaluation of an `ast_expr` over integer terms, the Jack
/// operator semantics without precedence.
fn eval_expr(store: &NodeStore, expr: Ast) -> i32 {
    let mut value = eval_term(store, store.get_expr(expr, 0));
    let mut i = 1;
    while i < store.size_of_expr(expr) {
        let op = store.get_infix_op_op(store.get_expr(expr, i));
        let rhs = eval_term(store, store.get_expr(expr, i + 1));
        value = match op {
            "+" => value + rhs,
            "-" => value - rhs,
            "*" => value * rhs,
            "/" => value / rhs,
            other => panic!("operator `{other}` is not evaluable here"),
        };
        i += 2;
    }
    value
}

fn eval_term(store: &NodeStore, term: Ast) -> i32 {
    store.get_int_constant(store.get_term_term(term))
}

#[test]
fn let_statement_survives_the_whole_pipeline() -> Result<()> {
    let mut store = NodeStore::new();
    let stmt = LetParser::new(&mut store, "let x = 1 + 2 ;").parse()?;
    assert_eq!(store.kind_of(stmt), AstKind::Let);

    let document = store.xml_string(stmt, 2)?;
    let mut copy = NodeStore::new();
    let stmt = copy.parse_xml_str(&document)?;

    let var = copy.get_let_var(stmt);
    assert_eq!(copy.get_var_name(var), "x");
    assert_eq!(eval_expr(&copy, copy.get_let_expr(stmt)), 3);
    Ok(())
}

#[test]
fn longer_expressions_evaluate_left_to_right() -> Result<()> {
    let mut store = NodeStore::new();
    let stmt = LetParser::new(&mut store, "let y = 10 - 2 * 3 ;").parse()?;
    // no precedence: (10 - 2) * 3
    assert_eq!(eval_expr(&store, store.get_let_expr(stmt)), 24);
    Ok(())
}

#[test]
fn parse_failures_name_the_offending_token() {
    let mut store = NodeStore::new();
    let err = LetParser::new(&mut store, "let x = ;").parse().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("expected integer constant"), "{message}");
    assert!(message.contains('^'), "{message}");
}
