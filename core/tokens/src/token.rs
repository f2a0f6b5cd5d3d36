use std::fmt;

/// The lexical category of a token. Keywords get one kind each; operators
/// and the remaining punctuation are grouped, with the exact character in
/// the token's spelling.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Class,
    Constructor,
    Function,
    Method,
    Field,
    Static,
    Var,
    IntType,
    CharType,
    BooleanType,
    Void,
    True,
    False,
    Null,
    This,
    Let,
    Do,
    If,
    Else,
    While,
    Return,
    Identifier,
    Integer,
    String,
    Operator,
    Symbol,
    Eoi,
}

impl TokenKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Class => "class",
            TokenKind::Constructor => "constructor",
            TokenKind::Function => "function",
            TokenKind::Method => "method",
            TokenKind::Field => "field",
            TokenKind::Static => "static",
            TokenKind::Var => "var",
            TokenKind::IntType => "int",
            TokenKind::CharType => "char",
            TokenKind::BooleanType => "boolean",
            TokenKind::Void => "void",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::This => "this",
            TokenKind::Let => "let",
            TokenKind::Do => "do",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer constant",
            TokenKind::String => "string constant",
            TokenKind::Operator => "operator",
            TokenKind::Symbol => "symbol",
            TokenKind::Eoi => "end of input",
        }
    }

    /// The keyword kind for `word`, if it is one.
    #[must_use]
    pub(crate) fn keyword(word: &str) -> Option<TokenKind> {
        Some(match word {
            "class" => TokenKind::Class,
            "constructor" => TokenKind::Constructor,
            "function" => TokenKind::Function,
            "method" => TokenKind::Method,
            "field" => TokenKind::Field,
            "static" => TokenKind::Static,
            "var" => TokenKind::Var,
            "int" => TokenKind::IntType,
            "char" => TokenKind::CharType,
            "boolean" => TokenKind::BooleanType,
            "void" => TokenKind::Void,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            "this" => TokenKind::This,
            "let" => TokenKind::Let,
            "do" => TokenKind::Do,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "return" => TokenKind::Return,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexed token: kind, exact spelling and 1-based source position.
/// String constants carry their content without the surrounding quotes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) spelling: String,
    pub(crate) line: u32,
    pub(crate) column: u32,
}

impl Token {
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[must_use]
    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The numeric value of an integer constant token.
    ///
    /// # Panics
    ///
    /// Panics if the token is not an integer constant.
    #[must_use]
    pub fn int_value(&self) -> i32 {
        assert!(
            self.kind == TokenKind::Integer,
            "int_value on a {} token",
            self.kind
        );
        self.spelling
            .parse()
            .expect("integer token with non-numeric spelling")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eoi => f.write_str(self.kind.name()),
            TokenKind::String => write!(f, "\"{}\"", self.spelling),
            _ => f.write_str(&self.spelling),
        }
    }
}
