use crate::errors::LexError;
use crate::token::{Token, TokenKind};

const OPERATORS: &[char] = &['+', '-', '*', '/', '&', '|', '<', '>', '=', '~'];
const PUNCTUATION: &[char] = &['{', '}', '(', ')', '[', ']', '.', ',', ';'];

/// A pull-based tokeniser over an in-memory source string.
pub struct Tokenizer {
    chars: Vec<char>,
    lines: Vec<String>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Tokenizer {
    #[must_use]
    pub fn new(source: &str) -> Self {
        Tokenizer {
            chars: source.chars().collect(),
            lines: source.lines().map(str::to_string).collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The next token. Whitespace and `//` / `/* */` comments are skipped;
    /// once the input is exhausted this keeps returning an end-of-input
    /// token.
    ///
    /// # Errors
    ///
    /// Returns an error for an unterminated string or comment, an integer
    /// constant outside the Jack word range, or a character that cannot
    /// start any token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;
        let (line, column) = (self.line, self.column);
        let Some(c) = self.peek() else {
            return Ok(token(TokenKind::Eoi, String::new(), line, column));
        };

        if c.is_ascii_alphabetic() || c == '_' {
            let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
            let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier);
            return Ok(token(kind, word, line, column));
        }
        if c.is_ascii_digit() {
            let digits = self.take_while(|c| c.is_ascii_digit());
            // the lexical grammar has no signs, so only the positive bound
            // applies here
            if digits.parse::<i32>().map_or(true, |n| n > 32767) {
                return Err(LexError::IntegerOutOfRange {
                    text: digits,
                    line,
                    column,
                });
            }
            return Ok(token(TokenKind::Integer, digits, line, column));
        }
        if c == '"' {
            return self.string_constant(line, column);
        }
        if OPERATORS.contains(&c) {
            self.advance();
            return Ok(token(TokenKind::Operator, c.to_string(), line, column));
        }
        if PUNCTUATION.contains(&c) {
            self.advance();
            return Ok(token(TokenKind::Symbol, c.to_string(), line, column));
        }
        Err(LexError::UnexpectedChar { ch: c, line, column })
    }

    /// The source line a token came from, with a caret run underneath it.
    #[must_use]
    pub fn context(&self, token: &Token) -> String {
        let text = self
            .lines
            .get(token.line as usize - 1)
            .map_or("", String::as_str);
        let pad = " ".repeat(token.column as usize - 1);
        let width = token.spelling.chars().count().max(1);
        format!("{text}\n{pad}{}", "^".repeat(width))
    }

    fn string_constant(&mut self, line: u32, column: u32) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut content = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.advance();
                    return Ok(token(TokenKind::String, content, line, column));
                }
                // a string constant cannot span lines
                Some('\n') | None => return Err(LexError::UnterminatedString { line, column }),
                Some(c) => {
                    content.push(c);
                    self.advance();
                }
            }
        }
    }

    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => self.advance(),
                Some('/') if self.peek_at(1) == Some('/') => {
                    while !matches!(self.peek(), Some('\n') | None) {
                        self.advance();
                    }
                }
                Some('/') if self.peek_at(1) == Some('*') => {
                    let (line, column) = (self.line, self.column);
                    self.advance();
                    self.advance();
                    loop {
                        match self.peek() {
                            Some('*') if self.peek_at(1) == Some('/') => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            Some(_) => self.advance(),
                            None => {
                                return Err(LexError::UnterminatedComment { line, column })
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

fn token(kind: TokenKind, spelling: String, line: u32, column: u32) -> Token {
    Token {
        kind,
        spelling,
        line,
        column,
    }
}
