use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Float literal tokens, such as `3.14` or `1_000.5`.
    ///
    /// A digit is required on both sides of the dot so that `10.print`
    /// lexes as an integer followed by a dotted call, not a float.
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42` or `1_000_000`.
    #[regex(r"[0-9][0-9_]*", parse_int)]
    Int(i64),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// String literal tokens, single- or double-quoted, one line.
    #[regex(r#""([^"\\\n]|\\.)*""#, unescape_string)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#, unescape_string)]
    Str(String),
    /// `method`
    #[token("method")]
    Method,
    /// `given`
    #[token("given")]
    Given,
    /// `when`
    #[token("when")]
    When,
    /// `default`
    #[token("default")]
    Default,
    /// The implicit-subject keyword `it`.
    #[token("it")]
    It,
    /// Identifier tokens; method or parameter names such as `n`,
    /// `calculate-factorial`, `valid?` or `empty!`.
    ///
    /// A `-` continues the identifier only when the next character is a
    /// letter or underscore, so `n-1` lexes as `n`, `-`, `1` while
    /// `calculate-factorial` is a single token. A single trailing `?` or
    /// `!` is part of the name.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*(-[A-Za-z_][A-Za-z0-9_]*)*[?!]?", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `=>`
    #[token("=>")]
    FatArrow,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `/=`
    #[token("/=")]
    SlashEqual,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// A stray operator character the language does not use.
    ///
    /// These lex successfully and are rejected by the parser, so that e.g.
    /// a lone `=` reports "unexpected token" at the right position instead
    /// of a lexer failure.
    #[regex(r"[=:\[\]&|~@%^$?!]", |lex| lex.slice().chars().next())]
    Unknown(char),

    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// Newlines are skipped; the callback keeps line/column tracking
    /// current.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of the current line's
/// first character, so every token can be given a line/column position.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line starts.
    pub line_start: usize,
}

/// A location in the source text.
///
/// Positions are 1-based for lines and columns; `offset` is the 0-based
/// byte offset of the token's first byte.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column number.
    pub column: usize,
    /// 0-based byte offset into the source.
    pub offset: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Tokenizes a whole source unit.
///
/// Produces the token sequence in source order, each token paired with the
/// position of its first byte. Whitespace and `#` comments are skipped.
/// The end-of-input condition is the end of the returned sequence; no
/// explicit terminator token is appended.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The positioned tokens, or the first `LexError` encountered.
///
/// # Errors
/// - `UnterminatedString` when a quote is never closed on its line.
/// - `LiteralTooLarge` when an integer literal overflows `i64`.
/// - `InvalidCharacter` for input no token can start with.
///
/// # Example
/// ```
/// use quando::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("n - 1").unwrap();
/// let kinds = tokens.iter().map(|(tok, _)| tok.clone()).collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("n".to_string()), Token::Minus, Token::Int(1)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source,
                                             LexerExtras { line:       1,
                                                           line_start: 0, });

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let pos = Position { line:   lexer.extras.line,
                             column: span.start - lexer.extras.line_start + 1,
                             offset: span.start, };

        match token {
            Ok(tok) => tokens.push((tok, pos)),
            Err(()) => {
                return Err(match lexer.slice().chars().next() {
                    Some('"' | '\'') => LexError::UnterminatedString { pos },
                    Some(c) if c.is_ascii_digit() => LexError::LiteralTooLarge { pos },
                    Some(c) => LexError::InvalidCharacter { character: c, pos },
                    None => LexError::InvalidCharacter { character: '\0', pos },
                });
            },
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice, ignoring `_`
/// digit separators.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits.
/// - `None`: If the literal overflows `i64`.
fn parse_int(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().replace('_', "").parse().ok()
}

/// Parses a floating-point literal from the current token slice, ignoring
/// `_` digit separators.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().replace('_', "").parse().ok()
}

/// Strips the surrounding quotes from a string literal slice and resolves
/// the `\n`, `\t`, `\r`, `\"`, `\'` and `\\` escapes. Unrecognized escapes
/// are kept verbatim, backslash included.
fn unescape_string(lex: &logos::Lexer<Token>) -> String {
    let raw = lex.slice();
    let mut chars = raw[1..raw.len() - 1].chars();
    let mut result = String::new();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('r') => result.push('\r'),
                Some('"') => result.push('"'),
                Some('\'') => result.push('\''),
                Some('\\') => result.push('\\'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                },
                None => {},
            }
        } else {
            result.push(c);
        }
    }

    result
}
