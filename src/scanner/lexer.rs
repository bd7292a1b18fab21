//! Logos-based scanner for C-like source
//!
//! Fast tokenization using the logos crate, with full byte coverage:
//! every input byte lands in exactly one token, including whitespace,
//! comments, and unrecognized characters. Malformed constructs become
//! ordinary tokens plus a recorded error, never a failed scan.

use logos::Logos;
use text_size::{TextRange, TextSize};

use super::token::{Token, TokenKind};
use crate::errors::{ErrorKind, LexError};

/// Scanner wrapping the logos-generated tokenizer
///
/// Lazy and restartable: each `Scanner` is independent state over one
/// input buffer, so callers may drop one mid-scan and start another.
/// Recoverable errors accumulate internally; collect them with
/// [`Scanner::into_errors`] once iteration finishes.
pub struct Scanner<'a> {
    inner: logos::Lexer<'a, RawToken>,
    offset: u32,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: RawToken::lexer(input),
            offset: 0,
            errors: Vec::new(),
        }
    }

    /// Errors recorded so far
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume the scanner, returning all recorded errors
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    fn record(&mut self, kind: ErrorKind, range: TextRange) {
        self.errors.push(LexError::new(kind, range));
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        let text = self.inner.slice();
        let start = TextSize::new(self.offset);
        self.offset += text.len() as u32;
        let range = TextRange::new(start, TextSize::new(self.offset));

        let kind = match raw {
            Ok(RawToken::MalformedNumber) => {
                self.record(ErrorKind::MalformedNumericLiteral, range);
                TokenKind::MalformedNumber
            }
            Ok(token) => token.into(),
            // Callback-detected failures keep their natural kind so the
            // annotation still reads as the construct being typed
            Err(RawError::UnterminatedString) => {
                self.record(ErrorKind::UnterminatedString, range);
                TokenKind::Str
            }
            Err(RawError::UnterminatedChar) => {
                self.record(ErrorKind::UnterminatedChar, range);
                TokenKind::Char
            }
            Err(RawError::UnterminatedComment) => {
                self.record(ErrorKind::UnterminatedComment, range);
                TokenKind::BlockComment
            }
            Err(RawError::Stray) => TokenKind::Unknown,
        };

        Some(Token { kind, text, range })
    }
}

/// Scan lazily
pub fn scan(input: &str) -> Scanner<'_> {
    Scanner::new(input)
}

/// Tokenize an entire string into a Vec, plus the errors recorded on the way
pub fn tokenize(input: &str) -> (Vec<Token<'_>>, Vec<LexError>) {
    let mut scanner = Scanner::new(input);
    let tokens: Vec<_> = scanner.by_ref().collect();
    (tokens, scanner.into_errors())
}

/// Scanner-internal error channel for the logos callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RawError {
    /// Input no rule matches; becomes an `Unknown` token, not a report
    #[default]
    Stray,
    UnterminatedString,
    UnterminatedChar,
    UnterminatedComment,
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = RawError)]
enum RawToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // PREPROCESSOR
    // =========================================================================
    #[token("#", lex_directive)]
    Directive,

    // =========================================================================
    // NAMES & LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+[uUlL]*", priority = 10)]
    #[regex(r"0[xX][0-9a-fA-F]+[uUlL]*", priority = 10)]
    #[regex(r"0[bB][01]+[uUlL]*", priority = 10)]
    Int,

    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?[fFlL]?", priority = 10)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[fFlL]?", priority = 10)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fFlL]?", priority = 10)]
    Float,

    // Digit-led runs the rules above reject: bare `0x`, `1.2.3`, `123abc`.
    // Loses every same-length tie to Int/Float, wins on longer garbage.
    #[regex(r"[0-9][0-9a-zA-Z_]*(\.[0-9a-zA-Z_]*)*", priority = 3)]
    MalformedNumber,

    #[regex(r#"(u8|[uUL])?""#, lex_string)]
    Str,

    #[regex(r"[uUL]?'", lex_char)]
    Char,

    // =========================================================================
    // MULTI-CHARACTER OPERATORS (longest match wins in logos)
    // =========================================================================
    #[token("...")]
    Ellipsis,

    #[token("<<=")]
    ShlEq,

    #[token(">>=")]
    ShrEq,

    #[token("->")]
    Arrow,

    #[token("++")]
    PlusPlus,

    #[token("--")]
    MinusMinus,

    #[token("<<")]
    Shl,

    #[token(">>")]
    Shr,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    #[token("+=")]
    PlusEq,

    #[token("-=")]
    MinusEq,

    #[token("*=")]
    StarEq,

    #[token("/=")]
    SlashEq,

    #[token("%=")]
    PercentEq,

    #[token("&=")]
    AmpEq,

    #[token("|=")]
    PipeEq,

    #[token("^=")]
    CaretEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token(".")]
    Dot,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
}

impl From<RawToken> for TokenKind {
    fn from(token: RawToken) -> Self {
        use RawToken::*;
        match token {
            Whitespace => TokenKind::Whitespace,
            LineComment => TokenKind::LineComment,
            BlockComment => TokenKind::BlockComment,
            Directive => TokenKind::Directive,
            Ident => TokenKind::Ident,
            Int => TokenKind::Int,
            Float => TokenKind::Float,
            MalformedNumber => TokenKind::MalformedNumber,
            Str => TokenKind::Str,
            Char => TokenKind::Char,
            Ellipsis => TokenKind::Ellipsis,
            ShlEq => TokenKind::ShlEq,
            ShrEq => TokenKind::ShrEq,
            Arrow => TokenKind::Arrow,
            PlusPlus => TokenKind::PlusPlus,
            MinusMinus => TokenKind::MinusMinus,
            Shl => TokenKind::Shl,
            Shr => TokenKind::Shr,
            LtEq => TokenKind::LtEq,
            GtEq => TokenKind::GtEq,
            EqEq => TokenKind::EqEq,
            BangEq => TokenKind::BangEq,
            AmpAmp => TokenKind::AmpAmp,
            PipePipe => TokenKind::PipePipe,
            PlusEq => TokenKind::PlusEq,
            MinusEq => TokenKind::MinusEq,
            StarEq => TokenKind::StarEq,
            SlashEq => TokenKind::SlashEq,
            PercentEq => TokenKind::PercentEq,
            AmpEq => TokenKind::AmpEq,
            PipeEq => TokenKind::PipeEq,
            CaretEq => TokenKind::CaretEq,
            LBrace => TokenKind::LBrace,
            RBrace => TokenKind::RBrace,
            LParen => TokenKind::LParen,
            RParen => TokenKind::RParen,
            LBracket => TokenKind::LBracket,
            RBracket => TokenKind::RBracket,
            Semicolon => TokenKind::Semicolon,
            Comma => TokenKind::Comma,
            Colon => TokenKind::Colon,
            Question => TokenKind::Question,
            Dot => TokenKind::Dot,
            Plus => TokenKind::Plus,
            Minus => TokenKind::Minus,
            Star => TokenKind::Star,
            Slash => TokenKind::Slash,
            Percent => TokenKind::Percent,
            Amp => TokenKind::Amp,
            Pipe => TokenKind::Pipe,
            Caret => TokenKind::Caret,
            Tilde => TokenKind::Tilde,
            Bang => TokenKind::Bang,
            Lt => TokenKind::Lt,
            Gt => TokenKind::Gt,
            Eq => TokenKind::Eq,
        }
    }
}

// =============================================================================
// CALLBACKS
// =============================================================================

/// `/*` opener: bump to the matching `*/`, or to end of input when the
/// comment never closes.
fn lex_block_comment(lex: &mut logos::Lexer<'_, RawToken>) -> Result<(), RawError> {
    let rem = lex.remainder();
    match rem.find("*/") {
        Some(pos) => {
            lex.bump(pos + 2);
            Ok(())
        }
        None => {
            lex.bump(rem.len());
            Err(RawError::UnterminatedComment)
        }
    }
}

fn lex_string(lex: &mut logos::Lexer<'_, RawToken>) -> Result<(), RawError> {
    lex_quoted(lex, '"', RawError::UnterminatedString)
}

fn lex_char(lex: &mut logos::Lexer<'_, RawToken>) -> Result<(), RawError> {
    lex_quoted(lex, '\'', RawError::UnterminatedChar)
}

/// Bump a quoted literal to its closing quote, honoring `\` escapes.
/// An unescaped newline or end of input before the close recovers there,
/// so scanning resumes on the next line.
fn lex_quoted(
    lex: &mut logos::Lexer<'_, RawToken>,
    quote: char,
    unterminated: RawError,
) -> Result<(), RawError> {
    let rem = lex.remainder();
    let mut chars = rem.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == quote {
            lex.bump(i + 1);
            return Ok(());
        }
        match c {
            // escape consumes the next char, including an escaped newline
            // (a CRLF pair counts as one newline)
            '\\' => {
                if let Some((_, '\r')) = chars.next() {
                    if let Some((_, '\n')) = chars.clone().next() {
                        chars.next();
                    }
                }
            }
            '\n' | '\r' => {
                lex.bump(i);
                return Err(unterminated);
            }
            _ => {}
        }
    }
    lex.bump(rem.len());
    Err(unterminated)
}

/// `#` opens a directive only when nothing but blanks precede it on its
/// line. The token then runs through the unescaped end of line, following
/// `\`-continuations.
fn lex_directive(lex: &mut logos::Lexer<'_, RawToken>) -> Result<(), RawError> {
    let start = lex.span().start;
    let before = &lex.source()[..start];
    let line_prefix = match before.rfind('\n') {
        Some(pos) => &before[pos + 1..],
        None => before,
    };
    if !line_prefix.chars().all(|c| c == ' ' || c == '\t') {
        return Err(RawError::Stray);
    }

    let rem = lex.remainder();
    let mut chars = rem.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            // continuation: swallow the escaped newline (LF or CRLF)
            '\\' => {
                if let Some((_, '\r')) = chars.next() {
                    if let Some((_, '\n')) = chars.clone().next() {
                        chars.next();
                    }
                }
            }
            '\n' | '\r' => {
                lex.bump(i);
                return Ok(());
            }
            _ => {}
        }
    }
    lex.bump(rem.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        scan(input).map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_declaration() {
        let tokens: Vec<_> = Scanner::new("int x = 42;").collect();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::Ident,
                TokenKind::Whitespace,
                TokenKind::Eq,
                TokenKind::Whitespace,
                TokenKind::Int,
                TokenKind::Semicolon,
            ]
        );
        assert_eq!(tokens[6].text, "42");
    }

    #[test]
    fn test_lex_longest_match() {
        assert_eq!(kinds("a <<= 1"), vec![
            TokenKind::Ident,
            TokenKind::Whitespace,
            TokenKind::ShlEq,
            TokenKind::Whitespace,
            TokenKind::Int,
        ]);
        assert_eq!(kinds("a->b"), vec![
            TokenKind::Ident,
            TokenKind::Arrow,
            TokenKind::Ident,
        ]);
        assert_eq!(kinds("..."), vec![TokenKind::Ellipsis]);
        assert_eq!(kinds("=="), vec![TokenKind::EqEq]);
    }

    #[test]
    fn test_lex_numbers() {
        assert_eq!(kinds("0xDEADBEEF"), vec![TokenKind::Int]);
        assert_eq!(kinds("0b1010"), vec![TokenKind::Int]);
        assert_eq!(kinds("100u"), vec![TokenKind::Int]);
        assert_eq!(kinds("98.6f"), vec![TokenKind::Float]);
        assert_eq!(kinds("1.23e10"), vec![TokenKind::Float]);
        assert_eq!(kinds(".5"), vec![TokenKind::Float]);
    }

    #[test]
    fn test_lex_malformed_numbers() {
        let (tokens, errors) = tokenize("0x");
        assert_eq!(tokens[0].kind, TokenKind::MalformedNumber);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::MalformedNumericLiteral);

        let (tokens, _) = tokenize("1.2.3");
        assert_eq!(tokens[0].kind, TokenKind::MalformedNumber);
        assert_eq!(tokens[0].text, "1.2.3");

        let (tokens, _) = tokenize("123abc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::MalformedNumber);
    }

    #[test]
    fn test_lex_string_with_escaped_quote() {
        let (tokens, errors) = tokenize(r#""a\"b""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, r#""a\"b""#);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_lex_unterminated_string_recovers_at_newline() {
        let (tokens, errors) = tokenize("\"oops\nint x;");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "\"oops");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::UnterminatedString);
        // scanning resumed on the next line
        assert!(tokens.iter().any(|t| t.text == "int"));
    }

    #[test]
    fn test_lex_unterminated_block_comment() {
        let (tokens, errors) = tokenize("/* no end");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::UnterminatedComment);
        assert_eq!(errors[0].range, tokens[0].range);
    }

    #[test]
    fn test_lex_block_comment_star_heavy() {
        // `**/` must close the comment; the naive regex form fails here
        let (tokens, errors) = tokenize("/* stars **/x");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::BlockComment);
        assert_eq!(tokens[0].text, "/* stars **/");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }

    #[test]
    fn test_lex_directive_line_start_only() {
        let (tokens, _) = tokenize("#include <stdio.h>\nint");
        assert_eq!(tokens[0].kind, TokenKind::Directive);
        assert_eq!(tokens[0].text, "#include <stdio.h>");

        let (tokens, _) = tokenize("a # b");
        assert_eq!(tokens[2].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_lex_directive_continuation() {
        let source = "#define MAX(a, b) \\\n    ((a) > (b) ? (a) : (b))\nint x;";
        let (tokens, _) = tokenize(source);
        assert_eq!(tokens[0].kind, TokenKind::Directive);
        assert!(tokens[0].text.contains("(a) : (b))"));
        assert!(tokens.iter().any(|t| t.text == "x"));
    }

    #[test]
    fn test_lex_char_literals() {
        assert_eq!(kinds("'x'"), vec![TokenKind::Char]);
        assert_eq!(kinds(r"'\n'"), vec![TokenKind::Char]);
        assert_eq!(kinds("L'a'"), vec![TokenKind::Char]);
    }

    #[test]
    fn test_lex_offsets_are_contiguous() {
        let source = "int main(void) { return 0; }";
        let tokens: Vec<_> = Scanner::new(source).collect();
        let mut expected_start = TextSize::new(0);
        for token in &tokens {
            assert_eq!(token.range.start(), expected_start);
            expected_start = token.range.end();
        }
        assert_eq!(expected_start, TextSize::of(source));
    }

    #[test]
    fn test_lex_stray_bytes_become_unknown() {
        let (tokens, errors) = tokenize("x @ y");
        assert_eq!(tokens[2].kind, TokenKind::Unknown);
        // stray characters are covered but not reported
        assert!(errors.is_empty());
    }
}
