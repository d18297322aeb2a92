//! Lexer for brain using logos with string interning.
//!
//! Whitespace (newlines included) and comments are skipped; statements are
//! delimited by the grammar, not by line breaks. Unrecognised input and
//! integer literals that do not fit an `i32` become [`TokenKind::Error`]
//! tokens for the parser to report with their span.

use brain_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    #[regex(r"#[^\n]*")]
    LineComment,

    #[token("new")]
    New,
    #[token("write")]
    Write,
    #[token("read")]
    Read,
    #[token("lambda")]
    Lambda,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    #[token("return")]
    Return,
    #[token("ret")]
    Ret,

    #[token(":=")]
    ColonEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("!")]
    Bang,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("@")]
    At,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,

    // Out-of-range literals fail the callback and surface as errors.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i32>().ok())]
    Int(i32),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Lex source text into a [`TokenList`] terminated by `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match token_result {
            Ok(RawToken::LineComment) => continue,
            Ok(raw) => convert_token(raw, logos.slice(), interner),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    result.push(Token::new(TokenKind::Eof, Span::point(source.len())));
    result
}

fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        // Filtered out by `lex` before conversion.
        RawToken::LineComment => TokenKind::Error,

        RawToken::New => TokenKind::New,
        RawToken::Write => TokenKind::Write,
        RawToken::Read => TokenKind::Read,
        RawToken::Lambda => TokenKind::Lambda,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Not => TokenKind::Not,
        RawToken::Return => TokenKind::Return,
        RawToken::Ret => TokenKind::Ret,

        RawToken::ColonEq => TokenKind::ColonEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::At => TokenKind::At,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
    }
}
