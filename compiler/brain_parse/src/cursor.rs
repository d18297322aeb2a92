//! Token cursor for navigating the token stream.

use brain_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

use crate::ParseError;

/// Position in a [`TokenList`] with one token of lookahead.
///
/// The lexer always terminates the list with `Eof`, and the cursor never
/// moves past it, so `current()` is always a real token.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    /// Returned once the list is exhausted; only reachable for a list that
    /// lacks its trailing `Eof`.
    end: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        let end_span = tokens.iter().next_back().map_or(Span::DUMMY, |t| t.span);
        Cursor {
            tokens,
            interner,
            end: Token::new(TokenKind::Eof, end_span),
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    #[inline]
    pub fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token after the current one.
    pub fn peek_next_kind(&self) -> &TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(&self.end.kind, |t| &t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same variant as `kind`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Consume the current token and return its span. Stays put on `Eof`.
    pub fn advance(&mut self) -> Span {
        let span = self.current_span();
        if !self.is_at_end() {
            self.pos += 1;
        }
        span
    }

    /// Consume a token of the given kind or fail with
    /// `expected <kind>, found <current>`.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(&kind.to_string()))
        }
    }

    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        if let TokenKind::Ident(name) = *self.current_kind() {
            self.advance();
            Ok(name)
        } else {
            Err(self.error_expected("identifier"))
        }
    }

    /// Error for the current token not being `what`.
    #[cold]
    pub fn error_expected(&self, what: &str) -> ParseError {
        ParseError::expected(what, &self.describe_current(), self.current_span())
    }

    /// The current token as it reads in an error message.
    fn describe_current(&self) -> String {
        match *self.current_kind() {
            TokenKind::Ident(name) => format!("identifier `{}`", self.interner.lookup(name)),
            ref kind => kind.to_string(),
        }
    }
}
