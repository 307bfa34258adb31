//! Token cursor over a SQL fragment with source byte offsets.
//!
//! Tokenization is delegated to sqlparser's tokenizer (MySQL dialect, so
//! backtick identifiers, `--`, `#` and `/* */` comments are understood). Each
//! token also carries the byte offset where it starts in the source, which lets
//! callers hand back verbatim substrings instead of re-rendered tokens.

use sqlparser::dialect::MySqlDialect;
use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::{Location, Token, Tokenizer};

/// A token together with the byte offset where it starts in the source text
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
}

/// Cursor over the tokens of a SQL fragment.
pub struct TokenCursor<'a> {
    source: &'a str,
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Tokenize `source`. Returns `None` if the tokenizer rejects it, e.g. on
    /// an unterminated string or block comment.
    pub fn new(source: &'a str) -> Option<Self> {
        let dialect = MySqlDialect {};
        let raw = Tokenizer::new(&dialect, source)
            .tokenize_with_location()
            .ok()?;

        let line_starts = line_starts(source);
        let mut tokens: Vec<SpannedToken> = Vec::with_capacity(raw.len());
        for t in raw {
            let offset = byte_offset(source, &line_starts, &t.span.start);
            let previous = tokens.last().map_or(0, |p| p.start);
            tokens.push(SpannedToken {
                token: t.token,
                start: offset.max(previous),
            });
        }

        Some(Self {
            source,
            tokens,
            pos: 0,
        })
    }

    // ========================================================================
    // Position and state
    // ========================================================================

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    // ========================================================================
    // Token access
    // ========================================================================

    #[inline]
    pub fn current_token(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Byte offset where the current token starts, or the source length at end.
    #[inline]
    pub fn offset(&self) -> usize {
        self.current_token()
            .map(|t| t.start)
            .unwrap_or(self.source.len())
    }

    /// Move to the first token starting at or after byte `offset`.
    pub fn seek_offset(&mut self, offset: usize) {
        self.pos = self
            .tokens
            .iter()
            .position(|t| t.start >= offset)
            .unwrap_or(self.tokens.len());
    }

    // ========================================================================
    // Whitespace handling
    // ========================================================================

    /// Skip whitespace and comment tokens.
    pub fn skip_whitespace(&mut self) {
        while let Some(token) = self.current_token() {
            match &token.token {
                Token::Whitespace(_) => self.advance(),
                _ => break,
            }
        }
    }

    /// Index of the first non-whitespace token at or after `index`.
    pub fn next_significant(&self, index: usize) -> Option<usize> {
        (index..self.tokens.len()).find(|&i| !matches!(self.tokens[i].token, Token::Whitespace(_)))
    }

    // ========================================================================
    // Token type checks
    // ========================================================================

    #[inline]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(
            self.current_token().map(|t| &t.token),
            Some(Token::Word(w)) if w.keyword == keyword && w.quote_style.is_none()
        )
    }

    /// Check if the current token is the unquoted word `word` (case-insensitive).
    #[inline]
    pub fn check_word_ci(&self, word: &str) -> bool {
        self.word_at_ci(self.pos, word)
    }

    /// Check if the token at `index` is the unquoted word `word` (case-insensitive).
    pub fn word_at_ci(&self, index: usize, word: &str) -> bool {
        matches!(
            self.tokens.get(index).map(|t| &t.token),
            Some(Token::Word(w)) if w.quote_style.is_none() && w.value.eq_ignore_ascii_case(word)
        )
    }

    /// Check if current token matches a specific token type (by discriminant).
    #[inline]
    pub fn check_token(&self, expected: &Token) -> bool {
        if let Some(token) = self.current_token() {
            std::mem::discriminant(&token.token) == std::mem::discriminant(expected)
        } else {
            false
        }
    }

    /// Source text from byte `start` up to the start of the current token.
    #[inline]
    pub fn text_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset()]
    }
}

fn line_starts(source: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(source.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

/// Map a 1-based line/column location (columns count characters) to a byte offset.
fn byte_offset(source: &str, line_starts: &[usize], location: &Location) -> usize {
    let line = location.line as usize;
    let column = location.column as usize;
    let Some(&line_start) = line.checked_sub(1).and_then(|l| line_starts.get(l)) else {
        return source.len();
    };

    source[line_start..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map(|(i, _)| line_start + i)
        .unwrap_or(source.len())
}
