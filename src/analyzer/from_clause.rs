//! FROM clause tokenization
//!
//! Classifies the text after a `FROM` keyword into table references, commas,
//! join keywords, `ON`/`USING` keywords and join conditions:
//!
//! ```text
//! foo f1, bar b1 left join baz b2 on baz.id=bar.id
//! Table  Comma Table  Join  Table  On  Condition
//! ```
//!
//! Token text is always a verbatim slice of the input, so a derived table
//! keeps its parentheses and alias exactly as written. Comments between
//! tokens are skipped and never end up in table or condition text.

use sqlparser::keywords::Keyword;
use sqlparser::tokenizer::Token;

use super::bracket::{mask_literals, matching_close};
use super::config::JoinVocabulary;
use super::token_cursor::TokenCursor;

/// Words that end a FROM clause when they appear outside parentheses
const CLAUSE_TERMINATORS: &[&str] = &[
    "where",
    "group",
    "having",
    "order",
    "limit",
    "union",
    "except",
    "intersect",
    "window",
    "offset",
    "fetch",
    "for",
    "lock",
    "into",
    "returning",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromTokenKind {
    Table,
    Comma,
    Join,
    On,
    Using,
    Condition,
}

/// One classified piece of a FROM clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromToken {
    pub kind: FromTokenKind,
    pub text: String,
}

impl FromToken {
    pub fn new(kind: FromTokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Locate the text following the first top-level `FROM` keyword.
///
/// `FROM` inside parentheses (e.g. `extract(year from d)`) is ignored. Returns
/// `None` when there is no such keyword or the statement cannot be tokenized.
pub fn find_from_clause(statement: &str) -> Option<&str> {
    find_from_clauses(statement).into_iter().next()
}

/// Locate the text following every top-level `FROM` keyword, in order.
///
/// A compound query such as `select .. from a union select .. from b` has one
/// entry per branch; each entry runs to the end of the statement and is cut
/// at its own terminator by [`tokenize_from_clause`].
pub fn find_from_clauses(statement: &str) -> Vec<&str> {
    let Some(mut cursor) = TokenCursor::new(statement) else {
        return Vec::new();
    };
    let mut clauses = Vec::new();
    let mut depth = 0usize;

    while !cursor.is_at_end() {
        if depth == 0 && cursor.check_keyword(Keyword::FROM) {
            cursor.advance();
            clauses.push(&statement[cursor.offset()..]);
            continue;
        }
        if cursor.check_token(&Token::LParen) {
            depth += 1;
        } else if cursor.check_token(&Token::RParen) {
            depth = depth.saturating_sub(1);
        }
        cursor.advance();
    }

    clauses
}

/// Tokenize a FROM clause (the text after `FROM`).
///
/// Scanning stops at the end of the text, at `;`, or at a top-level clause
/// keyword such as `WHERE` or `ORDER BY`; the terminator is not emitted. Text
/// the tokenizer rejects (an unterminated string, say) yields no tokens.
pub fn tokenize_from_clause(clause: &str, vocabulary: &JoinVocabulary) -> Vec<FromToken> {
    let Some(mut cursor) = TokenCursor::new(clause) else {
        return Vec::new();
    };
    let masked = mask_literals(clause);
    let mut tokens = Vec::new();

    loop {
        cursor.skip_whitespace();
        if cursor.is_at_end() || at_clause_end(&cursor) {
            break;
        }

        if cursor.check_token(&Token::Comma) {
            tokens.push(FromToken::new(FromTokenKind::Comma, ","));
            cursor.advance();
            continue;
        }

        if let Some(after_join) = match_join(&cursor, vocabulary) {
            let start = cursor.offset();
            cursor.set_pos(after_join);
            tokens.push(FromToken::new(FromTokenKind::Join, cursor.text_from(start)));
            continue;
        }

        if let Some(kind) = join_condition_kind(&cursor) {
            let start = cursor.offset();
            cursor.advance();
            tokens.push(FromToken::new(kind, cursor.text_from(start)));

            cursor.skip_whitespace();
            let condition_start = cursor.offset();
            let condition_end = consume_until_boundary(&mut cursor, vocabulary);
            let condition = &clause[condition_start..condition_end];
            if !condition.is_empty() {
                tokens.push(FromToken::new(FromTokenKind::Condition, condition));
            }
            continue;
        }

        let start = cursor.offset();
        let end = if cursor.check_token(&Token::LParen) {
            match matching_close(&masked, start) {
                Ok(close) => {
                    cursor.seek_offset(close + 1);
                    consume_derived_alias(&mut cursor, vocabulary);
                }
                Err(_) => cursor.set_pos(usize::MAX),
            }
            cursor.offset()
        } else {
            consume_until_boundary(&mut cursor, vocabulary)
        };

        let table = clause[start..end].trim_end();
        tokens.push(FromToken::new(FromTokenKind::Table, table));
    }

    tokens
}

fn at_clause_end(cursor: &TokenCursor<'_>) -> bool {
    cursor.check_token(&Token::SemiColon)
        || CLAUSE_TERMINATORS
            .iter()
            .any(|word| cursor.check_word_ci(word))
}

/// If a join phrase starts at the cursor, return the token index just past it.
fn match_join(cursor: &TokenCursor<'_>, vocabulary: &JoinVocabulary) -> Option<usize> {
    vocabulary.phrases().find_map(|phrase| {
        let mut index = cursor.pos();
        for word in phrase {
            let at = cursor.next_significant(index)?;
            if !cursor.word_at_ci(at, word) {
                return None;
            }
            index = at + 1;
        }
        Some(index)
    })
}

/// `On` or `Using` when the cursor is at a join condition keyword
fn join_condition_kind(cursor: &TokenCursor<'_>) -> Option<FromTokenKind> {
    if cursor.check_word_ci("on") {
        Some(FromTokenKind::On)
    } else if cursor.check_word_ci("using") {
        Some(FromTokenKind::Using)
    } else {
        None
    }
}

/// Advance over a table reference or condition, stopping before the next
/// top-level comma, join phrase, `ON`/`USING`, or clause terminator.
///
/// Returns the byte offset just past the last token that is not whitespace
/// or a comment, so trailing comments never become part of the text.
fn consume_until_boundary(cursor: &mut TokenCursor<'_>, vocabulary: &JoinVocabulary) -> usize {
    let mut depth = 0usize;
    let mut end = cursor.offset();

    while let Some(token) = cursor.current_token() {
        match &token.token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            Token::Word(w) if depth == 0 && w.quote_style.is_none() => {
                if at_clause_end(cursor)
                    || join_condition_kind(cursor).is_some()
                    || (vocabulary.starts_phrase(&w.value) && match_join(cursor, vocabulary).is_some())
                {
                    break;
                }
            }
            Token::Comma | Token::SemiColon if depth == 0 => break,
            _ => {}
        }
        let significant = !matches!(token.token, Token::Whitespace(_));
        cursor.advance();
        if significant {
            end = cursor.offset();
        }
    }

    end
}

/// After a derived table's closing parenthesis, take an optional
/// `[AS] alias`. Leaves the cursor untouched when no alias follows.
fn consume_derived_alias(cursor: &mut TokenCursor<'_>, vocabulary: &JoinVocabulary) {
    let saved = cursor.pos();
    cursor.skip_whitespace();
    if cursor.check_keyword(Keyword::AS) {
        cursor.advance();
        cursor.skip_whitespace();
    }

    let is_alias = match cursor.current_token().map(|t| &t.token) {
        Some(Token::Word(w)) => {
            w.quote_style.is_some()
                || !(at_clause_end(cursor)
                    || join_condition_kind(cursor).is_some()
                    || match_join(cursor, vocabulary).is_some())
        }
        _ => false,
    };

    if is_alias {
        cursor.advance();
    } else {
        cursor.set_pos(saved);
    }
}
