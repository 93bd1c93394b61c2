//! Text format of `.strings` files.
//!
//! A file is a sequence of blocks, each a comment followed by one assignment:
//!
//! ```text
//! /* Greeting shown on the home screen */
//! "Hello" = "Hello";
//! ```
//!
//! Decoding scans each `(comment, assignment)` pair as a single unit, so a
//! missing comment or a stray assignment is reported at the line where it
//! occurs instead of shifting every following comment onto the wrong key.

use std::fmt::{self, Write};

use crate::core::table::{LocalisationEntry, LocalisationTable};

const LINE_ENDING: &str = "\n";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct DecodeError {
    /// 1-based line where the offending block starts.
    pub line: usize,
    pub kind: DecodeErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    UnterminatedComment,
    UnterminatedString,
    /// An assignment appeared without a comment in front of it.
    MissingComment { key: String },
    /// A comment was not followed by an assignment.
    MissingEntry,
    Unexpected {
        expected: &'static str,
        found: String,
    },
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeErrorKind::UnterminatedComment => write!(f, "unterminated comment"),
            DecodeErrorKind::UnterminatedString => write!(f, "unterminated string"),
            DecodeErrorKind::MissingComment { key } => {
                write!(f, "entry \"{}\" has no preceding comment", key)
            }
            DecodeErrorKind::MissingEntry => write!(f, "comment is not followed by an entry"),
            DecodeErrorKind::Unexpected { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
        }
    }
}

/// Parse `.strings` text into a table.
///
/// When a key appears twice the later block wins.
pub fn decode(text: &str) -> Result<LocalisationTable, DecodeError> {
    let mut scanner = Scanner::new(text);
    let mut table = LocalisationTable::new();

    while let Some((key, entry)) = scanner.next_block()? {
        table.insert(key, entry);
    }

    Ok(table)
}

/// Render a table as `.strings` text, one block per key in ordinal key order.
///
/// Entries rejected by [`check_entry`] are written verbatim and will not decode.
pub fn encode(table: &LocalisationTable) -> String {
    let mut out = String::new();
    for (key, entry) in table {
        let _ = write!(
            out,
            "/* {} */{nl}\"{}\" = \"{}\";{nl}{nl}",
            entry.comment,
            key,
            entry.value,
            nl = LINE_ENDING
        );
    }
    out
}

/// Text that [`encode`] cannot write in a form [`decode`] reads back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("comment {0:?} contains \"*/\"")]
    CommentTerminator(String),
    #[error("{field} {text:?} contains an unescaped '\"'")]
    UnescapedQuote { field: &'static str, text: String },
    #[error("{field} {text:?} ends in an unescaped backslash")]
    TrailingBackslash { field: &'static str, text: String },
}

/// Check that one entry survives an encode/decode round trip.
pub fn check_entry(key: &str, entry: &LocalisationEntry) -> Result<(), EncodeError> {
    if entry.comment.contains("*/") {
        return Err(EncodeError::CommentTerminator(entry.comment.clone()));
    }
    check_quoted("key", key)?;
    check_quoted("value", &entry.value)
}

/// Mirrors the escape handling of `Scanner::quoted`.
fn check_quoted(field: &'static str, text: &str) -> Result<(), EncodeError> {
    let mut escaped = false;
    for c in text.chars() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => {
                return Err(EncodeError::UnescapedQuote {
                    field,
                    text: text.to_string(),
                });
            }
            _ => {}
        }
    }
    if escaped {
        return Err(EncodeError::TrailingBackslash {
            field,
            text: text.to_string(),
        });
    }
    Ok(())
}

/// Turn the raw text between `/*` and `*/` into the stored comment.
///
/// Bodies longer than two characters lose exactly one character at each end
/// (the padding spaces [`encode`] writes); shorter ones are trimmed.
fn normalize_comment(body: &str) -> String {
    let len = body.chars().count();
    if len > 2 {
        body.chars().skip(1).take(len - 2).collect()
    } else {
        body.trim().to_string()
    }
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self, bytes: usize) {
        let consumed = &self.src[self.pos..self.pos + bytes];
        self.line += consumed.matches('\n').count();
        self.pos += bytes;
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        let skipped = self.rest().len() - trimmed.len();
        self.advance(skipped);
    }

    fn error(&self, line: usize, kind: DecodeErrorKind) -> DecodeError {
        DecodeError { line, kind }
    }

    fn unexpected(&self, expected: &'static str) -> DecodeError {
        let found = match self.peek() {
            Some(c) => format!("'{}'", c),
            None => "end of file".to_string(),
        };
        self.error(self.line, DecodeErrorKind::Unexpected { expected, found })
    }

    fn next_block(&mut self) -> Result<Option<(String, LocalisationEntry)>, DecodeError> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            return Ok(None);
        }

        let block_line = self.line;
        if self.peek() == Some('"') {
            let key = self.quoted()?;
            return Err(self.error(block_line, DecodeErrorKind::MissingComment { key }));
        }
        if !self.rest().starts_with("/*") {
            return Err(self.unexpected("comment"));
        }

        let comment = self.comment()?;
        self.skip_whitespace();
        if self.peek() != Some('"') {
            if self.rest().is_empty() || self.rest().starts_with("/*") {
                return Err(self.error(block_line, DecodeErrorKind::MissingEntry));
            }
            return Err(self.unexpected("entry key"));
        }

        let key = self.quoted()?;
        self.skip_whitespace();
        self.expect('=', "'='")?;
        self.skip_whitespace();
        if self.peek() != Some('"') {
            return Err(self.unexpected("entry value"));
        }
        let value = self.quoted()?;
        self.skip_whitespace();
        self.expect(';', "';'")?;

        Ok(Some((key, LocalisationEntry::new(value, comment))))
    }

    fn expect(&mut self, c: char, expected: &'static str) -> Result<(), DecodeError> {
        if self.peek() == Some(c) {
            self.advance(c.len_utf8());
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Consume `/* ... */` and return the normalized body.
    fn comment(&mut self) -> Result<String, DecodeError> {
        let start_line = self.line;
        self.advance(2);
        let Some(end) = self.rest().find("*/") else {
            return Err(self.error(start_line, DecodeErrorKind::UnterminatedComment));
        };
        let body = normalize_comment(&self.rest()[..end]);
        self.advance(end + 2);
        Ok(body)
    }

    /// Consume a double-quoted string and return its raw contents.
    ///
    /// Backslash escapes are kept verbatim; `\"` does not close the string.
    fn quoted(&mut self) -> Result<String, DecodeError> {
        let start_line = self.line;
        self.advance(1);

        let mut escaped = false;
        let mut end = None;
        for (i, c) in self.rest().char_indices() {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => {
                    end = Some(i);
                    break;
                }
                _ => {}
            }
        }

        let Some(end) = end else {
            return Err(self.error(start_line, DecodeErrorKind::UnterminatedString));
        };
        let contents = self.rest()[..end].to_string();
        self.advance(end + 1);
        Ok(contents)
    }
}
