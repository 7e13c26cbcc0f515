//! Tokenizer for `key`, `key=value` and `key="quoted value"` reply lines.

use std::collections::HashMap;
use std::io::Read;

use crate::error::{Error, Result};
use crate::unescape::unescape_quoted;

/// Tokens of one reply line. A repeated key keeps its last value.
pub type KeyVals = HashMap<String, String>;

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn take_while(&mut self, out: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.pos += 1;
        }
    }

    /// Collects a raw quoted literal, quotes and escapes included. The
    /// cursor must sit on the opening quote. Stops after the first unescaped
    /// closing quote or at end of input.
    fn take_quoted(&mut self) -> Result<String> {
        let mut raw = String::new();
        if let Some(open) = self.bump() {
            raw.push(open);
        }
        while let Some(c) = self.bump() {
            raw.push(c);
            match c {
                '\\' => match self.bump() {
                    Some(escaped) => raw.push(escaped),
                    None => {
                        return Err(Error::UnterminatedEscape {
                            offset: self.pos - 1,
                        });
                    }
                },
                '"' => break,
                _ => {}
            }
        }
        Ok(raw)
    }
}

/// Parses one reply line into its tokens.
///
/// A key without `=` maps to an empty value. Any malformed quoted value
/// fails the whole line and no tokens are returned.
pub fn parse_keyvals(line: &str) -> Result<KeyVals> {
    let mut keyvals = KeyVals::new();
    let mut cur = Cursor::new(line);

    cur.skip_whitespace();
    while cur.peek().is_some() {
        let mut key = String::new();
        cur.take_while(&mut key, |c| !c.is_whitespace() && c != '=');

        if cur.peek() == Some('=') {
            cur.bump();
            let val = if cur.peek() == Some('"') {
                let raw = cur.take_quoted()?;
                unescape_quoted(&raw)?
            } else {
                let mut val = String::new();
                cur.take_while(&mut val, |c| !c.is_whitespace());
                val
            };
            keyvals.insert(key, val);
        } else {
            keyvals.insert(key, String::new());
        }
        cur.skip_whitespace();
    }
    Ok(keyvals)
}

/// Parses every line of `input`, one token map per line.
///
/// Lines are split on `\n` with a trailing `\r` removed. The first bad line
/// aborts with its 1-based line number.
pub fn parse_lines(input: &str) -> Result<Vec<KeyVals>> {
    let mut out = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        match parse_keyvals(raw) {
            Ok(kv) => {
                log::trace!("line {}: {} token(s)", idx + 1, kv.len());
                out.push(kv);
            }
            Err(e) => {
                log::debug!("rejecting line {}: {}", idx + 1, e);
                return Err(Error::Line {
                    line: idx + 1,
                    source: Box::new(e),
                });
            }
        }
    }
    Ok(out)
}

pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<KeyVals>> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    parse_lines(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dangling_backslash_reports_its_offset() {
        let err = parse_keyvals(r#"k="ab\"#).unwrap_err();
        assert!(matches!(err, Error::UnterminatedEscape { offset: 5 }));
    }

    #[test]
    fn closing_quote_ends_value_mid_word() {
        let kv = parse_keyvals(r#"a="b"c"#).unwrap();
        assert_eq!(kv.get("a").map(String::as_str), Some("b"));
        assert_eq!(kv.get("c").map(String::as_str), Some(""));
    }
}
