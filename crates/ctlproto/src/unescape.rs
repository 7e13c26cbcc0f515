use crate::error::{Error, Result};

/// Returns the content of a double-quoted literal with backslash escapes
/// resolved. `\X` becomes `X` for any `X`.
///
/// The literal must start and end with an unescaped `"`. Only the last two
/// characters are inspected for an escaped terminator, so `"a\"` is
/// rejected while `"a\\"` is accepted.
pub fn unescape_quoted(literal: &str) -> Result<String> {
    let chars: Vec<char> = literal.chars().collect();
    let len = chars.len();

    if len < 2
        || chars[0] != '"'
        || chars[len - 1] != '"'
        || (literal.ends_with("\\\"") && !literal.ends_with("\\\\\""))
    {
        return Err(Error::MalformedQuote {
            literal: literal.to_string(),
        });
    }

    let mut out = String::with_capacity(len - 2);
    let mut i = 1usize;
    while i < len - 1 {
        if chars[i] == '\\' {
            i += 1;
        }
        out.push(chars[i]);
        i += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_may_consume_closing_position() {
        // `"\\"`: the escaped backslash is the whole content.
        assert_eq!(unescape_quoted(r#""\\""#).unwrap(), "\\");
    }

    #[test]
    fn lone_quote_is_too_short() {
        assert!(matches!(
            unescape_quoted("\""),
            Err(Error::MalformedQuote { .. })
        ));
    }
}
