//! String helpers used when presenting reply data.

use crate::options::WrapOptions;

/// Wraps `s` into lines of at most `width` characters, breaking only at
/// `sep`. The separator stays attached to the word before it; a word wider
/// than the remaining room starts a new line. Leading and trailing
/// whitespace of the result is trimmed.
pub fn string_wrap(s: &str, opts: &WrapOptions) -> String {
    if s.chars().count() < opts.width {
        return s.to_string();
    }
    if opts.sep.is_empty() {
        return s.trim().to_string();
    }

    let width = opts.width as isize;
    let sep_chars = opts.sep.chars().count() as isize;
    let mut wrapped = String::with_capacity(s.len());
    let mut room = width;
    let mut pos = 0usize;

    while pos < s.len() {
        let next_sep = s[pos..].find(&opts.sep).map_or(s.len(), |i| pos + i);
        let word_chars = s[pos..next_sep].chars().count() as isize;

        if word_chars > room {
            wrapped.push_str(&opts.line_ending);
            room = width;
        }

        let end = (next_sep + opts.sep.len()).min(s.len());
        wrapped.push_str(&s[pos..end]);
        room -= word_chars + sep_chars;
        pos = next_sep + opts.sep.len();
    }
    wrapped.trim().to_string()
}

/// Removes every character of `s` that does not appear in `valid`.
pub fn ensure_valid_chars(s: &str, valid: &str) -> String {
    s.chars().filter(|c| valid.contains(*c)).collect()
}

/// Obscures an e-mail address: `@` becomes ` at ` and `.` becomes ` dot `.
pub fn scrub_email_addr(email: &str) -> String {
    email.replace('@', " at ").replace('.', " dot ")
}
