/// Layout for [`crate::text::string_wrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum characters per line (default: 80)
    pub width: usize,
    /// Word separator (default: a single space)
    pub sep: String,
    /// Inserted between lines, never after the last one (default: `\n`)
    pub line_ending: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 80,
            sep: " ".to_string(),
            line_ending: "\n".to_string(),
        }
    }
}
