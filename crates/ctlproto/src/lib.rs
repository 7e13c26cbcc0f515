#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod unescape;
pub mod keyvals;
pub mod hex;
pub mod text;

pub use crate::error::{Error, Result};
pub use crate::hex::base16_encode;
pub use crate::keyvals::{KeyVals, parse_keyvals, parse_lines, parse_reader};
pub use crate::options::WrapOptions;
pub use crate::text::{ensure_valid_chars, scrub_email_addr, string_wrap};
pub use crate::unescape::unescape_quoted;
